//! Generic table: columns and rows in, rendered by `partials/table.html`
//! with an edit link and a delete button per row.

/// One rendered row; `cells` line up with the column titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: i32,
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(id: i32, cells: Vec<String>) -> Self {
        Self { id, cells }
    }
}

/// Edit links point at `{base_path}?edit={id}`; delete posts to
/// `{base_path}/{id}/delete`.
#[derive(Debug, Clone)]
pub struct Table {
    pub base_path: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(base_path: &'static str, columns: &[&'static str], rows: Vec<TableRow>) -> Self {
        Self {
            base_path,
            columns: columns.to_vec(),
            rows,
        }
    }

    /// Column count including the actions column
    pub fn span(&self) -> usize {
        self.columns.len() + 1
    }
}
