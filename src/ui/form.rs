//! Form cards for the management pages, rendered by `partials/form.html`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    TextArea,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub name: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
    pub options: Vec<SelectOption>,
}

impl FormField {
    fn new(label: &'static str, name: &'static str, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            label,
            name,
            kind,
            value: value.into(),
            required: false,
            options: Vec::new(),
        }
    }

    pub fn text(label: &'static str, name: &'static str, value: impl Into<String>) -> Self {
        Self::new(label, name, FieldKind::Text, value)
    }

    pub fn date(label: &'static str, name: &'static str, value: impl Into<String>) -> Self {
        Self::new(label, name, FieldKind::Date, value)
    }

    pub fn textarea(label: &'static str, name: &'static str, value: impl Into<String>) -> Self {
        Self::new(label, name, FieldKind::TextArea, value)
    }

    /// A select over `(value, label)` pairs, led by an empty `placeholder` option
    pub fn select(
        label: &'static str,
        name: &'static str,
        placeholder: &str,
        choices: impl IntoIterator<Item = (String, String)>,
        selected: &str,
    ) -> Self {
        let options = std::iter::once((String::new(), placeholder.to_string()))
            .chain(choices)
            .map(|(value, label)| SelectOption {
                selected: !selected.is_empty() && value == selected,
                value,
                label,
            })
            .collect();

        Self {
            options,
            required: true,
            ..Self::new(label, name, FieldKind::Select, selected)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_select(&self) -> bool {
        self.kind == FieldKind::Select
    }

    pub fn is_textarea(&self) -> bool {
        self.kind == FieldKind::TextArea
    }

    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Date => "date",
            _ => "text",
        }
    }
}

/// Creates at `base_path`, or updates at `base_path/{id}` in edit mode
#[derive(Debug, Clone)]
pub struct FormCard {
    pub heading: String,
    pub base_path: &'static str,
    pub action: String,
    pub submit: &'static str,
    pub editing: bool,
    pub fields: Vec<FormField>,
}

impl FormCard {
    pub fn new(entity: &str, base_path: &'static str, editing: Option<i32>, fields: Vec<FormField>) -> Self {
        match editing {
            Some(id) => Self {
                heading: format!("Edit {entity}"),
                base_path,
                action: format!("{base_path}/{id}"),
                submit: "Update",
                editing: true,
                fields,
            },
            None => Self {
                heading: format!("Add {entity}"),
                base_path,
                action: base_path.to_string(),
                submit: "Add",
                editing: false,
                fields,
            },
        }
    }
}
