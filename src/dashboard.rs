//! # Dashboard Aggregation
//!
//! Counts and recent items shown on the dashboard. The statistics are
//! computed in memory from the project, employee and account listings, so the
//! same code serves the HTML dashboard (fed from the repositories) and the
//! `dashboard` CLI command (fed from the JSON API).

use serde::{Deserialize, Serialize};

use crate::repositories::{AccountWithProjects, EmployeeDetails, ProjectWithRelations};

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_ON_HOLD: &str = "On Hold";
pub const EMPLOYMENT_FULL_TIME: &str = "Full-time";
pub const EMPLOYMENT_CONTRACT: &str = "Contract";

/// Number of items listed in each "recent" panel
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusLabel {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountName {
    pub name: String,
}

/// The parts of a project listing the dashboard reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub status: Option<StatusLabel>,
    #[serde(default)]
    pub account: Option<AccountName>,
}

impl ProjectSummary {
    pub fn status_label(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.status.as_str())
    }
}

impl From<&ProjectWithRelations> for ProjectSummary {
    fn from(project: &ProjectWithRelations) -> Self {
        Self {
            id: project.project.id,
            name: project.project.name.clone(),
            status: project.status.as_ref().map(|s| StatusLabel {
                status: s.status.clone(),
            }),
            account: project.account.as_ref().map(|a| AccountName {
                name: a.name.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub employment_type: String,
    /// Only the count matters here
    #[serde(default)]
    pub project_assignments: Vec<serde_json::Value>,
}

impl EmployeeSummary {
    pub fn has_projects(&self) -> bool {
        !self.project_assignments.is_empty()
    }
}

impl From<&EmployeeDetails> for EmployeeSummary {
    fn from(details: &EmployeeDetails) -> Self {
        Self {
            id: details.employee.id,
            first_name: details.employee.first_name.clone(),
            last_name: details.employee.last_name.clone(),
            position: details.employee.position.clone(),
            employment_type: details.employee.employment_type.clone(),
            project_assignments: details
                .project_assignments
                .iter()
                .map(|a| serde_json::json!({ "id": a.assignment.id }))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<serde_json::Value>,
}

impl From<&AccountWithProjects> for AccountSummary {
    fn from(account: &AccountWithProjects) -> Self {
        Self {
            id: account.account.id,
            name: account.account.name.clone(),
            projects: account
                .projects
                .iter()
                .map(|p| serde_json::json!({ "id": p.id }))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub on_hold: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub total: usize,
    pub full_time: usize,
    pub contract: usize,
    pub with_projects: usize,
}

impl EmployeeStats {
    pub fn compute(employees: &[EmployeeSummary]) -> Self {
        let with_type = |label: &str| {
            employees
                .iter()
                .filter(|e| e.employment_type == label)
                .count()
        };

        Self {
            total: employees.len(),
            full_time: with_type(EMPLOYMENT_FULL_TIME),
            contract: with_type(EMPLOYMENT_CONTRACT),
            with_projects: employees.iter().filter(|e| e.has_projects()).count(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStats {
    pub total: usize,
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub projects: ProjectStats,
    pub employees: EmployeeStats,
    pub accounts: AccountStats,
}

impl DashboardStats {
    pub fn compute(
        projects: &[ProjectSummary],
        employees: &[EmployeeSummary],
        accounts: &[AccountSummary],
    ) -> Self {
        let with_status =
            |label: &str| projects.iter().filter(|p| p.status_label() == Some(label)).count();
        Self {
            projects: ProjectStats {
                total: projects.len(),
                active: with_status(STATUS_ACTIVE),
                completed: with_status(STATUS_COMPLETED),
                on_hold: with_status(STATUS_ON_HOLD),
            },
            employees: EmployeeStats::compute(employees),
            accounts: AccountStats {
                total: accounts.len(),
            },
        }
    }
}

/// Statistics plus the first few items of each collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_projects: Vec<ProjectSummary>,
    pub recent_employees: Vec<EmployeeSummary>,
    pub recent_accounts: Vec<AccountSummary>,
}

impl Dashboard {
    pub fn build(
        mut projects: Vec<ProjectSummary>,
        mut employees: Vec<EmployeeSummary>,
        mut accounts: Vec<AccountSummary>,
    ) -> Self {
        let stats = DashboardStats::compute(&projects, &employees, &accounts);
        projects.truncate(RECENT_LIMIT);
        employees.truncate(RECENT_LIMIT);
        accounts.truncate(RECENT_LIMIT);

        Self {
            stats,
            recent_projects: projects,
            recent_employees: employees,
            recent_accounts: accounts,
        }
    }
}

/// Counters on the skills page
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillStats {
    pub total: usize,
    /// Skills held by at least one employee
    pub in_use: usize,
    /// Mean of each skill's average proficiency, unheld skills counting as 0,
    /// rounded to one decimal
    pub average_proficiency: f64,
    /// Skills matching the current search
    pub found: usize,
}

impl SkillStats {
    /// `levels` holds the proficiency levels recorded for each skill
    pub fn compute(levels: &[Vec<i32>], found: usize) -> Self {
        let total = levels.len();
        let average_proficiency = if total == 0 {
            0.0
        } else {
            let sum: f64 = levels
                .iter()
                .filter(|held| !held.is_empty())
                .map(|held| held.iter().map(|&l| f64::from(l)).sum::<f64>() / held.len() as f64)
                .sum();
            (sum / total as f64 * 10.0).round() / 10.0
        };

        Self {
            total,
            in_use: levels.iter().filter(|held| !held.is_empty()).count(),
            average_proficiency,
            found,
        }
    }
}

/// Integer percentage of `part` in `total`, rounded; 0 when `total` is 0
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(id: i32, status: &str) -> ProjectSummary {
        ProjectSummary {
            id,
            name: format!("Project {id}"),
            status: Some(StatusLabel {
                status: status.to_string(),
            }),
            account: None,
        }
    }

    fn employee(id: i32, employment_type: &str, assignments: usize) -> EmployeeSummary {
        EmployeeSummary {
            id,
            first_name: "Test".to_string(),
            last_name: format!("Employee {id}"),
            position: "Engineer".to_string(),
            employment_type: employment_type.to_string(),
            project_assignments: (0..assignments).map(|i| json!({ "id": i })).collect(),
        }
    }

    fn account(id: i32) -> AccountSummary {
        AccountSummary {
            id,
            name: format!("Account {id}"),
            projects: Vec::new(),
        }
    }

    #[test]
    fn test_single_item_example() {
        let stats = DashboardStats::compute(
            &[project(1, "Active")],
            &[employee(1, "Full-time", 0)],
            &[account(1)],
        );

        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            json!({
                "projects": {"total": 1, "active": 1, "completed": 0, "onHold": 0},
                "employees": {"total": 1, "fullTime": 1, "contract": 0, "withProjects": 0},
                "accounts": {"total": 1}
            })
        );
    }

    #[test]
    fn test_counts_by_label() {
        let projects = vec![
            project(1, "Active"),
            project(2, "Completed"),
            project(3, "On Hold"),
            project(4, "Active"),
            ProjectSummary {
                status: None,
                ..project(5, "")
            },
        ];
        let employees = vec![
            employee(1, "Full-time", 2),
            employee(2, "Contract", 1),
            employee(3, "Part-time", 0),
        ];

        let stats = DashboardStats::compute(&projects, &employees, &[]);

        assert_eq!(
            stats.projects,
            ProjectStats {
                total: 5,
                active: 2,
                completed: 1,
                on_hold: 1
            }
        );
        assert_eq!(
            stats.employees,
            EmployeeStats {
                total: 3,
                full_time: 1,
                contract: 1,
                with_projects: 2
            }
        );
        assert_eq!(stats.accounts.total, 0);
    }

    #[test]
    fn test_recent_items_truncated_to_five() {
        let projects = (1..=8).map(|id| project(id, "Active")).collect();
        let accounts = (1..=3).map(account).collect();

        let dashboard = Dashboard::build(projects, Vec::new(), accounts);

        assert_eq!(dashboard.stats.projects.total, 8);
        assert_eq!(dashboard.recent_projects.len(), 5);
        assert_eq!(dashboard.recent_projects[0].id, 1);
        assert_eq!(dashboard.recent_accounts.len(), 3);
        assert!(dashboard.recent_employees.is_empty());
    }

    #[test]
    fn test_employee_stats_alone() {
        let stats = EmployeeStats::compute(&[
            employee(1, "Full-time", 1),
            employee(2, "Full-time", 0),
            employee(3, "Contract", 3),
            employee(4, "Intern", 0),
        ]);

        assert_eq!(
            stats,
            EmployeeStats {
                total: 4,
                full_time: 2,
                contract: 1,
                with_projects: 2
            }
        );
    }

    #[test]
    fn test_skill_stats() {
        // Averages per skill: 4.5, 3.0, 0 (unheld) -> 7.5 / 3 = 2.5
        let stats = SkillStats::compute(&[vec![4, 5], vec![3], Vec::new()], 2);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.in_use, 2);
        assert_eq!(stats.average_proficiency, 2.5);
        assert_eq!(stats.found, 2);
    }

    #[test]
    fn test_skill_average_rounds_to_one_decimal() {
        // (5 + 4 + 4) / 3 = 4.333...
        let stats = SkillStats::compute(&[vec![5], vec![4], vec![4]], 3);
        assert_eq!(stats.average_proficiency, 4.3);

        let empty = SkillStats::compute(&[], 0);
        assert_eq!(empty.average_proficiency, 0.0);
        assert_eq!(empty.in_use, 0);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(4, 4), 100);
    }

    #[test]
    fn test_summary_reads_api_json() {
        let employee: EmployeeSummary = serde_json::from_value(json!({
            "id": 7,
            "firstName": "Jane",
            "lastName": "Smith",
            "position": "Project Manager",
            "employmentType": "Full-time",
            "hireDate": "2022-05-10",
            "contactInfo": "jane.smith@company.com",
            "employeeSkills": [],
            "projectAssignments": [{"id": 1, "projectId": 2}]
        }))
        .unwrap();

        assert!(employee.has_projects());
    }
}
