//! Case-insensitive substring search over already-fetched rows.

use crate::repositories::{EmployeeDetails, SkillWithEmployees};

/// True when `query` is blank or occurs in any of `fields`, ignoring case
pub fn matches_any(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

/// Searches first name, last name, position and contact info
pub fn filter_employees<'a>(employees: &'a [EmployeeDetails], query: &str) -> Vec<&'a EmployeeDetails> {
    employees
        .iter()
        .filter(|details| {
            let e = &details.employee;
            matches_any(
                query,
                &[&e.first_name, &e.last_name, &e.position, &e.contact_info],
            )
        })
        .collect()
}

/// Searches skill name and description
pub fn filter_skills<'a>(skills: &'a [SkillWithEmployees], query: &str) -> Vec<&'a SkillWithEmployees> {
    skills
        .iter()
        .filter(|s| matches_any(query, &[&s.skill.skill_name, &s.skill.description]))
        .collect()
}
