//! Database seeding functionality
//!
//! Populates the reference data used for local development: project
//! statuses, accounts, projects, skills, motivators, employees and their
//! skill links. Every row is looked up by its natural key first, so running
//! the seed twice leaves the database unchanged.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, Set,
};

use crate::models::{account, employee, employee_skill, motivator, project, project_status, skill};

/// Rows inserted and rows found already present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub created: usize,
    pub existing: usize,
}

struct StatusSeed {
    status: &'static str,
    description: &'static str,
}

struct ProjectSeed {
    name: &'static str,
    description: &'static str,
    start_date: &'static str,
    planned_end_date: &'static str,
    status: &'static str,
    account: &'static str,
}

struct EmployeeSeed {
    first_name: &'static str,
    last_name: &'static str,
    position: &'static str,
    employment_type: &'static str,
    hire_date: &'static str,
    contact_info: &'static str,
}

const STATUSES: [StatusSeed; 3] = [
    StatusSeed {
        status: "Active",
        description: "Project is currently active",
    },
    StatusSeed {
        status: "Completed",
        description: "Project has been completed",
    },
    StatusSeed {
        status: "On Hold",
        description: "Project is temporarily on hold",
    },
];

const ACCOUNTS: [&str; 3] = ["TechCorp Solutions", "Innovate Inc.", "Digital Ventures"];

const PROJECTS: [ProjectSeed; 3] = [
    ProjectSeed {
        name: "E-commerce Platform",
        description: "Development of a modern e-commerce platform with advanced features",
        start_date: "2024-01-15",
        planned_end_date: "2024-06-30",
        status: "Active",
        account: "TechCorp Solutions",
    },
    ProjectSeed {
        name: "Mobile Banking App",
        description: "Secure mobile banking application for iOS and Android",
        start_date: "2024-02-01",
        planned_end_date: "2024-08-15",
        status: "Active",
        account: "Innovate Inc.",
    },
    ProjectSeed {
        name: "Data Analytics Dashboard",
        description: "Business intelligence dashboard for data visualization",
        start_date: "2023-10-01",
        planned_end_date: "2024-01-31",
        status: "Completed",
        account: "Digital Ventures",
    },
];

const SKILLS: [(&str, &str); 3] = [
    ("JavaScript", "JavaScript programming language"),
    ("React", "React frontend framework"),
    ("Node.js", "Node.js backend development"),
];

const MOTIVATORS: [(&str, &str); 2] = [
    (
        "Professional Growth",
        "Opportunities for learning and career advancement",
    ),
    ("Team Collaboration", "Working with talented team members"),
];

const EMPLOYEES: [EmployeeSeed; 3] = [
    EmployeeSeed {
        first_name: "John",
        last_name: "Doe",
        position: "Senior Developer",
        employment_type: "Full-time",
        hire_date: "2023-01-15",
        contact_info: "john.doe@company.com",
    },
    EmployeeSeed {
        first_name: "Jane",
        last_name: "Smith",
        position: "Project Manager",
        employment_type: "Full-time",
        hire_date: "2022-05-10",
        contact_info: "jane.smith@company.com",
    },
    EmployeeSeed {
        first_name: "Mike",
        last_name: "Johnson",
        position: "Frontend Developer",
        employment_type: "Contract",
        hire_date: "2023-09-01",
        contact_info: "mike.johnson@company.com",
    },
];

/// (first name, skill, proficiency level)
const EMPLOYEE_SKILLS: [(&str, &str, i32); 3] = [
    ("John", "JavaScript", 5),
    ("John", "Node.js", 4),
    ("Mike", "React", 4),
];

fn date(raw: &str) -> Result<NaiveDate> {
    raw.parse()
        .with_context(|| format!("Invalid seed date '{raw}'"))
}

/// Inserts `model` unless `existing` already holds the row
async fn insert_missing<A>(
    db: &DatabaseConnection,
    label: &str,
    existing: Option<<A::Entity as EntityTrait>::Model>,
    model: A,
    summary: &mut SeedSummary,
) -> Result<<A::Entity as EntityTrait>::Model>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    if let Some(row) = existing {
        log::info!("{} already exists, skipping", label);
        summary.existing += 1;
        return Ok(row);
    }

    log::info!("Creating {}", label);
    let row = model
        .insert(db)
        .await
        .with_context(|| format!("Failed to create {label}"))?;
    summary.created += 1;
    Ok(row)
}

/// Seeds every reference table; safe to run repeatedly
pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();
    let now = Utc::now();

    let mut statuses = Vec::new();
    for seed in &STATUSES {
        let existing = project_status::Entity::find()
            .filter(project_status::Column::Status.eq(seed.status))
            .one(db)
            .await?;
        let row = insert_missing(
            db,
            &format!("status '{}'", seed.status),
            existing,
            project_status::ActiveModel {
                status: Set(seed.status.to_string()),
                description: Set(Some(seed.description.to_string())),
                is_active: Set(true),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                ..Default::default()
            },
            &mut summary,
        )
        .await?;
        statuses.push(row);
    }

    let mut accounts = Vec::new();
    for name in ACCOUNTS {
        let existing = account::Entity::find()
            .filter(account::Column::Name.eq(name))
            .one(db)
            .await?;
        let row = insert_missing(
            db,
            &format!("account '{name}'"),
            existing,
            account::ActiveModel {
                name: Set(name.to_string()),
                created_at: Set(now.into()),
                ..Default::default()
            },
            &mut summary,
        )
        .await?;
        accounts.push(row);
    }

    for seed in &PROJECTS {
        let status_id = statuses
            .iter()
            .find(|s| s.status == seed.status)
            .map(|s| s.id)
            .with_context(|| format!("Seed status '{}' missing", seed.status))?;
        let account_id = accounts
            .iter()
            .find(|a| a.name == seed.account)
            .map(|a| a.id)
            .with_context(|| format!("Seed account '{}' missing", seed.account))?;

        let existing = project::Entity::find()
            .filter(project::Column::Name.eq(seed.name))
            .one(db)
            .await?;
        insert_missing(
            db,
            &format!("project '{}'", seed.name),
            existing,
            project::ActiveModel {
                name: Set(seed.name.to_string()),
                description: Set(Some(seed.description.to_string())),
                start_date: Set(date(seed.start_date)?),
                planned_end_date: Set(date(seed.planned_end_date)?),
                status_id: Set(status_id),
                account_id: Set(account_id),
                ..Default::default()
            },
            &mut summary,
        )
        .await?;
    }

    let mut skills = Vec::new();
    for (name, description) in SKILLS {
        let existing = skill::Entity::find()
            .filter(skill::Column::SkillName.eq(name))
            .one(db)
            .await?;
        let row = insert_missing(
            db,
            &format!("skill '{name}'"),
            existing,
            skill::ActiveModel {
                skill_name: Set(name.to_string()),
                description: Set(description.to_string()),
                ..Default::default()
            },
            &mut summary,
        )
        .await?;
        skills.push(row);
    }

    for (name, description) in MOTIVATORS {
        let existing = motivator::Entity::find()
            .filter(motivator::Column::MotivatorName.eq(name))
            .one(db)
            .await?;
        insert_missing(
            db,
            &format!("motivator '{name}'"),
            existing,
            motivator::ActiveModel {
                motivator_name: Set(name.to_string()),
                description: Set(Some(description.to_string())),
                ..Default::default()
            },
            &mut summary,
        )
        .await?;
    }

    let mut employees = Vec::new();
    for seed in &EMPLOYEES {
        let existing = employee::Entity::find()
            .filter(employee::Column::FirstName.eq(seed.first_name))
            .filter(employee::Column::LastName.eq(seed.last_name))
            .one(db)
            .await?;
        let row = insert_missing(
            db,
            &format!("employee '{} {}'", seed.first_name, seed.last_name),
            existing,
            employee::ActiveModel {
                first_name: Set(seed.first_name.to_string()),
                last_name: Set(seed.last_name.to_string()),
                position: Set(seed.position.to_string()),
                employment_type: Set(seed.employment_type.to_string()),
                hire_date: Set(date(seed.hire_date)?),
                contact_info: Set(seed.contact_info.to_string()),
                ..Default::default()
            },
            &mut summary,
        )
        .await?;
        employees.push(row);
    }

    for (first_name, skill_name, level) in EMPLOYEE_SKILLS {
        let employee_id = employees
            .iter()
            .find(|e| e.first_name == first_name)
            .map(|e| e.id)
            .with_context(|| format!("Seed employee '{first_name}' missing"))?;
        let skill_id = skills
            .iter()
            .find(|s| s.skill_name == skill_name)
            .map(|s| s.id)
            .with_context(|| format!("Seed skill '{skill_name}' missing"))?;

        let existing = employee_skill::Entity::find()
            .filter(employee_skill::Column::EmployeeId.eq(employee_id))
            .filter(employee_skill::Column::SkillId.eq(skill_id))
            .one(db)
            .await?;
        insert_missing(
            db,
            &format!("skill link '{first_name}' / '{skill_name}'"),
            existing,
            employee_skill::ActiveModel {
                employee_id: Set(employee_id),
                skill_id: Set(skill_id),
                proficiency_level: Set(level),
                ..Default::default()
            },
            &mut summary,
        )
        .await?;
    }

    log::info!(
        "Seeding completed: {} created, {} already present",
        summary.created,
        summary.existing
    );
    Ok(summary)
}
