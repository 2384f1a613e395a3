//! Static content backing every page: who the site is about, what they know,
//! what they built and where they worked.
//!
//! Everything here is `const` data compiled into both the server binary and the
//! WASM bundle, so pages render the same on either side without a fetch.

pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;

use std::collections::HashSet;

use thiserror::Error;

pub use experience::{ExperienceEntry, EXPERIENCE};
pub use profile::{Profile, SocialLink, PROFILE};
pub use projects::{Project, ProjectLinks, TechStack, FEATURED_LIMIT, PROJECTS};
pub use skills::{Skill, SkillCategory, SkillDomain, SHOWCASE_SKILLS, SKILL_CATEGORIES};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("{record}: field `{field}` is empty")]
    EmptyField { record: String, field: &'static str },
    #[error("duplicate project slug `{0}`")]
    DuplicateSlug(String),
    #[error("invalid project slug `{0}`")]
    InvalidSlug(String),
    #[error("skill `{name}` has level {level}, expected at most 100")]
    LevelOutOfRange { name: String, level: u8 },
}

pub(crate) fn require(record: &str, field: &'static str, value: &str) -> Result<(), DataError> {
    if value.trim().is_empty() {
        Err(DataError::EmptyField {
            record: record.to_string(),
            field,
        })
    } else {
        Ok(())
    }
}

pub(crate) fn require_all(
    record: &str,
    field: &'static str,
    values: &[&str],
) -> Result<(), DataError> {
    if values.is_empty() {
        return Err(DataError::EmptyField {
            record: record.to_string(),
            field,
        });
    }
    values.iter().try_for_each(|v| require(record, field, v))
}

/// Checks every static record, returning the first violation found.
pub fn validate() -> Result<(), DataError> {
    PROFILE.validate()?;
    SKILL_CATEGORIES.iter().try_for_each(SkillCategory::validate)?;
    SHOWCASE_SKILLS.iter().try_for_each(Skill::validate)?;
    EXPERIENCE.iter().try_for_each(ExperienceEntry::validate)?;
    validate_projects(PROJECTS)
}

pub fn validate_projects(projects: &[Project]) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for project in projects {
        project.validate()?;
        if !seen.insert(project.slug) {
            return Err(DataError::DuplicateSlug(project.slug.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_data_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_require_rejects_blank() {
        let err = require("profile", "name", "   ").unwrap_err();
        assert_eq!(
            err,
            DataError::EmptyField {
                record: "profile".to_string(),
                field: "name"
            }
        );
        assert!(require("profile", "name", "Atik").is_ok());
    }

    #[test]
    fn test_require_all_rejects_empty_list() {
        assert!(require_all("skills", "items", &[]).is_err());
        assert!(require_all("skills", "items", &["Rust", ""]).is_err());
        assert!(require_all("skills", "items", &["Rust", "Go"]).is_ok());
    }

    #[test]
    fn test_duplicate_slugs_rejected() {
        let doubled = [PROJECTS[0], PROJECTS[0]];
        assert_eq!(
            validate_projects(&doubled),
            Err(DataError::DuplicateSlug(PROJECTS[0].slug.to_string()))
        );
    }
}
