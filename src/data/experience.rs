use serde::Serialize;

use super::{require, require_all, DataError};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub start: &'static str,
    /// `None` while the position is current
    pub end: Option<&'static str>,
    pub responsibilities: &'static [&'static str],
}

impl ExperienceEntry {
    pub fn period(&self) -> String {
        format!("{} - {}", self.start, self.end.unwrap_or("Present"))
    }

    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }

    pub(crate) fn validate(&self) -> Result<(), DataError> {
        require("experience", "company", self.company)?;
        require(self.company, "role", self.role)?;
        require(self.company, "start", self.start)?;
        if let Some(end) = self.end {
            require(self.company, "end", end)?;
        }
        require_all(self.company, "responsibilities", self.responsibilities)
    }
}

/// Most recent first.
pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Full-stack Developer",
        company: "Freelance",
        start: "Jan 2024",
        end: None,
        responsibilities: &[
            "Design and ship Next.js applications backed by Express and PostgreSQL for small businesses",
            "Integrate Stripe payments and webhook-driven order workflows",
            "Own deployment pipelines on Vercel and Docker-based hosts",
        ],
    },
    ExperienceEntry {
        role: "Junior Web Developer",
        company: "Programming Hero",
        start: "Mar 2023",
        end: Some("Dec 2023"),
        responsibilities: &[
            "Built reusable React components and Tailwind design tokens for course projects",
            "Implemented REST endpoints with Node.js and MongoDB",
            "Reviewed pull requests and wrote onboarding documentation for new contributors",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period() {
        let current = EXPERIENCE[0];
        assert!(current.is_current());
        assert_eq!(current.period(), "Jan 2024 - Present");

        let past = EXPERIENCE[1];
        assert!(!past.is_current());
        assert_eq!(past.period(), "Mar 2023 - Dec 2023");
    }
}
