use regex::RegexBuilder;
use serde::Serialize;
use thiserror::Error;

use super::{require, require_all, DataError};

/// Upper bound on how many projects the home page promotes.
pub const FEATURED_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechStack {
    pub frontend: &'static [&'static str],
    pub backend: &'static [&'static str],
    pub database: &'static [&'static str],
    pub tools: &'static [&'static str],
}

impl TechStack {
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.frontend
            .iter()
            .chain(self.backend)
            .chain(self.database)
            .chain(self.tools)
            .copied()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub github: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub slug: &'static str,
    pub kind: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub tech_stack: TechStack,
    pub links: ProjectLinks,
    pub thumbnail: Option<&'static str>,
    pub featured: bool,
}

pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.svg";

impl Project {
    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    pub fn thumbnail(&self) -> &'static str {
        self.thumbnail.unwrap_or(PLACEHOLDER_THUMBNAIL)
    }

    /// The short badge list shown on cards: two frontend entries, then one backend entry.
    pub fn headline_tech(&self) -> Vec<&'static str> {
        self.tech_stack
            .frontend
            .iter()
            .take(2)
            .chain(self.tech_stack.backend.iter().take(1))
            .copied()
            .collect()
    }

    pub(crate) fn validate(&self) -> Result<(), DataError> {
        require("project", "slug", self.slug)?;
        if !is_valid_slug(self.slug) {
            return Err(DataError::InvalidSlug(self.slug.to_string()));
        }
        require(self.slug, "title", self.title)?;
        require(self.slug, "kind", self.kind)?;
        require(self.slug, "tagline", self.tagline)?;
        require(self.slug, "description", self.description)?;
        require_all(self.slug, "tech_stack.frontend", self.tech_stack.frontend)?;
        require_all(self.slug, "tech_stack.backend", self.tech_stack.backend)?;
        for link in [self.links.demo, self.links.github, self.thumbnail]
            .into_iter()
            .flatten()
        {
            require(self.slug, "links", link)?;
        }
        Ok(())
    }
}

/// Lowercase ASCII words joined by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "ShopSphere",
        slug: "shopsphere",
        kind: "Full-stack Platform",
        tagline: "Multi-vendor marketplace with real-time order tracking and Stripe payouts.",
        description: "A marketplace where independent sellers manage storefronts, inventory and payouts from one dashboard. Orders stream to buyers and sellers over WebSockets, and payments settle through Stripe Connect with webhook-driven reconciliation.",
        tech_stack: TechStack {
            frontend: &["Next.js", "TypeScript", "Tailwind CSS", "TanStack Query"],
            backend: &["Node.js", "Express.js", "Socket.IO"],
            database: &["PostgreSQL", "Prisma ORM", "Redis"],
            tools: &["Stripe", "Docker", "Vercel"],
        },
        links: ProjectLinks {
            demo: Some("https://shopsphere-demo.vercel.app"),
            github: Some("https://github.com/asadatik/shopsphere"),
        },
        thumbnail: Some("/projects/shopsphere.png"),
        featured: true,
    },
    Project {
        title: "MediCare Connect",
        slug: "medicare-connect",
        kind: "Healthcare SaaS",
        tagline: "Appointment booking and telehealth scheduling for small clinics.",
        description: "Clinics publish doctor availability, patients book slots and receive reminders, and staff see a live queue. Role-based access separates admins, doctors and patients, with JWT sessions refreshed through HTTP-only cookies.",
        tech_stack: TechStack {
            frontend: &["React", "TypeScript", "Zustand", "Tailwind CSS"],
            backend: &["Node.js", "Express.js"],
            database: &["MongoDB", "Mongoose"],
            tools: &["JWT", "Nodemailer", "Render"],
        },
        links: ProjectLinks {
            demo: Some("https://medicare-connect.vercel.app"),
            github: Some("https://github.com/asadatik/medicare-connect"),
        },
        thumbnail: Some("/projects/medicare-connect.png"),
        featured: true,
    },
    Project {
        title: "DevBoard",
        slug: "devboard",
        kind: "Developer Tool",
        tagline: "Kanban board with GitHub issue sync for small engineering teams.",
        description: "A lightweight project board that mirrors GitHub issues through webhooks, supports drag-and-drop prioritisation and keeps a per-sprint burndown. Built to replace a spreadsheet a three-person team had outgrown.",
        tech_stack: TechStack {
            frontend: &["Next.js", "TypeScript", "dnd-kit"],
            backend: &["NestJS", "GraphQL"],
            database: &["PostgreSQL", "Prisma ORM"],
            tools: &["GitHub Webhooks", "GitHub Actions"],
        },
        links: ProjectLinks {
            demo: None,
            github: Some("https://github.com/asadatik/devboard"),
        },
        thumbnail: Some("/projects/devboard.png"),
        featured: true,
    },
    Project {
        title: "Portfolio",
        slug: "portfolio",
        kind: "Personal Site",
        tagline: "This site: animated, statically backed pages rendered on the server and hydrated in the browser.",
        description: "A portfolio with animated hero, marquee and carousel components. All content is compiled in, pages are server-rendered for fast first paint, and interactions hydrate from a WebAssembly bundle.",
        tech_stack: TechStack {
            frontend: &["Leptos", "Tailwind CSS"],
            backend: &["Axum"],
            database: &[],
            tools: &["cargo-leptos", "WebAssembly"],
        },
        links: ProjectLinks {
            demo: None,
            github: Some("https://github.com/asadatik/portfolio"),
        },
        thumbnail: None,
        featured: false,
    },
];

/// Featured entries in data order, capped at [`FEATURED_LIMIT`].
pub fn featured(projects: &[Project]) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| p.featured)
        .take(FEATURED_LIMIT)
        .collect()
}

pub fn find(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid search pattern: {0}")]
    InvalidPattern(String),
}

/// Case-insensitive regex search over a project's text and stack.
/// An empty pattern matches everything.
pub fn search(pattern: &str) -> Result<Vec<&'static Project>, SearchError> {
    search_in(PROJECTS, pattern)
}

pub fn search_in<'a>(projects: &'a [Project], pattern: &str) -> Result<Vec<&'a Project>, SearchError> {
    if pattern.trim().is_empty() {
        return Ok(projects.iter().collect());
    }
    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| SearchError::InvalidPattern(e.to_string()))?;
    Ok(projects
        .iter()
        .filter(|p| {
            [p.title, p.kind, p.tagline, p.description]
                .into_iter()
                .chain(p.tech_stack.iter())
                .any(|s| re.is_match(s))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(slug: &'static str, featured: bool) -> Project {
        Project {
            slug,
            featured,
            ..PROJECTS[0]
        }
    }

    #[test]
    fn test_featured_matches_flag_in_order() {
        let got = featured(PROJECTS)
            .iter()
            .map(|p| p.slug)
            .collect::<Vec<_>>();
        let expected = PROJECTS
            .iter()
            .filter(|p| p.featured)
            .take(FEATURED_LIMIT)
            .map(|p| p.slug)
            .collect::<Vec<_>>();
        assert_eq!(got, expected);
        assert!(!got.contains(&"portfolio"));
    }

    #[test]
    fn test_featured_is_capped() {
        let projects = [
            project("a", true),
            project("b", false),
            project("c", true),
            project("d", true),
            project("e", true),
        ];
        let got = featured(&projects)
            .iter()
            .map(|p| p.slug)
            .collect::<Vec<_>>();
        assert_eq!(got, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_featured_empty() {
        let projects = [project("a", false)];
        assert!(featured(&projects).is_empty());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("devboard").map(|p| p.title), Some("DevBoard"));
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_headline_tech() {
        let p = find("shopsphere").unwrap();
        assert_eq!(p.headline_tech(), vec!["Next.js", "TypeScript", "Node.js"]);
    }

    #[test]
    fn test_thumbnail_fallback() {
        let p = find("portfolio").unwrap();
        assert_eq!(p.thumbnail(), PLACEHOLDER_THUMBNAIL);
        assert_eq!(p.href(), "/projects/portfolio");
    }

    #[test]
    fn test_slug_format() {
        assert!(is_valid_slug("medicare-connect"));
        assert!(is_valid_slug("web3"));
        assert!(!is_valid_slug("Medicare"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("with space"));
    }

    #[test]
    fn test_search_empty_returns_all() {
        assert_eq!(search("").unwrap().len(), PROJECTS.len());
        assert_eq!(search("   ").unwrap().len(), PROJECTS.len());
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_stack() {
        let slugs = search("prisma")
            .unwrap()
            .iter()
            .map(|p| p.slug)
            .collect::<Vec<_>>();
        assert_eq!(slugs, vec!["shopsphere", "devboard"]);
        let slugs = search("^LEPTOS$")
            .unwrap()
            .iter()
            .map(|p| p.slug)
            .collect::<Vec<_>>();
        assert_eq!(slugs, vec!["portfolio"]);
    }

    #[test]
    fn test_search_invalid_pattern() {
        assert!(matches!(search("(unclosed"), Err(SearchError::InvalidPattern(_))));
    }
}
