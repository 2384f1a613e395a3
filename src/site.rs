use chrono::{DateTime, Datelike, Utc};
use serde_json::{json, Value};

use crate::data::{Profile, PROFILE};

pub const SITE_URL: &str = "https://protfolio-ten-weld.vercel.app";
pub const LOCALE: &str = "en_US";
pub const KEYWORDS: &[&str] = &[
    "full-stack developer",
    "React",
    "Next.js",
    "TypeScript",
    "Node.js",
    "portfolio",
];

/// Set by build.rs
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// "Page | Name" for inner pages; the bare default title otherwise.
pub fn page_title(profile: &Profile, title: &str) -> String {
    if title.is_empty() {
        default_title(profile)
    } else {
        format!("{title} | {}", profile.name)
    }
}

pub fn default_title(profile: &Profile) -> String {
    format!("{} - {}", profile.name, profile.role)
}

pub fn canonical_url(path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        SITE_URL.to_string()
    } else {
        format!("{SITE_URL}/{path}")
    }
}

/// schema.org `Person` document embedded in every page head.
pub fn person_json_ld(profile: &Profile) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": profile.name,
        "jobTitle": profile.role,
        "description": profile.tagline,
        "email": profile.mailto(),
        "url": SITE_URL,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": profile.location,
        },
        "sameAs": profile
            .social_links()
            .iter()
            .map(|l| l.href)
            .collect::<Vec<_>>(),
    })
}

/// Year shown in the footer. Taken from the build so server and client agree.
pub fn copyright_year() -> i32 {
    year_of(BUILD_TIME).unwrap_or(2025)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.with_timezone(&Utc).year())
}

pub fn copyright_line() -> String {
    format!(
        "© {} {}. All rights reserved.",
        copyright_year(),
        PROFILE.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(page_title(&PROFILE, "Contact"), "Contact | Asadujjaman Atik");
        assert_eq!(page_title(&PROFILE, ""), "Asadujjaman Atik - Full-stack Developer");
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(canonical_url("/"), SITE_URL);
        assert_eq!(canonical_url("/about"), format!("{SITE_URL}/about"));
        assert_eq!(canonical_url("projects/devboard"), format!("{SITE_URL}/projects/devboard"));
    }

    #[test]
    fn test_person_json_ld() {
        let doc = person_json_ld(&PROFILE);
        assert_eq!(doc["@type"], "Person");
        assert_eq!(doc["name"], PROFILE.name);
        assert_eq!(doc["sameAs"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2026-03-01T12:00:00+00:00"), Some(2026));
        assert_eq!(year_of("not a date"), None);
        assert!(copyright_year() >= 2025);
    }
}
