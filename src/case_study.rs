use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

#[cfg(feature = "ssr")]
use crate::highlight::highlight;
#[cfg(feature = "ssr")]
use crate::data::projects;

/// Rendered case studies keyed by slug. The server fills it once per document;
/// the browser caches whatever it has fetched.
pub static GLOBAL_CASE_STUDY_CACHE: LazyLock<DashMap<String, CaseStudy>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content/projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

pub fn document_name(slug: &str) -> String {
    format!("{slug}.md")
}

pub fn has_document(slug: &str) -> bool {
    Assets::iter().any(|name| name == document_name(slug))
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct CaseStudyMeta {
    pub title: String,
    pub role: String,
    pub timeline: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseStudy {
    pub slug: String,
    pub meta: CaseStudyMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseStudyError {
    #[error("no case study for `{0}`")]
    NotFound(String),
    #[error("couldn't parse case study `{0}`")]
    ParseError(String),
}

#[cfg(feature = "ssr")]
pub fn get_case_study(slug: &str) -> Result<CaseStudy, CaseStudyError> {
    let cache = &*GLOBAL_CASE_STUDY_CACHE;
    if let Some(hit) = cache.get(slug) {
        return Ok(hit.clone());
    }
    if projects::find(slug).is_none() {
        return Err(CaseStudyError::NotFound(slug.to_string()));
    }
    let file = Assets::get(&document_name(slug))
        .ok_or_else(|| CaseStudyError::NotFound(slug.to_string()))?;
    let source = std::str::from_utf8(&file.data)
        .map_err(|_| CaseStudyError::ParseError(slug.to_string()))?;
    let study = render(slug, source)?;
    cache.insert(slug.to_string(), study.clone());
    Ok(study)
}

#[cfg(feature = "ssr")]
fn render(slug: &str, source: &str) -> Result<CaseStudy, CaseStudyError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<CaseStudyMeta>(source)
        .ok_or_else(|| {
            tracing::warn!(slug, "case study front matter is missing or malformed");
            CaseStudyError::ParseError(slug.to_string())
        })?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let events = highlight(parser);
    let mut content = String::new();
    pulldown_cmark::html::push_html(&mut content, events);

    Ok(CaseStudy {
        slug: slug.to_string(),
        meta: parsed.data,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PROJECTS;

    #[test]
    fn test_every_project_has_a_document() {
        for project in PROJECTS {
            assert!(has_document(project.slug), "missing case study for {}", project.slug);
        }
    }

    #[test]
    fn test_document_name() {
        assert_eq!(document_name("devboard"), "devboard.md");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_get_case_study_renders_markdown() {
        let study = get_case_study("shopsphere").expect("case study renders");
        assert_eq!(study.meta.title, "ShopSphere");
        assert!(!study.meta.highlights.is_empty());
        assert!(study.content.contains("<h2"));
        assert!(!study.content.contains("timeline:"));
        assert!(GLOBAL_CASE_STUDY_CACHE.contains_key("shopsphere"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_unknown_slug_is_not_found() {
        assert_eq!(
            get_case_study("nope"),
            Err(CaseStudyError::NotFound("nope".to_string()))
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_render_requires_front_matter() {
        assert_eq!(
            render("bare", "# Just a heading"),
            Err(CaseStudyError::ParseError("bare".to_string()))
        );
    }
}
