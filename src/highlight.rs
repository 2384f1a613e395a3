use std::sync::LazyLock;
use std::vec::IntoIter;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

const THEME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

struct Block {
    lang: Option<String>,
    code: String,
}

fn theme() -> Option<&'static Theme> {
    THEMES.themes.get(THEME)
}

fn syntax_for(lang: Option<&str>) -> &'static SyntaxReference {
    lang.and_then(|l| SYNTAXES.find_syntax_by_token(l))
        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text())
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders one code block as a labelled figure. Falls back to an escaped
/// `<pre>` if the theme is unavailable or highlighting fails.
fn render_block(block: &Block) -> String {
    let lang = block.lang.as_deref().filter(|l| !l.is_empty());
    let body = theme()
        .and_then(|theme| {
            highlighted_html_for_string(&block.code, &SYNTAXES, syntax_for(lang), theme).ok()
        })
        .unwrap_or_else(|| format!("<pre><code>{}</code></pre>", escape(&block.code)));
    match lang {
        Some(l) => format!(
            "<figure class=\"code-block\" data-lang=\"{0}\"><figcaption>{0}</figcaption>{1}</figure>",
            escape(l),
            body
        ),
        None => format!("<figure class=\"code-block\">{body}</figure>"),
    }
}

/// Replaces fenced and indented code blocks in a pulldown-cmark event stream
/// with pre-highlighted HTML, leaving every other event untouched.
pub fn highlight<'a, It>(events: It) -> IntoIter<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    let mut block: Option<Block> = None;
    let mut out = Vec::new();

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) if block.is_none() => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().map(str::to_string)
                    }
                    CodeBlockKind::Indented => None,
                };
                block = Some(Block {
                    lang,
                    code: String::new(),
                });
            }
            Event::Text(t) if block.is_some() => {
                if let Some(b) = block.as_mut() {
                    b.code.push_str(&t);
                }
            }
            Event::End(TagEnd::CodeBlock) => match block.take() {
                Some(b) => out.push(Event::Html(CowStr::from(render_block(&b)))),
                None => out.push(Event::End(TagEnd::CodeBlock)),
            },
            e => out.push(e),
        }
    }

    out.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{html, Parser};

    fn to_html(md: &str) -> String {
        let mut out = String::new();
        html::push_html(&mut out, highlight(Parser::new(md)));
        out
    }

    #[test]
    fn test_fenced_block_is_labelled() {
        let out = to_html("```rust\nfn main() {}\n```\n");
        assert!(out.contains("data-lang=\"rust\""));
        assert!(out.contains("<pre"));
        assert!(!out.contains("<code class=\"language-rust\">"));
    }

    #[test]
    fn test_plain_text_passes_through() {
        let out = to_html("Some *emphasis* here.");
        assert!(out.contains("<em>emphasis</em>"));
        assert!(!out.contains("code-block"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let out = to_html("```klingon\nqapla'\n```\n");
        assert!(out.contains("data-lang=\"klingon\""));
        assert!(out.contains("qapla"));
    }

    #[test]
    fn test_quote_in_fence_info_stays_inside_attribute() {
        let out = to_html("```a\"b\nx\n```\n");
        assert!(out.contains("data-lang=\"a&quot;b\""));
        assert!(!out.contains("data-lang=\"a\"b"));
    }
}
