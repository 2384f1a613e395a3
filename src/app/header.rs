use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::data::PROFILE;

const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Projects", "/projects"),
    ("About", "/about"),
    ("Skills", "/skills"),
    ("Contact", "/contact"),
];

/// Home only matches itself; every other link also owns its sub-paths, so a
/// case study keeps "Projects" lit.
fn is_active(pathname: &str, href: &str) -> bool {
    let pathname = match pathname.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    if href == "/" {
        return pathname == "/";
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // close the mobile menu whenever the route changes
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let link_class = move |href: &'static str| {
        move || {
            if is_active(&pathname.get(), href) {
                "text-primary font-medium transition-colors"
            } else {
                "text-muted-foreground hover:text-foreground transition-colors"
            }
        }
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-40 glass border-b border-border">
            <nav class="container mx-auto px-4 h-16 flex items-center justify-between">
                <A href="/" attr:class="text-xl font-bold text-gradient">
                    {PROFILE.initials}
                </A>
                <ul class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <A href=href attr:class=link_class(href)>
                                        {label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="md:hidden text-foreground p-2"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <ul class="md:hidden flex flex-col gap-4 px-4 pb-6 pt-2 border-t border-border">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <A href=href attr:class=link_class(href)>
                                        {label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_is_exact() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/about", "/"));
    }

    #[test]
    fn test_nested_routes_light_their_parent() {
        assert!(is_active("/projects", "/projects"));
        assert!(is_active("/projects/", "/projects"));
        assert!(is_active("/projects/devboard", "/projects"));
        assert!(!is_active("/projectsx", "/projects"));
        assert!(!is_active("/contact", "/projects"));
    }
}
