use leptos::{either::{Either, EitherOf3}, html::Input, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

#[cfg(feature = "ssr")]
use crate::case_study::get_case_study;
use crate::case_study::{CaseStudy, GLOBAL_CASE_STUDY_CACHE};
use crate::data::{projects, Project};

use super::components::{ProjectCard, TechBadge};
use super::NotFound;

#[component]
pub fn ProjectsWrapper() -> impl IntoView {
    let clicked = ArcTrigger::new();
    provide_context(clicked.clone());
    view! {
        <Title text="Projects" />
        <section class="py-24 bg-gradient-to-b from-background to-card">
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-5xl md:text-6xl font-bold text-foreground mb-6">
                    <a
                        href="/projects"
                        on:click=move |_| clicked.notify()
                        class="hover:text-primary transition-colors duration-200"
                    >
                        "Projects"
                    </a>
                </h1>
                <p class="max-w-2xl mx-auto text-lg text-muted-foreground leading-relaxed">
                    "Things I've designed, built and shipped, from storefronts to dashboards."
                </p>
            </div>
        </section>
        <div class="container mx-auto px-4 py-16">
            <Outlet />
        </div>
    }
}

#[component]
pub fn ProjectsHome() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();
    let results = move || search.with(|s| projects::search(s));

    // clicking the section heading clears the search
    let header_clicked = expect_context::<ArcTrigger>();
    Effect::watch(
        move || header_clicked.track(),
        move |_, _, _| {
            let Some(el) = input_ref.get_untracked() else {
                return;
            };
            set_search.set(String::new());
            el.set_value("");
        },
        false,
    );

    view! {
        <div class="max-w-5xl mx-auto mb-10">
            <form
                class="flex flex-col sm:flex-row gap-3 items-start sm:items-center"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let Some(el) = input_ref.get_untracked() else {
                        return;
                    };
                    set_search.set(el.value());
                }
            >
                <label for="project_search" class="font-medium text-primary whitespace-nowrap">
                    "Search (regex):"
                </label>
                <input
                    id="project_search"
                    class="flex-grow w-full sm:max-w-md px-4 py-2 rounded-md border border-border focus:outline-none focus:ring-2 focus:ring-primary bg-background text-foreground placeholder:text-muted-foreground transition-all duration-200"
                    node_ref=input_ref
                    placeholder="e.g. react|postgres"
                />
                <button
                    type="submit"
                    class="px-4 py-2 bg-primary/10 hover:bg-primary/20 text-primary rounded-md border border-primary/30 transition-all duration-200 whitespace-nowrap"
                >
                    "Search"
                </button>
            </form>
        </div>
        {move || match results() {
            Err(e) => {
                EitherOf3::A(
                    view! {
                        <p class="max-w-5xl mx-auto text-red-400" role="alert">
                            {e.to_string()}
                        </p>
                    },
                )
            }
            Ok(found) if found.is_empty() => {
                EitherOf3::B(
                    view! {
                        <p class="max-w-5xl mx-auto text-muted-foreground">
                            "No projects match that pattern."
                        </p>
                    },
                )
            }
            Ok(found) => {
                EitherOf3::C(
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {found
                                .into_iter()
                                .map(|project| view! { <ProjectCard project /> })
                                .collect_view()}
                        </div>
                    },
                )
            }
        }}
    }
}

#[server(input = GetUrl)]
pub async fn get_case_study_server(slug: String) -> Result<CaseStudy, ServerFnError> {
    get_case_study(&slug).map_err(|e| {
        tracing::warn!(%slug, error = %e, "case study unavailable");
        ServerFnError::new(e)
    })
}

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let study = Resource::new(slug, move |slug| async move {
        if projects::find(&slug).is_none() {
            return Err(ServerFnError::new(format!("no project `{slug}`")));
        }
        let cache = &*GLOBAL_CASE_STUDY_CACHE;
        if let Some(hit) = cache.get(&slug) {
            return Ok(hit.clone());
        }
        let fetched = get_case_study_server(slug.clone()).await;
        // the server caches its own renders
        #[cfg(feature = "hydrate")]
        if let Ok(study) = &fetched {
            cache.insert(slug, study.clone());
        }
        fetched
    });

    move || match projects::find(&slug()) {
        None => Either::Left(view! { <NotFound /> }),
        Some(project) => Either::Right(view! { <CaseStudyView project study /> }),
    }
}

#[component]
fn CaseStudyView(
    project: &'static Project,
    study: Resource<Result<CaseStudy, ServerFnError>>,
) -> impl IntoView {
    let stack = [
        ("Frontend", project.tech_stack.frontend),
        ("Backend", project.tech_stack.backend),
        ("Database", project.tech_stack.database),
        ("Tools", project.tech_stack.tools),
    ];

    view! {
        <Title text=project.title />
        <article class="max-w-4xl mx-auto">
            <A href="/projects" attr:class="text-sm text-muted-foreground hover:text-primary transition-colors">
                "← All projects"
            </A>
            <header class="mt-6 mb-10">
                <p class="text-sm font-medium text-primary mb-2">{project.kind}</p>
                <h2 class="text-4xl md:text-5xl font-bold text-foreground mb-4">{project.title}</h2>
                <p class="text-lg text-muted-foreground leading-relaxed mb-6">{project.description}</p>
                <div class="flex flex-wrap gap-4">
                    {project
                        .links
                        .demo
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-4 py-2 rounded-md bg-primary/10 text-primary border border-primary/30 hover:bg-primary/20 transition-colors"
                                >
                                    "Live Demo ↗"
                                </a>
                            }
                        })}
                    {project
                        .links
                        .github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="px-4 py-2 rounded-md border border-border text-muted-foreground hover:text-primary hover:border-primary transition-colors"
                                >
                                    <i class="devicon-github-plain mr-2"></i>
                                    "Source"
                                </a>
                            }
                        })}
                </div>
            </header>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-12">
                {stack
                    .into_iter()
                    .filter(|(_, items)| !items.is_empty())
                    .map(|(label, items)| {
                        view! {
                            <div class="p-4 rounded-xl glass border-glow">
                                <h3 class="text-xs uppercase tracking-wider text-muted-foreground mb-3">
                                    {label}
                                </h3>
                                <div class="flex flex-wrap gap-2">
                                    {items
                                        .iter()
                                        .copied()
                                        .enumerate()
                                        .map(|(i, name)| view! { <TechBadge name index=i /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Suspense fallback=move || {
                view! {
                    <div class="space-y-4">
                        <div class="loading-skeleton h-8 rounded"></div>
                        <div class="loading-skeleton h-6 rounded w-3/4"></div>
                        <div class="loading-skeleton h-6 rounded w-2/3"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    match study.await {
                        Ok(s) => {
                            Either::Left(
                                view! {
                                    <div class="mb-8 p-4 rounded-md border border-border bg-card">
                                        <div class="flex flex-wrap items-center gap-6 text-sm">
                                            <span class="text-primary font-medium">{s.meta.role}</span>
                                            <span class="text-muted-foreground">{s.meta.timeline}</span>
                                        </div>
                                        <ul class="mt-4 space-y-1 list-disc list-inside text-muted-foreground">
                                            {s
                                                .meta
                                                .highlights
                                                .into_iter()
                                                .map(|h| view! { <li>{h}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                    <div class="prose prose-invert max-w-none" inner_html=s.content></div>
                                },
                            )
                        }
                        Err(_) => {
                            Either::Right(
                                view! {
                                    <p class="text-muted-foreground">
                                        "The write-up for this project isn't available right now."
                                    </p>
                                },
                            )
                        }
                    }
                })}
            </Suspense>
        </article>
    }
}
