use leptos::prelude::*;
use leptos_router::components::*;
use leptos_use::use_interval_fn;

use crate::animation::EASE_IN_OUT;
use crate::carousel::{Carousel, HEARTBEAT};
use crate::data::{projects, PROJECTS};

use super::components::{ProjectCard, SectionHeading};

/// Home page carousel over the featured projects.
///
/// All timing lives in [`Carousel`]; the component only feeds it a heartbeat
/// and forwards clicks and hover.
#[component]
pub fn FeaturedProjects() -> impl IntoView {
    let featured = StoredValue::new(projects::featured(PROJECTS));
    let len = featured.with_value(Vec::len);
    let carousel = RwSignal::new(Carousel::new(len));

    // only notify subscribers when something visible changed
    use_interval_fn(
        move || {
            carousel.maybe_update(|c| {
                let before = (c.index(), c.is_autoplay());
                c.elapse(HEARTBEAT);
                before != (c.index(), c.is_autoplay())
            });
        },
        HEARTBEAT.as_millis() as u64,
    );

    let index = Memo::new(move |_| carousel.with(Carousel::index));
    let autoplay = Memo::new(move |_| carousel.with(Carousel::is_autoplay));
    let hovered = Memo::new(move |_| carousel.with(Carousel::is_hovered));

    let slide = move || {
        let i = index.get();
        let direction = carousel.with_untracked(Carousel::direction);
        featured.with_value(|f| f.get(i).copied()).map(|project| {
            view! {
                <div
                    class=format!("max-w-2xl mx-auto {}", direction.enter_class())
                    style=format!("animation-timing-function: {EASE_IN_OUT};")
                >
                    <ProjectCard project />
                </div>
            }
        })
    };

    let dots = move || {
        (0..len)
            .map(|i| {
                view! {
                    <button
                        class=move || {
                            if index.get() == i {
                                "h-2 w-8 rounded-full bg-primary transition-all"
                            } else {
                                "h-2 w-2 rounded-full bg-muted-foreground/40 hover:bg-muted-foreground transition-all"
                            }
                        }
                        aria-label=format!("Go to project {}", i + 1)
                        aria-current=move || (index.get() == i).then_some("true")
                        on:click=move |_| {
                            carousel
                                .update(|c| {
                                    c.go_to(i);
                                })
                        }
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <section class="py-24 relative">
            <div class="container mx-auto px-4">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="A selection of projects showcasing full-stack development, modern UI design, and scalable architecture"
                />
                <Show
                    when=move || { len > 0 }
                    fallback=|| {
                        view! {
                            <p class="text-center text-muted-foreground">"Projects are on their way."</p>
                        }
                    }
                >
                    <div
                        class="relative"
                        on:mouseenter=move |_| carousel.update(|c| c.set_hovered(true))
                        on:mouseleave=move |_| carousel.update(|c| c.set_hovered(false))
                    >
                        <div class="overflow-hidden px-12">{slide}</div>
                        <Show when=move || { len > 1 }>
                            <button
                                class="absolute left-0 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full glass border-glow text-primary hover:scale-110 transition-transform"
                                aria-label="Previous project"
                                on:click=move |_| carousel.update(Carousel::prev)
                            >
                                "‹"
                            </button>
                            <button
                                class="absolute right-0 top-1/2 -translate-y-1/2 w-10 h-10 rounded-full glass border-glow text-primary hover:scale-110 transition-transform"
                                aria-label="Next project"
                                on:click=move |_| carousel.update(Carousel::next)
                            >
                                "›"
                            </button>
                            <div class="flex items-center justify-center gap-2 mt-8">{dots}</div>
                        </Show>
                    </div>
                    <p class="sr-only" aria-live="polite">
                        {move || {
                            format!(
                                "Project {} of {}{}",
                                index.get() + 1,
                                len,
                                if !autoplay.get() {
                                    ", autoplay paused"
                                } else if hovered.get() {
                                    ", paused while hovered"
                                } else {
                                    ""
                                },
                            )
                        }}
                    </p>
                </Show>

                <div class="text-center mt-12">
                    <A
                        href="/projects"
                        attr:class="inline-flex items-center gap-2 px-6 py-3 rounded-lg border border-primary text-primary hover:bg-primary/10 transition-colors"
                    >
                        "View All Projects"
                        <span aria-hidden="true">"→"</span>
                    </A>
                </div>
            </div>
        </section>
    }
}
