use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::animation::{self, Reveal};
use crate::data::{skills, ExperienceEntry, EXPERIENCE, PROFILE};

use super::components::AnimatedCard;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <section class="py-24 bg-gradient-to-b from-background to-card">
            <div class="container mx-auto px-4">
                <div class=format!("max-w-4xl mx-auto {}", Reveal::FadeInUp.class())>
                    <h1 class="text-5xl md:text-6xl font-bold text-foreground mb-6">"About Me"</h1>
                    <div class="flex flex-wrap gap-6 text-muted-foreground mb-8">
                        <span class="flex items-center gap-2">
                            <span class="text-primary">"⌖"</span>
                            {PROFILE.location}
                        </span>
                        <span class="flex items-center gap-2">
                            <span class="text-primary">"◆"</span>
                            {PROFILE.role}
                        </span>
                        <span class="flex items-center gap-2">
                            <span class="text-primary">"◷"</span>
                            {format!("{}+ years experience", PROFILE.years_of_experience)}
                        </span>
                    </div>
                </div>
            </div>
        </section>

        <section class="py-16">
            <div class="container mx-auto px-4">
                <div class=format!(
                    "max-w-4xl mx-auto space-y-6 text-lg text-muted-foreground leading-relaxed {}",
                    Reveal::FadeInUp.class(),
                )>
                    {PROFILE.bio.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                </div>
            </div>
        </section>

        <section class="py-16 bg-card">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-4xl font-bold text-foreground mb-4">"Skills & Technologies"</h2>
                    <div class="h-1 w-20 bg-primary rounded mb-12"></div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {skills::ABOUT_CATEGORIES
                            .into_iter()
                            .filter_map(skills::category)
                            .enumerate()
                            .map(|(i, category)| {
                                view! {
                                    <AnimatedCard index=i reveal=Reveal::alternating(i) class="p-6">
                                        <h3 class="text-xl font-bold text-primary mb-4">{category.title}</h3>
                                        <div class="flex flex-wrap gap-2">
                                            {category
                                                .items
                                                .iter()
                                                .map(|item| {
                                                    view! {
                                                        <span class="px-3 py-1.5 text-sm rounded-full bg-card text-muted-foreground border border-border hover:border-primary hover:text-primary transition-all">
                                                            {*item}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </AnimatedCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>

        <section class="py-16">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-4xl font-bold text-foreground mb-4">"Experience"</h2>
                    <div class="h-1 w-20 bg-primary rounded mb-12"></div>
                    <ol class="relative border-l border-border space-y-10 pl-8">
                        {EXPERIENCE
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| view! { <TimelineEntry entry index=i /> })
                            .collect_view()}
                    </ol>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: &'static ExperienceEntry, index: usize) -> impl IntoView {
    view! {
        <li
            class=format!("relative {}", Reveal::FadeInUp.class())
            style=Reveal::FadeInUp.style(index, Duration::ZERO, animation::FAST / 3)
        >
            <span class=if entry.is_current() {
                "absolute -left-[2.4rem] top-1.5 w-4 h-4 rounded-full bg-primary glow"
            } else {
                "absolute -left-[2.4rem] top-1.5 w-4 h-4 rounded-full bg-border"
            }></span>
            <h3 class="text-xl font-bold text-foreground">{entry.role}</h3>
            <p class="text-primary font-medium">{entry.company}</p>
            <p class="text-sm text-muted-foreground mb-4">{entry.period()}</p>
            <ul class="list-disc list-inside space-y-1 text-muted-foreground">
                {entry.responsibilities.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
            </ul>
        </li>
    }
}
