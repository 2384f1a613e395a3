use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_router::components::*;
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use crate::animation::{self, MarqueeDirection, Reveal, Tilt, MARQUEE_REPEAT};
use crate::data::skills::{self, Skill, SkillDomain};

use super::components::FloatingParticles;

/// Per-domain marquee setup: direction and one full loop at rest.
const MARQUEES: [(SkillDomain, MarqueeDirection, Duration); 3] = [
    (SkillDomain::Frontend, MarqueeDirection::Left, Duration::from_secs(25)),
    (SkillDomain::Backend, MarqueeDirection::Right, Duration::from_secs(30)),
    (SkillDomain::Tools, MarqueeDirection::Left, Duration::from_secs(28)),
];

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <Title text="Skills" />
        <section class="relative py-24 md:py-32 bg-gradient-to-b from-slate-950 via-slate-900 to-slate-950 overflow-hidden">
            <div class="absolute top-0 right-0 w-96 h-96 rounded-full bg-gradient-to-br from-cyan-500/15 to-blue-500/10 blur-3xl orb pointer-events-none"></div>
            <div class="absolute bottom-1/3 left-0 w-96 h-96 rounded-full bg-gradient-to-tr from-purple-500/15 to-cyan-500/10 blur-3xl orb pointer-events-none"></div>
            <FloatingParticles count=20 seed=0x5C1 />

            <div class="container mx-auto px-4 relative z-10">
                <div class=format!("text-center mb-20 {}", Reveal::FadeInUp.class())>
                    <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-cyan-500/30 bg-cyan-500/10 mb-6">
                        <span class="spin-slow text-cyan-400">"⚡"</span>
                        <span class="text-sm font-bold text-cyan-400 uppercase tracking-widest">
                            "Tech Stack"
                        </span>
                    </span>
                    <h1 class="text-5xl md:text-6xl font-bold text-foreground mb-4 leading-tight">
                        "Skills & " <span class="text-gradient">"Expertise"</span>
                    </h1>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "Mastered technologies and tools that power modern web development"
                    </p>
                </div>

                <div class="space-y-8 mb-20">
                    {MARQUEES
                        .into_iter()
                        .map(|(domain, direction, base)| {
                            view! { <SkillMarquee domain direction base /> }
                        })
                        .collect_view()}
                </div>

                {SkillDomain::ALL
                    .into_iter()
                    .map(|domain| {
                        view! {
                            <div class="mb-16">
                                <h2 class="text-2xl font-bold text-foreground mb-8">{domain.label()}</h2>
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {skills::showcase(domain)
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, skill)| view! { <SkillCard skill index /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}

                <div class="text-center">
                    <A
                        href="/projects"
                        attr:class="inline-block px-8 py-4 rounded-full bg-gradient-to-r from-cyan-500 via-blue-500 to-purple-600 text-white font-bold shadow-lg shadow-cyan-500/30 hover:shadow-cyan-500/50 hover:scale-105 transition-all"
                    >
                        "View My Projects →"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillMarquee(domain: SkillDomain, direction: MarqueeDirection, base: Duration) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let items = animation::repeat_items(&skills::showcase(domain), MARQUEE_REPEAT);

    view! {
        <div class="space-y-4 mb-12">
            <div class="flex items-center gap-3">
                <div class=format!("w-1 h-8 rounded-full bg-gradient-to-b {}", domain.gradient())></div>
                <h3 class="text-xl font-bold text-foreground uppercase tracking-widest">
                    {domain.label()}
                </h3>
            </div>
            <div
                class="relative group overflow-hidden rounded-2xl border border-cyan-500/20 bg-gradient-to-r from-slate-900/50 via-slate-800/50 to-slate-900/50 backdrop-blur-xl p-4"
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
            >
                <div
                    class=format!("flex gap-6 w-max relative z-10 {}", direction.class())
                    style=move || animation::marquee_style(base, hovered.get())
                >
                    {items
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <div class="flex-shrink-0 relative group/icon">
                                    <div
                                        class=format!(
                                            "w-20 h-20 rounded-xl flex items-center justify-center bg-gradient-to-br {} border border-white/10 text-white text-3xl transition-transform group-hover/icon:scale-125",
                                            skill.domain.gradient(),
                                        )
                                        style=format!("--glow: {};", skill.domain.glow())
                                        title=format!("{} {}%", skill.name, skill.level)
                                    >
                                        <i class=skill.icon></i>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="absolute left-0 top-0 bottom-0 w-20 bg-gradient-to-r from-slate-950 to-transparent pointer-events-none z-10"></div>
                <div class="absolute right-0 top-0 bottom-0 w-20 bg-gradient-to-l from-slate-950 to-transparent pointer-events-none z-10"></div>
            </div>
        </div>
    }
}

/// Glass card that tilts toward the pointer and shows the skill's proficiency.
#[component]
fn SkillCard(skill: &'static Skill, index: usize) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(card);

    let tilt = move || {
        if is_outside.get() {
            Tilt::FLAT
        } else {
            Tilt::from_pointer(
                element_x.get(),
                element_y.get(),
                element_width.get(),
                element_height.get(),
            )
        }
    };

    // circumference of the r=25 progress ring
    let ring = 2.0 * std::f64::consts::PI * 25.0;
    let offset = ring * (1.0 - f64::from(skill.level) / 100.0);

    view! {
        <div
            node_ref=card
            class=format!(
                "group relative h-full rounded-2xl transition-transform duration-200 hover:-translate-y-2 {}",
                Reveal::FadeInUp.class(),
            )
            style=move || {
                format!(
                    "{} {}",
                    tilt().style(),
                    animation::stagger(index, Duration::ZERO, animation::FAST / 3),
                )
            }
        >
            <div class="absolute -inset-1 rounded-2xl bg-gradient-to-br from-cyan-500/20 to-purple-500/20 blur-xl -z-10 opacity-40 group-hover:opacity-80 transition-opacity"></div>
            <div class="absolute inset-px rounded-2xl bg-gradient-to-br from-slate-900/95 to-slate-800/90 backdrop-blur-xl border border-white/5"></div>
            <div class="relative z-10 p-6 h-full flex flex-col justify-between">
                <div class="space-y-4">
                    <div class=format!(
                        "inline-flex p-3 rounded-lg bg-gradient-to-br {} text-white text-2xl transition-transform duration-700 group-hover:rotate-[360deg] group-hover:scale-125",
                        skill.domain.gradient(),
                    )>
                        <i class=skill.icon></i>
                    </div>
                    <h3 class="text-lg font-bold text-foreground">{skill.name}</h3>
                </div>
                <div class="space-y-3 mt-4">
                    <div class="flex items-center justify-between">
                        <span class="text-xs text-muted-foreground uppercase tracking-wider">
                            "Proficiency"
                        </span>
                        <span class="text-sm font-bold text-cyan-400">
                            {format!("{}%", skill.level)}
                        </span>
                    </div>
                    <div class="h-1.5 bg-slate-700 rounded-full overflow-hidden">
                        <div
                            class=format!("h-full level-fill bg-gradient-to-r {}", skill.domain.gradient())
                            style=format!(
                                "width: {}%; {}",
                                skill.level,
                                animation::stagger(index, animation::FAST * 2 / 3, animation::FAST / 3),
                            )
                        ></div>
                    </div>
                </div>
                <svg class="w-16 h-16 mx-auto mt-4 -rotate-90" viewBox="0 0 60 60" aria-hidden="true">
                    <circle cx="30" cy="30" r="25" fill="none" stroke="rgba(100, 116, 139, 0.3)" stroke-width="2" />
                    <circle
                        cx="30"
                        cy="30"
                        r="25"
                        fill="none"
                        stroke="#06f9f1"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-dasharray=format!("{ring:.2}")
                        stroke-dashoffset=format!("{offset:.2}")
                    />
                </svg>
            </div>
        </div>
    }
}
