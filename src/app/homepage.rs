use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::animation::{self, Reveal};
use crate::data::{projects, skills, PROFILE, PROJECTS};

use super::components::{ButtonSize, ButtonVariant, FloatingParticles, PremiumButton, TechBadge};
use super::featured::FeaturedProjects;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        // empty title falls through to the site default
        <Title text="" />
        <HeroSection />
        <section class="py-12">
            <div class="container mx-auto px-4">
                <BentoHighlights />
            </div>
        </section>
        <FeaturedProjects />
        <CtaSection />
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-[80vh] flex items-center overflow-hidden">
            <div class="absolute top-1/4 -right-24 w-96 h-96 rounded-full bg-gradient-to-br from-cyan-500/20 to-blue-500/10 blur-3xl pointer-events-none"></div>
            <div class="container mx-auto px-4 relative z-10">
                <div class=format!("max-w-3xl {}", Reveal::FadeInUp.class())>
                    <p class="text-primary font-medium mb-4">"Hi, I'm"</p>
                    <h1 class="text-5xl md:text-7xl font-bold text-foreground mb-4">
                        {PROFILE.name}
                    </h1>
                    <h2 class="text-2xl md:text-3xl font-semibold text-gradient mb-6">
                        {PROFILE.role}
                    </h2>
                    <p class="text-lg text-muted-foreground leading-relaxed mb-10 max-w-2xl">
                        {PROFILE.tagline}
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <PremiumButton href="/projects">"View My Work"</PremiumButton>
                        <PremiumButton href="/contact" variant=ButtonVariant::Secondary>
                            "Contact Me"
                        </PremiumButton>
                        <a
                            href=PROFILE.resume_url
                            download=""
                            class="inline-flex items-center px-6 h-[55px] rounded-lg border border-border text-muted-foreground hover:text-primary hover:border-primary transition-colors"
                        >
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BentoHighlights() -> impl IntoView {
    let spotlight = projects::featured(PROJECTS).into_iter().next();
    let frontend = skills::category("frontend")
        .map(|c| &c.items[..c.items.len().min(5)])
        .unwrap_or_default();

    let card = "rounded-2xl glass border-glow p-6 transition-all hover:-translate-y-1 hover:scale-[1.02]";

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            {spotlight
                .map(|project| {
                    view! {
                        <A
                            href=project.href()
                            attr:class=format!(
                                "lg:col-span-2 relative group overflow-hidden {card} {}",
                                Reveal::Stagger.class(),
                            )
                            attr:style=animation::stagger(0, animation::FAST / 3, animation::FAST / 3)
                        >
                            <div class="absolute inset-0 bg-gradient-to-br from-primary/10 to-purple-500/5 opacity-0 group-hover:opacity-100 transition-opacity"></div>
                            <div class="relative z-10">
                                <div class="flex items-center gap-2 mb-3">
                                    <span class="spin-slow text-primary">"✦"</span>
                                    <span class="text-sm font-medium text-primary">"Featured Project"</span>
                                </div>
                                <h3 class="text-2xl font-bold text-foreground mb-2 group-hover:text-primary transition-colors">
                                    {project.title}
                                </h3>
                                <p class="text-muted-foreground mb-4 leading-relaxed">{project.tagline}</p>
                                <div class="flex flex-wrap gap-2">
                                    {project
                                        .tech_stack
                                        .frontend
                                        .iter()
                                        .copied()
                                        .take(3)
                                        .enumerate()
                                        .map(|(i, name)| view! { <TechBadge name index=i /> })
                                        .collect_view()}
                                </div>
                            </div>
                        </A>
                    }
                })}

            <div
                class=format!("{card} {}", Reveal::Stagger.class())
                style=animation::stagger(1, animation::FAST / 3, animation::FAST / 3)
            >
                <div class="flex items-center gap-2 mb-3">
                    <span class="pulse text-primary">"◆"</span>
                    <span class="text-sm font-medium text-primary">"Experience"</span>
                </div>
                <div class="text-4xl font-bold text-foreground mb-2">
                    {format!("{}+", PROFILE.years_of_experience)}
                </div>
                <p class="text-muted-foreground leading-relaxed">
                    "Years building production-ready web applications"
                </p>
            </div>

            <div
                class=format!("{card} {}", Reveal::Stagger.class())
                style=animation::stagger(2, animation::FAST / 3, animation::FAST / 3)
            >
                <div class="flex items-center gap-2 mb-3">
                    <span class="text-primary">"</>"</span>
                    <span class="text-sm font-medium text-primary">"What I Do"</span>
                </div>
                <h4 class="text-xl font-bold text-foreground mb-2">"Full-stack Development"</h4>
                <p class="text-muted-foreground text-sm leading-relaxed">
                    "Frontend, backend, databases, and everything in between"
                </p>
            </div>

            <div
                class=format!("lg:col-span-2 {card} {}", Reveal::Stagger.class())
                style=animation::stagger(3, animation::FAST / 3, animation::FAST / 3)
            >
                <div class="flex items-center gap-2 mb-3">
                    <span class="pulse text-primary">"⚡"</span>
                    <span class="text-sm font-medium text-primary">"Currently Working On"</span>
                </div>
                <h4 class="text-xl font-bold text-foreground mb-3">{PROFILE.currently_working_on}</h4>
                <div class="flex flex-wrap gap-2">
                    {frontend
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(i, name)| view! { <TechBadge name index=i /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

const CTA_STATS: [(&str, &str); 3] = [
    ("2+", "Years of Experience"),
    ("15+", "Projects Completed"),
    ("100%", "Client Satisfaction"),
];

#[component]
fn CtaSection() -> impl IntoView {
    let headline = |text: &'static str, base| {
        animation::word_delays(text, base, animation::SLOW * 2 / 5)
            .into_iter()
            .map(|(word, style)| {
                view! {
                    <span class="inline-flex overflow-hidden">
                        <span
                            class=Reveal::TextReveal.class()
                            style=format!("{style} animation-timing-function: {};", Reveal::TextReveal.easing())
                        >
                            {word}
                        </span>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <section class="relative py-24 bg-gradient-to-b from-slate-950 via-slate-900 to-slate-950 overflow-hidden">
            <div class="absolute top-1/4 right-0 w-96 h-96 rounded-full bg-gradient-to-br from-cyan-500/20 to-blue-500/15 blur-3xl orb pointer-events-none"></div>
            <div class="absolute -bottom-32 left-0 w-96 h-96 rounded-full bg-gradient-to-tr from-purple-500/20 to-cyan-500/15 blur-3xl orb pointer-events-none"></div>
            <FloatingParticles count=6 seed=0xC7A min_size=2.0 />

            <div class="container mx-auto px-4 relative z-10">
                <div class="max-w-5xl mx-auto space-y-12">
                    <div class="flex justify-center">
                        <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-cyan-500/30 bg-cyan-500/10">
                            <span class="spin-slow text-cyan-400">"✦"</span>
                            <span class="text-sm font-bold text-cyan-400 uppercase tracking-widest">
                                "Ready to Collaborate?"
                            </span>
                        </span>
                    </div>

                    <div class="text-5xl md:text-7xl font-bold leading-tight text-center space-y-2">
                        <div class="flex flex-wrap justify-center gap-2 md:gap-3 text-foreground">
                            {headline("Ready to create something", Duration::ZERO)}
                        </div>
                        <div class="flex flex-wrap justify-center gap-2 md:gap-3 text-gradient">
                            {headline("Extraordinary?", animation::SLOW * 8 / 5)}
                        </div>
                    </div>

                    <p class="text-lg md:text-2xl text-muted-foreground max-w-4xl mx-auto text-center font-light leading-relaxed">
                        "I'm always open to discussing new projects, creative ideas, and opportunities to make an impact. Let's turn your vision into reality."
                    </p>

                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                        {CTA_STATS
                            .into_iter()
                            .enumerate()
                            .map(|(i, (number, label))| {
                                view! {
                                    <div
                                        class=format!(
                                            "group relative rounded-2xl glass border-glow p-6 transition-all hover:-translate-y-2 hover:scale-105 {}",
                                            Reveal::FadeInUp.class(),
                                        )
                                        style=animation::stagger(i, animation::MEDIUM, animation::FAST / 3)
                                    >
                                        <div class="text-3xl font-bold text-foreground group-hover:text-primary transition-colors mb-1">
                                            {number}
                                        </div>
                                        <p class="text-sm text-muted-foreground">{label}</p>
                                        <div class="absolute bottom-0 left-0 h-0.5 w-0 group-hover:w-full transition-all bg-gradient-to-r from-cyan-400 to-blue-500"></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center items-center">
                        <PremiumButton href="/contact" size=ButtonSize::Large>
                            "Get In Touch" <span aria-hidden="true">"→"</span>
                        </PremiumButton>
                        <PremiumButton
                            href="/about"
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Large
                        >
                            "About Me"
                        </PremiumButton>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center text-sm">
                        <a
                            href=PROFILE.mailto()
                            class="flex items-center gap-2 text-muted-foreground hover:text-primary transition-colors"
                        >
                            <span class="text-cyan-400">"✉"</span>
                            <span>
                                <span class="block text-xs text-muted-foreground">"Drop me an email"</span>
                                {PROFILE.email}
                            </span>
                        </a>
                        <A
                            href="/contact"
                            attr:class="flex items-center gap-2 text-muted-foreground hover:text-primary transition-colors"
                        >
                            <span class="text-purple-400">"→"</span>
                            <span>
                                <span class="block text-xs text-muted-foreground">"Quick access"</span>
                                "Go to contact page"
                            </span>
                        </A>
                    </div>
                </div>
            </div>
        </section>
    }
}
