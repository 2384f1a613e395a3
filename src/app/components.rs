use leptos::{either::Either, prelude::*};
use leptos_router::components::*;

use crate::animation::{self, Reveal};
use crate::data::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
}

impl ButtonVariant {
    fn gradient(self) -> &'static str {
        match self {
            Self::Primary => "conic-gradient(from 0deg, #06f9f1 0%, #0ea5e9 25%, #3b82f6 50%, #06f9f1 75%, #06f9f1 100%)",
            Self::Secondary => "conic-gradient(from 0deg, #a855f7 0%, #ec4899 25%, #f97316 50%, #a855f7 75%, #a855f7 100%)",
            Self::Success => "conic-gradient(from 0deg, #10b981 0%, #14b8a6 25%, #06b6d4 50%, #10b981 75%, #10b981 100%)",
        }
    }

    fn glow(self) -> &'static str {
        match self {
            Self::Primary => "rgba(6, 249, 241, 0.35)",
            Self::Secondary => "rgba(168, 85, 247, 0.35)",
            Self::Success => "rgba(16, 185, 129, 0.35)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn frame(self) -> &'static str {
        match self {
            Self::Small => "w-[140px] h-[45px]",
            Self::Medium => "w-[180px] h-[55px]",
            Self::Large => "w-[220px] h-[65px]",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Small => "w-[110px] h-[35px] text-sm",
            Self::Medium => "w-[156px] h-[45px] text-base",
            Self::Large => "w-[190px] h-[50px] text-lg",
        }
    }
}

fn button_frame(size: ButtonSize, loading: bool) -> String {
    // no lift while a request is in flight
    let hover = if loading { "" } else { "hover:-translate-y-0.5" };
    format!(
        "premium-button relative rounded-lg overflow-hidden flex items-center justify-center font-semibold cursor-pointer group transition-all duration-300 {hover} disabled:opacity-50 disabled:cursor-not-allowed disabled:hover:translate-y-0 focus:outline-none focus:ring-2 focus:ring-primary {}",
        size.frame()
    )
}

/// Button with a slowly rotating conic-gradient rim. Renders as a router link
/// when `href` is set. `loading` disables the button and shows a spinner.
#[component]
pub fn PremiumButton(
    #[prop(into, default = Signal::stored(ButtonVariant::Primary))] variant: Signal<ButtonVariant>,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] href: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let rim_style = move || {
        let v = variant.get();
        format!(
            "background: {}; box-shadow: 0 0 24px {};",
            v.gradient(),
            v.glow()
        )
    };
    let inner = view! {
        <span class="premium-button-rim absolute inset-[-5%] rounded-lg blur-md opacity-80" style=rim_style></span>
        <span class=format!(
            "relative z-10 flex items-center justify-center gap-2 rounded-md bg-background/90 text-foreground {}",
            size.label(),
        )>
            <Show when=move || loading.get()>
                <span
                    class="w-4 h-4 rounded-full border-2 border-current border-t-transparent animate-spin"
                    aria-hidden="true"
                ></span>
            </Show>
            {children()}
        </span>
    };

    match href {
        Some(href) => Either::Left(view! {
            <A href=href attr:class=button_frame(size, false)>
                {inner}
            </A>
        }),
        None => Either::Right(view! {
            <button
                type=button_type
                class=move || button_frame(size, loading.get())
                disabled=move || disabled.get() || loading.get()
                aria-busy=move || loading.get().to_string()
            >
                {inner}
            </button>
        }),
    }
}

/// Glass card that lifts on hover and fades in when it enters the page.
#[component]
pub fn AnimatedCard(
    #[prop(optional)] index: usize,
    #[prop(default = Reveal::FadeInUp)] reveal: Reveal,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!(
                "group relative rounded-2xl overflow-hidden glass border-glow transition-all duration-300 hover:-translate-y-2 {} {}",
                reveal.class(),
                class,
            )
            style=reveal.style(index, animation::FAST / 3, animation::FAST / 3)
        >
            <div class="absolute inset-0 bg-gradient-to-br from-primary/10 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none"></div>
            <div class="relative z-10">{children()}</div>
        </div>
    }
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class=format!("text-center mb-16 {}", Reveal::FadeInUp.class())>
            <h2 class="text-4xl md:text-5xl font-bold text-foreground mb-4">{title}</h2>
            {subtitle
                .map(|s| {
                    view! {
                        <p class="text-muted-foreground text-lg max-w-2xl mx-auto leading-relaxed">
                            {s}
                        </p>
                    }
                })}
        </div>
    }
}

#[component]
pub fn TechBadge(name: &'static str, #[prop(optional)] index: usize) -> impl IntoView {
    view! {
        <span
            class="text-xs px-2 py-1 rounded bg-gradient-to-br from-primary/10 to-background text-primary border border-primary/30 cursor-default transition-transform hover:scale-110 hover:-translate-y-0.5"
            style=format!("transition-delay: {:.2}s;", index as f64 * 0.05)
        >
            {name}
        </span>
    }
}

#[component]
pub fn FloatingParticles(
    count: usize,
    seed: u64,
    #[prop(default = 1.0)] min_size: f64,
) -> impl IntoView {
    animation::particles(count, seed, min_size)
        .into_iter()
        .map(|p| {
            view! {
                <div class="particle absolute pointer-events-none" style=p.style()>
                    <div class="w-full h-full rounded-full bg-gradient-to-br from-cyan-400 to-blue-500 blur-sm"></div>
                </div>
            }
        })
        .collect_view()
}

/// Card used by the home carousel and the projects grid.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group rounded-2xl glass border-glow overflow-hidden transition-all hover:-translate-y-2 h-full">
            <A href=project.href()>
                <div class="relative h-48 bg-background overflow-hidden">
                    <img
                        src=project.thumbnail()
                        alt=project.title
                        class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-primary/20 via-transparent to-transparent opacity-60 group-hover:opacity-80 transition-opacity"></div>
                </div>
                <div class="p-6">
                    <div class="text-xs font-medium mb-2 text-primary">{project.kind}</div>
                    <h3 class="text-xl font-bold text-foreground mb-2 group-hover:text-primary transition-colors">
                        {project.title}
                    </h3>
                    <p class="text-muted-foreground text-sm mb-4 leading-relaxed line-clamp-2">
                        {project.tagline}
                    </p>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .headline_tech()
                            .into_iter()
                            .enumerate()
                            .map(|(i, name)| view! { <TechBadge name index=i /> })
                            .collect_view()}
                    </div>
                </div>
            </A>
            <div class="flex items-center gap-3 px-6 pb-6 pt-4 border-t border-border">
                <A href=project.href() attr:class="text-sm text-primary flex items-center gap-1 group-hover:gap-2 transition-all">
                    "View Case Study" <span aria-hidden="true">"→"</span>
                </A>
                {project
                    .links
                    .demo
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-muted-foreground hover:text-primary transition-all hover:scale-125"
                                aria-label="Live demo"
                            >
                                <i class="extra-link"></i>
                                "↗"
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
                                class="text-muted-foreground hover:text-primary transition-all hover:scale-125 hover:rotate-12"
                                aria-label="Source on GitHub"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

/// Full-screen browser mock with skeleton lines, shown while a message "sends".
#[component]
pub fn BrowserLoader(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    move || {
        visible.get().then(|| {
            view! {
                <div
                    class="fixed inset-0 flex items-center justify-center bg-background/80 backdrop-blur-sm z-50"
                    role="status"
                    aria-live="polite"
                >
                    <svg viewBox="0 0 1200 800" class="w-full h-full max-w-2xl max-h-96">
                        <rect x="150" y="80" width="900" height="600" rx="12" fill="#111" stroke="#666" stroke-width="1" />
                        <rect x="150" y="80" width="900" height="50" rx="12" fill="#1a1a1a" />
                        <circle cx="190" cy="105" r="6" fill="#ff5f56" />
                        <circle cx="220" cy="105" r="6" fill="#ffbd2e" />
                        <circle cx="250" cy="105" r="6" fill="#27c93f" />
                        <rect x="290" y="95" width="700" height="20" rx="4" fill="#2d2d2d" stroke="#444" stroke-width="0.5" />
                        <rect class="skeleton" x="170" y="150" width="860" height="30" rx="4" />
                        <rect class="skeleton" x="170" y="200" width="860" height="16" rx="4" />
                        <rect class="skeleton" x="170" y="230" width="820" height="16" rx="4" />
                        <rect class="skeleton" x="170" y="260" width="840" height="16" rx="4" />
                        <rect class="skeleton" x="170" y="310" width="400" height="120" rx="8" />
                        <rect class="skeleton" x="600" y="310" width="430" height="120" rx="8" />
                        <path class="trace-flow" stroke="#22d3ee" d="M 150 150 Q 300 200, 450 180 T 750 220 Q 900 240, 1050 200" />
                        <path class="trace-flow" stroke="#3b82f6" style="animation-delay: 0.5s" d="M 150 300 Q 400 280, 600 330 T 950 320" />
                        <path class="trace-flow" stroke="#a855f7" style="animation-delay: 1s" d="M 200 450 Q 450 420, 700 480 T 1000 450" />
                        <path class="trace-flow" stroke="#06b6d4" style="animation-delay: 1.5s" d="M 150 550 Q 350 500, 550 550 T 1050 500" />
                    </svg>
                    <span class="absolute bottom-16 font-bold text-foreground">"Loading..."</span>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_button_does_not_lift() {
        let idle = button_frame(ButtonSize::Medium, false);
        assert!(idle.contains("hover:-translate-y-0.5"));
        assert!(idle.contains(ButtonSize::Medium.frame()));

        let loading = button_frame(ButtonSize::Medium, true);
        assert!(!loading.contains("hover:-translate-y-0.5"));
        assert!(loading.contains("disabled:cursor-not-allowed"));
    }
}
