use leptos::prelude::*;
use leptos_router::components::*;

use crate::data::PROFILE;
use crate::site;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border bg-background">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <A href="/" attr:class="text-2xl font-bold text-gradient mb-4 inline-block">
                            {PROFILE.initials}
                        </A>
                        <p class="text-muted-foreground leading-relaxed">{PROFILE.tagline}</p>
                    </div>

                    <div>
                        <h3 class="font-semibold text-foreground mb-4">"Quick Links"</h3>
                        <ul class="space-y-2 text-muted-foreground">
                            <li>
                                <A href="/projects" attr:class="hover:text-primary transition-colors">
                                    "Projects"
                                </A>
                            </li>
                            <li>
                                <A href="/about" attr:class="hover:text-primary transition-colors">
                                    "About"
                                </A>
                            </li>
                            <li>
                                <A href="/contact" attr:class="hover:text-primary transition-colors">
                                    "Contact"
                                </A>
                            </li>
                            <li>
                                <a
                                    href=PROFILE.resume_url
                                    download=""
                                    class="hover:text-primary transition-colors"
                                >
                                    "Download Resume"
                                </a>
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h3 class="font-semibold text-foreground mb-4">"Connect"</h3>
                        <div class="flex gap-4">
                            {PROFILE
                                .footer_links()
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-muted-foreground hover:text-primary transition-colors text-xl"
                                            aria-label=link.name
                                        >
                                            <i class=link.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=PROFILE.mailto()
                                class="text-muted-foreground hover:text-primary transition-colors text-xl"
                                aria-label="Email"
                            >
                                "✉"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="pt-8 border-t border-border text-center text-sm text-muted-foreground">
                    <p>{site::copyright_line()}</p>
                    <p class="mt-2">"Built with Rust, Leptos & Tailwind CSS"</p>
                </div>
            </div>
        </footer>
    }
}
