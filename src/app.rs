mod about;
mod components;
mod contact;
mod featured;
mod footer;
mod header;
mod homepage;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::data::PROFILE;
use crate::site;

use about::AboutPage;
use contact::ContactPage;
use footer::Footer;
use header::Header;
use homepage::HomePage;
use projects::{CaseStudyPage, ProjectsHome, ProjectsWrapper};
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let person = site::person_json_ld(&PROFILE).to_string();

    view! {
        // an empty page title becomes "Name - Role"
        <Title formatter=|title: String| site::page_title(&PROFILE, &title) />
        <Meta name="description" content=PROFILE.tagline />
        <Meta name="keywords" content=site::KEYWORDS.join(", ") />
        <Meta name="author" content=PROFILE.name />
        <Meta name="creator" content=PROFILE.name />
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content=site::LOCALE />
        <Meta property="og:url" content=site::SITE_URL />
        <Meta property="og:site_name" content=PROFILE.name />
        <Meta property="og:title" content=site::default_title(&PROFILE) />
        <Meta property="og:description" content=PROFILE.tagline />
        <Script type_="application/ld+json">{person}</Script>

        <Router>
            <CanonicalLink />
            <Header />
            <main class="min-h-screen pt-16">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <ParentRoute path=path!("/projects") view=ProjectsWrapper>
                        <Route path=path!("") view=ProjectsHome />
                        <Route path=path!(":slug") view=CaseStudyPage />
                    </ParentRoute>
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn CanonicalLink() -> impl IntoView {
    let pathname = use_location().pathname;
    move || view! { <Link rel="canonical" href=site::canonical_url(&pathname.get()) /> }
}

/// Rendered for unknown routes and unknown project slugs.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <section class="py-32">
            <div class="container mx-auto px-4 text-center">
                <p class="text-sm font-medium text-primary uppercase tracking-widest mb-4">"404"</p>
                <h1 class="text-4xl md:text-5xl font-bold text-foreground mb-6">
                    "This page wandered off"
                </h1>
                <p class="text-muted-foreground mb-8">
                    "The page you're looking for doesn't exist or has moved."
                </p>
                <A href="/" attr:class="text-primary hover:underline">
                    "Back to home"
                </A>
            </div>
        </section>
    }
}
