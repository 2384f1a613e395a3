use leptos::{either::Either, ev::SubmitEvent, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::animation::Reveal;
use crate::contact::{ContactError, ContactForm, Field, Status, SEND_DELAY, SUCCESS_DISPLAY};
use crate::data::PROFILE;

use super::components::{BrowserLoader, ButtonSize, ButtonVariant, PremiumButton};

const FIELD_CLASS: &str = "w-full px-4 py-2 rounded-md bg-card border border-primary text-foreground placeholder:text-muted-foreground focus:outline-none transition-all";

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let error = RwSignal::new(None::<ContactError>);
    let status = Memo::new(move |_| form.with(ContactForm::status));

    let UseTimeoutFnReturn {
        start: start_settle,
        ..
    } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::settle),
        SUCCESS_DISPLAY.as_millis() as f64,
    );
    let UseTimeoutFnReturn {
        start: start_send, ..
    } = use_timeout_fn(
        move |_: ()| {
            form.update(ContactForm::finish_sending);
            start_settle(());
        },
        SEND_DELAY.as_millis() as f64,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::submit) {
            Some(Ok(submission)) => {
                error.set(None);
                log::info!(
                    "contact: message accepted ({} chars)",
                    submission.message.chars().count()
                );
                start_send(());
            }
            Some(Err(e)) => {
                log::debug!("contact: submission rejected: {e}");
                error.set(Some(e));
            }
            None => {}
        }
    };

    view! {
        <Title text="Contact" />
        <BrowserLoader visible=Signal::derive(move || status.get() == Status::Loading) />

        <section class="py-24 bg-gradient-to-b from-background to-card">
            <div class="container mx-auto px-4">
                <div class=format!("max-w-3xl mx-auto text-center {}", Reveal::FadeInUp.class())>
                    <h1 class="text-5xl md:text-6xl font-bold text-foreground mb-6">
                        "Let's Work Together"
                    </h1>
                    <p class="text-lg text-muted-foreground leading-relaxed">
                        "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision. Feel free to reach out through any of the channels below."
                    </p>
                </div>
            </div>
        </section>

        <section class="py-16">
            <div class="container mx-auto px-4">
                <div class="max-w-5xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class=Reveal::SlideInLeft.class()>
                        <h2 class="text-3xl font-bold text-foreground mb-6">"Send a Message"</h2>
                        <form on:submit=on_submit class="space-y-6" novalidate=true>
                            {Field::ALL
                                .into_iter()
                                .map(|field| view! { <FormField form field /> })
                                .collect_view()}

                            {move || {
                                error
                                    .get()
                                    .map(|e| {
                                        view! {
                                            <p class="text-sm text-red-400 text-center" role="alert">
                                                {e.to_string()}
                                            </p>
                                        }
                                    })
                            }}

                            <div class="flex justify-center">
                                <PremiumButton
                                    button_type="submit"
                                    size=ButtonSize::Large
                                    disabled=Signal::derive(move || status.get().is_busy())
                                    loading=Signal::derive(move || status.get() == Status::Loading)
                                    variant=Signal::derive(move || {
                                        if status.get() == Status::Success {
                                            ButtonVariant::Success
                                        } else {
                                            ButtonVariant::Primary
                                        }
                                    })
                                >
                                    <span aria-hidden="true">"➤"</span>
                                    {move || status.get().button_label()}
                                </PremiumButton>
                            </div>

                            <Show when=move || status.get() == Status::Success>
                                <p class="text-sm text-green-500 text-center font-medium reveal-fade-up">
                                    "✓ Thank you! I'll get back to you soon."
                                </p>
                            </Show>
                        </form>
                    </div>

                    <ContactInfo />
                </div>
            </div>
        </section>
    }
}

/// One labelled input that glows while focused.
#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let wrapper = move || {
        if form.with(|f| f.is_focused(field)) {
            "rounded-md overflow-hidden field-glow"
        } else {
            "rounded-md overflow-hidden"
        }
    };
    let value = move || form.with(|f| f.value(field).to_string());
    let focus = move |_| form.update(|f| f.focus(field));
    let blur = move |_| form.update(ContactForm::blur);

    let control = if field == Field::Message {
        Either::Left(view! {
            <textarea
                id=field.id()
                name=field.id()
                required=true
                rows="6"
                placeholder=field.placeholder()
                class=format!("{FIELD_CLASS} resize-none")
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:focus=focus
                on:blur=blur
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=field.id()
                name=field.id()
                type=field.input_type()
                required=true
                placeholder=field.placeholder()
                class=FIELD_CLASS
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                on:focus=focus
                on:blur=blur
            />
        })
    };

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium text-foreground mb-2">
                {field.label()}
            </label>
            <div class=wrapper>{control}</div>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class=format!("space-y-8 {}", Reveal::SlideInRight.class())>
            <div>
                <h2 class="text-3xl font-bold text-foreground mb-6">"Direct Contact"</h2>
                <a
                    href=PROFILE.mailto()
                    class="flex items-center gap-4 p-4 rounded-xl glass border-glow transition-all group hover:-translate-y-1"
                >
                    <span class="w-12 h-12 rounded-lg bg-primary/10 flex items-center justify-center glow text-primary text-xl">
                        "✉"
                    </span>
                    <span>
                        <span class="block text-sm text-muted-foreground mb-1">"Email me at"</span>
                        <span class="block text-foreground font-medium group-hover:text-primary transition-colors">
                            {PROFILE.email}
                        </span>
                    </span>
                </a>
            </div>

            <div>
                <h3 class="text-xl font-bold text-foreground mb-4">"Connect on Social"</h3>
                <div class="space-y-3">
                    {PROFILE
                        .social_links()
                        .into_iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-4 p-4 rounded-xl glass border-glow transition-all group hover:-translate-y-1"
                                >
                                    <span class="w-10 h-10 rounded-lg bg-background flex items-center justify-center border border-border group-hover:border-primary transition-all text-muted-foreground group-hover:text-primary">
                                        <i class=social.icon></i>
                                    </span>
                                    <span>
                                        <span class="block text-foreground font-medium group-hover:text-primary transition-colors">
                                            {social.name}
                                        </span>
                                        <span class="block text-sm text-muted-foreground">
                                            {social.username}
                                        </span>
                                    </span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="p-6 rounded-xl glass border-glow glow-pulse">
                <h3 class="text-xl font-bold text-foreground mb-3">"Availability"</h3>
                <p class="text-muted-foreground leading-relaxed">
                    "I'm currently " <span class="font-medium text-primary">"available for freelance projects"</span>
                    " and open to full-time opportunities. I typically respond within 24-48 hours."
                </p>
            </div>
        </div>
    }
}
