use leptos::{html, prelude::*};

use super::decor::{themed, Particles, SectionHeading};
use crate::{
    contact::{ContactError, ContactMessage},
    content::{CONTACT_INFO, RESUME_PATH, SOCIAL_LINKS},
    sections::Section,
    theme::ThemeFlag,
};

const INPUT_BASE: &str = "w-full px-4 py-3 rounded-lg backdrop-blur-md border transition-all duration-300 focus:ring-2 focus:ring-blue-500 focus:border-transparent";
const INPUT_DARK: &str = "bg-gray-700/50 border-gray-600 text-white placeholder-gray-400";
const INPUT_LIGHT: &str = "bg-white/50 border-gray-300 text-gray-900 placeholder-gray-500";

#[component]
pub fn Contact(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <section
            id=Section::Contact.id()
            class=themed(theme, "py-20 relative overflow-hidden", "bg-gray-900", "bg-gray-50")
        >
            <div class="absolute inset-0 -z-10 animate-spin-very-slow">
                <div class="absolute inset-0 bg-gradient-to-r from-pink-500 via-purple-500 to-blue-500 opacity-30 blur-3xl"></div>
            </div>
            <div class="absolute inset-0 -z-10">
                <Particles count=30 />
            </div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeading
                    theme
                    title="Let's Connect"
                    subtitle="Ready to collaborate on exciting projects or discuss opportunities? Let's turn ideas into reality together."
                />

                <div class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <div class="space-y-8 reveal-left">
                        <ContactDetails theme />
                        <div class="space-y-4">
                            <a
                                href=RESUME_PATH
                                download=""
                                class="w-full flex items-center justify-center space-x-3 py-4 px-6 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold rounded-xl shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-[1.02]"
                            >
                                <i class="fa-solid fa-download"></i>
                                <span>"Download Resume"</span>
                            </a>
                            <SocialLinks theme />
                        </div>
                    </div>
                    <ContactForm theme />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <div class=themed(
            theme,
            "p-8 rounded-2xl backdrop-blur-md shadow-2xl border",
            "bg-gray-800/50 border-gray-700/50",
            "bg-white/50 border-gray-200/50",
        )>
            <h3 class=themed(
                theme,
                "text-2xl font-bold mb-6",
                "text-white",
                "text-gray-900",
            )>"Get In Touch"</h3>
            <div class="space-y-4">
                {CONTACT_INFO
                    .iter()
                    .map(|info| {
                        view! {
                            <a
                                href=info.href
                                class=themed(
                                    theme,
                                    "flex items-center space-x-4 p-4 rounded-lg transition-all duration-300 hover:translate-x-1",
                                    "hover:bg-gray-700/50",
                                    "hover:bg-gray-100/50",
                                )
                            >
                                <div class="w-12 h-12 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 flex items-center justify-center">
                                    <i class=format!("{} text-xl text-white", info.icon)></i>
                                </div>
                                <div>
                                    <p class=themed(
                                        theme,
                                        "font-medium",
                                        "text-gray-300",
                                        "text-gray-600",
                                    )>{info.label}</p>
                                    <p class=themed(
                                        theme,
                                        "font-semibold",
                                        "text-white",
                                        "text-gray-900",
                                    )>{info.value}</p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SocialLinks(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-3">
            {SOCIAL_LINKS
                .iter()
                .map(|social| {
                    view! {
                        <a
                            href=social.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=social.label
                            class=move || {
                                format!(
                                    "flex flex-col items-center justify-center py-4 px-4 rounded-xl backdrop-blur-md shadow-lg border transition-all duration-300 hover:scale-110 active:scale-90 {} {}",
                                    theme
                                        .get()
                                        .pick(
                                            "bg-gray-800/50 border-gray-700/50 text-gray-300",
                                            "bg-white/50 border-gray-200/50 text-gray-600",
                                        ),
                                    social.hover,
                                )
                            }
                        >
                            <i class=format!("{} text-2xl", social.icon)></i>
                            <span class="text-xs mt-2 font-medium">{social.label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ContactForm(theme: Signal<ThemeFlag>) -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<ContactError>);

    let label = move |text: &'static str, target: &'static str| {
        view! {
            <label
                for=target
                class=themed(theme, "block text-sm font-medium mb-2", "text-gray-300", "text-gray-700")
            >
                {text}
            </label>
        }
    };

    view! {
        <div class=themed(
            theme,
            "p-8 rounded-2xl backdrop-blur-md shadow-2xl border reveal-right",
            "bg-gray-800/50 border-gray-700/50",
            "bg-white/50 border-gray-200/50",
        )>
            <h3 class=themed(
                theme,
                "text-2xl font-bold mb-6",
                "text-white",
                "text-gray-900",
            )>"Send a Message"</h3>
            <form
                class="space-y-6"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let (Some(name), Some(email), Some(message)) = (
                        name_ref.get_untracked(),
                        email_ref.get_untracked(),
                        message_ref.get_untracked(),
                    ) else {
                        return;
                    };
                    let msg = ContactMessage::new(name.value(), email.value(), message.value());
                    set_error.set(msg.submit().err());
                }
            >
                <div>
                    {label("Name", "contact_name")}
                    <input
                        id="contact_name"
                        node_ref=name_ref
                        type="text"
                        name="name"
                        placeholder="Your Name"
                        required
                        class=themed(theme, INPUT_BASE, INPUT_DARK, INPUT_LIGHT)
                    />
                </div>
                <div>
                    {label("Email", "contact_email")}
                    <input
                        id="contact_email"
                        node_ref=email_ref
                        type="email"
                        name="email"
                        placeholder="your.email@example.com"
                        required
                        class=themed(theme, INPUT_BASE, INPUT_DARK, INPUT_LIGHT)
                    />
                </div>
                <div>
                    {label("Message", "contact_message")}
                    <textarea
                        id="contact_message"
                        node_ref=message_ref
                        name="message"
                        rows="5"
                        placeholder="Your message here..."
                        required
                        class=move || {
                            format!(
                                "{INPUT_BASE} resize-none {}",
                                theme.get().pick(INPUT_DARK, INPUT_LIGHT),
                            )
                        }
                    ></textarea>
                </div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            view! {
                                <p class="text-sm text-red-500" role="alert">
                                    {e.to_string()}
                                </p>
                            }
                        })
                }}
                <button
                    type="submit"
                    class="w-full flex items-center justify-center space-x-3 py-3 px-6 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold rounded-lg shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-[1.02] active:scale-[0.98]"
                >
                    <i class="fa-solid fa-paper-plane"></i>
                    <span>"Send Message"</span>
                </button>
            </form>
        </div>
    }
}
