use leptos::prelude::*;

use super::{decor::themed, scroll::scroll_to_section};
use crate::{
    content::{INITIALS, NAME},
    sections::Section,
    theme::ThemeFlag,
};

#[component]
pub fn Navigation(
    active: Signal<Section>,
    theme: Signal<ThemeFlag>,
    set_theme: WriteSignal<ThemeFlag>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=themed(
            theme,
            "fixed top-0 left-0 right-0 z-50 backdrop-blur-md border-b transition-all duration-300 slide-down",
            "bg-gray-900/80 border-gray-700",
            "bg-white/80 border-gray-200",
        )>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-2 transition-transform hover:scale-105">
                        <div class="w-8 h-8 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 flex items-center justify-center text-white font-bold text-sm">
                            {INITIALS}
                        </div>
                        <span class=themed(
                            theme,
                            "font-bold text-lg",
                            "text-white",
                            "text-gray-900",
                        )>{NAME}</span>
                    </div>

                    // desktop: one line, no wrapping
                    <div class="hidden lg:flex items-center gap-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavButton section active theme /> })
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-2">
                        <ThemeToggle theme set_theme />
                        <button
                            class="lg:hidden p-2 rounded-lg"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <i class=move || {
                                if menu_open.get() {
                                    "fa-solid fa-xmark text-2xl"
                                } else {
                                    "fa-solid fa-bars text-2xl"
                                }
                            }></i>
                        </button>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="lg:hidden flex flex-col space-y-2 mt-2 pb-4 fade-in">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class=move || {
                                            let state = if active.get() == section {
                                                "text-blue-600 dark:text-blue-400 bg-blue-500/10"
                                            } else {
                                                theme
                                                    .get()
                                                    .pick(
                                                        "text-gray-300 hover:text-white",
                                                        "text-gray-600 hover:text-gray-900",
                                                    )
                                            };
                                            format!("px-4 py-2 rounded-lg text-left {state}")
                                        }
                                        on:click=move |_| {
                                            scroll_to_section(section);
                                            set_menu_open.set(false);
                                        }
                                    >
                                        <div class="flex items-center space-x-2">
                                            <i class=section.icon()></i>
                                            <span>{section.label()}</span>
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn NavButton(section: Section, active: Signal<Section>, theme: Signal<ThemeFlag>) -> impl IntoView {
    let is_active = move || active.get() == section;
    view! {
        <button
            class=move || {
                let state = if is_active() {
                    "text-blue-600 dark:text-blue-400"
                } else {
                    theme.get().pick("text-gray-300 hover:text-white", "text-gray-600 hover:text-gray-900")
                };
                format!(
                    "relative px-3 py-2 rounded-lg font-medium transition-all duration-300 flex items-center space-x-2 hover:scale-105 active:scale-95 {state}",
                )
            }
            aria-current=move || is_active().then_some("true")
            on:click=move |_| scroll_to_section(section)
        >
            <i class=section.icon()></i>
            <span>{section.label()}</span>
            <Show when=is_active>
                <div class="absolute inset-0 bg-blue-500/10 rounded-lg"></div>
            </Show>
        </button>
    }
}

#[component]
fn ThemeToggle(theme: Signal<ThemeFlag>, set_theme: WriteSignal<ThemeFlag>) -> impl IntoView {
    view! {
        <button
            class=themed(
                theme,
                "p-2 rounded-lg transition-colors duration-300 hover:scale-110 active:scale-90",
                "bg-gray-700 text-yellow-400 hover:bg-gray-600",
                "bg-gray-100 text-gray-600 hover:bg-gray-200",
            )
            aria-label=move || {
                if theme.get().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            aria-pressed=move || theme.get().is_dark().to_string()
            on:click=move |_| set_theme.update(ThemeFlag::toggle)
        >
            <i class=move || {
                if theme.get().is_dark() { "fa-solid fa-sun text-xl" } else { "fa-solid fa-moon text-xl" }
            }></i>
        </button>
    }
}
