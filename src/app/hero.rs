use leptos::prelude::*;

use super::{
    decor::{themed, Particles},
    scroll::scroll_to_section,
};
use crate::{
    content::{EMAIL, NAME, TAGLINE},
    sections::Section,
    theme::ThemeFlag,
};

#[component]
pub fn Hero(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <div class=themed(
            theme,
            "relative min-h-screen flex items-center justify-center overflow-hidden",
            "bg-gray-900",
            "bg-gray-50",
        )>
            <div class="absolute inset-0">
                <div class="absolute inset-0 opacity-10 animate-gradient bg-gradient-to-r from-blue-500 via-purple-500 to-cyan-500"></div>
                <Particles count=20 class="bg-blue-500 opacity-30" />
            </div>

            <div class="relative z-10 text-center px-4 sm:px-6 lg:px-8">
                <h1 class=themed(
                    theme,
                    "text-4xl md:text-6xl lg:text-7xl font-bold mb-6 fade-in-up [animation-delay:200ms]",
                    "text-white",
                    "text-gray-900",
                )>
                    "Hello, I'm "
                    <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {NAME}
                    </span>
                </h1>

                <div class=themed(
                    theme,
                    "text-lg md:text-xl lg:text-2xl mb-8 max-w-4xl mx-auto leading-relaxed fade-in-up [animation-delay:500ms]",
                    "text-gray-300",
                    "text-gray-600",
                )>{TAGLINE}</div>

                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center fade-in-up [animation-delay:800ms]">
                    <button
                        class="px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold rounded-full shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-105 active:scale-95"
                        on:click=move |_| scroll_to_section(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                    <button
                        class=themed(
                            theme,
                            "px-8 py-4 border-2 font-semibold rounded-full transition-all duration-300 hover:scale-105 active:scale-95",
                            "border-gray-600 text-gray-300 hover:border-gray-400 hover:text-white",
                            "border-gray-300 text-gray-700 hover:border-gray-500 hover:text-gray-900",
                        )
                        on:click=move |_| scroll_to_section(Section::About)
                    >
                        "Learn More"
                    </button>
                </div>

                <div class="mt-6 flex justify-center gap-6 fade-in-up [animation-delay:1000ms]">
                    <a
                        href=format!("mailto:{EMAIL}")
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Email"
                        class="flex items-center gap-2 px-6 py-3 rounded-full shadow-md transition-all duration-300 bg-gray-800 text-white hover:bg-gray-700"
                    >
                        <i class="fa-solid fa-envelope"></i>
                        <span class="font-medium">"Email"</span>
                    </a>
                </div>
            </div>

            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 cursor-pointer animate-bounce"
                aria-label="Scroll to about"
                on:click=move |_| scroll_to_section(Section::About)
            >
                <i class=move || {
                    format!(
                        "fa-solid fa-chevron-down text-3xl {}",
                        theme.get().pick("text-gray-400", "text-gray-600"),
                    )
                }></i>
            </button>
        </div>
    }
}
