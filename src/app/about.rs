use leptos::prelude::*;

use super::decor::{themed, Particles, SectionHeading};
use crate::{
    content::{CAREER_GOAL, INITIALS, INTRO, NAME, RESUME_PATH, TECH_BADGES},
    sections::Section,
    theme::ThemeFlag,
};

#[component]
pub fn About(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <section
            id=Section::About.id()
            class=themed(
                theme,
                "min-h-screen pt-16 py-20 relative overflow-hidden",
                "bg-gray-800",
                "bg-white",
            )
        >
            <div class="absolute inset-0 -z-10 animate-gradient bg-gradient-to-br from-blue-500 to-purple-500"></div>
            <Particles count=25 />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeading theme title="About Me" />

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="reveal-left">
                        <div class=themed(
                            theme,
                            "text-lg leading-relaxed space-y-6",
                            "text-gray-300",
                            "text-gray-600",
                        )>
                            <p>
                                "Hi, I'm "
                                <strong class=move || {
                                    theme.get().pick("text-white", "text-gray-900")
                                }>{NAME}</strong>
                                {INTRO}
                            </p>
                            <div class=themed(theme, "p-6 rounded-xl", "bg-gray-700/50", "bg-gray-50")>
                                <h3 class=themed(
                                    theme,
                                    "text-xl font-bold mb-3",
                                    "text-white",
                                    "text-gray-900",
                                )>"Career Goal"</h3>
                                <p class="italic">{CAREER_GOAL}</p>
                            </div>
                        </div>

                        <div class="mt-8 reveal">
                            <h4 class=themed(
                                theme,
                                "text-lg font-semibold mb-4",
                                "text-white",
                                "text-gray-900",
                            )>"Technical Expertise"</h4>
                            <div class="flex flex-wrap gap-3">
                                {TECH_BADGES
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <div class=themed(
                                                theme,
                                                "px-4 py-2 rounded-full border-2 transition-transform hover:scale-110",
                                                "border-gray-600 bg-gray-700/50",
                                                "border-gray-200 bg-gray-50",
                                            )>
                                                <span class=format!(
                                                    "font-medium {}",
                                                    tech.color,
                                                )>{tech.name}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="flex flex-wrap gap-4 mt-8 reveal">
                            <a
                                href=RESUME_PATH
                                download=""
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center space-x-2 px-6 py-3 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold rounded-lg shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-105"
                            >
                                <i class="fa-solid fa-download"></i>
                                <span>"Download Resume"</span>
                            </a>
                        </div>
                    </div>

                    <div class="flex justify-center reveal-right">
                        <div class="relative w-64 h-64 flex items-center justify-center rounded-full bg-gradient-to-r from-blue-600 to-purple-600 shadow-xl animate-glow hover:scale-105 transition-transform">
                            <div class="absolute inset-4 rounded-full border-2 border-white/20 animate-spin-slow"></div>
                            <div class="absolute inset-8 rounded-full border-2 border-white/10 animate-spin-reverse"></div>
                            <span class="text-6xl font-extrabold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                                {INITIALS}
                            </span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
