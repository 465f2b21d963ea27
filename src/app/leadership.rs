use leptos::prelude::*;

use super::decor::{themed, SectionHeading};
use crate::{
    content::{Club, CLUBS, LEADERSHIP_PHILOSOPHY, LEADERSHIP_STATS},
    sections::Section,
    theme::ThemeFlag,
};

#[component]
pub fn Leadership(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <section
            id=Section::Leadership.id()
            class=themed(theme, "relative py-20 overflow-hidden", "bg-gray-800", "bg-white")
        >
            <div class="absolute inset-0 -z-10 rounded-2xl opacity-20 animate-pan bg-[length:400%_400%] bg-[linear-gradient(270deg,#fbbf24,#f97316,#3b82f6,#9333ea)]"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    title="Leadership & Community"
                    subtitle="Active participation in various clubs and organizations, fostering innovation, community service, and technical excellence."
                />

                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-16 reveal">
                    {LEADERSHIP_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class=themed(
                                    theme,
                                    "text-center p-6 rounded-xl shadow-lg transition-transform hover:scale-105",
                                    "bg-gray-900 border border-gray-700",
                                    "bg-gray-50 border border-gray-100",
                                )>
                                    <div class="text-3xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent mb-2">
                                        {stat.value}
                                    </div>
                                    <div class=themed(
                                        theme,
                                        "text-sm font-medium",
                                        "text-gray-400",
                                        "text-gray-600",
                                    )>{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {CLUBS.iter().map(|club| view! { <ClubCard club theme /> }).collect_view()}
                </div>

                <div class=themed(
                    theme,
                    "mt-16 p-8 rounded-xl text-center reveal",
                    "bg-gray-900 border border-gray-700",
                    "bg-gray-50 border border-gray-100",
                )>
                    <h3 class=themed(
                        theme,
                        "text-2xl font-bold mb-4",
                        "text-white",
                        "text-gray-900",
                    )>"Leadership Philosophy"</h3>
                    <p class=themed(
                        theme,
                        "text-lg leading-relaxed max-w-3xl mx-auto",
                        "text-gray-300",
                        "text-gray-600",
                    )>{LEADERSHIP_PHILOSOPHY}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ClubCard(club: &'static Club, theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <div class=themed(
            theme,
            "group relative p-6 rounded-xl shadow-lg transition-all duration-300 hover:scale-[1.02] hover:-translate-y-1 reveal",
            "bg-gray-900 border border-gray-700",
            "bg-white border border-gray-100",
        )>
            <div class="flex items-start mb-4">
                <div class=format!(
                    "w-12 h-12 rounded-lg bg-gradient-to-r {} flex items-center justify-center flex-shrink-0 mr-4",
                    club.color,
                )>
                    <i class=format!("{} text-xl text-white", club.icon)></i>
                </div>
                <div>
                    <h3 class=themed(
                        theme,
                        "font-bold mb-1",
                        "text-white",
                        "text-gray-900",
                    )>{club.name}</h3>
                    <span class=format!(
                        "text-sm px-3 py-1 rounded-full bg-gradient-to-r {} text-white",
                        club.color,
                    )>{club.role}</span>
                </div>
            </div>

            <p class=themed(
                theme,
                "text-sm mb-4",
                "text-gray-400",
                "text-gray-600",
            )>{club.description}</p>

            <div class="space-y-2">
                <h4 class=themed(
                    theme,
                    "text-sm font-semibold",
                    "text-gray-300",
                    "text-gray-700",
                )>"Key Contributions:"</h4>
                <ul class="space-y-1">
                    {club
                        .contributions
                        .iter()
                        .map(|contribution| {
                            view! {
                                <li class=themed(
                                    theme,
                                    "flex items-center text-xs",
                                    "text-gray-400",
                                    "text-gray-600",
                                )>
                                    <div class=format!(
                                        "w-1.5 h-1.5 rounded-full bg-gradient-to-r {} mr-2 flex-shrink-0",
                                        club.color,
                                    )></div>
                                    {*contribution}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class=format!(
                "absolute inset-0 bg-gradient-to-r {} opacity-0 group-hover:opacity-5 transition-opacity duration-300 rounded-xl pointer-events-none",
                club.color,
            )></div>
        </div>
    }
}
