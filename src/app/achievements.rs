use leptos::prelude::*;

use super::decor::{themed, SectionHeading};
use crate::{
    content::{AchievementGroup, ACHIEVEMENTS_LEFT, ACHIEVEMENTS_RIGHT, TIMELINE_YEARS},
    sections::Section,
    theme::ThemeFlag,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[component]
pub fn Achievements(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <section
            id=Section::Achievements.id()
            class=themed(theme, "relative py-20 overflow-hidden", "bg-gray-900", "bg-gray-50")
        >
            <div class="absolute inset-0 bg-gradient-to-r from-pink-500 via-purple-500 to-indigo-500 opacity-10 blur-3xl animate-sway"></div>

            <div class="relative container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading theme title="Achievements & Certifications" />

                <div class="grid lg:grid-cols-3 gap-8 relative">
                    <AchievementColumn groups=ACHIEVEMENTS_LEFT side=Side::Left theme />
                    <Timeline theme />
                    <AchievementColumn groups=ACHIEVEMENTS_RIGHT side=Side::Right theme />
                </div>
            </div>
        </section>
    }
}

#[component]
fn AchievementColumn(
    groups: &'static [AchievementGroup],
    side: Side,
    theme: Signal<ThemeFlag>,
) -> impl IntoView {
    let (reveal, nudge) = match side {
        Side::Left => ("reveal-left", "hover:translate-x-1"),
        Side::Right => ("reveal-right", "hover:-translate-x-1"),
    };
    view! {
        <div class="space-y-8">
            {groups
                .iter()
                .map(|group| {
                    view! {
                        <div class=move || {
                            format!(
                                "p-8 rounded-xl shadow-xl transition-all duration-300 hover:scale-[1.02] {reveal} {}",
                                theme.get().pick("bg-gray-800 border border-gray-700", "bg-white border border-gray-100"),
                            )
                        }>
                            <div class="flex items-center mb-6">
                                <div class=format!(
                                    "w-12 h-12 rounded-lg bg-gradient-to-r {} flex items-center justify-center mr-4 shadow-md",
                                    group.color,
                                )>
                                    <i class=format!("{} text-xl text-white", group.icon)></i>
                                </div>
                                <h3 class=themed(
                                    theme,
                                    "text-xl font-bold",
                                    "text-white",
                                    "text-gray-900",
                                )>{group.category}</h3>
                            </div>
                            <div class="space-y-3">
                                {group
                                    .items
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <div class=move || {
                                                format!(
                                                    "flex items-center p-3 rounded-lg transition-all duration-300 border-l-4 {nudge} {}",
                                                    theme
                                                        .get()
                                                        .pick(
                                                            "hover:bg-gray-700/50 border-gray-600 hover:border-gray-500",
                                                            "hover:bg-gray-50 border-gray-200 hover:border-gray-400",
                                                        ),
                                                )
                                            }>
                                                <div class=format!(
                                                    "w-2 h-2 rounded-full bg-gradient-to-r {} mr-3 flex-shrink-0",
                                                    group.color,
                                                )></div>
                                                <span class=move || {
                                                    theme.get().pick("text-gray-300", "text-gray-700")
                                                }>{*item}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Timeline(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center relative reveal">
            <div class="absolute top-0 bottom-0 w-1 bg-gradient-to-b from-blue-600 to-purple-700 rounded-full"></div>
            <div class="flex flex-col justify-between space-y-6">
                {TIMELINE_YEARS
                    .iter()
                    .map(|year| {
                        view! {
                            <div class="relative flex flex-col items-center">
                                <div class="w-8 h-8 rounded-full bg-gradient-to-r from-blue-600 to-purple-700 flex items-center justify-center shadow-lg">
                                    <div class=themed(
                                        theme,
                                        "w-3 h-3 rounded-full",
                                        "bg-gray-900",
                                        "bg-white",
                                    )></div>
                                </div>
                                <div class=themed(
                                    theme,
                                    "mt-2 px-4 py-2 rounded-lg font-bold text-base shadow-md",
                                    "bg-gray-800 text-white",
                                    "bg-white text-gray-900",
                                )>{*year}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
