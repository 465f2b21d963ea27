use leptos::prelude::*;

use super::decor::{themed, Particles, SectionHeading};
use crate::{
    content::{SKILL_CATEGORIES, SOFT_SKILLS},
    sections::Section,
    theme::ThemeFlag,
};

#[component]
pub fn Skills(theme: Signal<ThemeFlag>) -> impl IntoView {
    let heading = move |text: &'static str| {
        view! {
            <h3 class=themed(
                theme,
                "text-2xl font-bold mb-8 text-center",
                "text-white",
                "text-gray-900",
            )>{text}</h3>
        }
    };

    view! {
        <section id=Section::Skills.id() class="relative py-20 overflow-hidden">
            <div class="absolute inset-0 -z-10 opacity-25 blur-[80px] animate-gradient bg-gradient-to-r from-blue-900 via-purple-600 to-amber-500"></div>
            <Particles count=30 class="bg-white/30" />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative">
                <SectionHeading theme title="Skills & Expertise" />

                <div class="mb-16 reveal">
                    {heading("Technical Skills")}
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {SKILL_CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <div class=themed(
                                        theme,
                                        "p-6 rounded-xl shadow-xl transition-all duration-300 backdrop-blur-md hover:scale-105 hover:-translate-y-2",
                                        "bg-gray-800/70 border border-gray-700",
                                        "bg-white/80 border border-gray-100",
                                    )>
                                        <div class=format!(
                                            "w-12 h-12 rounded-lg bg-gradient-to-r {} flex items-center justify-center mb-4 shadow-lg",
                                            category.color,
                                        )>
                                            <i class=format!("{} text-xl text-white", category.icon)></i>
                                        </div>
                                        <h4 class=themed(
                                            theme,
                                            "text-lg font-bold mb-3",
                                            "text-white",
                                            "text-gray-900",
                                        )>{category.title}</h4>
                                        <div class="flex flex-wrap gap-2">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class=themed(
                                                            theme,
                                                            "px-3 py-1 text-sm rounded-full cursor-pointer transition-all duration-300 shadow-sm hover:scale-110 hover:text-white",
                                                            "bg-gray-700 text-gray-300 hover:bg-gray-500",
                                                            "bg-gray-100 text-gray-700 hover:bg-gray-600",
                                                        )>{*skill}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="reveal">
                    {heading("Soft & Professional Skills")}
                    <div class="grid sm:grid-cols-2 lg:grid-cols-5 gap-4">
                        {SOFT_SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class=themed(
                                        theme,
                                        "p-6 rounded-xl text-center transition-all duration-300 backdrop-blur-md hover:scale-105",
                                        "bg-gray-800/70 border border-gray-700 hover:border-gray-600",
                                        "bg-white/80 border border-gray-100 hover:border-gray-200 shadow-lg hover:shadow-xl",
                                    )>
                                        <i class=move || {
                                            format!(
                                                "{} text-3xl mb-3 {}",
                                                skill.icon,
                                                theme.get().pick("text-gray-400", "text-gray-600"),
                                            )
                                        }></i>
                                        <p class=themed(
                                            theme,
                                            "font-medium",
                                            "text-gray-300",
                                            "text-gray-700",
                                        )>{skill.name}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
