use leptos::prelude::*;

use super::decor::{themed, Particles, SectionHeading};
use crate::{
    content::{Project, ADDITIONAL_PROJECTS, PROJECTS},
    sections::Section,
    theme::ThemeFlag,
};

#[component]
pub fn Projects(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <section
            id=Section::Projects.id()
            class=themed(theme, "relative py-20 overflow-hidden", "bg-gray-900", "bg-gray-50")
        >
            <div class="absolute inset-0 -z-10 animate-gradient bg-gradient-to-br from-blue-500 to-purple-500"></div>
            <Particles count=25 />

            <div class="relative container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    theme
                    title="Featured Projects"
                    subtitle="Some of my recent projects showcasing skills in full-stack, AI/ML, and emerging tech."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project theme /> })
                        .collect_view()}
                </div>

                <div class="mt-16 reveal">
                    <h3 class=themed(
                        theme,
                        "text-2xl font-bold text-center mb-8",
                        "text-white",
                        "text-gray-900",
                    )>"Additional Projects"</h3>
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {ADDITIONAL_PROJECTS
                            .iter()
                            .map(|title| {
                                view! {
                                    <div class=themed(
                                        theme,
                                        "p-6 rounded-xl shadow-lg transition-all duration-300 hover:scale-105 hover:-translate-y-1",
                                        "bg-gray-800 border border-gray-700 hover:border-gray-600",
                                        "bg-white border border-gray-100 hover:border-gray-200",
                                    )>
                                        <h4 class=themed(
                                            theme,
                                            "text-lg font-semibold mb-2",
                                            "text-white",
                                            "text-gray-900",
                                        )>{*title}</h4>
                                        <div class=themed(
                                            theme,
                                            "flex space-x-2 mt-2",
                                            "text-gray-400",
                                            "text-gray-600",
                                        )>
                                            <i class="devicon-github-plain"></i>
                                            <i class="fa-solid fa-arrow-up-right-from-square"></i>
                                        </div>
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

#[component]
fn ProjectCard(project: &'static Project, theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <div class=themed(
            theme,
            "group relative rounded-xl shadow-xl overflow-hidden transition-all duration-300 hover:scale-105 hover:-translate-y-1 reveal",
            "bg-gray-900 border border-gray-700",
            "bg-white border border-gray-100",
        )>
            <div class=format!("p-6 bg-gradient-to-r {}", project.color)>
                <div class="flex items-center justify-between mb-4">
                    <i class=format!("{} text-3xl text-white", project.icon)></i>
                    <span class="text-white text-sm font-medium bg-white/20 px-3 py-1 rounded-full">
                        {project.kind}
                    </span>
                </div>
                <h3 class="text-xl font-bold text-white mb-2">{project.title}</h3>
                <p class="text-white/90 text-sm font-medium">{project.impact}</p>
            </div>

            <div class=themed(theme, "p-6", "bg-gray-800", "bg-gray-100")>
                <p class=themed(
                    theme,
                    "text-sm leading-relaxed mb-4",
                    "text-gray-300",
                    "text-gray-700",
                )>{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class=themed(
                                    theme,
                                    "px-3 py-1 text-xs rounded-full",
                                    "bg-gray-700 text-gray-300",
                                    "bg-gray-200 text-gray-700",
                                )>{*tech}</span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex space-x-3">
                    <button class=themed(
                        theme,
                        "flex-1 flex items-center justify-center space-x-2 py-2 px-4 rounded-lg font-medium transition-all duration-300 hover:scale-105 active:scale-95",
                        "bg-gray-700 text-gray-300 hover:bg-gray-600",
                        "bg-gray-200 text-gray-700 hover:bg-gray-300",
                    )>
                        <i class="devicon-github-plain"></i>
                        <span>"Code"</span>
                    </button>
                    <button class="flex-1 flex items-center justify-center space-x-2 py-2 px-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-medium rounded-lg hover:shadow-lg transition-all duration-300 hover:scale-105 active:scale-95">
                        <i class="fa-solid fa-arrow-up-right-from-square"></i>
                        <span>"Demo"</span>
                    </button>
                </div>
            </div>

            <div class=format!(
                "absolute inset-0 bg-gradient-to-r {} opacity-0 group-hover:opacity-5 transition-opacity duration-300 pointer-events-none",
                project.color,
            )></div>
        </div>
    }
}
