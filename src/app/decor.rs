use leptos::prelude::*;

use crate::theme::ThemeFlag;

/// Class list that swaps its theme-dependent part when the theme changes.
pub fn themed(
    theme: Signal<ThemeFlag>,
    base: &'static str,
    dark: &'static str,
    light: &'static str,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || format!("{base} {}", theme.get().pick(dark, light))
}

/// Floating background dots. Positions are derived from the index so the
/// server and client render identical markup.
#[component]
pub fn Particles(
    count: usize,
    #[prop(default = "bg-white opacity-20")] class: &'static str,
) -> impl IntoView {
    (0..count)
        .map(|i| {
            let left = (i as f64 * 0.618_034).fract() * 100.0;
            let top = (i as f64 * 0.414_214 + 0.37).fract() * 100.0;
            let duration = 10 + (i * 7) % 10;
            view! {
                <div
                    class=format!("absolute w-2 h-2 rounded-full pointer-events-none animate-drift {class}")
                    style=format!(
                        "top: {top:.1}%; left: {left:.1}%; animation-duration: {duration}s;",
                    )
                ></div>
            }
        })
        .collect_view()
}

#[component]
pub fn SectionHeading(
    theme: Signal<ThemeFlag>,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16 reveal">
            <h2 class=themed(
                theme,
                "text-4xl md:text-5xl font-bold mb-4",
                "text-white",
                "text-gray-900",
            )>{title}</h2>
            <div class="w-24 h-1 bg-gradient-to-r from-blue-500 to-purple-500 mx-auto rounded-full"></div>
            {subtitle
                .map(|s| {
                    view! {
                        <p class=themed(
                            theme,
                            "mt-4 text-lg max-w-2xl mx-auto",
                            "text-gray-300",
                            "text-gray-600",
                        )>{s}</p>
                    }
                })}
        </div>
    }
}
