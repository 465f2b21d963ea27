mod about;
mod achievements;
mod contact;
mod decor;
mod hero;
mod leadership;
mod navigation;
mod projects;
pub mod scroll;
mod skills;
pub mod theme;

use about::About;
use achievements::Achievements;
use contact::Contact;
use decor::themed;
use hero::Hero;
use leadership::Leadership;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use navigation::Navigation;
use projects::Projects;
use scroll::{scroll_to_section, use_scroll_spy};
use skills::Skills;
use theme::use_theme;

use crate::{
    content::{FAVICON_PATH, NAME},
    sections::Section,
    theme::ThemeFlag,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON_PATH />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{NAME} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole single-page portfolio: nav bar, every section in document
/// order, footer.
#[component]
fn PortfolioPage() -> impl IntoView {
    let (theme, set_theme) = use_theme();
    let active = use_scroll_spy();

    view! {
        <Title text="Portfolio" />
        <div class=themed(
            theme,
            "min-h-screen transition-colors duration-300",
            "dark bg-gray-900",
            "bg-white",
        )>
            <Navigation active theme set_theme />
            <main>
                <section id=Section::Home.id()>
                    <Hero theme />
                </section>
                <About theme />
                <Skills theme />
                <Projects theme />
                <Achievements theme />
                <Leadership theme />
                <Contact theme />
            </main>
            <Footer theme />
            <ScrollToTop active />
        </div>
    }
}

#[component]
fn Footer(theme: Signal<ThemeFlag>) -> impl IntoView {
    view! {
        <footer class=themed(
            theme,
            "py-8 border-t text-center text-sm",
            "bg-gray-900 border-gray-800 text-gray-400",
            "bg-white border-gray-200 text-gray-600",
        )>
            <p>{format!("© {} {NAME}. Built with Rust and Leptos.", env!("BUILD_YEAR"))}</p>
        </footer>
    }
}

/// Floating button back to the top, hidden while the first section is
/// active.
#[component]
fn ScrollToTop(active: Signal<Section>) -> impl IntoView {
    view! {
        <Show when=move || active.get() != Section::first()>
            <button
                aria-label="Back to top"
                class="fixed bottom-6 right-6 z-40 w-12 h-12 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white shadow-lg transition-transform duration-300 hover:scale-110 active:scale-95 fade-in"
                on:click=move |_| scroll_to_section(Section::Home)
            >
                <i class="fa-solid fa-arrow-up"></i>
            </button>
        </Show>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_page() -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_meta_context();
            view! { <PortfolioPage /> }.to_html()
        })
    }

    #[test]
    fn test_each_section_rendered_once_in_order() {
        let html = render_page();
        let mut last = 0;
        for section in Section::ALL {
            let anchor = format!("id=\"{}\"", section.id());
            assert_eq!(html.matches(&anchor).count(), 1, "{anchor}");
            let at = html.find(&anchor).unwrap();
            assert!(at >= last, "{section} rendered out of order");
            last = at;
        }
    }

    #[test]
    fn test_server_renders_light_default() {
        // the client reads the stored flag only after hydration, so it
        // starts from this same markup
        let html = render_page();
        assert!(html.contains("min-h-screen transition-colors duration-300 bg-white"));
        assert!(!html.contains("dark bg-gray-900"));
        assert!(html.contains("fa-solid fa-moon"));
    }

    #[test]
    fn test_scroll_to_top_hidden_on_first_section() {
        let html = render_page();
        assert!(!html.contains("Back to top"));
    }

    #[test]
    fn test_hero_entrance_is_staggered() {
        let html = render_page();
        for delay in ["200ms", "500ms", "800ms", "1000ms"] {
            assert!(html.contains(&format!("fade-in-up [animation-delay:{delay}]")));
        }
    }
}
