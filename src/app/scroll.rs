use std::sync::{Arc, Mutex};

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{
    navigator::Navigator,
    sections::Section,
    spy::{Layout, Listener, ScrollSpy, ScrollTarget},
};

/// Measures sections in the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLayout;

impl Layout<Section> for DocumentLayout {
    fn top_of(&self, section: &Section) -> Option<f64> {
        let el = document()
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(f64::from(el.offset_top()))
    }

    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }
}

/// Window `scroll` and `resize` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollTarget for WindowScroll {
    type Handle = [WindowListenerHandle; 2];

    fn listen(&self, listener: Listener) -> Self::Handle {
        let on_resize = Arc::clone(&listener);
        [
            window_event_listener(ev::scroll, move |_| listener()),
            window_event_listener(ev::resize, move |_| on_resize()),
        ]
    }

    fn unlisten(&self, handle: Self::Handle) {
        for h in handle {
            h.remove();
        }
    }
}

/// Tracks the section nearest the top of the viewport while the calling
/// component is mounted.
pub fn use_scroll_spy() -> Signal<Section> {
    let spy = Arc::new(Mutex::new(ScrollSpy::new(Section::ALL)));
    let (active, set_active) = signal(Section::first());

    Effect::new(move |_| spy_on(&spy, WindowScroll, DocumentLayout, set_active));

    active.into()
}

/// Starts watching and ties the subscription to the current owner, so the
/// listener goes away when the owner is cleaned up.
fn spy_on<T, L>(spy: &Arc<Mutex<ScrollSpy<Section>>>, target: T, layout: L, set_active: WriteSignal<Section>)
where
    T: ScrollTarget + Send + Sync + 'static,
    L: Layout<Section> + Send + Sync + 'static,
{
    let subscription = ScrollSpy::watch(spy, target, layout, move |next| {
        if let Some(next) = next {
            set_active.set(next);
        }
    });
    on_cleanup(move || subscription.cancel());
}

/// Smooth-scrolls to `section`, leaving room for the fixed nav bar. Does
/// nothing if the section isn't rendered.
pub fn scroll_to_section(section: Section) {
    let navigator = Navigator::new(Section::first());
    let Some(top) = navigator.target_for(&section, &DocumentLayout) else {
        log::debug!("no element for section {section}, not scrolling");
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page {
        scroll: Arc<Mutex<f64>>,
    }

    impl Layout<Section> for Page {
        fn top_of(&self, section: &Section) -> Option<f64> {
            let index = Section::ALL.iter().position(|s| s == section)?;
            Some(index as f64 * 1000.0)
        }

        fn scroll_y(&self) -> f64 {
            *self.scroll.lock().unwrap()
        }
    }

    #[derive(Clone, Default)]
    struct Window {
        listeners: Arc<Mutex<Vec<Listener>>>,
    }

    impl Window {
        fn fire(&self) {
            let listeners = self.listeners.lock().unwrap().clone();
            for listener in listeners {
                listener();
            }
        }
    }

    impl ScrollTarget for Window {
        type Handle = ();

        fn listen(&self, listener: Listener) {
            self.listeners.lock().unwrap().push(listener);
        }

        fn unlisten(&self, _: ()) {
            self.listeners.lock().unwrap().clear();
        }
    }

    #[test]
    fn test_owner_cleanup_removes_listener() {
        let owner = Owner::new();
        let window = Window::default();
        let scroll = Arc::new(Mutex::new(0.0));
        let spy = Arc::new(Mutex::new(ScrollSpy::new(Section::ALL)));

        let active = owner.with(|| {
            let (active, set_active) = signal(Section::first());
            let page = Page {
                scroll: Arc::clone(&scroll),
            };
            spy_on(&spy, window.clone(), page, set_active);
            active
        });
        assert_eq!(window.listeners.lock().unwrap().len(), 1);

        *scroll.lock().unwrap() = 1950.0;
        window.fire();
        assert_eq!(active.get_untracked(), Section::Skills);

        owner.cleanup();
        assert!(window.listeners.lock().unwrap().is_empty());

        *scroll.lock().unwrap() = 4000.0;
        window.fire();
        assert_eq!(spy.lock().unwrap().active(), Some(&Section::Skills));
    }
}
