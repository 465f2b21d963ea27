//! Active-section tracking for the navigation bar.
//!
//! The spy walks the configured sections in document order and picks the
//! last one whose top has scrolled into the activation band. Measurement goes
//! through [`Layout`] and scroll notifications through [`ScrollTarget`], so
//! the browser glue and the tests share the same code path.

use std::sync::{Arc, Mutex};

/// Distance below the scroll position at which a section becomes active.
pub const ACTIVATION_THRESHOLD: f64 = 100.0;

/// Read access to the rendered document.
pub trait Layout<K> {
    /// Top offset of the element for `key` within the document, if rendered.
    fn top_of(&self, key: &K) -> Option<f64>;

    fn scroll_y(&self) -> f64;
}

pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Something that fires scroll (and resize) notifications.
pub trait ScrollTarget {
    type Handle: Send + Sync;

    fn listen(&self, listener: Listener) -> Self::Handle;

    fn unlisten(&self, handle: Self::Handle);
}

/// A registered listener. Dropping it unregisters the listener.
pub struct Subscription<T: ScrollTarget> {
    target: T,
    handle: Option<T::Handle>,
}

impl<T: ScrollTarget> Subscription<T> {
    pub fn cancel(mut self) {
        self.unlisten();
    }

    fn unlisten(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.target.unlisten(handle);
        }
    }
}

impl<T: ScrollTarget> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.unlisten();
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSpy<K> {
    sections: Vec<K>,
    threshold: f64,
    active: Option<K>,
}

impl<K: Clone + PartialEq> ScrollSpy<K> {
    /// Creates a spy over `sections` in document order. The first section is
    /// active until the first measurement says otherwise.
    pub fn new(sections: impl IntoIterator<Item = K>) -> Self {
        let sections: Vec<K> = sections.into_iter().collect();
        let active = sections.first().cloned();
        Self {
            sections,
            threshold: ACTIVATION_THRESHOLD,
            active,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn sections(&self) -> &[K] {
        &self.sections
    }

    /// `None` only when no sections are configured.
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    pub fn compute<L: Layout<K> + ?Sized>(&self, layout: &L) -> Option<K> {
        let scroll_y = layout.scroll_y();
        self.sections
            .iter()
            .filter(|key| {
                layout
                    .top_of(key)
                    .is_some_and(|top| top - self.threshold <= scroll_y)
            })
            .last()
            .or(self.sections.first())
            .cloned()
    }

    /// Re-measures and returns whether the active section changed.
    pub fn refresh<L: Layout<K> + ?Sized>(&mut self, layout: &L) -> bool {
        let next = self.compute(layout);
        if next == self.active {
            return false;
        }
        log::debug!("scroll spy: active section changed");
        self.active = next;
        true
    }
}

impl<K> ScrollSpy<K>
where
    K: Clone + PartialEq + Send + 'static,
{
    /// Measures once, then re-measures on every notification from `target`.
    /// `on_change` only runs when the active section changes.
    pub fn watch<T, L, F>(spy: &Arc<Mutex<Self>>, target: T, layout: L, on_change: F) -> Subscription<T>
    where
        T: ScrollTarget,
        L: Layout<K> + Send + Sync + 'static,
        F: Fn(Option<K>) + Send + Sync + 'static,
    {
        let spy = Arc::clone(spy);
        let listener: Listener = Arc::new(move || {
            let changed = match spy.lock() {
                Ok(mut spy) => spy.refresh(&layout).then(|| spy.active().cloned()),
                Err(_) => return,
            };
            if let Some(active) = changed {
                on_change(active);
            }
        });
        listener();
        let handle = target.listen(Arc::clone(&listener));
        Subscription {
            target,
            handle: Some(handle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct FakeLayout {
        tops: Vec<(&'static str, f64)>,
        scroll: Arc<Mutex<f64>>,
    }

    impl FakeLayout {
        fn new(tops: &[(&'static str, f64)]) -> Self {
            Self {
                tops: tops.to_vec(),
                scroll: Arc::new(Mutex::new(0.0)),
            }
        }

        fn at(self, y: f64) -> Self {
            self.scroll_to(y);
            self
        }

        fn scroll_to(&self, y: f64) {
            *self.scroll.lock().unwrap() = y;
        }
    }

    impl Layout<&'static str> for FakeLayout {
        fn top_of(&self, key: &&'static str) -> Option<f64> {
            self.tops
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, top)| *top)
        }

        fn scroll_y(&self) -> f64 {
            *self.scroll.lock().unwrap()
        }
    }

    #[derive(Clone, Default)]
    struct FakeWindow {
        listeners: Arc<Mutex<Vec<(usize, Listener)>>>,
        next_id: Arc<Mutex<usize>>,
    }

    impl FakeWindow {
        fn fire(&self) {
            let listeners: Vec<Listener> = self
                .listeners
                .lock()
                .unwrap()
                .iter()
                .map(|(_, l)| Arc::clone(l))
                .collect();
            for listener in listeners {
                listener();
            }
        }

        fn count(&self) -> usize {
            self.listeners.lock().unwrap().len()
        }
    }

    impl ScrollTarget for FakeWindow {
        type Handle = usize;

        fn listen(&self, listener: Listener) -> usize {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            self.listeners.lock().unwrap().push((*next, listener));
            *next
        }

        fn unlisten(&self, handle: usize) {
            self.listeners.lock().unwrap().retain(|(id, _)| *id != handle);
        }
    }

    fn grid() -> FakeLayout {
        FakeLayout::new(&[("A", 0.0), ("B", 800.0), ("C", 1600.0), ("D", 2400.0)])
    }

    fn spy() -> ScrollSpy<&'static str> {
        ScrollSpy::new(["A", "B", "C", "D"])
    }

    #[test]
    fn test_first_section_active_before_scrolling() {
        let spy = spy();
        assert_eq!(spy.active(), Some(&"A"));
        assert_eq!(spy.compute(&grid()), Some("A"));
    }

    #[test]
    fn test_activation_band() {
        let spy = spy();
        assert_eq!(spy.compute(&grid().at(850.0)), Some("B"));
        assert_eq!(spy.compute(&grid().at(650.0)), Some("A"));
        // B's top is 800, so it activates from 700 onward
        assert_eq!(spy.compute(&grid().at(699.0)), Some("A"));
        assert_eq!(spy.compute(&grid().at(700.0)), Some("B"));
        assert_eq!(spy.compute(&grid().at(750.0)), Some("B"));
        assert_eq!(spy.compute(&grid().at(2350.0)), Some("D"));
        assert_eq!(spy.compute(&grid().at(10_000.0)), Some("D"));
    }

    #[test]
    fn test_zero_threshold_switches_at_section_top() {
        let spy = spy().with_threshold(0.0);
        assert_eq!(spy.compute(&grid().at(750.0)), Some("A"));
        assert_eq!(spy.compute(&grid().at(800.0)), Some("B"));
        assert_eq!(spy.compute(&grid().at(850.0)), Some("B"));
    }

    #[test]
    fn test_above_first_section_defaults_to_first() {
        let layout = FakeLayout::new(&[("A", 400.0), ("B", 1200.0)]);
        let spy = ScrollSpy::new(["A", "B"]);
        assert_eq!(spy.compute(&layout.at(0.0)), Some("A"));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let layout = FakeLayout::new(&[("A", 0.0), ("C", 1600.0)]);
        let spy = spy();
        assert_eq!(spy.compute(&layout.clone().at(900.0)), Some("A"));
        assert_eq!(spy.compute(&layout.clone().at(1600.0)), Some("C"));
        // nothing rendered yet
        let empty = FakeLayout::new(&[]);
        assert_eq!(spy.compute(&empty.at(5000.0)), Some("A"));
    }

    #[test]
    fn test_no_sections() {
        let spy: ScrollSpy<&'static str> = ScrollSpy::new([]);
        assert_eq!(spy.active(), None);
        assert_eq!(spy.compute(&grid().at(900.0)), None);
    }

    #[test]
    fn test_refresh_reports_changes_only() {
        let mut spy = spy();
        let layout = grid();
        assert!(!spy.refresh(&layout));
        layout.scroll_to(820.0);
        assert!(spy.refresh(&layout));
        assert_eq!(spy.active(), Some(&"B"));
        layout.scroll_to(840.0);
        assert!(!spy.refresh(&layout));
        layout.scroll_to(10.0);
        assert!(spy.refresh(&layout));
        assert_eq!(spy.active(), Some(&"A"));
    }

    #[test]
    fn test_watch_notifies_on_change() {
        let window = FakeWindow::default();
        let layout = grid();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let spy = Arc::new(Mutex::new(spy()));

        let sub = ScrollSpy::watch(&spy, window.clone(), layout.clone(), {
            let seen = Arc::clone(&seen);
            move |active| seen.lock().unwrap().push(active)
        });
        assert_eq!(window.count(), 1);
        // initial measurement agrees with the default, nothing to report
        assert!(seen.lock().unwrap().is_empty());

        layout.scroll_to(850.0);
        window.fire();
        layout.scroll_to(900.0);
        window.fire();
        layout.scroll_to(1700.0);
        window.fire();
        assert_eq!(*seen.lock().unwrap(), vec![Some("B"), Some("C")]);

        drop(sub);
        assert_eq!(window.count(), 0);
    }

    #[test]
    fn test_watch_measures_on_mount() {
        let window = FakeWindow::default();
        let layout = grid().at(1650.0);
        let spy = Arc::new(Mutex::new(spy()));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let _sub = ScrollSpy::watch(&spy, window, layout, {
            let seen = Arc::clone(&seen);
            move |active| seen.lock().unwrap().push(active)
        });
        assert_eq!(*seen.lock().unwrap(), vec![Some("C")]);
        assert_eq!(spy.lock().unwrap().active(), Some(&"C"));
    }

    #[test]
    fn test_no_updates_after_unmount() {
        let window = FakeWindow::default();
        let layout = grid();
        let spy = Arc::new(Mutex::new(spy()));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sub = ScrollSpy::watch(&spy, window.clone(), layout.clone(), {
            let seen = Arc::clone(&seen);
            move |active| seen.lock().unwrap().push(active)
        });
        sub.cancel();

        layout.scroll_to(2500.0);
        window.fire();
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(spy.lock().unwrap().active(), Some(&"A"));
    }

    #[test]
    fn test_repeated_mounts_do_not_leak_listeners() {
        let window = FakeWindow::default();
        let spy = Arc::new(Mutex::new(spy()));
        for _ in 0..25 {
            let sub = ScrollSpy::watch(&spy, window.clone(), grid(), |_| {});
            assert_eq!(window.count(), 1);
            drop(sub);
            assert_eq!(window.count(), 0);
        }
    }
}
