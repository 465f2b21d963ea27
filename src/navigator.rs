use crate::spy::Layout;

/// Height reserved for the fixed navigation bar when scrolling to a section.
pub const HEADER_OFFSET: f64 = 80.0;

/// Computes where a smooth scroll to a section should land.
#[derive(Debug, Clone)]
pub struct Navigator<K> {
    home: K,
    header_offset: f64,
}

impl<K: PartialEq> Navigator<K> {
    pub fn new(home: K) -> Self {
        Self {
            home,
            header_offset: HEADER_OFFSET,
        }
    }

    /// Scroll offset for `key`, or `None` when the section isn't rendered.
    pub fn target_for<L: Layout<K> + ?Sized>(&self, key: &K, layout: &L) -> Option<f64> {
        let top = layout.top_of(key)?;
        if *key == self.home {
            Some(0.0)
        } else {
            Some(top - self.header_offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page(Vec<(&'static str, f64)>);

    impl Layout<&'static str> for Page {
        fn top_of(&self, key: &&'static str) -> Option<f64> {
            self.0.iter().find(|(k, _)| k == key).map(|(_, top)| *top)
        }

        fn scroll_y(&self) -> f64 {
            1234.0
        }
    }

    fn page() -> Page {
        Page(vec![
            ("home", 64.0),
            ("about", 900.0),
            ("skills", 1750.0),
            ("contact", 4020.5),
        ])
    }

    #[test]
    fn test_home_scrolls_to_top() {
        let nav = Navigator::new("home");
        assert_eq!(nav.target_for(&"home", &page()), Some(0.0));
    }

    #[test]
    fn test_sections_leave_room_for_header() {
        let nav = Navigator::new("home");
        assert_eq!(nav.target_for(&"about", &page()), Some(820.0));
        assert_eq!(nav.target_for(&"skills", &page()), Some(1670.0));
        assert_eq!(nav.target_for(&"contact", &page()), Some(3940.5));
    }

    #[test]
    fn test_unknown_section_is_noop() {
        let nav = Navigator::new("home");
        assert_eq!(nav.target_for(&"nonexistent", &page()), None);
        // home without an element is not scrolled to either
        assert_eq!(nav.target_for(&"home", &Page(vec![])), None);
    }
}
