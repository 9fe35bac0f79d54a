// crates/certilife-core/src/navigator.rs
// Smooth scrolling to page sections, compensating for the fixed header

/// Height of the fixed header that a scrolled-to section must clear.
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// The bits of a DOM the navigator needs.
pub trait ScrollSurface {
    /// Top of the element with `id`, relative to the viewport, or `None`
    /// when no such element exists.
    fn element_top(&self, id: &str) -> Option<f64>;
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;
    /// Request an animated scroll to absolute offset `y`.
    fn smooth_scroll_to(&self, y: f64);
}

/// Absolute offset that puts an element just below the header.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    element_top + scroll_y - header_offset
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigator {
    header_offset: f64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(HEADER_OFFSET_PX)
    }
}

impl Navigator {
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    /// Scroll to `section_id`. A missing section is a silent no-op; the
    /// return value only says whether a scroll was requested.
    pub fn scroll_to_section<S: ScrollSurface + ?Sized>(
        &self,
        surface: &S,
        section_id: &str,
    ) -> bool {
        match surface.element_top(section_id) {
            Some(top) => {
                let y = scroll_target(top, surface.scroll_y(), self.header_offset);
                log::debug!("Scrolling to #{} at y={}", section_id, y);
                surface.smooth_scroll_to(y);
                true
            }
            None => {
                log::debug!("No section #{} on the page, skipping scroll", section_id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakePage {
        tops: HashMap<&'static str, f64>,
        scroll_y: f64,
        requests: RefCell<Vec<f64>>,
    }

    impl ScrollSurface for FakePage {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn smooth_scroll_to(&self, y: f64) {
            self.requests.borrow_mut().push(y);
        }
    }

    #[test]
    fn test_target_compensates_for_header() {
        assert_eq!(scroll_target(400.0, 1200.0, 100.0), 1500.0);
        assert_eq!(scroll_target(-300.0, 1200.0, 100.0), 800.0);
    }

    #[test]
    fn test_scrolls_to_existing_section() {
        let page = FakePage {
            tops: HashMap::from([("section-1", 650.0)]),
            scroll_y: 300.0,
            requests: RefCell::new(Vec::new()),
        };
        assert!(Navigator::default().scroll_to_section(&page, "section-1"));
        assert_eq!(*page.requests.borrow(), vec![850.0]);
    }

    #[test]
    fn test_missing_section_is_a_no_op() {
        let page = FakePage {
            tops: HashMap::new(),
            scroll_y: 0.0,
            requests: RefCell::new(Vec::new()),
        };
        assert!(!Navigator::default().scroll_to_section(&page, "nowhere"));
        assert!(page.requests.borrow().is_empty());
    }
}
