//! Hiding page chrome during capture
//!
//! Header and export button are hidden while the page is rasterised and put
//! back when the guard drops, on success and failure alike.

/// An element whose CSS `display` can be read and written
pub trait ChromeElement {
    fn display(&self) -> String;
    fn set_display(&self, value: &str);
}

/// Restores every hidden element's previous `display` on drop
pub struct HiddenChrome<E: ChromeElement> {
    saved: Vec<(E, String)>,
}

impl<E: ChromeElement> HiddenChrome<E> {
    /// Hide `elements`, remembering their current display values
    pub fn hide(elements: impl IntoIterator<Item = E>) -> Self {
        let saved = elements
            .into_iter()
            .map(|element| {
                let previous = element.display();
                element.set_display("none");
                (element, previous)
            })
            .collect();

        Self { saved }
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

impl<E: ChromeElement> Drop for HiddenChrome<E> {
    fn drop(&mut self) {
        for (element, previous) in self.saved.drain(..) {
            element.set_display(&previous);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory element sharing its display value with the test
    #[derive(Clone)]
    pub(crate) struct FakeElement(pub Rc<RefCell<String>>);

    impl FakeElement {
        pub(crate) fn new(display: &str) -> Self {
            Self(Rc::new(RefCell::new(display.to_string())))
        }

        pub(crate) fn current(&self) -> String {
            self.0.borrow().clone()
        }
    }

    impl ChromeElement for FakeElement {
        fn display(&self) -> String {
            self.current()
        }

        fn set_display(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn test_hide_and_restore() {
        let header = FakeElement::new("");
        let button = FakeElement::new("inline-flex");

        {
            let hidden = HiddenChrome::hide(vec![header.clone(), button.clone()]);
            assert_eq!(hidden.len(), 2);
            assert_eq!(header.current(), "none");
            assert_eq!(button.current(), "none");
        }

        assert_eq!(header.current(), "");
        assert_eq!(button.current(), "inline-flex");
    }

    #[test]
    fn test_restore_on_early_return() {
        fn failing_capture(element: FakeElement) -> Result<(), &'static str> {
            let _hidden = HiddenChrome::hide([element]);
            Err("capture failed")
        }

        let header = FakeElement::new("block");
        assert!(failing_capture(header.clone()).is_err());
        assert_eq!(header.current(), "block");
    }
}
