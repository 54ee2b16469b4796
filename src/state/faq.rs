/// Accordion with at most one open item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    open: Option<usize>,
}

impl FaqState {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking the open item closes everything; any other item becomes the only open one.
    pub fn click(self, index: usize) -> Self {
        let was_open = self.is_open(index);
        Self {
            open: (!was_open).then_some(index),
        }
    }

    pub fn item_class(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            "faq-item active"
        } else {
            "faq-item"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_others() {
        let state = FaqState::default().click(0).click(2);
        assert_eq!(state.open_index(), Some(2));
        assert!(!state.is_open(0));
        assert_eq!(state.item_class(2), "faq-item active");
        assert_eq!(state.item_class(0), "faq-item");
    }

    #[test]
    fn clicking_open_item_leaves_none_open() {
        let state = FaqState::default().click(3).click(3);
        assert_eq!(state.open_index(), None);
        assert_eq!(state.click(3).open_index(), Some(3));
    }

    #[test]
    fn at_most_one_open_for_any_click_sequence() {
        let clicks = [0, 1, 1, 4, 2, 2, 2, 0, 3, 3, 1, 4, 4, 0];
        let mut state = FaqState::default();
        let mut previous = None;
        for index in clicks {
            state = state.click(index);
            let open = (0..5).filter(|i| state.is_open(*i)).count();
            assert!(open <= 1);
            let expected = if previous == Some(index) { None } else { Some(index) };
            assert_eq!(state.open_index(), expected);
            previous = state.open_index();
        }
    }
}
