//! Fade-in of content blocks as they scroll into view.
//!
//! Observed elements are never unobserved. The revealed style is written every
//! time an element intersects again, which is idempotent since nothing ever
//! re-hides it.

pub const REVEAL_SELECTORS: &str =
    ".intro-section, .vision-point, .program-card, .gallery-item, .faq-item, .testimonial-content";

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    pub fn on_intersection(self, is_intersecting: bool) -> Self {
        if is_intersecting {
            Reveal::Revealed
        } else {
            self
        }
    }

    /// `(opacity, transform)` to write for this state.
    pub fn style(self) -> (&'static str, &'static str) {
        match self {
            Reveal::Hidden => (HIDDEN_OPACITY, HIDDEN_TRANSFORM),
            Reveal::Revealed => (SHOWN_OPACITY, SHOWN_TRANSFORM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_intersection_and_stays() {
        let state = Reveal::default();
        assert_eq!(state.style(), ("0", "translateY(30px)"));

        let state = state.on_intersection(false);
        assert_eq!(state, Reveal::Hidden);

        let state = state.on_intersection(true);
        assert_eq!(state.style(), ("1", "translateY(0)"));

        // leaving and re-entering the viewport
        let state = state.on_intersection(false).on_intersection(true);
        assert_eq!(state, Reveal::Revealed);
    }

    #[test]
    fn selectors_cover_every_content_block() {
        for class in [
            "intro-section",
            "vision-point",
            "program-card",
            "gallery-item",
            "faq-item",
            "testimonial-content",
        ] {
            assert!(REVEAL_SELECTORS.contains(&format!(".{class}")));
        }
    }
}
