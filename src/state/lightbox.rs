#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Mounted at opacity 0, waiting one tick before fading in.
    Entering,
    Shown,
    /// Fading out, removal pending.
    Leaving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayClick {
    Background,
    CloseButton,
    /// The enlarged image or anything else inside the content box.
    Content,
}

impl OverlayClick {
    pub fn from_class(class_name: &str) -> Self {
        let mut classes = class_name.split_whitespace();
        if classes.clone().any(|c| c == "lightbox-overlay") {
            OverlayClick::Background
        } else if classes.any(|c| c == "lightbox-close") {
            OverlayClick::CloseButton
        } else {
            OverlayClick::Content
        }
    }

    pub fn closes(self) -> bool {
        !matches!(self, OverlayClick::Content)
    }
}

/// The single overlay. A second open while one is on screen is ignored; an
/// open during fade-out takes the overlay back instead of stacking a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        image: GalleryImage,
        phase: OverlayPhase,
    },
}

impl Lightbox {
    /// Returns the next state and whether a fade-in tick must be scheduled.
    pub fn open(self, image: GalleryImage) -> (Self, bool) {
        match self {
            Lightbox::Closed
            | Lightbox::Open {
                phase: OverlayPhase::Leaving,
                ..
            } => (
                Lightbox::Open {
                    image,
                    phase: OverlayPhase::Entering,
                },
                true,
            ),
            open => (open, false),
        }
    }

    pub fn faded_in(self) -> Self {
        match self {
            Lightbox::Open {
                image,
                phase: OverlayPhase::Entering,
            } => Lightbox::Open {
                image,
                phase: OverlayPhase::Shown,
            },
            other => other,
        }
    }

    /// Returns the next state and whether removal must be scheduled.
    pub fn close(self) -> (Self, bool) {
        match self {
            Lightbox::Open {
                image,
                phase: OverlayPhase::Entering | OverlayPhase::Shown,
            } => (
                Lightbox::Open {
                    image,
                    phase: OverlayPhase::Leaving,
                },
                true,
            ),
            other => (other, false),
        }
    }

    pub fn removed(self) -> Self {
        match self {
            Lightbox::Open {
                phase: OverlayPhase::Leaving,
                ..
            } => Lightbox::Closed,
            other => other,
        }
    }

    pub fn image(&self) -> Option<&GalleryImage> {
        match self {
            Lightbox::Open { image, .. } => Some(image),
            Lightbox::Closed => None,
        }
    }

    /// Page scrolling stays suppressed until the overlay is removed.
    pub fn locks_scroll(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            Lightbox::Open {
                phase: OverlayPhase::Shown,
                ..
            } => "1",
            _ => "0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> GalleryImage {
        GalleryImage {
            src: format!("/assets/{name}.jpg"),
            alt: name.to_string(),
        }
    }

    #[test]
    fn open_close_round_trip() {
        let (state, fade_in) = Lightbox::Closed.open(image("beach"));
        assert!(fade_in);
        assert!(state.locks_scroll());
        assert_eq!(state.opacity(), "0");

        let state = state.faded_in();
        assert_eq!(state.opacity(), "1");

        let (state, remove) = state.close();
        assert!(remove);
        assert_eq!(state.opacity(), "0");
        assert!(state.locks_scroll());

        let state = state.removed();
        assert_eq!(state, Lightbox::Closed);
        assert!(!state.locks_scroll());
    }

    #[test]
    fn only_background_and_button_close() {
        assert_eq!(OverlayClick::from_class("lightbox-overlay"), OverlayClick::Background);
        assert_eq!(OverlayClick::from_class("lightbox-close"), OverlayClick::CloseButton);
        assert_eq!(OverlayClick::from_class(""), OverlayClick::Content);
        assert_eq!(OverlayClick::from_class("lightbox-image"), OverlayClick::Content);
        assert!(OverlayClick::Background.closes());
        assert!(OverlayClick::CloseButton.closes());
        assert!(!OverlayClick::Content.closes());
    }

    #[test]
    fn second_open_is_ignored_while_shown() {
        let (state, _) = Lightbox::Closed.open(image("beach"));
        let state = state.faded_in();
        let (state, fade_in) = state.open(image("sunset"));
        assert!(!fade_in);
        assert_eq!(state.image(), Some(&image("beach")));
    }

    #[test]
    fn open_during_fade_out_takes_overlay_back() {
        let (state, _) = Lightbox::Closed.open(image("beach"));
        let (state, _) = state.faded_in().close();
        let (state, fade_in) = state.open(image("sunset"));
        assert!(fade_in);
        assert_eq!(state.image(), Some(&image("sunset")));
        // a stale removal does not drop the reopened overlay
        let state = state.removed();
        assert!(state.locks_scroll());
    }

    #[test]
    fn close_is_idempotent() {
        let (state, _) = Lightbox::Closed.open(image("beach"));
        let (state, first) = state.close();
        let (state, second) = state.close();
        assert!(first);
        assert!(!second);
        assert_eq!(Lightbox::Closed.close(), (Lightbox::Closed, false));
        assert_eq!(state.faded_in().opacity(), "0");
    }
}
