use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub transparent: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    LinkClicked,
}

impl NavState {
    pub fn at_offset(offset: f64, config: &SiteConfig) -> Self {
        Self {
            transparent: is_transparent(offset, config),
            menu_open: false,
        }
    }

    pub fn apply(self, action: NavAction, config: &SiteConfig) -> Self {
        match action {
            NavAction::Scrolled(offset) => Self {
                transparent: is_transparent(offset, config),
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavAction::LinkClicked => Self {
                menu_open: false,
                ..self
            },
        }
    }

    pub fn navbar_class(&self) -> &'static str {
        if self.transparent {
            "navbar transparent"
        } else {
            "navbar"
        }
    }

    /// Shared by the hamburger and the menu panel.
    pub fn active_class(&self) -> Option<&'static str> {
        self.menu_open.then_some("active")
    }
}

pub fn is_transparent(offset: f64, config: &SiteConfig) -> bool {
    offset <= config.transparent_nav_max
}

/// Document offset to scroll to so the target sits just below the fixed header.
pub fn anchor_scroll_top(target_top: f64, config: &SiteConfig) -> f64 {
    target_top - config.header_offset
}

pub fn parallax_offset(scroll: f64, config: &SiteConfig) -> f64 {
    scroll * config.parallax_factor
}

/// `#contact` -> `contact`. Bare `#` has no target.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
