use crate::submit::Submitter;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Bookings are simulated unless the build sets `RETREAT_BOOKING_PATH`.
pub fn submitter() -> Submitter {
    match option_env!("RETREAT_BOOKING_PATH") {
        Some(path) if !path.is_empty() => Submitter::Http {
            url: format!("{}{}", get_backend_url(), path),
        },
        _ => Submitter::Simulated {
            delay_ms: SiteConfig::default().simulated_submit_ms,
        },
    }
}

/// Behavior constants shared by the page components.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Scroll offsets at or below this keep the navbar transparent.
    pub transparent_nav_max: f64,
    /// Height of the fixed header subtracted from anchor scroll targets.
    pub header_offset: f64,
    pub parallax_factor: f64,
    pub draft_key: &'static str,
    pub lightbox_fade_in_ms: u32,
    pub lightbox_fade_out_ms: u32,
    pub form_reset_ms: u32,
    pub simulated_submit_ms: u32,
    pub counter_frame_ms: u32,
    pub counter_duration_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            transparent_nav_max: 100.0,
            header_offset: 80.0,
            parallax_factor: 0.5,
            draft_key: "retreatFormData",
            lightbox_fade_in_ms: 10,
            lightbox_fade_out_ms: 300,
            form_reset_ms: 1_000,
            simulated_submit_ms: 1_000,
            counter_frame_ms: 16,
            counter_duration_ms: 2_000,
        }
    }
}
