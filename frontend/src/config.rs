use log::Level;

use crate::motion::RootMargin;

/// Navbar turns compact past this many pixels of scroll.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// How long the "message sent" label stays up.
pub const ACK_WINDOW_MS: u32 = 4_000;

/// Sections have to be this far inside the viewport before they animate in.
pub const IN_VIEW_MARGIN: RootMargin = RootMargin(-100.0);

pub const HERO_PARTICLE_COUNT: usize = 20;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where contact messages are posted, set at build time through
/// `CONTACT_ENDPOINT`. Without it every submission reports failure.
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_ENDPOINT").filter(|url| !url.trim().is_empty())
}
