//! Yew hooks binding the motion model to the browser: intersection
//! observers, scroll listeners, animation frames and timers. Every hook
//! releases what it registered when its component unmounts.

pub mod acknowledgement;
pub mod count_up;
pub mod entrance;
pub mod frame;
pub mod scroll;
pub mod viewport;

pub use acknowledgement::use_acknowledgement;
pub use count_up::use_count_up;
pub use entrance::{style_at, use_entrance};
pub use scroll::{use_scroll_progress, use_scrolled};
pub use viewport::{use_in_view, InViewOptions};
