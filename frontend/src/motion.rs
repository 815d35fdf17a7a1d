//! Host-independent animation model. Nothing in here touches the DOM; the
//! hooks feed it timestamps and geometry and render what it returns.

pub mod count_up;
pub mod easing;
pub mod entrance;
pub mod particles;
pub mod scroll;
pub mod spring;
pub mod visibility;

pub use count_up::{CountUp, StatValue};
pub use easing::Easing;
pub use entrance::{Pose, Stagger, Timeline, Transition, Variants};
pub use scroll::ScrollRange;
pub use spring::SpringConfig;
pub use visibility::RootMargin;
