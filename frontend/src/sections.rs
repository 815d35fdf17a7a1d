//! Page sections, top to bottom.

pub mod about;
pub mod contact;
pub mod cta;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod services;
pub mod stats;

use yew::prelude::*;

use crate::motion::{Pose, Transition, Variants};

/// In-page anchors shared by the navbar and the footer.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#inicio", "Inicio"),
    ("#servicios", "Servicios"),
    ("#nosotros", "Nosotros"),
    ("#contacto", "Contacto"),
];

const SHIELD_PATH: &str = "M12 2L2 7v10c0 5.55 3.84 10.74 9 12 5.16-1.26 9-6.45 9-12V7l-10-5zm0 18c-4.52-1.13-7.5-5.33-7.5-9.5V8.3l7.5-3.75 7.5 3.75v1.7c0 4.17-2.98 8.37-7.5 9.5z";

pub const CHECK_PATH: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";

/// Fade in while sliding up from `distance` px below.
pub fn rise(distance: f64, duration_ms: f64) -> Variants {
    Variants::new(
        Pose::new().opacity(0.0).y(distance),
        Pose::new().opacity(1.0).y(0.0),
        Transition::new(duration_ms),
    )
}

/// Fade in while sliding sideways from `offset` px (negative = from the left).
pub fn slide(offset: f64, duration_ms: f64) -> Variants {
    Variants::new(
        Pose::new().opacity(0.0).x(offset),
        Pose::new().opacity(1.0).x(0.0),
        Transition::new(duration_ms),
    )
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn Logo(props: &LogoProps) -> Html {
    html! {
        <svg class={props.class.clone()} fill="currentColor" viewBox="0 0 24 24">
            <path d={SHIELD_PATH} />
        </svg>
    }
}
