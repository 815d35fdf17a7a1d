use yew::prelude::*;

use super::rise;
use crate::hooks::{style_at, use_entrance, use_in_view, use_scroll_progress, InViewOptions};
use crate::motion::scroll::map_range;
use crate::motion::{ScrollRange, Stagger, Timeline};

/// Background grid drifts down this far (percent of its height) while the
/// section crosses the viewport.
const PARALLAX_SHIFT_PCT: f64 = 30.0;

#[function_component]
pub fn Cta() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::default());
    let progress = use_scroll_progress(node.clone(), ScrollRange::ENTER_TO_EXIT);
    let poses = use_entrance(
        in_view,
        Timeline::staggered(&rise(40.0, 700.0), Stagger::new(200.0, 150.0), 3),
    );

    let background_y = map_range(progress, (0.0, 1.0), (0.0, PARALLAX_SHIFT_PCT));

    html! {
        <section ref={node} class="cta gradient-primary">
            <style>
                {r#"
                    .cta {
                        position: relative;
                        overflow: hidden;
                        padding: 6rem 0;
                    }
                    .cta-pattern {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        will-change: transform;
                    }
                    .cta-pattern svg {
                        width: 100%;
                        height: 100%;
                    }
                    @keyframes orb-rise {
                        0%, 100% { transform: translateY(0); opacity: 0.1; }
                        50% { transform: translateY(-20px); opacity: 0.2; }
                    }
                    @keyframes orb-sink {
                        0%, 100% { transform: translateY(0); opacity: 0.1; }
                        50% { transform: translateY(20px); opacity: 0.15; }
                    }
                    .cta-orb {
                        position: absolute;
                        background: white;
                        border-radius: 9999px;
                        filter: blur(64px);
                    }
                    .cta-orb.top {
                        top: 2.5rem;
                        left: 2.5rem;
                        width: 10rem;
                        height: 10rem;
                        animation: orb-rise 5s ease-in-out infinite;
                    }
                    .cta-orb.bottom {
                        bottom: 2.5rem;
                        right: 2.5rem;
                        width: 15rem;
                        height: 15rem;
                        animation: orb-sink 7s ease-in-out infinite;
                    }
                    .cta-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        color: white;
                    }
                    .cta-content h2 {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .cta-content p {
                        font-size: 1.25rem;
                        font-weight: 300;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        opacity: 0.9;
                    }
                    .cta-button {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        background: white;
                        color: #1e3a8a;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        font-size: 1.125rem;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.3s;
                    }
                    .cta-button:hover {
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
                    }
                "#}
            </style>

            <div class="cta-pattern" style={format!("transform: translateY({:.2}%);", background_y)}>
                <svg xmlns="http://www.w3.org/2000/svg">
                    <defs>
                        <pattern id="cta-grid" width="40" height="40" patternUnits="userSpaceOnUse">
                            <path d="M 40 0 L 0 0 0 40" fill="none" stroke="white" stroke-width="1" />
                        </pattern>
                    </defs>
                    <rect width="100%" height="100%" fill="url(#cta-grid)" />
                </svg>
            </div>

            <div class="cta-orb top" />
            <div class="cta-orb bottom" />

            <div class="container cta-content">
                <h2 class="serif" style={style_at(&poses, 0)}>{"¿Listo para optimizar su patrimonio?"}</h2>
                <p style={style_at(&poses, 1)}>
                    {"Contáctenos hoy y descubra cómo podemos ayudarle a alcanzar sus objetivos financieros"}
                </p>
                <a href="#contacto" class="cta-button" style={style_at(&poses, 2)}>{"Agendar Consulta"}</a>
            </div>
        </section>
    }
}
