use yew::prelude::*;

use super::{rise, slide, CHECK_PATH};
use crate::hooks::{style_at, use_entrance, use_in_view, InViewOptions};
use crate::motion::{Pose, Stagger, Timeline, Transition, Variants};

const FEATURES: &[&str] = &[
    "Gestión Profesional",
    "Estrategias Personalizadas",
    "Total Confidencialidad",
];

const VALUES: &[(&str, &str)] = &[
    ("Confianza", "Relaciones basadas en transparencia y ética profesional"),
    ("Excelencia", "Compromiso con los más altos estándares de calidad"),
    ("Seguridad", "Protección integral de activos y confidencialidad garantizada"),
];

const LEFT: usize = 0;
const RIGHT: usize = 1;
const FIRST_FEATURE: usize = 2;
const FIRST_VALUE: usize = FIRST_FEATURE + FEATURES.len();

fn about_timeline() -> Timeline {
    let feature = Variants::new(
        Pose::new().opacity(0.0).scale(0.8).x(-20.0),
        Pose::new().opacity(1.0).scale(1.0).x(0.0),
        Transition::new(500.0),
    );

    Timeline::new()
        .push(slide(-60.0, 800.0))
        .push(slide(60.0, 800.0).delayed(200.0))
        .extend(Timeline::staggered(&feature, Stagger::new(500.0, 100.0), FEATURES.len()))
        .extend(Timeline::staggered(&rise(30.0, 500.0), Stagger::new(400.0, 150.0), VALUES.len()))
}

#[function_component]
pub fn About() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::default());
    let poses = use_entrance(in_view, about_timeline());

    html! {
        <section id="nosotros" class="about">
            <style>
                {r#"
                    .about {
                        padding: 6rem 0;
                        background: #f9fafb;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-copy h2 {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .about-copy p {
                        color: #4b5563;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .about-features {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .about-feature {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #eff6ff;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        color: #374151;
                        font-weight: 500;
                    }
                    .about-feature svg {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #1e3a8a;
                    }
                    .values-card {
                        background: linear-gradient(to bottom right, #1e3a8a, #1d4ed8);
                        border-radius: 1.5rem;
                        padding: 3rem;
                        color: white;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        transition: translate 0.3s;
                    }
                    .values-card:hover {
                        translate: 0 -5px;
                    }
                    .values-card h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }
                    .value-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                        transition: translate 0.3s;
                    }
                    .value-item:hover {
                        translate: 10px 0;
                    }
                    .value-icon {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: background 0.3s, transform 0.5s;
                    }
                    .value-item:hover .value-icon {
                        background: rgba(255, 255, 255, 0.3);
                        transform: rotate(360deg) scale(1.1);
                    }
                    .value-icon svg {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .value-item h4 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .value-item p {
                        color: rgba(255, 255, 255, 0.9);
                    }
                "#}
            </style>
            <div class="container">
                <div ref={node} class="about-grid">
                    <div class="about-copy" style={style_at(&poses, LEFT)}>
                        <h2 class="gradient-text serif">{"Sobre AEQUITAS Capital"}</h2>
                        <p>
                            {"Somos una sociedad por acciones especializada en la inversión y administración profesional de recursos y bienes, con domicilio en Santiago de Chile."}
                        </p>
                        <p>
                            {"Nuestro enfoque se centra en la adquisición, tenencia, administración y enajenación estratégica de activos, incluyendo acciones, valores mobiliarios, instrumentos de inversión y bienes raíces."}
                        </p>
                        <p>
                            {"Con un compromiso firme hacia la excelencia y la confidencialidad, ofrecemos soluciones personalizadas que se adaptan a las necesidades específicas de nuestros clientes."}
                        </p>

                        <div class="about-features">
                            { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                                <div key={*feature} class="about-feature" style={style_at(&poses, FIRST_FEATURE + i)}>
                                    <svg fill="currentColor" viewBox="0 0 20 20">
                                        <path fill-rule="evenodd" clip-rule="evenodd" d={CHECK_PATH} />
                                    </svg>
                                    <span>{*feature}</span>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div style={style_at(&poses, RIGHT)}>
                        <div class="values-card">
                            <h3 class="serif">{"Nuestros Valores"}</h3>
                            { for VALUES.iter().enumerate().map(|(i, (title, description))| html! {
                                <div key={*title} class="value-item" style={style_at(&poses, FIRST_VALUE + i)}>
                                    <div class="value-icon">
                                        <svg fill="currentColor" viewBox="0 0 20 20">
                                            <path fill-rule="evenodd" clip-rule="evenodd" d={CHECK_PATH} />
                                        </svg>
                                    </div>
                                    <div>
                                        <h4>{*title}</h4>
                                        <p>{*description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_layout_matches_indices() {
        let timeline = about_timeline();
        let entries = timeline.entries();
        assert_eq!(entries.len(), FIRST_VALUE + VALUES.len());
        assert_eq!(entries[RIGHT].start_ms(), 200.0);
        assert_eq!(entries[FIRST_FEATURE + 2].start_ms(), 700.0);
        assert_eq!(entries[FIRST_VALUE + 2].start_ms(), 700.0);
    }
}
