use yew::prelude::*;

use super::rise;
use crate::hooks::{style_at, use_entrance, use_in_view, InViewOptions};
use crate::motion::{Stagger, Timeline};

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
        title: "Inversión de Capital",
        description: "Adquisición estratégica de acciones, valores mobiliarios y instrumentos de inversión con análisis profesional de mercado.",
    },
    Service {
        icon: "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4",
        title: "Gestión Inmobiliaria",
        description: "Administración y asesoramiento en bienes raíces, con enfoque en rentabilidad y crecimiento patrimonial.",
    },
    Service {
        icon: "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
        title: "Asesoría Patrimonial",
        description: "Planificación y gestión integral de patrimonio con estrategias personalizadas según objetivos financieros.",
    },
    Service {
        icon: "M17 9V7a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2m2 4h10a2 2 0 002-2v-6a2 2 0 00-2-2H9a2 2 0 00-2 2v6a2 2 0 002 2zm7-5a2 2 0 11-4 0 2 2 0 014 0z",
        title: "Administración de Recursos",
        description: "Gestión eficiente de recursos financieros con enfoque en preservación y crecimiento del capital.",
    },
    Service {
        icon: "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
        title: "Participación Societaria",
        description: "Inversión estratégica como accionista o socio en sociedades nacionales e internacionales.",
    },
    Service {
        icon: "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-3 7h3m-3 4h3m-6-4h.01M9 16h.01",
        title: "Consultoría Financiera",
        description: "Asesoramiento especializado en decisiones financieras y estrategias de inversión personalizadas.",
    },
];

/// Service titles, in display order. The contact form offers the same list.
pub fn service_titles() -> impl Iterator<Item = &'static str> {
    SERVICES.iter().map(|s| s.title)
}

#[function_component]
pub fn Services() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::default());
    // heading first, then one entry per card
    let timeline = Timeline::new()
        .push(rise(50.0, 600.0))
        .extend(Timeline::staggered(&rise(60.0, 600.0), Stagger::new(200.0, 100.0), SERVICES.len()));
    let poses = use_entrance(in_view, timeline);

    html! {
        <section id="servicios" class="services">
            <style>
                {r#"
                    .services {
                        padding: 6rem 0;
                        background: white;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        background: white;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #f3f4f6;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.3s, translate 0.3s ease-out;
                    }
                    .service-card:hover {
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        translate: 0 -12px;
                    }
                    .service-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        background: #dbeafe;
                        color: #1e3a8a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                        transition: background 0.3s, color 0.3s, transform 0.3s;
                    }
                    .service-icon svg {
                        width: 2rem;
                        height: 2rem;
                    }
                    .service-card:hover .service-icon {
                        background: #1e3a8a;
                        color: white;
                        transform: scale(1.1) rotate(5deg);
                    }
                    .service-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                        color: #111827;
                        transition: color 0.3s;
                    }
                    .service-card:hover h3 {
                        color: #1e3a8a;
                    }
                    .service-card p {
                        color: #4b5563;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading" style={style_at(&poses, 0)}>
                    <h2 class="gradient-text serif">{"Nuestros Servicios"}</h2>
                    <p>{"Soluciones integrales para la gestión y crecimiento de su patrimonio"}</p>
                </div>

                <div ref={node} class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div key={service.title} class="service-card" style={style_at(&poses, i + 1)}>
                            <div class="service-icon">
                                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={service.icon} />
                                </svg>
                            </div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
