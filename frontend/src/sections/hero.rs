use yew::prelude::*;

use super::rise;
use crate::config;
use crate::hooks::{style_at, use_entrance};
use crate::motion::particles::{self, Particle};
use crate::motion::{Pose, Stagger, Timeline, Transition, Variants};

const HERO_ITEMS: usize = 4;

/// Headline, tagline, description and the button row, staggered; then the
/// two buttons, which pop in together with their row.
fn hero_timeline() -> Timeline {
    let stagger = Stagger::new(300.0, 150.0);
    let button = Variants::new(
        Pose::new().opacity(0.0).y(30.0).scale(0.9),
        Pose::new().opacity(1.0).y(0.0).scale(1.0),
        Transition::new(600.0),
    )
    .delayed(stagger.delay_for(HERO_ITEMS - 1));

    Timeline::staggered(&rise(40.0, 800.0), stagger, HERO_ITEMS)
        .push(button.clone())
        .push(button)
}

#[function_component]
pub fn Hero() -> Html {
    let particles = use_state(|| particles::generate(config::HERO_PARTICLE_COUNT, &mut rand::thread_rng()));
    let poses = use_entrance(true, hero_timeline());

    html! {
        <section id="inicio" class="hero gradient-primary">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    @keyframes hero-float {
                        0% { transform: translateY(0) translateX(0); opacity: 0; }
                        10% { opacity: 1; }
                        90% { opacity: 1; }
                        100% { transform: translateY(-100vh) translateX(50px); opacity: 0; }
                    }
                    @keyframes hero-bob {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    .hero-particles {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-particle {
                        position: absolute;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        color: white;
                    }
                    .hero-content h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .hero-tagline {
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        font-weight: 300;
                        margin-bottom: 2rem;
                    }
                    .hero-description {
                        font-size: clamp(1.1rem, 2vw, 1.25rem);
                        font-weight: 300;
                        max-width: 48rem;
                        margin: 0 auto 3rem;
                        opacity: 0.9;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-button {
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        text-decoration: none;
                        transition: box-shadow 0.3s, background 0.3s, color 0.3s;
                    }
                    .hero-button.primary {
                        background: white;
                        color: #1e3a8a;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .hero-button.primary:hover {
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                    }
                    .hero-button.secondary {
                        border: 2px solid white;
                        color: white;
                    }
                    .hero-button.secondary:hover {
                        background: white;
                        color: #1e3a8a;
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        color: white;
                        animation: hero-bob 1.5s ease-in-out infinite;
                    }
                    .scroll-hint svg {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                "#}
            </style>

            <div class="hero-particles">
                { for particles.iter().map(|p: &Particle| html! {
                    <div class="hero-particle" style={p.style()} />
                }) }
            </div>

            <div class="container hero-content">
                <h1 class="serif" style={style_at(&poses, 0)}>{"AEQUITAS Capital"}</h1>
                <p class="hero-tagline" style={style_at(&poses, 1)}>
                    {"Inversión y Administración de Patrimonio"}
                </p>
                <p class="hero-description" style={style_at(&poses, 2)}>
                    {"Gestión profesional de recursos y bienes con enfoque estratégico en inversiones y asesoramiento patrimonial"}
                </p>
                <div class="hero-actions" style={style_at(&poses, 3)}>
                    <a href="#contacto" class="hero-button primary" style={style_at(&poses, 4)}>
                        {"Solicitar Asesoría"}
                    </a>
                    <a href="#servicios" class="hero-button secondary" style={style_at(&poses, 5)}>
                        {"Conocer Servicios"}
                    </a>
                </div>
            </div>

            <div class="scroll-hint">
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                </svg>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_start_with_their_row() {
        let timeline = hero_timeline();
        let entries = timeline.entries();
        assert_eq!(entries.len(), HERO_ITEMS + 2);
        assert_eq!(entries[3].start_ms(), 300.0 + 3.0 * 150.0);
        assert_eq!(entries[4].start_ms(), entries[3].start_ms());
        assert_eq!(entries[5].start_ms(), entries[3].start_ms());
        assert_eq!(timeline.end_ms(), 750.0 + 800.0);
    }
}
