use log::info;
use yew::prelude::*;

mod config;
mod contact;
mod hooks;
mod motion;
mod sections;

use sections::{
    about::About,
    contact::Contact,
    cta::Cta,
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    services::Services,
    stats::Stats,
};

#[function_component]
pub fn App() -> Html {
    html! {
        <>
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: 'Inter', system-ui, -apple-system, sans-serif;
                        color: #111827;
                        -webkit-font-smoothing: antialiased;
                    }
                    *, *::before, *::after {
                        box-sizing: border-box;
                    }
                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .serif {
                        font-family: 'Playfair Display', Georgia, serif;
                    }
                    .gradient-primary {
                        background: linear-gradient(135deg, #1e3a8a 0%, #1d4ed8 50%, #3b82f6 100%);
                    }
                    .gradient-text {
                        background: linear-gradient(135deg, #1e3a8a, #3b82f6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .section-heading p {
                        color: #4b5563;
                        font-size: 1.25rem;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                "#}
            </style>
            <Navbar />
            <main>
                <Hero />
                <Stats />
                <Services />
                <About />
                <Cta />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
