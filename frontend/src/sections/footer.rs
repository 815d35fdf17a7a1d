use chrono::Datelike;
use yew::prelude::*;

use super::{Logo, NAV_LINKS};

const COMPANY: &str = "Inversiones AEQUITAS Capital SPA";

fn copyright(year: i32) -> String {
    format!("© {} {}. Todos los derechos reservados.", year, COMPANY)
}

#[function_component]
pub fn Footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <style>
                {r#"
                    .footer {
                        background: #111827;
                        color: white;
                        padding: 3rem 0;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .footer-brand svg {
                        width: 2rem;
                        height: 2rem;
                        color: #60a5fa;
                    }
                    .footer-brand span {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .footer h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer p,
                    .footer li {
                        color: #9ca3af;
                        font-size: 0.9rem;
                        line-height: 1.6;
                    }
                    .footer ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer li {
                        margin-bottom: 0.5rem;
                    }
                    .footer a {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer a:hover {
                        color: white;
                    }
                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        padding-top: 2rem;
                        text-align: center;
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <Logo />
                            <span class="serif">{"AEQUITAS Capital"}</span>
                        </div>
                        <p>{"Inversión y administración profesional de patrimonio con compromiso y excelencia."}</p>
                    </div>

                    <div>
                        <h3>{"Enlaces Rápidos"}</h3>
                        <ul>
                            { for NAV_LINKS.iter().map(|(href, label)| html! {
                                <li key={*href}><a href={*href}>{*label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3>{"Legal"}</h3>
                        <p>{COMPANY}</p>
                        <p>{"Sociedad por Acciones"}</p>
                        <p>{"Domicilio: Ñuñoa, Santiago"}</p>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright(year)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright(2025),
            "© 2025 Inversiones AEQUITAS Capital SPA. Todos los derechos reservados."
        );
    }
}
