use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::services::service_titles;
use super::{rise, slide};
use crate::config;
use crate::contact::{deliver, ContactFormState, Field, SERVICE_PLACEHOLDER};
use crate::hooks::{style_at, use_acknowledgement, use_entrance, use_in_view, InViewOptions};
use crate::motion::Timeline;

struct InfoBlock {
    icon: &'static [&'static str],
    title: &'static str,
    lines: &'static [&'static str],
    is_link: bool,
}

const CONTACT_INFO: &[InfoBlock] = &[
    InfoBlock {
        icon: &[
            "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
            "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
        ],
        title: "Dirección",
        lines: &[
            "Av. Alcalde Jorge Monckeberg #1721",
            "Ñuñoa, Santiago",
            "Región Metropolitana, Chile",
        ],
        is_link: false,
    },
    InfoBlock {
        icon: &["M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"],
        title: "Email",
        lines: &["contacto@aequitascapital.cl"],
        is_link: true,
    },
    InfoBlock {
        icon: &["M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z"],
        title: "Horario de Atención",
        lines: &["Lunes a Viernes: 9:00 - 18:00", "Sábado: 10:00 - 14:00"],
        is_link: false,
    },
];

const HEADING: usize = 0;
const INFO: usize = 1;
const CARD: usize = 2;
const FORM: usize = 3;

fn contact_timeline() -> Timeline {
    Timeline::new()
        .push(rise(50.0, 600.0))
        .push(slide(-50.0, 800.0))
        .push(rise(20.0, 600.0).delayed(400.0))
        .push(slide(50.0, 800.0).delayed(200.0))
}

/// `(value, label)` for each service option. The placeholder submits empty.
fn service_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once(("", SERVICE_PLACEHOLDER))
        .chain(service_titles().map(|title| (title, title)))
        .collect()
}

/// Option matching the stored value, or the placeholder.
fn service_index(options: &[(&str, &str)], servicio: &str) -> usize {
    options
        .iter()
        .position(|(value, _)| *value == servicio)
        .unwrap_or(0)
}

/// Value of whichever form control fired `e`.
fn control_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

#[function_component]
pub fn Contact() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::default());
    let poses = use_entrance(in_view, contact_timeline());
    let form = use_state(ContactFormState::default);
    let service_ref = use_node_ref();
    let ack = use_acknowledgement(config::ACK_WINDOW_MS);

    let update = {
        let form = form.clone();
        move |field: Field, e: &Event| {
            if let Some(value) = control_value(e) {
                let mut next = (*form).clone();
                next.update(field, value);
                form.set(next);
            }
        }
    };
    let on_input = |field: Field| {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let e: &Event = &e;
            update(field, e)
        })
    };
    let on_change = |field: Field| {
        let update = update.clone();
        Callback::from(move |e: Event| update(field, &e))
    };

    let onsubmit = {
        let form = form.clone();
        let service_ref = service_ref.clone();
        let acknowledge = ack.acknowledge.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let fields = match next.begin_submit() {
                Ok(fields) => fields,
                Err(err) => {
                    warn!("Contact form not sent: {}", err);
                    form.set(next);
                    return;
                }
            };
            form.set(next.clone());

            let form = form.clone();
            let service_ref = service_ref.clone();
            let acknowledge = acknowledge.clone();
            spawn_local(async move {
                let result = deliver(config::contact_endpoint(), &fields).await;
                if next.complete(result) {
                    info!("Contact form submitted");
                    // a select the user has touched ignores `selected`, so reset it directly
                    if let Some(select) = service_ref.cast::<HtmlSelectElement>() {
                        let index = service_index(&service_options(), &next.fields.servicio);
                        select.set_selected_index(index as i32);
                    }
                    acknowledge.emit(());
                }
                form.set(next);
            });
        })
    };

    let sending = form.is_sending();
    let options = service_options();
    let selected_service = service_index(&options, &form.fields.servicio);
    let button_label = if ack.acknowledged {
        "¡Mensaje Enviado!"
    } else if sending {
        "Enviando..."
    } else {
        "Enviar Consulta"
    };

    html! {
        <section id="contacto" class="contact">
            <style>
                {r#"
                    .contact {
                        padding: 6rem 0;
                        background: white;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
                        gap: 3rem;
                    }
                    .info-block {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .info-icon {
                        width: 3rem;
                        height: 3rem;
                        flex-shrink: 0;
                        border-radius: 9999px;
                        background: #dbeafe;
                        color: #1e3a8a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .info-icon svg {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .info-block h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                        color: #111827;
                    }
                    .info-block p {
                        color: #4b5563;
                    }
                    .info-block a {
                        display: block;
                        color: #1e3a8a;
                        text-decoration: none;
                    }
                    .info-block a:hover {
                        color: #1d4ed8;
                    }
                    .attention-card {
                        margin-top: 3rem;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: linear-gradient(to bottom right, #eff6ff, #dbeafe);
                    }
                    .attention-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                        color: #1e3a8a;
                    }
                    .attention-card p {
                        color: #374151;
                        line-height: 1.6;
                    }
                    .contact-form {
                        background: #f9fafb;
                        padding: 2rem;
                        border-radius: 1rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .form-field {
                        margin-bottom: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        color: #374151;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #d1d5db;
                        font: inherit;
                        transition: border-color 0.2s, box-shadow 0.2s;
                    }
                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #3b82f6;
                        box-shadow: 0 0 0 3px #bfdbfe;
                    }
                    .form-error {
                        margin-bottom: 1rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        background: #fef2f2;
                        color: #b91c1c;
                    }
                    .form-submit {
                        width: 100%;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.5rem;
                        color: white;
                        font-weight: 600;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: transform 0.15s, box-shadow 0.3s;
                    }
                    .form-submit:hover {
                        transform: scale(1.02);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .form-submit:active {
                        transform: scale(0.98);
                    }
                    .form-submit:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading" style={style_at(&poses, HEADING)}>
                    <h2 class="gradient-text serif">{"Contacto"}</h2>
                    <p>{"Estamos aquí para atender sus consultas y brindarle el mejor servicio"}</p>
                </div>

                <div ref={node} class="contact-grid">
                    <div style={style_at(&poses, INFO)}>
                        { for CONTACT_INFO.iter().map(|block| html! {
                            <div key={block.title} class="info-block">
                                <div class="info-icon">
                                    <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        { for block.icon.iter().map(|d| html! {
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*d} />
                                        }) }
                                    </svg>
                                </div>
                                <div>
                                    <h3>{block.title}</h3>
                                    { for block.lines.iter().map(|line| if block.is_link {
                                        html! { <a href={format!("mailto:{}", line)}>{*line}</a> }
                                    } else {
                                        html! { <p>{*line}</p> }
                                    }) }
                                </div>
                            </div>
                        }) }

                        <div class="attention-card" style={style_at(&poses, CARD)}>
                            <h3>{"Atención Personalizada"}</h3>
                            <p>
                                {"Nuestro equipo está disponible para brindarle asesoría especializada. Todas las consultas son tratadas con la máxima confidencialidad."}
                            </p>
                        </div>
                    </div>

                    <div style={style_at(&poses, FORM)}>
                        <form class="contact-form" {onsubmit}>
                            if let Some(error) = form.error() {
                                <div class="form-error" role="alert">{error.to_string()}</div>
                            }

                            <div class="form-field">
                                <label for="nombre">{"Nombre Completo"}</label>
                                <input
                                    type="text"
                                    id="nombre"
                                    name="nombre"
                                    required=true
                                    placeholder="Juan Pérez"
                                    disabled={sending}
                                    value={form.fields.nombre.clone()}
                                    oninput={on_input(Field::Nombre)}
                                />
                            </div>

                            <div class="form-field">
                                <label for="email">{"Email"}</label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required=true
                                    placeholder="juan@ejemplo.com"
                                    disabled={sending}
                                    value={form.fields.email.clone()}
                                    oninput={on_input(Field::Email)}
                                />
                            </div>

                            <div class="form-field">
                                <label for="telefono">{"Teléfono"}</label>
                                <input
                                    type="tel"
                                    id="telefono"
                                    name="telefono"
                                    placeholder="+56 9 1234 5678"
                                    disabled={sending}
                                    value={form.fields.telefono.clone()}
                                    oninput={on_input(Field::Telefono)}
                                />
                            </div>

                            <div class="form-field">
                                <label for="servicio">{"Servicio de Interés"}</label>
                                <select
                                    ref={service_ref}
                                    id="servicio"
                                    name="servicio"
                                    disabled={sending}
                                    onchange={on_change(Field::Servicio)}
                                >
                                    { for options.iter().enumerate().map(|(i, (value, label))| html! {
                                        <option
                                            key={*label}
                                            value={*value}
                                            selected={i == selected_service}
                                        >
                                            {*label}
                                        </option>
                                    }) }
                                </select>
                            </div>

                            <div class="form-field">
                                <label for="mensaje">{"Mensaje"}</label>
                                <textarea
                                    id="mensaje"
                                    name="mensaje"
                                    rows="4"
                                    placeholder="Cuéntenos sobre su consulta..."
                                    disabled={sending}
                                    value={form.fields.mensaje.clone()}
                                    oninput={on_input(Field::Mensaje)}
                                />
                            </div>

                            <button type="submit" class="form-submit gradient-primary" disabled={sending}>
                                {button_label}
                            </button>
                        </form>
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
    fn test_form_enters_after_info_column() {
        let timeline = contact_timeline();
        let entries = timeline.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[INFO].start_ms(), 0.0);
        assert_eq!(entries[FORM].start_ms(), 200.0);
        assert_eq!(entries[CARD].start_ms(), 400.0);
    }

    #[test]
    fn test_sent_form_points_service_select_at_placeholder() {
        let options = service_options();
        assert_eq!(options[0], ("", SERVICE_PLACEHOLDER));

        let mut form = ContactFormState::default();
        form.update(Field::Nombre, "Ana Rojas".into());
        form.update(Field::Email, "ana@ejemplo.com".into());
        form.update(Field::Servicio, "Gestión Inmobiliaria".into());
        assert_eq!(service_index(&options, &form.fields.servicio), 2);

        let sent = form.begin_submit().unwrap();
        assert_eq!(sent["servicio"], "Gestión Inmobiliaria");
        assert!(form.complete(Ok(())));
        assert_eq!(service_index(&options, &form.fields.servicio), 0);
    }

    #[test]
    fn test_placeholder_choice_submits_empty() {
        let options = service_options();
        let mut form = ContactFormState::default();
        form.update(Field::Nombre, "Ana Rojas".into());
        form.update(Field::Email, "ana@ejemplo.com".into());
        form.update(Field::Servicio, options[0].0.to_string());
        assert_eq!(form.begin_submit().unwrap()["servicio"], "");
    }
}
