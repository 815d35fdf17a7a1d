use log::warn;
use yew::prelude::*;

use super::rise;
use crate::hooks::{style_at, use_count_up, use_entrance, use_in_view, InViewOptions};
use crate::motion::{Stagger, StatValue, Timeline};

const STATS: &[(&str, &str)] = &[
    ("10+", "Años de Experiencia"),
    ("100%", "Confidencialidad"),
    ("24/7", "Atención Personalizada"),
];

#[derive(Properties, PartialEq)]
struct StatCardProps {
    value: AttrValue,
    label: AttrValue,
    style: String,
    triggered: bool,
}

#[function_component]
fn StatCard(props: &StatCardProps) -> Html {
    let stat = match props.value.parse::<StatValue>() {
        Ok(stat) => Some(stat),
        Err(e) => {
            warn!("Showing stat without count-up: {}", e);
            None
        }
    };
    let shown = use_count_up(stat.as_ref().map_or(0, |s| s.number), props.triggered);

    let text = match &stat {
        Some(stat) => stat.display(shown),
        None => props.value.to_string(),
    };

    html! {
        <div class="stat" style={props.style.clone()}>
            <div class="stat-value gradient-text">{text}</div>
            <p class="stat-label">{props.label.clone()}</p>
        </div>
    }
}

#[function_component]
pub fn Stats() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::default());
    let poses = use_entrance(
        in_view,
        Timeline::staggered(&rise(50.0, 600.0), Stagger::new(0.0, 100.0), STATS.len()),
    );

    html! {
        <section class="stats">
            <style>
                {r#"
                    .stats {
                        padding: 5rem 0;
                        background: #f9fafb;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                        text-align: center;
                    }
                    .stat-value {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                        transition: transform 0.3s;
                    }
                    .stat-value:hover {
                        transform: scale(1.1);
                    }
                    .stat-label {
                        color: #4b5563;
                        font-size: 1.125rem;
                    }
                "#}
            </style>
            <div class="container">
                <div ref={node} class="stats-grid">
                    { for STATS.iter().enumerate().map(|(i, (value, label))| html! {
                        <StatCard
                            key={*label}
                            value={*value}
                            label={*label}
                            style={style_at(&poses, i)}
                            triggered={in_view}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
