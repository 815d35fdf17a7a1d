use yew::prelude::*;
use yew_hooks::prelude::*;

use super::{Logo, NAV_LINKS};
use crate::config;
use crate::hooks::{style_at, use_entrance, use_scrolled};
use crate::motion::{Easing, Pose, Stagger, Timeline, Transition, Variants};

fn nav_timeline() -> Timeline {
    let bar = Variants::new(
        Pose::new().opacity(0.0).y(-100.0),
        Pose::new().opacity(1.0).y(0.0),
        Transition::new(600.0).easing(Easing::NAV_SLIDE),
    );
    let link = Variants::new(
        Pose::new().opacity(0.0).y(-20.0),
        Pose::new().opacity(1.0).y(0.0),
        Transition::new(500.0),
    );
    Timeline::new()
        .push(bar)
        .extend(Timeline::staggered(&link, Stagger::new(100.0, 100.0), NAV_LINKS.len()))
}

#[function_component]
pub fn Navbar() -> Html {
    let menu_open = use_bool_toggle(false);
    let scrolled = use_scrolled(config::NAV_SCROLL_THRESHOLD_PX);
    let poses = use_entrance(true, nav_timeline());

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.toggle())
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))} style={style_at(&poses, 0)}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: background 0.5s, box-shadow 0.5s, padding 0.5s;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.98);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 0.5rem 0;
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 1.5rem;
                    }
                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-brand svg {
                        width: 2.5rem;
                        height: 2.5rem;
                        color: #1e3a8a;
                    }
                    .nav-brand span {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        color: #374151;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: -4px;
                        height: 2px;
                        width: 0;
                        background: linear-gradient(to right, #1e3a8a, #3b82f6);
                        transition: width 0.3s;
                    }
                    .nav-link:hover {
                        color: #1e3a8a;
                    }
                    .nav-link:hover::after {
                        width: 100%;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #374151;
                        cursor: pointer;
                    }
                    .burger-menu svg {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .mobile-menu {
                        padding: 0 1.5rem 1rem;
                    }
                    .mobile-menu a {
                        display: block;
                        padding: 0.4rem 0;
                        color: #374151;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="container nav-content">
                <div class="nav-brand">
                    <Logo />
                    <span class="gradient-text serif">{"AEQUITAS"}</span>
                </div>

                <div class="nav-links">
                    { for NAV_LINKS.iter().enumerate().map(|(i, (href, label))| html! {
                        <a class="nav-link" href={*href} style={style_at(&poses, i + 1)}>{*label}</a>
                    }) }
                </div>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label="Menú de navegación"
                    aria-expanded={(*menu_open).to_string()}
                >
                    <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu" role="menu">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} role="menuitem" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>
            }
        </nav>
    }
}
