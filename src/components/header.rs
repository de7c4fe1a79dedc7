use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::header_bus::HeaderBus;
use crate::scroll::{
    self, NAV_REFERENCE_LINE, SCROLLED_THRESHOLD, SCROLL_TO_OFFSET,
};
use crate::Route;

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("inicio", "Início"),
    ("servicos", "Serviços"),
    ("resultados", "Resultados"),
    ("contato", "Contato"),
];

/// Smooth-scrolls to a section, leaving room for the fixed header.
/// Silently does nothing when the target is not on the current page.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(element) = document.get_element_by_id(id) else { return };
    let Ok(element) = element.dyn_into::<HtmlElement>() else { return };

    let options = ScrollToOptions::new();
    options.set_top(f64::from(element.offset_top()) - SCROLL_TO_OFFSET);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Header)]
pub fn header() -> Html {
    let bus = use_context::<HeaderBus>().expect("HeaderBus context not set");
    let visible = use_state(|| true);
    let scrolled = use_state(|| false);
    let active_section = use_state(|| Option::<String>::None);
    let menu_open = use_state(|| false);

    // Visibility notifications from the results animation.
    {
        let bus = bus.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let id = bus.subscribe(Callback::from({
                    let visible = visible.clone();
                    move |value: bool| visible.set(value)
                }));
                move || {
                    bus.unsubscribe(id);
                    // The emitter may be gone; come back visible no matter
                    // what was last received.
                    visible.set(true);
                }
            },
            (),
        );
    }

    // Own scroll tracking: "scrolled" styling and the active nav item.
    {
        let scrolled = scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    scrolled.set(scroll_y > SCROLLED_THRESHOLD);

                    let mut rects = Vec::with_capacity(NAV_SECTIONS.len());
                    for (id, _) in NAV_SECTIONS {
                        if let Some(element) = document.get_element_by_id(id) {
                            let rect = element.get_bounding_client_rect();
                            rects.push((id, rect.top(), rect.bottom()));
                        }
                    }
                    active_section.set(
                        scroll::section_at_line(&rects, NAV_REFERENCE_LINE)
                            .map(str::to_string),
                    );
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let nav_item = |id: &'static str, label: &'static str| {
        let class = if active_section.as_deref() == Some(id) {
            "nav-link active"
        } else {
            "nav-link"
        };
        html! {
            <button class={class} onclick={nav_to(id)}>{label}</button>
        }
    };

    html! {
        <header class={classes!(
            "site-header",
            (!*visible).then(|| "header-hidden"),
            (*scrolled).then(|| "scrolled"),
        )}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    {"Bozza Contabilidade"}
                </Link<Route>>

                <nav class="header-nav">
                    { for NAV_SECTIONS.iter().map(|&(id, label)| nav_item(id, label)) }
                </nav>

                <button class="header-cta" onclick={nav_to("contato")}>
                    {"Fale Conosco"}
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_SECTIONS.iter().map(|&(id, label)| nav_item(id, label)) }
                            <button class="header-cta" onclick={nav_to("contato")}>
                                {"Fale Conosco"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transform: translateY(0);
                        /* Showing eases back in; hiding (below) snaps faster. */
                        transition: transform 0.5s ease, background 0.3s ease,
                            box-shadow 0.3s ease;
                    }
                    .site-header.header-hidden {
                        transform: translateY(-100%);
                        transition: transform 0.2s ease-in;
                    }
                    .site-header.scrolled {
                        background: rgba(247, 246, 242, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                    }
                    .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 6rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .header-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #024570;
                    }
                    .header-nav {
                        display: flex;
                        gap: 2.5rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        font-size: 0.9rem;
                        font-weight: 500;
                        color: #3b82f6;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #60a5fa;
                    }
                    .nav-link.active {
                        color: #024570;
                        border-bottom: 2px solid #35c13e;
                    }
                    .header-cta {
                        background: #3b82f6;
                        color: #fff;
                        border: none;
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        transition: background 0.3s ease;
                    }
                    .header-cta:hover {
                        background: #2563eb;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #024570;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .header-nav, .header-content > .header-cta {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                        .mobile-menu {
                            position: fixed;
                            inset: 6rem 0 0 0;
                            background: #f7f6f2;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            gap: 1.5rem;
                            padding-top: 2rem;
                            z-index: 40;
                        }
                        .mobile-menu .nav-link {
                            font-size: 1.25rem;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
