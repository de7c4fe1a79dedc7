use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::chart_animation::ChartAnimation;
use crate::components::fade_in::{FadeDirection, FadeInSection};
use crate::header_bus::HeaderBus;
use crate::scroll::{ScrollRange, VisibilityGate, HIDE_BAND_HIGH, HIDE_BAND_LOW};

/// Tall section that scrubs the chart animation as the page scrolls
/// through it and hides the fixed header while the animation is mid-band.
#[function_component(ResultsSection)]
pub fn results_section() -> Html {
    let bus = use_context::<HeaderBus>().expect("HeaderBus context not set");
    let progress = use_state(|| 0.0f64);
    let section = use_node_ref();

    {
        let bus = bus.clone();
        let progress = progress.clone();
        let section = section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                // The scrollable span: from the section's top until its
                // bottom reaches the bottom of the viewport.
                let range: Rc<RefCell<Option<ScrollRange>>> = Rc::new(RefCell::new(None));
                if let Some(element) = section.cast::<HtmlElement>() {
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let start = f64::from(element.offset_top());
                    let end = start + f64::from(element.offset_height()) - viewport;
                    *range.borrow_mut() = Some(ScrollRange::new(start, end));
                }

                let gate = Rc::new(RefCell::new(VisibilityGate::new(
                    HIDE_BAND_LOW,
                    HIDE_BAND_HIGH,
                )));

                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new({
                    let bus = bus.clone();
                    let gate = gate.clone();
                    let range = range.clone();
                    let progress = progress.clone();
                    move || {
                        // Not measured yet: skip this tick.
                        let Some(range) = *range.borrow() else { return };
                        let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                        let value = range.progress(scroll_y);
                        progress.set(value);
                        if let Some(visible) = gate.borrow_mut().update(value) {
                            bus.emit(visible);
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Evaluate once so a page restored mid-scroll starts right.
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Never leave the header stuck hidden behind us.
                    if let Some(visible) = gate.borrow_mut().release() {
                        bus.emit(visible);
                    }
                }
            },
            (),
        );
    }

    html! {
        <section id="resultados" ref={section} class="results-section">
            <div class="results-heading">
                <h2>{"Veja sua empresa alcançar novos patamares"}</h2>
            </div>
            <ChartAnimation progress={*progress} />
            <div class="results-content">
                <StatsContent />
            </div>
            <style>
                {r#"
                    .results-section {
                        position: relative;
                        height: 200vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        background: linear-gradient(to bottom, #f9fafb, #fff);
                    }
                    .results-heading {
                        position: absolute;
                        top: 3rem;
                        left: 0;
                        right: 0;
                        text-align: center;
                        z-index: 5;
                    }
                    .results-heading h2 {
                        font-size: 1.9rem;
                        font-weight: 700;
                        color: #024570;
                    }
                    .results-content {
                        width: 100%;
                        margin-top: 100vh;
                    }
                "#}
            </style>
        </section>
    }
}

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: "500+", label: "Clientes Satisfeitos" },
    Stat { value: "50+", label: "Anos de Experiência" },
    Stat { value: "98%", label: "Taxa de Retenção" },
    Stat { value: "24h", label: "Suporte Ágil" },
];

#[function_component(StatsContent)]
fn stats_content() -> Html {
    html! {
        <div class="stats-block">
            <FadeInSection direction={FadeDirection::Down}>
                <h3 class="stats-title">{"Nossos Números"}</h3>
            </FadeInSection>
            <div class="stats-grid">
                {
                    STATS.iter().enumerate().map(|(index, stat)| html! {
                        <FadeInSection delay={0.1 * index as f64}>
                            <div class="stat-card">
                                <span class="stat-value">{stat.value}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        </FadeInSection>
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                    .stats-block {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .stats-title {
                        text-align: center;
                        font-size: 1.6rem;
                        font-weight: 700;
                        color: #024570;
                        margin-bottom: 2.5rem;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 1.5rem;
                    }
                    .stat-card {
                        background: #fff;
                        border: 1px solid rgba(2, 69, 112, 0.08);
                        border-radius: 16px;
                        box-shadow: 0 8px 24px rgba(2, 69, 112, 0.06);
                        padding: 2rem 1rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .stat-value {
                        font-size: 2.2rem;
                        font-weight: 700;
                        color: #35c13e;
                    }
                    .stat-label {
                        color: #4b5563;
                        font-size: 0.95rem;
                    }
                "#}
            </style>
        </div>
    }
}
