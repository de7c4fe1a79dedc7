use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::lottie::{self, AnimationItem};
use crate::scroll;

const ANIMATION_PATH: &str = "/animjson/graph.json";

#[derive(Properties, PartialEq)]
pub struct ChartAnimationProps {
    /// Playback position in [0, 1]; every change is a direct seek.
    pub progress: f64,
}

/// The pre-rendered chart animation, scrubbed by whatever progress value
/// the parent passes down. Seeks are ignored until the asset has loaded
/// and reported its frame count.
#[function_component(ChartAnimation)]
pub fn chart_animation(props: &ChartAnimationProps) -> Html {
    let container = use_node_ref();
    let player = use_mut_ref(|| Option::<AnimationItem>::None);
    let total_frames = use_mut_ref(|| 0.0f64);

    {
        let container = container.clone();
        let player = player.clone();
        let total_frames = total_frames.clone();
        use_effect_with_deps(
            move |_| {
                let mut loaded_callback: Option<Closure<dyn FnMut()>> = None;
                if let Some(element) = container.cast::<Element>() {
                    if let Some(animation) = lottie::load_animation(&element, ANIMATION_PATH) {
                        let on_loaded = Closure::wrap(Box::new({
                            let player = player.clone();
                            let total_frames = total_frames.clone();
                            move || {
                                if let Some(animation) = player.borrow().as_ref() {
                                    *total_frames.borrow_mut() = animation.get_duration(true);
                                    animation.go_to_and_stop(0.0, true);
                                }
                            }
                        })
                            as Box<dyn FnMut()>);
                        animation.add_event_listener(
                            "DOMLoaded",
                            on_loaded.as_ref().unchecked_ref(),
                        );
                        *player.borrow_mut() = Some(animation);
                        loaded_callback = Some(on_loaded);
                    }
                }

                let player = player.clone();
                let total_frames = total_frames.clone();
                move || {
                    drop(loaded_callback);
                    if let Some(animation) = player.borrow_mut().take() {
                        animation.destroy();
                    }
                    *total_frames.borrow_mut() = 0.0;
                }
            },
            (),
        );
    }

    {
        let player = player.clone();
        let total_frames = total_frames.clone();
        use_effect_with_deps(
            move |progress| {
                let frames = *total_frames.borrow();
                if frames > 0.0 {
                    if let Some(animation) = player.borrow().as_ref() {
                        animation.go_to_and_stop(scroll::frame_at(*progress, frames), true);
                    }
                }
                || ()
            },
            props.progress,
        );
    }

    html! {
        <div class="chart-animation-stage">
            <div ref={container} class="chart-animation-canvas"></div>
            <style>
                {r#"
                    .chart-animation-stage {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #fff;
                    }
                    .chart-animation-canvas {
                        width: 100%;
                        max-width: 64rem;
                    }
                "#}
            </style>
        </div>
    }
}
