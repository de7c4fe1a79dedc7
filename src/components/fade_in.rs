use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum FadeDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct FadeInSectionProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(FadeDirection::Up)]
    pub direction: FadeDirection,
    /// Transition delay in seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    /// Starting offset in pixels.
    #[prop_or(30.0)]
    pub distance: f64,
}

/// Reveals its children the first time they enter the viewport, then stops
/// observing them.
#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInSectionProps) -> Html {
    let visible = use_state(|| false);
    let node = use_node_ref();

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node| {
                let callback = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                visible.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
                    .expect("failed to create IntersectionObserver");
                if let Some(element) = node.cast::<Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            node.clone(),
        );
    }

    let hidden_transform = match props.direction {
        FadeDirection::Up => format!("translateY({}px)", props.distance),
        FadeDirection::Down => format!("translateY(-{}px)", props.distance),
        FadeDirection::Left => format!("translateX({}px)", props.distance),
        FadeDirection::Right => format!("translateX(-{}px)", props.distance),
    };

    let style = if *visible {
        format!(
            "opacity: 1; transform: translate(0, 0); transition: opacity 0.6s ease-out, transform 0.6s ease-out {}s;",
            props.delay
        )
    } else {
        format!(
            "opacity: 0; transform: {}; transition: opacity 0.6s ease-out, transform 0.6s ease-out {}s;",
            hidden_transform, props.delay
        )
    };

    html! {
        <div ref={node} class={props.class.clone()} {style}>
            { for props.children.iter() }
        </div>
    }
}
