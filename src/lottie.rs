//! Bindings to the lottie-web player loaded globally from `index.html`.
//!
//! The site only scrubs: the animation is loaded paused and every update is
//! a direct `goToAndStop` seek, never a play.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Object, Reflect};
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    pub type AnimationItem;

    #[wasm_bindgen(js_namespace = lottie, js_name = loadAnimation, catch)]
    fn load_animation_raw(params: &Object) -> Result<AnimationItem, JsValue>;

    /// Seeks to `value` (a frame when `is_frame` is set) without playing.
    #[wasm_bindgen(method, js_name = goToAndStop)]
    pub fn go_to_and_stop(this: &AnimationItem, value: f64, is_frame: bool);

    /// Total duration; in frames when `in_frames` is set.
    #[wasm_bindgen(method, js_name = getDuration)]
    pub fn get_duration(this: &AnimationItem, in_frames: bool) -> f64;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &AnimationItem);

    #[wasm_bindgen(method, js_name = addEventListener)]
    pub fn add_event_listener(this: &AnimationItem, name: &str, callback: &Function);
}

#[derive(Serialize)]
struct LoadSettings<'a> {
    renderer: &'a str,
    #[serde(rename = "loop")]
    looping: bool,
    autoplay: bool,
    path: &'a str,
}

/// Loads the animation paused into `container`. Returns `None` when the
/// player script is missing or rejects the settings; callers treat that as
/// "stays un-seekable" rather than an error.
pub fn load_animation(container: &Element, path: &str) -> Option<AnimationItem> {
    let settings = serde_wasm_bindgen::to_value(&LoadSettings {
        renderer: "svg",
        looping: false,
        autoplay: false,
        path,
    })
    .ok()?;
    let params: Object = settings.dyn_into().ok()?;
    Reflect::set(&params, &JsValue::from_str("container"), container).ok()?;
    load_animation_raw(&params).ok()
}
