//! WASM bindings for svgdsl.
//!
//! Gives a browser host the rendered sample document, either as bare markup
//! or wrapped for the preview view, plus the pixel/millimeter helper.

use svgdsl_render::{preview, render_with, sample, RenderOptions};
use wasm_bindgen::prelude::*;

/// Render the sample document as compact markup.
#[wasm_bindgen(js_name = renderSample)]
pub fn render_sample() -> String {
    render_sample_with(false)
}

/// Render the sample document, optionally indented.
#[wasm_bindgen(js_name = renderSampleWith)]
pub fn render_sample_with(pretty: bool) -> String {
    let options = RenderOptions {
        pretty,
        ..RenderOptions::default()
    };
    render_with(&sample::document(), &options)
}

/// The sample document wrapped for the preview view.
#[wasm_bindgen(js_name = previewSample)]
pub fn preview_sample() -> String {
    preview::wrap(&render_sample())
}

/// Render the sample and return `{ markup, preview }`.
///
/// Throws a JS error if the object cannot be populated.
#[wasm_bindgen(js_name = sampleBundle)]
pub fn sample_bundle() -> Result<JsValue, JsError> {
    let js_obj = js_sys::Object::new();
    for (key, value) in bundle_entries() {
        js_sys::Reflect::set(&js_obj, &key.into(), &value.into())
            .map_err(|_| JsError::new(&format!("Failed to set {key} property")))?;
    }

    Ok(js_obj.into())
}

/// Property names and values of the object built by [`sample_bundle`].
fn bundle_entries() -> [(&'static str, String); 2] {
    let markup = render_sample();
    let wrapped = preview::wrap(&markup);
    [("markup", markup), ("preview", wrapped)]
}

/// Convert pixels to millimeters at 90 dpi.
///
/// JS numbers are doubles; negative and fractional input is truncated to a
/// whole pixel count first.
#[wasm_bindgen(js_name = pixelToMillimeter)]
pub fn pixel_to_millimeter(pixels: f64) -> f64 {
    svgdsl_model::pixel_to_millimeter(pixels.max(0.0) as u64)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
