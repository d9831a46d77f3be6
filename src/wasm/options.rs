use wasm_bindgen::JsValue;

use crate::config::ThreadsOptions;

/// Decode the options argument of `initThreads`. `undefined`, `null` and
/// malformed objects fall back to the defaults.
pub fn decode(value: JsValue) -> ThreadsOptions {
    if value.is_undefined() || value.is_null() {
        return ThreadsOptions::default();
    }
    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        log::warn!("invalid threads options ({e}); using defaults");
        ThreadsOptions::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Rgb, Tier};
    use wasm_bindgen_test::*;

    fn js(json: &str) -> JsValue {
        js_sys::JSON::parse(json).unwrap()
    }

    #[wasm_bindgen_test]
    fn plain_object_from_the_page() {
        let opts = decode(js(
            r#"{"color":[0.32,0.15,1],"amplitude":1,"distance":0,"enableMouseInteraction":false}"#,
        ));
        let config = opts.config();
        assert_eq!(config.color, Rgb::new(0.32, 0.15, 1.0));
        assert!(!config.enable_mouse_interaction);
        assert_eq!(opts.tier(), Tier::Full);
    }

    #[wasm_bindgen_test]
    fn missing_fields_use_defaults() {
        let opts = decode(js(r#"{"amplitude":2.5,"reducedPerformance":true}"#));
        assert_eq!(opts.amplitude, 2.5);
        assert_eq!(opts.color, ThreadsOptions::default().color);
        assert_eq!(opts.tier(), Tier::Reduced);
    }

    #[wasm_bindgen_test]
    fn undefined_or_malformed_gives_defaults() {
        assert_eq!(decode(JsValue::UNDEFINED), ThreadsOptions::default());
        assert_eq!(decode(JsValue::NULL), ThreadsOptions::default());
        assert_eq!(decode(js(r#"{"amplitude":"loud"}"#)), ThreadsOptions::default());
        assert_eq!(decode(js(r#"{"color":[1,2]}"#)), ThreadsOptions::default());
    }
}
