use threads_wasm::{config::DEFAULT_COLOR, Rgb, ThreadsOptions, Tier};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;

#[cfg(target_arch = "wasm32")]
wasm_bindgen_test_configure!(run_in_browser);

fn parse(json: &str) -> ThreadsOptions {
    serde_json::from_str(json).unwrap()
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn empty_object_gives_hero_settings() {
    let opts = parse("{}");
    assert_eq!(opts, ThreadsOptions::default());
    let config = opts.config();
    assert_eq!(config.color, DEFAULT_COLOR);
    assert_eq!(config.amplitude, 1.0);
    assert_eq!(config.distance, 0.0);
    assert!(config.enable_mouse_interaction);
    assert_eq!(opts.tier(), Tier::Full);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn camel_case_fields_are_read() {
    let opts = parse(
        r#"{"color":[1,0.5,0],"amplitude":2,"distance":0.4,
            "enableMouseInteraction":false,"reducedPerformance":true}"#,
    );
    let config = opts.config();
    assert_eq!(config.color, Rgb::new(1.0, 0.5, 0.0));
    assert_eq!(config.amplitude, 2.0);
    assert_eq!(config.distance, 0.4);
    assert!(!config.enable_mouse_interaction);
    assert_eq!(opts.tier(), Tier::Reduced);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn reduced_performance_false_or_absent_is_full_tier() {
    assert_eq!(parse(r#"{"reducedPerformance":false}"#).tier(), Tier::Full);
    assert_eq!(parse(r#"{"amplitude":0.5}"#).tier(), Tier::Full);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn wrong_types_are_rejected() {
    assert!(serde_json::from_str::<ThreadsOptions>(r#"{"color":[1,2]}"#).is_err());
    assert!(serde_json::from_str::<ThreadsOptions>(r#"{"amplitude":"loud"}"#).is_err());
}
