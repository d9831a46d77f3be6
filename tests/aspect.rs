#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;

#[cfg(target_arch = "wasm32")]
wasm_bindgen_test_configure!(run_in_browser);

use threads_wasm::{FrameLoop, LineFieldConfig, Resolution, Tier};

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn aspect_tracks_every_resize() {
    let mut res = Resolution::default();
    for &(w, h) in &[(1920.0f32, 1080.0f32), (1080.0, 1920.0), (333.0, 777.0), (1.0, 3.0)] {
        assert!(res.resize(w, h));
        assert_eq!(res.width, w);
        assert_eq!(res.height, h);
        assert_eq!(res.aspect, w / h);
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn zero_sized_container_keeps_last_resolution() {
    let mut res = Resolution::new(800.0, 600.0).unwrap();
    let before = res;

    assert!(!res.resize(800.0, 0.0));
    assert!(!res.resize(0.0, 600.0));
    assert!(!res.resize(0.0, 0.0));
    assert!(!res.resize(f32::NAN, 600.0));
    assert_eq!(res, before);
    assert!(res.aspect.is_finite());

    // Becomes visible again.
    assert!(res.resize(400.0, 100.0));
    assert_eq!(res.aspect, 4.0);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[cfg_attr(not(target_arch = "wasm32"), test)]
fn frame_loop_resize_reaches_frame_state() {
    let mut frames = FrameLoop::new(LineFieldConfig::default(), Tier::Full);
    assert!(frames.resize(1280.0, 720.0));
    assert!(!frames.resize(1280.0, 0.0));

    let state = frames.tick(16.0).unwrap();
    assert_eq!(state.resolution.as_array(), [1280.0, 720.0, 1280.0 / 720.0]);
}
