//! Animated "threads" background: noise-perturbed lines drawn with WebGL2
//! behind a page's hero section.
//!
//! The math lives in host-independent modules so it can be tested natively;
//! the browser glue is only compiled for wasm32.

pub mod config;
pub mod error;
pub mod frame;
pub mod noise;
pub mod shaders;
pub mod shading;

pub use config::{LineFieldConfig, Rgb, ThreadsOptions, Tier};
pub use error::{Result, ThreadsError};
pub use frame::{FrameLoop, FrameState, Resolution};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod options;
    mod render;
    mod surface;

    #[cfg(test)]
    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialised".into());
        }
    }

    /// Attach the background to the first element matching
    /// `container_selector`. `options` is a plain object such as
    /// `{ color: [r, g, b], amplitude, distance, enableMouseInteraction,
    /// reducedPerformance }`; missing fields take their defaults.
    ///
    /// Never throws: a missing container or an unsupported browser simply
    /// leaves the page without a background.
    #[wasm_bindgen(js_name = initThreads)]
    pub fn init_threads(container_selector: &str, options: JsValue) {
        let options = options::decode(options);
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("no document; threads background disabled");
            return;
        };
        let container = match document.query_selector(container_selector) {
            Ok(Some(el)) => el,
            Ok(None) => {
                log::debug!("no element matches {container_selector}; threads background disabled");
                return;
            }
            Err(e) => {
                log::warn!("invalid selector {container_selector}: {e:?}");
                return;
            }
        };

        if let Err(err) = render::start(container, options.config(), options.tier()) {
            log::error!("threads background unavailable: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::init_threads;
