use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, WebGl2RenderingContext as GL};

use crate::error::{Result, ThreadsError};

/// Transparent canvas stretched over its container.
pub struct RenderSurface {
    canvas: HtmlCanvasElement,
    dpr: f64,
}

impl RenderSurface {
    /// Create the canvas and append it to `container`.
    pub fn attach(document: &Document, container: &Element, dpr: f64) -> Result<Self> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ThreadsError::Resource("canvas"))?;

        let style = canvas.style();
        style.set_property("display", "block")?;
        style.set_property("width", "100%")?;
        style.set_property("height", "100%")?;

        container.append_child(&canvas)?;
        Ok(Self { canvas, dpr })
    }

    pub fn context(&self) -> Result<GL> {
        self.canvas
            .get_context("webgl2")?
            .ok_or(ThreadsError::ContextUnavailable)?
            .dyn_into::<GL>()
            .map_err(|_| ThreadsError::ContextUnavailable)
    }

    /// Size the drawing buffer to the container's layout box and return the
    /// buffer size in pixels.
    pub fn fit(&self, container: &Element) -> (u32, u32) {
        let w = (f64::from(container.client_width()) * self.dpr).round() as u32;
        let h = (f64::from(container.client_height()) * self.dpr).round() as u32;
        if self.canvas.width() != w || self.canvas.height() != h {
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }
        (w, h)
    }
}
