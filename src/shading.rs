//! Per-pixel math of the line field.
//!
//! The fragment shader in [`crate::shaders`] evaluates exactly this on the
//! GPU; the functions here are the reference used by tests and by
//! [`rasterize`].

use crate::config::LineFieldConfig;
use crate::frame::{FrameState, POINTER_CENTER};
use crate::noise::perlin2d;

/// Stroke width of the first line, in drawing-buffer pixels.
pub const LINE_WIDTH_PX: f32 = 7.0;
/// Extra feathering applied to the far side of each line.
pub const LINE_BLUR_PX: f32 = 10.0;

/// GLSL `smoothstep`, also valid for reversed edges.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let span = edge1 - edge0;
    if span == 0.0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / span).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// `count` pixels expressed in uv units of the longer side.
pub fn pixel(count: f32, resolution: [f32; 2]) -> f32 {
    count / resolution[0].max(resolution[1])
}

/// Pointer actually fed to the shading pass.
pub fn effective_pointer(config: &LineFieldConfig, state: &FrameState) -> [f32; 2] {
    if config.enable_mouse_interaction {
        state.pointer
    } else {
        POINTER_CENTER
    }
}

/// Coverage of the line with normalized index `perc` at `uv`.
pub fn line_coverage(
    uv: [f32; 2],
    perc: f32,
    width: f32,
    state: &FrameState,
    config: &LineFieldConfig,
) -> f32 {
    let [x, v] = uv;
    let res = [state.resolution.width, state.resolution.height];
    let mouse = effective_pointer(config, state);

    let split_point = 0.1 + perc * 0.4;
    let amplitude_normal = smoothstep(split_point, 0.7, x);
    let final_amplitude =
        amplitude_normal * 0.5 * config.amplitude * (1.0 + (mouse[1] - 0.5) * 0.2);

    let time_scaled = state.time / 10.0 + (mouse[0] - 0.5);
    let blur = smoothstep(split_point, split_point + 0.05, x) * perc;

    let xnoise = mix(
        perlin2d(time_scaled * 2.5, (x + perc) * 2.5),
        perlin2d(time_scaled * 3.5, (x + time_scaled) * 3.5) / 1.5,
        x * 0.3,
    );

    let y = 0.5 + (perc - 0.5) * config.distance + xnoise / 2.0 * final_amplitude;
    let feather = LINE_BLUR_PX * pixel(1.0, res) * blur;

    let line_start = smoothstep(y + width / 2.0 + feather, y, v);
    let line_end = smoothstep(y, y - width / 2.0 - feather, v);

    ((line_start - line_end) * (1.0 - smoothstep(0.0, 1.0, perc.powf(0.3)))).clamp(0.0, 1.0)
}

/// Union of `line_count` lines at `uv`: `1 - Π(1 - coverage_i)`.
pub fn field_coverage(
    uv: [f32; 2],
    line_count: usize,
    state: &FrameState,
    config: &LineFieldConfig,
) -> f32 {
    let res = [state.resolution.width, state.resolution.height];
    let n = line_count as f32;
    let uncovered = (0..line_count).fold(1.0f32, |acc, i| {
        let p = i as f32 / n;
        let width = LINE_WIDTH_PX * pixel(1.0, res) * (1.0 - p);
        acc * (1.0 - line_coverage(uv, p, width, state, config))
    });
    1.0 - uncovered
}

/// Premultiplied RGBA at `uv`.
pub fn shade(
    uv: [f32; 2],
    line_count: usize,
    state: &FrameState,
    config: &LineFieldConfig,
) -> [f32; 4] {
    let c = field_coverage(uv, line_count, state, config);
    let rgb = config.color.scaled(c);
    [rgb.r, rgb.g, rgb.b, c]
}

/// Shade the whole surface into `out` (RGBA8, premultiplied, top row
/// first), sampling pixel centers like `gl_FragCoord`.
pub fn rasterize(
    out: &mut Vec<u8>,
    line_count: usize,
    state: &FrameState,
    config: &LineFieldConfig,
) {
    let width = state.resolution.width as usize;
    let height = state.resolution.height as usize;
    out.clear();
    out.reserve(width * height * 4);

    for row in 0..height {
        // GL origin is bottom-left.
        let v = (height - 1 - row) as f32 + 0.5;
        for col in 0..width {
            let u = col as f32 + 0.5;
            let uv = [u / state.resolution.width, v / state.resolution.height];
            let rgba = shade(uv, line_count, state, config);
            out.extend(rgba.iter().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8));
        }
    }
}
