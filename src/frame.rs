//! Per-frame state and the loop that advances it.
//!
//! Everything here is host-independent: the wasm glue feeds it resize,
//! pointer and animation-frame events and reads back a [`FrameState`].

use crate::config::{LineFieldConfig, Tier};

/// Pointer position used when interaction is off or the pointer has left.
pub const POINTER_CENTER: [f32; 2] = [0.5, 0.5];

/// Fraction of the remaining distance the rendered pointer covers per
/// reference frame. Longer or shorter frames scale it so the easing speed
/// does not depend on the display's refresh rate.
pub const POINTER_EASING: f32 = 0.05;

/// Frame length [`POINTER_EASING`] is defined for (60 Hz).
pub const EASING_REFERENCE_MS: f64 = 1000.0 / 60.0;

/// Drawing-buffer size plus its aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub width: f32,
    pub height: f32,
    pub aspect: f32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            aspect: 1.0,
        }
    }
}

impl Resolution {
    /// `None` for empty or non-finite sizes.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then(|| Self {
            width,
            height,
            aspect: width / height,
        })
    }

    /// Adopt a new size. A hidden (zero-sized) container keeps the last
    /// valid resolution and returns `false`.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        match Self::new(width, height) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    pub fn as_array(&self) -> [f32; 3] {
        [self.width, self.height, self.aspect]
    }
}

/// Frame-rate cap. Without a floor every frame is accepted.
#[derive(Clone, Debug, Default)]
pub struct FrameThrottle {
    min_interval_ms: Option<f64>,
    last_accepted: Option<f64>,
}

impl FrameThrottle {
    pub fn new(min_interval_ms: Option<f64>) -> Self {
        Self {
            min_interval_ms,
            last_accepted: None,
        }
    }

    /// Returns whether a frame at `timestamp_ms` should be rendered and, if
    /// so, records it as the last accepted frame.
    pub fn accept(&mut self, timestamp_ms: f64) -> bool {
        if let (Some(floor), Some(last)) = (self.min_interval_ms, self.last_accepted) {
            if timestamp_ms - last < floor {
                return false;
            }
        }
        self.last_accepted = Some(timestamp_ms);
        true
    }
}

/// Eases the rendered pointer toward the latest reported position.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    target: [f32; 2],
    current: [f32; 2],
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            target: POINTER_CENTER,
            current: POINTER_CENTER,
        }
    }
}

impl PointerTracker {
    pub fn set_target(&mut self, target: [f32; 2]) {
        self.target = target;
    }

    pub fn reset(&mut self) {
        self.target = POINTER_CENTER;
    }

    /// Ease toward the target over `dt_ms` milliseconds.
    pub fn step(&mut self, dt_ms: f64) -> [f32; 2] {
        if !(dt_ms > 0.0) {
            return self.current;
        }
        let frames = dt_ms / EASING_REFERENCE_MS;
        let k = (1.0 - (1.0 - f64::from(POINTER_EASING)).powf(frames)) as f32;
        for (c, t) in self.current.iter_mut().zip(self.target) {
            *c += k * (t - *c);
        }
        self.current
    }

    pub fn current(&self) -> [f32; 2] {
        self.current
    }
}

/// Map a pointer in client coordinates into the container's box, with y
/// pointing up. `None` when the pointer is outside the box or the box is
/// empty.
pub fn normalize_pointer(
    client: (f64, f64),
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<[f32; 2]> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let x = (client.0 - left) / width;
    let y = 1.0 - (client.1 - top) / height;
    let inside = (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y);
    inside.then(|| [x as f32, y as f32])
}

/// Inputs of one shading pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Seconds since the first accepted frame.
    pub time: f32,
    /// Normalized pointer, origin bottom-left.
    pub pointer: [f32; 2],
    pub resolution: Resolution,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            time: 0.0,
            pointer: POINTER_CENTER,
            resolution: Resolution::default(),
        }
    }
}

/// Owns the [`FrameState`] and advances it once per accepted animation frame.
#[derive(Debug)]
pub struct FrameLoop {
    config: LineFieldConfig,
    tier: Tier,
    throttle: FrameThrottle,
    pointer: PointerTracker,
    origin_ms: Option<f64>,
    last_ms: Option<f64>,
    state: FrameState,
}

impl FrameLoop {
    pub fn new(config: LineFieldConfig, tier: Tier) -> Self {
        Self {
            config,
            tier,
            throttle: FrameThrottle::new(tier.min_frame_interval_ms()),
            pointer: PointerTracker::default(),
            origin_ms: None,
            last_ms: None,
            state: FrameState::default(),
        }
    }

    pub fn config(&self) -> &LineFieldConfig {
        &self.config
    }

    pub fn line_count(&self) -> usize {
        self.tier.line_count()
    }

    pub fn state(&self) -> &FrameState {
        &self.state
    }

    /// See [`Resolution::resize`].
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let changed = self.state.resolution.resize(width, height);
        if !changed {
            log::debug!("ignoring empty surface size {width}x{height}");
        }
        changed
    }

    pub fn pointer_moved(&mut self, position: [f32; 2]) {
        if self.config.enable_mouse_interaction {
            self.pointer.set_target(position);
        }
    }

    pub fn pointer_left(&mut self) {
        self.pointer.reset();
    }

    /// Advance to `timestamp_ms`. Returns the state to render, or `None` when
    /// the frame falls under the tier's frame floor.
    pub fn tick(&mut self, timestamp_ms: f64) -> Option<&FrameState> {
        if !self.throttle.accept(timestamp_ms) {
            return None;
        }
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        self.state.time = ((timestamp_ms - origin) * 0.001) as f32;
        let dt_ms = self.last_ms.map_or(0.0, |last| timestamp_ms - last);
        self.last_ms = Some(timestamp_ms);
        if self.config.enable_mouse_interaction {
            self.state.pointer = self.pointer.step(dt_ms);
        }
        Some(&self.state)
    }
}
