use serde::Deserialize;

/// Linear RGB color, each channel in 0.0..=1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `k`.
    pub fn scaled(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }
}

/// Violet used on the hero section.
pub const DEFAULT_COLOR: Rgb = Rgb::new(0.32, 0.15, 1.0);

/// Visual parameters of the line field. Copied into the frame loop at
/// startup and never changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFieldConfig {
    /// Line color.
    pub color: Rgb,
    /// Strength of the noise displacement. 0.0 gives straight lines.
    pub amplitude: f32,
    /// Vertical spread of the lines around the center. 0.0 stacks them.
    pub distance: f32,
    /// Let the pointer position bend and shift the lines.
    pub enable_mouse_interaction: bool,
}

impl Default for LineFieldConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            amplitude: 1.0,
            distance: 0.0,
            enable_mouse_interaction: true,
        }
    }
}

/// Coarse performance class chosen by the embedding page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tier {
    /// Phones and other weak devices: few lines, ~30 fps, DPR 1.
    Reduced,
    #[default]
    Full,
}

impl Tier {
    pub const fn line_count(self) -> usize {
        match self {
            Tier::Reduced => 5,
            Tier::Full => 40,
        }
    }

    /// Minimum spacing between accepted frames, if the tier is throttled.
    pub fn min_frame_interval_ms(self) -> Option<f64> {
        match self {
            Tier::Reduced => Some(1000.0 / 30.0),
            Tier::Full => None,
        }
    }

    /// Pixel ratio used to size the drawing buffer.
    pub fn device_pixel_ratio(self, native: f64) -> f64 {
        match self {
            Tier::Reduced => 1.0,
            Tier::Full if native.is_finite() && native > 0.0 => native,
            Tier::Full => 1.0,
        }
    }
}

/// Options object passed from JavaScript, e.g.
/// `{ color: [0.32, 0.15, 1], amplitude: 1, distance: 0, enableMouseInteraction: true }`.
/// Every field is optional.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadsOptions {
    pub color: [f32; 3],
    pub amplitude: f32,
    pub distance: f32,
    pub enable_mouse_interaction: bool,
    /// Selects [`Tier::Reduced`]; absent means [`Tier::Full`].
    pub reduced_performance: Option<bool>,
}

impl Default for ThreadsOptions {
    fn default() -> Self {
        let config = LineFieldConfig::default();
        Self {
            color: [config.color.r, config.color.g, config.color.b],
            amplitude: config.amplitude,
            distance: config.distance,
            enable_mouse_interaction: config.enable_mouse_interaction,
            reduced_performance: None,
        }
    }
}

impl ThreadsOptions {
    pub fn config(&self) -> LineFieldConfig {
        let [r, g, b] = self.color;
        LineFieldConfig {
            color: Rgb::new(r, g, b),
            amplitude: self.amplitude,
            distance: self.distance,
            enable_mouse_interaction: self.enable_mouse_interaction,
        }
    }

    pub fn tier(&self) -> Tier {
        match self.reduced_performance {
            Some(true) => Tier::Reduced,
            _ => Tier::Full,
        }
    }
}
