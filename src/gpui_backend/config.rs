/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// Configuration for the GPUI scatter view.
#[derive(Debug, Clone)]
pub struct ScatterViewConfig {
    /// Canvas background.
    pub background: Color,
    /// Marker fill.
    pub marker: Color,
    /// Axis, tick and legend frame strokes.
    pub axis: Color,
    /// Label text.
    pub text: Color,
    /// Selection highlight rings.
    pub highlight: Color,
    /// Label font size in pixels.
    pub font_size: f32,
    /// Width of highlight ring strokes in pixels.
    pub highlight_width: f32,
}

impl Default for ScatterViewConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            marker: Color::new(0.0, 0.0, 1.0, 1.0),
            axis: Color::BLACK,
            text: Color::BLACK,
            highlight: Color::new(1.0, 0.0, 0.0, 1.0),
            font_size: 12.0,
            highlight_width: 2.0,
        }
    }
}
