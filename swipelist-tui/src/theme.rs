//! Fixed palette for the demo chrome and action buttons.

use swipelist_lib::Rgb;

/// Colors for the list chrome, buttons, and the acknowledgement modal.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    pub selection: Rgb,
    pub accent: Rgb,
    /// Fallback background for normal-style buttons without one.
    pub button: Rgb,
    /// Destructive buttons and the host's built-in Delete.
    pub destructive: Rgb,
    pub modal_background: Rgb,
    pub modal_border: Rgb,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            background: Rgb::from_hsv(0.61, 0.25, 0.10),
            foreground: Rgb::from_hsv(0.61, 0.04, 0.92),
            muted: Rgb::from_hsv(0.61, 0.10, 0.55),
            selection: Rgb::from_hsv(0.61, 0.35, 0.24),
            accent: Rgb::from_hsv(0.58, 0.45, 0.85),
            button: Rgb::from_hsv(0.61, 0.08, 0.42),
            destructive: Rgb::from_hsv(0.0, 0.72, 0.78),
            modal_background: Rgb::from_hsv(0.61, 0.20, 0.16),
            modal_border: Rgb::from_hsv(0.61, 0.15, 0.60),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Nudge a color toward white, for the focused button.
pub fn lighten(color: Rgb, amount: f32) -> Rgb {
    let lift = |c: u8| -> u8 {
        let c = f32::from(c);
        (c + (255.0 - c) * amount).round() as u8
    };
    Rgb::new(lift(color.r), lift(color.g), lift(color.b))
}

/// Scale a color toward black, for the modal backdrop.
pub fn dim(color: Rgb, factor: f32) -> Rgb {
    let scale = |c: u8| -> u8 { (f32::from(c) * factor).round() as u8 };
    Rgb::new(scale(color.r), scale(color.g), scale(color.b))
}
