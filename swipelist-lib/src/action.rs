//! Action descriptors and per-edge configurations.

use crate::color::Rgb;

/// Visual treatment of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    #[default]
    Normal,
    Destructive,
}

/// One swipe action, as plain data.
///
/// `on_invoke` names the behavior to run; the host hands it back to
/// [`crate::ActionSource::invoke`] when the button is tapped. Descriptors
/// capture no closures, so they are freely clonable values owned by the
/// configuration that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDescriptor {
    pub label: String,
    pub style: ActionStyle,
    /// Button background override; `None` means the host picks a color
    /// for the style.
    pub background: Option<Rgb>,
    /// Name of an icon asset the host resolves to a glyph.
    pub icon: Option<String>,
    pub on_invoke: String,
}

impl ActionDescriptor {
    /// Create a normal-style action whose invoke identifier is its label.
    pub fn normal(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            on_invoke: label.clone(),
            label,
            style: ActionStyle::Normal,
            background: None,
            icon: None,
        }
    }

    /// Create a destructive action whose invoke identifier is its label.
    pub fn destructive(label: impl Into<String>) -> Self {
        Self {
            style: ActionStyle::Destructive,
            ..Self::normal(label)
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Result of a configuration lookup for one edge of one row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionConfiguration {
    /// Let the host list view render its built-in default actions.
    #[default]
    HostDefault,
    /// Show nothing on this edge, suppressing any host default.
    Empty,
    /// Show exactly these actions, in array order, nearest to the finger
    /// first.
    Actions(Vec<ActionDescriptor>),
}

/// Request to present a modal acknowledgement with a single dismiss
/// control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcknowledgementRequest {
    pub title: String,
}

impl AcknowledgementRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
