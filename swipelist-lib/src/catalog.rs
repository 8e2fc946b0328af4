//! The action catalog: row list, per-edge lookups, and tap dispatch.

use log::debug;

use crate::action::{AcknowledgementRequest, ActionConfiguration, ActionDescriptor};
use crate::color::Rgb;
use crate::item::{Edge, RowItem};

/// Capability interface between the demo content and the host list view.
///
/// The host asks for rows and per-edge configurations while laying out
/// and revealing, and hands tapped action identifiers back through
/// [`ActionSource::invoke`]. Every method is a pure function of its
/// inputs.
pub trait ActionSource {
    /// Number of rows in the list.
    fn row_count(&self) -> usize;

    /// Row at `index` in display order, `None` past the end.
    fn row_at(&self, index: usize) -> Option<RowItem>;

    /// Display label for a row.
    fn label_for(&self, row: RowItem) -> &'static str;

    /// Actions to show when `edge` of `row` is swiped open.
    fn configuration_for(&self, row: RowItem, edge: Edge) -> ActionConfiguration;

    /// Dispatch a tapped action by its `on_invoke` identifier.
    ///
    /// Total over all identifiers: the acknowledgement simply carries the
    /// identifier as its title.
    fn invoke(&self, action_id: &str) -> AcknowledgementRequest;
}

/// The demo catalog: all scenarios, sorted by display label.
#[derive(Debug, Clone)]
pub struct Catalog {
    rows: Vec<RowItem>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut rows = RowItem::ALL.to_vec();
        rows.sort_by_key(|row| row.label());
        Self { rows }
    }

    /// All rows in display order.
    pub fn rows(&self) -> &[RowItem] {
        &self.rows
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionSource for Catalog {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_at(&self, index: usize) -> Option<RowItem> {
        self.rows.get(index).copied()
    }

    fn label_for(&self, row: RowItem) -> &'static str {
        row.label()
    }

    fn configuration_for(&self, row: RowItem, edge: Edge) -> ActionConfiguration {
        match edge {
            Edge::Leading => leading_configuration(row),
            Edge::Trailing => trailing_configuration(row),
        }
    }

    fn invoke(&self, action_id: &str) -> AcknowledgementRequest {
        debug!("invoked action: {action_id}");
        AcknowledgementRequest::new(action_id)
    }
}

fn leading_configuration(row: RowItem) -> ActionConfiguration {
    match row {
        RowItem::LeadingAction => {
            ActionConfiguration::Actions(vec![ActionDescriptor::normal(row.label())])
        }
        RowItem::LeadingDestructiveAction => {
            ActionConfiguration::Actions(vec![ActionDescriptor::destructive(row.label())])
        }
        RowItem::TooManyLeadingActions => ActionConfiguration::Actions(
            (1..=5)
                .map(|n| ActionDescriptor::normal(format!("Action{n}")))
                .collect(),
        ),
        RowItem::IconAction
        | RowItem::MultipleTrailingActions
        | RowItem::TrailingAction
        | RowItem::TrailingListDefaultAction
        | RowItem::TrailingDestructiveAction => ActionConfiguration::HostDefault,
    }
}

fn trailing_configuration(row: RowItem) -> ActionConfiguration {
    match row {
        RowItem::IconAction => ActionConfiguration::Actions(vec![
            ActionDescriptor::normal(row.label())
                .with_background(Rgb::from_hsv(0.11, 0.56, 0.48))
                .with_icon("Icon"),
        ]),
        RowItem::MultipleTrailingActions => ActionConfiguration::Actions(vec![
            ActionDescriptor::normal("Action1").with_background(Rgb::from_hsv(0.56, 0.56, 0.55)),
            ActionDescriptor::normal("Action2").with_background(Rgb::from_hsv(0.35, 0.33, 0.55)),
        ]),
        RowItem::TrailingAction => {
            ActionConfiguration::Actions(vec![ActionDescriptor::normal(row.label())])
        }
        RowItem::TrailingDestructiveAction => {
            ActionConfiguration::Actions(vec![ActionDescriptor::destructive(row.label())])
        }
        RowItem::TrailingListDefaultAction => ActionConfiguration::HostDefault,
        // These rows customize only their leading edge; the explicit empty
        // set suppresses the host's trailing defaults instead of falling
        // back to them.
        RowItem::LeadingAction
        | RowItem::LeadingDestructiveAction
        | RowItem::TooManyLeadingActions => ActionConfiguration::Empty,
    }
}
