//! Demo scenarios and swipe edges.

/// One demo scenario, shown as one row in the host list.
///
/// The set is closed; the host derives its row list from [`RowItem::ALL`]
/// sorted by display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowItem {
    IconAction,
    LeadingAction,
    LeadingDestructiveAction,
    TooManyLeadingActions,
    MultipleTrailingActions,
    TrailingAction,
    TrailingListDefaultAction,
    TrailingDestructiveAction,
}

impl RowItem {
    /// Every scenario, in declaration order.
    pub const ALL: [RowItem; 8] = [
        RowItem::IconAction,
        RowItem::LeadingAction,
        RowItem::LeadingDestructiveAction,
        RowItem::TooManyLeadingActions,
        RowItem::MultipleTrailingActions,
        RowItem::TrailingAction,
        RowItem::TrailingListDefaultAction,
        RowItem::TrailingDestructiveAction,
    ];

    /// Display label for the row.
    pub fn label(self) -> &'static str {
        match self {
            RowItem::IconAction => "Icon",
            RowItem::LeadingAction => "Leading action",
            RowItem::LeadingDestructiveAction => "Leading destructive action",
            RowItem::TooManyLeadingActions => "Too many leading actions",
            RowItem::MultipleTrailingActions => "Multiple trailing actions",
            RowItem::TrailingAction => "Trailing action",
            RowItem::TrailingListDefaultAction => "Trailing list default action",
            RowItem::TrailingDestructiveAction => "Trailing destructive action",
        }
    }
}

/// Side of a row from which a swipe reveals actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Leading,
    Trailing,
}

impl Edge {
    /// Both edges, for exhaustive iteration.
    pub const ALL: [Edge; 2] = [Edge::Leading, Edge::Trailing];
}
