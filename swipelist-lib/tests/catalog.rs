use swipelist_lib::{ActionConfiguration, ActionSource, ActionStyle, Catalog, Edge, RowItem};

fn actions(config: ActionConfiguration) -> Vec<swipelist_lib::ActionDescriptor> {
    match config {
        ActionConfiguration::Actions(actions) => actions,
        other => panic!("expected Actions, got {other:?}"),
    }
}

// ============================================================================
// Totality and determinism
// ============================================================================

#[test]
fn test_every_row_edge_pair_has_a_configuration() {
    let catalog = Catalog::new();
    for row in RowItem::ALL {
        for edge in Edge::ALL {
            // An explicit action set is never empty; "show nothing" is the
            // Empty variant.
            if let ActionConfiguration::Actions(actions) = catalog.configuration_for(row, edge) {
                assert!(!actions.is_empty(), "{row:?}/{edge:?} has an empty action set");
            }
        }
    }
}

#[test]
fn test_repeated_lookups_are_identical() {
    let catalog = Catalog::new();
    for row in RowItem::ALL {
        for edge in Edge::ALL {
            assert_eq!(
                catalog.configuration_for(row, edge),
                catalog.configuration_for(row, edge),
                "{row:?}/{edge:?} lookup is not deterministic"
            );
        }
    }
}

// ============================================================================
// Row list
// ============================================================================

#[test]
fn test_rows_are_sorted_by_label() {
    let catalog = Catalog::new();
    let labels: Vec<&str> = catalog.rows().iter().map(|row| row.label()).collect();

    assert_eq!(
        labels,
        vec![
            "Icon",
            "Leading action",
            "Leading destructive action",
            "Multiple trailing actions",
            "Too many leading actions",
            "Trailing action",
            "Trailing destructive action",
            "Trailing list default action",
        ]
    );
}

#[test]
fn test_row_access_through_source() {
    let catalog = Catalog::new();

    assert_eq!(catalog.row_count(), 8);
    assert_eq!(catalog.row_at(0), Some(RowItem::IconAction));
    assert_eq!(catalog.label_for(RowItem::IconAction), "Icon");
    assert_eq!(catalog.row_at(8), None);
}

// ============================================================================
// Contract table
// ============================================================================

#[test]
fn test_too_many_leading_actions_preserves_order() {
    let catalog = Catalog::new();
    let actions = actions(catalog.configuration_for(RowItem::TooManyLeadingActions, Edge::Leading));

    let labels: Vec<&str> = actions.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Action1", "Action2", "Action3", "Action4", "Action5"]
    );
    assert!(actions.iter().all(|a| a.style == ActionStyle::Normal));
}

#[test]
fn test_leading_only_rows_suppress_trailing_defaults() {
    let catalog = Catalog::new();

    // Explicitly empty, not a fall-through to the host's defaults.
    for row in [
        RowItem::LeadingAction,
        RowItem::LeadingDestructiveAction,
        RowItem::TooManyLeadingActions,
    ] {
        assert_eq!(
            catalog.configuration_for(row, Edge::Trailing),
            ActionConfiguration::Empty
        );
    }

    // Contrast: this row leaves both edges to the host.
    for edge in Edge::ALL {
        assert_eq!(
            catalog.configuration_for(RowItem::TrailingListDefaultAction, edge),
            ActionConfiguration::HostDefault
        );
    }
}

#[test]
fn test_destructive_rows_use_destructive_style() {
    let catalog = Catalog::new();

    let leading =
        actions(catalog.configuration_for(RowItem::LeadingDestructiveAction, Edge::Leading));
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].label, "Leading destructive action");
    assert_eq!(leading[0].style, ActionStyle::Destructive);

    let trailing =
        actions(catalog.configuration_for(RowItem::TrailingDestructiveAction, Edge::Trailing));
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].label, "Trailing destructive action");
    assert_eq!(trailing[0].style, ActionStyle::Destructive);
}

#[test]
fn test_icon_action_carries_icon_and_background() {
    let catalog = Catalog::new();
    let actions = actions(catalog.configuration_for(RowItem::IconAction, Edge::Trailing));

    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].label, "Icon");
    assert_eq!(actions[0].style, ActionStyle::Normal);
    assert!(actions[0].background.is_some());
    assert_eq!(actions[0].icon.as_deref(), Some("Icon"));

    // The leading edge of the same row is left to the host.
    assert_eq!(
        catalog.configuration_for(RowItem::IconAction, Edge::Leading),
        ActionConfiguration::HostDefault
    );
}

#[test]
fn test_multiple_trailing_actions_have_distinct_backgrounds() {
    let catalog = Catalog::new();
    let actions = actions(catalog.configuration_for(RowItem::MultipleTrailingActions, Edge::Trailing));

    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].label, "Action1");
    assert_eq!(actions[1].label, "Action2");
    assert!(actions[0].background.is_some());
    assert!(actions[1].background.is_some());
    assert_ne!(actions[0].background, actions[1].background);
}

#[test]
fn test_single_action_rows() {
    let catalog = Catalog::new();

    let leading = actions(catalog.configuration_for(RowItem::LeadingAction, Edge::Leading));
    assert_eq!(leading.len(), 1);
    assert_eq!(leading[0].label, "Leading action");
    assert_eq!(leading[0].style, ActionStyle::Normal);

    let trailing = actions(catalog.configuration_for(RowItem::TrailingAction, Edge::Trailing));
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].label, "Trailing action");
    assert_eq!(trailing[0].on_invoke, "Trailing action");
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_invoke_echoes_the_action_identifier() {
    let catalog = Catalog::new();

    assert_eq!(catalog.invoke("Leading action").title, "Leading action");
    assert_eq!(catalog.invoke("Action3").title, "Action3");
}
