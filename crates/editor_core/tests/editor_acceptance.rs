use catalog::{seed, Field};
use editor_core::{Action, AppState, NoticeKind, Workflow};

fn type_field(state: AppState, field: Field, value: &str) -> AppState {
    state
        .apply(Action::FieldChanged {
            field,
            value: value.to_string(),
        })
        .state
}

#[test]
fn create_edit_delete_workflow_acceptance() {
    let mut state = AppState::new(seed::seed_catalog());
    let seeded = state.catalog.len();

    // Create a new product end to end, with one rejected attempt first.
    state = state.apply(Action::OpenCreate).state;
    state = type_field(state, Field::Title, "Walnut Side Table");
    let rejected = state.apply(Action::Submit);
    assert!(rejected.notice.is_none());
    assert!(!rejected.state.errors.description.is_empty());
    state = rejected.state;
    assert_eq!(state.catalog.len(), seeded);

    state = type_field(
        state,
        Field::Description,
        "Compact walnut side table with a shelf underneath",
    );
    state = type_field(state, Field::ImageUrl, "https://x.test/table.png");
    state = type_field(state, Field::Price, "89.00");
    state = state.apply(Action::ToggleColor("#3C2A21".to_string())).state;
    state = state
        .apply(Action::SelectCategory(seed::categories()[0].clone()))
        .state;

    let created = state.apply(Action::Submit);
    assert_eq!(created.notice.map(|n| n.kind), Some(NoticeKind::Added));
    state = created.state;
    assert_eq!(state.catalog.len(), seeded + 1);
    let new_id = state.catalog[seeded].id;

    // Edit the freshly created entry; its identifier must survive.
    state = state.apply(Action::OpenEdit { index: seeded }).state;
    state = type_field(state, Field::Price, "79.00");
    let edited = state.apply(Action::Submit);
    assert_eq!(edited.notice.map(|n| n.kind), Some(NoticeKind::Updated));
    state = edited.state;
    assert_eq!(state.catalog.len(), seeded + 1);
    assert_eq!(state.catalog[seeded].id, new_id);
    assert_eq!(state.catalog[seeded].price, "79.00");

    // Delete it again; only that entry disappears and order is preserved.
    let remaining_ids: Vec<_> = state.catalog[..seeded].iter().map(|p| p.id).collect();
    state = state.apply(Action::OpenDelete { index: seeded }).state;
    assert!(matches!(state.workflow, Workflow::ConfirmDelete { .. }));
    let deleted = state.apply(Action::Submit);
    assert_eq!(deleted.notice.map(|n| n.kind), Some(NoticeKind::Deleted));
    state = deleted.state;

    assert_eq!(state.catalog.len(), seeded);
    let ids_after: Vec<_> = state.catalog.iter().map(|p| p.id).collect();
    assert_eq!(ids_after, remaining_ids);
}
