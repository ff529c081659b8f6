use accessgrid_types::{CellState, Column, Error, Permission};
use proptest::prelude::*;
use std::str::FromStr;

fn permission_strategy() -> impl Strategy<Value = Permission> {
    prop_oneof![
        Just(Permission::None),
        Just(Permission::Allow),
        Just(Permission::Deny),
    ]
}

fn cell_state_strategy() -> impl Strategy<Value = CellState> {
    prop_oneof![
        Just(CellState::None),
        Just(CellState::Allow),
        Just(CellState::Deny),
        Just(CellState::Mixed),
    ]
}

// ── Leaf cycle ────────────────────────────────────────────────────

#[test]
fn leaf_cycle_order() {
    assert_eq!(Permission::None.next(), Permission::Allow);
    assert_eq!(Permission::Allow.next(), Permission::Deny);
    assert_eq!(Permission::Deny.next(), Permission::None);
}

#[test]
fn leaf_default_is_none() {
    assert_eq!(Permission::default(), Permission::None);
}

proptest! {
    #[test]
    fn leaf_cycle_has_period_three(p in permission_strategy()) {
        prop_assert_eq!(p.next().next().next(), p);
        prop_assert_ne!(p.next(), p);
    }

    #[test]
    fn broadcast_lands_on_storable_leaf(s in cell_state_strategy()) {
        let next = s.next_broadcast();
        prop_assert!(!CellState::from(next).is_mixed());
    }
}

// ── Aggregate transitions ─────────────────────────────────────────

#[test]
fn broadcast_treats_mixed_like_none() {
    assert_eq!(CellState::Mixed.next_broadcast(), Permission::Allow);
    assert_eq!(CellState::None.next_broadcast(), Permission::Allow);
    assert_eq!(CellState::Allow.next_broadcast(), Permission::Deny);
    assert_eq!(CellState::Deny.next_broadcast(), Permission::None);
}

#[test]
fn uniform_returns_common_value() {
    let s = CellState::uniform([Permission::Deny, Permission::Deny, Permission::Deny]);
    assert_eq!(s, CellState::Deny);
}

#[test]
fn uniform_detects_disagreement() {
    let s = CellState::uniform([Permission::Allow, Permission::Allow, Permission::None]);
    assert_eq!(s, CellState::Mixed);
}

#[test]
fn as_permission_drops_mixed() {
    assert_eq!(CellState::Mixed.as_permission(), None);
    assert_eq!(CellState::Allow.as_permission(), Some(Permission::Allow));
}

// ── Presentation ──────────────────────────────────────────────────

#[test]
fn glyphs() {
    assert_eq!(CellState::None.glyph(), "");
    assert_eq!(CellState::Allow.glyph(), "✓");
    assert_eq!(CellState::Deny.glyph(), "✕");
    assert_eq!(CellState::Mixed.glyph(), "?");
}

#[test]
fn style_classes_are_distinct() {
    let classes = [
        CellState::None.style_class(),
        CellState::Allow.style_class(),
        CellState::Deny.style_class(),
        CellState::Mixed.style_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// ── Parsing and serde ─────────────────────────────────────────────

#[test]
fn permission_from_str_is_case_insensitive() {
    assert_eq!(Permission::from_str("Allow").unwrap(), Permission::Allow);
    assert_eq!(Permission::from_str(" deny ").unwrap(), Permission::Deny);
}

#[test]
fn permission_from_str_rejects_mixed() {
    let err = Permission::from_str("mixed").unwrap_err();
    assert!(matches!(err, Error::InvalidPermission(_)));
    assert!(format!("{err}").contains("mixed"));
}

#[test]
fn permission_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Permission::Allow).unwrap(), "\"allow\"");
    assert_eq!(serde_json::to_string(&CellState::Mixed).unwrap(), "\"mixed\"");
}

#[test]
fn permission_rejects_mixed_on_deserialize() {
    assert!(serde_json::from_str::<Permission>("\"mixed\"").is_err());
}

#[test]
fn column_parsing() {
    assert_eq!(Column::from_str("READ").unwrap(), Column::Read);
    assert_eq!(Column::from_str("write").unwrap(), Column::Write);
    assert!(matches!(
        Column::from_str("execute"),
        Err(Error::InvalidColumn(_))
    ));
}

#[test]
fn column_other_flips() {
    assert_eq!(Column::Read.other(), Column::Write);
    assert_eq!(Column::Write.other(), Column::Read);
}

#[test]
fn error_from_serde_json() {
    let serde_err: Result<serde_json::Value, _> = serde_json::from_str("not json");
    let err: Error = serde_err.unwrap_err().into();
    assert!(format!("{err}").contains("serialization"));
}
