use accessgrid_matrix::{
    Column, MatrixError, MatrixPayload, Permission, PermissionCell, PermissionMatrix,
    ResourceEntry,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample() -> PermissionMatrix {
    PermissionMatrix::with_cells([
        ("Organization", PermissionCell::new(Permission::Allow, Permission::Deny)),
        ("Center", PermissionCell::uniform(Permission::None)),
    ])
    .unwrap()
}

// ── Shape ────────────────────────────────────────────────────────

#[test]
fn payload_uses_resource_name_key() {
    let value = serde_json::to_value(sample().to_payload()).unwrap();
    assert_eq!(
        value,
        json!([
            {"resourceName": "Organization", "read": "allow", "write": "deny"},
            {"resourceName": "Center", "read": "none", "write": "none"},
        ])
    );
}

#[test]
fn payload_preserves_row_order() {
    let payload = sample().to_payload();
    let names: Vec<_> = payload
        .entries()
        .iter()
        .map(|e| e.resource_name.as_str())
        .collect();
    assert_eq!(names, vec!["Organization", "Center"]);
}

// ── Loading ──────────────────────────────────────────────────────

#[test]
fn from_json_restores_leaves() {
    let json = r#"[
        {"resourceName": "Provider", "read": "deny", "write": "allow"}
    ]"#;
    let m = PermissionMatrix::from_json(json).unwrap();
    assert_eq!(m.resources(), &["Provider"]);
    assert_eq!(
        *m.cell(0).unwrap(),
        PermissionCell::new(Permission::Deny, Permission::Allow)
    );
}

#[test]
fn reload_after_edit_matches() {
    let mut m = sample();
    m.toggle_column(Column::Write);
    let reloaded = PermissionMatrix::from_json(&m.to_json().unwrap()).unwrap();
    assert_eq!(reloaded, m);
}

#[test]
fn mixed_leaf_is_rejected() {
    let json = r#"[{"resourceName": "Center", "read": "mixed", "write": "none"}]"#;
    let err = PermissionMatrix::from_json(json).unwrap_err();
    assert!(matches!(err, MatrixError::Serialization(_)));
}

#[test]
fn duplicate_names_rejected_on_load() {
    let payload = MatrixPayload(vec![
        ResourceEntry {
            resource_name: "Center".into(),
            read: Permission::Allow,
            write: Permission::Allow,
        },
        ResourceEntry {
            resource_name: "Center".into(),
            read: Permission::None,
            write: Permission::None,
        },
    ]);
    assert!(matches!(
        PermissionMatrix::from_payload(&payload),
        Err(MatrixError::DuplicateResource(_))
    ));
}

#[test]
fn malformed_json_is_serialization_error() {
    let err = MatrixPayload::from_json("{not json").unwrap_err();
    assert!(format!("{err}").contains("serialization"));
}

#[test]
fn empty_payload_yields_empty_matrix() {
    let m = PermissionMatrix::from_payload(&MatrixPayload::default()).unwrap();
    assert!(m.is_empty());
}
