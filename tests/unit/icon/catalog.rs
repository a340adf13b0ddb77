use super::*;
use crate::foundation::core::FrameGrid;
use crate::icon::graphic::IconGraphic;

#[test]
fn unique_ids_fill_the_smallest_gap() {
    let mut catalog = IconCatalog::new();
    for id in [0, 1, 3] {
        catalog.add(CursorIcon::new(IconId(id))).unwrap();
    }

    assert_eq!(catalog.add_with_unique_id(), IconId(2));
    assert_eq!(catalog.add_with_unique_id(), IconId(4));
    assert_eq!(catalog.len(), 5);
}

#[test]
fn add_rejects_duplicate_ids() {
    let mut catalog = IconCatalog::new();
    catalog.add(CursorIcon::new(IconId(1))).unwrap();

    let err = catalog.add(CursorIcon::new(IconId(1))).unwrap_err();
    assert!(err.to_string().contains("already taken"));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn lookup_by_id_and_label() {
    let mut catalog = IconCatalog::new();
    let id = catalog.add_with_unique_id();
    catalog.get_mut(id).unwrap().label = "Use".to_owned();

    assert_eq!(catalog.by_label("Use").unwrap().id, id);
    assert!(catalog.by_label("Talk").is_none());

    assert!(catalog.remove(id));
    assert!(!catalog.remove(id));
    assert!(catalog.is_empty());
}

#[test]
fn json_round_trip_preserves_the_catalog() {
    let mut catalog = IconCatalog::new();
    let id = catalog.add_with_unique_id();
    {
        let icon = catalog.get_mut(id).unwrap();
        icon.label = "Walk To".to_owned();
        icon.graphic = IconGraphic::animated(FrameGrid::new(5, 2, 3).unwrap());
        icon.graphic.policy.skip_first_frame_on_loop = true;
        icon.graphic.speeds.set(1, 0.5).unwrap();
    }

    let json = catalog.to_json().unwrap();
    let parsed = IconCatalog::from_json(&json).unwrap();
    assert_eq!(parsed, catalog);
}

#[test]
fn from_json_rejects_duplicate_ids() {
    let mut catalog = IconCatalog::new();
    catalog.add_with_unique_id();
    let json = catalog.to_json().unwrap();

    let mut doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    let icons = doc["icons"].as_array_mut().unwrap();
    let dup = icons[0].clone();
    icons.push(dup);

    let err = IconCatalog::from_json(&doc.to_string()).unwrap_err();
    assert!(err.to_string().contains("already taken"));
}
