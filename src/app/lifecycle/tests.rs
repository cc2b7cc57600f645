use super::*;
use crate::app::scene::Scene;
use crate::core::{GridDims, TailBand};
use crate::core::boundary::tail_intersection;
use approx::assert_relative_eq;

fn util() -> TableShapeUtil {
    TableShapeUtil::default()
}

fn table() -> TableShape {
    TableShape::new(ShapeId::new("shape:life"), &TableOptions::default())
}

#[test]
fn test_default_props() {
    let s = util().default_props(ShapeId::new("shape:neu"));
    assert_eq!(s.id.as_str(), "shape:neu");
    assert_eq!(s.width(), 356.0);
    assert_eq!(s.height(), 254.0);
    assert!(s.grid().is_none());
}

#[test]
fn test_on_before_create_sets_undimensioned_height() {
    let s = util().on_before_create(table());
    assert_eq!(s.height(), 256.0);
    assert_eq!(s.min_height(), 256.0);
}

#[test]
fn test_on_before_update_reclamps_tail_after_resize() {
    let u = util();
    let prev = u.on_before_update(&table(), table().with_tail(Vec2::new(0.5, 1.5)));
    let next = prev.clone().with_size(80.0, 600.0);
    let next = u.on_before_update(&prev, next);

    let band = TailBand::for_size(next.size(), u.options());
    let hit = tail_intersection(&next);
    let d = next.tail_in_shape_space().distance(hit.crossing);
    assert!(band.contains(d, band.max * 1e-3));
}

#[test]
fn test_on_before_update_reclamps_tail_after_growth() {
    let u = util();
    let committed = table()
        .with_committed_grid(GridDims::new(2, 3).expect("2x3"))
        .expect("Commit")
        .with_tail(Vec2::new(0.5, 5.0));
    let prev = u.on_before_update(&table(), committed);
    let next = u.on_before_update(&prev, prev.clone().with_active_cell(0, 300.0));
    assert!(next.height() > prev.height());

    let band = TailBand::for_size(next.size(), u.options());
    let hit = tail_intersection(&next);
    let d = next.tail_in_shape_space().distance(hit.crossing);
    assert!(
        band.contains(d, band.max * 1e-3),
        "Tail-Abstand {d} nicht in [{}, {}]",
        band.min,
        band.max
    );
}

#[test]
fn test_geometry_is_filled_outline() {
    let u = util();
    let s = u.on_before_update(&table(), table().with_tail(Vec2::new(0.5, 2.0)));
    let g = u.geometry(&s);
    assert_eq!(g.vertices.len(), 7);
    assert!(g.filled);
    assert!(g.hit_test(s.center()));
    assert!(!g.hit_test(Vec2::new(-50.0, -50.0)));
    assert!(g.bounds().max.y > s.height());
    assert_eq!(u.render_selection_indicator(&s), outline_path(&g.vertices));
}

#[test]
fn test_resize_scales_box_around_anchor() {
    let s = table()
        .with_position(Vec2::new(100.0, 100.0))
        .with_size(200.0, 100.0)
        .with_committed_grid(GridDims::new(2, 2).expect("2x2"))
        .expect("Commit");
    let info = ResizeInfo {
        scale: Vec2::new(2.0, 0.5),
        anchor: Vec2::new(100.0, 100.0),
    };
    let r = util().on_resize(&s, &info);
    assert_eq!(r.position, Vec2::new(100.0, 100.0));
    assert_relative_eq!(r.width(), 400.0);
    assert_relative_eq!(r.height(), 50.0);
    assert_eq!(r.grid(), s.grid());
    assert_eq!(r.text(), s.text());
    assert_eq!(r.tail, s.tail);
}

#[test]
fn test_resize_with_negative_scale_flips_position() {
    let s = table()
        .with_position(Vec2::new(100.0, 100.0))
        .with_size(200.0, 100.0);
    let info = ResizeInfo {
        scale: Vec2::new(-1.0, 1.0),
        anchor: Vec2::new(100.0, 100.0),
    };
    let r = resize_box(&s, &info);
    assert_eq!(r.position, Vec2::new(-100.0, 100.0));
    assert_relative_eq!(r.width(), 200.0);
}

#[test]
fn test_handle_drag_normalizes_tail() {
    let s = table().with_size(200.0, 100.0);
    let dragged = util().on_handle_drag(&s, Vec2::new(100.0, 250.0));
    assert_relative_eq!(dragged.tail.x, 0.5);
    assert_relative_eq!(dragged.tail.y, 2.5);
}

#[test]
fn test_capability_flags() {
    let u = util();
    assert!(!u.is_aspect_ratio_locked());
    assert!(u.can_resize());
    assert!(u.can_bind());
    assert!(u.can_edit());
    assert_eq!(u.shape_type(), "table");
}

#[test]
fn test_render_reflects_host_state() {
    let mut scene = Scene::default();
    let id = ShapeId::new("shape:render");
    scene.create(id.clone());
    scene.select(&[id.clone()]);
    let view = scene.render(&id).expect("Shape vorhanden");
    assert!(view.is_selected);
    assert!(!view.is_editing);
    assert!(view.shows_picker());
}

#[test]
fn test_registry_lookup() {
    let registry = ShapeUtilRegistry::default();
    assert_eq!(registry.shape_types(), ["table"]);
    assert!(registry.get("table").is_some());
    assert!(registry.get("arrow").is_none());

    let mut registry = ShapeUtilRegistry::empty();
    assert!(registry.is_empty());
    registry.register(Box::new(util()));
    registry.register(Box::new(util()));
    assert_eq!(registry.len(), 1);
}
