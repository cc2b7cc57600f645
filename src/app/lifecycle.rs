//! Shape-Util-Trait und Registry: Lifecycle-Hooks, die der Host pro Shape-Typ aufruft.
//!
//! Jeder Shape-Typ implementiert `ShapeUtil` und wird bei der
//! `ShapeUtilRegistry` registriert. Hooks erzeugen neue Shape-Werte,
//! der Host übernimmt sie.

use glam::Vec2;
use indexmap::IndexMap;

use super::host::ShapeHost;
use super::picker::PickerLimits;
use super::render_scene;
use crate::core::wire::SHAPE_TYPE;
use crate::core::{
    apply_growth, constrain_tail, outline_path, polygon_contains, shape_bounds, table_vertices,
    ShapeBounds, ShapeId, TableShape,
};
use crate::shared::{RenderScene, TableOptions};

/// Hit-Test- und Bounds-Geometrie eines Shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    /// Geschlossener Umriss in Shape-Koordinaten
    pub vertices: Vec<Vec2>,
    /// Innenfläche zählt für den Hit-Test
    pub filled: bool,
}

impl ShapeGeometry {
    pub fn bounds(&self) -> ShapeBounds {
        shape_bounds(&self.vertices)
    }

    /// Trifft `point` (Shape-Koordinaten) die Fläche?
    pub fn hit_test(&self, point: Vec2) -> bool {
        self.filled && polygon_contains(&self.vertices, point)
    }
}

/// Resize-Geste relativ zum Zustand beim Start der Geste.
///
/// `anchor` ist der feste Punkt in Seitenkoordinaten (gegenüberliegende
/// Ecke/Kante), `scale` der Faktor pro Achse (negativ bei Spiegelung).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeInfo {
    pub scale: Vec2,
    pub anchor: Vec2,
}

/// Lifecycle-Hooks eines Shape-Typs.
pub trait ShapeUtil {
    /// Typ-Name im Host (z.B. `"table"`)
    fn shape_type(&self) -> &str;

    /// Neuer Shape mit Default-Eigenschaften.
    fn default_props(&self, id: ShapeId) -> TableShape;

    /// Umriss für Hit-Test und Bounds.
    fn geometry(&self, shape: &TableShape) -> ShapeGeometry;

    /// Wird einmal vor dem Einfügen in den Host aufgerufen.
    fn on_before_create(&self, shape: TableShape) -> TableShape {
        shape
    }

    /// Wird vor jedem Speichern eines Updates aufgerufen.
    fn on_before_update(&self, _prev: &TableShape, next: TableShape) -> TableShape {
        next
    }

    /// Box-Resize; Inhalt und Tail bleiben unverändert.
    fn on_resize(&self, shape: &TableShape, info: &ResizeInfo) -> TableShape {
        resize_box(shape, info)
    }

    /// Drag eines Handles an eine neue Position (Shape-Koordinaten).
    fn on_handle_drag(&self, shape: &TableShape, _handle: Vec2) -> TableShape {
        shape.clone()
    }

    /// Render-Modell für den Host.
    fn render(&self, shape: &TableShape, host: &dyn ShapeHost) -> RenderScene;

    /// Pfad des Selektionsrahmens.
    fn render_selection_indicator(&self, shape: &TableShape) -> String {
        outline_path(&self.geometry(shape).vertices)
    }

    fn is_aspect_ratio_locked(&self) -> bool {
        false
    }

    fn can_resize(&self) -> bool {
        true
    }

    fn can_bind(&self) -> bool {
        true
    }

    fn can_edit(&self) -> bool {
        true
    }
}

/// Skaliert die Box um den Anker; negative Faktoren spiegeln die Lage.
pub fn resize_box(shape: &TableShape, info: &ResizeInfo) -> TableShape {
    let scale = if info.scale.is_finite() {
        info.scale
    } else {
        Vec2::ONE
    };
    let map = |p: Vec2| info.anchor + (p - info.anchor) * scale;
    let a = map(shape.position);
    let b = map(shape.position + shape.size());
    let size = (b - a).abs();
    shape
        .clone()
        .with_position(a.min(b))
        .with_size(size.x, size.y)
}

// ── Tabellen-Shape ──────────────────────────────────────────────

/// Lifecycle der Callout-Tabelle.
#[derive(Debug, Clone, Default)]
pub struct TableShapeUtil {
    options: TableOptions,
}

impl TableShapeUtil {
    pub fn new(options: TableOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn picker_limits(&self) -> PickerLimits {
        PickerLimits::from_options(&self.options)
    }
}

impl ShapeUtil for TableShapeUtil {
    fn shape_type(&self) -> &str {
        SHAPE_TYPE
    }

    fn default_props(&self, id: ShapeId) -> TableShape {
        TableShape::new(id, &self.options)
    }

    fn geometry(&self, shape: &TableShape) -> ShapeGeometry {
        ShapeGeometry {
            vertices: table_vertices(shape).to_vec(),
            filled: true,
        }
    }

    fn on_before_create(&self, shape: TableShape) -> TableShape {
        apply_growth(shape, &self.options)
    }

    fn on_before_update(&self, prev: &TableShape, next: TableShape) -> TableShape {
        if prev.size() != next.size() {
            log::debug!(
                "Shape {}: Größe {:?} → {:?}, Tail wird neu geclampt",
                next.id,
                prev.size(),
                next.size()
            );
        }
        let next = constrain_tail(next, &self.options);
        let before = next.height();
        let grown = apply_growth(next, &self.options);
        if grown.height() != before {
            // Höhenänderung verschiebt Schnittpunkt und Band
            constrain_tail(grown, &self.options)
        } else {
            grown
        }
    }

    fn on_handle_drag(&self, shape: &TableShape, handle: Vec2) -> TableShape {
        shape.clone().with_tail(handle / shape.size())
    }

    fn render(&self, shape: &TableShape, host: &dyn ShapeHost) -> RenderScene {
        let is_selected = host.only_selected_id() == Some(&shape.id);
        render_scene::build(
            shape,
            self.picker_limits(),
            is_selected,
            host.is_editing(&shape.id),
        )
    }
}

// ── Registry ────────────────────────────────────────────────────

/// Verwaltet registrierte Shape-Utils nach Typ-Name.
pub struct ShapeUtilRegistry {
    utils: IndexMap<String, Box<dyn ShapeUtil>>,
}

impl Default for ShapeUtilRegistry {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl ShapeUtilRegistry {
    /// Erstellt eine Registry mit vorregistriertem Tabellen-Util.
    pub fn new(options: TableOptions) -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(TableShapeUtil::new(options)));
        registry
    }

    /// Registry ohne Einträge.
    pub fn empty() -> Self {
        Self {
            utils: IndexMap::new(),
        }
    }

    /// Registriert ein Util; ein bestehendes gleichen Typs wird ersetzt.
    pub fn register(&mut self, util: Box<dyn ShapeUtil>) {
        let shape_type = util.shape_type().to_string();
        if self.utils.insert(shape_type.clone(), util).is_some() {
            log::warn!("Shape-Util '{}' ersetzt", shape_type);
        }
    }

    /// Util zu einem Typ-Namen.
    pub fn get(&self, shape_type: &str) -> Option<&dyn ShapeUtil> {
        self.utils.get(shape_type).map(|u| u.as_ref())
    }

    /// Registrierte Typ-Namen in Registrierungsreihenfolge.
    pub fn shape_types(&self) -> Vec<&str> {
        self.utils.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.utils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utils.is_empty()
    }
}

#[cfg(test)]
mod tests;
