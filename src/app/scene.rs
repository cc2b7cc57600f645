//! In-Memory-Host: hält Shapes, Selektion und Editier-Status.
//!
//! Führt bei jedem Update `on_before_update` aus, so wie ein grafischer
//! Editor es tun würde. Wird von CLI und Integrationstests genutzt.

use glam::Vec2;
use indexmap::IndexMap;

use super::host::{EstimatingMeasurer, ShapeHost, ShapePatch, TextMeasurer};
use super::lifecycle::{ResizeInfo, ShapeUtil, TableShapeUtil};
use crate::core::{constrain_tail, ShapeId, TableError, TableShape};
use crate::shared::{RenderScene, TableOptions, TextStyle};

/// Szene mit Tabellen-Shapes in Einfügereihenfolge.
pub struct Scene {
    shapes: IndexMap<ShapeId, TableShape>,
    util: TableShapeUtil,
    selected: Vec<ShapeId>,
    editing: Option<ShapeId>,
    measurer: Box<dyn TextMeasurer>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl Scene {
    /// Leere Szene mit schätzender Textmessung.
    pub fn new(options: TableOptions) -> Self {
        Self::with_measurer(options, Box::new(EstimatingMeasurer))
    }

    /// Leere Szene mit eigener Textmessung.
    pub fn with_measurer(options: TableOptions, measurer: Box<dyn TextMeasurer>) -> Self {
        Self {
            shapes: IndexMap::new(),
            util: TableShapeUtil::new(options),
            selected: Vec::new(),
            editing: None,
            measurer,
        }
    }

    pub fn util(&self) -> &TableShapeUtil {
        &self.util
    }

    pub fn options(&self) -> &TableOptions {
        self.util.options()
    }

    /// Fügt einen Shape ein (nach `on_before_create`). Gleiche ID ersetzt.
    pub fn insert(&mut self, shape: TableShape) -> &TableShape {
        let shape = self.util.on_before_create(shape);
        let id = shape.id.clone();
        log::info!(
            "Shape {} eingefügt ({:.0}x{:.0})",
            id,
            shape.width(),
            shape.height()
        );
        let (index, _) = self.shapes.insert_full(id, shape);
        &self.shapes[index]
    }

    /// Übernimmt einen persistierten Shape. Nur der Tail wird neu geclampt,
    /// Höhe und Mindesthöhe bleiben wie gespeichert.
    pub fn restore(&mut self, shape: TableShape) -> &TableShape {
        let shape = constrain_tail(shape, self.util.options());
        let (index, _) = self.shapes.insert_full(shape.id.clone(), shape);
        &self.shapes[index]
    }

    /// Erstellt einen Shape mit Default-Eigenschaften.
    pub fn create(&mut self, id: ShapeId) -> &TableShape {
        let shape = self.util.default_props(id);
        self.insert(shape)
    }

    pub fn shapes(&self) -> impl Iterator<Item = &TableShape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Ersetzt die Selektion.
    pub fn select(&mut self, ids: &[ShapeId]) {
        self.selected = ids
            .iter()
            .filter(|id| self.shapes.contains_key(*id))
            .cloned()
            .collect();
    }

    /// Startet oder beendet den Text-Modus.
    pub fn set_editing(&mut self, id: Option<ShapeId>) {
        self.editing = id.filter(|id| self.shapes.contains_key(id));
    }

    /// Ersetzt einen Shape nach `on_before_update`.
    fn commit(&mut self, id: &ShapeId, next: TableShape) -> Result<(), TableError> {
        let prev = self
            .shapes
            .get(id)
            .ok_or_else(|| TableError::UnknownShape(id.clone()))?;
        let next = self.util.on_before_update(prev, next);
        self.shapes.insert(id.clone(), next);
        Ok(())
    }

    /// Resize-Geste relativ zum aktuellen Zustand.
    pub fn resize(&mut self, id: &ShapeId, info: &ResizeInfo) -> Result<(), TableError> {
        let shape = self.current(id)?;
        let next = self.util.on_resize(shape, info);
        self.commit(id, next)
    }

    /// Tail-Handle an eine Position in Shape-Koordinaten ziehen.
    pub fn drag_tail(&mut self, id: &ShapeId, handle: Vec2) -> Result<(), TableError> {
        let shape = self.current(id)?;
        let next = self.util.on_handle_drag(shape, handle);
        self.commit(id, next)
    }

    /// Render-Modell eines Shapes.
    pub fn render(&self, id: &ShapeId) -> Option<RenderScene> {
        self.shapes.get(id).map(|s| self.util.render(s, self))
    }

    fn current(&self, id: &ShapeId) -> Result<&TableShape, TableError> {
        self.shapes
            .get(id)
            .ok_or_else(|| TableError::UnknownShape(id.clone()))
    }
}

impl TextMeasurer for Scene {
    fn measure_rendered_height(&self, text: &str, style: &TextStyle) -> f32 {
        self.measurer.measure_rendered_height(text, style)
    }
}

impl ShapeHost for Scene {
    fn shape(&self, id: &ShapeId) -> Option<&TableShape> {
        self.shapes.get(id)
    }

    fn update_shape(&mut self, id: &ShapeId, patch: ShapePatch) -> Result<(), TableError> {
        let next = patch.apply_to(self.current(id)?)?;
        self.commit(id, next)
    }

    fn is_editing(&self, id: &ShapeId) -> bool {
        self.editing.as_ref() == Some(id)
    }

    fn only_selected_id(&self) -> Option<&ShapeId> {
        match self.selected.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    fn shape_util(&self) -> &TableShapeUtil {
        &self.util
    }
}
