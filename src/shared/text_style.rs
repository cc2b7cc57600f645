//! Stil-Vorgaben für die Textmessung (shared zwischen App und Host).

use crate::core::{FontFamily, HorizontalAlign};

/// Constraints, unter denen der Host einen Zelltext misst.
///
/// `max_width` ist die verfügbare Zellbreite inklusive Padding; die
/// gemessene Höhe enthält das Padding ebenfalls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Schriftfamilie
    pub font: FontFamily,
    /// Schriftgröße in Pixeln
    pub font_size: f32,
    /// Relative Zeilenhöhe
    pub line_height: f32,
    /// Innenabstand auf allen Seiten
    pub padding: f32,
    /// Verfügbare Breite der Zelle
    pub max_width: f32,
    /// Horizontale Ausrichtung
    pub align: HorizontalAlign,
}

impl TextStyle {
    /// Höhe einer einzelnen Textzeile in Pixeln.
    pub fn line_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Breite, die nach Abzug des Paddings für Text bleibt (nie negativ).
    pub fn content_width(&self) -> f32 {
        (self.max_width - 2.0 * self.padding).max(0.0)
    }
}
