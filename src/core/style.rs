//! Stil-Eigenschaften des Tabellen-Shapes (Größe, Schrift, Ausrichtung, Farbe).

use serde::{Deserialize, Serialize};

/// Größenstufe, bestimmt Schriftgröße und Strichstärke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeSize {
    /// Klein
    S,
    /// Mittel
    #[default]
    M,
    /// Groß
    L,
    /// Sehr groß
    Xl,
}

impl ShapeSize {
    /// Index in Tabellen wie `TableOptions::label_font_sizes`.
    pub fn index(self) -> usize {
        match self {
            ShapeSize::S => 0,
            ShapeSize::M => 1,
            ShapeSize::L => 2,
            ShapeSize::Xl => 3,
        }
    }

    /// Strichstärke des Umrisses in Pixeln.
    pub fn stroke_width(self) -> f32 {
        match self {
            ShapeSize::S => 2.0,
            ShapeSize::M => 3.5,
            ShapeSize::L => 5.0,
            ShapeSize::Xl => 10.0,
        }
    }
}

/// Schriftfamilie der Zelltexte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Handschrift-Stil
    #[default]
    Draw,
    /// Serifenlos
    Sans,
    /// Mit Serifen
    Serif,
    /// Monospace
    Mono,
}

/// Horizontale Ausrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    /// Linksbündig
    Start,
    /// Zentriert
    #[default]
    Middle,
    /// Rechtsbündig
    End,
}

/// Vertikale Ausrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Oben
    Start,
    /// Mitte
    #[default]
    Middle,
    /// Unten
    End,
}

/// Benannte Palettenfarbe; die konkrete Farbe liefert das Theme des Hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeColor {
    #[default]
    Black,
    Grey,
    LightViolet,
    Violet,
    Blue,
    LightBlue,
    Yellow,
    Orange,
    Green,
    LightGreen,
    LightRed,
    Red,
    White,
}

/// Gebündelte Stil-Eigenschaften eines Shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeStyle {
    pub size: ShapeSize,
    pub font: FontFamily,
    pub align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub color: ShapeColor,
}
