//! Zentrale Konfiguration für das Callout-Table-Shape.
//!
//! `TableOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Shape-Größen ────────────────────────────────────────────────────

/// Breite eines neu erstellten Shapes.
pub const DEFAULT_WIDTH: f32 = 356.0;
/// Höhe eines neu erstellten Shapes (vor dem ersten Update-Durchlauf).
pub const DEFAULT_HEIGHT: f32 = 254.0;
/// Höhe einer Tabelle ohne festgelegtes Grid (Picker-Ansicht).
pub const UNDIMENSIONED_HEIGHT: f32 = 256.0;

// ── Grid-Picker ─────────────────────────────────────────────────────

/// Maximale Zeilenanzahl im Dimension-Picker.
pub const MAX_ROWS: u32 = 7;
/// Maximale Spaltenanzahl im Dimension-Picker.
pub const MAX_COLS: u32 = 10;
/// Obergrenze für Zeilen und Spalten eines persistierten Grids, unabhängig
/// vom Picker (größtes Limit aller Deployments).
pub const PERSISTED_GRID_CEILING: u32 = 10;

// ── Auto-Höhe ───────────────────────────────────────────────────────

/// Padding, das bei jeder Höhenanpassung addiert wird (verhindert abgeschnittene Ränder).
pub const GROWTH_PADDING: f32 = 10.0;
/// Start-Messhöhe einer Zelle, bevor eine echte Messung vorliegt.
pub const INITIAL_ACTIVE_HEIGHT: f32 = 150.0;

// ── Tail ────────────────────────────────────────────────────────────

/// Diagonale / Divisor = minimaler Tail-Abstand zum Körper.
pub const TAIL_MIN_DIVISOR: f32 = 5.0;
/// Diagonale / Divisor = maximaler Tail-Abstand zum Körper.
pub const TAIL_MAX_DIVISOR: f32 = 1.5;

// ── Zellen-Text ─────────────────────────────────────────────────────

/// Innenabstand einer Zelle in Pixeln (alle Seiten).
pub const CELL_PADDING: f32 = 10.0;
/// Zeilenhöhe relativ zur Schriftgröße.
pub const TEXT_LINE_HEIGHT: f32 = 1.35;
/// Schriftgrößen für s / m / l / xl.
pub const LABEL_FONT_SIZES: [f32; 4] = [18.0, 22.0, 26.0, 32.0];

/// Alle zur Laufzeit änderbaren Optionen des Tabellen-Shapes.
/// Wird als `callout_table.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableOptions {
    // ── Größen ──────────────────────────────────────────────────
    /// Breite neuer Shapes
    pub default_width: f32,
    /// Höhe neuer Shapes
    pub default_height: f32,
    /// Höhe solange kein Grid festgelegt ist
    pub undimensioned_height: f32,

    // ── Picker ──────────────────────────────────────────────────
    /// Maximale Zeilen im Picker (je nach Deployment 7 oder 10)
    pub max_rows: u32,
    /// Maximale Spalten im Picker
    pub max_cols: u32,

    // ── Auto-Höhe ───────────────────────────────────────────────
    /// Padding pro Höhenanpassung
    pub growth_padding: f32,
    /// Messhöhe vor der ersten Zellbearbeitung
    #[serde(default = "default_initial_active_height")]
    pub initial_active_height: f32,

    // ── Tail ────────────────────────────────────────────────────
    /// Divisor für den minimalen Tail-Abstand
    pub tail_min_divisor: f32,
    /// Divisor für den maximalen Tail-Abstand
    pub tail_max_divisor: f32,

    // ── Text ────────────────────────────────────────────────────
    /// Zellen-Innenabstand
    pub cell_padding: f32,
    /// Relative Zeilenhöhe
    pub line_height: f32,
    /// Schriftgrößen s / m / l / xl
    #[serde(default = "default_label_font_sizes")]
    pub label_font_sizes: [f32; 4],
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            undimensioned_height: UNDIMENSIONED_HEIGHT,

            max_rows: MAX_ROWS,
            max_cols: MAX_COLS,

            growth_padding: GROWTH_PADDING,
            initial_active_height: INITIAL_ACTIVE_HEIGHT,

            tail_min_divisor: TAIL_MIN_DIVISOR,
            tail_max_divisor: TAIL_MAX_DIVISOR,

            cell_padding: CELL_PADDING,
            line_height: TEXT_LINE_HEIGHT,
            label_font_sizes: LABEL_FONT_SIZES,
        }
    }
}

/// Serde-Default für `initial_active_height` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_initial_active_height() -> f32 {
    INITIAL_ACTIVE_HEIGHT
}

/// Serde-Default für `label_font_sizes`.
fn default_label_font_sizes() -> [f32; 4] {
    LABEL_FONT_SIZES
}

impl TableOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("callout-table"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("callout_table.toml")
    }

    /// Obergrenze für geladene Grids: nie kleiner als die Picker-Limits.
    pub fn persisted_grid_limits(&self) -> (u32, u32) {
        (
            self.max_rows.max(PERSISTED_GRID_CEILING),
            self.max_cols.max(PERSISTED_GRID_CEILING),
        )
    }

    /// Ersetzt unbrauchbare Werte (≤ 0, NaN) durch die Defaults.
    ///
    /// Grid-Limits werden auf mindestens 1 gesetzt, Tail-Divisoren so, dass
    /// der Minimal-Abstand nie größer als der Maximal-Abstand ist.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };

        self.default_width = positive(self.default_width, defaults.default_width);
        self.default_height = positive(self.default_height, defaults.default_height);
        self.undimensioned_height =
            positive(self.undimensioned_height, defaults.undimensioned_height);
        self.max_rows = self.max_rows.max(1);
        self.max_cols = self.max_cols.max(1);
        self.initial_active_height =
            positive(self.initial_active_height, defaults.initial_active_height);
        self.line_height = positive(self.line_height, defaults.line_height);
        if !self.growth_padding.is_finite() || self.growth_padding < 0.0 {
            self.growth_padding = defaults.growth_padding;
        }
        if !self.cell_padding.is_finite() || self.cell_padding < 0.0 {
            self.cell_padding = defaults.cell_padding;
        }
        for (size, fallback) in self
            .label_font_sizes
            .iter_mut()
            .zip(defaults.label_font_sizes)
        {
            *size = positive(*size, fallback);
        }

        self.tail_min_divisor = positive(self.tail_min_divisor, defaults.tail_min_divisor);
        self.tail_max_divisor = positive(self.tail_max_divisor, defaults.tail_max_divisor);
        if self.tail_max_divisor > self.tail_min_divisor {
            log::warn!(
                "Tail-Divisoren vertauscht ({} / {}), verwende Standardwerte",
                self.tail_min_divisor,
                self.tail_max_divisor
            );
            self.tail_min_divisor = defaults.tail_min_divisor;
            self.tail_max_divisor = defaults.tail_max_divisor;
        }
        self
    }
}
