//! Layer-übergreifende Typen: Optionen, Mess-Stil und Render-Vertrag.

pub mod options;
mod render_scene;
mod text_style;

pub use options::TableOptions;
pub use options::{GROWTH_PADDING, MAX_COLS, MAX_ROWS, UNDIMENSIONED_HEIGHT};
pub use render_scene::{CellView, PickerCellView, RenderScene, TableBody};
pub use text_style::TextStyle;
