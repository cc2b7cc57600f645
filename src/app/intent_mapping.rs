//! Mapping von Tabellen-Intents auf mutierende Commands.

use super::cell_editor::measure_cell_edit;
use super::host::ShapeHost;
use super::lifecycle::ShapeUtil;
use super::picker::DimensionPicker;
use super::{TableCommand, TableIntent};

/// Übersetzt einen `TableIntent` in eine Sequenz ausführbarer `TableCommand`s.
///
/// Liest nur den Host-Zustand; Optionen und Limits kommen aus dem beim Host
/// registrierten Util. Ungültige oder wirkungslose Eingaben ergeben eine
/// leere Sequenz.
pub fn map_intent_to_commands(host: &dyn ShapeHost, intent: TableIntent) -> Vec<TableCommand> {
    let util = host.shape_util();
    let Some(shape) = host.shape(intent.shape_id()) else {
        log::warn!("Intent für unbekannten Shape {} ignoriert", intent.shape_id());
        return Vec::new();
    };
    let mut picker = DimensionPicker::from_shape(shape, util.picker_limits());

    match intent {
        TableIntent::PickerHovered { id, pos } => {
            if picker.pointer_enter(pos) {
                vec![TableCommand::SetHovered {
                    id,
                    hovered: Some(pos),
                }]
            } else {
                Vec::new()
            }
        }
        TableIntent::PickerLeft { id } => {
            if picker.pointer_leave() {
                vec![TableCommand::SetHovered { id, hovered: None }]
            } else {
                Vec::new()
            }
        }
        TableIntent::PickerClicked { id, pos } => match picker.commit(pos) {
            Some(grid) => vec![TableCommand::CommitGrid { id, grid }],
            None => Vec::new(),
        },
        TableIntent::CellEdited { id, index, text } => {
            if !host.is_editing(&id) {
                log::debug!("Shape {}: Zelle {} außerhalb des Text-Modus", id, index);
                return Vec::new();
            }
            match measure_cell_edit(shape, index, text, host, util.options()) {
                Ok(edit) => vec![TableCommand::SetCellText { id, edit }],
                Err(e) => {
                    log::warn!("Shape {}: Zellbearbeitung verworfen: {}", id, e);
                    Vec::new()
                }
            }
        }
        TableIntent::TailDragged { id, handle } => {
            let tail = util.on_handle_drag(shape, handle).tail;
            vec![TableCommand::MoveTail { id, tail }]
        }
    }
}
