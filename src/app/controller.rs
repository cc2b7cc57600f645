//! Controller für die Interaktion mit Tabellen-Shapes.

use anyhow::Context;

use super::host::ShapeHost;
use super::{TableCommand, TableIntent};

/// Übersetzt UI-Eingaben in Shape-Updates auf dem Host.
///
/// Hält keine eigenen Optionen: Limits und Messstil kommen vom Host.
#[derive(Debug, Default)]
pub struct TableController;

impl TableController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        host: &mut dyn ShapeHost,
        intent: TableIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(&*host, intent);
        for command in commands {
            self.handle_command(host, command)?;
        }

        Ok(())
    }

    /// Führt einen Command als Patch auf dem Host aus.
    pub fn handle_command(
        &mut self,
        host: &mut dyn ShapeHost,
        command: TableCommand,
    ) -> anyhow::Result<()> {
        log::debug!("Command: {:?}", command);
        let (id, patch) = command.into_patch();
        host.update_shape(&id, patch)
            .with_context(|| format!("Update von Shape {id} fehlgeschlagen"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::host::ShapeHost;
    use crate::app::scene::Scene;
    use crate::core::{CellPos, ShapeId};

    #[test]
    fn hover_then_click_commits_grid() {
        let mut scene = Scene::default();
        let id = ShapeId::new("shape:c");
        scene.create(id.clone());
        let mut controller = TableController::default();

        controller
            .handle_intent(
                &mut scene,
                TableIntent::PickerHovered {
                    id: id.clone(),
                    pos: CellPos::new(3, 4),
                },
            )
            .expect("Hover");
        assert_eq!(
            scene.shape(&id).and_then(|s| s.hovered),
            Some(CellPos::new(3, 4))
        );

        controller
            .handle_intent(
                &mut scene,
                TableIntent::PickerClicked {
                    id: id.clone(),
                    pos: CellPos::new(3, 4),
                },
            )
            .expect("Klick");
        let shape = scene.shape(&id).expect("Shape");
        assert_eq!(shape.text().len(), 12);
        assert!(shape.hovered.is_none());
    }

    #[test]
    fn picker_limits_follow_host_options() {
        let mut options = crate::shared::TableOptions::default();
        options.max_rows = 10;
        let mut scene = Scene::new(options);
        let id = ShapeId::new("shape:hoch");
        scene.create(id.clone());

        TableController::new()
            .handle_intent(
                &mut scene,
                TableIntent::PickerClicked {
                    id: id.clone(),
                    pos: CellPos::new(9, 2),
                },
            )
            .expect("Klick");
        let shape = scene.shape(&id).expect("Shape");
        assert_eq!(shape.text().len(), 18);
    }

    #[test]
    fn failed_update_reports_shape_id() {
        let mut scene = Scene::default();
        let mut controller = TableController::default();
        let err = controller
            .handle_command(
                &mut scene,
                TableCommand::SetHovered {
                    id: ShapeId::new("shape:weg"),
                    hovered: None,
                },
            )
            .expect_err("unbekannter Shape");
        assert!(format!("{err:#}").contains("shape:weg"));
    }
}
