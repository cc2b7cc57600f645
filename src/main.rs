//! Callout-Tabelle CLI.
//!
//! Lädt einen persistierten Shape, wendet optional Picker-Auswahl und
//! Zellbearbeitungen an und gibt den Record sowie den Umriss-Pfad aus.
//!
//! Aufruf: `callout-table <shape.json> [--pick RxC] [--edit INDEX=TEXT]…`

use std::path::PathBuf;

use anyhow::{bail, Context};
use callout_table::{
    encode_shape, CellPos, Scene, ShapeHost, ShapeRecord, ShapeUtilRegistry, TableController,
    TableIntent, TableOptions,
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("callout-table v{} startet...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = CliArgs::parse(std::env::args().skip(1)).and_then(run) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

/// Geparste Kommandozeile.
#[derive(Debug, PartialEq)]
struct CliArgs {
    input: PathBuf,
    pick: Option<CellPos>,
    edits: Vec<(usize, String)>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut input = None;
        let mut pick = None;
        let mut edits = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--pick" => {
                    let value = args.next().context("--pick erwartet RxC")?;
                    pick = Some(parse_dims(&value)?);
                }
                "--edit" => {
                    let value = args.next().context("--edit erwartet INDEX=TEXT")?;
                    edits.push(parse_edit(&value)?);
                }
                flag if flag.starts_with("--") => bail!("Unbekannte Option: {flag}"),
                path => {
                    if input.replace(PathBuf::from(path)).is_some() {
                        bail!("Nur eine Eingabedatei erlaubt");
                    }
                }
            }
        }

        Ok(Self {
            input: input
                .context("Aufruf: callout-table <shape.json> [--pick RxC] [--edit INDEX=TEXT]")?,
            pick,
            edits,
        })
    }
}

fn parse_dims(value: &str) -> anyhow::Result<CellPos> {
    let (rows, cols) = value
        .split_once(['x', 'X'])
        .with_context(|| format!("Ungültige Dimensionen '{value}', erwartet RxC"))?;
    Ok(CellPos::new(
        rows.trim().parse().context("Zeilen keine Zahl")?,
        cols.trim().parse().context("Spalten keine Zahl")?,
    ))
}

fn parse_edit(value: &str) -> anyhow::Result<(usize, String)> {
    let (index, text) = value
        .split_once('=')
        .with_context(|| format!("Ungültige Bearbeitung '{value}', erwartet INDEX=TEXT"))?;
    let index = index.trim().parse().context("Zellindex keine Zahl")?;
    Ok((index, text.replace("\\n", "\n")))
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let options = TableOptions::load_from_file(&TableOptions::config_path());
    let registry = ShapeUtilRegistry::new(options.clone());

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Datei {} nicht lesbar", args.input.display()))?;
    let record: ShapeRecord = serde_json::from_str(&json)
        .with_context(|| format!("{} ist kein gültiger Shape-Record", args.input.display()))?;
    if registry.get(&record.shape_type).is_none() {
        bail!(
            "Shape-Typ '{}' nicht unterstützt (bekannt: {:?})",
            record.shape_type,
            registry.shape_types()
        );
    }

    let mut scene = Scene::new(options.clone());
    let id = scene.restore(record.into_shape(&options)).id.clone();
    let mut controller = TableController::new();

    if let Some(pos) = args.pick {
        controller.handle_intent(
            &mut scene,
            TableIntent::PickerClicked {
                id: id.clone(),
                pos,
            },
        )?;
    }

    scene.set_editing(Some(id.clone()));
    for (index, text) in args.edits {
        controller.handle_intent(
            &mut scene,
            TableIntent::CellEdited {
                id: id.clone(),
                index,
                text,
            },
        )?;
    }
    scene.set_editing(None);

    let shape = scene
        .shape(&id)
        .with_context(|| format!("Shape {id} fehlt in der Szene"))?;
    println!("{}", encode_shape(shape)?);
    if let Some(view) = scene.render(&id) {
        println!("{}", view.outline);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_pick_and_edits() {
        let parsed = CliArgs::parse(args(&[
            "shape.json",
            "--pick",
            "2x3",
            "--edit",
            "0=Hallo",
            "--edit",
            "4=a=b\\nc",
        ]))
        .expect("gültige Argumente");
        assert_eq!(parsed.input, PathBuf::from("shape.json"));
        assert_eq!(parsed.pick, Some(CellPos::new(2, 3)));
        assert_eq!(
            parsed.edits,
            vec![(0, "Hallo".to_string()), (4, "a=b\nc".to_string())]
        );
    }

    #[test]
    fn rejects_missing_input_and_bad_values() {
        assert!(CliArgs::parse(args(&[])).is_err());
        assert!(CliArgs::parse(args(&["a.json", "b.json"])).is_err());
        assert!(CliArgs::parse(args(&["a.json", "--pick", "3"])).is_err());
        assert!(CliArgs::parse(args(&["a.json", "--edit", "x=1"])).is_err());
        assert!(CliArgs::parse(args(&["a.json", "--verbose"])).is_err());
    }
}
