use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;

use rustyloom::generator;
use rustyloom::parser::HarnessParser;

#[derive(Parser, Debug)]
#[command(author, version, about = "View and edit wiring harness diagrams", long_about = None)]
struct Cli {
    /// Harness description file
    #[arg(value_name = "HARNESS_FILE", required_unless_present = "make_template")]
    harness_file: Option<String>,

    /// Write a starter harness description to template_harness.txt and exit
    #[arg(long)]
    make_template: bool,

    /// Print the parsed document as JSON instead of opening the viewer
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.make_template {
        generator::export_template(false)
            .context("Error exporting harness description template")?;
        println!("Exported harness description template.");
        return Ok(());
    }

    // required_unless_present guarantees the file argument here
    let path = Utf8PathBuf::from(cli.harness_file.as_deref().unwrap_or_default());
    let mut parser = HarnessParser::new();
    let doc = parser.parse_file(&path)?;
    parser.print_diagnostics();

    if cli.json {
        let json = serde_json::to_string_pretty(&doc)?;
        println!("{}", json);
        return Ok(());
    }

    open_view(doc, path)
}

#[cfg(feature = "egui")]
fn open_view(doc: rustyloom::model::HarnessDoc, path: Utf8PathBuf) -> Result<()> {
    rustyloom::egui_app::run(doc, path)
}

#[cfg(not(feature = "egui"))]
fn open_view(doc: rustyloom::model::HarnessDoc, _path: Utf8PathBuf) -> Result<()> {
    // Built without the viewer; fall back to the JSON dump.
    let json = serde_json::to_string_pretty(&doc)?;
    println!("{}", json);
    Ok(())
}
