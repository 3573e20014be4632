use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use jsonedit::{EditorWidget, markup, schema_from_json, schema_from_yaml};

/// Renders a schema file as a standalone HTML page so the editor widget can
/// be checked in a browser without a host framework.
#[derive(Parser)]
#[command(name = "jsonedit", version)]
struct Cli {
    /// Schema file; parsed as YAML for .yaml/.yml, JSON otherwise
    schema: PathBuf,

    /// Field name used for the form control and element ids
    #[arg(long, default_value = "data")]
    name: String,

    /// Initial field value, passed through as-is
    #[arg(long)]
    value: Option<String>,

    /// Start with the editor expanded instead of collapsed
    #[arg(long)]
    expanded: bool,

    /// Enable the rich-text editor plugin
    #[arg(long)]
    rich_text: bool,

    /// Theme handed to the client editor
    #[arg(long, default_value = "bootstrap3")]
    theme: String,

    /// Write the page to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(&cli.schema)?;
    let schema = match cli.schema.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => schema_from_yaml(&text)?,
        _ => schema_from_json(&text)?,
    };

    let widget = EditorWidget::new(schema)
        .with_collapsed(!cli.expanded)
        .with_rich_text(cli.rich_text)
        .with_option("theme", cli.theme.as_str());

    let fragment = widget.render(&cli.name, cli.value.as_deref())?;
    let page = markup::document("jsonedit preview", &widget.asset_manifest(), &fragment);

    match &cli.out {
        Some(path) => fs::write(path, page.as_str())?,
        None => println!("{}", page),
    }

    Ok(())
}
