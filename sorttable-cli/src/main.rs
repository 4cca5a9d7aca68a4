mod click;
mod loader;
mod render;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use sorttable::{DomTable, SortTableConfig, SortableTable, TableSurface};
use tabledom::MouseButton;

use click::Click;
use render::Format;

#[derive(Parser)]
#[command(
    name = "sorttable-cli",
    about = "Sort a CSV table by replaying header clicks"
)]
struct Cli {
    /// CSV file whose first record is the header row
    csv: PathBuf,
    /// Header click: a column index (`2`) or a point in pixels (`130,4`). Repeatable.
    #[arg(long = "click", value_name = "N|X,Y")]
    clicks: Vec<Click>,
    /// JSON file overriding class names, glyph or initial column
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
    #[arg(long, default_value = "sorttable.log")]
    log: PathBuf,
}

fn load_config(path: Option<&PathBuf>) -> Result<SortTableConfig> {
    let Some(path) = path else {
        return Ok(SortTableConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    SortTableConfig::from_json(&json)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

fn apply_click(widget: &mut SortableTable<DomTable>, click: Click) -> Result<()> {
    let result = match click {
        Click::Column(column) => widget.click_header(column)?,
        Click::At { x, y } => {
            let event = widget
                .surface_mut()
                .document_mut()
                .dispatch_click(x, y, MouseButton::Left);
            widget.handle_event(&event)?
        }
    };
    match result {
        Some(direction) => log::info!("[cli] {click}: sorted {direction}"),
        None => log::info!("[cli] {click}: no header hit"),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let document = loader::load_csv_file(&cli.csv)?;
    let table = DomTable::new(document, loader::TABLE_ID)?;

    let mut widget = SortableTable::attach(table, config)?;
    log::debug!(
        "[cli] attached {} columns from {}",
        widget.surface().header_count(),
        cli.csv.display()
    );

    for click in cli.clicks {
        apply_click(&mut widget, click)?;
    }

    let table = widget.surface().table()?;
    let output = match cli.format {
        Format::Html => tabledom::to_html(table),
        Format::Text => render::render_text(
            table,
            widget.sort_state(),
            &widget.config().indicator_glyph,
        ),
    };
    println!("{output}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log)
        .with_context(|| format!("Failed to create log file: {}", cli.log.display()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    run(cli)
}
