//! Bookshop
//!
//! Three books on a dark shelf. Hover to lift a book, click to select it,
//! click empty space or press Escape to dismiss. The selected book is shown
//! in the window title and logged.
//!
//! ```text
//! RUST_LOG=info cargo run -p bookshop -- --config bookshop.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use vitrine::app::Window;
use vitrine::{App, Catalog, Item, SelectionChange, ShowcaseSettings};

const BUNDLED_CATALOG: &str = include_str!("catalog.json");
const TITLE: &str = "Bookshop";

#[derive(Parser, Debug)]
#[command(name = "bookshop")]
#[command(about = "Interactive 3D bookshelf")]
#[command(version)]
struct Args {
    /// Catalog JSON file (defaults to the bundled three-book shelf)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable the idle bob
    #[arg(long)]
    still: bool,
}

fn describe(item: &Item) -> String {
    format!(
        "{} by {} ({})\n  {}",
        item.title, item.author, item.price, item.description
    )
}

fn show_selection(change: &SelectionChange, window: &Window) {
    match change {
        SelectionChange::Selected(item) => {
            window.set_title(&format!("{TITLE} - {}", item.title));
            log::info!("{}", describe(item));
        }
        SelectionChange::Cleared => window.set_title(TITLE),
    }
}

fn run(args: Args) -> vitrine::Result<()> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::from_json_str(BUNDLED_CATALOG)?,
    };

    let mut settings = match &args.config {
        Some(path) => ShowcaseSettings::from_path(path)?,
        None => ShowcaseSettings {
            title: TITLE.into(),
            ..Default::default()
        },
    };
    if args.still {
        settings.animation.idle_motion = false;
    }

    App::new()
        .with_settings(settings)
        .on_selection_change(show_selection)
        .run(catalog)
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
