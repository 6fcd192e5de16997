//! Prints the layout of both calendar sheets.
//!
//! ```text
//! cargo run --example sheets                          # current year, no highlights
//! cargo run --example sheets -- dates.txt             # highlight `day/month` lines
//! cargo run --example sheets -- --year 2027 dates.txt
//! RUST_LOG=dodecal=debug cargo run --example sheets   # trace every attached cell
//! ```

use chrono::Datelike;
use dodecal::calendar::{CalendarGrid, HighlightSet, Marker};
use dodecal::layout::{NetConfig, SheetPlan};
use dodecal::Result;

/// Parsed CLI arguments.
struct CliArgs {
    year: i32,
    highlights: Option<String>,
}

/// Parse CLI arguments: an optional `--year N` and an optional highlight file.
fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let year = args
        .iter()
        .position(|a| a == "--year")
        .and_then(|i| args.get(i + 1))
        .and_then(|y| y.parse().ok())
        .unwrap_or_else(|| chrono::Local::now().year());
    let highlights = args
        .iter()
        .enumerate()
        .find(|(i, a)| !a.starts_with('-') && (*i == 0 || args[i - 1] != "--year"))
        .map(|(_, a)| a.clone());

    CliArgs { year, highlights }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for dodecal.
    // Override with RUST_LOG env var (e.g. RUST_LOG=dodecal=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("dodecal=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = parse_args();
    let highlights = match &args.highlights {
        Some(path) => HighlightSet::from_path(args.year, path)?,
        None => HighlightSet::new(),
    };
    let grid = CalendarGrid::new(args.year, &highlights);
    let config = NetConfig::default();

    for (page, plan) in SheetPlan::standard_pair().iter().enumerate() {
        println!("== sheet {} ({})", page + 1, args.year);
        let layout = plan.lay_out(&config)?;

        for face in &layout.faces {
            let cell = &face.cell;
            println!(
                "month {:>2}: center ({:.3}, {:.3}) rotation {:.4}",
                face.month,
                cell.center().x,
                cell.center().y,
                cell.rotation()
            );
            for (u, v) in cell.edges() {
                println!("  edge ({}, {}) -- ({}, {})", u.x, u.y, v.x, v.y);
            }
            for fold in &face.folds {
                let [a, b, c] = fold.polyline();
                println!(
                    "  fold ({}, {}) -- ({}, {}) -- ({}, {})",
                    a.x, a.y, b.x, b.y, c.x, c.y
                );
            }

            let title = cell.to_global(&grid.layout().title_position());
            println!("  title at ({:.3}, {:.3})", title.x, title.y);
            for day in grid.day_positions(face.month)? {
                let at = cell.to_global(&day.position);
                let marker = match day.marker() {
                    Marker::None => "",
                    Marker::Filled => " *",
                    Marker::Ring => " o",
                };
                println!(
                    "  {:>2} at ({:.3}, {:.3}){marker}",
                    day.date.day(),
                    at.x,
                    at.y
                );
            }
        }
    }

    Ok(())
}
