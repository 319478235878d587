//! bout-dash CLI - render spreadsheet style dashboards

use anyhow::{Context, Result};
use bout_dash::prelude::*;
use bout_dash::{ChartResult, CsvWriteOptions, Summary};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "boutdash")]
#[command(
    author,
    version,
    about = "Render proportion dashboards from fixed spreadsheet ranges"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render all dashboard panels
    Render {
        /// Input spreadsheet file (xlsx, xlsm, xls, ods, csv)
        input: PathBuf,

        /// JSON file overriding panel ranges
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Number of largest bubbles that get a label
        #[arg(short = 'k', long, default_value = "5")]
        top_k: usize,

        /// Radius multiplier for bubbles (> 0)
        #[arg(short, long, default_value = "1.0")]
        size_scale: f64,

        /// Show values under bubble labels
        #[arg(long)]
        show_values: bool,

        /// Comma-separated fill colors, e.g. "#FF0000,#00FF00"
        #[arg(short, long, value_delimiter = ',')]
        palette: Vec<String>,

        /// Print the full render plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input spreadsheet file
        input: PathBuf,
    },

    /// Print one range of a sheet as CSV
    Extract {
        /// Input spreadsheet file
        input: PathBuf,

        /// A1 range, e.g. "C1:L1"
        range: String,

        /// Sheet name or 0-based index (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Print coerced numbers, one per line (blank when missing)
        #[arg(short, long)]
        numeric: bool,
    },

    /// Write the dashboard tables as CSV downloads
    Export {
        /// Input spreadsheet file
        input: PathBuf,

        /// Directory for the CSV files
        #[arg(short, long)]
        out_dir: PathBuf,

        /// JSON file overriding panel ranges
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            layout,
            top_k,
            size_scale,
            show_values,
            palette,
            json,
        } => {
            let bubble = BubbleOptions::default()
                .with_top_k(top_k)
                .with_size_scale(size_scale)
                .with_show_values(show_values);
            render(&input, layout.as_deref(), bubble, &palette, json)
        }
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Extract {
            input,
            range,
            sheet,
            numeric,
        } => print_range(&input, &range, sheet.as_deref(), numeric),
        Commands::Export {
            input,
            out_dir,
            layout,
        } => export(&input, &out_dir, layout.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn open(input: &Path) -> Result<Workbook> {
    Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

fn load_options(layout: Option<&Path>) -> Result<DashboardOptions> {
    let mut options = DashboardOptions::default();
    if let Some(path) = layout {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout '{}'", path.display()))?;
        options.layout = DashboardLayout::from_json(&json)
            .with_context(|| format!("Failed to parse layout '{}'", path.display()))?;
    }
    Ok(options)
}

fn render(
    input: &Path,
    layout: Option<&Path>,
    bubble: BubbleOptions,
    palette: &[String],
    json: bool,
) -> Result<()> {
    let workbook = open(input)?;
    let mut options = load_options(layout)?.with_bubble(bubble);
    if !palette.is_empty() {
        options.palette = Palette::from_strs(palette).context("Invalid --palette")?;
    }

    let dashboard = Dashboard::render(&workbook, &options).context("Failed to render dashboard")?;

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &dashboard).context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        print_dashboard(&mut out, &dashboard)?;
    }
    Ok(())
}

fn print_dashboard<W: Write>(out: &mut W, dashboard: &Dashboard) -> Result<()> {
    let rep = &dashboard.representation;
    writeln!(out, "## Overall Style Representation")?;
    print_table(out, &rep.table)?;
    if let Some(title) = &rep.percent_chart.title {
        writeln!(out, "\n{}", title)?;
    }
    print_table(out, &rep.percent)?;
    print_bubbles(out, &rep.bubbles)?;

    let win = &dashboard.win_ratio;
    writeln!(out, "\n## Overall Win Ratio by Style")?;
    print_table(out, &win.table)?;
    if let Some(title) = &win.chart.title {
        writeln!(out, "{}", title)?;
    }
    print_bubbles(out, &win.bubbles)?;

    writeln!(
        out,
        "\n## Champion Conversion Rate by Style ({})",
        dashboard.cross_sheet
    )?;
    print_table(out, &dashboard.conversion.table)?;
    writeln!(out, "Percent view {}", dashboard.conversion.interpretation.note())?;
    print_bubbles(out, &dashboard.conversion.bubbles)?;

    writeln!(
        out,
        "\n## Champion Representation by Style ({})",
        dashboard.cross_sheet
    )?;
    print_table(out, &dashboard.champions.table)?;

    writeln!(out, "\n## Averages & Summary")?;
    print_summary(out, &dashboard.summary)?;
    Ok(())
}

fn print_table<W: Write>(out: &mut W, table: &LabeledTable) -> Result<()> {
    let header: Vec<&str> = std::iter::once(table.label_header())
        .chain(table.columns().iter().map(|c| c.name.as_str()))
        .collect();
    writeln!(out, "{}", header.join("\t"))?;

    for (label, values) in table.rows() {
        let cells: Vec<String> = values.iter().map(|v| format_value(*v)).collect();
        writeln!(out, "{}\t{}", label.unwrap_or(""), cells.join("\t"))?;
    }
    Ok(())
}

fn print_bubbles<W: Write>(out: &mut W, bubbles: &ChartResult<BubblePlan>) -> Result<()> {
    match bubbles {
        Ok(plan) => {
            let labels: Vec<&str> = plan.annotated().map(|c| c.label.as_str()).collect();
            writeln!(
                out,
                "Bubbles: {} circles, labeled: {}",
                plan.circles.len(),
                labels.join(", ")
            )?;
        }
        Err(e) => writeln!(out, "Bubbles unavailable: {}", e)?,
    }
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, summary: &Summary) -> Result<()> {
    let rows = [
        ("Average Representation (raw units)", summary.average_representation),
        ("Average Win Ratio", summary.average_win_ratio),
        ("Average Champion Conversion (Observed)", summary.average_conversion_observed),
        ("Average Champion Conversion (Reference)", summary.average_conversion_reference),
    ];
    for (name, value) in rows {
        writeln!(out, "{}: {}", name, format_value(value))?;
    }
    Ok(())
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| format!("{:.3}", v)).unwrap_or_default()
}

fn list_sheets(input: &Path) -> Result<()> {
    let workbook = open(input)?;

    for (i, name) in workbook.sheet_names().iter().enumerate() {
        println!("{}\t{}", i, name);
    }

    Ok(())
}

fn print_range(input: &Path, range: &str, sheet: Option<&str>, numeric: bool) -> Result<()> {
    let workbook = open(input)?;
    let selector = sheet.map(SheetSelector::parse).unwrap_or_default();
    let sheet = workbook
        .sheet(&selector)
        .with_context(|| format!("Sheet {} not found", selector))?;

    let spec: RangeSpec = range
        .parse()
        .with_context(|| format!("Invalid range '{}'", range))?;
    let grid = bout_dash::extract_range(sheet.grid(), &spec)
        .with_context(|| format!("Range {} is outside sheet '{}'", spec, sheet.name()))?;

    let mut out = io::stdout().lock();
    if numeric {
        for value in coerce(&grid.flatten()).iter() {
            writeln!(out, "{}", value.map(|v| v.to_string()).unwrap_or_default())?;
        }
    } else {
        CsvWriter::write_grid(&grid, &mut out, &CsvWriteOptions::default())
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

fn export(input: &Path, out_dir: &Path, layout: Option<&Path>) -> Result<()> {
    let workbook = open(input)?;
    let options = load_options(layout)?;
    let dashboard = Dashboard::render(&workbook, &options).context("Failed to render dashboard")?;

    let written = dashboard
        .export_csv(out_dir, &CsvWriteOptions::default())
        .with_context(|| format!("Failed to export to '{}'", out_dir.display()))?;
    for path in written {
        eprintln!("Wrote '{}'", path.display());
    }
    Ok(())
}
