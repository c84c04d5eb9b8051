use anyhow::Result;
use chartcfg::chart::{ChartKind, ChartResolver, ColorMode, ResolveOptions};
use chartcfg::{TableOptions, storage, table};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chartcfg",
    version,
    about = "Build chart renderer configurations and table views from chart datasets"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a dataset into a renderer configuration (JSON).
    Render(RenderArgs),
    /// Print or save the table view of a dataset.
    Table(TableArgs),
    /// List accepted chart-kind tags.
    Kinds,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Chart kind tag (e.g., barchart, multibarlinechart, stackedpercentbarchart)
    #[arg(short, long)]
    kind: String,
    /// Dataset JSON file.
    #[arg(short, long)]
    input: PathBuf,
    /// Strip legend, tooltip, data labels and axis chrome.
    #[arg(long, default_value_t = false)]
    hide_meta: bool,
    /// Write the configuration to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Locale used when the dataset has no numeric_format (default it-CH).
    #[arg(long)]
    locale: Option<String>,
    /// Sample fallback colors randomly instead of cycling the palette.
    #[arg(long, default_value_t = false)]
    random_colors: bool,
    /// Seed for random fallback colors (implies --random-colors).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Dataset JSON file.
    #[arg(short, long)]
    input: PathBuf,
    /// Header of the category column.
    #[arg(long, default_value = "Label")]
    category_label: String,
    /// Save to file (.csv or .json); prints tab-separated rows when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Table(args) => cmd_table(args),
        Command::Kinds => {
            for k in ChartKind::ALL {
                println!("{}\t{}", k.tag(), k.alias());
            }
            Ok(())
        }
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let dataset = storage::load_dataset(&args.input)?;

    let mut opts = ResolveOptions::default();
    if let Some(locale) = args.locale {
        opts.default_locale = locale;
    }
    if args.random_colors || args.seed.is_some() {
        opts.color_mode = ColorMode::Sampled { seed: args.seed };
    }
    let resolver = ChartResolver::new(opts);

    match resolver.resolve(&args.kind, &dataset) {
        Ok(config) => {
            let config = if args.hide_meta {
                config.without_chrome()
            } else {
                config
            };
            match args.out.as_ref() {
                Some(path) => {
                    storage::save_configuration_json(&config, path)?;
                    eprintln!("Wrote configuration to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&config)?),
            }
            Ok(())
        }
        Err(e) => {
            let marker = e.marker();
            match args.out.as_ref() {
                Some(path) => storage::save_marker_json(&marker, path)?,
                None => println!("{}", serde_json::to_string_pretty(&marker)?),
            }
            Err(e.into())
        }
    }
}

fn cmd_table(args: TableArgs) -> Result<()> {
    let dataset = storage::load_dataset(&args.input)?;
    let opts = TableOptions {
        category_label: args.category_label,
    };
    let view = table::to_table_with(&dataset, &opts)?;

    if let Some(path) = args.out.as_ref() {
        let fmt = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv")
            .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_table_csv(&view, path)?,
            "json" => storage::save_table_json(&view, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", view.rows.len(), path.display());
    } else {
        println!("{}", view.header.join("\t"));
        for row in &view.rows {
            println!("{}", row.join("\t"));
        }
    }
    Ok(())
}
