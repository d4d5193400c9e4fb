use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "scrollstage", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Increase log verbosity (repeatable).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scroll trace through a scene and write per-frame reports as JSON.
    Replay(ReplayArgs),
    /// Print carousel geometry for a row of equal items.
    Geometry(GeometryArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll trace JSON.
    #[arg(long)]
    trace: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GeometryArgs {
    /// Width of one item in pixels.
    #[arg(long)]
    item_width: f64,

    /// Number of items.
    #[arg(long)]
    item_count: usize,

    /// Gap between items in pixels.
    #[arg(long, default_value_t = 0.0)]
    gap: f64,

    /// Container width in pixels.
    #[arg(long)]
    viewport_width: f64,

    /// Viewport height in pixels.
    #[arg(long)]
    viewport_height: f64,

    /// Buffer distance as a fraction of viewport height.
    #[arg(long, default_value_t = scrollstage::DEFAULT_BUFFER_VIEWPORT_FRACTION)]
    buffer_fraction: f64,

    /// Slack as a fraction of one item's width.
    #[arg(long, default_value_t = scrollstage::DEFAULT_SLACK_ITEM_FRACTION)]
    slack_fraction: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Geometry(args) => cmd_geometry(args),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON '{}'", path.display()))
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let scene: scrollstage::SceneDef = read_json(&args.in_path, "scene")?;
    let trace: scrollstage::ScrollTrace = read_json(&args.trace, "trace")?;

    let session = scrollstage::ReplaySession::new(&scene)?;
    let report = session.run(&trace)?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &report).context("write report")?;
            w.flush().context("flush report")?;
            eprintln!("wrote {} frames to {}", report.frames.len(), out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &report).context("write report")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_geometry(args: GeometryArgs) -> anyhow::Result<()> {
    let viewport = scrollstage::Viewport::new(args.viewport_width, args.viewport_height)?;
    let config = scrollstage::CarouselConfig {
        buffer_viewport_fraction: args.buffer_fraction,
        slack_item_fraction: args.slack_fraction,
    };
    config.validate()?;

    let measurements = scrollstage::CarouselMeasurements::from_items(
        args.item_count,
        args.item_width,
        args.gap,
        viewport,
    );
    let geometry = scrollstage::CarouselGeometry::measure(&measurements, &config);

    let out = serde_json::json!({
        "geometry": geometry,
        "buffer_ratio": geometry.buffer_ratio(),
        "pinned_scroll_distance": geometry.pinned_scroll_distance(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
