use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pathpulse", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the reveal and pulse schedule for a path document.
    Schedule(ScheduleArgs),
    /// Print the easing-inversion table for a timing function.
    Table(TableArgs),
    /// Print the path as SVG path data.
    SvgPath(SvgPathArgs),
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    /// Input path document (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TableArgs {
    /// Timing function to invert.
    #[arg(long, value_enum, default_value_t = TimingChoice::Ease)]
    timing: TimingChoice,
}

#[derive(Parser, Debug)]
struct SvgPathArgs {
    /// Input path document (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TimingChoice {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl From<TimingChoice> for pathpulse::TimingFunction {
    fn from(c: TimingChoice) -> Self {
        match c {
            TimingChoice::Linear => Self::Linear,
            TimingChoice::Ease => Self::Ease,
            TimingChoice::EaseIn => Self::EaseIn,
            TimingChoice::EaseOut => Self::EaseOut,
            TimingChoice::EaseInOut => Self::EaseInOut,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Schedule(args) => cmd_schedule(args),
        Command::Table(args) => cmd_table(args),
        Command::SvgPath(args) => cmd_svg_path(args),
    }
}

fn read_path_json(path: &Path) -> anyhow::Result<pathpulse::AnimatedPath> {
    let f = File::open(path).with_context(|| format!("open path document '{}'", path.display()))?;
    let r = BufReader::new(f);
    let doc: pathpulse::AnimatedPath =
        serde_json::from_reader(r).with_context(|| "parse path document JSON")?;
    Ok(doc)
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let doc = read_path_json(&args.in_path)?;
    let schedule = doc.schedule()?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(&out)
                .with_context(|| format!("create schedule '{}'", out.display()))?;
            serde_json::to_writer_pretty(f, &schedule)
                .with_context(|| format!("write schedule '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&schedule)?),
    }
    Ok(())
}

fn cmd_table(args: TableArgs) -> anyhow::Result<()> {
    let table = pathpulse::EasingTable::build(args.timing.into());
    let rows: Vec<[f64; 2]> = table.entries().map(|(p, t)| [p, t]).collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    if table.filled_gaps() > 0 {
        eprintln!("{} bucket(s) filled from neighbours", table.filled_gaps());
    }
    Ok(())
}

fn cmd_svg_path(args: SvgPathArgs) -> anyhow::Result<()> {
    let doc = read_path_json(&args.in_path)?;
    doc.validate()?;
    let analyzed = pathpulse::analyze_path(&doc.points)?;
    println!("{}", analyzed.to_bez_path().to_svg());
    Ok(())
}
