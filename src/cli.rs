// src/cli.rs
//! Headless front end: print the report, list sections, or export them.

use std::path::PathBuf;

use clap::{ Args, Parser, Subcommand, ValueEnum };
use color_eyre::eyre::{ Result, WrapErr, eyre };

use crate::config::options::{ DataOptions, ExportFormat, ExportOptions, ExportType };
use crate::data::load::load_tournament;
use crate::file::export_sections;
use crate::report::{ Group, Report, Section };

/// T20 World Cup 2024 metrics from the terminal.
#[derive(Parser, Debug)]
#[command(name = "t20_insights", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Directory holding matches.csv and deliveries.csv
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Match table (overrides --data-dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub matches: Option<PathBuf>,

    /// Delivery table (overrides --data-dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub deliveries: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print sections as text
    Report(Selection),

    /// List section ids and titles
    Sections,

    /// Write sections to CSV / TSV / JSON
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct Selection {
    /// Section id(s), e.g. 2.3 (repeatable)
    #[arg(short, long = "section", value_name = "ID")]
    pub sections: Vec<String>,

    /// Only sections of this group
    #[arg(short, long, value_enum)]
    pub group: Option<GroupArg>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: Selection,

    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// One file per section into the output directory
    #[arg(long)]
    pub per_metric: bool,

    /// Omit table header rows
    #[arg(long)]
    pub no_headers: bool,

    /// Output file (single) or directory (per-metric)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GroupArg {
    Matches,
    Players,
    Batting,
    Bowling,
}

impl From<GroupArg> for Group {
    fn from(g: GroupArg) -> Self {
        match g {
            GroupArg::Matches => Group::Matches,
            GroupArg::Players => Group::Players,
            GroupArg::Batting => Group::Batting,
            GroupArg::Bowling => Group::Bowling,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    crate::log::init_stderr(cli.verbose);

    let data = data_options(&cli);
    let tournament = load_tournament(&data)
        .wrap_err_with(|| format!("loading {} / {}", data.matches_path.display(), data.deliveries_path.display()))?;
    let report = Report::build(&tournament);

    match &cli.command {
        Command::Report(sel) => {
            let sections = select(&report, sel)?;
            if sel.sections.is_empty() && sel.group.is_none() {
                print!("{}", report.to_text());
            } else {
                for s in sections {
                    println!("{}", s.to_text());
                }
            }
        }
        Command::Sections => {
            for group in Group::ALL {
                println!("{}", group.heading());
                for s in report.group(group) {
                    println!("  {:<4} {}", s.id, s.title);
                }
            }
        }
        Command::Export(args) => {
            let sections = select(&report, &args.selection)?;
            let export = export_options(args);
            let written = export_sections(&export, &sections)?;
            for path in written {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

fn data_options(cli: &Cli) -> DataOptions {
    let mut data = match &cli.data_dir {
        Some(dir) => DataOptions::in_dir(dir),
        None => DataOptions::default(),
    };
    if let Some(p) = &cli.matches {
        data.matches_path = p.clone();
    }
    if let Some(p) = &cli.deliveries {
        data.deliveries_path = p.clone();
    }
    data
}

fn export_options(args: &ExportArgs) -> ExportOptions {
    let mut export = ExportOptions::default();
    export.format = args.format.into();
    export.export_type = if args.per_metric { ExportType::PerMetric } else { ExportType::SingleFile };
    export.include_headers = !args.no_headers;
    if let Some(out) = &args.out {
        export.set_path(out);
    }
    export
}

/// Sections in report order. Explicit ids must exist.
fn select<'a>(report: &'a Report, sel: &Selection) -> Result<Vec<&'a Section>> {
    if let Some(id) = sel.sections.iter().find(|id| report.section(id).is_none()) {
        return Err(eyre!("unknown section id: {id} (see `sections`)"));
    }
    let group = sel.group.map(Group::from);
    Ok(report
        .sections
        .iter()
        .filter(|s| sel.sections.is_empty() || sel.sections.iter().any(|id| id == s.id))
        .filter(|s| group.is_none_or(|g| g == s.group))
        .collect())
}
