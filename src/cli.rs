// src/cli.rs
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;

use crate::{
    config::{
        consts::CONFIG_FILE,
        options::{AppOptions, ExportFormat, PageKind},
    },
    core::dates,
    file, log,
    progress::ConsoleProgress,
    runner::{self, RunSummary, Source},
};

#[derive(Parser, Debug)]
#[command(name = "agenda_watch", version)]
#[command(about = "Scrape a municipal agenda center and flag late agenda postings")]
pub struct Cli {
    /// JSON config file; missing file means defaults
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Log file (default: <store_dir>/agenda_watch.log)
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and extract the agenda listing
    Scrape(ScrapeArgs),
    /// Evaluate an extracted agenda table for late postings
    Evaluate(EvaluateArgs),
    /// Scrape, then evaluate the fresh records
    Run {
        #[command(flatten)]
        scrape: ScrapeArgs,
        #[command(flatten)]
        rules: RuleArgs,
        /// Alerts table output
        #[arg(long)]
        alerts: Option<String>,
        /// HTML report output
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ScrapeArgs {
    /// Listing page URL (overrides config)
    #[arg(long)]
    url: Option<String>,
    /// Read the page from a saved file instead of fetching it
    #[arg(long, conflicts_with = "url")]
    html: Option<PathBuf>,
    /// Output file or directory
    #[arg(short, long)]
    out: Option<String>,
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Omit the header row
    #[arg(long)]
    no_headers: bool,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Agenda table to evaluate (default: last scrape's cache)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output file or directory
    #[arg(short, long)]
    out: Option<String>,
    /// HTML report output
    #[arg(long)]
    report: Option<PathBuf>,
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    #[command(flatten)]
    rules: RuleArgs,
}

#[derive(Args, Debug)]
struct RuleArgs {
    /// Postings later than this many hours relative to the assumed start are flagged
    #[arg(long, allow_negative_numbers = true)]
    threshold_hours: Option<f64>,
    /// Ignore meetings older than this many days
    #[arg(long)]
    window_days: Option<i64>,
    /// Assumed meeting start, HH:MM
    #[arg(long, value_parser = parse_start)]
    start: Option<NaiveTime>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

fn parse_start(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

pub fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();

    let mut opts = AppOptions::load(&cli.config)
        .wrap_err_with(|| format!("loading {}", cli.config.display()))?;
    let log_path = cli.log.clone().unwrap_or_else(|| log::default_log_path(&opts.store_dir));
    log::init(&log_path).wrap_err("setting up the log file")?;

    let mut progress = ConsoleProgress::default();
    let now = dates::local_now();

    let summary = match cli.command {
        Command::Scrape(args) => {
            let (source, out) = apply_scrape_args(&mut opts, &args)?;
            runner::run_scrape(&opts, &source, Some(out.as_path()), Some(&mut progress))?
        }
        Command::Evaluate(args) => {
            apply_rule_args(&mut opts, &args.rules);
            apply_format(&mut opts, args.format, args.out.as_deref());
            let out = out_path(&opts, PageKind::Alerts, args.out.as_deref())?;
            let report = args.report.unwrap_or_else(|| opts.report.path.clone());
            runner::run_evaluate(
                &opts,
                args.input.as_deref(),
                Some(out.as_path()),
                Some(report.as_path()),
                now,
                Some(&mut progress),
            )?
        }
        Command::Run { scrape, rules, alerts, report } => {
            let (source, agendas_out) = apply_scrape_args(&mut opts, &scrape)?;
            apply_rule_args(&mut opts, &rules);
            let alerts_out = out_path(&opts, PageKind::Alerts, alerts.as_deref())?;
            let report = report.unwrap_or_else(|| opts.report.path.clone());
            runner::run_all(
                &opts,
                &source,
                Some(agendas_out.as_path()),
                Some(alerts_out.as_path()),
                Some(report.as_path()),
                now,
                Some(&mut progress),
            )?
        }
    };

    print_summary(&summary);
    Ok(())
}

fn apply_scrape_args(opts: &mut AppOptions, args: &ScrapeArgs) -> color_eyre::Result<(Source, PathBuf)> {
    if let Some(url) = &args.url {
        opts.scrape.url = url.clone();
    }
    if args.no_headers {
        opts.export.include_headers = false;
    }
    apply_format(opts, args.format, args.out.as_deref());

    let source = match &args.html {
        Some(path) => Source::File(path.clone()),
        None => Source::Remote,
    };
    let out = out_path(opts, PageKind::Agendas, args.out.as_deref())?;
    Ok((source, out))
}

fn apply_rule_args(opts: &mut AppOptions, rules: &RuleArgs) {
    let eval = &mut opts.evaluate;
    if let Some(h) = rules.threshold_hours { eval.lead_threshold_hours = h; }
    if let Some(d) = rules.window_days { eval.trailing_window_days = d; }
    if let Some(t) = rules.start { eval.assumed_start = t; }
}

/// `--format` wins; otherwise a `.tsv` output name selects TSV.
fn apply_format(opts: &mut AppOptions, format: Option<FormatArg>, out: Option<&str>) {
    if let Some(f) = format {
        opts.export.format = f.into();
    } else if let Some(o) = out {
        opts.export.format = ExportFormat::from_path(Path::new(o));
    }
}

fn out_path(opts: &AppOptions, kind: PageKind, user_o: Option<&str>) -> color_eyre::Result<PathBuf> {
    let default = opts.export.default_path_for(kind);
    Ok(file::resolve_single_out_path(user_o.unwrap_or(""), &default)?)
}

fn print_summary(summary: &RunSummary) {
    println!("{} row(s)", summary.data.row_count());
    for p in &summary.files_written {
        println!("wrote {}", p.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn evaluate_flags_parse() {
        let cli = Cli::try_parse_from([
            "agenda_watch", "evaluate", "-i", "AgendaCenter.csv",
            "--threshold-hours", "-48", "--window-days", "14", "--start", "18:30",
        ])
        .unwrap();
        let Command::Evaluate(args) = cli.command else { panic!("expected evaluate") };
        let mut opts = AppOptions::default();
        apply_rule_args(&mut opts, &args.rules);
        assert_eq!(opts.evaluate.lead_threshold_hours, -48.0);
        assert_eq!(opts.evaluate.trailing_window_days, 14);
        assert_eq!(opts.evaluate.assumed_start, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
    }

    #[test]
    fn tsv_output_name_selects_tsv() {
        let mut opts = AppOptions::default();
        apply_format(&mut opts, None, Some("out/agendas.tsv"));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        apply_format(&mut opts, Some(FormatArg::Csv), Some("out/agendas.tsv"));
        assert_eq!(opts.export.format, ExportFormat::Csv);
    }
}
