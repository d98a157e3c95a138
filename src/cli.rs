use crate::{
    constants::DEFAULT_LOG_FILENAME,
    core::join_index::JoinMode,
    utils::util::Result,
};
use anyhow::anyhow;
use chrono::Datelike;
use clap::{ArgAction, Args, Parser};
use env_logger::{fmt::Color, Target, WriteStyle};
use log::{Level, LevelFilter};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

pub const FULL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name="clinvar_vcf_parser",
          author="Tom Mokveld <tmokveld@pacificbiosciences.com>",
          version=FULL_VERSION,
          about="Annotate a ClinVar VCF with per-submission fields from the ClinVar XML release",
          long_about = None,
          after_help = format!("Copyright (C) 2004-{}     Pacific Biosciences of California, Inc.
          This program comes with ABSOLUTELY NO WARRANTY; it is intended for
          Research Use Only and not for use in diagnostic procedures.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{author}{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          arg_required_else_help(true),
          )]
pub struct Cli {
    #[command(flatten)]
    pub args: AnnotateArgs,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
    )]
    pub verbosity: u8,
}

#[derive(Args, Debug, Clone)]
pub struct AnnotateArgs {
    /// ClinVar XML file (can be .gz)
    #[arg(
        short = 'x',
        long = "xml",
        value_name = "XML",
        help_heading = "Required",
        value_parser = check_file_exists
    )]
    pub xml: PathBuf,

    /// ClinVar input VCF file (can be .gz)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "VCF",
        help_heading = "Required",
        value_parser = check_file_exists
    )]
    pub input: PathBuf,

    /// Output VCF file (uncompressed)
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        help_heading = "Required",
        value_parser = check_prefix_path
    )]
    pub out: PathBuf,

    /// Log file [default: clinvar_vcf_parser.log next to the output]
    #[arg(short = 'l', long = "log", value_name = "LOG", value_parser = check_prefix_path)]
    pub log: Option<PathBuf>,

    /// Assume the old ClinVar VCF format: RCV IDs are in the INFO field CLNACC
    #[arg(long = "pre-may-2017")]
    pub pre_may_2017: bool,
}

impl AnnotateArgs {
    pub fn join_mode(&self) -> JoinMode {
        JoinMode::from_pre_may_2017(self.pre_may_2017)
    }

    pub fn log_path(&self) -> PathBuf {
        match &self.log {
            Some(log) => log.clone(),
            None => self
                .out
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_LOG_FILENAME),
        }
    }
}

/// Base log level: `Info` when a log file is requested explicitly, `Warn`
/// otherwise. Each `-v` raises it one step.
pub fn log_level(args: &Cli) -> LevelFilter {
    match (args.verbosity, args.args.log.is_some()) {
        (0, true) => LevelFilter::Info,
        (0, false) => LevelFilter::Warn,
        (1, _) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Sends all log output to the run's log file.
pub fn init_logging(args: &Cli) -> Result<PathBuf> {
    let log_path = args.args.log_path();
    let log_file = File::create(&log_path).map_err(|error| {
        crate::clinvar_error!("Failed to create log file {}: {error}", log_path.display())
    })?;

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.module_path().unwrap_or("unknown_module"),
                record.args()
            )
        })
        .filter_level(log_level(args))
        .target(Target::Pipe(Box::new(log_file)))
        .write_style(WriteStyle::Never)
        .try_init()?;
    Ok(log_path)
}

/// Checks if the provided file path exists.
fn check_file_exists(s: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        return Err(anyhow!("File does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

/// Checks that the directory a file will be created in exists.
fn check_prefix_path(s: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(anyhow!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}
