//! Declutter - Command-line Interface
//! Author: kartik4091
//!
//! Two batch commands: `document` shrinks OpenDocument packages by removing
//! redundant markup, `audio` trims silence from wave files.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum};
use declutter::config::{Disposal, ProcessingConfig, TrimMode};
use declutter::pipeline::Pipeline;
use declutter::report::{ReportConfig, ReportData, ReportFormat, ReportFormatter, ReportGenerator};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisposalArg {
    /// Save next to the original with a suffix (default)
    KeepCopy,
    /// Move the original to the trash and save in its place
    MoveToTrash,
    /// Replace the original
    Overwrite,
}

impl From<DisposalArg> for Disposal {
    fn from(arg: DisposalArg) -> Self {
        match arg {
            DisposalArg::KeepCopy => Disposal::KeepCopy,
            DisposalArg::MoveToTrash => Disposal::MoveToTrash,
            DisposalArg::Overwrite => Disposal::Overwrite,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrimModeArg {
    /// Start, end and long pauses in between (default)
    All,
    /// Leading silence only
    Start,
    /// Trailing silence only
    End,
    /// Long pauses between sounds only
    Middle,
    /// Leading and trailing silence
    Trim,
}

impl From<TrimModeArg> for TrimMode {
    fn from(arg: TrimModeArg) -> Self {
        match arg {
            TrimModeArg::All => TrimMode::All,
            TrimModeArg::Start => TrimMode::Start,
            TrimModeArg::End => TrimMode::End,
            TrimModeArg::Middle => TrimMode::Middle,
            TrimModeArg::Trim => TrimMode::Trim,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain text report (default)
    Text,
    /// JSON report
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

fn main() {
    let matches = build_cli().get_matches();

    let log_level = if matches.get_flag("quiet") {
        LogLevel::Error
    } else {
        matches.get_one::<LogLevel>("verbose").copied().unwrap_or(LogLevel::Info)
    };
    init_logging(log_level);

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => match ProcessingConfig::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("❌ Failed to load config file: {}", e);
                process::exit(1);
            }
        },
        None => ProcessingConfig::default(),
    };

    let (command, sub) = match matches.subcommand() {
        Some((name, sub)) => (name, sub),
        None => {
            error!("❌ No command given");
            process::exit(1);
        }
    };

    apply_overrides(&mut config, sub);
    if let Err(e) = config.validate() {
        error!("❌ Invalid configuration: {}", e);
        process::exit(1);
    }
    debug!("Configuration: {:?}", config);

    let paths: Vec<PathBuf> = sub
        .get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let pipeline = Pipeline::new(config);
    let start_time = std::time::Instant::now();
    let result = match command {
        "document" => pipeline.run_documents(&paths),
        _ => pipeline.run_audio(&paths),
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    };
    info!("Finished in {:.2?}", start_time.elapsed());

    let format = match matches.get_one::<OutputFormat>("format").copied().unwrap_or(OutputFormat::Text) {
        OutputFormat::Text => ReportFormat::PlainText,
        OutputFormat::Json => ReportFormat::Json,
    };

    match matches.get_one::<PathBuf>("report") {
        Some(report_path) => {
            let report_config = ReportConfig {
                output_path: report_path.clone(),
                format,
            };
            if let Err(e) = ReportGenerator::generate(&report, &report_config) {
                error!("❌ Failed to generate report: {}", e);
            } else {
                info!("📋 Report generated: {}", report_path.display());
            }
        }
        None if !matches.get_flag("quiet") => print_report(&report, format),
        None => {}
    }
}

fn build_cli() -> Command {
    Command::new("declutter")
        .version(env!("CARGO_PKG_VERSION"))
        .author("kartik4091")
        .about("Removes redundant markup from OpenDocument files and silence from wave files")
        .subcommand_required(true)
        .arg_required_else_help(true)

        // Configuration
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .global(true)
            .help("Configuration file (JSON/YAML)"))

        // Reporting
        .arg(Arg::new("report")
            .long("report")
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .global(true)
            .help("Write the processing report to a file"))

        .arg(Arg::new("format")
            .long("format")
            .value_parser(value_parser!(OutputFormat))
            .global(true)
            .help("Report format"))

        // Logging
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .value_parser(value_parser!(LogLevel))
            .global(true)
            .help("Set logging verbosity"))

        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true)
            .conflicts_with("verbose")
            .help("Suppress all output except errors"))

        .subcommand(Command::new("document")
            .about("Clean up OpenDocument files")
            .arg(paths_arg("OpenDocument files or directories"))
            .arg(disposal_arg())
            .arg(recursive_arg())
            .arg(Arg::new("remove-fonts")
                .short('f')
                .long("remove-fonts")
                .action(ArgAction::SetTrue)
                .help("Remove font declarations and font references"))
            .arg(Arg::new("keep-language")
                .short('l')
                .long("keep-language")
                .action(ArgAction::SetTrue)
                .help("Keep language and country attributes")))

        .subcommand(Command::new("audio")
            .about("Remove silence from wave files")
            .arg(paths_arg("Wave files or directories"))
            .arg(disposal_arg())
            .arg(recursive_arg())
            .arg(Arg::new("mode")
                .short('m')
                .long("mode")
                .value_parser(value_parser!(TrimModeArg))
                .help("Where to remove silence"))
            .arg(Arg::new("tolerance")
                .short('t')
                .long("tolerance")
                .value_name("AMPLITUDE")
                .value_parser(value_parser!(f64))
                .help("Largest amplitude (0.0-1.0) treated as silence"))
            .arg(Arg::new("min-length")
                .short('n')
                .long("min-length")
                .value_name("FRAMES")
                .value_parser(value_parser!(usize))
                .help("Shortest pause between sounds that gets removed")))
}

fn paths_arg(help: &'static str) -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help(help)
}

fn disposal_arg() -> Arg {
    Arg::new("disposal")
        .short('d')
        .long("disposal")
        .value_parser(value_parser!(DisposalArg))
        .help("What to do with the original file")
}

fn recursive_arg() -> Arg {
    Arg::new("recursive")
        .short('r')
        .long("recursive")
        .action(ArgAction::SetTrue)
        .help("Search directories recursively")
}

/// Command-line flags win over the config file; absent flags leave it alone
fn apply_overrides(config: &mut ProcessingConfig, sub: &ArgMatches) {
    if let Some(disposal) = sub.get_one::<DisposalArg>("disposal") {
        config.disposal = (*disposal).into();
    }
    if sub.get_flag("recursive") {
        config.recursive = true;
    }

    // document only
    if sub.try_get_one::<bool>("remove-fonts").ok().flatten() == Some(&true) {
        config.document.remove_fonts = true;
    }
    if sub.try_get_one::<bool>("keep-language").ok().flatten() == Some(&true) {
        config.document.remove_language = false;
    }

    // audio only
    if let Some(mode) = sub.try_get_one::<TrimModeArg>("mode").ok().flatten() {
        config.silence.mode = (*mode).into();
    }
    if let Some(tolerance) = sub.try_get_one::<f64>("tolerance").ok().flatten() {
        config.silence.tolerance = *tolerance;
    }
    if let Some(min_length) = sub.try_get_one::<usize>("min-length").ok().flatten() {
        config.silence.min_length = *min_length;
    }
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("declutter={}", filter_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn print_report(report: &ReportData, format: ReportFormat) {
    match ReportFormatter::format(report, format) {
        Ok(text) => println!("{}", text),
        Err(e) => error!("❌ Failed to format report: {}", e),
    }
}
