//! Command-line interface for the Pitaval converter
//!
//! Usage:
//!   pitaval --indir=`<dir>` --outdir=`<dir>` [--template=`<file>`] [-v]   - Convert a directory
//!   pitaval --man                                                    - Print the manual

mod manual;

use clap::{Arg, ArgAction, ArgMatches, Command};
use pitaval_config::{Loader, PitavalConfig};
use pitaval_tei::{
    convert_directory, Assembler, BatchReport, BatchSpec, ConvertError, FormatterRegistry,
    Template, AUTO,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("pitaval")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert \"Der neue Pitaval\" transcriptions to TEI-P5")
        .arg(
            Arg::new("indir")
                .long("indir")
                .value_name("PATH")
                .help("Directory with the source .txt files")
                .required_unless_present("man"),
        )
        .arg(
            Arg::new("outdir")
                .long("outdir")
                .value_name("PATH")
                .help("Directory for the output documents (created if absent)")
                .required_unless_present("man"),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .value_name("PATH")
                .help("TEI template (default: the built-in template)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("TOML configuration layered over the defaults"),
        )
        .arg(
            Arg::new("formatter")
                .long("formatter")
                .value_name("NAME")
                .help(formatter_help()),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .value_name("KIND")
                .value_parser(["tei", "json"])
                .help("Write TEI documents or edition records as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Report progress on stderr (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("man")
                .long("man")
                .help("Print the full manual")
                .action(ArgAction::SetTrue),
        )
}

/// One line per registered formatter, after `auto`.
fn formatter_help() -> String {
    let registry = FormatterRegistry::with_defaults();
    let mut help = format!(
        "Output formatter\n  {}: xmllint when installed, else passthrough",
        AUTO
    );
    for name in registry.list_formatters() {
        if let Ok(formatter) = registry.get(&name) {
            help.push_str(&format!("\n  {}: {}", name, formatter.description()));
        }
    }
    help
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    if matches.get_flag("man") {
        print!("{}", manual::MANUAL);
        return ExitCode::SUCCESS;
    }

    init_tracing(matches.get_count("verbose"));

    match run(&matches) {
        Ok(report) => {
            tracing::info!(files = report.written.len(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            if let Some(document) = err.unformatted() {
                eprintln!("unformatted document follows:");
                eprint!("{}", document);
            }
            ExitCode::from(1)
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<BatchReport, ConvertError> {
    let config = load_config(matches)?;

    let indir = required(matches, "indir")?;
    let outdir = required(matches, "outdir")?;

    let template = match &config.template.path {
        Some(path) => Template::from_path(path).map_err(config_error)?,
        None => Template::embedded(),
    };
    tracing::debug!(template = template.origin(), "using template");
    let assembler = Assembler::new(template, &config.template.targets).map_err(config_error)?;

    let registry = FormatterRegistry::with_xmllint(config.xmllint());
    let name = config.formatter.name.as_str();
    if name != AUTO && !registry.has(name) {
        return Err(ConvertError::Config(format!(
            "formatter '{}' not found (available: {}, {})",
            name,
            AUTO,
            registry.list_formatters().join(", ")
        )));
    }
    let formatter = registry.resolve(name).map_err(config_error)?;

    let spec = BatchSpec::new(indir, outdir, &assembler, formatter)
        .with_options(config.convert_options());
    convert_directory(&spec)
}

/// Defaults, then `--config`, then individual flags.
fn load_config(matches: &ArgMatches) -> Result<PitavalConfig, ConvertError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let overrides = [
        ("template", "template.path"),
        ("formatter", "formatter.name"),
        ("emit", "output.emit"),
    ];
    for (arg, key) in overrides {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader
                .set_override(key, value.as_str())
                .map_err(|e| ConvertError::Config(e.to_string()))?;
        }
    }

    loader
        .build()
        .map_err(|e| ConvertError::Config(e.to_string()))
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String, ConvertError> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| ConvertError::Config(format!("--{} is required", name)))
}

fn config_error(err: pitaval_tei::TeiError) -> ConvertError {
    ConvertError::Config(err.to_string())
}
