//! Command-line access to the fileutil helpers.
//!
//! Results go to stdout, logs to stderr. Setup failures (no home directory, no working
//! directory, no temp directory) are fatal and exit the process.

use std::path::Path;

use clap::Parser;
use fileutil::fs::{home_dir, resolve_path, temp_dir, working_dir};
use fileutil::log::log_err;
use fileutil::yaml::{ensure_yaml_extension, is_yaml_file};
use fileutil::{TimeCodec, file_exists, open_or_create_file, trunc_string};
use jiff::Zoned;
use tracing::{debug, error, info};

use crate::args::{Args, Command};

mod args;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Time(#[from] fileutil::TimeError),
}

fn main() {
    let args = Args::parse();

    enable_logging(&args);
    debug!("command line: {:?}", args);

    let codec = args.time_codec().unwrap_or_else(|e| {
        error!("Unknown time zone '{}': {e}", args.timezone.as_deref().unwrap_or(""));
        std::process::exit(-1);
    });

    match &args.command {
        Command::FormatTime { time } => exit_on_error("format time", format_time(&codec, time)),
        Command::ParseTime { time } => exit_on_error("parse time", parse_time(&codec, time)),
        Command::Now => println!("{}", codec.format(Some(&Zoned::now()))),
        Command::Exists { path } => exists(path),
        Command::Touch { path } => exit_on_error("touch", touch(path)),
        Command::Tempdir { prefix } => {
            let dir = temp_dir(prefix).unwrap_or_else(|e| fatal(e));
            println!("{}", dir.display());
        }
        Command::Home => println!("{}", home_dir().unwrap_or_else(|e| fatal(e)).display()),
        Command::Cwd => println!("{}", working_dir().unwrap_or_else(|e| fatal(e)).display()),
        Command::Resolve { path } => {
            println!("{}", resolve_path(path).unwrap_or_else(|e| fatal(e)).display())
        }
        Command::Trunc { text, max } => println!("{}", trunc_string(text, *max)),
        Command::YamlName { name } => yaml_name(name),
    }
}

fn enable_logging(args: &Args) {
    let mut builder = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr);

    if args.quiet {
        builder = builder.with_max_level(tracing::Level::ERROR);
    } else {
        match args.verbose {
            2.. => builder = builder.with_max_level(tracing::Level::TRACE),
            1 => builder = builder.with_max_level(tracing::Level::DEBUG),
            _ => builder = builder.with_max_level(tracing::Level::INFO),
        }
    }

    builder.init();
}

/// Logs a setup failure and exits.
fn fatal(err: fileutil::fs::FsError) -> ! {
    error!("{err}");
    std::process::exit(-1);
}

fn exit_on_error(action: &str, result: Result<(), CliError>) {
    if let Err(e) = result {
        log_err(action, &e);
        std::process::exit(1);
    }
}

fn format_time(codec: &TimeCodec, input: &str) -> Result<(), CliError> {
    let time = codec.parse(input)?;
    println!("{}", codec.format(time.as_ref()));
    Ok(())
}

fn parse_time(codec: &TimeCodec, input: &str) -> Result<(), CliError> {
    match codec.parse(input)? {
        None => info!("'{input}' is the empty time"),
        Some(zdt) => {
            println!("civil:     {}", zdt.datetime());
            println!("offset:    {}", zdt.offset());
            println!("zone:      {}", zdt.time_zone().iana_name().unwrap_or("-"));
            println!("canonical: {}", codec.format(Some(&zdt)));
        }
    }
    Ok(())
}

fn exists(path: &Path) {
    if file_exists(path) {
        println!("{}", path.display());
    } else {
        info!("nothing exists at {}", path.display());
        std::process::exit(1);
    }
}

fn touch(path: &Path) -> Result<(), CliError> {
    let file = open_or_create_file(path)?;
    if let Err(e) = file.sync_all() {
        log_err(&format!("sync {}", path.display()), &e);
    }
    println!("{}", path.display());
    Ok(())
}

fn yaml_name(name: &str) {
    let normalized = ensure_yaml_extension(name);
    if !is_yaml_file(&normalized) {
        info!("'{normalized}' does not have a YAML extension");
    }
    println!("{normalized}");
}
