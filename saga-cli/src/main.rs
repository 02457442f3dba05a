//! Command-line interface for saga
//! This binary converts an episode outline into a JSON document plus the character, location
//! and song lists derived from it.
//!
//! Usage:
//!   saga `<path>`                        - Write every artifact to `<path's directory>/Output`
//!   saga                                 - Same, asking for the path interactively
//!   saga `<path>` --print `<artifact>`   - Print a single artifact to stdout instead

mod outputs;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{info, warn};
use saga_config::{Loader, SagaConfig};
use saga_parser::outline::{Inventory, OutlineLoader, OutlineParser};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

fn main() {
    let matches = Command::new("saga")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert an episode outline into JSON and character, location and song lists")
        .arg(
            Arg::new("path")
                .help("Path to the outline txt file (prompted for when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .help("Directory for the written files (default: <input dir>/Output)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .help("Base name of the written files (e.g. 'Casual Roleplay')"),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .short('p')
                .help("Print one artifact to stdout instead of writing files")
                .value_parser(outputs::AVAILABLE_ARTIFACTS),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log dropped lines and written files")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    let path = match matches.get_one::<String>("path") {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };
    let path = clean_path(&path);

    let loader = OutlineLoader::from_path(&path)?;
    let parser = OutlineParser::with_options(config.parser.to_options());
    let (document, report) = loader.parse_with(&parser);
    for diagnostic in report.warnings() {
        warn!("{}: {}", path.display(), diagnostic);
    }
    let inventory = Inventory::collect(&document);

    if let Some(name) = matches.get_one::<String>("print") {
        let artifact = outputs::Artifact::from_name(name)?;
        let rendered = outputs::render(artifact, &document, &inventory, config.output.json_indent)?;
        print!("{}", rendered);
        return Ok(());
    }

    let output_dir = match matches.get_one::<String>("output-dir") {
        Some(dir) => PathBuf::from(dir),
        None => default_output_dir(&path, &config),
    };
    if !output_dir.is_dir() {
        std::fs::create_dir_all(&output_dir).with_context(|| {
            format!("could not create output directory {}", output_dir.display())
        })?;
        println!("Directory created: {}", output_dir.display());
    }

    for written in outputs::write_all(&output_dir, &config.output, &document, &inventory)? {
        info!("wrote {}", written.display());
        let file_name = written
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("Parsed outline has been saved to {}.", file_name);
    }

    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<SagaConfig> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(name) = matches.get_one::<String>("name") {
        loader = loader.set_override("output.base_name", name.as_str())?;
    }
    loader.build().context("failed to load configuration")
}

fn prompt_for_path() -> Result<String> {
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "Welcome! You will need to enter in the location of your file."
    )?;
    write!(stdout, "Enter in the ABSOLUTE file path of the base txt file: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read the file path")?;
    Ok(line)
}

/// Drop the quotes file managers add around copied paths.
fn clean_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.replace('"', "").trim())
}

fn default_output_dir(input: &Path, config: &SagaConfig) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(&config.output.directory)
}
