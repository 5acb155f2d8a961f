//! glossgen - Glossary to HTML generator

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use glossgen::{SiteConfig, generate_site};

#[derive(Parser)]
#[command(name = "glossgen")]
#[command(version, about = "Generate cross-linked HTML pages from a glossary", long_about = None)]
#[command(after_help = "EXAMPLES:
    glossgen terms.txt site/                  Write site/index.html and one page per term
    glossgen                                  Prompt for the input file and output folder
    glossgen -c glossary.json terms.txt out   Use settings from a JSON config file")]
struct Cli {
    /// Glossary text file (prompted for when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Folder where the pages are written (prompted for when omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Characters that separate words in definitions
    #[arg(short, long, value_name = "CHARS")]
    separators: Option<String>,

    /// Suppress progress messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "glossgen=warn" } else { "glossgen=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = match &cli.config {
        Some(path) => SiteConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => SiteConfig::default(),
    };
    if let Some(separators) = cli.separators {
        config = config.with_separators(separators);
    }

    let input = match cli.input {
        Some(path) => path,
        None => prompt("Please input the file's name: ")?.into(),
    };
    let output = match cli.output {
        Some(path) => path,
        None => prompt(
            "Please input the name of the folder where all the output files will be saved: ",
        )?
        .into(),
    };

    let written = generate_site(&input, &output, &config).map_err(|e| e.to_string())?;
    if !cli.quiet {
        println!("Wrote {} pages to {}", written.len(), output.display());
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String, String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}").and_then(|()| stdout.flush()).map_err(|e| e.to_string())?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;

    let answer = line.trim();
    if answer.is_empty() {
        return Err("no path given".to_string());
    }
    Ok(answer.to_string())
}
