use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crawl_json_core::{read_result, ConfigurationLoader, CrawlResultWriter};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "crawl-json")]
#[command(about = "Load crawl configurations and write crawl results as JSON")]
#[command(version)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true, env = "CRAWL_JSON_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a configuration file and print it with all defaults applied
    Check {
        /// Path to the JSON configuration
        config: PathBuf,
    },

    /// Write a crawl result document through the result writer
    Write {
        /// Path to a JSON crawl result
        result: PathBuf,

        /// File to append the result to (defaults to stdout)
        #[arg(long)]
        to: Option<PathBuf>,

        /// Configuration whose `resultPath` is used when `--to` is absent
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    crawl_json_core::logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        tracing::error!("{:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Check { config } => {
            let config = ConfigurationLoader::new(config).load()?;
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &config.to_file())?;
            writeln!(stdout)?;
        }
        Commands::Write { result, to, config } => {
            let file = File::open(&result)
                .with_context(|| format!("Failed to open result file {}", result.display()))?;
            let crawl_result = read_result(&mut BufReader::new(file))?;
            let writer = CrawlResultWriter::new(&crawl_result);

            let destination = match (to, config) {
                (Some(path), _) => Some(path),
                (None, Some(config)) => {
                    let config = ConfigurationLoader::new(config).load()?;
                    Some(PathBuf::from(config.result_path())).filter(|p| !p.as_os_str().is_empty())
                }
                (None, None) => None,
            };

            match destination {
                Some(path) => writer.write_path(&path)?,
                None => {
                    let mut stdout = io::stdout().lock();
                    writer.write_to(&mut stdout)?;
                    writeln!(stdout)?;
                }
            }
        }
    }
    Ok(())
}
