use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use pronounce_core::config::{PronounceConfig, DEFAULT_CONFIG_FILE};
use pronounce_core::persistence::{fill_file, read_data_file};
use pronounce_core::validation::validate;
use pronounce_core::{PronounceError, PronunciationGenerator, VocabularyEntry};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Pronunciation hints for Latin-script Kannada vocabulary.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML config file. Missing file means defaults.
    #[arg(global = true, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(global = true, long, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pronunciation of each word, or of each stdin line.
    Say { words: Vec<String> },
    /// Add pronunciations to every entry of the data file that lacks one.
    Fill {
        file: Option<PathBuf>,
        /// Report what would change without writing.
        #[arg(long)]
        dry_run: bool,
    },
    /// Run the data-quality checks over the data file.
    Check { file: Option<PathBuf> },
    /// Print the data file's entries as JSON.
    Export { file: Option<PathBuf> },
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = PronounceConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    let generator = PronunciationGenerator::with_options(config.generator_options());

    let data_path = |file: Option<PathBuf>| -> Result<PathBuf> {
        Ok(file.or_else(|| config.data_file.clone()).ok_or(PronounceError::MissingDataFile)?)
    };

    match cli.command {
        Command::Say { words } if words.is_empty() => say_interactive(&generator)?,
        Command::Say { words } => {
            for word in &words {
                println!("{} => {}", word, generator.generate(word));
            }
        }
        Command::Fill { file, dry_run } => {
            let path = data_path(file)?;
            let report = fill_file(&path, &generator, dry_run)
                .with_context(|| format!("filling {}", path.display()))?;

            let verb = if dry_run { "Would update" } else { "Updated" };
            println!("{} {} {} of {} vocabulary entries", "✓".green(), verb, report.updated, report.entries);
            if report.updated > 0 && !dry_run {
                println!("{} Please review the generated pronunciations and adjust as needed", "✓".green());
                println!("\nNext steps:");
                println!("1. Review the pronunciations in {}", path.display());
                println!("2. Run: kn_pronounce check {}", path.display());
                println!("3. Manually adjust any pronunciations that seem incorrect");
            }
        }
        Command::Check { file } => {
            let path = data_path(file)?;
            let data_file = read_data_file(&path).with_context(|| format!("reading {}", path.display()))?;
            let issues = validate(data_file.entries(), &config.validation_rules());
            if issues.is_empty() {
                println!("{} {} entries look good", "✓".green(), data_file.entries().count());
            } else {
                for issue in &issues {
                    println!("{} {}", "✗".red(), issue);
                }
                println!("\n{} issue(s) found", issues.len());
                return Ok(1);
            }
        }
        Command::Export { file } => {
            let path = data_path(file)?;
            let data_file = read_data_file(&path).with_context(|| format!("reading {}", path.display()))?;
            let entries: Vec<&VocabularyEntry> = data_file.entries().collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(0)
}

fn say_interactive(generator: &PronunciationGenerator) -> io::Result<()> {
    println!("Kannada pronunciation hints. Type a transliteration, 'exit' to quit.");
    println!("---------------------------------------------------------------");
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let input = line?;
        let word = input.trim();
        if word == "exit" {
            break;
        }
        if !word.is_empty() {
            println!("{}", generator.generate(word).bold());
        }
        print!("> ");
        stdout.flush()?;
    }
    println!();
    Ok(())
}
