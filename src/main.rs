use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_STORAGE: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a questionnaire answers file (.yaml or .json)
    Score {
        /// Path to the answers file
        file: PathBuf,

        /// Emit the full result as JSON instead of a report
        #[arg(long, conflicts_with = "tsv")]
        json: bool,

        /// Emit a single tab-separated row instead of a report
        #[arg(long)]
        tsv: bool,

        /// Show every reason code instead of the top N
        #[arg(long, conflicts_with = "top")]
        all: bool,

        /// Number of reason codes to show in the report
        #[arg(long, default_value_t = 5)]
        top: usize,

        /// Record the result in the local assessment history under this name
        #[arg(long, value_name = "NAME")]
        save: Option<String>,

        /// Score even when answers fail vocabulary validation
        #[arg(long)]
        force: bool,
    },
    /// Print the reason-code catalog
    Catalog,
    /// Print a blank questionnaire template (YAML)
    Template,
    /// List previously saved assessments, newest first
    History {
        /// Show at most this many records
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "risk-mapper")]
#[command(about = "Student-data privacy risk scoring for edtech systems", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let use_colors = risk_mapper::output::should_use_colors();

    match cli.command {
        Commands::Score {
            file,
            json,
            tsv,
            all,
            top,
            save,
            force,
        } => {
            let answers = match risk_mapper::input::load_answers(&file) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if let Err(errors) = risk_mapper::scoring::validate_answers(&answers) {
                eprintln!("Answers failed validation:");
                for error in &errors {
                    eprintln!("  - {}", error);
                }
                if !force {
                    eprintln!("Fix the answers file, or rerun with --force to score anyway.");
                    std::process::exit(EXIT_INPUT);
                }
            }

            // Silently-ignored keys never change the score; surface them
            for warning in risk_mapper::scoring::unrecognized_keys(&answers) {
                eprintln!("Warning: {} (ignored by scoring)", warning);
            }

            let result = risk_mapper::scoring::calculate_risk_score(&answers);

            let name = save.clone().unwrap_or_else(|| {
                file.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "assessment".to_string())
            });

            if json {
                match risk_mapper::output::format_json(&result) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_STORAGE);
                    }
                }
            } else if tsv {
                println!("{}", risk_mapper::output::format_tsv_row(&name, &result));
            } else {
                let shown = if all { None } else { Some(top) };
                println!(
                    "{}",
                    risk_mapper::output::format_report(&result, use_colors, shown)
                );
            }

            if save.is_some() {
                let path = risk_mapper::store::get_history_path();
                let saved = risk_mapper::store::load_history(&path).and_then(|mut history| {
                    history.record(&name, &result);
                    risk_mapper::store::save_history(&path, &history)
                });
                match saved {
                    Ok(()) => eprintln!("Recorded '{}' in {}", name, path.display()),
                    Err(e) => {
                        eprintln!("Storage error: {:#}", e);
                        std::process::exit(EXIT_STORAGE);
                    }
                }
            }
        }
        Commands::Catalog => {
            println!("{}", risk_mapper::output::format_catalog(use_colors));
        }
        Commands::Template => {
            print!("{}", risk_mapper::input::render_template());
        }
        Commands::History { limit } => {
            let path = risk_mapper::store::get_history_path();
            let history = match risk_mapper::store::load_history(&path) {
                Ok(h) => h,
                Err(e) => {
                    eprintln!("Storage error: {:#}", e);
                    std::process::exit(EXIT_STORAGE);
                }
            };

            let records = history.recent(limit);
            if records.is_empty() {
                println!("No saved assessments. Use `risk-mapper score <file> --save NAME`.");
            } else {
                for record in records {
                    println!(
                        "{:>3}/100  {:<9} {:<32} {}",
                        record.total,
                        record.risk_tier.to_string(),
                        record.name,
                        risk_mapper::output::format_age(record.age())
                    );
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
