use clap::{Parser, Subcommand};
use folkxml_converter::{convert, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;

/// folkxml - converts pipe-delimited people records into XML
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a records file to output.xml in the current directory
    Convert {
        /// Path to the records file to convert
        input: Option<PathBuf>,
    },
}

fn main() {
    let cli = Args::parse();

    match cli.command {
        Commands::Convert { input } => {
            let output = PathBuf::from(DEFAULT_OUTPUT_FILE);

            match convert(input.as_deref(), &output) {
                Ok(conversion) => {
                    for warning in &conversion.warnings {
                        println!(
                            "{}:{}: WARNING: {}",
                            warning.file.display(),
                            warning.line,
                            warning.message
                        );
                    }
                    println!(
                        "XML written to {} ({} people).",
                        conversion.output_path.display(),
                        conversion.people
                    );
                }
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                }
            }
        }
    }
}
