use clap::{Parser, Subcommand};
use restitch::cli::{assemble_file, show_digest, show_extension, AssembleOptions};
use restitch::digest::DigestAlgorithm;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("RESTITCH_VERSION");
const BUILD: &str = env!("RESTITCH_BUILD");
const PROFILE: &str = env!("RESTITCH_PROFILE");
const GIT_HASH: &str = env!("RESTITCH_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "restitch")]
#[command(author, about = "Reassemble split files and verify their integrity", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reassemble a file from its numbered chunks
    #[command(alias = "a")]
    Assemble {
        /// Folder containing the chunk files
        #[arg(short, long, default_value = "SplitFile")]
        folder: PathBuf,

        /// Prefix shared by the chunk filenames (e.g. 'part' for part_1, part_2, ...)
        #[arg(short, long, default_value = "part")]
        prefix: String,

        /// Path of the reconstructed output file
        #[arg(short, long, default_value = "reconstructed_file")]
        output: PathBuf,

        /// Hash the reconstructed file and print the digest
        #[arg(short, long)]
        verify: bool,

        /// Digest algorithm used with --verify
        #[arg(long, default_value = "sha1", value_parser = parse_algorithm)]
        algorithm: DigestAlgorithm,
    },

    /// Print the digest of a file
    #[command(alias = "h")]
    Hash {
        /// File to hash
        file: PathBuf,

        /// Digest algorithm
        #[arg(long, default_value = "sha1", value_parser = parse_algorithm)]
        algorithm: DigestAlgorithm,
    },

    /// Print the file type detected from a file's leading bytes
    #[command(alias = "d")]
    Detect {
        /// File to sniff
        file: PathBuf,
    },
}

fn parse_algorithm(s: &str) -> Result<DigestAlgorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("restitch {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Assemble {
            folder,
            prefix,
            output,
            verify,
            algorithm,
        } => {
            let options = AssembleOptions { algorithm, verify };

            match assemble_file(&folder, &prefix, &output, &options) {
                Ok(outcome) => {
                    println!(
                        "Assembled {} chunks ({} bytes) into {}",
                        outcome.summary.chunks,
                        outcome.summary.bytes,
                        output.display()
                    );
                    if let Some(tagged) = &outcome.tagged_path {
                        println!(
                            "Detected type '{}'; tagged copy written to {}",
                            outcome.extension,
                            tagged.display()
                        );
                    }
                    if let Some(digest) = &outcome.digest {
                        println!("{} digest of {}: {}", algorithm, output.display(), digest);
                    }
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Hash { file, algorithm } => match show_digest(&file, algorithm) {
            Ok(line) => {
                print!("{}", line);
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Detect { file } => match show_extension(&file) {
            Ok(line) => {
                print!("{}", line);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
