//! mdresume CLI - Markdown resume parsing tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use mdresume::{parse_file_with_options, JsonFormat, ParseOptions, Resume};

#[derive(Parser)]
#[command(name = "mdresume")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Parse Markdown resumes into structured JSON", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Keep the input as written (no BOM stripping or Unicode normalization)
    #[arg(long, global = true, env = "MDRESUME_RAW")]
    raw: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume and dump it as JSON
    Json {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show a per-section summary of a resume
    Info {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = if cli.raw {
        ParseOptions::new().raw()
    } else {
        ParseOptions::new()
    };

    let result = match cli.command {
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, options),
        Some(Commands::Info { input }) => cmd_info(&input, options),
        None => {
            // Default behavior: dump JSON to stdout if input is provided
            if let Some(input) = cli.input {
                cmd_json(&input, None, false, options)
            } else {
                println!("{}", "Usage: mdresume <FILE>".yellow());
                println!("       mdresume --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let resume = parse_file_with_options(input, options)?;
    log::debug!("Parsed {} entries from {}", resume.entry_count(), input.display());

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = mdresume::to_json(&resume, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let resume = parse_file_with_options(input, options)?;
    log::debug!("Summarizing {}", input.display());

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    print_contact(&resume);

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if let Some(ref summary) = resume.summary {
        let words = summary.split_whitespace().count();
        println!("{}: {} words", "Summary".bold(), words);
    }
    print_count(
        resume.skills.display_title(),
        resume.skills.categories.len(),
        "categories",
    );
    print_count(
        resume.experience.display_title(),
        resume.experience.positions.len(),
        "positions",
    );
    let current = resume.experience.current_positions().count();
    if current > 0 {
        println!("  {} {} current", "└─".dimmed(), current);
    }
    print_count(
        resume.education.display_title(),
        resume.education.institutions.len(),
        "institutions",
    );
    if let Some(ref projects) = resume.projects {
        print_count(projects.display_title(), projects.projects.len(), "projects");
    }
    if let Some(ref certifications) = resume.certifications {
        print_count(
            certifications.display_title(),
            certifications.items.len(),
            "items",
        );
    }
    if let Some(ref languages) = resume.languages {
        print_count(
            languages.display_title(),
            languages.languages.len(),
            "languages",
        );
    }

    println!();
    println!("{}: {}", "Total entries".bold(), resume.entry_count());

    Ok(())
}

fn print_contact(resume: &Resume) {
    let contact = &resume.contact;
    println!("{}: {}", "Name".bold(), contact.name);
    if let Some(ref email) = contact.email {
        println!("{}: {}", "Email".bold(), email);
    }
    if let Some(ref phone) = contact.phone {
        println!("{}: {}", "Phone".bold(), phone);
    }
    if let Some(ref location) = contact.location {
        println!("{}: {}", "Location".bold(), location.display());
    }
    for link in &contact.links {
        println!("{}: {}", "Link".bold(), link.uri);
    }
}

fn print_count(title: &str, count: usize, unit: &str) {
    println!("{}: {} {}", title.bold(), count, unit);
}
