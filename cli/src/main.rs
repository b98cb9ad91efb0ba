//! citecheck CLI - citation and reference list consistency checker

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use citecheck::render::{self, JsonFormat, ReportOptions};
use citecheck::{check_document, CheckOptions, CheckReport, ReaderRegistry, Verdict};

/// Exit code when `--strict` is set and the check does not pass.
const EXIT_CHECK_FAILED: i32 = 2;

#[derive(Parser)]
#[command(name = "citecheck")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Check name-year citations against the reference list", long_about = None)]
struct Cli {
    /// Input document (.docx or .txt)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory (defaults to the input's directory)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a document and write the citation list and report
    Check {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long, value_name = "DIR", env = "CITECHECK_OUTPUT_DIR")]
        output: Option<PathBuf>,

        /// Also write the findings as JSON
        #[arg(long)]
        json: bool,

        /// Exit with status 2 unless the check passes
        #[arg(long)]
        strict: bool,

        /// Do not scan table cells for citations
        #[arg(long)]
        no_tables: bool,

        /// Additional reference list heading keyword (repeatable)
        #[arg(long = "heading", value_name = "KEYWORD")]
        headings: Vec<String>,

        /// List skipped reference lines in the report
        #[arg(long)]
        list_skipped: bool,
    },

    /// Print the in-text citation candidates
    #[command(alias = "cit")]
    Citations {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the parsed reference list entries
    #[command(alias = "refs")]
    References {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Additional reference list heading keyword (repeatable)
        #[arg(long = "heading", value_name = "KEYWORD")]
        headings: Vec<String>,
    },

    /// Show version information
    Version,
}

/// Settings for the `check` command.
#[derive(Default)]
struct CheckArgs {
    output: Option<PathBuf>,
    json: bool,
    strict: bool,
    options: CheckOptions,
    list_skipped: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Check {
            input,
            output,
            json,
            strict,
            no_tables,
            headings,
            list_skipped,
        }) => {
            let args = CheckArgs {
                output,
                json,
                strict,
                options: build_options(&headings, no_tables),
                list_skipped,
            };
            cmd_check(&input, &args)
        }
        Some(Commands::Citations { input, output }) => {
            cmd_citations(&input, output.as_deref()).map(|_| 0)
        }
        Some(Commands::References { input, headings }) => {
            cmd_references(&input, &build_options(&headings, false)).map(|_| 0)
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(0)
        }
        None => {
            // Default behavior: check if input is provided
            if let Some(input) = cli.input {
                let args = CheckArgs {
                    output: cli.output,
                    ..CheckArgs::default()
                };
                cmd_check(&input, &args)
            } else {
                println!("{}", "Usage: citecheck <FILE> [OUTPUT]".yellow());
                println!("       citecheck --help for more information");
                Ok(0)
            }
        }
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn build_options(headings: &[String], no_tables: bool) -> CheckOptions {
    let mut options = CheckOptions::new().with_tables(!no_tables);
    for heading in headings {
        options = options.add_heading_keyword(heading);
    }
    options
}

fn check_path(input: &Path, options: &CheckOptions) -> citecheck::Result<CheckReport> {
    let doc = ReaderRegistry::with_defaults().read(input)?;
    Ok(check_document(&doc, &input.display().to_string(), options))
}

/// Files written by the `check` command.
struct OutputPaths {
    citations: PathBuf,
    report: PathBuf,
    json: PathBuf,
}

impl OutputPaths {
    fn new(input: &Path, output_dir: Option<&Path>) -> Self {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let dir = output_dir
            .map(Path::to_path_buf)
            .or_else(|| input.parent().map(Path::to_path_buf))
            .unwrap_or_default();

        Self {
            citations: dir.join(format!("{}_citations.txt", stem)),
            report: dir.join(format!("{}_citation_report.txt", stem)),
            json: dir.join(format!("{}_citation_report.json", stem)),
        }
    }
}

fn cmd_check(input: &Path, args: &CheckArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let report = check_path(input, &args.options)?;
    let paths = OutputPaths::new(input, args.output.as_deref());
    log::debug!("Writing citation outputs next to {}", paths.report.display());

    if let Some(dir) = paths.report.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    fs::write(&paths.citations, render::to_citation_list(&report))?;

    let report_options = ReportOptions::new()
        .with_citations_path(&paths.citations)
        .with_skipped_lines(args.list_skipped);
    fs::write(&paths.report, render::to_report(&report, &report_options))?;

    if args.json {
        fs::write(&paths.json, render::to_json(&report, JsonFormat::Pretty)?)?;
    }

    print_summary(&report);

    println!("\n{}", "Output files:".green().bold());
    println!("  {} {}", "├─".dimmed(), paths.citations.display());
    if args.json {
        println!("  {} {}", "├─".dimmed(), paths.json.display());
    }
    println!("  {} {}", "└─".dimmed(), paths.report.display());

    let passed = report.verdict().is_consistent();
    Ok(if args.strict && !passed {
        EXIT_CHECK_FAILED
    } else {
        0
    })
}

fn print_summary(report: &CheckReport) {
    println!("{}", "Citation Check".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), report.source);
    println!("{}: {}", "Citation groups".bold(), report.candidates.len());
    println!("{}: {}", "Citation keys".bold(), report.citations.len());
    println!("{}: {}", "Reference lines".bold(), report.reference_lines.len());
    println!("{}: {}", "Parsed entries".bold(), report.references.len());

    if let Some(ref reconciliation) = report.reconciliation {
        println!(
            "{}: {}",
            "Missing references".bold(),
            reconciliation.missing_count()
        );
        println!(
            "{}: {}",
            "Uncited entries".bold(),
            reconciliation.unused_count()
        );
    }

    println!();
    let line = render::verdict_line(report.verdict());
    match report.verdict() {
        Verdict::Consistent => println!("{}", line.green()),
        Verdict::Inconsistent => println!("{}", line.red()),
        Verdict::Undetermined => println!("{}", line.yellow()),
    }
}

fn cmd_citations(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let report = check_path(input, &CheckOptions::default())?;
    let list = render::to_citation_list(&report);

    if let Some(path) = output {
        fs::write(path, &list)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", list);
    }

    Ok(())
}

fn cmd_references(input: &Path, options: &CheckOptions) -> Result<(), Box<dyn std::error::Error>> {
    let report = check_path(input, options)?;

    if !report.reference_list_detected() {
        println!("{}", render::NO_REFERENCE_LIST_NOTICE.yellow());
        return Ok(());
    }

    for entry in &report.references.entries {
        println!("{:>4}  {:<24} {}", entry.index, entry.key.to_string().cyan(), entry.raw);
    }

    if !report.references.skipped.is_empty() {
        println!();
        println!("{}", "Skipped lines".yellow().bold());
        for skipped in &report.references.skipped {
            println!("  {} ({}) {}", "-".dimmed(), skipped.reason, skipped.raw);
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "citecheck".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Name-year citation consistency checker");
    println!();
    println!("License: MIT");
}
