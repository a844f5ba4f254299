use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use owlsite_menutool::import::{PackUpdate, import_menu};
use owlsite_menutool::validate::{Severity, ValidationReport, validate_dir};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "owlsite-menutool", version)]
#[command(about = "Maintenance tasks for the Owl Site language packs")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Merge the trilingual kitchen menu into every language pack
    Import {
        /// Kitchen menu text file (`ka / en / ru — price` lines)
        #[arg(long)]
        menu: PathBuf,
        /// Directory holding en.json, ru.json and ka.json
        #[arg(long, default_value = "owlsite-web/static/data")]
        data: PathBuf,
        /// Report the changes without writing any file
        #[arg(long)]
        dry_run: bool,
    },
    /// Check packs and the image manifest for gaps
    Validate {
        /// Directory holding the packs and images.json
        #[arg(long, default_value = "owlsite-web/static/data")]
        data: PathBuf,
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("{}", "🦉 Owl Site menu tool".bright_cyan().bold());
    println!("{}", "=====================".cyan());

    match args.command {
        Command::Import {
            menu,
            data,
            dry_run,
        } => {
            let updates = import_menu(&menu, &data, dry_run)?;
            print_updates(&updates, dry_run);
        }
        Command::Validate { data, strict } => {
            let report = validate_dir(&data);
            print_report(&report);
            if report.fails(strict) {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

fn print_updates(updates: &[PackUpdate], dry_run: bool) {
    for update in updates {
        let status = if update.written {
            "✅ written".green()
        } else if dry_run {
            "📝 dry run".yellow()
        } else {
            "➖ unchanged".normal()
        };
        println!(
            "{status} {}: +{} items, {} already present",
            update.path.display(),
            update.summary.added,
            update.summary.skipped
        );
        if !update.summary.new_categories.is_empty() {
            println!(
                "   new categories: {}",
                update.summary.new_categories.join(", ").bright_white()
            );
        }
    }
}

fn print_report(report: &ValidationReport) {
    for finding in &report.findings {
        match finding.severity {
            Severity::Error => println!("{}", finding.to_string().red()),
            Severity::Warning => println!("{}", finding.to_string().yellow()),
        }
    }
    println!();
    println!("Packs checked: {}", report.packs_checked);
    println!(
        "Errors: {}",
        report.count(Severity::Error).to_string().red()
    );
    println!(
        "Warnings: {}",
        report.count(Severity::Warning).to_string().yellow()
    );
}
