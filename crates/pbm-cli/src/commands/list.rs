//! Catalog listing output

use std::path::Path;

use colored::Colorize;
use pbm_catalog::{BuildRecord, Catalog, BUILDS_DIR};

/// Print every discovered build, grouped by provider and category.
///
/// Entries are numbered with the same 1-based indices the interactive menu
/// uses.
pub fn print_catalog(catalog: &Catalog, repo_root: &Path) {
    if catalog.is_empty() {
        println!(
            "{} No builds found under {}",
            "warning:".yellow().bold(),
            repo_root.join(BUILDS_DIR).display()
        );
        return;
    }

    println!();
    println!("{}", "Available Packer builds".bold());

    let builds_dir = repo_root.join(BUILDS_DIR);
    let mut current_provider: Option<&str> = None;
    let mut current_category: Option<&str> = None;

    for (index, record) in catalog.records().iter().enumerate() {
        if current_provider != Some(record.provider.as_str()) {
            current_provider = Some(record.provider.as_str());
            current_category = None;
            println!();
            println!("{}", record.provider.to_uppercase().cyan().bold());
        }
        if current_category != Some(record.category.as_str()) {
            current_category = Some(record.category.as_str());
            println!("  {}", record.category.blue());
        }

        println!(
            "    {:>2}. {}",
            index + 1,
            record.display_name.green().bold()
        );
        println!("        Path: {}", relative_path(record, &builds_dir));
        if record.sources.is_empty() {
            println!("        Sources: {}", "none found".dimmed());
        } else {
            println!("        Sources: {}", record.sources.join(", "));
        }
        if record.variables_file().exists() {
            println!(
                "        {}",
                format!("has {}", pbm_catalog::VARIABLES_FILE).yellow()
            );
        }
    }
    println!();
}

fn relative_path(record: &BuildRecord, builds_dir: &Path) -> String {
    record
        .path
        .strip_prefix(builds_dir)
        .unwrap_or(&record.path)
        .display()
        .to_string()
}
