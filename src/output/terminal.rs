// Colored terminal output for check results, gate decisions, and the registry.
//
// main.rs delegates all human-readable formatting here.

use colored::Colorize;

use crate::form::{GateDecision, StoryForm};
use crate::moderation::registry::{unified_terms, RegistryStats};

use super::CheckReport;

/// Display the result of checking a single piece of text.
pub fn display_check(text: &str, report: &CheckReport) {
    let preview = super::truncate_chars(text, 80);
    println!("\n  Input: \"{}\"", preview.dimmed());

    if report.safe {
        println!("  Result: {}", "clear".green().bold());
    } else {
        println!("  Result: {}", "unsafe".red().bold());
        if let Some(message) = report.message {
            println!("  Message: {message}");
        }
    }

    if let Some(diag) = &report.diagnostics {
        println!(
            "  {} matched {} via {} check",
            "diagnostics:".dimmed(),
            diag.term.yellow(),
            diag.strategy.as_str()
        );
    }
    println!();
}

/// Display a submission gate decision for a whole form.
pub fn display_gate(form: &StoryForm, decision: &GateDecision) {
    println!("\n{}", "=== Submission Gate ===".bold());
    println!();
    println!("  Child name:   \"{}\"", super::truncate_chars(&form.child_name, 60));
    println!(
        "  Friend names: \"{}\"",
        super::truncate_chars(&form.friend_names.join("\", \""), 60)
    );
    println!("  Keywords:     \"{}\"", super::truncate_chars(&form.keywords, 60));
    println!();

    match decision {
        GateDecision::Allowed => {
            println!("  {} story generation may proceed", "OK".green().bold());
        }
        GateDecision::Blocked {
            field,
            title,
            message,
        } => {
            println!("  {} blocked at field: {}", "!!".red().bold(), field);
            println!("  {}", title.bold());
            println!("  {message}");
        }
    }
    println!();
}

/// Display registry statistics, optionally followed by the unified term list.
pub fn display_registry(stats: &RegistryStats, list: bool) {
    println!("\n{}", "=== Pattern Registry ===".bold());
    println!();

    println!("  {}", "By category".dimmed());
    for (category, count) in &stats.by_category {
        println!("    {:<16} {:>4}", category.as_str(), count);
    }

    println!("  {}", "By language".dimmed());
    for (language, count) in &stats.by_language {
        println!("    {:<16} {:>4}", language.code(), count);
    }

    println!("  {}", "-".repeat(22).dimmed());
    println!("    {:<16} {:>4}", "entries", stats.raw_total);
    println!(
        "    {:<16} {:>4}  ({} duplicates removed)",
        "unified",
        stats.unified_total,
        stats.duplicates_removed()
    );

    if list {
        println!();
        for chunk in unified_terms().chunks(8) {
            println!("    {}", chunk.join(", "));
        }
    }
    println!();
}
