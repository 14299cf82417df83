//! Terminal output for check results and the rule listing.

use colored::Colorize;
use prose_types::{CheckSpan, Severity, CONFIGURED_CONTEXT, SINGLE_PARAGRAPH, WHOLE_DOCUMENT};
use std::path::Path;
use std::process::ExitCode;

/// Print one line per flagged span plus a summary.
///
/// Returns a failure exit code when any span is error severity.
pub fn print_spans(file: &Path, spans: &[CheckSpan]) -> ExitCode {
    for span in spans {
        let severity = match span.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
            Severity::Info => "info".blue().bold(),
            Severity::Hint => "hint".cyan(),
        };

        let location = format!("{}:{}..{}", file.display(), span.start, span.end());
        println!(
            "{} {severity} [{}] {}",
            location.bold(),
            span.rule.dimmed(),
            span.message
        );
        if !span.suggestions.is_empty() {
            println!("  {} {}", "suggest:".dimmed(), span.suggestions.join(" | "));
        }
    }

    if spans.is_empty() {
        println!("{}", "No issues found.".green());
    } else {
        let issues = if spans.len() == 1 { "issue" } else { "issues" };
        println!("{} {} {issues} found", "!".yellow(), spans.len());
    }

    if spans.iter().any(|span| span.severity.is_error()) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Print the registered rules with their context demands.
pub fn print_rules() {
    for rule in prose_rules::text_rules() {
        println!(
            "{}  {}",
            rule.id().bold(),
            demand_label(rule.min_to_check_paragraphs()).dimmed()
        );
        println!("  {}", rule.description());
    }
}

fn demand_label(min_paragraphs: i32) -> String {
    match min_paragraphs {
        SINGLE_PARAGRAPH => "current paragraph".to_string(),
        CONFIGURED_CONTEXT => "configured window".to_string(),
        WHOLE_DOCUMENT => "whole document".to_string(),
        n if n > 0 => format!("{n} surrounding paragraphs"),
        n => format!("unknown demand ({n})"),
    }
}
