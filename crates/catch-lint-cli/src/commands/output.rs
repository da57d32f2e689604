//! Shared output formatting for lint results.

use anyhow::Result;
use catch_lint_core::{LintResult, Severity, ViolationDiagnostic};
use miette::GraphicalReportHandler;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => print!("{}", render_compact(result)),
        OutputFormat::Pretty => print!("{}", render_pretty(result)?),
    }
    Ok(())
}

fn render_text(result: &LintResult) -> String {
    let mut out = String::new();

    for violation in &result.violations {
        let (label, color) = match violation.severity {
            Severity::Error => ("error", "\x1b[31m"),
            Severity::Warning => ("warning", "\x1b[33m"),
            Severity::Info => ("info", "\x1b[34m"),
        };
        let block = violation.format().replacen(
            &format!("  {label}:"),
            &format!("  {color}{label}\x1b[0m:"),
            1,
        );
        out.push_str(&block);
        out.push('\n');
    }

    out.push_str(&summary(result));
    out
}

fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|violation| format!("{violation}\n"))
        .collect()
}

fn render_pretty(result: &LintResult) -> Result<String> {
    let handler = GraphicalReportHandler::new();
    let mut out = String::new();

    for violation in &result.violations {
        out.push_str(&format!(
            "{}:{}:{}\n",
            violation.location.file.display(),
            violation.location.line,
            violation.location.column
        ));
        handler.render_report(&mut out, &ViolationDiagnostic::from(violation))?;
        out.push('\n');
    }

    out.push_str(&summary(result));
    Ok(out)
}

fn summary(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    format!(
        "{color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} tree(s)\x1b[0m\n",
        result.files_checked
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catch_lint_core::{Location, Suggestion, Violation};
    use std::path::PathBuf;

    fn sample() -> LintResult {
        let mut result = LintResult::new();
        result.files_checked = 2;
        result.violations.push(
            Violation::new(
                "IC001",
                "illegal-catch",
                Severity::Error,
                Location::new(PathBuf::from("src/Main.tree.json"), 4, 11),
                "Catching 'Exception' is not allowed.",
            )
            .with_suggestion(Suggestion::new("Catch a narrower type")),
        );
        result
    }

    #[test]
    fn text_reuses_violation_block() {
        let result = sample();
        let text = render_text(&result);

        assert!(text.starts_with("IC001 illegal-catch at src/Main.tree.json:4:11\n"));
        assert!(text.contains("\x1b[31merror\x1b[0m: Catching 'Exception' is not allowed."));
        assert!(text.contains("  = help: Catch a narrower type\n"));
        assert!(text.contains("Found 1 error(s), 0 warning(s), 0 info(s) in 2 tree(s)"));
    }

    #[test]
    fn compact_is_one_line_per_violation() {
        let compact = render_compact(&sample());
        assert_eq!(
            compact,
            "src/Main.tree.json:4:11: error [IC001] Catching 'Exception' is not allowed.\n"
        );
    }

    #[test]
    fn pretty_renders_diagnostic() {
        let pretty = render_pretty(&sample()).unwrap();
        assert!(pretty.starts_with("src/Main.tree.json:4:11\n"));
        assert!(pretty.contains("Catching 'Exception' is not allowed."));
        assert!(pretty.contains("Catch a narrower type"));
    }

    #[test]
    fn empty_result_prints_only_summary() {
        let text = render_text(&LintResult::new());
        assert!(text.starts_with("\x1b[32mFound 0 error(s)"));
    }
}
