//! List rules command implementation.

use catch_lint_rules::{all_rules, DEFAULT_ILLEGAL_NAMES};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nillegal-catch options:");
    println!("  illegal_names       - default: {}", DEFAULT_ILLEGAL_NAMES.join(", "));
    println!("  permit_fresh_throw  - allow `catch (..) {{ throw new X(..); }}` (default: false)");
    println!("  permit_rethrow      - allow `catch (..) {{ throw e; }}` (default: false)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  catch-lint check --rules illegal-catch");
    println!("  catch-lint check --rules IC001");
}
