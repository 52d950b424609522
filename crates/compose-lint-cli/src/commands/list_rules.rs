//! List rules command implementation.

use compose_lint_rules::{all_rules, recommended_rules};

/// Runs the list-rules command.
pub fn run() {
    let recommended: Vec<&'static str> = recommended_rules().iter().map(|rule| rule.name()).collect();

    println!("Available rules:\n");
    println!("{:<8} {:<36} Description", "Code", "Name");
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        let marker = if recommended.contains(&rule.name()) {
            ""
        } else {
            " (opt-in)"
        };
        println!(
            "{:<8} {:<36} {}{}",
            rule.code(),
            rule.name(),
            rule.description(),
            marker
        );
    }

    println!("\nPresets:");
    println!("  recommended  - every rule except the opt-in ones (default)");
    println!("  all          - every rule");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  compose-lint check --rules modifier-missing,modifier-reused");
    println!("  compose-lint check --rules CL013,CL016");
}
