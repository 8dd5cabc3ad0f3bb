//! List rules command implementation.

use docstyle_rules::all_evaluators;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<8} {:<24} {:<22} {:<9} Description",
        "Code", "Name", "Family", "Default"
    );
    println!("{}", "-".repeat(100));

    for evaluator in all_evaluators() {
        println!(
            "{:<8} {:<24} {:<22} {:<9} {}",
            evaluator.code(),
            evaluator.name(),
            evaluator.family(),
            evaluator.default_severity().to_string(),
            evaluator.description()
        );
    }

    println!("\nUse --rules to run a subset, e.g.:");
    println!("  docstyle check --rules heading_case,pii_markers");
    println!("  docstyle check --rules DS003,DS401");
    println!("\nPer-rule overrides live in docstyle.toml under [rules.<name>].");
}
