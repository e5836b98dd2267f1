//! List rules command implementation.

use tulip_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<26} Description", "Code", "Name");
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        println!("{:<8} {:<26} {}", rule.code(), rule.name(), rule.description());
    }

    println!("\nAll rules run by default, in the order above.");
    println!("\nUse --rules to run a subset, e.g.:");
    println!("  tulip-lint check --rules untitled-steps,unused-variables app.json");
    println!("  tulip-lint check --rules TL001,TL009 export.tar.gz");
}
