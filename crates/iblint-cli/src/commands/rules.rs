//! Rules command implementation.

use iblint_rules::all_rules;

/// Runs the rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<15} Description", "Identifier");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!("{:<15} {}", rule.identifier(), rule.description());
    }

    println!("\nRules are opt-in. Enable them in .iblinter.yml, e.g.:");
    println!("  enabled_rules:");
    println!("    - color_theme");
    println!("    - localization");
}
