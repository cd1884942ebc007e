//! Terminal output formatting.

use console::style;

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", style("ℹ").blue().bold(), message);
}

/// Prints the init-failure marker on stdout.
///
/// Kept as a bare literal so scripts that grep stdout for it keep working.
pub fn init_failed() {
    println!("failed to init");
}
