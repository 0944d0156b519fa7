//! Output formatting
//!
//! Human-readable banners and error display. The whole diagnostic stream
//! goes to standard output; it is a log for the user, not a machine
//! interface. The messages keep the French text of the Sudoku project.

use crate::config::defaults;
use crate::error::BuildError;

/// Width of the `=` banner rules
const BANNER_WIDTH: usize = 50;

/// Print a horizontal rule
fn print_rule() {
    println!("{}", "=".repeat(BANNER_WIDTH));
}

/// Print the header banner shown at the start of every build
pub fn print_header() {
    print_rule();
    println!("COMPILATION SUDOKU - Just Max It, Everyday");
    print_rule();
}

/// Print the success banner and the usage hint for the produced binary
pub fn print_success() {
    println!();
    print_rule();
    println!("COMPILATION REUSSIE !");
    print_rule();
    println!();
    println!("Pour lancer le jeu, tape:");
    println!("  ./{}", defaults::OUTPUT_NAME);
}

/// Print the failure banner shown when the compiler exits nonzero
pub fn print_failure() {
    println!();
    print_rule();
    println!("ERREUR DE COMPILATION");
    print_rule();
}

/// Display a build error to the user
///
/// Compiler failures get the framed banner; the compiler's own diagnostics
/// were already streamed. Everything else is a one-line `ERREUR:` message.
pub fn display_error(error: &BuildError) {
    match error {
        BuildError::CompilationFailed => print_failure(),
        other => println!("ERREUR: {other}"),
    }
}
