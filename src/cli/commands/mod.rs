pub mod parse;
pub mod send;
pub mod status;

use zeta_intent::panel::Panel;

/// Prints log entries appended since `seen`, returning the new count.
pub(crate) fn print_new_log_entries(panel: &Panel, seen: usize) -> usize {
    let entries = panel.log().entries();
    for entry in entries.iter().skip(seen) {
        eprintln!("{}", entry);
    }
    entries.len()
}
