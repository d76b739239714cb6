//! Terminal echo for diagnostics.
//!
//! A long document can trip the same recovery rule hundreds of times, so
//! each distinct line is printed once until [`clear_warnings`] is called.
//! [`crate::CollectingSink`] echoes through here unless it was made quiet.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

use crate::diagnostics::{Diagnostic, Severity};

/// Lines already printed since the last [`clear_warnings`].
static ECHOED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Print `diagnostic` to stderr under a `[Bramble <component>]` label,
/// unless the same line has already been printed.
///
/// Returns whether the line was printed.
///
/// # Example
/// ```ignore
/// let diagnostic = Diagnostic::new(Severity::Error, "Stray end tag \u{201C}p\u{201D}.", location);
/// let _ = warn_once("HTML Parser", &diagnostic);
/// ```
#[must_use]
pub fn warn_once(component: &str, diagnostic: &Diagnostic) -> bool {
    let line = format!("[Bramble {component}] {diagnostic}");
    let fresh = ECHOED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(line.clone());

    if fresh {
        match diagnostic.severity {
            Severity::Warning => eprintln!("{}", line.yellow()),
            Severity::Error => eprintln!("{}", line.red()),
            Severity::Fatal => eprintln!("{}", line.red().bold()),
        }
    }
    fresh
}

/// Forget every printed line. Called when a new document starts.
pub fn clear_warnings() {
    if let Some(echoed) = ECHOED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_mut()
    {
        echoed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollectingSink, ErrorSink, Location};

    // One test owns the global set, so parallel tests cannot clear it
    // between the assertions.
    #[test]
    fn test_echo_is_deduplicated_until_cleared() {
        let diagnostic = Diagnostic::new(
            Severity::Warning,
            "Attribute \u{201C}src\u{201D} without a value.",
            Location::new(4, 2),
        );
        assert!(warn_once("Echo Test", &diagnostic));
        assert!(!warn_once("Echo Test", &diagnostic));
        assert!(warn_once("Other Component", &diagnostic));

        clear_warnings();
        assert!(warn_once("Echo Test", &diagnostic));

        clear_warnings();
        let mut sink = CollectingSink::new().with_component("Echo Test");
        sink.report_warning(&diagnostic);
        assert_eq!(sink.warning_count(), 1);
        assert!(!warn_once("Echo Test", &diagnostic));

        let mut quiet = CollectingSink::quiet().with_component("Quiet Test");
        quiet.report_warning(&diagnostic);
        assert_eq!(quiet.warning_count(), 1);
        assert!(warn_once("Quiet Test", &diagnostic));
    }
}
