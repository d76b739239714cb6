//! DOCTYPE classification.
//!
//! [§ 13.2.6.4.1 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
//!
//! "If the document is not an iframe srcdoc document, and the parser cannot
//! change the mode flag is false, and the DOCTYPE token matches one of the
//! conditions in the following list, then set the Document to quirks mode"
//!
//! On top of the mode, the classification decides which diagnostics a
//! doctype draws under each [`DoctypeExpectation`] and whether the HTML4
//! specific checks get switched on.

use bramble_dom::DocumentMode;

use crate::config::DoctypeExpectation;

/// The public identifiers of the HTML 4.0 and 4.01 doctypes, in their
/// canonical case. Sorted.
pub const HTML4_PUBLIC_IDS: [&str; 6] = [
    "-//W3C//DTD HTML 4.0 Frameset//EN",
    "-//W3C//DTD HTML 4.0 Transitional//EN",
    "-//W3C//DTD HTML 4.0//EN",
    "-//W3C//DTD HTML 4.01 Frameset//EN",
    "-//W3C//DTD HTML 4.01 Transitional//EN",
    "-//W3C//DTD HTML 4.01//EN",
];

/// Lowercased public identifiers that put a document in quirks mode.
/// Sorted, compared exactly.
pub const QUIRKY_PUBLIC_IDS: [&str; 69] = [
    "+//silmaril//dtd html pro v0r11 19970101//en",
    "-//advasoft ltd//dtd html 3.0 aswedit + extensions//en",
    "-//as//dtd html 3.0 aswedit + extensions//en",
    "-//ietf//dtd html 2.0 level 1//en",
    "-//ietf//dtd html 2.0 level 2//en",
    "-//ietf//dtd html 2.0 strict level 1//en",
    "-//ietf//dtd html 2.0 strict level 2//en",
    "-//ietf//dtd html 2.0 strict//en",
    "-//ietf//dtd html 2.0//en",
    "-//ietf//dtd html 2.1e//en",
    "-//ietf//dtd html 3.0//en",
    "-//ietf//dtd html 3.0//en//",
    "-//ietf//dtd html 3.2 final//en",
    "-//ietf//dtd html 3.2//en",
    "-//ietf//dtd html 3//en",
    "-//ietf//dtd html level 0//en",
    "-//ietf//dtd html level 0//en//2.0",
    "-//ietf//dtd html level 1//en",
    "-//ietf//dtd html level 1//en//2.0",
    "-//ietf//dtd html level 2//en",
    "-//ietf//dtd html level 2//en//2.0",
    "-//ietf//dtd html level 3//en",
    "-//ietf//dtd html level 3//en//3.0",
    "-//ietf//dtd html strict level 0//en",
    "-//ietf//dtd html strict level 0//en//2.0",
    "-//ietf//dtd html strict level 1//en",
    "-//ietf//dtd html strict level 1//en//2.0",
    "-//ietf//dtd html strict level 2//en",
    "-//ietf//dtd html strict level 2//en//2.0",
    "-//ietf//dtd html strict level 3//en",
    "-//ietf//dtd html strict level 3//en//3.0",
    "-//ietf//dtd html strict//en",
    "-//ietf//dtd html strict//en//2.0",
    "-//ietf//dtd html strict//en//3.0",
    "-//ietf//dtd html//en",
    "-//ietf//dtd html//en//2.0",
    "-//ietf//dtd html//en//3.0",
    "-//metrius//dtd metrius presentational//en",
    "-//microsoft//dtd internet explorer 2.0 html strict//en",
    "-//microsoft//dtd internet explorer 2.0 html//en",
    "-//microsoft//dtd internet explorer 2.0 tables//en",
    "-//microsoft//dtd internet explorer 3.0 html strict//en",
    "-//microsoft//dtd internet explorer 3.0 html//en",
    "-//microsoft//dtd internet explorer 3.0 tables//en",
    "-//netscape comm. corp.//dtd html//en",
    "-//netscape comm. corp.//dtd strict html//en",
    "-//o'reilly and associates//dtd html 2.0//en",
    "-//o'reilly and associates//dtd html extended 1.0//en",
    "-//spyglass//dtd html 2.0 extended//en",
    "-//sq//dtd html 2.0 hotmetal + extensions//en",
    "-//sun microsystems corp.//dtd hotjava html//en",
    "-//sun microsystems corp.//dtd hotjava strict html//en",
    "-//w3c//dtd html 3 1995-03-24//en",
    "-//w3c//dtd html 3.2 draft//en",
    "-//w3c//dtd html 3.2 final//en",
    "-//w3c//dtd html 3.2//en",
    "-//w3c//dtd html 3.2s draft//en",
    "-//w3c//dtd html 4.0 frameset//en",
    "-//w3c//dtd html 4.0 transitional//en",
    "-//w3c//dtd html experimental 19960712//en",
    "-//w3c//dtd html experimental 970421//en",
    "-//w3c//dtd w3 html//en",
    "-//w3o//dtd w3 html 3.0//en",
    "-//w3o//dtd w3 html 3.0//en//",
    "-//w3o//dtd w3 html strict 3.0//en//",
    "-//webtechs//dtd mozilla html 2.0//en",
    "-//webtechs//dtd mozilla html//en",
    "-/w3c/dtd html 4.0 transitional/en",
    "html",
];

const HTML401_TRANSITIONAL_LC: &str = "-//w3c//dtd html 4.01 transitional//en";
const HTML401_FRAMESET_LC: &str = "-//w3c//dtd html 4.01 frameset//en";
const IBM_XHTML1_TRANSITIONAL_SYSTEM_ID: &str =
    "http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd";

const HTML401_STRICT_PUBLIC_ID: &str = "-//W3C//DTD HTML 4.01//EN";
const HTML401_STRICT_SYSTEM_ID: &str = "http://www.w3.org/TR/html4/strict.dtd";
const HTML401_TRANSITIONAL_PUBLIC_ID: &str = "-//W3C//DTD HTML 4.01 Transitional//EN";
const HTML401_TRANSITIONAL_SYSTEM_ID: &str = "http://www.w3.org/TR/html4/loose.dtd";

const QUIRKY: &str = "Quirky doctype.";
const ALMOST_STANDARDS: &str = "Almost standards mode doctype.";
const LEGACY: &str = "Legacy doctype.";
const WRONG_SYSTEM_ID: &str = "The doctype did not contain the system identifier prescribed by the HTML 4.01 specification.";

/// The outcome of classifying one doctype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctypeVerdict {
    /// The document mode the doctype selects.
    pub mode: DocumentMode,
    /// Parse errors to report, in order.
    pub errors: Vec<&'static str>,
    /// Warnings to report, in order.
    pub warnings: Vec<&'static str>,
    /// Whether the HTML4 specific checks apply from here on.
    pub html4: bool,
}

impl DoctypeVerdict {
    const fn new(mode: DocumentMode, html4: bool) -> Self {
        Self {
            mode,
            errors: Vec::new(),
            warnings: Vec::new(),
            html4,
        }
    }

    fn error(mut self, message: &'static str) -> Self {
        self.errors.push(message);
        self
    }

    fn warning(mut self, message: &'static str) -> Self {
        self.warnings.push(message);
        self
    }
}

/// Whether `public_id` names an HTML 4.0 or 4.01 doctype. Case-sensitive.
#[must_use]
pub fn is_html4_public_id(public_id: Option<&str>) -> bool {
    public_id.is_some_and(|id| HTML4_PUBLIC_IDS.binary_search(&id).is_ok())
}

/// Quirks mode triggers. Identifiers are already lowercased.
fn is_quirky(name: Option<&str>, public_lc: Option<&str>, system_lc: Option<&str>, force_quirks: bool) -> bool {
    if force_quirks {
        return true;
    }
    if !name.is_some_and(|n| n.eq_ignore_ascii_case("html")) {
        return true;
    }
    if let Some(public) = public_lc
        && QUIRKY_PUBLIC_IDS.binary_search(&public).is_ok()
    {
        return true;
    }
    match system_lc {
        None => matches!(public_lc, Some(HTML401_TRANSITIONAL_LC | HTML401_FRAMESET_LC)),
        Some(system) => system == IBM_XHTML1_TRANSITIONAL_SYSTEM_ID,
    }
}

/// Limited-quirks ("almost standards") triggers.
fn is_almost_standards(public_lc: Option<&str>, system_lc: Option<&str>) -> bool {
    match public_lc {
        Some("-//w3c//dtd xhtml 1.0 transitional//en" | "-//w3c//dtd xhtml 1.0 frameset//en") => {
            true
        }
        Some(HTML401_TRANSITIONAL_LC | HTML401_FRAMESET_LC) => system_lc.is_some(),
        _ => false,
    }
}

/// Classify a doctype token.
///
/// `public_id` and `system_id` are compared in their original case where
/// the HTML 4.01 rules name a canonical spelling and lowercased for the
/// quirks tables.
#[must_use]
pub fn classify_doctype(
    name: Option<&str>,
    public_id: Option<&str>,
    system_id: Option<&str>,
    force_quirks: bool,
    expectation: DoctypeExpectation,
) -> DoctypeVerdict {
    let public_lc = public_id.map(str::to_ascii_lowercase);
    let system_lc = system_id.map(str::to_ascii_lowercase);
    let quirky = is_quirky(name, public_lc.as_deref(), system_lc.as_deref(), force_quirks);
    let almost = !quirky && is_almost_standards(public_lc.as_deref(), system_lc.as_deref());
    let has_ids = public_id.is_some() || system_id.is_some();

    match expectation {
        DoctypeExpectation::Html => {
            if quirky {
                DoctypeVerdict::new(DocumentMode::Quirks, false).error(QUIRKY)
            } else if almost {
                DoctypeVerdict::new(DocumentMode::AlmostStandards, false).error(ALMOST_STANDARDS)
            } else if has_ids {
                DoctypeVerdict::new(DocumentMode::Standards, false).error(LEGACY)
            } else {
                DoctypeVerdict::new(DocumentMode::Standards, false)
            }
        }
        DoctypeExpectation::Html401Strict => {
            if quirky {
                DoctypeVerdict::new(DocumentMode::Quirks, true).error(QUIRKY)
            } else if almost {
                DoctypeVerdict::new(DocumentMode::AlmostStandards, true).error(ALMOST_STANDARDS)
            } else if public_id == Some(HTML401_STRICT_PUBLIC_ID) {
                let verdict = DoctypeVerdict::new(DocumentMode::Standards, true);
                if system_id == Some(HTML401_STRICT_SYSTEM_ID) {
                    verdict
                } else {
                    verdict.warning(WRONG_SYSTEM_ID)
                }
            } else {
                DoctypeVerdict::new(DocumentMode::Standards, true)
                    .error("The doctype was not the HTML 4.01 Strict doctype.")
            }
        }
        DoctypeExpectation::Html401Transitional => {
            if quirky {
                DoctypeVerdict::new(DocumentMode::Quirks, true).error(QUIRKY)
            } else if almost {
                let verdict = DoctypeVerdict::new(DocumentMode::AlmostStandards, true);
                if public_id == Some(HTML401_TRANSITIONAL_PUBLIC_ID) && system_id.is_some() {
                    if system_id == Some(HTML401_TRANSITIONAL_SYSTEM_ID) {
                        verdict
                    } else {
                        verdict.warning(WRONG_SYSTEM_ID)
                    }
                } else {
                    verdict.error("The doctype was not a non-quirky HTML 4.01 Transitional doctype.")
                }
            } else {
                DoctypeVerdict::new(DocumentMode::Standards, true)
                    .error("The doctype was not the HTML 4.01 Transitional doctype.")
            }
        }
        DoctypeExpectation::Auto => {
            let html4 = is_html4_public_id(public_id);
            if quirky {
                DoctypeVerdict::new(DocumentMode::Quirks, html4).error(QUIRKY)
            } else if almost {
                if public_id == Some(HTML401_TRANSITIONAL_PUBLIC_ID) {
                    let verdict = DoctypeVerdict::new(DocumentMode::AlmostStandards, true);
                    if system_id == Some(HTML401_TRANSITIONAL_SYSTEM_ID) {
                        verdict
                    } else {
                        verdict.warning(WRONG_SYSTEM_ID)
                    }
                } else {
                    DoctypeVerdict::new(DocumentMode::AlmostStandards, html4)
                        .error(ALMOST_STANDARDS)
                }
            } else if public_id == Some(HTML401_STRICT_PUBLIC_ID) {
                let verdict = DoctypeVerdict::new(DocumentMode::Standards, true);
                if system_id == Some(HTML401_STRICT_SYSTEM_ID) {
                    verdict
                } else {
                    verdict.warning(WRONG_SYSTEM_ID)
                }
            } else if has_ids {
                DoctypeVerdict::new(DocumentMode::Standards, html4).error(LEGACY)
            } else {
                DoctypeVerdict::new(DocumentMode::Standards, html4)
            }
        }
        DoctypeExpectation::NoDoctypeErrors => {
            let mode = if quirky {
                DocumentMode::Quirks
            } else if almost {
                DocumentMode::AlmostStandards
            } else {
                DocumentMode::Standards
            };
            DoctypeVerdict::new(mode, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html5(name: Option<&str>, public: Option<&str>, system: Option<&str>) -> DoctypeVerdict {
        classify_doctype(name, public, system, false, DoctypeExpectation::Html)
    }

    #[test]
    fn test_tables_are_sorted() {
        assert!(HTML4_PUBLIC_IDS.windows(2).all(|w| w[0] < w[1]));
        assert!(QUIRKY_PUBLIC_IDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_html5_doctype_is_standards_without_errors() {
        let verdict = html5(Some("html"), None, None);
        assert_eq!(verdict.mode, DocumentMode::Standards);
        assert!(verdict.errors.is_empty());
        assert!(!verdict.html4);
    }

    #[test]
    fn test_missing_name_and_force_quirks() {
        assert_eq!(html5(None, None, None).mode, DocumentMode::Quirks);
        let forced = classify_doctype(Some("html"), None, None, true, DoctypeExpectation::Html);
        assert_eq!(forced.mode, DocumentMode::Quirks);
        assert_eq!(forced.errors, vec![QUIRKY]);
    }

    #[test]
    fn test_quirky_public_ids_match_case_insensitively() {
        let verdict = html5(Some("HTML"), Some("-//W3C//DTD HTML 3.2 Final//EN"), None);
        assert_eq!(verdict.mode, DocumentMode::Quirks);
    }

    #[test]
    fn test_quirky_ids_match_exactly_not_by_prefix() {
        let verdict = html5(Some("html"), Some("-//W3C//DTD HTML 3.2 Final//EN//extra"), None);
        assert_eq!(verdict.mode, DocumentMode::Standards);
        assert_eq!(verdict.errors, vec![LEGACY]);
    }

    #[test]
    fn test_html401_transitional_depends_on_system_id() {
        let without = html5(Some("html"), Some(HTML401_TRANSITIONAL_PUBLIC_ID), None);
        assert_eq!(without.mode, DocumentMode::Quirks);
        let with = html5(
            Some("html"),
            Some(HTML401_TRANSITIONAL_PUBLIC_ID),
            Some(HTML401_TRANSITIONAL_SYSTEM_ID),
        );
        assert_eq!(with.mode, DocumentMode::AlmostStandards);
        assert_eq!(with.errors, vec![ALMOST_STANDARDS]);
    }

    #[test]
    fn test_ibm_system_id_is_quirky() {
        let verdict = html5(Some("html"), None, Some(IBM_XHTML1_TRANSITIONAL_SYSTEM_ID));
        assert_eq!(verdict.mode, DocumentMode::Quirks);
    }

    #[test]
    fn test_html401_strict_expectation() {
        let verdict = classify_doctype(
            Some("HTML"),
            Some(HTML401_STRICT_PUBLIC_ID),
            None,
            false,
            DoctypeExpectation::Html401Strict,
        );
        assert_eq!(verdict.mode, DocumentMode::Standards);
        assert!(verdict.errors.is_empty());
        assert_eq!(verdict.warnings, vec![WRONG_SYSTEM_ID]);
        assert!(verdict.html4);

        let html5_doctype =
            classify_doctype(Some("html"), None, None, false, DoctypeExpectation::Html401Strict);
        assert_eq!(
            html5_doctype.errors,
            vec!["The doctype was not the HTML 4.01 Strict doctype."]
        );
    }

    #[test]
    fn test_auto_detects_html4() {
        let verdict = classify_doctype(
            Some("html"),
            Some(HTML401_STRICT_PUBLIC_ID),
            Some(HTML401_STRICT_SYSTEM_ID),
            false,
            DoctypeExpectation::Auto,
        );
        assert!(verdict.html4);
        assert!(verdict.errors.is_empty() && verdict.warnings.is_empty());

        let html5_doctype = classify_doctype(Some("html"), None, None, false, DoctypeExpectation::Auto);
        assert!(!html5_doctype.html4);
    }

    #[test]
    fn test_no_doctype_errors_still_sets_mode() {
        let verdict = classify_doctype(
            Some("html"),
            Some("-//W3C//DTD XHTML 1.0 Transitional//EN"),
            None,
            false,
            DoctypeExpectation::NoDoctypeErrors,
        );
        assert_eq!(verdict.mode, DocumentMode::AlmostStandards);
        assert!(verdict.errors.is_empty());
    }
}
