//! Parser configuration.
//!
//! Most switches decide what happens to input that HTML accepts but that
//! cannot be carried over losslessly into an XML 1.0 infoset. Every policy
//! defaults to [`XmlViolationPolicy::Allow`], which parses like a browser.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How to treat a construct that has no XML 1.0 equivalent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum XmlViolationPolicy {
    /// Keep the construct as HTML parses it.
    #[default]
    Allow,
    /// Rewrite it into something XML can express and warn.
    AlterInfoset,
    /// Abort the parse.
    Fatal,
}

/// Which doctype the document is expected to carry.
///
/// The expectation decides which doctypes draw an error and whether
/// HTML4-only errors are reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DoctypeExpectation {
    /// `<!DOCTYPE html>`.
    #[default]
    Html,
    /// The HTML 4.01 Strict doctype.
    #[strum(serialize = "html401-strict")]
    #[serde(rename = "html401-strict")]
    Html401Strict,
    /// The HTML 4.01 Transitional doctype.
    #[strum(serialize = "html401-transitional")]
    #[serde(rename = "html401-transitional")]
    Html401Transitional,
    /// HTML 4.01 if the document says so, otherwise HTML5.
    Auto,
    /// Report nothing about the doctype.
    #[strum(to_string = "none", serialize = "no-doctype-errors")]
    #[serde(rename = "none", alias = "no-doctype-errors")]
    NoDoctypeErrors,
}

/// Options for one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Which doctype is expected.
    pub doctype_expectation: DoctypeExpectation,
    /// `--` inside comments.
    pub comment_policy: XmlViolationPolicy,
    /// Control characters and non-characters in text and attribute values.
    pub content_non_xml_char_policy: XmlViolationPolicy,
    /// U+000B and U+000C in text and attribute values.
    pub content_space_policy: XmlViolationPolicy,
    /// `xmlns="http://www.w3.org/1999/xhtml"` on `html`.
    pub xmlns_policy: XmlViolationPolicy,
    /// Any other `xmlns` or `xmlns:*` attribute.
    pub bogus_xmlns_policy: XmlViolationPolicy,
    /// Element and attribute names that are not NCNames.
    pub name_policy: XmlViolationPolicy,
    /// Whether `noscript` content is raw text.
    pub scripting_enabled: bool,
    /// Whether comments reach the tree.
    pub report_comments: bool,
    /// Whether the doctype reaches the tree.
    pub report_doctype: bool,
    /// In HTML 4 mode, fill in boolean attribute values and lowercase
    /// case-insensitive values the way XHTML 1.0 schemas expect.
    pub html4_mode_compatible_with_xhtml1_schemata: bool,
    /// Parse a fragment as if it were the content of this element.
    pub fragment_context: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            doctype_expectation: DoctypeExpectation::Html,
            comment_policy: XmlViolationPolicy::Allow,
            content_non_xml_char_policy: XmlViolationPolicy::Allow,
            content_space_policy: XmlViolationPolicy::Allow,
            xmlns_policy: XmlViolationPolicy::Allow,
            bogus_xmlns_policy: XmlViolationPolicy::Allow,
            name_policy: XmlViolationPolicy::Allow,
            scripting_enabled: false,
            report_comments: true,
            report_doctype: true,
            html4_mode_compatible_with_xhtml1_schemata: false,
            fragment_context: None,
        }
    }
}

impl ParserConfig {
    /// Every XML policy set to [`XmlViolationPolicy::Fatal`].
    #[must_use]
    pub fn strict_xml() -> Self {
        Self::default().with_xml_policies(XmlViolationPolicy::Fatal)
    }

    /// Every XML policy set to [`XmlViolationPolicy::AlterInfoset`].
    #[must_use]
    pub fn alter_infoset() -> Self {
        Self::default().with_xml_policies(XmlViolationPolicy::AlterInfoset)
    }

    /// Set all six XML policies at once.
    #[must_use]
    pub const fn with_xml_policies(mut self, policy: XmlViolationPolicy) -> Self {
        self.comment_policy = policy;
        self.content_non_xml_char_policy = policy;
        self.content_space_policy = policy;
        self.xmlns_policy = policy;
        self.bogus_xmlns_policy = policy;
        self.name_policy = policy;
        self
    }

    /// Set the expected doctype.
    #[must_use]
    pub const fn with_doctype_expectation(mut self, expectation: DoctypeExpectation) -> Self {
        self.doctype_expectation = expectation;
        self
    }

    /// Set the policy for `--` inside comments.
    #[must_use]
    pub const fn with_comment_policy(mut self, policy: XmlViolationPolicy) -> Self {
        self.comment_policy = policy;
        self
    }

    /// Set the policy for characters XML forbids.
    #[must_use]
    pub const fn with_content_non_xml_char_policy(mut self, policy: XmlViolationPolicy) -> Self {
        self.content_non_xml_char_policy = policy;
        self
    }

    /// Set the policy for U+000B and U+000C.
    #[must_use]
    pub const fn with_content_space_policy(mut self, policy: XmlViolationPolicy) -> Self {
        self.content_space_policy = policy;
        self
    }

    /// Set the policy for the XHTML `xmlns` attribute on `html`.
    #[must_use]
    pub const fn with_xmlns_policy(mut self, policy: XmlViolationPolicy) -> Self {
        self.xmlns_policy = policy;
        self
    }

    /// Set the policy for other `xmlns` attributes.
    #[must_use]
    pub const fn with_bogus_xmlns_policy(mut self, policy: XmlViolationPolicy) -> Self {
        self.bogus_xmlns_policy = policy;
        self
    }

    /// Set the policy for names that are not NCNames.
    #[must_use]
    pub const fn with_name_policy(mut self, policy: XmlViolationPolicy) -> Self {
        self.name_policy = policy;
        self
    }

    /// Treat `noscript` as raw text.
    #[must_use]
    pub const fn with_scripting(mut self, enabled: bool) -> Self {
        self.scripting_enabled = enabled;
        self
    }

    /// Whether comments are passed to the tree.
    #[must_use]
    pub const fn with_report_comments(mut self, report: bool) -> Self {
        self.report_comments = report;
        self
    }

    /// Whether the doctype is passed to the tree.
    #[must_use]
    pub const fn with_report_doctype(mut self, report: bool) -> Self {
        self.report_doctype = report;
        self
    }

    /// Enable the XHTML 1.0 schema compatibility rewrites in HTML 4 mode.
    #[must_use]
    pub const fn with_html4_xhtml1_compat(mut self, enabled: bool) -> Self {
        self.html4_mode_compatible_with_xhtml1_schemata = enabled;
        self
    }

    /// Parse as a fragment inside `context` (an HTML element name).
    #[must_use]
    pub fn with_fragment_context(mut self, context: impl Into<String>) -> Self {
        self.fragment_context = Some(context.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_policy_names() {
        assert_eq!(XmlViolationPolicy::AlterInfoset.to_string(), "alter-infoset");
        assert_eq!(
            XmlViolationPolicy::from_str("fatal").ok(),
            Some(XmlViolationPolicy::Fatal)
        );
        assert_eq!(
            DoctypeExpectation::from_str("html401-strict").ok(),
            Some(DoctypeExpectation::Html401Strict)
        );
        assert_eq!(
            DoctypeExpectation::from_str("none").ok(),
            Some(DoctypeExpectation::NoDoctypeErrors)
        );
    }

    #[test]
    fn test_json_round_trip_with_defaults() {
        let config: ParserConfig =
            serde_json::from_str(r#"{"comment_policy": "fatal", "scripting_enabled": true}"#)
                .unwrap();
        assert_eq!(config.comment_policy, XmlViolationPolicy::Fatal);
        assert!(config.scripting_enabled);
        assert_eq!(config.name_policy, XmlViolationPolicy::Allow);
        assert!(config.report_comments);
    }

    #[test]
    fn test_strict_xml() {
        let config = ParserConfig::strict_xml();
        assert_eq!(config.bogus_xmlns_policy, XmlViolationPolicy::Fatal);
        assert_eq!(config.doctype_expectation, DoctypeExpectation::Html);
    }
}
