//! Numeric character references.
//!
//! [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
//!
//! The digits are accumulated by [`NumericReference`] and the resulting
//! number is mapped to a character by [`resolve_numeric`]. Policy-dependent
//! checks (XML 1.0 legality, private use) are left to the tokenizer, which
//! knows the configured policies.

/// The value the accumulator saturates at. It is outside the Unicode range,
/// so further digits cannot bring it back into range.
pub const OUT_OF_RANGE: u32 = 0x11_0000;

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// "If the number is one of the numbers in the first column of the
/// following table, then find the row with that number in the first
/// column, and set the character reference code to the number in the
/// second column."
///
/// Indexed by `value - 0x80`. The five undefined Windows-1252 bytes map to
/// themselves.
const WINDOWS_1252: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

/// Decimal or hexadecimal digit accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericReference {
    value: u32,
    hex: bool,
    seen_digits: bool,
}

impl NumericReference {
    /// A fresh accumulator for `&#` (decimal) or `&#x` (hex).
    #[must_use]
    pub const fn new(hex: bool) -> Self {
        Self {
            value: 0,
            hex,
            seen_digits: false,
        }
    }

    /// Offer the next character. Returns `false` if `c` is not a digit in
    /// this base.
    ///
    /// "Multiply the character reference code by 16 (or 10) ... Add a
    /// numeric version of the current input character"
    pub fn push(&mut self, c: char) -> bool {
        let radix = if self.hex { 16 } else { 10 };
        let Some(digit) = c.to_digit(radix) else {
            return false;
        };
        self.seen_digits = true;
        if self.value < OUT_OF_RANGE {
            self.value = self
                .value
                .saturating_mul(radix)
                .saturating_add(digit)
                .min(OUT_OF_RANGE);
        }
        true
    }

    /// The accumulated value, clamped at [`OUT_OF_RANGE`].
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Whether this is a hexadecimal reference.
    #[must_use]
    pub const fn is_hex(&self) -> bool {
        self.hex
    }

    /// Whether at least one digit was consumed.
    #[must_use]
    pub const fn has_digits(&self) -> bool {
        self.seen_digits
    }
}

/// The character a numeric reference resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOutcome {
    /// The value is a Unicode scalar that needs no remapping.
    Char(char),
    /// The value was remapped or replaced, with a parse error.
    Replaced {
        /// The substitute character.
        ch: char,
        /// The parse error to report.
        error: &'static str,
    },
}

impl NumericOutcome {
    /// The character to emit.
    #[must_use]
    pub const fn ch(&self) -> char {
        match *self {
            Self::Char(ch) | Self::Replaced { ch, .. } => ch,
        }
    }
}

/// Map a numeric reference value to a character.
#[must_use]
pub fn resolve_numeric(value: u32) -> NumericOutcome {
    match value {
        // "If the number is 0x00, then this is a null-character-reference
        // parse error. Set the character reference code to 0xFFFD."
        0 => NumericOutcome::Replaced {
            ch: '\u{FFFD}',
            error: "Character reference expands to U+0000.",
        },
        0x0D => NumericOutcome::Replaced {
            ch: '\n',
            error: "A numeric character reference expanded to carriage return.",
        },
        // "If the number is a control ... 0x80 to 0x9F"
        0x80..=0x9F => NumericOutcome::Replaced {
            ch: WINDOWS_1252[(value - 0x80) as usize],
            error: "A numeric character reference expanded to the C1 controls range.",
        },
        // "If the number is a surrogate, then this is a
        // surrogate-character-reference parse error."
        0xD800..=0xDFFF => NumericOutcome::Replaced {
            ch: '\u{FFFD}',
            error: "Character reference expands to a surrogate.",
        },
        // "If the number is greater than 0x10FFFF, then this is a
        // character-reference-outside-unicode-range parse error."
        _ => char::from_u32(value).map_or(
            NumericOutcome::Replaced {
                ch: '\u{FFFD}',
                error: "Character reference outside the permissible Unicode range.",
            },
            NumericOutcome::Char,
        ),
    }
}

/// A code point ending in FFFE or FFFF in any plane.
///
/// U+FDD0 to U+FDEF are not included.
#[must_use]
pub const fn is_noncharacter(c: char) -> bool {
    (c as u32 & 0xFFFE) == 0xFFFE
}

/// Whether the character is in one of the three Private Use Areas.
#[must_use]
pub const fn is_private_use(c: char) -> bool {
    matches!(c as u32, 0xE000..=0xF8FF | 0xF_0000..=0xF_FFFD | 0x10_0000..=0x10_FFFD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulate(hex: bool, digits: &str) -> NumericReference {
        let mut reference = NumericReference::new(hex);
        for c in digits.chars() {
            assert!(reference.push(c));
        }
        reference
    }

    #[test]
    fn test_decimal_and_hex_accumulation() {
        assert_eq!(accumulate(false, "65").value(), 65);
        assert_eq!(accumulate(true, "1F600").value(), 0x1F600);
        assert!(!NumericReference::new(false).push('a'));
        assert!(!NumericReference::new(false).has_digits());
    }

    #[test]
    fn test_overflow_clamps_instead_of_wrapping() {
        let reference = accumulate(false, "99999999999");
        assert_eq!(reference.value(), OUT_OF_RANGE);
        assert_eq!(resolve_numeric(reference.value()).ch(), '\u{FFFD}');

        // 2^32 + 65 would wrap to 'A'.
        let reference = accumulate(false, "4294967361");
        assert_eq!(reference.value(), OUT_OF_RANGE);
    }

    #[test]
    fn test_windows_1252_remap() {
        assert_eq!(resolve_numeric(0x80).ch(), '\u{20AC}');
        assert_eq!(resolve_numeric(0x9F).ch(), '\u{0178}');
        assert_eq!(resolve_numeric(0x81).ch(), '\u{0081}');
        assert!(matches!(resolve_numeric(0x80), NumericOutcome::Replaced { .. }));
    }

    #[test]
    fn test_replacements() {
        assert_eq!(resolve_numeric(0).ch(), '\u{FFFD}');
        assert_eq!(resolve_numeric(0x0D).ch(), '\n');
        assert_eq!(resolve_numeric(0xD800).ch(), '\u{FFFD}');
        assert_eq!(resolve_numeric(0x41), NumericOutcome::Char('A'));
    }

    #[test]
    fn test_character_classes() {
        assert!(is_noncharacter('\u{FFFE}'));
        assert!(is_noncharacter('\u{1FFFF}'));
        assert!(!is_noncharacter('\u{FDD0}'));
        assert!(!is_noncharacter('\u{FFFD}'));
        assert!(is_private_use('\u{E000}'));
        assert!(!is_private_use('a'));
    }
}
