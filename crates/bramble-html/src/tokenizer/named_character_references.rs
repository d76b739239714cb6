//! Named character reference lookup.
//!
//! [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
//!
//! "Consume the maximum number of characters possible, where the consumed
//! characters are one of the identifiers in the first column of the named
//! character references table."
//!
//! The table holds all 2,231 names. Matching does not build a trie: it keeps
//! a `[lo, hi]` window over the sorted table and narrows it from both ends
//! as each character arrives, remembering the last entry that was matched
//! in full. That entry is the longest match, which is why `&notit;` yields
//! `¬` followed by `it;` rather than a truncated `&notin;`.

pub use super::entity_table::NAMED_REFERENCES;

/// Exact lookup of a name (without the leading `&`, with its `;` if any).
#[must_use]
pub fn resolve(name: &str) -> Option<&'static str> {
    NAMED_REFERENCES
        .binary_search_by(|(n, _)| n.as_bytes().cmp(name.as_bytes()))
        .ok()
        .map(|index| NAMED_REFERENCES[index].1)
}

/// A longest complete match found by [`EntityMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMatch {
    index: usize,
    /// Number of characters after `&` that belong to the match.
    pub length: usize,
}

impl EntityMatch {
    /// The matched name, without `&`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        NAMED_REFERENCES[self.index].0
    }

    /// The replacement text.
    #[must_use]
    pub fn value(&self) -> &'static str {
        NAMED_REFERENCES[self.index].1
    }

    /// Whether the matched name ends with `;`.
    #[must_use]
    pub fn ends_with_semicolon(&self) -> bool {
        self.name().ends_with(';')
    }
}

/// Incremental longest-prefix matcher over [`NAMED_REFERENCES`].
///
/// Feed it the characters after `&` one at a time. It survives across
/// `feed` calls of the tokenizer, so a reference split over two input
/// chunks matches the same way as an unsplit one.
#[derive(Debug, Clone)]
pub struct EntityMatcher {
    lo: usize,
    /// Exclusive upper bound of the window.
    hi: usize,
    column: usize,
    candidate: Option<EntityMatch>,
    exhausted: bool,
}

impl Default for EntityMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityMatcher {
    /// A matcher whose window covers the whole table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lo: 0,
            hi: NAMED_REFERENCES.len(),
            column: 0,
            candidate: None,
            exhausted: false,
        }
    }

    /// Start over.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    /// Offer the next character.
    ///
    /// Returns `true` if `c` extends some name in the table and was
    /// consumed. Returns `false` once no name can match; `c` is then not
    /// part of the reference and must be reconsumed by the caller.
    pub fn feed(&mut self, c: char) -> bool {
        if self.exhausted {
            return false;
        }
        let col = self.column;
        let c = u32::from(c);

        // Narrow from the top: drop names whose character at `col` sorts
        // after `c`.
        while self.hi > 0 {
            let name = NAMED_REFERENCES[self.hi - 1].0.as_bytes();
            if col == name.len() {
                break;
            }
            if c < u32::from(name[col]) {
                self.hi -= 1;
            } else {
                break;
            }
        }

        // Narrow from the bottom. A name that ends exactly here is the
        // longest complete match so far.
        loop {
            if self.hi <= self.lo {
                self.exhausted = true;
                return false;
            }
            let name = NAMED_REFERENCES[self.lo].0.as_bytes();
            if col == name.len() {
                self.candidate = Some(EntityMatch {
                    index: self.lo,
                    length: col,
                });
                self.lo += 1;
            } else if c > u32::from(name[col]) {
                self.lo += 1;
            } else {
                break;
            }
        }

        if self.hi <= self.lo || c != u32::from(NAMED_REFERENCES[self.lo].0.as_bytes()[col]) {
            self.exhausted = true;
            return false;
        }
        self.column += 1;
        true
    }

    /// Close the match at end of input, recording a name that ended on the
    /// last consumed character.
    pub fn finish(&mut self) {
        if self.exhausted {
            return;
        }
        self.exhausted = true;
        if self.lo < self.hi && NAMED_REFERENCES[self.lo].0.len() == self.column {
            self.candidate = Some(EntityMatch {
                index: self.lo,
                length: self.column,
            });
        }
    }

    /// The longest complete match seen so far.
    #[must_use]
    pub const fn candidate(&self) -> Option<EntityMatch> {
        self.candidate
    }

    /// Number of characters consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.column
    }

    /// Whether no further character can be consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Option<EntityMatch>, usize) {
        let mut matcher = EntityMatcher::new();
        for c in input.chars() {
            if !matcher.feed(c) {
                return (matcher.candidate(), matcher.consumed());
            }
        }
        matcher.finish();
        (matcher.candidate(), matcher.consumed())
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(
            NAMED_REFERENCES
                .windows(2)
                .all(|w| w[0].0.as_bytes() < w[1].0.as_bytes())
        );
        assert_eq!(NAMED_REFERENCES.len(), 2231);
    }

    #[test]
    fn test_longest_match_wins_over_partial_longer_name() {
        let (found, consumed) = run("notit;");
        let found = found.map(|m| (m.name(), m.length));
        assert_eq!(found, Some(("not", 3)));
        // "noti" is still a prefix of "notin;", so four characters were consumed.
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_full_match_with_semicolon() {
        let (found, _) = run("notin;x");
        assert_eq!(found.map(|m| m.value()), Some("\u{2209}"));
        assert!(found.is_some_and(|m| m.ends_with_semicolon()));
    }

    #[test]
    fn test_match_at_end_of_input() {
        let (found, consumed) = run("amp");
        assert_eq!(found.map(|m| m.name()), Some("amp"));
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_no_match() {
        let (found, consumed) = run("zzz;");
        assert!(found.is_none());
        // "z" starts "zacute;" and friends, nothing starts with "zz".
        assert_eq!(consumed, 1);

        let (found, consumed) = run("123;");
        assert!(found.is_none());
        assert_eq!(consumed, 0);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("lt;"), Some("<"));
        assert_eq!(resolve("fjlig;"), Some("fj"));
        assert_eq!(resolve("lt"), Some("<"));
        assert_eq!(resolve("apos"), None);
    }
}
