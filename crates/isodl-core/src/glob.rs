//! Restricted glob matching for listed filenames.
//!
//! Only `*` is special: it matches any run of characters, including none.
//! Everything else, `?`, `[`, `.` and friends included, is literal. A pattern
//! must cover the whole candidate.

use std::fmt;

/// A compiled glob, reusable across candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    source: String,
    /// Literal runs between wildcards. A glob with `n` stars has `n + 1`.
    segments: Vec<String>,
}

impl GlobPattern {
    /// Compile a glob. Every string is a valid glob.
    pub fn compile(glob: &str) -> Self {
        Self {
            source: glob.to_string(),
            segments: glob.split('*').map(str::to_string).collect(),
        }
    }

    /// The glob this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True when the pattern contains at least one wildcard.
    pub fn has_wildcard(&self) -> bool {
        self.segments.len() > 1
    }

    /// Full-string match of `candidate` against the pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        let (first, rest) = match self.segments.split_first() {
            Some(split) => split,
            None => return candidate.is_empty(),
        };
        let Some((last, middle)) = rest.split_last() else {
            return candidate == first;
        };

        if candidate.len() < first.len() + last.len()
            || !candidate.starts_with(first.as_str())
            || !candidate.ends_with(last.as_str())
        {
            return false;
        }

        // Leftmost placement of each inner literal leaves the most room for
        // the ones after it.
        let mut window = &candidate[first.len()..candidate.len() - last.len()];
        for segment in middle {
            match window.find(segment.as_str()) {
                Some(pos) => window = &window[pos + segment.len()..],
                None => return false,
            }
        }
        true
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
