//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a relative source path that is neither a comment nor blank
    pub fn source_entry() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_/.-]{0,20}\\.[ch]"
    }

    /// Generate a comment line
    pub fn comment_line() -> impl Strategy<Value = String> {
        "#[ -~]{0,30}"
    }

    /// Generate a line made only of spaces (possibly empty)
    pub fn blank_line() -> impl Strategy<Value = String> {
        " {0,8}"
    }

    /// Generate a valid output executable name
    pub fn executable_name() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_-]{0,20}"
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::manifest::ManifestLine;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_source_entry_generator(entry in source_entry()) {
            prop_assert_eq!(ManifestLine::classify(&entry), ManifestLine::Source(&entry));
        }

        #[test]
        fn test_comment_line_generator(line in comment_line()) {
            prop_assert_eq!(ManifestLine::classify(&line), ManifestLine::Comment);
        }

        #[test]
        fn test_blank_line_generator(line in blank_line()) {
            prop_assert_eq!(ManifestLine::classify(&line), ManifestLine::Blank);
        }

        #[test]
        fn test_executable_name_generator(name in executable_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.starts_with('-'));
        }
    }
}
