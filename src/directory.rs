//! Static directory of canonical law-firm names
//!
//! The directory is loaded once at start-up and is read-only afterwards.
//! Lookups normalise input (trim + lowercase) and scan the list linearly,
//! which is plenty for a few hundred names.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default number of suggestions returned by [`FirmDirectory::get_firm_suggestions`]
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Firm list shipped with the binary
const BUILTIN_FIRMS: &str = include_str!("../data/firms.txt");

/// Errors raised while loading a directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("firm directory is empty")]
    Empty,
    #[error("failed to read firm directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable, ordered list of canonical firm names
#[derive(Debug, Clone)]
pub struct FirmDirectory {
    /// Names in their authoritative spelling, in load order
    firms: Vec<String>,
    /// Lower-cased copy of `firms`, same indices
    normalized: Vec<String>,
}

impl FirmDirectory {
    /// Build a directory from a list of names.
    ///
    /// Names are trimmed and blank names are skipped. Duplicates are kept as-is.
    pub fn new<I, S>(names: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let firms: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if firms.is_empty() {
            return Err(DirectoryError::Empty);
        }

        let normalized = firms.iter().map(|name| name.to_lowercase()).collect();
        Ok(Self { firms, normalized })
    }

    /// Parse a directory from text, one firm per line; `#` starts a comment line
    pub fn parse(text: &str) -> Result<Self, DirectoryError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Load a directory from a data file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::parse(&text)?;
        tracing::info!(
            "Loaded {} firms from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// The directory embedded in the binary
    pub fn builtin() -> Result<Self, DirectoryError> {
        Self::parse(BUILTIN_FIRMS)
    }

    pub fn len(&self) -> usize {
        self.firms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.firms.is_empty()
    }

    /// True iff `name` equals a directory entry, ignoring case and surrounding whitespace
    pub fn is_valid_firm(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Resolve a user-typed name to the directory's spelling
    pub fn get_exact_firm_name(&self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.firms[idx].clone())
    }

    /// Suggest firms for a partial name.
    ///
    /// Entries starting with the input come first, then entries that only
    /// contain it. Each group keeps directory order. At most
    /// `max_suggestions` names are returned.
    pub fn get_firm_suggestions(&self, input: &str, max_suggestions: usize) -> Vec<String> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut prefix = Vec::new();
        let mut contains = Vec::new();
        for (firm, lower) in self.firms.iter().zip(&self.normalized) {
            if lower.starts_with(&needle) {
                prefix.push(firm);
            } else if lower.contains(&needle) {
                contains.push(firm);
            }
        }

        prefix
            .into_iter()
            .chain(contains)
            .take(max_suggestions)
            .cloned()
            .collect()
    }

    /// Copy of the whole directory
    pub fn get_all_firms(&self) -> Vec<String> {
        self.firms.clone()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.normalized.iter().position(|firm| *firm == needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixture() -> FirmDirectory {
        FirmDirectory::new([
            "Allen & Overy",
            "Clifford Chance",
            "Abc Legal",
            "Linklaters",
            "Xabc Partners",
            "Abcd & Co",
            "Slaughter and May",
            "The ABC Group",
        ])
        .unwrap()
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_trims_and_skips_blank_names() {
            let dir = FirmDirectory::new(["  Linklaters ", "", "   ", "Ashurst"]).unwrap();
            assert_eq!(dir.get_all_firms(), vec!["Linklaters", "Ashurst"]);
        }

        #[test]
        fn test_new_rejects_empty_list() {
            let result = FirmDirectory::new(Vec::<String>::new());
            assert!(matches!(result, Err(DirectoryError::Empty)));
        }

        #[test]
        fn test_parse_ignores_comments() {
            let dir = FirmDirectory::parse("# header\nLinklaters\n\n  # note\nAshurst\n").unwrap();
            assert_eq!(dir.len(), 2);
        }

        #[test]
        fn test_parse_only_comments_is_empty() {
            assert!(matches!(
                FirmDirectory::parse("# nothing here\n"),
                Err(DirectoryError::Empty)
            ));
        }

        #[test]
        fn test_builtin_loads() {
            let dir = FirmDirectory::builtin().unwrap();
            assert!(!dir.is_empty());
            assert!(dir.is_valid_firm("Allen & Overy"));
        }

        #[test]
        fn test_load_missing_file_is_io_error() {
            let result = FirmDirectory::load("/definitely/not/here/firms.txt");
            assert!(matches!(result, Err(DirectoryError::Io { .. })));
        }

        #[test]
        fn test_load_from_file() {
            let path = std::env::temp_dir().join(format!("firms-{}.txt", uuid::Uuid::new_v4()));
            fs::write(&path, "Linklaters\nAshurst\n").unwrap();
            let dir = FirmDirectory::load(&path).unwrap();
            fs::remove_file(&path).ok();
            assert_eq!(dir.get_all_firms(), vec!["Linklaters", "Ashurst"]);
        }
    }

    mod matching {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_is_valid_firm_ignores_case_and_whitespace() {
            let dir = fixture();
            assert!(dir.is_valid_firm("allen & overy"));
            assert!(dir.is_valid_firm("  CLIFFORD CHANCE  "));
        }

        #[test]
        fn test_is_valid_firm_requires_full_match() {
            let dir = fixture();
            assert!(!dir.is_valid_firm("Allen"));
            assert!(!dir.is_valid_firm("Allen & Overy LLP"));
        }

        #[test]
        fn test_is_valid_firm_empty_input() {
            let dir = fixture();
            assert!(!dir.is_valid_firm(""));
            assert!(!dir.is_valid_firm("   "));
        }

        #[test]
        fn test_get_exact_firm_name_round_trips_every_entry() {
            let dir = fixture();
            for firm in dir.get_all_firms() {
                assert_eq!(dir.get_exact_firm_name(&firm.to_lowercase()), Some(firm));
            }
        }

        #[test]
        fn test_get_exact_firm_name_no_match() {
            let dir = fixture();
            assert_eq!(dir.get_exact_firm_name("Unknown Law LLP"), None);
            assert_eq!(dir.get_exact_firm_name(""), None);
        }
    }

    mod suggestions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_input_has_no_suggestions() {
            let dir = fixture();
            assert!(dir.get_firm_suggestions("", 10).is_empty());
            assert!(dir.get_firm_suggestions("   ", 10).is_empty());
        }

        #[test]
        fn test_prefix_matches_rank_before_substring_matches() {
            let dir = fixture();
            assert_eq!(
                dir.get_firm_suggestions("abc", 10),
                vec!["Abc Legal", "Abcd & Co", "Xabc Partners", "The ABC Group"]
            );
        }

        #[test]
        fn test_truncates_to_max() {
            let dir = fixture();
            let suggestions = dir.get_firm_suggestions("abc", 3);
            assert_eq!(suggestions, vec!["Abc Legal", "Abcd & Co", "Xabc Partners"]);
        }

        #[test]
        fn test_truncation_prefers_prefix_group() {
            let dir = fixture();
            assert_eq!(
                dir.get_firm_suggestions("abc", 2),
                vec!["Abc Legal", "Abcd & Co"]
            );
        }

        #[test]
        fn test_input_is_normalized() {
            let dir = fixture();
            assert_eq!(dir.get_firm_suggestions("  LINK ", 10), vec!["Linklaters"]);
        }

        #[test]
        fn test_zero_max_returns_nothing() {
            let dir = fixture();
            assert!(dir.get_firm_suggestions("a", 0).is_empty());
        }
    }

    #[test]
    fn test_get_all_firms_is_a_copy() {
        let dir = fixture();
        let mut firms = dir.get_all_firms();
        firms.clear();
        assert_eq!(dir.len(), 8);
        assert!(dir.is_valid_firm("Linklaters"));
    }
}
