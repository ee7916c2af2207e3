//! Nickname table loading and lookup.
//!
//! This module provides the [`NicknameTable`] type for resolving roster
//! names to canonical display names from a YAML configuration file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{RosterError, RosterResult};

/// Maps roster names to canonical display names.
///
/// Keys are normalized (uppercased, whitespace stripped) so lookups match
/// the roster's loose spelling of names. The table is loaded once before
/// processing begins and is read-only afterwards; an employee whose name has
/// no entry is silently excluded from the converted roster.
///
/// # File Format
///
/// A flat YAML mapping from roster name to display name:
///
/// ```text
/// Cheung Ka Wui: Wui
/// Chan Tai Man: Ming
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::NicknameTable;
///
/// let nicknames = NicknameTable::load("config/nicknames.yaml")?;
/// assert_eq!(nicknames.display_name("CHEUNG KA WUI"), Some("Wui"));
/// # Ok::<(), roster_engine::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NicknameTable {
    names: HashMap<String, String>,
}

impl NicknameTable {
    /// Loads the table from a YAML file.
    ///
    /// Failure here is fatal to the whole run: no roster can be produced
    /// without name resolution, so the caller must abort before any row is
    /// processed.
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let entries: HashMap<String, String> =
            serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self::from_entries(entries))
    }

    /// Builds a table directly from (roster name, display name) pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let names = entries
            .into_iter()
            .map(|(name, display)| (normalize_key(&name), display))
            .collect();
        Self { names }
    }

    /// Resolves a roster name to its canonical display name.
    pub fn display_name(&self, name: &str) -> Option<&str> {
        self.names.get(&normalize_key(name)).map(String::as_str)
    }

    /// Returns true if the roster name has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.display_name(name).is_some()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Uppercases and strips all whitespace so lookups survive the roster's
/// inconsistent spacing and casing.
fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn table() -> NicknameTable {
        NicknameTable::from_entries([
            ("Cheung Ka Wui".to_string(), "Wui".to_string()),
            ("Chan Tai Man".to_string(), "Ming".to_string()),
        ])
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let table = table();
        assert_eq!(table.display_name("Cheung Ka Wui"), Some("Wui"));
        assert_eq!(table.display_name("cheung ka wui"), Some("Wui"));
        assert_eq!(table.display_name("CHEUNGKAWUI"), Some("Wui"));
        assert_eq!(table.display_name("  Chan  Tai  Man  "), Some("Ming"));
    }

    #[test]
    fn test_unknown_name_has_no_entry() {
        let table = table();
        assert_eq!(table.display_name("Nobody Here"), None);
        assert!(!table.contains("Nobody Here"));
    }

    #[test]
    fn test_len_and_is_empty() {
        assert_eq!(table().len(), 2);
        assert!(!table().is_empty());
        assert!(NicknameTable::from_entries([]).is_empty());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Cheung Ka Wui: Wui").unwrap();
        writeln!(file, "Chan Tai Man: Ming").unwrap();

        let table = NicknameTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.display_name("chan tai man"), Some("Ming"));
    }

    #[test]
    fn test_load_missing_file_is_config_not_found() {
        let result = NicknameTable::load("/nonexistent/nicknames.yaml");
        match result {
            Err(RosterError::ConfigNotFound { path }) => {
                assert!(path.contains("nicknames.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not: a: flat: mapping").unwrap();

        let result = NicknameTable::load(file.path());
        assert!(matches!(
            result,
            Err(RosterError::ConfigParseError { .. })
        ));
    }
}
