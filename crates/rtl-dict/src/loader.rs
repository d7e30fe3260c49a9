//! Reads `rtl_dictionary.json` into a [`Dictionary`].
//!
//! A missing or unreadable file is fatal and propagated to the caller. A
//! file that reads fine but does not parse as the two-section JSON shape
//! (including a genuinely empty file) is recovered locally by substituting
//! the built-in defaults; [`DictionarySource`] tells the caller which of
//! the two happened so it can report the fallback.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};

/// Fixed name of the backing file.
pub const DICTIONARY_FILE_NAME: &str = "rtl_dictionary.json";

/// Where the loaded dictionary actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionarySource {
    File,
    BuiltinFallback,
}

#[derive(Debug)]
pub struct LoadedDictionary {
    pub dictionary: Dictionary,
    pub source: DictionarySource,
}

/// Resolve the full path of the dictionary file. `dir` overrides the
/// directory component; the default is the current working directory.
#[must_use]
pub fn dictionary_path(dir: Option<&Path>) -> PathBuf {
    dir.unwrap_or_else(|| Path::new(".")).join(DICTIONARY_FILE_NAME)
}

/// Load the dictionary at `path`.
///
/// # Errors
///
/// Returns [`Error::FileAccess`] if the file cannot be read at all. Parse
/// failures are not errors; they fall back to [`Dictionary::builtin`].
pub fn load(path: &Path) -> Result<LoadedDictionary> {
    let contents = fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    match serde_json::from_str::<Dictionary>(&contents) {
        Ok(dictionary) => Ok(LoadedDictionary {
            dictionary,
            source: DictionarySource::File,
        }),
        Err(err) => {
            tracing::warn!(
                "dictionary at {} is empty or not valid JSON ({err}), using built-in defaults",
                path.display()
            );
            Ok(LoadedDictionary {
                dictionary: Dictionary::builtin(),
                source: DictionarySource::BuiltinFallback,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_path_joins_with_separator() {
        let path = dictionary_path(Some(Path::new("/some/dir")));
        assert_eq!(path, Path::new("/some/dir").join(DICTIONARY_FILE_NAME));
        // No raw concatenation: the directory name must stay intact.
        assert!(path.to_string_lossy().contains("/some/dir/"));
    }

    #[test]
    fn test_dictionary_path_defaults_to_cwd() {
        let path = dictionary_path(None);
        assert_eq!(path, Path::new(".").join(DICTIONARY_FILE_NAME));
    }
}
