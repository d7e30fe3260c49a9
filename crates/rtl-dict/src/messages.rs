//! User-facing message templates.
//!
//! Every message the tool prints is assembled here so wording and the
//! severity-tag convention can be changed in one place. Tags are scanned
//! visually in terminal output, hence the leading tab.

use std::path::Path;

use crate::dictionary::Section;

pub const ERROR_TAG: &str = "\t***Error: ";
pub const SUCCESS_TAG: &str = "\t***Success: ";
pub const INFO_TAG: &str = "\t***Info: ";

pub const PREFIX_SECTION_HEADER: &str = "=======================================
            Prefixes
=======================================\n\n";

pub const SUFFIX_SECTION_HEADER: &str = "\n=======================================
            Suffixes
=======================================\n\n";

#[must_use]
pub fn no_args() -> String {
    format!("{ERROR_TAG}No input arguments were specified.")
}

#[must_use]
pub fn read_attempt(path: &Path) -> String {
    format!("{INFO_TAG}Trying to read in {}", path.display())
}

#[must_use]
pub fn file_empty(path: &Path) -> String {
    format!(
        "{INFO_TAG}The file at {} is empty... creating the dictionary from scratch",
        path.display()
    )
}

#[must_use]
pub fn not_found(section: Section, value: &str, file_name: &str) -> String {
    format!("{INFO_TAG}The {section} {value} could not be found in {file_name}")
}

#[must_use]
pub fn explanation(key: &str, explanation: &str) -> String {
    format!("{key}: {explanation}")
}
