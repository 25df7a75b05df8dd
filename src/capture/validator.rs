/// Filename gate for IQ captures
///
/// Purely local: no network call is ever made to validate a file.

use crate::state::data::SelectedFile;

/// Supported raw-signal extensions, matched case-sensitively on the suffix
pub const RECOGNIZED_EXTENSIONS: [&str; 2] = [".iq", ".bin"];

/// A candidate that did not pass validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub name: String,
}

/// Whether a filename ends in one of the recognized extensions
pub fn is_recognized(name: &str) -> bool {
    RECOGNIZED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Accept or reject a candidate, producing a [`SelectedFile`] on success
pub fn validate(name: String, bytes: Vec<u8>) -> Result<SelectedFile, Rejected> {
    if is_recognized(&name) {
        Ok(SelectedFile::new(name, bytes))
    } else {
        Err(Rejected { name })
    }
}

/// Status text shown when a candidate is rejected
pub fn rejection_message() -> String {
    let list = RECOGNIZED_EXTENSIONS.join(" or ");
    format!("Invalid file type. Please select a {} file.", list)
}

/// Extensions without the leading dot, for file dialog filters
pub fn dialog_extensions() -> Vec<&'static str> {
    RECOGNIZED_EXTENSIONS
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect()
}
