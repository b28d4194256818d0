//! Profile document loading

use std::fs;
use std::path::Path;

use crate::errors::{Result, TwinError};
use crate::profile::schema::ProfileRecord;

/// Read and parse the profile document.
///
/// A missing file or a document that is not a mapping is a fatal chunking
/// error; missing sections and fields inside a well-formed document are not.
pub fn load_profile(path: &Path) -> Result<ProfileRecord> {
    let contents = fs::read_to_string(path).map_err(|e| {
        TwinError::Chunking(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_profile(&contents)
}

/// Parse a profile document from its JSON text
pub fn parse_profile(contents: &str) -> Result<ProfileRecord> {
    serde_json::from_str(contents)
        .map_err(|e| TwinError::Chunking(format!("profile is not a valid mapping: {}", e)))
}
