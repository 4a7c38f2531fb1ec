//! Author metadata, decoded from input filenames.
//!
//! Each author file is named `<id>.<gender>.<age>.<industry>.<sign>.<ext>`,
//! for example `101.male.25.tech.Leo.xml`.
use std::path::Path;

use crate::error::Error;

/// Number of dot-separated components of a valid filename (extension included).
const NB_COMPONENTS: usize = 6;

/// Holds the attributes encoded in an author filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorMetadata {
    pub id: u64,
    pub gender: String,
    pub age: i32,
    pub industry: String,
    pub astrological_sign: String,
}

impl AuthorMetadata {
    /// Decode metadata from a bare filename (no directories).
    pub fn from_filename(filename: &str) -> Result<Self, Error> {
        let components: Vec<&str> = filename.split('.').collect();
        if components.len() != NB_COMPONENTS {
            return Err(Error::MalformedFilename(filename.to_string()));
        }

        let malformed = |_| Error::MalformedFilename(filename.to_string());
        let id = components[0].parse::<u64>().map_err(malformed)?;
        let age = components[2].parse::<i32>().map_err(malformed)?;

        Ok(Self {
            id,
            gender: components[1].to_string(),
            age,
            industry: components[3].to_string(),
            astrological_sign: components[4].to_string(),
        })
    }

    /// Decode metadata from the filename of `path`.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| Error::MalformedFilename(path.to_string_lossy().into_owned()))?;
        Self::from_filename(filename)
    }
}

impl TryFrom<&str> for AuthorMetadata {
    type Error = Error;
    fn try_from(filename: &str) -> Result<Self, Self::Error> {
        Self::from_filename(filename)
    }
}
