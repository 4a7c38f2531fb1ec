use std::path::Path;

use crate::author::AuthorRecord;
use crate::error::Error;

/// Writes the content of a single author.
pub trait WriterTrait {
    type Item;

    fn new(dst: &Path, author: &AuthorRecord) -> Result<Self, Error>
    where
        Self: Sized;
    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
}
