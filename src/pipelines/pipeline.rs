//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// a pipeline can report what it did.
pub trait Pipeline<T> {
    fn version() -> &'static str;
    fn run(&self) -> Result<T, Error>;
}
