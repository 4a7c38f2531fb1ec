/*! Content transformers.

Transforms raw author files before they are parsed.

!*/

mod sanitize;
mod transform;

pub use sanitize::Sanitizer;
pub use transform::Transform;
