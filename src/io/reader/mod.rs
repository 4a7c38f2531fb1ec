/*! Author file reading utilities

[source] loads raw author files, [posts] extracts posts from sanitized ones.

!*/
pub mod posts;
pub mod source;

pub use posts::Posts;
pub use source::read_lossy;
