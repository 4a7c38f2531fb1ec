/*!
# IO utilities

Author file loading and per-post saving.
!*/
pub mod reader;
pub mod writer;
pub use reader::Posts;
pub use writer::{Post, PostWriter, WriterTrait};
