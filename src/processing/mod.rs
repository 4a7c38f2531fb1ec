/*! Content processing

Structures and functions deciding where an author's content ends up.
!*/
pub mod split;

pub use split::{Partition, PartitionAssigner, Splits};
