/*!
# Post writing

Each post is saved as its own text file, under a directory tree
that encodes the partition, label and author of the post.

The user-facing object is [PostWriter], created once per author.
!*/
mod post_writer;
mod writertrait;
pub use post_writer::{author_dir, post_path, Post, PostWriter};
pub use writertrait::WriterTrait;
