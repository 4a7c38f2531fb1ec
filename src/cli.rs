//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use blogprep::error::Error;
use blogprep::pipelines::{PrepareConfig, StructuralTags};
use blogprep::processing::Splits;

#[derive(Debug, StructOpt)]
#[structopt(name = "blogprep", about = "blog corpus preparation tool.")]
/// Holds every command that is callable by the `blogprep` command.
pub enum Blogprep {
    #[structopt(about = "Prepare a blog corpus into a text dataset")]
    Prepare(Prepare),
}

#[derive(Debug, StructOpt)]
/// Prepare command and parameters.
///
/// ```sh
/// blogprep-prepare 0.1.0
/// Prepare a blog corpus into a text dataset
///
/// USAGE:
///     blogprep prepare [FLAGS] [OPTIONS] <src> <dst>
///
/// ARGS:
///     <src>    source corpus (contains <id>.<gender>.<age>.<industry>.<sign>.xml files)
///     <dst>    prepared dataset destination
/// ```
pub struct Prepare {
    #[structopt(
        parse(from_os_str),
        help = "source corpus (contains <id>.<gender>.<age>.<industry>.<sign>.xml files)"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "prepared dataset destination")]
    pub dst: PathBuf,
    #[structopt(long = "seed", help = "partition assignment seed", default_value = "1337")]
    pub seed: u64,
    #[structopt(
        long = "training-split",
        help = "share of authors in the training partition",
        default_value = "0.8"
    )]
    pub training_split: f64,
    #[structopt(
        long = "validation-split",
        help = "share of authors in the validation partition. The rest goes to test.",
        default_value = "0.1"
    )]
    pub validation_split: f64,
    #[structopt(long = "root-tag", help = "root element name", default_value = "Blog")]
    pub root_tag: String,
    #[structopt(long = "post-tag", help = "post element name", default_value = "post")]
    pub post_tag: String,
    #[structopt(long = "date-tag", help = "date element name", default_value = "date")]
    pub date_tag: String,
    #[structopt(
        long = "keep-sources",
        help = "do not overwrite source files with their sanitized content"
    )]
    pub keep_sources: bool,
    #[structopt(
        short = "p",
        long = "parallel-writes",
        help = "write the posts of an author concurrently"
    )]
    pub parallel_writes: bool,
    #[structopt(
        long = "skip-errors",
        help = "log and skip files with malformed names or content instead of aborting"
    )]
    pub skip_errors: bool,
}

impl Prepare {
    /// Build the pipeline configuration, validating splits.
    pub fn into_config(self) -> Result<PrepareConfig, Error> {
        let splits = Splits::new(self.training_split, self.validation_split)?;
        let mut config = PrepareConfig::new(self.src, self.dst);
        config.seed = self.seed;
        config.splits = splits;
        config.tags = StructuralTags {
            root: self.root_tag,
            post: self.post_tag,
            date: self.date_tag,
        };
        config.rewrite_sources = !self.keep_sources;
        config.parallel_writes = self.parallel_writes;
        config.skip_errors = self.skip_errors;
        Ok(config)
    }
}
