//! # blogprep
//!
//! Prepares a blog authorship corpus for age-bucket text classification.
//!
//! Each input file holds the posts of one author, and is named
//! `<id>.<gender>.<age>.<industry>.<sign>.xml`. Every post ends up in its own file:
//!
//! ```text
//! <dst>/<training_ds|validation_ds|test_ds>/<10s|20s|30s>/<id>/<n>.txt
//! ```
//!
//! ## Getting started
//!
//! ```sh
//! blogprep 0.1.0
//! blog corpus preparation tool.
//!
//! USAGE:
//!     blogprep <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     help       Prints this message or the help of the given subcommand(s)
//!     prepare    Prepare a blog corpus into a text dataset
//! ```
//!
//! Verbosity is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`).
use structopt::StructOpt;

use blogprep::error::Error;
use blogprep::pipelines::{Pipeline, PrepareDataset};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Blogprep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Blogprep::Prepare(p) => {
            let config = p.into_config()?;
            let summary = PrepareDataset::new(config).run()?;
            info!("{:#?}", summary);
        }
    };
    Ok(())
}
