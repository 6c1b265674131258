//! # Wordcrawl
//!
//! Builds vocabulary and collocation tables from a sequentially indexed text archive.
//!
//! ## Getting started
//!
//! ```sh
//! wordcrawl 0.1.0
//! incremental vocabulary and collocation builder.
//!
//! USAGE:
//!     wordcrawl <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     crawl      Crawl the archive, resuming from the checkpoint if any
//!     help       Prints this message or the help of the given subcommand(s)
//!     inspect    Summarize a checkpoint
//! ```
//!
//! Logging verbosity is set through `RUST_LOG` (e.g. `RUST_LOG=info wordcrawl crawl`).
use structopt::StructOpt;

#[macro_use]
extern crate log;

use wordcrawl::cli;
use wordcrawl::error;
use wordcrawl::io::CheckpointStore;
use wordcrawl::pipelines::{Crawler, Pipeline, Summary};

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Wordcrawl::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Wordcrawl::Crawl(c) => {
            let config = c.into_config()?;
            let crawler = Crawler::with_http(config)?;
            let report = crawler.run()?;
            info!(
                "{} merged | {} not found | {} forbidden | {} unavailable | {} parse failures",
                report.merged,
                report.not_found,
                report.forbidden,
                report.unavailable,
                report.parse_failed
            );
        }

        cli::Wordcrawl::Inspect(i) => {
            let tables = CheckpointStore::new(&i.checkpoint_dir).load()?;
            let summary = Summary::new(&tables, i.top);
            if i.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{} words | {} collocations | {} sources",
                    summary.words, summary.collocations, summary.sources
                );
                for row in &summary.top_words {
                    println!(
                        "{}\t{}\t{}\t{}",
                        row.word,
                        row.pos,
                        row.lang,
                        row.unique_frequency.unwrap_or_default()
                    );
                }
            }
        }
    };
    Ok(())
}
