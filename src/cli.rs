//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;

use crate::error::Error;
use crate::fetch::{Backoff, UrlTemplate};
use crate::pipelines::{CrawlConfig, DEFAULT_TEMPLATES};

#[derive(Debug, StructOpt)]
#[structopt(name = "wordcrawl", about = "incremental vocabulary and collocation builder.")]
/// Holds every command that is callable by the `wordcrawl` command.
pub enum Wordcrawl {
    #[structopt(about = "Crawl the archive, resuming from the checkpoint if any")]
    Crawl(Crawl),
    #[structopt(about = "Summarize a checkpoint")]
    Inspect(Inspect),
}

#[derive(Debug, StructOpt)]
/// Crawl command and parameters.
///
/// ```sh
/// wordcrawl-crawl 0.1.0
/// Crawl the archive, resuming from the checkpoint if any
///
/// USAGE:
///     wordcrawl crawl [OPTIONS]
///
/// OPTIONS:
///     -t, --template <templates>...    url template, INDEX is replaced by the document index
///     -s, --start <start>              first index [default: 1]
///     -e, --end <end>                  last index [default: 70000]
///     -b, --batch-size <batch-size>    documents between checkpoints [default: 50]
///     -d, --checkpoint-dir <dir>       checkpoint location [default: .]
/// ```
pub struct Crawl {
    #[structopt(
        short = "t",
        long = "template",
        help = "url template, INDEX is replaced by the document index. Defaults to the two archive schemes."
    )]
    pub templates: Vec<UrlTemplate>,
    #[structopt(short = "s", long = "start", help = "first index", default_value = "1")]
    pub start: u64,
    #[structopt(short = "e", long = "end", help = "last index", default_value = "70000")]
    pub end: u64,
    #[structopt(
        short = "b",
        long = "batch-size",
        help = "number of merged documents between checkpoints",
        default_value = "50"
    )]
    pub batch_size: usize,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "checkpoint-dir",
        help = "checkpoint location",
        default_value = "."
    )]
    pub checkpoint_dir: PathBuf,
    #[structopt(
        long = "backoff-secs",
        help = "wait after an unexpected status code",
        default_value = "600"
    )]
    pub backoff_secs: u64,
    #[structopt(
        long = "connection-backoff-secs",
        help = "wait after a connection failure",
        default_value = "300"
    )]
    pub connection_backoff_secs: u64,
}

impl Crawl {
    pub fn into_config(self) -> Result<CrawlConfig, Error> {
        if self.start > self.end {
            return Err(Error::Custom(format!(
                "empty index range: {}..={}",
                self.start, self.end
            )));
        }
        if self.batch_size == 0 {
            return Err(Error::Custom("batch size must be positive".to_string()));
        }

        let mut config = CrawlConfig::new(self.checkpoint_dir)?;
        if !self.templates.is_empty() {
            config.templates = self.templates;
        }
        config.start = self.start;
        config.end = self.end;
        config.batch_size = self.batch_size;
        config.backoff = Backoff {
            status: Duration::from_secs(self.backoff_secs),
            connection: Duration::from_secs(self.connection_backoff_secs),
        };
        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
/// Inspect command and parameters.
pub struct Inspect {
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "checkpoint-dir",
        help = "checkpoint location",
        default_value = "."
    )]
    pub checkpoint_dir: PathBuf,
    #[structopt(long = "top", help = "number of most frequent words", default_value = "20")]
    pub top: usize,
    #[structopt(long = "json", help = "print a json summary")]
    pub json: bool,
}
