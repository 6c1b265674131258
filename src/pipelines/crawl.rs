//! Incremental archive crawl
//!
//! The archive exposes documents under sequential indices, reachable through (at least) two url schemes.
//! Each scheme is crawled as a full, independent pass over the index range.
//!
//! # Processing
//! For each index:
//! 1. The document is fetched. Missing (404), forbidden (403) and unreachable documents are skipped.
//! 1. Boilerplate is stripped and characters are normalized. Documents with no content left are skipped.
//! 1. The language is detected on the cleaned text.
//! 1. Words are tokenized, lemmatized and collocations are extracted.
//! 1. Words and collocations are merged into the running tables.
//!
//! Tables are checkpointed every `batch_size` merged documents, and at the end of each pass.
use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::error::Error;
use crate::fetch::{Backoff, FetchOutcome, Fetcher, HttpTransport, ThreadSleep, UrlTemplate};
use crate::identifiers::LanguageDetector;
use crate::io::CheckpointStore;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{Aggregator, DocumentResult, MergeReport};
use crate::tables::Tables;
use crate::tokenize::Tokenizer;
use crate::transformers::TextCleaner;

/// Archive url schemes, crawled in this order.
pub const DEFAULT_TEMPLATES: [&str; 2] = [
    "https://www.gutenberg.org/cache/epub/INDEX/pgINDEX.txt",
    "https://www.gutenberg.org/files/INDEX/INDEX-0.txt",
];
pub const DEFAULT_START: u64 = 1;
pub const DEFAULT_END: u64 = 70000;
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Why a document did not reach the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    Forbidden,
    Unavailable,
}

/// Outcome of a single index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Skipped(SkipReason),
    ParseFailed,
    Merged(MergeReport),
}

/// Counters over a whole crawl.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlReport {
    pub passes: usize,
    pub attempted: usize,
    pub merged: usize,
    pub not_found: usize,
    pub forbidden: usize,
    pub unavailable: usize,
    pub parse_failed: usize,
    pub checkpoints: usize,
    pub failed_checkpoints: usize,
}

impl CrawlReport {
    fn record(&mut self, outcome: &DocumentOutcome) {
        self.attempted += 1;
        match outcome {
            DocumentOutcome::Skipped(SkipReason::NotFound) => self.not_found += 1,
            DocumentOutcome::Skipped(SkipReason::Forbidden) => self.forbidden += 1,
            DocumentOutcome::Skipped(SkipReason::Unavailable) => self.unavailable += 1,
            DocumentOutcome::ParseFailed => self.parse_failed += 1,
            DocumentOutcome::Merged(_) => self.merged += 1,
        }
    }
}

/// Crawl parameters.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub templates: Vec<UrlTemplate>,
    /// first index, inclusive.
    pub start: u64,
    /// last index, inclusive.
    pub end: u64,
    /// number of merged documents between two checkpoints.
    pub batch_size: usize,
    pub checkpoint_dir: PathBuf,
    pub backoff: Backoff,
}

impl CrawlConfig {
    /// Config over the default archive templates and index range.
    pub fn new(checkpoint_dir: PathBuf) -> Result<Self, Error> {
        let templates = DEFAULT_TEMPLATES
            .iter()
            .map(|t| t.parse())
            .collect::<Result<Vec<UrlTemplate>, Error>>()?;
        Ok(Self {
            templates,
            start: DEFAULT_START,
            end: DEFAULT_END,
            batch_size: DEFAULT_BATCH_SIZE,
            checkpoint_dir,
            backoff: Backoff::default(),
        })
    }
}

pub struct Crawler {
    config: CrawlConfig,
    fetcher: Fetcher,
    cleaner: TextCleaner,
    detector: LanguageDetector,
    tokenizer: Tokenizer,
    aggregator: Aggregator,
    store: CheckpointStore,
}

impl Crawler {
    /// Build a crawler with default text processing.
    ///
    /// The fetcher backoff is taken as is. `config.backoff` is only used by [Crawler::with_http].
    pub fn new(config: CrawlConfig, fetcher: Fetcher) -> Self {
        let store = CheckpointStore::new(&config.checkpoint_dir);
        Self {
            config,
            fetcher,
            cleaner: TextCleaner::default(),
            detector: LanguageDetector::default(),
            tokenizer: Tokenizer::default(),
            aggregator: Aggregator::default(),
            store,
        }
    }

    /// Build a crawler over the network, with blocking backoff sleeps.
    pub fn with_http(config: CrawlConfig) -> Result<Self, Error> {
        let fetcher = Fetcher::new(
            Box::new(HttpTransport::new()?),
            Box::new(ThreadSleep),
            config.backoff,
        );
        Ok(Self::new(config, fetcher))
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Fetch, clean, tokenize and merge a single document.
    pub fn process_index(
        &self,
        tables: &mut Tables,
        template: &UrlTemplate,
        index: u64,
    ) -> DocumentOutcome {
        let (url, outcome) = self.fetcher.fetch(template, index);

        let (body, recovered) = match outcome {
            FetchOutcome::Document { body, recovered } => (body, recovered),
            FetchOutcome::NotFound => return DocumentOutcome::Skipped(SkipReason::NotFound),
            FetchOutcome::Forbidden => return DocumentOutcome::Skipped(SkipReason::Forbidden),
            FetchOutcome::Unavailable => return DocumentOutcome::Skipped(SkipReason::Unavailable),
        };
        if recovered {
            debug!("[{}] parsing body of a failed response", index);
        }

        let cleaned = match self.cleaner.clean(&body) {
            Ok(cleaned) => cleaned,
            Err(e) => {
                warn!(
                    "[{}] {} | {} (lang: {})",
                    index,
                    e,
                    url,
                    self.detector.detect(&body)
                );
                return DocumentOutcome::ParseFailed;
            }
        };

        let lang = self.detector.detect(&cleaned.text);
        let tokens = self.tokenizer.tokenize(&cleaned.text, lang);
        let doc = DocumentResult::new(index, url, cleaned, lang, tokens);

        let report = self.aggregator.merge(tables, &doc);

        info!("[{}] {} ({})", index, doc.title, doc.lang);
        info!(
            "[{}] {} words in source | {} new | {} recurring",
            index, report.words_in_source, report.new_words, report.recurring_words
        );
        info!(
            "[{}] vocabulary: {} | collocations: {} (+{})",
            index,
            tables.vocabulary.len(),
            tables.collocations.len(),
            report.collocations_added
        );

        DocumentOutcome::Merged(report)
    }

    /// Run every pass over already loaded tables.
    ///
    /// The batch counter restarts with each pass. Since every pass ends with a checkpoint,
    /// no more than `batch_size - 1` merged documents are ever left unsaved.
    pub fn crawl(&self, tables: &mut Tables) -> CrawlReport {
        let mut report = CrawlReport::default();

        for template in &self.config.templates {
            info!(
                "pass over {} [{}..={}]",
                template, self.config.start, self.config.end
            );
            let mut since_checkpoint = 0;

            for index in self.config.start..=self.config.end {
                let outcome = self.process_index(tables, template, index);
                report.record(&outcome);

                if let DocumentOutcome::Merged(_) = outcome {
                    since_checkpoint += 1;
                    if since_checkpoint >= self.config.batch_size {
                        info!("[{}] checkpoint after {} documents", index, since_checkpoint);
                        self.checkpoint(tables, &mut report);
                        since_checkpoint = 0;
                    }
                }
            }

            info!("end of pass over {}", template);
            self.checkpoint(tables, &mut report);
            report.passes += 1;
        }

        info!("crawl done: {:?}", report);
        report
    }

    /// Save errors are not fatal, the next checkpoint retries.
    fn checkpoint(&self, tables: &Tables, report: &mut CrawlReport) {
        match self.store.save(tables) {
            Ok(()) => report.checkpoints += 1,
            Err(e) => {
                error!("checkpoint failed: {:?}", e);
                report.failed_checkpoints += 1;
            }
        }
    }
}

impl Pipeline<CrawlReport> for Crawler {
    /// Load the checkpoint (if any) and crawl.
    ///
    /// Only a corrupt checkpoint makes the crawl fail, before any document is fetched.
    fn run(&self) -> Result<CrawlReport, Error> {
        let mut tables = self.store.load()?;
        Ok(self.crawl(&mut tables))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;
    use crate::fetch::{HttpResponse, Sleep, Transport, TransportError};

    const TALE: &str = "*** START OF THIS PROJECT GUTENBERG EBOOK ***\nTHE TALE\nOnce upon a time the whale swam.\n*** END OF THIS PROJECT GUTENBERG EBOOK ***";

    struct Pages(HashMap<String, HttpResponse>);
    impl Transport for Pages {
        fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            Ok(self
                .0
                .get(url)
                .cloned()
                .unwrap_or_else(|| HttpResponse::new(404, "")))
        }
    }

    struct NoSleep;
    impl Sleep for NoSleep {
        fn sleep(&self, _: Duration) {}
    }

    fn crawler(dir: PathBuf, pages: &[(&str, HttpResponse)], end: u64) -> Crawler {
        let mut config = CrawlConfig::new(dir).unwrap();
        config.templates = vec!["https://archive.test/INDEX.txt".parse().unwrap()];
        config.end = end;
        config.batch_size = 2;
        let pages = pages
            .iter()
            .map(|(url, response)| (url.to_string(), response.clone()))
            .collect();
        let fetcher = Fetcher::new(
            Box::new(Pages(pages)),
            Box::new(NoSleep),
            Backoff::default(),
        );
        Crawler::new(config, fetcher)
    }

    #[test]
    fn default_config() {
        let config = CrawlConfig::new(PathBuf::from(".")).unwrap();
        assert_eq!(config.templates.len(), 2);
        assert_eq!(
            config.templates[0].url(12),
            "https://www.gutenberg.org/cache/epub/12/pg12.txt"
        );
        assert_eq!(
            config.templates[1].url(12),
            "https://www.gutenberg.org/files/12/12-0.txt"
        );
        assert_eq!((config.start, config.end), (1, 70000));
        assert_eq!(config.batch_size, 50);
    }

    #[test]
    fn not_found_leaves_tables() {
        let dir = tempfile::tempdir().unwrap();
        let c = crawler(dir.path().to_path_buf(), &[], 1);
        let mut tables = Tables::default();
        let template = c.config().templates[0].clone();
        assert_eq!(
            c.process_index(&mut tables, &template, 1),
            DocumentOutcome::Skipped(SkipReason::NotFound)
        );
        assert_eq!(tables, Tables::default());
    }

    #[test]
    fn merged_document() {
        let dir = tempfile::tempdir().unwrap();
        let c = crawler(
            dir.path().to_path_buf(),
            &[("https://archive.test/1.txt", HttpResponse::new(200, TALE))],
            1,
        );
        let mut tables = Tables::default();
        let template = c.config().templates[0].clone();
        match c.process_index(&mut tables, &template, 1) {
            DocumentOutcome::Merged(report) => assert!(report.new_words > 0),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(tables.vocabulary.contains("whale"));
        assert!(!tables.vocabulary.contains("a"));
    }

    #[test]
    fn parse_failure_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let c = crawler(
            dir.path().to_path_buf(),
            &[("https://archive.test/1.txt", HttpResponse::new(500, "*** !!! ***"))],
            1,
        );
        let mut tables = Tables::default();
        let template = c.config().templates[0].clone();
        assert_eq!(
            c.process_index(&mut tables, &template, 1),
            DocumentOutcome::ParseFailed
        );
        assert_eq!(tables, Tables::default());
    }

    #[test]
    fn checkpoints_per_batch_and_per_pass() {
        let dir = tempfile::tempdir().unwrap();
        let pages = [
            ("https://archive.test/1.txt", HttpResponse::new(200, TALE)),
            ("https://archive.test/2.txt", HttpResponse::new(200, TALE)),
            ("https://archive.test/3.txt", HttpResponse::new(200, TALE)),
        ];
        let c = crawler(dir.path().to_path_buf(), &pages, 4);
        let report = c.run().unwrap();

        assert_eq!(report.passes, 1);
        assert_eq!(report.attempted, 4);
        assert_eq!(report.merged, 3);
        assert_eq!(report.not_found, 1);
        // one after two merges, one at the end of the pass
        assert_eq!(report.checkpoints, 2);
        assert!(CheckpointStore::new(dir.path()).exists());
    }
}
