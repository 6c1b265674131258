use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use wordcrawl::fetch::{Backoff, Fetcher, HttpResponse, Sleep, Transport, TransportError};
use wordcrawl::io::{CheckpointStore, COLLOCATIONS_FILE, VOCABULARY_FILE};
use wordcrawl::pipelines::{CrawlConfig, Crawler, DocumentOutcome, Pipeline, SkipReason};
use wordcrawl::tables::Tables;

fn book(title: &str, body: &str) -> String {
    format!(
        "The Project Gutenberg eBook of {title}\nlicense text\n\
         *** START OF THE PROJECT GUTENBERG EBOOK {title} ***\n\
         {title}\n\n{body}\n\
         *** END OF THE PROJECT GUTENBERG EBOOK {title} ***\nmore license text"
    )
}

fn whale_book() -> String {
    book(
        "MOBY DICK",
        "The white whale swam past the ship. The white whale dove under the ship. \
         Sailors watched the white whale from the ship deck. The sea was calm.",
    )
}

fn sea_book() -> String {
    book(
        "THE SEA",
        "The sea was calm and the ship sailed on. Sailors sang songs on the ship deck.",
    )
}

/// Serves canned responses by url. Unknown urls are 404s, `None` entries are connection failures.
#[derive(Default)]
struct Archive(HashMap<String, Option<HttpResponse>>);

impl Archive {
    fn page(mut self, url: &str, status: u16, body: &str) -> Self {
        self.0
            .insert(url.to_string(), Some(HttpResponse::new(status, body)));
        self
    }

    fn down(mut self, url: &str) -> Self {
        self.0.insert(url.to_string(), None);
        self
    }
}

impl Transport for Archive {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        match self.0.get(url) {
            Some(Some(response)) => Ok(response.clone()),
            Some(None) => Err(TransportError::Connection("connection reset".to_string())),
            None => Ok(HttpResponse::new(404, "")),
        }
    }
}

#[derive(Default, Clone)]
struct Recorder(Rc<RefCell<Vec<Duration>>>);

impl Sleep for Recorder {
    fn sleep(&self, duration: Duration) {
        self.0.borrow_mut().push(duration);
    }
}

fn crawler(dir: &Path, archive: Archive, templates: &[&str], end: u64) -> (Crawler, Recorder) {
    let mut config = CrawlConfig::new(dir.to_path_buf()).unwrap();
    config.templates = templates.iter().map(|t| t.parse().unwrap()).collect();
    config.end = end;
    let recorder = Recorder::default();
    let fetcher = Fetcher::new(
        Box::new(archive),
        Box::new(recorder.clone()),
        Backoff::default(),
    );
    (Crawler::new(config, fetcher), recorder)
}

#[test]
fn full_crawl() {
    let dir = tempfile::tempdir().unwrap();
    let archive = Archive::default()
        .page("https://a.test/1.txt", 200, &whale_book())
        .page("https://a.test/2.txt", 403, "forbidden")
        .page("https://a.test/3.txt", 500, "")
        .down("https://a.test/4.txt")
        .page("https://b.test/1/1-0.txt", 200, &sea_book());

    let (crawler, recorder) = crawler(
        dir.path(),
        archive,
        &["https://a.test/INDEX.txt", "https://b.test/INDEX/INDEX-0.txt"],
        5,
    );
    let report = crawler.run().unwrap();

    assert_eq!(report.passes, 2);
    assert_eq!(report.attempted, 10);
    assert_eq!(report.merged, 2);
    assert_eq!(report.forbidden, 1);
    assert_eq!(report.unavailable, 1);
    assert_eq!(report.parse_failed, 1);
    assert_eq!(report.not_found, 5);
    // one checkpoint per pass
    assert_eq!(report.checkpoints, 2);

    assert_eq!(
        *recorder.0.borrow(),
        vec![Duration::from_secs(600), Duration::from_secs(300)]
    );

    let tables = CheckpointStore::new(dir.path()).load().unwrap();
    // in both documents
    let ship = tables.vocabulary.get("ship").unwrap();
    assert_eq!(ship.unique_frequency, Some(2));
    assert_eq!(ship.lang, "english");
    // in one only, however many times
    assert_eq!(
        tables.vocabulary.get("whale").unwrap().unique_frequency,
        Some(1)
    );
    assert!(!tables.vocabulary.contains("the"));
    assert!(tables
        .collocations
        .rows()
        .all(|row| row.token1 != "gutenberg" && row.token2 != "gutenberg"));
    assert!(tables
        .collocations
        .rows()
        .any(|row| row.token1 == "white" && row.token2 == "whale" && row.title == "MOBY DICK"));
}

#[test]
fn resume_from_checkpoint() {
    let dir = tempfile::tempdir().unwrap();
    let archive = || Archive::default().page("https://a.test/1.txt", 200, &whale_book());

    let (first, _) = crawler(dir.path(), archive(), &["https://a.test/INDEX.txt"], 1);
    first.run().unwrap();
    let after_first = CheckpointStore::new(dir.path()).load().unwrap();

    let (second, _) = crawler(dir.path(), archive(), &["https://a.test/INDEX.txt"], 1);
    second.run().unwrap();
    let after_second = CheckpointStore::new(dir.path()).load().unwrap();

    // counters went up by one, nothing was duplicated
    assert_eq!(after_first.vocabulary.len(), after_second.vocabulary.len());
    assert_eq!(after_first.collocations, after_second.collocations);
    for row in after_first.vocabulary.rows() {
        let again = after_second.vocabulary.get(&row.word).unwrap();
        assert_eq!(
            again.unique_frequency,
            row.unique_frequency.map(|count| count + 1)
        );
    }
}

#[test]
fn corrupt_checkpoint_aborts_before_crawling() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(VOCABULARY_FILE), "WORD,UNQ FREQ\nship,often\n").unwrap();
    std::fs::write(dir.path().join(COLLOCATIONS_FILE), "").unwrap();

    let (crawler, recorder) = crawler(
        dir.path(),
        Archive::default().down("https://a.test/1.txt"),
        &["https://a.test/INDEX.txt"],
        1,
    );
    assert!(crawler.run().is_err());
    assert!(recorder.0.borrow().is_empty());
    // left as is
    let content = std::fs::read_to_string(dir.path().join(VOCABULARY_FILE)).unwrap();
    assert!(content.contains("often"));
}

#[test]
fn not_found_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let (crawler, recorder) = crawler(dir.path(), Archive::default(), &["https://a.test/INDEX.txt"], 1);
    let template = crawler.config().templates[0].clone();
    let mut tables = Tables::default();

    let outcome = crawler.process_index(&mut tables, &template, 1);
    assert_eq!(outcome, DocumentOutcome::Skipped(SkipReason::NotFound));
    assert_eq!(tables, Tables::default());
    assert!(recorder.0.borrow().is_empty());
}
