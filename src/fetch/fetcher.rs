//! Fetch state machine.
use std::time::Duration;

use log::{debug, info, warn};

use super::{Transport, UrlTemplate};

/// Result of a single document lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Body to parse.
    /// `recovered` is set when the body comes from a failed response retried after the backoff.
    Document { body: String, recovered: bool },
    /// 404, expected for missing indices.
    NotFound,
    /// 403, skipped without backoff.
    Forbidden,
    /// Connection failure, already slept on.
    Unavailable,
}

/// Blocking waits.
pub trait Sleep {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Fixed waits before the single retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    /// after an unexpected status code.
    pub status: Duration,
    /// after a connection failure.
    pub connection: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            status: Duration::from_secs(600),
            connection: Duration::from_secs(300),
        }
    }
}

pub struct Fetcher {
    transport: Box<dyn Transport>,
    sleeper: Box<dyn Sleep>,
    backoff: Backoff,
}

impl Fetcher {
    pub fn new(transport: Box<dyn Transport>, sleeper: Box<dyn Sleep>, backoff: Backoff) -> Self {
        Self {
            transport,
            sleeper,
            backoff,
        }
    }

    /// Look up the document at `index`.
    ///
    /// Returns the requested url along with the outcome.
    pub fn fetch(&self, template: &UrlTemplate, index: u64) -> (String, FetchOutcome) {
        let url = template.url(index);

        let outcome = match self.transport.get(&url) {
            Ok(response) => match response.status {
                200 => {
                    info!("[{}] {} | {}", index, response.status, url);
                    FetchOutcome::Document {
                        body: response.body,
                        recovered: false,
                    }
                }
                404 => {
                    debug!("[{}] {} | {}", index, response.status, url);
                    FetchOutcome::NotFound
                }
                403 => {
                    warn!("[{}] {} | {}", index, response.status, url);
                    FetchOutcome::Forbidden
                }
                status => {
                    warn!("[{}] {} | {}", index, status, url);
                    warn!("[{}] sleeping {:?}", index, self.backoff.status);
                    self.sleeper.sleep(self.backoff.status);
                    FetchOutcome::Document {
                        body: response.body,
                        recovered: true,
                    }
                }
            },
            Err(e) => {
                warn!("[{}] {} | {}", index, e, url);
                warn!("[{}] sleeping {:?}", index, self.backoff.connection);
                self.sleeper.sleep(self.backoff.connection);
                FetchOutcome::Unavailable
            }
        };

        (url, outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::fetch::{HttpResponse, TransportError};

    struct Canned(Option<HttpResponse>);
    impl Transport for Canned {
        fn get(&self, _: &str) -> Result<HttpResponse, TransportError> {
            self.0
                .clone()
                .ok_or_else(|| TransportError::Connection("refused".to_string()))
        }
    }

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<Duration>>>);
    impl Sleep for Recorder {
        fn sleep(&self, duration: Duration) {
            self.0.borrow_mut().push(duration);
        }
    }

    fn fetch(response: Option<HttpResponse>) -> (FetchOutcome, Vec<Duration>) {
        let recorder = Recorder::default();
        let fetcher = Fetcher::new(
            Box::new(Canned(response)),
            Box::new(recorder.clone()),
            Backoff::default(),
        );
        let template: UrlTemplate = "https://archive.test/INDEX.txt".parse().unwrap();
        let (url, outcome) = fetcher.fetch(&template, 7);
        assert_eq!(url, "https://archive.test/7.txt");
        let slept = recorder.0.borrow().clone();
        (outcome, slept)
    }

    #[test]
    fn ok() {
        let (outcome, slept) = fetch(Some(HttpResponse::new(200, "body")));
        assert_eq!(
            outcome,
            FetchOutcome::Document {
                body: "body".to_string(),
                recovered: false
            }
        );
        assert!(slept.is_empty());
    }

    #[test]
    fn not_found_does_not_sleep() {
        let (outcome, slept) = fetch(Some(HttpResponse::new(404, "")));
        assert_eq!(outcome, FetchOutcome::NotFound);
        assert!(slept.is_empty());
    }

    #[test]
    fn forbidden_does_not_sleep() {
        let (outcome, slept) = fetch(Some(HttpResponse::new(403, "nope")));
        assert_eq!(outcome, FetchOutcome::Forbidden);
        assert!(slept.is_empty());
    }

    #[test]
    fn server_error_sleeps_then_retries_body() {
        let (outcome, slept) = fetch(Some(HttpResponse::new(500, "oops")));
        assert_eq!(
            outcome,
            FetchOutcome::Document {
                body: "oops".to_string(),
                recovered: true
            }
        );
        assert_eq!(slept, vec![Duration::from_secs(600)]);
    }

    #[test]
    fn connection_failure_sleeps_shorter() {
        let (outcome, slept) = fetch(None);
        assert_eq!(outcome, FetchOutcome::Unavailable);
        assert_eq!(slept, vec![Duration::from_secs(300)]);
    }
}
