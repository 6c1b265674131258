/*! Archive fetching

A [Fetcher] performs one lookup of a document index against a [UrlTemplate],
over any [Transport] (the default one being [HttpTransport]).

Transient failures are handled by a fixed [Backoff]: one blocking sleep, then a single retry
of whatever body was last received. There is no further retry.
!*/
mod fetcher;
mod template;
mod transport;

pub use fetcher::{Backoff, FetchOutcome, Fetcher, Sleep, ThreadSleep};
pub use template::{UrlTemplate, PLACEHOLDER};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};
