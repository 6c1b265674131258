//! Pipelines.
//!
//! The crawl and checkpoint inspection are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
mod crawl;
mod inspect;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use crawl::{
    CrawlConfig, CrawlReport, Crawler, DocumentOutcome, SkipReason, DEFAULT_BATCH_SIZE,
    DEFAULT_END, DEFAULT_START, DEFAULT_TEMPLATES,
};
pub use inspect::Summary;
pub use pipeline::Pipeline;
