/*! Processing of crawled documents

[Aggregator] merges the vocabulary and collocations of a [DocumentResult] into the running [crate::tables::Tables].
!*/
mod document;
mod merge;

pub use document::DocumentResult;
pub use merge::{classify, Aggregator, Classification, MergeReport};
