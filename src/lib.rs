/*!
# Wordcrawl

Incrementally builds a vocabulary table and a collocation table
by crawling a sequentially indexed text archive.

Each document is fetched ([fetch]), cleaned ([transformers]), identified ([identifiers]),
tokenized ([tokenize]), tagged ([tagging]) and merged ([processing]) into the running [tables],
which are periodically checkpointed to disk ([io]).

The whole loop is driven by [pipelines::Crawler].
!*/
pub mod cli;
pub mod error;
pub mod fetch;
pub mod identifiers;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod processing;
pub mod tables;
pub mod tagging;
pub mod tokenize;
pub mod transformers;
