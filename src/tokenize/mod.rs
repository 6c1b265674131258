/*! Tokenization

Splits cleaned text into lowercase words, removes stopwords, lemmatizes, and extracts collocations.

Two token streams are kept:
- the filtered stream (literal occurring forms, stopwords removed),
- the lemmatized stream, from which collocations are scored.
!*/
mod collocations;
mod lemmatizer;
mod tokenizer;

pub use collocations::CollocationFinder;
pub use lemmatizer::{Lemmatize, NounLemmatizer};
pub use tokenizer::{Tokenizer, Tokens};
