/*! Language identification

Holds an [Identifier] trait for implementing other classifiers.

The current identifier used is [whatlang](https://github.com/greyblake/whatlang-rs) !*/
mod detector;
mod identifier;
mod whatlang;

pub use detector::LanguageDetector;
pub use identifier::Identification;
pub use identifier::Identifier;
pub use self::whatlang::WhatLang;
