/*! Part-of-speech tagging

New words are tagged with a Penn Treebank tag by a [PosTagger],
then the tag is mapped to a coarse category ([labels::label]).
!*/
pub mod labels;
mod lexicon;
mod tagger;

pub use lexicon::LexiconTagger;
pub use tagger::{PosTagger, Tagger};
