/*! Text transformers.

Turn raw archive text into normalized text ready for tokenization.

Each cleaning step implements [Transform], and [TextCleaner] chains them in a fixed order:
1. [Boilerplate] strips archive headers/footers,
2. [CharNormalizer] replaces non-linguistic characters with spaces,
3. [LiteralRemover] removes known boilerplate titles.

The title is then extracted from the first non-blank line.
!*/

mod boilerplate;
mod cleaner;
mod normalizer;
mod transform;

pub use boilerplate::{Boilerplate, Delimiter, DelimiterSet, Keep};
pub use cleaner::{Cleaned, ParseError, TextCleaner};
pub use normalizer::{CharNormalizer, LiteralRemover};
pub use transform::Transform;
