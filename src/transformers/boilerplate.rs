/*! Header/Footer stripping

Archive documents are wrapped between a license header and a license footer.
Those are delimited by marker strings, whose format changed over time.
!*/
use log::debug;

use super::Transform;

/// Fragment to keep when splitting on a delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    /// keep what comes before the first occurrence.
    /// A missing delimiter leaves the text untouched.
    Before,
    /// keep what comes after the first occurrence.
    /// The delimiter is mandatory.
    After,
}

#[derive(Debug, Clone)]
pub struct Delimiter {
    pattern: &'static str,
    keep: Keep,
}

impl Delimiter {
    pub const fn new(pattern: &'static str, keep: Keep) -> Self {
        Self { pattern, keep }
    }

    /// Split on the delimiter, returning the kept fragment.
    /// Returns `None` if the delimiter is mandatory but missing.
    fn apply<'a>(&self, text: &'a str) -> Option<&'a str> {
        match (text.split_once(self.pattern), self.keep) {
            (Some((before, _)), Keep::Before) => Some(before),
            (Some((_, after)), Keep::After) => Some(after),
            (None, Keep::Before) => Some(text),
            (None, Keep::After) => None,
        }
    }
}

/// Delimiters applied in sequence.
#[derive(Debug, Clone)]
pub struct DelimiterSet(Vec<Delimiter>);

impl DelimiterSet {
    pub fn new(delimiters: Vec<Delimiter>) -> Self {
        Self(delimiters)
    }

    /// Returns the stripped text if the set matches.
    fn strip<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.0
            .iter()
            .try_fold(text, |fragment, delimiter| delimiter.apply(fragment))
    }
}

/// Ordered list of [DelimiterSet]. The first matching set wins.
/// If none match, text is passed through.
#[derive(Debug, Clone)]
pub struct Boilerplate {
    sets: Vec<DelimiterSet>,
}

impl Boilerplate {
    pub fn new(sets: Vec<DelimiterSet>) -> Self {
        Self { sets }
    }
}

impl Default for Boilerplate {
    /// Known archive markers, with and without the space after the asterisks.
    fn default() -> Self {
        use Keep::*;
        Self::new(vec![
            DelimiterSet::new(vec![
                Delimiter::new("*** START OF", After),
                Delimiter::new("*** END OF", Before),
            ]),
            DelimiterSet::new(vec![
                Delimiter::new("***START OF", After),
                Delimiter::new("***END OF", Before),
            ]),
            DelimiterSet::new(vec![Delimiter::new(
                "***The Project Gutenberg Etext of",
                After,
            )]),
            DelimiterSet::new(vec![Delimiter::new("to header material.", After)]),
        ])
    }
}

impl Transform for Boilerplate {
    fn transform_own(&self, text: String) -> String {
        for (idx, set) in self.sets.iter().enumerate() {
            if let Some(stripped) = set.strip(&text) {
                debug!("boilerplate set {} matched", idx);
                return stripped.to_string();
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_footer() {
        let text = "license\n*** START OF THE BOOK ***\nbody\n*** END OF THE BOOK ***\nlicense";
        let stripped = Boilerplate::default().transform_own(text.to_string());
        assert_eq!(stripped, " THE BOOK ***\nbody\n");
    }

    #[test]
    fn header_without_space() {
        let text = "license\n***START OF THE BOOK***\nbody\n***END OF THE BOOK***";
        let stripped = Boilerplate::default().transform_own(text.to_string());
        assert_eq!(stripped, " THE BOOK***\nbody\n");
    }

    #[test]
    fn header_without_footer() {
        let text = "license *** START OF it\nbody";
        let stripped = Boilerplate::default().transform_own(text.to_string());
        assert_eq!(stripped, " it\nbody");
    }

    #[test]
    fn first_set_wins() {
        let text = "to header material. a *** START OF b *** END OF c";
        let stripped = Boilerplate::default().transform_own(text.to_string());
        assert_eq!(stripped, " b ");
    }

    #[test]
    fn old_etext_header() {
        let text = "junk ***The Project Gutenberg Etext of Moby Dick";
        let stripped = Boilerplate::default().transform_own(text.to_string());
        assert_eq!(stripped, " Moby Dick");
    }

    #[test]
    fn passthrough() {
        let text = "nothing to strip *** END OF here";
        let stripped = Boilerplate::default().transform_own(text.to_string());
        assert_eq!(stripped, text);
    }
}
