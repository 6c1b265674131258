/*! Identifier trait

All identifiers should implement [Identifier] to be useable by the [super::LanguageDetector].
!*/

/// Raw classifier output: a language code and a confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    label: String,
    prob: f64,
}

impl Identification {
    pub fn new(label: impl Into<String>, prob: f64) -> Self {
        Self {
            label: label.into(),
            prob,
        }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f64 {
        &self.prob
    }
}

pub trait Identifier {
    /// returns a language code, or `None` if the classifier could not decide.
    fn identify(&self, text: &str) -> Option<Identification>;
}
