//! Transform trait.

pub trait Transform {
    /// Takes ownership of the text and returns it transformed.
    fn transform_own(&self, text: String) -> String;
}
