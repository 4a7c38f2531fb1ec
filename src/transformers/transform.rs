//! Transform trait.

pub trait Transform {
    /// Takes ownership of the content and returns the transformed one.
    fn transform_own(&self, content: String) -> String;
}
