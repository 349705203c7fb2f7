/// Marker trait for types that form the support of a probability distribution.
///
/// The `Clone` bound enables copying support elements when constructing
/// transport plans and iterating over distributions.
pub trait Support: Clone {}

/// usize implements Support for use as indices into a sorted support.
impl Support for usize {}

/// f64 implements Support for raw scalar sample values.
impl Support for f64 {}
