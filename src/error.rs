//! Errors produced by [`AvlMap`][crate::AvlMap].

/// The things that can go wrong when operating on an [`AvlMap`][crate::AvlMap].
///
/// Note that [`AvlMap::remove`][crate::AvlMap::remove] on a missing key is _not_ an error. It
/// simply returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// [`AvlMap::update`][crate::AvlMap::update] was called with a key that isn't in the map.
    #[error("key not found in map")]
    NotFound,
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
