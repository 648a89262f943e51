//! Object binding metadata
//!
//! A binding records which logical animation objects a builder chain is
//! about: their expected Rust type and one or more lookup names. Names mean
//! nothing to this crate; they are resolved by a caller-supplied lookup at
//! build time.

use std::any;
use std::fmt;
use std::marker::PhantomData;

/// Name assumed when a binding is created without any explicit names.
pub const DEFAULT_OBJECT_NAME: &str = "default";

/// Typed set of logical object names for one builder chain.
///
/// Order and duplicates are preserved exactly as given. An empty name set
/// is normalized to `[DEFAULT_OBJECT_NAME]` so every binding addresses at
/// least one object.
pub struct ObjectBinding<N> {
    names: Vec<String>,
    _object: PhantomData<fn() -> N>,
}

impl<N> ObjectBinding<N> {
    pub(crate) fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            names.push(DEFAULT_OBJECT_NAME.to_string());
        }
        Self {
            names,
            _object: PhantomData,
        }
    }

    /// The bound names, in declaration order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Human-readable name of the expected object type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        any::type_name::<N>()
    }
}

impl<N> Clone for ObjectBinding<N> {
    fn clone(&self) -> Self {
        Self {
            names: self.names.clone(),
            _object: PhantomData,
        }
    }
}

impl<N> fmt::Debug for ObjectBinding<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBinding")
            .field("type", &self.type_name())
            .field("names", &self.names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    #[test]
    fn test_empty_names_fall_back_to_default() {
        let binding = ObjectBinding::<Widget>::new(Vec::<String>::new());
        assert_eq!(binding.names(), [DEFAULT_OBJECT_NAME]);
    }

    #[test]
    fn test_names_preserve_order_and_duplicates() {
        let binding = ObjectBinding::<Widget>::new(["b", "a", "b"]);
        assert_eq!(binding.names(), ["b", "a", "b"]);
    }

    #[test]
    fn test_type_name_mentions_object_type() {
        let binding = ObjectBinding::<Widget>::new(["w"]);
        assert!(binding.type_name().contains("Widget"));
    }
}
