//! Type-erased container for pre-initialized feature state.
//!
//! Each feature crate builds its state once at startup and hands it to the kernel as an
//! [`InitializedSlice`]; handlers later retrieve it by concrete type.

use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;

/// Feature state that can be shared across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Allows downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// An initialized feature, keyed by its concrete type.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    /// Type name kept for startup logs and diagnostics.
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>(), state: Box::new(state) }
    }

    /// Returns the state if it was built from a `T`.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Dummy(u8);

    impl FeatureSlice for Dummy {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn downcast_matches_only_the_original_type() {
        let slice = InitializedSlice::new(Dummy(7));
        assert_eq!(slice.id, TypeId::of::<Dummy>());
        assert!(slice.name.ends_with("Dummy"));
        assert_eq!(slice.downcast_ref::<Dummy>().map(|d| d.0), Some(7));
    }
}
