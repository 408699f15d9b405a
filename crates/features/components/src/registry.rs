//! Process-wide component registry.
//!
//! Readers work on an immutable [`RegistrySnapshot`]; writers build a fresh map and
//! publish it with a single pointer swap, so a reader sees either the old or the new
//! mapping and never a half-applied update.

use crate::builtins::builtin_declarations;
use crate::declaration::ComponentDeclaration;
use crate::error::RegistryError;
use crate::manifest::ComponentManifest;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::Arc;
use tessera_domain::components::CapabilitySet;
use tracing::{debug, info};

type Declarations = BTreeMap<String, Arc<ComponentDeclaration>>;

/// Immutable view of the registry at one point in time.
#[derive(Debug, Default)]
pub struct RegistrySnapshot {
    components: Declarations,
    /// Bumped on every published change.
    generation: u64,
}

impl RegistrySnapshot {
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&Arc<ComponentDeclaration>> {
        self.components.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    /// Declarations sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ComponentDeclaration>> {
        self.components.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    current: RwLock<Arc<RegistrySnapshot>>,
    /// Serializes writers so concurrent updates cannot lose each other's changes.
    writer: Mutex<()>,
}

/// Cheaply cloneable handle to the shared registry.
///
/// # Example
/// ```rust
/// use tessera_components::{ComponentDeclaration, ComponentRegistry, OpenSchema};
///
/// let registry = ComponentRegistry::with_builtins();
/// assert!(registry.resolve("hero").is_some());
///
/// registry.register("banner", ComponentDeclaration::new("banner", "ext/banner", OpenSchema));
/// assert!(registry.list_capabilities("banner").unwrap().is_empty());
/// assert!(registry.list_capabilities("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    inner: Arc<RegistryInner>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn builder() -> ComponentRegistryBuilder {
        ComponentRegistryBuilder::default()
    }

    /// A registry holding the built-in catalogue only.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::builder().builtins().build()
    }

    /// The current mapping. Hold on to it for the duration of one resolution.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RegistrySnapshot> {
        Arc::clone(&self.inner.current.read())
    }

    /// Adds or replaces the declaration for `key`, returning the previous one.
    ///
    /// The declaration is stored under `key` even if its own `key` field differs.
    pub fn register(
        &self,
        key: impl Into<String>,
        mut declaration: ComponentDeclaration,
    ) -> Option<Arc<ComponentDeclaration>> {
        let key = key.into();
        declaration.key.clone_from(&key);
        debug!(%key, path = %declaration.path, "Registering component");
        self.update(|components| components.insert(key, Arc::new(declaration)))
    }

    /// Removes the declaration for `key`, returning it if present.
    pub fn unregister(&self, key: &str) -> Option<Arc<ComponentDeclaration>> {
        debug!(%key, "Unregistering component");
        self.update(|components| components.remove(key))
    }

    /// Replaces the whole mapping at once.
    pub fn reload<I>(&self, declarations: I)
    where
        I: IntoIterator<Item = ComponentDeclaration>,
    {
        let components: Declarations =
            declarations.into_iter().map(|d| (d.key.clone(), Arc::new(d))).collect();
        let count = components.len();
        self.update(move |current| *current = components);
        info!(components = count, "Component registry reloaded");
    }

    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<Arc<ComponentDeclaration>> {
        self.snapshot().resolve(key).cloned()
    }

    /// Capability tags declared for `key`.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownComponent`] when nothing is registered under `key`.
    pub fn list_capabilities(&self, key: &str) -> Result<CapabilitySet, RegistryError> {
        self.snapshot().resolve(key).map(|d| d.capabilities.clone()).ok_or_else(|| {
            RegistryError::UnknownComponent { key: key.to_owned(), context: None }
        })
    }

    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.snapshot().keys().map(str::to_owned).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn update<R>(&self, apply: impl FnOnce(&mut Declarations) -> R) -> R {
        let _writer = self.inner.writer.lock();
        let current = self.snapshot();

        let mut components = current.components.clone();
        let result = apply(&mut components);
        let next = RegistrySnapshot { components, generation: current.generation + 1 };

        *self.inner.current.write() = Arc::new(next);
        result
    }
}

/// Collects declarations before the registry is shared.
///
/// Later declarations replace earlier ones with the same key, so a manifest added after
/// [`builtins`](Self::builtins) can override a built-in component.
#[derive(Debug, Default)]
pub struct ComponentRegistryBuilder {
    components: Declarations,
}

impl ComponentRegistryBuilder {
    #[must_use]
    pub fn builtins(self) -> Self {
        self.declarations(builtin_declarations())
    }

    #[must_use]
    pub fn declare(mut self, declaration: ComponentDeclaration) -> Self {
        self.components.insert(declaration.key.clone(), Arc::new(declaration));
        self
    }

    #[must_use]
    pub fn declarations<I>(self, declarations: I) -> Self
    where
        I: IntoIterator<Item = ComponentDeclaration>,
    {
        declarations.into_iter().fold(self, Self::declare)
    }

    #[must_use]
    pub fn manifest(self, manifest: ComponentManifest) -> Self {
        self.declarations(manifest.into_declarations())
    }

    #[must_use]
    pub fn build(self) -> ComponentRegistry {
        let snapshot = RegistrySnapshot { components: self.components, generation: 0 };
        ComponentRegistry {
            inner: Arc::new(RegistryInner {
                current: RwLock::new(Arc::new(snapshot)),
                writer: Mutex::new(()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OpenSchema;

    #[test]
    fn register_replaces_and_bumps_generation() {
        let registry = ComponentRegistry::builder().build();
        assert!(registry.is_empty());
        assert_eq!(registry.snapshot().generation(), 0);

        let first = ComponentDeclaration::new("banner", "v1", OpenSchema);
        assert!(registry.register("banner", first).is_none());
        let previous = registry.register("banner", ComponentDeclaration::new("banner", "v2", OpenSchema));

        assert_eq!(previous.map(|d| d.path.clone()), Some("v1".to_owned()));
        assert_eq!(registry.resolve("banner").map(|d| d.path.clone()), Some("v2".to_owned()));
        assert_eq!(registry.snapshot().generation(), 2);
    }

    #[test]
    fn register_stores_under_the_given_key() {
        let registry = ComponentRegistry::builder().build();
        registry.register("alias", ComponentDeclaration::new("original", "p", OpenSchema));
        assert_eq!(registry.resolve("alias").map(|d| d.key.clone()), Some("alias".to_owned()));
        assert!(registry.resolve("original").is_none());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_writes() {
        let registry = ComponentRegistry::with_builtins();
        let before = registry.snapshot();

        registry.unregister("hero");
        registry.register("banner", ComponentDeclaration::new("banner", "p", OpenSchema));

        assert!(before.contains("hero"));
        assert!(!before.contains("banner"));
        assert!(!registry.snapshot().contains("hero"));
    }

    #[test]
    fn reload_swaps_entire_mapping() {
        let registry = ComponentRegistry::with_builtins();
        registry.reload([ComponentDeclaration::new("only", "p", OpenSchema)]);
        assert_eq!(registry.keys(), ["only"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_capabilities_are_an_error() {
        let registry = ComponentRegistry::with_builtins();
        let err = registry.list_capabilities("ghost").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownComponent { ref key, .. } if key == "ghost"));
        assert!(registry.list_capabilities("gallery").unwrap().contains("lazy-load"));
    }

    #[test]
    fn builder_later_declarations_win() {
        let registry = ComponentRegistry::builder()
            .builtins()
            .declare(ComponentDeclaration::new("hero", "custom/hero", OpenSchema))
            .build();
        assert_eq!(registry.resolve("hero").map(|d| d.path.clone()), Some("custom/hero".to_owned()));
        assert_eq!(registry.len(), 5);
    }
}
