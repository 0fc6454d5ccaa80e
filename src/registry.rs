use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::Type;

/// An immutable association between a logical type name and the concrete
/// implementation realizing it.
///
/// The descriptor carries a factory instead of an instance; instantiation
/// stays lazy until the first [`TypeRegistry::get_type`] call.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    factory: fn() -> Arc<dyn Type>,
    impl_id: TypeId,
    impl_name: &'static str,
}

impl TypeDescriptor {
    /// Describe the implementation `T`.
    pub fn of<T: Type + Default>() -> Self {
        Self {
            factory: || Arc::new(T::default()),
            impl_id: TypeId::of::<T>(),
            impl_name: std::any::type_name::<T>(),
        }
    }

    /// The Rust type name of the implementation, used as the stable
    /// implementation identifier in [`TypeRegistry::types_map`] snapshots.
    pub fn implementation_name(&self) -> &'static str {
        self.impl_name
    }
}

impl Debug for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("implementation", &self.impl_name)
            .finish()
    }
}

/// The mutable mapping from logical type name to converter singleton.
///
/// Owns lazy instantiation, custom-type registration, override, and reverse
/// lookup. Exactly one instance exists per registered name at any time; an
/// explicit override evicts the previous singleton so no stale instance
/// outlives its replacement.
///
/// A fresh registry is empty; [`TypeRegistry::with_builtins`] seeds the
/// built-in name vocabulary. Constructing isolated registries keeps tests
/// independent of the process-wide [`Types`][crate::types::Types] facade.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    descriptors: HashMap<String, TypeDescriptor>,
    instances: HashMap<String, Arc<dyn Type>>,
}

impl TypeRegistry {
    /// An empty registry with no registered types.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with every built-in logical type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::types::register_builtins(&mut registry);
        registry
    }

    /// Resolve a logical type name to its flyweight instance.
    ///
    /// The first resolution of a name instantiates the implementation and
    /// caches it; repeated calls return the identical instance.
    pub fn get_type(&mut self, name: &str) -> Result<Arc<dyn Type>> {
        if let Some(instance) = self.instances.get(name) {
            return Ok(Arc::clone(instance));
        }

        let descriptor = self
            .descriptors
            .get(name)
            .ok_or_else(|| Error::unknown_type(name))?;

        let instance = (descriptor.factory)();
        tracing::trace!(
            name,
            implementation = descriptor.impl_name,
            "instantiated type"
        );
        self.instances.insert(name.to_owned(), Arc::clone(&instance));

        Ok(instance)
    }

    /// Register a custom type under a new logical name.
    ///
    /// No instance is created yet; instantiation stays lazy.
    pub fn add_type(&mut self, name: &str, descriptor: TypeDescriptor) -> Result<()> {
        if self.descriptors.contains_key(name) {
            return Err(Error::type_exists(name));
        }

        tracing::debug!(name, implementation = descriptor.impl_name, "registered type");
        self.descriptors.insert(name.to_owned(), descriptor);

        Ok(())
    }

    /// Membership test against the descriptor map; no side effects.
    pub fn has_type(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Replace the implementation behind an already-registered name.
    ///
    /// Evicts any cached instance so the next [`get_type`][Self::get_type]
    /// resolves to the new implementation.
    pub fn override_type(&mut self, name: &str, descriptor: TypeDescriptor) -> Result<()> {
        if !self.descriptors.contains_key(name) {
            return Err(Error::type_not_found(name));
        }

        self.instances.remove(name);
        tracing::debug!(name, implementation = descriptor.impl_name, "overrode type");
        self.descriptors.insert(name.to_owned(), descriptor);

        Ok(())
    }

    /// Read-only snapshot of name → implementation-identifier pairs.
    pub fn types_map(&self) -> BTreeMap<String, &'static str> {
        self.descriptors
            .iter()
            .map(|(name, descriptor)| (name.clone(), descriptor.impl_name))
            .collect()
    }

    /// Reverse lookup: the logical name behind an instance.
    ///
    /// Searches the instance cache by identity first, then the descriptor
    /// map by implementation identity.
    pub fn lookup_name(&self, instance: &Arc<dyn Type>) -> Result<&str> {
        for (name, cached) in &self.instances {
            if Arc::ptr_eq(cached, instance) {
                return Ok(name);
            }
        }

        let impl_id = <dyn Any>::type_id(&**instance);
        for (name, descriptor) in &self.descriptors {
            if descriptor.impl_id == impl_id {
                return Ok(name);
            }
        }

        Err(Error::type_not_found(instance.name()))
    }

    /// The cached instance for a name, if one was already created. Read-only
    /// counterpart of [`get_type`][Self::get_type].
    pub(crate) fn cached(&self, name: &str) -> Option<Arc<dyn Type>> {
        self.instances.get(name).map(Arc::clone)
    }

    /// Seed one built-in descriptor. Built-in names are unique by
    /// construction, so this bypasses the duplicate check.
    pub(crate) fn register_builtin(&mut self, name: &str, descriptor: TypeDescriptor) {
        self.descriptors.insert(name.to_owned(), descriptor);
    }
}
