//! Name-to-handler registries for serializers and exporters.
//!
//! A [`FormatRegistry`] maps a format name (the handler type's name, e.g.
//! `JsonSerializer`) to a factory that builds the handler for a given
//! [`Config`]. The crate keeps two process-wide instances, one per handler
//! trait, which are built once by an explicit registration function and are
//! read-only afterwards:
//!
//! - [`serializers`]: built by [`crate::serializer::builtin_registry`]
//! - [`exporters`]: built by [`crate::output::builtin_registry`]
//!
//! Tests and embedders can build their own with [`FormatRegistry::new`].

use crate::config::Config;
use crate::output::Exporter;
use crate::serializer::Serializer;
use once_cell::sync::Lazy;
use tracing::{debug, info};

/// Builds a handler for the given configuration.
pub type Factory<H> = fn(&Config) -> Box<H>;

/// One registered format.
pub struct RegistryEntry<H: ?Sized> {
    pub name: &'static str,
    pub factory: Factory<H>,
}

impl<H: ?Sized> Clone for RegistryEntry<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            factory: self.factory,
        }
    }
}

impl<H: ?Sized> std::fmt::Debug for RegistryEntry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered mapping from format name to handler factory.
///
/// Entries keep their registration order. Registering an existing name
/// replaces its factory in place (last registration wins).
pub struct FormatRegistry<H: ?Sized> {
    entries: Vec<RegistryEntry<H>>,
}

impl<H: ?Sized> Default for FormatRegistry<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H: ?Sized> FormatRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`.
    ///
    /// # Returns
    /// * `Option<Factory<H>>` - The factory previously registered under `name`, if any
    pub fn register(&mut self, name: &'static str, factory: Factory<H>) -> Option<Factory<H>> {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                debug!("Format {} re-registered, replacing previous handler", name);
                Some(std::mem::replace(&mut entry.factory, factory))
            }
            None => {
                self.entries.push(RegistryEntry { name, factory });
                None
            }
        }
    }

    /// Current entries in registration order.
    pub fn list(&self) -> &[RegistryEntry<H>] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn get(&self, name: &str) -> Option<Factory<H>> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.factory)
    }

    /// Builds the handler registered under `name`.
    pub fn create(&self, name: &str, config: &Config) -> Option<Box<H>> {
        self.get(name).map(|factory| factory(config))
    }

    /// Builds every registered handler, in registration order.
    pub fn create_all(&self, config: &Config) -> Vec<Box<H>> {
        self.entries.iter().map(|e| (e.factory)(config)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logs how many formats this registry supports and their names.
    pub fn report_supported(&self, kind: &str) {
        info!("Totally {} {} formats are supported", self.len(), kind);
        info!("Registered {} : {}", kind, self.names().join(", "));
    }
}

static SERIALIZERS: Lazy<FormatRegistry<dyn Serializer>> =
    Lazy::new(crate::serializer::builtin_registry);

static EXPORTERS: Lazy<FormatRegistry<dyn Exporter>> = Lazy::new(crate::output::builtin_registry);

/// Process-wide serializer registry.
pub fn serializers() -> &'static FormatRegistry<dyn Serializer> {
    &SERIALIZERS
}

/// Process-wide exporter registry.
pub fn exporters() -> &'static FormatRegistry<dyn Exporter> {
    &EXPORTERS
}
