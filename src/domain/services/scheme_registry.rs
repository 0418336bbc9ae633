//! Scheme registry
//!
//! Maps scheme names to shared descriptors so that every argument naming a
//! scheme points at the same `Arc<Scheme>`, across graphs and decode calls.
//!
//! Lookup-or-insert happens under a single lock acquisition, so concurrent
//! decoders that meet the same unknown name all receive one descriptor.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::domain::value_objects::{Scheme, WeighingFunction};

/// Outcome of [`SchemeRegistry::resolve`]
#[derive(Debug, Clone)]
pub struct Resolved {
    pub scheme: Arc<Scheme>,
    /// True when the name was unknown and a descriptor was synthesized
    pub synthesized: bool,
}

#[derive(Debug, Default)]
pub struct SchemeRegistry {
    schemes: Mutex<HashMap<String, Arc<Scheme>>>,
}

impl SchemeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding one scheme per weighing function, named after it
    pub fn with_basic_schemes() -> Self {
        let registry = Self::new();
        for weight in WeighingFunction::ALL {
            registry.register(Scheme::new(weight.as_str(), weight));
        }
        registry
    }

    /// The process-wide registry, seeded with the basic schemes
    pub fn global() -> &'static Arc<SchemeRegistry> {
        static GLOBAL: OnceLock<Arc<SchemeRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(SchemeRegistry::with_basic_schemes()))
    }

    // Entries are immutable `Arc`s, so a panic while holding the lock cannot
    // leave a half-written entry behind.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Scheme>>> {
        self.schemes.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Insert or replace a scheme
    pub fn register(&self, scheme: Scheme) -> Arc<Scheme> {
        let scheme = Arc::new(scheme);
        self.lock()
            .insert(scheme.id().to_string(), Arc::clone(&scheme));
        scheme
    }

    pub fn get(&self, name: &str) -> Option<Arc<Scheme>> {
        self.lock().get(name).cloned()
    }

    /// Look up a scheme by name, synthesizing and registering a linked
    /// scheme when the name is unknown.
    pub fn resolve(&self, name: &str) -> Resolved {
        let mut schemes = self.lock();
        if let Some(scheme) = schemes.get(name) {
            return Resolved {
                scheme: Arc::clone(scheme),
                synthesized: false,
            };
        }
        let scheme = Arc::new(Scheme::synthesized(name));
        schemes.insert(name.to_string(), Arc::clone(&scheme));
        Resolved {
            scheme,
            synthesized: true,
        }
    }

    pub fn get_or_create(&self, name: &str) -> Arc<Scheme> {
        self.resolve(name).scheme
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of all schemes, sorted by name
    pub fn schemes(&self) -> Vec<Arc<Scheme>> {
        let mut all: Vec<_> = self.lock().values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }
}
