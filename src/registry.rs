//! Model Registry
//!
//! Owns the ordered catalog and maps ids to definitions. The registry is
//! immutable after construction and holds no built models, so the
//! process-wide instance returned by [`ModelRegistry::global`] can be read
//! from any thread without locking.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{KitbashError, Result};
use crate::models::{BuiltModel, ModelDefinition, ModelDescriptor};

static GLOBAL: LazyLock<ModelRegistry> = LazyLock::new(|| ModelRegistry::new(&ModelDefinition::ALL));

#[derive(Debug)]
pub struct ModelRegistry {
    models: &'static [ModelDefinition],
    index: FxHashMap<&'static str, usize>,
}

impl ModelRegistry {
    /// The catalog shipped with the crate, built on first access.
    #[must_use]
    pub fn global() -> &'static ModelRegistry {
        &GLOBAL
    }

    /// Indexes `models` by id. If an id repeats, lookups resolve to its first
    /// occurrence; [`validate`](Self::validate) reports the duplicate.
    #[must_use]
    pub fn new(models: &'static [ModelDefinition]) -> Self {
        let mut index = FxHashMap::with_capacity_and_hasher(models.len(), Default::default());
        for (i, model) in models.iter().enumerate() {
            if index.contains_key(model.id()) {
                log::warn!("Duplicate model id '{}' at position {i}, keeping the first", model.id());
                continue;
            }
            index.insert(model.id(), i);
        }
        log::debug!("Model registry indexed {} definitions", models.len());
        Self { models, index }
    }

    /// Every definition in authored order.
    #[inline]
    #[must_use]
    pub fn list_all(&self) -> &[ModelDefinition] {
        self.models
    }

    /// Metadata-only view of the catalog, in authored order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<ModelDescriptor> {
        self.models.iter().map(|m| *m.descriptor()).collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.models.iter().map(|m| m.id())
    }

    /// Exact-match lookup. `None` is an expected outcome, not a fault.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&ModelDefinition> {
        self.index.get(id).map(|&i| &self.models[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Builds a fresh instance of `id`, or returns `None` if no entry has that id.
    ///
    /// Nothing is cached: every call assembles a new model.
    #[must_use]
    pub fn construct(&self, id: &str) -> Option<BuiltModel> {
        let Some(definition) = self.find_by_id(id) else {
            log::warn!("construct: unknown model id '{id}'");
            return None;
        };
        Some(definition.build())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Checks catalog invariants: unique ids, and declared part counts equal to
    /// the number of surfaces each definition actually builds.
    ///
    /// Builds every model once; meant for tests and startup checks.
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for model in self.models {
            if !seen.insert(model.id()) {
                return Err(KitbashError::DuplicateModelId(model.id().to_owned()));
            }
        }

        for model in self.models {
            let built = model.build().part_count();
            let declared = model.part_count();
            if built != declared {
                return Err(KitbashError::PartCountMismatch {
                    id: model.id().to_owned(),
                    declared,
                    built,
                });
            }
        }

        Ok(())
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new(&ModelDefinition::ALL)
    }
}
