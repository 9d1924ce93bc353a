//! Interning registry for field instances.
//!
//! Building the tables for a field is a pure function of its parameters, so
//! every caller asking for the same [`FieldParams`] can share one instance.
//! A [`FieldRegistry`] maps parameters to the shared [`Gf2k`] handle.
//!
//! [`Gf2k::new`] goes through the process-wide registry returned by
//! [`FieldRegistry::global`]. Tests and embedders that want isolation can
//! create their own registry with [`FieldRegistry::new`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{LazyLock, PoisonError, RwLock};

use log::{debug, trace};

use super::{FieldParams, Gf2k, GfTables};
use crate::error::Result;

static GLOBAL: LazyLock<FieldRegistry> = LazyLock::new(FieldRegistry::new);

/// A map from field parameters to the unique field instance built for them.
///
/// Lookups take a read lock. On a miss the tables are built without holding
/// any lock, then the key is checked again under the write lock before
/// inserting. If another thread inserted the same key in the meantime, its
/// instance is returned and the local build is dropped.
#[derive(Default)]
pub struct FieldRegistry {
    fields: RwLock<HashMap<FieldParams, Gf2k>>,
}

impl FieldRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by [`Gf2k::new`].
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Look up an already constructed field.
    #[must_use]
    pub fn get(&self, params: FieldParams) -> Option<Gf2k> {
        // The map is never left half-updated, so a poisoned lock is still usable.
        let fields = self.fields.read().unwrap_or_else(PoisonError::into_inner);
        fields.get(&params).cloned()
    }

    /// Get the field for `(size, poly, generator)`, building it if needed.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`GfTables::new`] if the parameters
    /// do not describe a field.
    pub fn get_or_build(&self, size: u32, poly: u32, generator: u32) -> Result<Gf2k> {
        self.intern(FieldParams::new(size, poly, generator))
    }

    /// Get the field for `params`, building it if needed.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`GfTables::new`] if the parameters
    /// do not describe a field.
    pub fn intern(&self, params: FieldParams) -> Result<Gf2k> {
        if let Some(field) = self.get(params) {
            return Ok(field);
        }

        let tables = GfTables::new(params).inspect_err(|err| {
            debug!("rejected field parameters {params}: {err}");
        })?;
        debug!("built log/exp tables for {params}");
        let built = Gf2k::from_tables(tables);

        let mut fields = self.fields.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = fields.get(&params) {
            trace!("discarding concurrent build of {params}");
            return Ok(existing.clone());
        }
        fields.insert(params, built.clone());
        Ok(built)
    }

    /// Check whether a field with these parameters has been built.
    #[must_use]
    pub fn contains(&self, params: FieldParams) -> bool {
        self.get(params).is_some()
    }

    /// Number of distinct fields in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check whether the registry holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<&FieldParams> = fields.keys().collect();
        keys.sort();
        f.debug_struct("FieldRegistry").field("fields", &keys).finish()
    }
}
