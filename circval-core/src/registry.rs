//! Named range table.
//!
//! A [`RangeRegistry`] maps names to validated [`RangeSpec`]s so code that only learns its domain at runtime (from
//! user input or a configuration file) can still wrap, convert and measure values. [`RangeRegistry::builtin`] holds
//! every predefined range keyed by its symbol.
//!
//! With the `config` feature the table can be read from TOML:
//!
//! ```toml
//! [ranges.compass]
//! lower = 0.0
//! upper = 360.0
//! zero = 0.0
//!
//! [ranges.phase]
//! lower = -0.5
//! upper = 0.5
//! ```
//!
//! `zero` is optional and defaults to `lower`.

use crate::descriptor::{convert, RangeSpec};
use crate::error::{RegistryError, RegistryResult};
use crate::ranges::*;
use crate::WrapRange;
use log::{debug, warn};
use std::collections::BTreeMap;

#[cfg(feature = "config")]
use crate::descriptor::RawRangeSpec;
#[cfg(feature = "config")]
use serde::Deserialize;
#[cfg(feature = "config")]
use std::path::Path;

/// Table of named range descriptors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeRegistry {
    ranges: BTreeMap<String, RangeSpec>,
}

/// On-disk layout: a `[ranges]` table of named entries.
#[cfg(feature = "config")]
#[derive(Debug, Deserialize)]
struct RangeConfig {
    #[serde(default)]
    ranges: BTreeMap<String, RawRangeSpec>,
}

impl RangeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every predefined range, keyed by its symbol.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register::<SignedDeg>();
        registry.register::<UnsignedDeg>();
        registry.register::<SignedRad>();
        registry.register::<UnsignedRad>();
        registry.register::<Gon>();
        registry.register::<Turn>();
        registry.register::<ClockHour>();
        registry.register::<TestRange0>();
        registry.register::<TestRange1>();
        registry.register::<TestRange2>();
        registry.register::<TestRange3>();
        registry
    }

    /// Adds or replaces a named range, returning the entry it replaced.
    pub fn insert(&mut self, name: impl Into<String>, spec: RangeSpec) -> Option<RangeSpec> {
        let name = name.into();
        let previous = self.ranges.insert(name.clone(), spec);
        if let Some(old) = &previous {
            if *old != spec {
                warn!(
                    "range '{}' redefined: [{}, {}) zero {} -> [{}, {}) zero {}",
                    name,
                    old.lower(),
                    old.upper(),
                    old.zero(),
                    spec.lower(),
                    spec.upper(),
                    spec.zero()
                );
            }
        }
        previous
    }

    /// Registers a compile-time range under its symbol.
    pub fn register<R: WrapRange>(&mut self) -> Option<RangeSpec> {
        self.insert(R::SYMBOL, RangeSpec::of::<R>())
    }

    /// Looks up a range by name.
    pub fn get(&self, name: &str) -> Option<&RangeSpec> {
        self.ranges.get(name)
    }

    /// Looks up a range by name, failing with [`RegistryError::UnknownRange`].
    pub fn lookup(&self, name: &str) -> RegistryResult<RangeSpec> {
        self.get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownRange(name.to_string()))
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.ranges.contains_key(name)
    }

    /// Number of registered ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ranges.keys().map(String::as_str)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RangeSpec)> {
        self.ranges.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Converts `value` between two named ranges.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> RegistryResult<f64> {
        Ok(convert(value, self.lookup(from)?, self.lookup(to)?))
    }

    /// Moves every entry of `other` into this registry. Entries of `other` win on name clashes.
    pub fn merge(&mut self, other: RangeRegistry) {
        let count = other.len();
        for (name, spec) in other.ranges {
            self.insert(name, spec);
        }
        debug!("merged {} ranges, registry now holds {}", count, self.len());
    }

    /// Parses a registry from TOML text.
    ///
    /// Every entry is validated; the first invalid one is reported with its name.
    #[cfg(feature = "config")]
    pub fn from_toml_str(content: &str) -> RegistryResult<Self> {
        let config: RangeConfig = toml::from_str(content)?;
        let mut registry = Self::new();
        for (name, raw) in config.ranges {
            let spec = RangeSpec::try_from(raw)
                .map_err(|source| RegistryError::InvalidRange {
                    name: name.clone(),
                    source,
                })?;
            registry.ranges.insert(name, spec);
        }
        debug!("loaded {} ranges from config", registry.len());
        Ok(registry)
    }

    /// Reads a registry from a TOML file.
    #[cfg(feature = "config")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("reading range config from {}", path.display());
        Self::from_toml_str(&content)
    }
}

impl<'a> IntoIterator for &'a RangeRegistry {
    type Item = (&'a String, &'a RangeSpec);
    type IntoIter = std::collections::btree_map::Iter<'a, String, RangeSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
