/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Table-driven decoding of `type`-tagged JSON objects.
//!
//! A [`Registry`] maps each known tag to the factory of its variant. Decoding
//! is total: any input produces a value. A missing or unknown tag yields the
//! family's base shape. A known tag keeps its variant, dropping the fields
//! that fail to decode.

use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Name of the discriminator field
pub const TAG_FIELD: &str = "type";

/// Builds a variant from a JSON object
pub type Factory<V> = fn(&Value) -> Result<V, serde_json::Error>;

/// Tag to factory table for one polymorphic family
pub struct Registry<V> {
    family: &'static str,
    factories: HashMap<&'static str, Factory<V>>,
    fallback: fn(&Value) -> V,
}

impl<V> Registry<V> {
    /// Creates an empty registry; `fallback` builds the base shape
    pub fn new(family: &'static str, fallback: fn(&Value) -> V) -> Self {
        Self {
            family,
            factories: HashMap::new(),
            fallback,
        }
    }

    /// Registers the factory of a tag, replacing any previous one
    #[must_use]
    pub fn register(mut self, tag: &'static str, factory: Factory<V>) -> Self {
        self.factories.insert(tag, factory);
        self
    }

    /// Family name used in log messages
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Whether a tag has a registered factory
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Registered tags, unordered
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Number of registered tags
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no tag is registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Decodes a JSON value into the variant its tag selects.
    ///
    /// Never fails. Non-object input and objects without a recognised tag
    /// decode to the base shape. A recognised tag always reaches its factory:
    /// fields that fail to decode are dropped with a warning, and only a
    /// variant that cannot be built from the remaining fields falls back.
    pub fn decode(&self, value: &Value) -> V {
        let Some(tag) = value.get(TAG_FIELD).and_then(Value::as_str) else {
            debug!("{} without {} tag, using base shape", self.family, TAG_FIELD);
            return (self.fallback)(value);
        };

        match self.factories.get(tag) {
            Some(factory) => match factory(value) {
                Ok(variant) => variant,
                Err(e) => {
                    debug!("{} {} does not decode as a whole: {}", self.family, tag, e);
                    self.decode_leniently(tag, *factory, value)
                }
            },
            None => {
                debug!("Unknown {} type {}, using base shape", self.family, tag);
                (self.fallback)(value)
            }
        }
    }
}

impl<V> Registry<V> {
    /// Rebuilds a variant field by field, keeping every field it accepts.
    ///
    /// Passes repeat until no field is added, so a valid field rejected only
    /// because a required one was not yet present gets a second chance.
    fn decode_leniently(&self, tag: &str, factory: Factory<V>, value: &Value) -> V {
        let Value::Object(fields) = value else {
            return (self.fallback)(value);
        };

        let mut accepted = Map::new();
        accepted.insert(TAG_FIELD.to_string(), Value::String(tag.to_string()));
        let mut pending: Vec<(&String, &Value)> =
            fields.iter().filter(|(key, _)| key.as_str() != TAG_FIELD).collect();
        let mut rejected: Vec<(&String, serde_json::Error)> = Vec::new();

        loop {
            let before = pending.len();
            rejected.clear();
            pending.retain(|(key, field)| {
                let mut candidate = accepted.clone();
                candidate.insert((*key).clone(), (*field).clone());
                match factory(&Value::Object(candidate)) {
                    Ok(_) => {
                        accepted.insert((*key).clone(), (*field).clone());
                        false
                    }
                    Err(e) => {
                        rejected.push((*key, e));
                        true
                    }
                }
            });
            if pending.is_empty() || pending.len() == before {
                break;
            }
        }

        match factory(&Value::Object(accepted)) {
            Ok(variant) => {
                for (key, e) in &rejected {
                    warn!("{} {}: dropping field {}: {}", self.family, tag, key, e);
                }
                variant
            }
            Err(e) => {
                warn!("Failed to decode {} {}: {}, using base shape", self.family, tag, e);
                (self.fallback)(value)
            }
        }
    }
}

impl<V> std::fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.tags().collect();
        tags.sort_unstable();
        f.debug_struct("Registry")
            .field("family", &self.family)
            .field("tags", &tags)
            .finish()
    }
}

/// Inserts the discriminator into the serialized form of a variant
pub fn tagged_value(tag: &str, value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            map.insert(TAG_FIELD.to_string(), Value::String(tag.to_string()));
            Value::Object(map)
        }
        Value::Null => {
            let mut map = Map::new();
            map.insert(TAG_FIELD.to_string(), Value::String(tag.to_string()));
            Value::Object(map)
        }
        other => other,
    }
}
