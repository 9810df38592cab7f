//! Routing addresses and their JSON descriptor codec
//!
//! An EMTP address is an ordered tuple of scalar components:
//! ```text
//! ["local", null, "example"]
//! [1, 2, 3]
//! ```
//!
//! The textual form above is the wire descriptor carried inside frames.
//! `null` is a distinct, valid component, not an absent one: `["a", null]`
//! and `["a"]` are different addresses. Addresses are value types with
//! equality, hashing and ordering over the full component sequence, so they
//! serve directly as registry keys.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One component of an address
///
/// Serde is untagged, so the JSON forms are `null`, `17`, `"local"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component {
    Null,
    Int(i64),
    Str(String),
}

impl From<i64> for Component {
    fn from(v: i64) -> Self {
        Component::Int(v)
    }
}

impl From<&str> for Component {
    fn from(v: &str) -> Self {
        Component::Str(v.to_string())
    }
}

impl From<String> for Component {
    fn from(v: String) -> Self {
        Component::Str(v)
    }
}

/// An ordered, non-empty tuple of components identifying a routing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(Vec<Component>);

impl Address {
    /// Create an address from components. Fails on an empty sequence.
    pub fn new(components: Vec<Component>) -> Result<Self> {
        if components.is_empty() {
            return Err(Error::EmptyAddress);
        }
        Ok(Self(components))
    }

    /// Decode the JSON wire descriptor, e.g. `["local",null,"example"]`.
    pub fn from_descriptor(bytes: &[u8]) -> Result<Self> {
        let address: Address =
            serde_json::from_slice(bytes).map_err(|e| Error::BadDescriptor(e.to_string()))?;
        if address.0.is_empty() {
            return Err(Error::EmptyAddress);
        }
        Ok(address)
    }

    /// Encode to the JSON wire descriptor.
    pub fn to_descriptor(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::BadDescriptor(e.to_string()))
    }

    /// Get the address components
    pub fn components(&self) -> &[Component] {
        &self.0
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no components
    ///
    /// Constructors reject empty component sequences, so this only returns
    /// true for values deserialized outside [`Address::from_descriptor`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str("<address>"),
        }
    }
}

impl TryFrom<&[Component]> for Address {
    type Error = Error;

    fn try_from(components: &[Component]) -> Result<Self> {
        Address::new(components.to_vec())
    }
}
