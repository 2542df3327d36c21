//! `Attribute` — an opaque schema attribute symbol.
//!
//! Equality is exact, case-sensitive string match (spec §3). Ordering is
//! byte-wise lexicographic, which is what every canonical serialization in
//! this crate relies on (spec §6).

use crate::errors::SchemaError;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attribute(String);

impl Attribute {
    /// Admit a new attribute. Rejects the empty string; attributes have no
    /// other internal structure (spec §3).
    pub fn new(name: impl Into<String>) -> Result<Self, SchemaError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SchemaError::EmptyAttributeName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Attribute {
    type Err = SchemaError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Attribute> for String {
    fn from(a: Attribute) -> String {
        a.0
    }
}
