//! Tri-state configuration values.
//!
//! Declared configuration distinguishes three states per field: the caller
//! said nothing ([`Field::Unset`]), the caller explicitly declared "no
//! value" ([`Field::Null`]), and the caller declared a concrete value
//! ([`Field::Value`]). Only the latter two are ever sent to a device;
//! unset fields are omitted from write payloads entirely so the device
//! keeps whatever it already has.

use serde::{Serialize, Serializer};

/// A declared-configuration value that may be unset, explicitly null, or set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// Not declared. Omitted from write payloads.
    #[default]
    Unset,
    /// Declared as explicitly absent. Serialized as JSON `null`.
    Null,
    /// Declared with a concrete value.
    Value(T),
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The concrete value, if one was declared.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Decode a value read from the device. Devices report only present
    /// values; an absent key reads back as [`Field::Unset`].
    pub fn from_wire(wire: Option<T>) -> Self {
        match wire {
            Some(v) => Self::Value(v),
            None => Self::Unset,
        }
    }

    /// Encode for a write payload: `None` means omit the key entirely,
    /// `Some(None)` means send JSON `null`, `Some(Some(v))` means send `v`.
    pub fn to_wire(&self) -> Option<Option<&T>> {
        match self {
            Self::Unset => None,
            Self::Null => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Unset => Field::Unset,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Unset => Field::Unset,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(f(v)),
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

// `Unset` only reaches the serializer when a struct forgets its
// `skip_serializing_if = "Field::is_unset"` attribute; emitting null there
// keeps the output valid JSON rather than panicking mid-serialization.
impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}
