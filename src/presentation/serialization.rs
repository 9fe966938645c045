/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Helpers for broker-defined enumerated string fields.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserializes an explicit `null` as the type's default value
///
/// Use together with `#[serde(default)]` so that a missing key behaves the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A closed set of broker literals
pub trait WireEnum: Sized + Copy {
    /// Every literal accepted on the wire, in declaration order
    const VARIANTS: &'static [&'static str];

    /// The wire literal of this value
    fn as_str(&self) -> &'static str;

    /// Looks up a value by its exact wire literal
    fn from_wire(value: &str) -> Option<Self>;
}

/// Value of an enumerated field as received from a caller.
///
/// Recognised literals are kept typed; anything else is kept verbatim so
/// that validation can report it instead of deserialization failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Enumerated<T> {
    /// A literal inside the broker domain
    Known(T),
    /// A literal outside the broker domain
    Unrecognized(String),
}

impl<T: WireEnum> Enumerated<T> {
    /// Classifies a raw literal
    pub fn parse(value: &str) -> Self {
        match T::from_wire(value) {
            Some(known) => Enumerated::Known(known),
            None => Enumerated::Unrecognized(value.to_string()),
        }
    }

    /// The typed value, if recognised
    pub fn known(&self) -> Option<T> {
        match self {
            Enumerated::Known(value) => Some(*value),
            Enumerated::Unrecognized(_) => None,
        }
    }

    /// Returns `true` when the literal belongs to the domain
    pub fn is_known(&self) -> bool {
        matches!(self, Enumerated::Known(_))
    }

    /// The literal as it will appear on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Enumerated::Known(value) => value.as_str(),
            Enumerated::Unrecognized(raw) => raw,
        }
    }
}

impl<T: WireEnum> fmt::Display for Enumerated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: WireEnum> From<&str> for Enumerated<T> {
    fn from(value: &str) -> Self {
        Enumerated::parse(value)
    }
}

impl<T: WireEnum> From<String> for Enumerated<T> {
    fn from(value: String) -> Self {
        Enumerated::parse(&value)
    }
}

/// Implements [`WireEnum`], `FromStr`, `Display` and the conversion into
/// [`Enumerated`] for a unit-only enum with serde-renamed variants.
macro_rules! wire_enum {
    ($ty:ident { $($variant:ident => $literal:literal),+ $(,)? }) => {
        impl $crate::presentation::serialization::WireEnum for $ty {
            const VARIANTS: &'static [&'static str] = &[$($literal),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $literal),+
                }
            }

            fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($literal => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::error::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::presentation::serialization::WireEnum>::from_wire(s).ok_or_else(|| {
                    $crate::error::AppError::InvalidInput(format!(
                        "'{}' is not a valid {}",
                        s,
                        stringify!($ty)
                    ))
                })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(<$ty as $crate::presentation::serialization::WireEnum>::as_str(self))
            }
        }

        impl From<$ty> for $crate::presentation::serialization::Enumerated<$ty> {
            fn from(value: $ty) -> Self {
                $crate::presentation::serialization::Enumerated::Known(value)
            }
        }
    };
}

pub(crate) use wire_enum;
