//! Record Model
//!
//! Plain data for the four entity kinds plus the shared timestamp type.
//!
//! ## Cross references
//! Interventions point at occurrences and firefighters by bare [`RecordId`].
//! Nothing checks that the target exists; a dangling id is a valid state.

/// Identifier assigned by a store's sequence counter (first id is 1)
pub type RecordId = u32;

/// Error returned when operator text does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError {
    pub kind: &'static str,
    pub input: String,
    pub expected: &'static [&'static str],
}

impl std::fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown {} '{}' (expected one of: {})",
            self.kind,
            self.input,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for ParseVariantError {}

/// An enum field stored on disk as an `i32` code
pub trait StoredCode: Copy {
    fn code(self) -> i32;

    /// Any stored code; unknown ones are kept rather than rejected
    fn from_stored(code: i32) -> Self;

    fn is_recognized(self) -> bool;
}

/// Declares an enum with a fixed on-disk code per variant, a display label
/// and case-insensitive parsing of its kebab-case name.
///
/// Every such enum also gets an `Unrecognized(code)` variant holding a code
/// read from disk that no named variant claims. It is never parsed from
/// operator text and is written back unchanged.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, $key:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Stored code outside the known range
            Unrecognized(i32),
        }

        impl $name {
            /// Every named variant, in code order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            const KEYS: &'static [&'static str] = &[$($key),+];

            /// Code stored on disk
            pub fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Unrecognized(code) => code,
                }
            }

            /// The named variant for `code`, if any
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Any stored code; unknown ones become `Unrecognized`
            pub fn from_stored(code: i32) -> Self {
                Self::from_code(code).unwrap_or($name::Unrecognized(code))
            }

            pub fn is_recognized(self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }

            /// Human readable label
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Unrecognized(_) => "Unknown",
                }
            }
        }

        impl $crate::model::StoredCode for $name {
            fn code(self) -> i32 {
                $name::code(self)
            }

            fn from_stored(code: i32) -> Self {
                $name::from_stored(code)
            }

            fn is_recognized(self) -> bool {
                $name::is_recognized(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $name::Unrecognized(code) => f.pad(&format!("Unknown ({})", code)),
                    _ => f.pad(self.label()),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::ParseVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
                match normalized.as_str() {
                    $( $key => Ok($name::$variant), )+
                    _ => Err($crate::model::ParseVariantError {
                        kind: $kind,
                        input: s.to_string(),
                        expected: Self::KEYS,
                    }),
                }
            }
        }
    };
}

mod equipment;
mod firefighter;
mod intervention;
mod occurrence;
mod timestamp;

pub use equipment::{Equipment, EquipmentStatus};
pub use firefighter::{Firefighter, FirefighterStatus};
pub use intervention::{Intervention, InterventionStatus};
pub use occurrence::{Occurrence, OccurrenceKind, OccurrenceStatus, Priority};
pub use timestamp::Timestamp;
