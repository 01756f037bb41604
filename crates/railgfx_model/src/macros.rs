//! Declaration macro for the game's ordinal enumerations

/// Define a fieldless enum whose persisted form is its integer ordinal.
///
/// Generates `ALL`, `ordinal()`, `label()`, `from_label()`, and the
/// `TryFrom<u32>`/`From<Self> for u32` pair serde uses for the JSON encoding.
///
/// ```ignore
/// ordinal_enum! {
///     /// Docs
///     pub enum Mode("mode") {
///         Off = 0 => "Off",
///         On = 1 => "On",
///     }
/// }
/// ```
macro_rules! ordinal_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($kind:literal) {
            $($variant:ident = $ord:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "u32", into = "u32")]
        pub enum $name {
            $($variant = $ord),+
        }

        impl $name {
            /// Every value, in ordinal order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn ordinal(self) -> u32 {
                self as u32
            }

            /// Display string for UI collaborators.
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_label(label: &str) -> Result<Self, $crate::ModelError> {
                match label {
                    $($label => Ok($name::$variant),)+
                    _ => Err($crate::ModelError::UnknownLabel {
                        kind: $kind,
                        label: label.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::ModelError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $($ord => Ok($name::$variant),)+
                    _ => Err($crate::ModelError::InvalidOrdinal { kind: $kind, value }),
                }
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.ordinal()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}
