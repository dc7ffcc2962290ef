//! Macro for wire-level string enums
//!
//! The backend exchanges roles and statuses as lowercase strings. This macro
//! keeps `as_str`, `Display` and `FromStr` in one mapping for query
//! parameters and stored labels. JSON spelling comes from each enum's serde
//! attributes, which are strict and case-sensitive; they must name the same
//! labels. `FromStr` is the lenient path and also accepts case variants.
//!
//! # Example
//!
//! ```rust
//! use jobboard_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Visibility {
//!     Public,
//!     Hidden,
//! }
//!
//! impl_wire_enum_conversions!(Visibility {
//!     Public => "public",
//!     Hidden => "hidden",
//! });
//!
//! assert_eq!(Visibility::Hidden.as_str(), "hidden");
//! assert_eq!("PUBLIC".parse::<Visibility>(), Ok(Visibility::Public));
//! ```

/// Implements `as_str`, `Display` and `FromStr` for wire enums
///
/// Parsing trims surrounding whitespace and ignores case; the error names the
/// enum and echoes the rejected input.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of this variant
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Shift {
        Day,
        Night,
    }

    impl_wire_enum_conversions!(Shift {
        Day => "day",
        Night => "night",
    });

    #[test]
    fn display_uses_wire_string() {
        assert_eq!(Shift::Day.to_string(), "day");
        assert_eq!(Shift::Night.as_str(), "night");
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Shift::from_str("NIGHT").unwrap(), Shift::Night);
        assert_eq!(Shift::from_str("  Day ").unwrap(), Shift::Day);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = Shift::from_str("evening").unwrap_err();
        assert_eq!(err, "Invalid Shift: evening");
        assert!(Shift::from_str("").is_err());
    }
}
