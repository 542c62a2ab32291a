//! Macro for implementing Display and FromStr for code enums
//!
//! Salary entry types, baseline modes and reason codes all travel as short
//! string codes (`"REGULAR"`, `"PER_EMPLOYER"`, `"missing-series-data"`).
//! This macro keeps the code table in one place and provides both
//! conversions from it.
//!
//! # Example
//!
//! ```rust
//! use wagearc_domain::impl_domain_code_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum PayCadence {
//!     Monthly,
//!     Weekly,
//! }
//!
//! impl_domain_code_conversions!(PayCadence {
//!     Monthly => "MONTHLY",
//!     Weekly => "WEEKLY",
//! });
//!
//! assert_eq!(PayCadence::Monthly.to_string(), "MONTHLY");
//! assert_eq!("weekly".parse::<PayCadence>().unwrap(), PayCadence::Weekly);
//! ```

/// Implements `code()`, Display and FromStr for code enums
///
/// This macro generates:
/// - `code(&self) -> &'static str`: the canonical code of a variant
/// - Display: writes the canonical code
/// - FromStr: parses codes case-insensitively
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical codes
#[macro_export]
macro_rules! impl_domain_code_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical string code for this variant.
            pub const fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestMode {
        Global,
        PerEmployer,
        Manual,
    }

    impl_domain_code_conversions!(TestMode {
        Global => "GLOBAL",
        PerEmployer => "PER_EMPLOYER",
        Manual => "MANUAL",
    });

    #[test]
    fn test_display_uses_canonical_code() {
        assert_eq!(TestMode::Global.to_string(), "GLOBAL");
        assert_eq!(TestMode::PerEmployer.to_string(), "PER_EMPLOYER");
        assert_eq!(TestMode::Manual.code(), "MANUAL");
    }

    #[test]
    fn test_fromstr_is_case_insensitive() {
        assert_eq!(TestMode::from_str("global").unwrap(), TestMode::Global);
        assert_eq!(TestMode::from_str("Per_Employer").unwrap(), TestMode::PerEmployer);
        assert_eq!(TestMode::from_str(" MANUAL ").unwrap(), TestMode::Manual);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestMode::from_str("LAST_RAISE");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestMode: LAST_RAISE"));
    }

    #[test]
    fn test_fromstr_empty() {
        assert!(TestMode::from_str("").is_err());
    }
}
