//! Identifier newtypes
//!
//! Account and budget IDs wrap a UUID each, so one cannot be passed where
//! the other is expected. IDs order by their UUID; the transfer matcher
//! relies on that order to break ties between equal amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $short_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        /// Short form for terminal output: prefix plus the first 8 hex digits
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let simple = self.0.simple().to_string();
                write!(f, "{}{}", $short_prefix, &simple[..8])
            }
        }

        /// Accepts a bare UUID or one carrying the display prefix
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.strip_prefix($short_prefix).unwrap_or(s);
                Uuid::parse_str(raw).map(Self)
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(BudgetId, "bud-");
