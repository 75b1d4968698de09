use crate::country;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hemisphere a country lies in, from the static reference table.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
pub enum Hemisphere {
    Northern,
    Southern,
    Unknown,
}

impl Hemisphere {
    /// The labels that aggregations report on.
    pub const KNOWN: [Hemisphere; 2] = [Hemisphere::Northern, Hemisphere::Southern];

    /// Look up an alpha-3 country code. Codes absent from the table are `Unknown`.
    pub fn for_alpha3(alpha3: &str) -> Hemisphere {
        country::hemisphere_for_alpha3(alpha3).unwrap_or(Hemisphere::Unknown)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Hemisphere::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "Northern",
            Hemisphere::Southern => "Southern",
            Hemisphere::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
