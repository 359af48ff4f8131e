//! Crop catalog models

use serde::{Deserialize, Serialize};

use crate::types::Season;

/// A crop entry in the caller's catalog
///
/// The wire shape matches exported catalog files: camelCase keys with a
/// `type` discriminator of `"renewable"` or `"single"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CropDefinition {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub kind: CropKind,
    /// Cost to plant one plot
    pub seed_cost: i64,
    /// Revenue per harvest, per plot
    pub profit_per_harvest: i64,
    pub days_to_mature: u32,
    pub seasons: Vec<Season>,
    /// Display only
    #[serde(default)]
    pub is_tree: bool,
    #[serde(default)]
    pub is_disabled: bool,
}

/// Economic behaviour of a crop over a season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CropKind {
    /// Planted once, harvested again every `days_to_reflower` days
    #[serde(rename = "renewable", rename_all = "camelCase")]
    Renewable { days_to_reflower: u32 },
    /// Replanted after every harvest
    #[serde(rename = "single", alias = "single-use")]
    SingleUse,
}

impl CropKind {
    pub fn is_renewable(&self) -> bool {
        matches!(self, CropKind::Renewable { .. })
    }
}

impl std::fmt::Display for CropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropKind::Renewable { .. } => write!(f, "Renewable"),
            CropKind::SingleUse => write!(f, "Single Use"),
        }
    }
}

impl CropDefinition {
    /// Whether the crop takes part in planning for `season`
    pub fn is_available_in(&self, season: Season) -> bool {
        !self.is_disabled && self.seasons.contains(&season)
    }
}
