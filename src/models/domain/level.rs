use serde::{Deserialize, Serialize};

/// Derived level standing for a cumulative XP total.
/// Invariants: `level >= 1`, `0 <= xp < xp_needed_for_level`,
/// `xp_needed_for_level >= 100` and strictly increasing per level.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub level: u32,
    pub xp: i64,
    pub xp_needed_for_level: i64,
}

impl LevelInfo {
    /// XP still missing before the next level.
    pub fn xp_to_next_level(&self) -> i64 {
        self.xp_needed_for_level - self.xp
    }

    /// Fill ratio for a progress bar, in `[0.0, 1.0)`.
    pub fn progress_ratio(&self) -> f64 {
        self.xp as f64 / self.xp_needed_for_level as f64
    }
}
