use crate::errors::{AppError, AppResult};
use crate::models::domain::LevelInfo;

/// Map a cumulative XP total to its level standing.
///
/// The threshold to leave level L is `100 + 50 * (L - 1)`, so the sequence
/// runs 100, 150, 200, ... Terminates in O(sqrt(total_xp)) iterations since
/// the threshold strictly increases.
pub fn level_of(total_xp: i64) -> AppResult<LevelInfo> {
    if total_xp < 0 {
        return Err(AppError::ValidationError(format!(
            "Total XP must be non-negative, got {}",
            total_xp
        )));
    }

    let mut level: u32 = 1;
    let mut threshold: i64 = 100;
    let mut remaining = total_xp;

    while remaining >= threshold {
        remaining -= threshold;
        level += 1;
        threshold += 50;
    }

    Ok(LevelInfo {
        level,
        xp: remaining,
        xp_needed_for_level: threshold,
    })
}
