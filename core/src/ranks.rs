//! Ranks module - points to rank tier, next threshold and progress

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BRONZE_THRESHOLD, GOLD_THRESHOLD, MAX_PROGRESS, PLATINUM_THRESHOLD, POINTS_PER_ACTIVITY,
    RANK_THRESHOLDS, RANKS, SILVER_THRESHOLD,
};
use crate::types::ActivityCounts;

/// Gamification tier, ordered from lowest to highest.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum Rank {
    Bronze = 0,
    Silver = 1,
    Gold = 2,
    Platinum = 3,
}

/// Display metadata for a rank badge.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankStyle {
    pub label: &'static str,

    /// CSS hex color of the badge.
    pub color: &'static str,

    /// Icon identifier understood by the presentation layer.
    pub icon: &'static str,
}

/// Badge metadata indexed by `Rank as usize`.
pub const RANK_STYLES: [RankStyle; RANKS] = [
    RankStyle {
        label: "Bronze",
        color: "#CD7F32",
        icon: "medal",
    },
    RankStyle {
        label: "Silver",
        color: "#C0C0C0",
        icon: "award",
    },
    RankStyle {
        label: "Gold",
        color: "#FFD700",
        icon: "trophy",
    },
    RankStyle {
        label: "Platinum",
        color: "#E5E4E2",
        icon: "crown",
    },
];

impl Rank {
    pub const ALL: [Rank; RANKS] = [Rank::Bronze, Rank::Silver, Rank::Gold, Rank::Platinum];

    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Minimum points required to hold this rank.
    pub fn threshold(&self) -> u32 {
        RANK_THRESHOLDS[*self as usize]
    }

    /// The tier above this one, or `None` for the top tier.
    pub fn next(&self) -> Option<Rank> {
        Self::from_u32(*self as u32 + 1)
    }

    pub fn style(&self) -> &'static RankStyle {
        &RANK_STYLES[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.style().label
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank, points and progress derived from a point total. Never stored.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankInfo {
    pub rank: Rank,
    pub points: u32,
    pub next_rank_points: Option<u32>,

    /// Percentage (0..=100) of the way from the current threshold to the next.
    pub progress: u8,

    pub style: RankStyle,
}

/// Total points earned for a set of completed activities.
///
/// Every completed lesson, material, assignment and exam is worth
/// `POINTS_PER_ACTIVITY` points. The result saturates at `u32::MAX`.
pub fn compute_total_points(counts: &ActivityCounts) -> u32 {
    counts.total_activities().saturating_mul(POINTS_PER_ACTIVITY)
}

/// Map total points to a rank.
///
/// Thresholds are inclusive lower bounds, so a value sitting exactly on a
/// threshold belongs to the rank that threshold introduces.
pub fn points_to_rank(points: u32) -> Rank {
    match points {
        BRONZE_THRESHOLD..SILVER_THRESHOLD => Rank::Bronze,
        SILVER_THRESHOLD..GOLD_THRESHOLD => Rank::Silver,
        GOLD_THRESHOLD..PLATINUM_THRESHOLD => Rank::Gold,
        _ => Rank::Platinum,
    }
}

/// Classify a point total into its rank, next threshold and progress.
///
/// # Arguments
/// * `points` - Total points, usually from `compute_total_points`.
///
/// # Returns
/// * `RankInfo` with `next_rank_points == None` and `progress == 100` once
///   the top tier is reached.
pub fn classify_rank(points: u32) -> RankInfo {
    let rank = points_to_rank(points);
    let next_rank_points = rank.next().map(|next| next.threshold());

    let progress = match next_rank_points {
        Some(next) => interpolate_progress(points, rank.threshold(), next),
        None => MAX_PROGRESS,
    };

    RankInfo {
        rank,
        points,
        next_rank_points,
        progress,
        style: *rank.style(),
    }
}

/// Convenience wrapper: `classify_rank(compute_total_points(counts))`.
pub fn rank_info_for(counts: &ActivityCounts) -> RankInfo {
    classify_rank(compute_total_points(counts))
}

/// Points still missing before the next rank, or `None` at the top tier.
pub fn points_to_next_rank(points: u32) -> Option<u32> {
    points_to_rank(points)
        .next()
        .map(|next| next.threshold().saturating_sub(points))
}

// round(100 * (points - current) / (next - current)), half-up, clamped to 0..=100.
fn interpolate_progress(points: u32, current: u32, next: u32) -> u8 {
    let span = next.saturating_sub(current) as u64;
    if span == 0 {
        return MAX_PROGRESS;
    }

    let gained = (points.saturating_sub(current) as u64).min(span);
    let rounded = (gained * 200 + span) / (span * 2);

    rounded.min(MAX_PROGRESS as u64) as u8
}
