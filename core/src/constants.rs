//! Constants module - gamification tuning values shared by the workspace

// =============================================================================
// Points
// =============================================================================

/// Points awarded for each completed lesson, material, assignment or exam.
pub const POINTS_PER_ACTIVITY: u32 = 5;

// =============================================================================
// Ranks
// =============================================================================

/// Number of rank tiers.
pub const RANKS: usize = 4;

/// Inclusive lower bound (in points) of each tier, ascending.
pub const BRONZE_THRESHOLD: u32 = 0;
pub const SILVER_THRESHOLD: u32 = 50;
pub const GOLD_THRESHOLD: u32 = 150;
pub const PLATINUM_THRESHOLD: u32 = 300;

pub const RANK_THRESHOLDS: [u32; RANKS] = [
    BRONZE_THRESHOLD,
    SILVER_THRESHOLD,
    GOLD_THRESHOLD,
    PLATINUM_THRESHOLD,
];

/// Progress reported once the top tier is reached.
pub const MAX_PROGRESS: u8 = 100;

// =============================================================================
// Leaderboard
// =============================================================================

/// Upper bound on students accepted in a single leaderboard request.
pub const MAX_LEADERBOARD_STUDENTS: usize = 1000;
