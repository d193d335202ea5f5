use serde::{Deserialize, Serialize};

use crate::leaderboard::LeaderboardEntry;
use crate::ranks::{Rank, RankStyle};
use crate::types::StudentActivity;

/// One row of the static tier table served by `GET /ranks`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankTier {
    pub rank: Rank,
    pub threshold: u32,
    pub style: RankStyle,
}

impl From<Rank> for RankTier {
    fn from(rank: Rank) -> Self {
        Self {
            rank,
            threshold: rank.threshold(),
            style: *rank.style(),
        }
    }
}

/// All tiers, lowest first.
pub fn rank_tiers() -> Vec<RankTier> {
    Rank::ALL.iter().copied().map(RankTier::from).collect()
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeaderboardRequest {
    pub students: Vec<StudentActivity>,

    /// Maximum number of entries to return; all entries when absent.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_listed_in_ascending_threshold_order() {
        let tiers = rank_tiers();
        let thresholds: Vec<u32> = tiers.iter().map(|t| t.threshold).collect();
        assert_eq!(thresholds, [0, 50, 150, 300]);
        assert_eq!(tiers[3].rank, Rank::Platinum);
        assert_eq!(tiers[3].style.label, "Platinum");
    }

    #[test]
    fn leaderboard_request_limit_is_optional() {
        let request: LeaderboardRequest = serde_json::from_str(
            r#"{"students": [{"studentId": "s1", "counts": {"completedLessons": 2}}]}"#,
        )
        .unwrap();
        assert_eq!(request.limit, None);
        assert_eq!(request.students[0].student_id, "s1");
        assert_eq!(request.students[0].display_name, None);
        assert_eq!(request.students[0].counts.completed_lessons, 2);
    }
}
