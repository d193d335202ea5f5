//! Leaderboard module - orders students by points with shared positions on ties

use serde::Serialize;

use crate::ranks::{compute_total_points, points_to_rank, Rank};
use crate::types::StudentActivity;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position; tied students share a position.
    pub position: u32,
    pub student_id: String,
    pub display_name: Option<String>,
    pub points: u32,
    pub rank: Rank,
}

/// Orders students by points for a leaderboard view.
///
/// Students are sorted by points (highest first), with ties ordered by
/// `student_id` so the output is stable across calls. Positions use standard
/// competition ranking: equal scores share a position and the next distinct
/// score skips ahead (100, 80, 80, 50 -> 1, 2, 2, 4).
pub fn build_leaderboard(students: &[StudentActivity]) -> Vec<LeaderboardEntry> {
    let mut scored: Vec<(&StudentActivity, u32)> = students
        .iter()
        .map(|student| (student, compute_total_points(&student.counts)))
        .collect();

    scored.sort_by(|(a, a_points), (b, b_points)| {
        b_points
            .cmp(a_points)
            .then_with(|| a.student_id.cmp(&b.student_id))
    });

    let mut entries = Vec::with_capacity(scored.len());
    let mut position = 0u32;
    let mut previous_points: Option<u32> = None;

    for (index, (student, points)) in scored.into_iter().enumerate() {
        if previous_points != Some(points) {
            position = index as u32 + 1;
            previous_points = Some(points);
        }

        entries.push(LeaderboardEntry {
            position,
            student_id: student.student_id.clone(),
            display_name: student.display_name.clone(),
            points,
            rank: points_to_rank(points),
        });
    }

    log::debug!("Built leaderboard with {} entries", entries.len());

    entries
}

/// Keeps the first `n` entries. Students tied with the last kept entry are
/// not pulled in.
pub fn top_n(mut entries: Vec<LeaderboardEntry>, n: usize) -> Vec<LeaderboardEntry> {
    entries.truncate(n);
    entries
}
