use serde::{Deserialize, Serialize};

use crate::error::RankError;

/// Completed learning activities for one student.
///
/// Counts are gathered by the caller from its own data store; the ranking
/// engine trusts them as accurate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCounts {
    #[serde(default)]
    pub completed_lessons: u32,

    #[serde(default)]
    pub completed_materials: u32,

    #[serde(default)]
    pub completed_assignments: u32,

    #[serde(default)]
    pub completed_exams: u32,
}

impl ActivityCounts {
    pub fn new(lessons: u32, materials: u32, assignments: u32, exams: u32) -> Self {
        Self {
            completed_lessons: lessons,
            completed_materials: materials,
            completed_assignments: assignments,
            completed_exams: exams,
        }
    }

    /// Builds counts from signed aggregation results.
    ///
    /// Database `COUNT(*)` columns and similar sources usually surface as
    /// signed integers. Negative values cannot be represented by the engine
    /// and are rejected instead of being clamped.
    ///
    /// # Arguments
    /// * `lessons`, `materials`, `assignments`, `exams` - Raw counts.
    ///
    /// # Returns
    /// * `Ok(ActivityCounts)` when every count fits in a `u32`.
    /// * `Err(RankError::NegativeCount)` naming the first negative field.
    /// * `Err(RankError::CountOverflow)` naming the first field above `u32::MAX`.
    pub fn try_from_signed(
        lessons: i64,
        materials: i64,
        assignments: i64,
        exams: i64,
    ) -> Result<Self, RankError> {
        Ok(Self {
            completed_lessons: checked_count("completedLessons", lessons)?,
            completed_materials: checked_count("completedMaterials", materials)?,
            completed_assignments: checked_count("completedAssignments", assignments)?,
            completed_exams: checked_count("completedExams", exams)?,
        })
    }

    /// Sum of all four counts, saturating at `u32::MAX`.
    pub fn total_activities(&self) -> u32 {
        self.completed_lessons
            .saturating_add(self.completed_materials)
            .saturating_add(self.completed_assignments)
            .saturating_add(self.completed_exams)
    }
}

fn checked_count(field: &'static str, value: i64) -> Result<u32, RankError> {
    if value < 0 {
        return Err(RankError::NegativeCount { field, value });
    }

    u32::try_from(value).map_err(|_| RankError::CountOverflow { field, value })
}

/// A student's identity together with their activity counts, as supplied to
/// leaderboard building.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentActivity {
    pub student_id: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub counts: ActivityCounts,
}
