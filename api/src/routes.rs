use axum::routing::{get, post};
use axum::{extract::Path, http::StatusCode, Json, Router};
use log::{info, warn};

use edu_core::constants::MAX_LEADERBOARD_STUDENTS;
use edu_core::types::{
    rank_tiers, ErrorResponse, LeaderboardRequest, LeaderboardResponse, RankTier,
};
use edu_core::{build_leaderboard, classify_rank, rank_info_for, top_n, ActivityCounts, RankInfo};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Builds the route table without any network layers attached.
pub fn router() -> Router {
    Router::new()
        .route("/ranks", get(get_ranks))
        .route("/rank", post(rank_for_counts))
        .route("/rank/{points}", get(rank_for_points))
        .route("/leaderboard", post(leaderboard))
}

/// Lists the rank tiers, lowest first, with their thresholds and badge styles.
pub(crate) async fn get_ranks() -> Json<Vec<RankTier>> {
    Json(rank_tiers())
}

/// Classifies a raw point total.
///
/// # Arguments
/// * `points` - Path segment holding a non-negative integer.
///
/// # Returns
/// * `(StatusCode::OK, RankInfo)` on success. Values above `u32::MAX` saturate to it.
/// * `(StatusCode::BAD_REQUEST, ErrorResponse)` when the value is negative or not a number.
pub(crate) async fn rank_for_points(
    Path(points): Path<String>,
) -> Result<Json<RankInfo>, ApiError> {
    let trimmed = points.trim();

    match trimmed.parse::<u32>() {
        Ok(value) => Ok(Json(classify_rank(value))),
        Err(_) if is_unsigned_integer(trimmed) => Ok(Json(classify_rank(u32::MAX))),
        Err(_) if trimmed.parse::<i64>().is_ok_and(|v| v < 0) => {
            warn!("Rank lookup rejected: negative points {}", trimmed);
            Err(bad_request("points must not be negative"))
        }
        Err(_) => {
            warn!("Rank lookup rejected: invalid points {:?}", trimmed);
            Err(bad_request("points must be a non-negative integer"))
        }
    }
}

fn is_unsigned_integer(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Computes points and rank for one student's activity counts.
///
/// Negative or non-integer counts never reach this handler; the JSON
/// extractor rejects them.
pub(crate) async fn rank_for_counts(Json(counts): Json<ActivityCounts>) -> Json<RankInfo> {
    Json(rank_info_for(&counts))
}

/// Builds a leaderboard for the submitted students.
///
/// # Returns
/// * `(StatusCode::OK, LeaderboardResponse)` on success, truncated to `limit` when given.
/// * `(StatusCode::BAD_REQUEST, ErrorResponse)` when more than `MAX_LEADERBOARD_STUDENTS`
///   students are submitted or a student id is blank.
pub(crate) async fn leaderboard(
    Json(payload): Json<LeaderboardRequest>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    if payload.students.len() > MAX_LEADERBOARD_STUDENTS {
        warn!(
            "Leaderboard rejected: {} students exceeds limit of {}",
            payload.students.len(),
            MAX_LEADERBOARD_STUDENTS
        );
        return Err(bad_request(format!(
            "at most {} students may be ranked per request",
            MAX_LEADERBOARD_STUDENTS
        )));
    }

    if payload.students.iter().any(|s| s.student_id.trim().is_empty()) {
        warn!("Leaderboard rejected: blank student id");
        return Err(bad_request("studentId must not be empty"));
    }

    let mut entries = build_leaderboard(&payload.students);
    if let Some(limit) = payload.limit {
        entries = top_n(entries, limit as usize);
    }

    info!(
        "Leaderboard built: students={}, returned={}",
        payload.students.len(),
        entries.len()
    );

    Ok(Json(LeaderboardResponse { entries }))
}

#[cfg(test)]
mod tests {
    use super::router;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn ranks_lists_all_tiers() {
        let (status, body) = send(Method::GET, "/ranks", None).await;
        assert_eq!(status, StatusCode::OK);

        let tiers = body.as_array().unwrap();
        assert_eq!(tiers.len(), 4);
        assert_eq!(tiers[0]["rank"], "Bronze");
        assert_eq!(tiers[1]["threshold"], 50);
        assert_eq!(tiers[3]["style"]["label"], "Platinum");
    }

    #[tokio::test]
    async fn rank_for_points_classifies() {
        let (status, body) = send(Method::GET, "/rank/100", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rank"], "Silver");
        assert_eq!(body["nextRankPoints"], 150);
        assert_eq!(body["progress"], 50);
    }

    #[tokio::test]
    async fn rank_for_points_rejects_negative_values() {
        let (status, body) = send(Method::GET, "/rank/-5", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "points must not be negative");
    }

    #[tokio::test]
    async fn rank_for_points_rejects_garbage() {
        let (status, body) = send(Method::GET, "/rank/lots", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "points must be a non-negative integer");
    }

    #[tokio::test]
    async fn rank_for_points_saturates_values_above_u32() {
        let (status, body) = send(Method::GET, "/rank/5000000000", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rank"], "Platinum");
        assert_eq!(body["points"], u32::MAX);
        assert_eq!(body["progress"], 100);

        let (status, body) = send(Method::GET, "/rank/99999999999999999999999", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rank"], "Platinum");
    }

    #[tokio::test]
    async fn rank_for_counts_computes_points() {
        let counts = json!({
            "completedLessons": 3,
            "completedMaterials": 2,
            "completedAssignments": 1,
            "completedExams": 0
        });
        let (status, body) = send(Method::POST, "/rank", Some(counts)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"], 30);
        assert_eq!(body["rank"], "Bronze");
        assert_eq!(body["progress"], 60);
    }

    #[tokio::test]
    async fn rank_for_counts_rejects_negative_counts() {
        let counts = json!({ "completedLessons": -1 });
        let (status, _) = send(Method::POST, "/rank", Some(counts)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn leaderboard_orders_and_limits() {
        let payload = json!({
            "students": [
                { "studentId": "amy", "counts": { "completedLessons": 10 } },
                { "studentId": "bob", "displayName": "Bob", "counts": { "completedExams": 40 } },
                { "studentId": "cat", "counts": { "completedLessons": 10 } }
            ],
            "limit": 2
        });
        let (status, body) = send(Method::POST, "/leaderboard", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);

        let entries = body["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["studentId"], "bob");
        assert_eq!(entries[0]["displayName"], "Bob");
        assert_eq!(entries[0]["rank"], "Gold");
        assert_eq!(entries[0]["position"], 1);
        assert_eq!(entries[1]["studentId"], "amy");
        assert_eq!(entries[1]["position"], 2);
    }

    #[tokio::test]
    async fn leaderboard_rejects_blank_student_ids() {
        let payload = json!({ "students": [{ "studentId": "  " }] });
        let (status, body) = send(Method::POST, "/leaderboard", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "studentId must not be empty");
    }

    #[tokio::test]
    async fn leaderboard_rejects_oversized_requests() {
        let students: Vec<Value> = (0..=edu_core::constants::MAX_LEADERBOARD_STUDENTS)
            .map(|i| json!({ "studentId": format!("s{i}") }))
            .collect();
        let payload = json!({ "students": students });
        let (status, _) = send(Method::POST, "/leaderboard", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
