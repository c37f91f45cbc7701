//! Coach notification composed for each stored submission.

use crate::domain::foundation::Score;

use super::ClientDetails;

/// Subject line of the coach notification.
pub const NOTICE_SUBJECT: &str = "New Wheel of Life Submission";

/// File name of the attached report.
pub const REPORT_FILENAME: &str = "wheel-of-life.pdf";

/// Plain-text body sent to the coach.
pub fn notice_body(client: &ClientDetails, values: &[Score]) -> String {
    let scores = values
        .iter()
        .map(Score::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Client: {}\nEmail: {}\nScores: {}",
        client.name().unwrap_or("Unknown"),
        client.email().unwrap_or("-"),
        scores
    )
}
