use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Poll {
    pub id: i64,
    pub group_id: i64,
    pub question: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PollVote {
    pub id: i64,
    pub poll_id: i64,
    pub user_id: i64,
    pub choice: bool,
    pub voted_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone, Copy)]
pub struct VoteTally {
    pub total: i64,
    pub yes: i64,
}

#[derive(Debug, Serialize)]
pub struct PollResults {
    pub poll_id: i64,
    pub question: String,
    pub total_votes: i64,
    pub yes_votes: i64,
    pub no_votes: i64,
    pub yes_percentage: f64,
    pub no_percentage: f64,
}

impl PollResults {
    pub fn from_tally(poll: &Poll, tally: VoteTally) -> Self {
        let no = tally.total - tally.yes;
        // Percentages stay at 0 for a poll nobody voted on.
        let (yes_pct, no_pct) = if tally.total > 0 {
            let total = tally.total as f64;
            (tally.yes as f64 / total * 100.0, no as f64 / total * 100.0)
        } else {
            (0.0, 0.0)
        };

        Self {
            poll_id: poll.id,
            question: poll.question.clone(),
            total_votes: tally.total,
            yes_votes: tally.yes,
            no_votes: no,
            yes_percentage: yes_pct,
            no_percentage: no_pct,
        }
    }
}
