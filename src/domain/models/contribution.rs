use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Contribution {
    pub id: i64,
    pub group_id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub contribution_date: DateTime<Utc>,
}

/// A contribution row joined with the contributor's display name.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct ContributionRecord {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub amount: f64,
    pub contribution_date: DateTime<Utc>,
}

/// Rounds a monetary amount to two decimal places, half away from zero
/// (`f64::round` on the value scaled by 100). A midpoint like 50.005 rounds
/// up to 50.01.
pub fn round_amount(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimal_places() {
        assert_eq!(round_amount(50.0), 50.0);
        assert_eq!(round_amount(50.004), 50.0);
        assert_eq!(round_amount(50.006), 50.01);
        assert_eq!(round_amount(10.126), 10.13);
        assert_eq!(round_amount(10.124), 10.12);
    }

    #[test]
    fn midpoints_round_half_up() {
        assert_eq!(round_amount(50.005), 50.01);
        assert_eq!(round_amount(12.345), 12.35);
        assert_eq!(round_amount(0.015), 0.02);
    }
}
