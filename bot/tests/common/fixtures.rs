//! Test fixtures and data for bot tests

use chrono::{Days, NaiveDate};

use analytics::{Gender, UserProfile};
use shared::UserId;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const OLHA: i64 = 1001;
    pub const TARAS: i64 = 1002;
    pub const ADMIN_1: i64 = 9001;
    pub const ADMIN_2: i64 = 9002;
    pub const ADMIN_3: i64 = 9003;

    pub const VOICE_FILE: &'static str = "AwACAgIAAxkBAAIB";

    /// Fixed "today" for every scenario
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    pub fn days_ago(days: u64) -> NaiveDate {
        Self::today().checked_sub_days(Days::new(days)).unwrap()
    }

    pub fn user(id: i64) -> UserId {
        UserId::new(id)
    }

    /// Registered profile with one measurement per `(days_ago, weight)` pair,
    /// recorded in the given order
    pub fn profile_with_history(id: i64, name: &str, history: &[(u64, f64)]) -> UserProfile {
        let mut profile = UserProfile::new(UserId::new(id), name, Some(Gender::Female), 30, 170.0, 70.0);
        for &(days, weight) in history {
            profile.record_measurement(30, 170.0, weight, Self::days_ago(days));
        }
        profile
    }

    pub fn olha() -> UserProfile {
        Self::profile_with_history(Self::OLHA, "Оля", &[(1, 71.0)])
    }
}
