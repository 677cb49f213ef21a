//! Measurement analytics engine
//!
//! Owns the per-user biometric profile and its measurement history, and
//! computes BMI, optimal weight bands, health classification, recency-aware
//! weight deltas and the weekly leaderboard. Pure business logic: every
//! operation takes the current calendar date as an argument and performs no I/O.

pub mod decimal;
pub mod health;
pub mod history;
pub mod profile;
pub mod ranking;

pub use health::{Assessment, BmiBand, BmiCategory, HealthReport, WeightRange, ADULT_AGE};
pub use history::{RecentWeights, WeightTrend, MONTH_DAYS, WEEK_DAYS};
pub use profile::{Gender, MeasurementEntry, Registry, UserProfile};
pub use ranking::{rank_by_weekly_change, ChangeDirection, PercentChange, RankingEntry};

pub use rust_decimal::Decimal;
