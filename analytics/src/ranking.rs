//! Leaderboard of weekly percentage weight change

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::exact;
use crate::history::WEEK_DAYS;
use crate::profile::UserProfile;
use shared::UserId;

/// Percentage change over the window.
///
/// `Unbounded` stands in for an undefined change (a zero starting weight)
/// and orders above every finite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PercentChange {
    Finite(Decimal),
    Unbounded,
}

impl PercentChange {
    fn between(first: Decimal, last: Decimal) -> Self {
        if first.is_zero() {
            return PercentChange::Unbounded;
        }
        (last - first)
            .checked_div(first)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(PercentChange::Unbounded, PercentChange::Finite)
    }

    pub fn direction(&self) -> ChangeDirection {
        match self {
            PercentChange::Finite(value) if value.is_sign_negative() && !value.is_zero() => {
                ChangeDirection::Decrease
            }
            PercentChange::Finite(value) if value.is_zero() => ChangeDirection::NoChange,
            PercentChange::Finite(_) | PercentChange::Unbounded => ChangeDirection::Increase,
        }
    }

    /// Absolute value, `None` when unbounded
    pub fn magnitude(&self) -> Option<Decimal> {
        match self {
            PercentChange::Finite(value) => Some(value.abs()),
            PercentChange::Unbounded => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeDirection {
    Decrease,
    Increase,
    NoChange,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub user_id: UserId,
    pub name: String,
    pub change: PercentChange,
    pub direction: ChangeDirection,
}

/// Rank users by percentage change over the last week, biggest loss first.
///
/// Each profile's window keeps storage order; its first and last entries
/// give the change. Profiles with fewer than two entries in the window are
/// skipped. Ties keep input order.
pub fn rank_by_weekly_change<'a, I>(profiles: I, today: NaiveDate) -> Vec<RankingEntry>
where
    I: IntoIterator<Item = &'a UserProfile>,
{
    let mut ranking: Vec<RankingEntry> = profiles
        .into_iter()
        .filter_map(|profile| {
            let mut window = profile.entries_within(WEEK_DAYS, today);
            let first = window.next()?;
            let last = window.last()?;
            let change = PercentChange::between(exact(first.weight), exact(last.weight));

            Some(RankingEntry {
                user_id: profile.id,
                name: profile.first_name.clone(),
                change,
                direction: change.direction(),
            })
        })
        .collect();

    ranking.sort_by(|a, b| a.change.cmp(&b.change));
    ranking
}
