//! Recency-aware queries over a profile's measurement history

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::exact;
use crate::profile::UserProfile;

/// Window for the weekly difference and the leaderboard
pub const WEEK_DAYS: u32 = 7;
/// Window for the monthly difference
pub const MONTH_DAYS: u32 = 30;

/// Weights recorded today and yesterday.
///
/// `latest` is only set when neither day has an entry and history is not empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentWeights {
    pub today: Option<f64>,
    pub yesterday: Option<f64>,
    pub latest: Option<NaiveDate>,
}

/// Direction and magnitude of the average daily change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightTrend {
    /// Average gain in kilograms
    Gain(Decimal),
    /// Average loss in kilograms, as a positive amount
    Loss(Decimal),
    Unchanged,
}

impl UserProfile {
    pub fn last_measurements(&self, today: NaiveDate) -> RecentWeights {
        let today_weight = self.measurement_on(today).map(|m| m.weight);
        let yesterday_weight = today
            .checked_sub_days(Days::new(1))
            .and_then(|yesterday| self.measurement_on(yesterday))
            .map(|m| m.weight);

        let latest = if today_weight.is_none() && yesterday_weight.is_none() {
            self.measurements.iter().map(|m| m.date).max()
        } else {
            None
        };

        RecentWeights {
            today: today_weight,
            yesterday: yesterday_weight,
            latest,
        }
    }

    /// Most recent weight minus the one before it, by date
    pub fn weight_difference(&self) -> Option<Decimal> {
        let sorted = self.newest_first();
        match sorted.as_slice() {
            [last, previous, ..] => Some(exact(last.weight) - exact(previous.weight)),
            _ => None,
        }
    }

    /// Mean of consecutive differences over the last `days` days.
    ///
    /// Entries are ordered newest first and each step is `newer - older`,
    /// so a positive mean is a gain.
    pub fn average_weight_change(&self, days: u32, today: NaiveDate) -> Option<WeightTrend> {
        let mut window: Vec<_> = self.entries_within(days, today).collect();
        if window.len() < 2 {
            return None;
        }
        window.sort_by(|a, b| b.date.cmp(&a.date));

        let total: Decimal = window
            .windows(2)
            .map(|pair| exact(pair[0].weight) - exact(pair[1].weight))
            .sum();
        let steps = Decimal::from(window.len() - 1);
        let average = total.checked_div(steps)?;

        Some(if average > Decimal::ZERO {
            WeightTrend::Gain(average)
        } else if average < Decimal::ZERO {
            WeightTrend::Loss(average.abs())
        } else {
            WeightTrend::Unchanged
        })
    }

    /// Last minus first entry of the window, in storage order
    pub fn window_difference(&self, days: u32, today: NaiveDate) -> Option<Decimal> {
        let mut window = self.entries_within(days, today);
        let first = window.next()?;
        let last = window.last()?;
        Some(exact(last.weight) - exact(first.weight))
    }

    pub fn weekly_weight_difference(&self, today: NaiveDate) -> Option<Decimal> {
        self.window_difference(WEEK_DAYS, today)
    }

    pub fn monthly_weight_difference(&self, today: NaiveDate) -> Option<Decimal> {
        self.window_difference(MONTH_DAYS, today)
    }
}
