//! Wall clock in the bot's home time zone

use chrono::{NaiveDate, Utc};
use chrono_tz::Europe::Kiev;

use crate::traits::Clock;

/// Calendar dates as seen in Kyiv
#[derive(Debug, Clone, Copy, Default)]
pub struct KyivClock;

impl Clock for KyivClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&Kiev).date_naive()
    }
}
