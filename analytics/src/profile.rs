//! User profile and measurement history

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use shared::UserId;

/// Registry of every known profile, keyed by user id
pub type Registry = BTreeMap<UserId, UserProfile>;

/// Gender categories used for the under-18 BMI bands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const MALE_BUTTON: &'static str = "👨";
    pub const FEMALE_BUTTON: &'static str = "👩";

    /// Parse a keyboard button or a typed word
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "👨" | "чоловік" | "чоловіча" | "ч" | "male" | "m" => Some(Gender::Male),
            "👩" | "жінка" | "жіноча" | "ж" | "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Gender::Male => Self::MALE_BUTTON,
            Gender::Female => Self::FEMALE_BUTTON,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

/// One day's snapshot of the user's biometrics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEntry {
    pub date: NaiveDate,
    pub age: u32,
    /// Centimeters
    pub height: f64,
    /// Kilograms
    pub weight: f64,
}

/// A registered user with current biometrics and measurement history.
///
/// History holds at most one entry per calendar date. Entries are kept in
/// insertion order; queries that need chronology sort explicitly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub first_name: String,
    pub gender: Option<Gender>,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub measurements: Vec<MeasurementEntry>,
}

impl UserProfile {
    /// Create a profile with empty history
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        gender: Option<Gender>,
        age: u32,
        height: f64,
        weight: f64,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            gender,
            age,
            height,
            weight,
            measurements: Vec::new(),
        }
    }

    /// Write `today`'s entry, overwriting it in place when it already exists
    pub fn add_measurement(&mut self, age: u32, height: f64, weight: f64, today: NaiveDate) {
        match self.measurements.iter_mut().find(|m| m.date == today) {
            Some(existing) => {
                existing.age = age;
                existing.height = height;
                existing.weight = weight;
            }
            None => self.measurements.push(MeasurementEntry {
                date: today,
                age,
                height,
                weight,
            }),
        }
    }

    /// Update current biometrics and mirror them into today's history entry
    pub fn record_measurement(&mut self, age: u32, height: f64, weight: f64, today: NaiveDate) {
        self.age = age;
        self.height = height;
        self.weight = weight;
        self.add_measurement(age, height, weight, today);
    }

    pub fn rename(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn is_minor(&self) -> bool {
        self.age < crate::health::ADULT_AGE
    }

    pub fn measurement_on(&self, date: NaiveDate) -> Option<&MeasurementEntry> {
        self.measurements.iter().rev().find(|m| m.date == date)
    }

    /// Entries dated within the last `days` days (inclusive), in storage order
    pub fn entries_within(&self, days: u32, today: NaiveDate) -> impl Iterator<Item = &MeasurementEntry> {
        let cutoff = window_start(today, days);
        self.measurements.iter().filter(move |m| m.date >= cutoff)
    }

    /// History sorted newest first
    pub fn newest_first(&self) -> Vec<&MeasurementEntry> {
        let mut sorted: Vec<&MeasurementEntry> = self.measurements.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}

/// First date inside an N-day window ending at `today`
pub(crate) fn window_start(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}
