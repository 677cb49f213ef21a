//! BMI, optimal weight bands and health classification

use serde::{Deserialize, Serialize};

use crate::profile::{Gender, UserProfile};

/// Age from which the adult BMI band and classification apply
pub const ADULT_AGE: u32 = 18;

/// Inclusive BMI interval considered healthy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BmiBand {
    pub min: f64,
    pub max: f64,
}

impl BmiBand {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

const ADULT_BAND: BmiBand = BmiBand::new(18.5, 24.9);

// Under-18 bands by age bracket: <6, 6..12, >=12
const MALE_BANDS: [BmiBand; 3] = [
    BmiBand::new(14.0, 19.0),
    BmiBand::new(16.0, 22.0),
    BmiBand::new(17.0, 23.0),
];
const FEMALE_BANDS: [BmiBand; 3] = [
    BmiBand::new(13.5, 18.5),
    BmiBand::new(15.5, 21.5),
    BmiBand::new(16.5, 22.5),
];

/// Healthy BMI band for an age and gender. Unset gender uses the female table.
pub fn bmi_band(age: u32, gender: Option<Gender>) -> BmiBand {
    if age >= ADULT_AGE {
        return ADULT_BAND;
    }

    let bands = match gender {
        Some(Gender::Male) => &MALE_BANDS,
        Some(Gender::Female) | None => &FEMALE_BANDS,
    };
    match age {
        0..=5 => bands[0],
        6..=11 => bands[1],
        _ => bands[2],
    }
}

/// Weight interval in kilograms, rounded to one decimal
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

/// Adult BMI classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityClass1,
    ObesityClass2,
    ObesityClass3,
}

impl BmiCategory {
    /// First matching half-open band wins. The gaps between bands
    /// ([24.9, 25.0), [29.9, 30.0), [34.9, 35.0)) fall through to class 3.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if (18.5..24.9).contains(&bmi) {
            BmiCategory::Normal
        } else if (25.0..29.9).contains(&bmi) {
            BmiCategory::Overweight
        } else if (30.0..34.9).contains(&bmi) {
            BmiCategory::ObesityClass1
        } else if (35.0..39.9).contains(&bmi) {
            BmiCategory::ObesityClass2
        } else {
            BmiCategory::ObesityClass3
        }
    }
}

/// Either a classification or the under-18 disclaimer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assessment {
    MinorDisclaimer,
    Classified(BmiCategory),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub bmi: f64,
    pub assessment: Assessment,
    pub optimal_range: WeightRange,
}

impl UserProfile {
    fn height_m_squared(&self) -> f64 {
        let meters = self.height / 100.0;
        meters * meters
    }

    /// Body mass index from current height and weight.
    ///
    /// Height must be positive; input validation rejects zero heights upstream.
    pub fn bmi(&self) -> f64 {
        self.weight / self.height_m_squared()
    }

    /// Healthy weight interval for the current height, age and gender
    pub fn optimal_weight_range(&self) -> WeightRange {
        let band = bmi_band(self.age, self.gender);
        let area = self.height_m_squared();
        WeightRange {
            min: round_to_tenth(band.min * area),
            max: round_to_tenth(band.max * area),
        }
    }

    pub fn health_status(&self) -> HealthReport {
        let bmi = self.bmi();
        let assessment = if self.is_minor() {
            Assessment::MinorDisclaimer
        } else {
            Assessment::Classified(BmiCategory::classify(bmi))
        };

        HealthReport {
            bmi,
            assessment,
            optimal_range: self.optimal_weight_range(),
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::tests::profile;

    #[test]
    fn test_bmi() {
        let mut p = profile();
        p.height = 180.0;
        p.weight = 72.9;
        assert!((p.bmi() - 22.5).abs() < 0.01);
    }

    #[test]
    fn test_adult_optimal_range() {
        let mut p = profile();
        p.age = 30;
        p.height = 170.0;
        assert_eq!(p.optimal_weight_range(), WeightRange { min: 53.5, max: 72.0 });
    }

    #[test]
    fn test_adult_range_ignores_gender() {
        let mut p = profile();
        p.gender = Some(Gender::Male);
        let male = p.optimal_weight_range();
        p.gender = Some(Gender::Female);
        assert_eq!(male, p.optimal_weight_range());
    }

    #[test]
    fn test_minor_bands() {
        assert_eq!(bmi_band(5, Some(Gender::Male)), BmiBand::new(14.0, 19.0));
        assert_eq!(bmi_band(6, Some(Gender::Male)), BmiBand::new(16.0, 22.0));
        assert_eq!(bmi_band(12, Some(Gender::Male)), BmiBand::new(17.0, 23.0));
        assert_eq!(bmi_band(17, Some(Gender::Male)), BmiBand::new(17.0, 23.0));
        assert_eq!(bmi_band(3, Some(Gender::Female)), BmiBand::new(13.5, 18.5));
        assert_eq!(bmi_band(11, Some(Gender::Female)), BmiBand::new(15.5, 21.5));
        assert_eq!(bmi_band(16, Some(Gender::Female)), BmiBand::new(16.5, 22.5));
        assert_eq!(bmi_band(16, None), BmiBand::new(16.5, 22.5));
        assert_eq!(bmi_band(18, Some(Gender::Male)), BmiBand::new(18.5, 24.9));
    }

    #[test]
    fn test_minor_optimal_range() {
        let mut p = profile();
        p.age = 10;
        p.gender = Some(Gender::Male);
        p.height = 140.0;
        assert_eq!(p.optimal_weight_range(), WeightRange { min: 31.4, max: 43.1 });
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.8), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::ObesityClass1);
        assert_eq!(BmiCategory::classify(35.0), BmiCategory::ObesityClass2);
        assert_eq!(BmiCategory::classify(40.0), BmiCategory::ObesityClass3);
    }

    #[test]
    fn test_classification_gaps_fall_through() {
        assert_eq!(BmiCategory::classify(24.95), BmiCategory::ObesityClass3);
        assert_eq!(BmiCategory::classify(29.95), BmiCategory::ObesityClass3);
        assert_eq!(BmiCategory::classify(34.9), BmiCategory::ObesityClass3);
        assert_eq!(BmiCategory::classify(39.9), BmiCategory::ObesityClass3);
    }

    #[test]
    fn test_health_status_for_minor_has_range() {
        let mut p = profile();
        p.age = 15;
        let report = p.health_status();
        assert_eq!(report.assessment, Assessment::MinorDisclaimer);
        assert!(report.optimal_range.min < report.optimal_range.max);
    }

    #[test]
    fn test_health_status_for_adult() {
        let mut p = profile();
        p.height = 180.0;
        p.weight = 72.9;
        let report = p.health_status();
        assert_eq!(report.assessment, Assessment::Classified(BmiCategory::Normal));
        assert_eq!(report.optimal_range, WeightRange { min: 59.9, max: 80.7 });
    }
}
