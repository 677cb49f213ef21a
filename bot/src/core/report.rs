//! Rendering of analytics results as chat text

use chrono::{Datelike, NaiveDate};

use analytics::{
    Assessment, BmiCategory, ChangeDirection, Decimal, HealthReport, PercentChange, RankingEntry,
    RecentWeights, UserProfile, WeightTrend, MONTH_DAYS, WEEK_DAYS,
};

use super::texts;

/// Print a float the way users typed it, keeping one decimal for whole values
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn two_places(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

pub fn format_kg(value: Decimal) -> String {
    format!("{} кг", two_places(value))
}

pub fn category_label(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "Недостатня вага",
        BmiCategory::Normal => "Нормальна вага",
        BmiCategory::Overweight => "Надмірна вага",
        BmiCategory::ObesityClass1 => "Ожиріння 1 ступеня (легке)",
        BmiCategory::ObesityClass2 => "Ожиріння 2 ступеня (помірне)",
        BmiCategory::ObesityClass3 => "Ожиріння 3 ступеня (важке)",
    }
}

pub fn health_status_text(report: &HealthReport) -> String {
    let assessment = match report.assessment {
        Assessment::MinorDisclaimer => texts::MINOR_DISCLAIMER,
        Assessment::Classified(category) => category_label(category),
    };
    format!(
        "{}, Оптимально для вас: {} - {} кг",
        assessment,
        format_number(report.optimal_range.min),
        format_number(report.optimal_range.max)
    )
}

pub fn last_measurements_text(recent: &RecentWeights) -> String {
    let describe = |weight: Option<f64>| match weight {
        Some(weight) => format!("Вага {} кг", format_number(weight)),
        None => texts::NO_DATA.to_string(),
    };

    let mut text = format!(
        "Сьогодні: {}\nВчора: {}\n",
        describe(recent.today),
        describe(recent.yesterday)
    );
    if let Some(date) = recent.latest {
        text.push_str(&format!("Останній замір: {}.{}\n", date.day(), date.month()));
    }
    text
}

pub fn difference_text(difference: Option<Decimal>) -> String {
    match difference {
        Some(value) => format_kg(value),
        None => texts::NOT_ENOUGH_FOR_DIFFERENCE.to_string(),
    }
}

pub fn window_difference_text(difference: Option<Decimal>, days: u32) -> String {
    match difference {
        Some(value) => format_kg(value),
        None => not_enough_for_window(days),
    }
}

pub fn average_change_text(trend: Option<WeightTrend>, days: u32) -> String {
    match trend {
        Some(WeightTrend::Gain(amount)) => format!(
            "Середній приріст ваги за останні {days} днів: {}",
            format_kg(amount)
        ),
        Some(WeightTrend::Loss(amount)) => format!(
            "Середнє зниження ваги за останні {days} днів: {}",
            format_kg(amount)
        ),
        Some(WeightTrend::Unchanged) => format!("Вага залишилась незмінною за останні {days} днів."),
        None => not_enough_for_window(days),
    }
}

fn not_enough_for_window(days: u32) -> String {
    format!("Немає достатньо даних за останні {days} днів.")
}

/// Full "my profile" card
pub fn profile_report(profile: &UserProfile, today: NaiveDate) -> String {
    let gender = profile.gender.map_or(texts::NO_DATA, |g| g.emoji());

    format!(
        "Ім'я: {name}\n\
         Стать: {gender}\n\
         Вік: {age}\n\
         Зріст: {height} см\n\
         Вага: {weight} кг\n\
         {health}\n\n\
         Останні заміри:\n{recent}\n\
         Різниця ваги між останнім і передостаннім заміром: {difference}\n\n\
         Різниця ваги за останні {week} днів: {weekly}\n\
         Різниця ваги за останні {month} днів: {monthly}\n\
         {average}",
        name = profile.first_name,
        age = profile.age,
        height = format_number(profile.height),
        weight = format_number(profile.weight),
        health = health_status_text(&profile.health_status()),
        recent = last_measurements_text(&profile.last_measurements(today)),
        difference = difference_text(profile.weight_difference()),
        week = WEEK_DAYS,
        weekly = window_difference_text(profile.weekly_weight_difference(today), WEEK_DAYS),
        month = MONTH_DAYS,
        monthly = window_difference_text(profile.monthly_weight_difference(today), MONTH_DAYS),
        average = average_change_text(profile.average_weight_change(WEEK_DAYS, today), WEEK_DAYS),
    )
}

fn direction_label(direction: ChangeDirection) -> &'static str {
    match direction {
        ChangeDirection::Decrease => "зменшення ваги на",
        ChangeDirection::Increase => "збільшення ваги на",
        ChangeDirection::NoChange => "без змін",
    }
}

fn percent_text(change: &PercentChange) -> String {
    match change.magnitude() {
        Some(value) => two_places(value),
        None => "∞".to_string(),
    }
}

/// Weekly leaderboard, `None` when nobody has enough recent data
pub fn leaderboard(ranking: &[RankingEntry]) -> Option<String> {
    if ranking.is_empty() {
        return None;
    }

    let mut text = format!("{}\n\n", texts::TOP_HEADER);
    for (position, entry) in ranking.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} - {} {} % \n",
            position + 1,
            entry.name,
            direction_label(entry.direction),
            percent_text(&entry.change)
        ));
    }
    Some(text)
}
