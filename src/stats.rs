use crate::models::{AppData, DaySummary, StatsResponse};
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::BTreeMap;

pub const STREAK_MIN_STEPS: u64 = 1_000;
pub const STREAK_MAX_DAYS: u32 = 365;

pub fn build_stats(data: &AppData) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), data)
}

pub fn build_stats_at(today: NaiveDate, data: &AppData) -> StatsResponse {
    StatsResponse {
        streak_days: streak_at(today, &data.history),
        week: week_at(today, &data.history),
    }
}

// Missing days read as zero and break the streak.
pub fn streak_at(today: NaiveDate, history: &BTreeMap<String, u64>) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while streak < STREAK_MAX_DAYS {
        let steps = history.get(&date_key(day)).copied().unwrap_or(0);
        if steps < STREAK_MIN_STEPS {
            break;
        }
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

pub fn week_at(today: NaiveDate, history: &BTreeMap<String, u64>) -> Vec<DaySummary> {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            let key = date_key(date);
            DaySummary {
                steps: history.get(&key).copied().unwrap_or(0),
                weekday: date.format("%A").to_string(),
                is_today: date == today,
                date: key,
            }
        })
        .collect()
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
