use crate::models::{TrackerData, WeeklySummary};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

struct WeekTotals {
    start: NaiveDate,
    end: NaiveDate,
    morning_total: f64,
    morning_count: u32,
    evening_total: f64,
    evening_count: u32,
}

pub fn weekly_summaries(data: &TrackerData) -> Vec<WeeklySummary> {
    let mut weeks: BTreeMap<NaiveDate, WeekTotals> = BTreeMap::new();

    for (key, record) in &data.days {
        // Keys are written as ISO dates; anything else can only come from a
        // hand-edited data file and is skipped.
        let Ok(date) = key.parse::<NaiveDate>() else {
            continue;
        };

        let start = week_start(date);
        let totals = weeks.entry(start).or_insert_with(|| WeekTotals {
            start,
            end: start + Duration::days(6),
            morning_total: 0.0,
            morning_count: 0,
            evening_total: 0.0,
            evening_count: 0,
        });

        if let Some(value) = record.morning_reading() {
            totals.morning_total += value;
            totals.morning_count += 1;
        }
        if let Some(value) = record.evening_reading() {
            totals.evening_total += value;
            totals.evening_count += 1;
        }
    }

    let mut summaries = Vec::with_capacity(weeks.len());
    let mut previous: Option<(f64, f64)> = None;

    for totals in weeks.into_values() {
        let morning_average = average(totals.morning_total, totals.morning_count);
        let evening_average = average(totals.evening_total, totals.evening_count);
        let (morning_diff, evening_diff) = match previous {
            Some((prev_morning, prev_evening)) => (
                Some(morning_average - prev_morning),
                Some(evening_average - prev_evening),
            ),
            None => (None, None),
        };

        summaries.push(WeeklySummary {
            week_start: totals.start.to_string(),
            week_end: totals.end.to_string(),
            label: week_label(totals.start, totals.end),
            morning_average,
            evening_average,
            morning_diff,
            evening_diff,
        });
        previous = Some((morning_average, evening_average));
    }

    summaries
}

fn average(total: f64, count: u32) -> f64 {
    if count > 0 { total / f64::from(count) } else { 0.0 }
}

// Weeks run Sunday through Saturday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}

fn week_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
}
