use crate::models::{MonthDay, MonthView, TrackerData};
use crate::stats::{week_end, week_start};
use chrono::{Datelike, Duration, Months, NaiveDate};
use std::env;
use tracing::warn;

pub fn resolve_history_start() -> NaiveDate {
    if let Ok(raw) = env::var("APP_HISTORY_START") {
        match raw.parse::<NaiveDate>() {
            Ok(date) => return date,
            Err(_) => warn!("ignoring invalid APP_HISTORY_START: {raw}"),
        }
    }

    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub fn in_tracking_range(date: NaiveDate, history_start: NaiveDate, today: NaiveDate) -> bool {
    date >= history_start && date <= today
}

pub fn parse_month(raw: &str) -> Option<NaiveDate> {
    format!("{raw}-01").parse::<NaiveDate>().ok()
}

pub fn previous_month(first: NaiveDate) -> NaiveDate {
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

pub fn next_month(first: NaiveDate) -> NaiveDate {
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

fn month_end(first: NaiveDate) -> NaiveDate {
    next_month(first) - Duration::days(1)
}

pub fn month_view(
    first: NaiveDate,
    history_start: NaiveDate,
    today: NaiveDate,
    data: &TrackerData,
) -> MonthView {
    // Stepping is disabled once the neighboring month falls entirely outside
    // the [history_start, today] tracking range.
    let can_step_back = month_end(previous_month(first)) >= history_start;
    let can_step_forward = next_month(first) <= today;

    let grid_start = week_start(first);
    let grid_end = week_end(month_end(first));

    let mut days = Vec::new();
    let mut cursor = grid_start;
    while cursor <= grid_end {
        let date = cursor.to_string();
        days.push(MonthDay {
            day: cursor.day(),
            in_month: cursor.year() == first.year() && cursor.month() == first.month(),
            today: cursor == today,
            selectable: in_tracking_range(cursor, history_start, today),
            completed: data.is_completed(&date),
            date,
        });
        cursor = cursor + Duration::days(1);
    }

    MonthView {
        month: first.format("%Y-%m").to_string(),
        label: first.format("%B %Y").to_string(),
        can_step_back,
        can_step_forward,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeightField;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_month_accepts_yyyy_mm_only() {
        assert_eq!(parse_month("2025-06"), Some(date(2025, 6, 1)));
        assert_eq!(parse_month("2025-13"), None);
        assert_eq!(parse_month("june"), None);
    }

    #[test]
    fn selection_is_limited_to_history_start_through_today() {
        let history_start = date(2025, 6, 1);
        let today = date(2025, 8, 7);

        assert!(in_tracking_range(history_start, history_start, today));
        assert!(in_tracking_range(today, history_start, today));
        assert!(in_tracking_range(date(2025, 7, 15), history_start, today));
        assert!(!in_tracking_range(date(2025, 5, 31), history_start, today));
        assert!(!in_tracking_range(date(2025, 8, 8), history_start, today));
    }

    #[test]
    fn grid_spans_whole_sunday_to_saturday_weeks() {
        let view = month_view(
            date(2025, 7, 1),
            date(2025, 6, 1),
            date(2025, 7, 15),
            &TrackerData::default(),
        );

        assert_eq!(view.days.len() % 7, 0);
        // July 2025 starts on a Tuesday, so the grid opens on Sunday June 29.
        assert_eq!(view.days[0].date, "2025-06-29");
        assert!(!view.days[0].in_month);
        assert_eq!(view.days.last().unwrap().date, "2025-08-02");
    }

    #[test]
    fn stepping_disables_at_both_ends_of_the_range() {
        let history_start = date(2025, 6, 1);
        let today = date(2025, 8, 7);
        let data = TrackerData::default();

        let june = month_view(date(2025, 6, 1), history_start, today, &data);
        assert!(!june.can_step_back);
        assert!(june.can_step_forward);

        let july = month_view(date(2025, 7, 1), history_start, today, &data);
        assert!(july.can_step_back);
        assert!(july.can_step_forward);

        let august = month_view(date(2025, 8, 1), history_start, today, &data);
        assert!(august.can_step_back);
        assert!(!august.can_step_forward);
    }

    #[test]
    fn back_step_stays_enabled_while_the_previous_month_overlaps_history() {
        // History starts mid-month: June is still reachable from July.
        let history_start = date(2025, 6, 15);
        let july = month_view(date(2025, 7, 1), history_start, date(2025, 7, 20), &TrackerData::default());
        assert!(july.can_step_back);
    }

    #[test]
    fn day_flags_mark_today_selectable_and_completed() {
        let history_start = date(2025, 6, 1);
        let today = date(2025, 7, 15);
        let mut data = TrackerData::default();
        data.set_field("2025-07-10", WeightField::Morning, "180");
        data.set_field("2025-07-10", WeightField::Evening, "181");

        let view = month_view(date(2025, 7, 1), history_start, today, &data);
        let by_date = |d: &str| view.days.iter().find(|day| day.date == d).unwrap();

        assert!(by_date("2025-07-15").today);
        assert!(by_date("2025-07-15").selectable);
        assert!(by_date("2025-07-10").completed);
        assert!(!by_date("2025-07-16").selectable);
        assert!(!by_date("2025-07-10").today);
    }

    #[test]
    fn month_label_is_full_month_and_year() {
        let view = month_view(
            date(2025, 6, 1),
            date(2025, 6, 1),
            date(2025, 6, 15),
            &TrackerData::default(),
        );
        assert_eq!(view.month, "2025-06");
        assert_eq!(view.label, "June 2025");
    }
}
