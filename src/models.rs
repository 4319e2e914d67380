use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DayRecord {
    pub morning: String,
    pub evening: String,
}

impl DayRecord {
    pub fn morning_reading(&self) -> Option<f64> {
        parse_reading(&self.morning)
    }

    pub fn evening_reading(&self) -> Option<f64> {
        parse_reading(&self.evening)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightField {
    Morning,
    Evening,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TrackerData {
    pub days: BTreeMap<String, DayRecord>,
}

impl TrackerData {
    pub fn day(&self, date: &str) -> DayRecord {
        self.days.get(date).cloned().unwrap_or_default()
    }

    pub fn set_field(&mut self, date: &str, field: WeightField, value: &str) {
        let entry = self.days.entry(date.to_string()).or_default();
        match field {
            WeightField::Morning => entry.morning = value.to_string(),
            WeightField::Evening => entry.evening = value.to_string(),
        }
    }

    pub fn is_completed(&self, date: &str) -> bool {
        self.days
            .get(date)
            .is_some_and(|record| record.morning_reading().is_some() && record.evening_reading().is_some())
    }
}

pub fn parse_reading(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Deserialize)]
pub struct WeightUpdateRequest {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub morning: String,
    pub evening: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklySummary {
    pub week_start: String,
    pub week_end: String,
    pub label: String,
    pub morning_average: f64,
    pub evening_average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning_diff: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evening_diff: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct WeeklyReport {
    pub weeks: Vec<WeeklySummary>,
}

#[derive(Debug, Serialize)]
pub struct MonthDay {
    pub date: String,
    pub day: u32,
    pub in_month: bool,
    pub today: bool,
    pub selectable: bool,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthView {
    pub month: String,
    pub label: String,
    pub can_step_back: bool,
    pub can_step_forward: bool,
    pub days: Vec<MonthDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_date_reads_as_unset_record() {
        let data = TrackerData::default();
        let record = data.day("2025-07-01");
        assert_eq!(record.morning, "");
        assert_eq!(record.evening, "");
        assert!(data.days.is_empty());
    }

    #[test]
    fn set_field_creates_record_lazily_and_keeps_other_field() {
        let mut data = TrackerData::default();
        data.set_field("2025-07-01", WeightField::Morning, "180.5");
        assert_eq!(data.days.len(), 1);
        assert_eq!(data.day("2025-07-01").morning, "180.5");
        assert_eq!(data.day("2025-07-01").evening, "");

        data.set_field("2025-07-01", WeightField::Evening, "181.2");
        data.set_field("2025-07-01", WeightField::Morning, "179.9");
        let record = data.day("2025-07-01");
        assert_eq!(record.morning, "179.9");
        assert_eq!(record.evening, "181.2");
        assert_eq!(data.days.len(), 1);
    }

    #[test]
    fn completed_requires_both_fields_parseable() {
        let mut data = TrackerData::default();
        assert!(!data.is_completed("2025-07-01"));

        data.set_field("2025-07-01", WeightField::Morning, "180.5");
        assert!(!data.is_completed("2025-07-01"));

        data.set_field("2025-07-01", WeightField::Evening, "181.2");
        assert!(data.is_completed("2025-07-01"));

        data.set_field("2025-07-01", WeightField::Evening, "not a number");
        assert!(!data.is_completed("2025-07-01"));
    }

    #[test]
    fn parse_reading_rejects_blank_and_junk() {
        assert_eq!(parse_reading("180.5"), Some(180.5));
        assert_eq!(parse_reading(" 72 "), Some(72.0));
        assert_eq!(parse_reading(""), None);
        assert_eq!(parse_reading("   "), None);
        assert_eq!(parse_reading("180abc"), None);
        assert_eq!(parse_reading("NaN"), None);
    }

    #[test]
    fn store_round_trips_through_json() {
        let mut data = TrackerData::default();
        data.set_field("2025-06-01", WeightField::Morning, "180");
        data.set_field("2025-06-02", WeightField::Evening, "182.4");
        data.set_field("2025-06-03", WeightField::Morning, "");

        let payload = serde_json::to_string(&data).unwrap();
        let restored: TrackerData = serde_json::from_str(&payload).unwrap();
        assert_eq!(restored, data);
    }
}
