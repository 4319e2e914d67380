use crate::calendar;
use crate::errors::AppError;
use crate::models::{DayResponse, MonthView, TrackerData, WeeklyReport, WeightField, WeightUpdateRequest};
use crate::state::AppState;
use crate::stats::weekly_summaries;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today().to_string();
    let data = state.data.lock().await;
    let record = data.day(&today);
    Html(render_index(&today, &record))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date(&date)?;
    let data = state.data.lock().await;
    Ok(Json(day_response(&data, date)))
}

pub async fn set_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<WeightUpdateRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date(&date)?;
    let field = match payload.field.trim() {
        "morning" => WeightField::Morning,
        "evening" => WeightField::Evening,
        _ => return Err(AppError::bad_request("field must be 'morning' or 'evening'")),
    };

    let mut data = state.data.lock().await;
    // Dates outside [history_start, today] are ignored: the store stays
    // untouched and the caller gets the unchanged record back.
    if calendar::in_tracking_range(date, state.history_start, today()) {
        data.set_field(&date.to_string(), field, &payload.value);
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(day_response(&data, date)))
}

pub async fn get_month(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<MonthView>, AppError> {
    let Some(first) = calendar::parse_month(&month) else {
        return Err(AppError::bad_request("month must be yyyy-mm"));
    };

    let data = state.data.lock().await;
    Ok(Json(calendar::month_view(
        first,
        state.history_start,
        today(),
        &data,
    )))
}

pub async fn get_averages(State(state): State<AppState>) -> Result<Json<WeeklyReport>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(WeeklyReport {
        weeks: weekly_summaries(&data),
    }))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request("date must be yyyy-mm-dd"))
}

fn day_response(data: &TrackerData, date: NaiveDate) -> DayResponse {
    let key = date.to_string();
    let record = data.day(&key);
    DayResponse {
        completed: data.is_completed(&key),
        morning: record.morning,
        evening: record.evening,
        date: key,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
