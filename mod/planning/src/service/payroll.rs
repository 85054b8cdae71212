//! Weekly payroll figures: filter the schedule to one week and price
//! each shift from the employee's pay profile.
//!
//! Nothing in here fails. A time that does not parse contributes zero
//! hours, an employee missing from the roster costs zero, and a row
//! whose date does not parse is left out of the week entirely.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime};
use serde::Serialize;

use fournil_core::ServiceError;

use super::PlanningService;
use crate::model::{Employee, Shift};

/// One week of shifts with per-row and total figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    /// Anchor date of the window, ISO.
    pub monday: String,
    pub rows: Vec<WeekRow>,
    pub total_hours: f64,
    /// Loaded cost: wage plus bonus, grossed up by employer charges.
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRow {
    #[serde(flatten)]
    pub shift: Shift,
    pub hours: f64,
    pub cost: f64,
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Duration from `start` to `end` in hours. An end before the start
/// means the shift runs past midnight, so a day is added. `start ==
/// end` is zero, not 24 h.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }
    minutes as f64 / 60.0
}

/// Monday of the week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Hours and loaded cost for one shift, each rounded to 2 decimals as
/// the schedule table displays them.
fn shift_figures(shift: &Shift, employees: &[Employee]) -> (f64, f64) {
    let hours = match (parse_time(&shift.start), parse_time(&shift.end)) {
        (Some(start), Some(end)) => hours_between(start, end),
        _ => 0.0,
    };
    let (rate, bonus, charge) = employees
        .iter()
        .find(|e| e.name == shift.employee)
        .map(|e| (e.hourly_rate, e.bonus_per_hour, e.charge_pct))
        .unwrap_or((0.0, 0.0, 0.0));
    let cost = hours * (rate + bonus) * (1.0 + charge / 100.0);
    (round2(hours), round2(cost))
}

/// Shifts falling inside `[monday, monday + 6]`, priced row by row.
/// Totals are sums of the rounded per-row figures.
pub fn week_summary(shifts: &[Shift], employees: &[Employee], monday: NaiveDate) -> WeekSummary {
    let week_end = monday + Duration::days(6);
    let mut rows = Vec::new();
    for shift in shifts {
        let Some(date) = parse_date(&shift.date) else {
            continue;
        };
        if date < monday || date > week_end {
            continue;
        }
        let (hours, cost) = shift_figures(shift, employees);
        rows.push(WeekRow {
            shift: shift.clone(),
            hours,
            cost,
        });
    }
    let total_hours = round2(rows.iter().map(|r| r.hours).sum());
    let total_cost = round2(rows.iter().map(|r| r.cost).sum());
    WeekSummary {
        monday: monday.to_string(),
        rows,
        total_hours,
        total_cost,
    }
}

impl PlanningService {
    /// Week summary anchored at `anchor` (the window runs through
    /// `anchor + 6`, whatever weekday the anchor is).
    pub fn week_summary(&self, anchor: &str) -> Result<WeekSummary, ServiceError> {
        let monday = parse_date(anchor).ok_or_else(|| {
            ServiceError::Validation(format!(
                "invalid week anchor '{anchor}', expected YYYY-MM-DD"
            ))
        })?;
        let tables = self.tables()?;
        Ok(week_summary(
            tables.shifts.rows(),
            tables.employees.rows(),
            monday,
        ))
    }

    /// Summary of the week containing today.
    pub fn current_week(&self) -> Result<WeekSummary, ServiceError> {
        let monday = monday_of(Local::now().date_naive());
        let tables = self.tables()?;
        Ok(week_summary(
            tables.shifts.rows(),
            tables.employees.rows(),
            monday,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        parse_time(s).unwrap()
    }

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn shift(date: &str, employee: &str, start: &str, end: &str) -> Shift {
        Shift {
            date: date.into(),
            employee: employee.into(),
            role: "Boulangère".into(),
            start: start.into(),
            end: end.into(),
        }
    }

    fn alice() -> Employee {
        Employee {
            name: "Alice".into(),
            role: "Boulangère".into(),
            hourly_rate: 14.0,
            bonus_per_hour: 0.0,
            charge_pct: 42.0,
        }
    }

    #[test]
    fn plain_morning_shift_is_four_hours() {
        assert_eq!(hours_between(t("08:00"), t("12:00")), 4.0);
    }

    #[test]
    fn overnight_shift_wraps_past_midnight() {
        assert_eq!(hours_between(t("22:00"), t("06:00")), 8.0);
    }

    #[test]
    fn equal_times_are_zero_hours_not_a_full_day() {
        assert_eq!(hours_between(t("09:00"), t("09:00")), 0.0);
    }

    #[test]
    fn monday_of_any_weekday() {
        assert_eq!(monday_of(d("2024-01-03")), d("2024-01-01"));
        assert_eq!(monday_of(d("2024-01-01")), d("2024-01-01"));
        assert_eq!(monday_of(d("2024-01-07")), d("2024-01-01"));
    }

    #[test]
    fn week_window_is_inclusive_of_sunday_only() {
        let shifts = vec![
            shift("2023-12-31", "Alice", "08:00", "12:00"),
            shift("2024-01-01", "Alice", "08:00", "12:00"),
            shift("2024-01-07", "Alice", "08:00", "12:00"),
            shift("2024-01-08", "Alice", "08:00", "12:00"),
        ];
        let summary = week_summary(&shifts, &[alice()], d("2024-01-01"));
        let dates: Vec<_> = summary.rows.iter().map(|r| r.shift.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-07"]);
    }

    #[test]
    fn unparseable_date_is_left_out() {
        let shifts = vec![
            shift("01/01/2024", "Alice", "08:00", "12:00"),
            shift("2024-01-02", "Alice", "08:00", "12:00"),
        ];
        let summary = week_summary(&shifts, &[alice()], d("2024-01-01"));
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].shift.date, "2024-01-02");
    }

    #[test]
    fn week_totals_sum_loaded_costs() {
        // 4 h and 6 h at 14.0/h, 42 % charges: 79.52 + 119.28.
        let shifts = vec![
            shift("2024-01-01", "Alice", "08:00", "12:00"),
            shift("2024-01-02", "Alice", "06:00", "12:00"),
        ];
        let summary = week_summary(&shifts, &[alice()], d("2024-01-01"));
        assert_eq!(summary.total_hours, 10.0);
        assert_eq!(summary.total_cost, 198.80);
        assert_eq!(summary.rows[0].cost, 79.52);
        assert_eq!(summary.rows[1].cost, 119.28);
    }

    #[test]
    fn malformed_time_zeroes_the_row_but_keeps_it() {
        let shifts = vec![shift("2024-01-01", "Alice", "8h00", "12:00")];
        let summary = week_summary(&shifts, &[alice()], d("2024-01-01"));
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].hours, 0.0);
        assert_eq!(summary.rows[0].cost, 0.0);
    }

    #[test]
    fn unknown_employee_costs_nothing() {
        let shifts = vec![shift("2024-01-01", "Chloé", "08:00", "12:00")];
        let summary = week_summary(&shifts, &[alice()], d("2024-01-01"));
        assert_eq!(summary.rows[0].hours, 4.0);
        assert_eq!(summary.rows[0].cost, 0.0);
    }

    #[test]
    fn bonus_is_loaded_like_the_base_wage() {
        let bruno = Employee {
            name: "Bruno".into(),
            role: "Vente".into(),
            hourly_rate: 12.0,
            bonus_per_hour: 0.5,
            charge_pct: 38.0,
        };
        let shifts = vec![shift("2024-01-01", "Bruno", "08:00", "14:00")];
        let summary = week_summary(&shifts, &[bruno], d("2024-01-01"));
        // 6 h at (12.0 + 0.5) * 1.38
        assert_eq!(summary.rows[0].cost, 103.50);
    }

    #[test]
    fn service_rejects_a_bad_anchor() {
        let (_dir, svc) = crate::service::testutil::service();
        let err = svc.week_summary("next-monday").unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn current_week_covers_the_seed_shifts() {
        let (_dir, svc) = crate::service::testutil::service();
        let summary = svc.current_week().unwrap();
        // Seeds are dated today and tomorrow; tomorrow can fall in the
        // next week when today is Sunday.
        assert!(!summary.rows.is_empty());
        assert!(summary.rows.iter().any(|r| r.shift.employee == "Alice"));
    }
}
