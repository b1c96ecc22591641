//! Controller page template.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use aircon_domain::evaluation::{Decision, Evaluation};
use aircon_domain::fact::{Occupancy, TimeOfDay};

/// Values shown in the form inputs, exactly as typed.
#[derive(Debug, Clone)]
pub struct FormValues {
    pub temperature: String,
    pub humidity: String,
    pub occupancy: String,
    pub time_of_day: String,
    pub windows_open: bool,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            temperature: "22".to_string(),
            humidity: "46".to_string(),
            occupancy: Occupancy::Occupied.to_string(),
            time_of_day: TimeOfDay::Morning.to_string(),
            windows_open: false,
        }
    }
}

/// What to show under the form.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing submitted yet.
    Pending,
    Rejected(String),
    NoMatch,
    Matched(Decision),
}

impl From<Evaluation> for Outcome {
    fn from(evaluation: Evaluation) -> Self {
        match evaluation {
            Evaluation::Matched(decision) => Self::Matched(decision),
            Evaluation::NoMatch => Self::NoMatch,
        }
    }
}

/// One `<option>` of a category select.
#[derive(Debug)]
pub struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

fn options(values: impl IntoIterator<Item = &'static str>, current: &str) -> Vec<SelectOption> {
    values
        .into_iter()
        .map(|value| SelectOption {
            value,
            selected: value.eq_ignore_ascii_case(current.trim()),
        })
        .collect()
}

/// The full controller page.
#[derive(Template)]
#[template(path = "controller.html")]
pub struct ControllerPage {
    values: FormValues,
    occupancy_options: Vec<SelectOption>,
    time_of_day_options: Vec<SelectOption>,
    submitted: bool,
    outcome: Outcome,
}

impl ControllerPage {
    #[must_use]
    pub fn new(values: FormValues, outcome: Outcome) -> Self {
        Self {
            occupancy_options: options(Occupancy::ALL.map(Occupancy::as_str), &values.occupancy),
            time_of_day_options: options(
                TimeOfDay::ALL.map(TimeOfDay::as_str),
                &values.time_of_day,
            ),
            submitted: !matches!(outcome, Outcome::Pending),
            values,
            outcome,
        }
    }
}

impl IntoResponse for ControllerPage {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}
