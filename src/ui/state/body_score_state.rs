//! # Body Score Screen State
//!
//! This module contains all state owned by the Body Score screen.
//!
//! ## Responsibilities:
//! - Selected date and date formatting for the date box
//! - Calendar modal visibility and month/year navigation
//! - Ownership of the score chart (and with it the bar stripe animations)
//!
//! The state is constructed when the user navigates to the screen and dropped
//! when they navigate back, so every screen visit gets a fresh date (today),
//! a hidden modal, and freshly started animations.

use chrono::{Datelike, NaiveDate};

use crate::ui::components::score_chart::ScoreChart;

pub struct BodyScoreState {
    /// Date shown in the date box, mutated only by explicit selection
    pub selected_date: NaiveDate,

    /// Whether the calendar modal is visible
    pub show_calendar: bool,

    /// Month currently shown by the calendar grid (1-12)
    pub calendar_month: u32,

    /// Year currently shown by the calendar grid
    pub calendar_year: i32,

    /// Prevents backdrop click detection on the same frame the modal opens
    pub modal_just_opened: bool,

    /// Score history chart with its owned stripe animations
    pub chart: ScoreChart,
}

impl BodyScoreState {
    /// Create state for a fresh screen visit, dated today.
    pub fn new() -> Self {
        Self::with_initial_date(chrono::Local::now().date_naive())
    }

    /// Create state with an explicit initial date.
    pub fn with_initial_date(date: NaiveDate) -> Self {
        Self {
            selected_date: date,
            show_calendar: false,
            calendar_month: date.month(),
            calendar_year: date.year(),
            modal_just_opened: false,
            chart: ScoreChart::new(),
        }
    }

    /// Show the calendar modal, opened on the selected date's month.
    pub fn open_calendar(&mut self) {
        self.show_calendar = true;
        self.modal_just_opened = true;
        self.calendar_month = self.selected_date.month();
        self.calendar_year = self.selected_date.year();
        log::info!("📅 Calendar modal opened on {}", self.selected_date);
    }

    /// Hide the calendar modal without changing the selected date.
    pub fn dismiss_calendar(&mut self) {
        self.show_calendar = false;
    }

    /// Commit a day selection and close the modal.
    pub fn select_day(&mut self, day: NaiveDate) {
        self.selected_date = day;
        self.show_calendar = false;
        log::info!("📅 Selected date {}", day);
    }

    /// Navigate the calendar grid to the previous month.
    pub fn navigate_to_previous_month(&mut self) {
        if self.calendar_month == 1 {
            self.calendar_month = 12;
            self.calendar_year -= 1;
        } else {
            self.calendar_month -= 1;
        }
        log::info!("📅 Navigated to previous month: {}/{}", self.calendar_month, self.calendar_year);
    }

    /// Navigate the calendar grid to the next month.
    pub fn navigate_to_next_month(&mut self) {
        if self.calendar_month == 12 {
            self.calendar_month = 1;
            self.calendar_year += 1;
        } else {
            self.calendar_month += 1;
        }
        log::info!("📅 Navigated to next month: {}/{}", self.calendar_month, self.calendar_year);
    }

    /// Name of the month currently shown by the calendar grid.
    pub fn calendar_month_name(&self) -> String {
        month_name(self.calendar_month).to_string()
    }

    /// Date box label, e.g. "August 28".
    pub fn formatted_date(&self) -> String {
        format!("{} {}", month_name(self.selected_date.month()), self.selected_date.day())
    }
}

impl Default for BodyScoreState {
    fn default() -> Self {
        Self::new()
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> BodyScoreState {
        BodyScoreState::with_initial_date(NaiveDate::from_ymd_opt(2026, 8, 28).unwrap())
    }

    #[test]
    fn modal_starts_hidden_on_the_initial_date() {
        let s = state();
        assert!(!s.show_calendar);
        assert_eq!(s.selected_date, NaiveDate::from_ymd_opt(2026, 8, 28).unwrap());
    }

    #[test]
    fn date_box_tap_shows_the_modal() {
        let mut s = state();
        s.open_calendar();
        assert!(s.show_calendar);
        assert!(s.modal_just_opened);
    }

    #[test]
    fn selecting_a_day_commits_the_date_and_hides_the_modal() {
        let mut s = state();
        s.open_calendar();
        let day = NaiveDate::from_ymd_opt(2026, 8, 12).unwrap();
        s.select_day(day);
        assert_eq!(s.selected_date, day);
        assert!(!s.show_calendar);
    }

    #[test]
    fn backdrop_dismissal_keeps_the_date() {
        let mut s = state();
        let before = s.selected_date;
        s.open_calendar();
        s.dismiss_calendar();
        assert!(!s.show_calendar);
        assert_eq!(s.selected_date, before);
    }

    #[test]
    fn reopening_the_calendar_follows_the_selected_date() {
        let mut s = state();
        s.open_calendar();
        s.select_day(NaiveDate::from_ymd_opt(2025, 12, 3).unwrap());
        s.open_calendar();
        assert_eq!(s.calendar_month, 12);
        assert_eq!(s.calendar_year, 2025);
    }

    #[test]
    fn month_navigation_rolls_over_year_boundaries() {
        let mut s = BodyScoreState::with_initial_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        s.navigate_to_previous_month();
        assert_eq!((s.calendar_month, s.calendar_year), (12, 2025));
        s.navigate_to_next_month();
        assert_eq!((s.calendar_month, s.calendar_year), (1, 2026));

        let mut s = BodyScoreState::with_initial_date(NaiveDate::from_ymd_opt(2026, 12, 15).unwrap());
        s.navigate_to_next_month();
        assert_eq!((s.calendar_month, s.calendar_year), (1, 2027));
    }

    #[test]
    fn formatted_date_is_month_name_and_day() {
        assert_eq!(state().formatted_date(), "August 28");
    }

    #[test]
    fn calendar_month_name_matches_the_grid_month() {
        let mut s = state();
        assert_eq!(s.calendar_month_name(), "August");
        s.navigate_to_next_month();
        assert_eq!(s.calendar_month_name(), "September");
    }
}
