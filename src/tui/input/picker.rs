use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::schedule::days_in_month;
use crate::tui::app::{App, DateField, DatePickerState, Mode, TimeField, TimePickerState};

pub(super) fn handle_date_picker(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Some(picker) = app.date_picker.take() {
                app.selected_date = picker.format();
            }
            app.mode = Mode::Navigate;
            return;
        }
        KeyCode::Esc => {
            app.date_picker = None;
            app.mode = Mode::Navigate;
            return;
        }
        _ => {}
    }

    let picker = match &mut app.date_picker {
        Some(p) => p,
        None => return,
    };
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            picker.field = match picker.field {
                DateField::Day => DateField::Year,
                DateField::Month => DateField::Day,
                DateField::Year => DateField::Month,
            };
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            picker.field = match picker.field {
                DateField::Day => DateField::Month,
                DateField::Month => DateField::Year,
                DateField::Year => DateField::Day,
            };
        }
        KeyCode::Up | KeyCode::Char('k') => step_date(picker, 1),
        KeyCode::Down | KeyCode::Char('j') => step_date(picker, -1),
        _ => {}
    }
}

pub(super) fn handle_time_picker(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Some(picker) = app.time_picker.take() {
                app.selected_time = picker.format();
            }
            app.mode = Mode::Navigate;
            return;
        }
        KeyCode::Esc => {
            app.time_picker = None;
            app.mode = Mode::Navigate;
            return;
        }
        _ => {}
    }

    let picker = match &mut app.time_picker {
        Some(p) => p,
        None => return,
    };
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab
        | KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            picker.field = match picker.field {
                TimeField::Hour => TimeField::Minute,
                TimeField::Minute => TimeField::Hour,
            };
        }
        KeyCode::Up | KeyCode::Char('k') => step_time(picker, 1),
        KeyCode::Down | KeyCode::Char('j') => step_time(picker, -1),
        _ => {}
    }
}

/// Step the focused date field, wrapping day and month within their ranges.
/// Day is re-clamped when a month/year step shrinks the month.
fn step_date(picker: &mut DatePickerState, delta: i32) {
    match picker.field {
        DateField::Day => {
            picker.day = cycle(picker.day, 1, days_in_month(picker.year, picker.month), delta);
        }
        DateField::Month => {
            picker.month = cycle(picker.month, 1, 12, delta);
            picker.day = picker.day.min(days_in_month(picker.year, picker.month));
        }
        DateField::Year => {
            picker.year = (picker.year + delta).clamp(1970, 9999);
            picker.day = picker.day.min(days_in_month(picker.year, picker.month));
        }
    }
}

fn step_time(picker: &mut TimePickerState, delta: i32) {
    match picker.field {
        TimeField::Hour => picker.hour = cycle(picker.hour, 0, 23, delta),
        TimeField::Minute => picker.minute = cycle(picker.minute, 0, 59, delta),
    }
}

/// Wrap `value` within `lo..=hi` by `delta` steps.
fn cycle(value: u32, lo: u32, hi: u32, delta: i32) -> u32 {
    let span = (hi - lo + 1) as i32;
    let offset = (value - lo) as i32 + delta;
    (lo as i32 + offset.rem_euclid(span)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32, field: DateField) -> DatePickerState {
        DatePickerState {
            day,
            month,
            year,
            field,
        }
    }

    #[test]
    fn day_wraps_within_month() {
        let mut p = date(31, 12, 2030, DateField::Day);
        step_date(&mut p, 1);
        assert_eq!(p.day, 1);
        step_date(&mut p, -1);
        assert_eq!(p.day, 31);
    }

    #[test]
    fn month_step_clamps_day() {
        // 31 Jan -> stepping to February clamps to the 28th
        let mut p = date(31, 1, 2030, DateField::Month);
        step_date(&mut p, 1);
        assert_eq!((p.month, p.day), (2, 28));
    }

    #[test]
    fn month_wraps_december_to_january() {
        let mut p = date(15, 12, 2030, DateField::Month);
        step_date(&mut p, 1);
        assert_eq!(p.month, 1);
    }

    #[test]
    fn year_step_clamps_leap_day() {
        let mut p = date(29, 2, 2028, DateField::Year);
        step_date(&mut p, 1);
        assert_eq!((p.year, p.day), (2029, 28));
    }

    #[test]
    fn hour_and_minute_wrap() {
        let mut p = TimePickerState {
            hour: 23,
            minute: 59,
            field: TimeField::Hour,
        };
        step_time(&mut p, 1);
        assert_eq!(p.hour, 0);
        p.field = TimeField::Minute;
        step_time(&mut p, 1);
        assert_eq!(p.minute, 0);
        step_time(&mut p, -1);
        assert_eq!(p.minute, 59);
    }
}
