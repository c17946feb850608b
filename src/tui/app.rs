use std::io;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local, Timelike};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::TaskList;
use crate::ops::schedule::ReminderQueue;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    DatePicker,
    TimePicker,
}

/// Which field of the date picker has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Day,
    Month,
    Year,
}

/// Date picker popup state, seeded from today's date on open
#[derive(Debug, Clone)]
pub struct DatePickerState {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub field: DateField,
}

impl DatePickerState {
    pub fn today() -> Self {
        let now = Local::now();
        DatePickerState {
            day: now.day(),
            month: now.month(),
            year: now.year(),
            field: DateField::Day,
        }
    }

    /// The picked date as `D/M/Y` (no zero padding, month 1-indexed).
    pub fn format(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Which field of the time picker has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
}

/// Time picker popup state, seeded from the current time on open
#[derive(Debug, Clone)]
pub struct TimePickerState {
    pub hour: u32,
    pub minute: u32,
    pub field: TimeField,
}

impl TimePickerState {
    pub fn now() -> Self {
        let now = Local::now();
        TimePickerState {
            hour: now.hour(),
            minute: now.minute(),
            field: TimeField::Hour,
        }
    }

    /// The picked time as zero-padded 24-hour `HH:MM`.
    pub fn format(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    /// Committed description field
    pub input: String,
    /// Selected date as `D/M/Y`, empty until picked
    pub selected_date: String,
    /// Selected time as `HH:MM`, empty until picked
    pub selected_time: String,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the task list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Transient notice shown when a reminder fires; Esc dismisses it
    pub notice: Option<String>,
    pub reminders: ReminderQueue,
    /// Edit-mode buffer and byte cursor for the description field
    pub edit_buffer: String,
    pub edit_cursor: usize,
    pub date_picker: Option<DatePickerState>,
    pub time_picker: Option<TimePickerState>,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            tasks: TaskList::new(),
            input: String::new(),
            selected_date: String::new(),
            selected_time: String::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            cursor: 0,
            scroll_offset: 0,
            notice: None,
            reminders: ReminderQueue::new(),
            edit_buffer: String::new(),
            edit_cursor: 0,
            date_picker: None,
            time_picker: None,
            show_help: false,
        }
    }

    /// Drain due reminders into the notice. When several fire on the same
    /// tick, the last one scheduled wins.
    pub fn drain_reminders(&mut self, now: Instant) {
        for message in self.reminders.poll_due(now) {
            self.notice = Some(message);
        }
    }

    /// Keep the cursor inside the list after removals.
    pub fn clamp_cursor(&mut self) {
        if self.tasks.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.tasks.len() - 1);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Deferred reminders run on this same thread, between draws.
        app.drain_reminders(Instant::now());

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
