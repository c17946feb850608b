use std::time::{Duration, Instant};

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone};

/// Parse a picked date/time pair into an absolute local timestamp.
///
/// The date is `D/M/Y` (no zero padding, month 1-indexed) and the time is
/// `HH:MM` 24-hour. Seconds and sub-second fields are zero. Returns `None`
/// when either string is malformed or names a nonexistent local instant;
/// the pickers are the only input path, so this does not happen in the
/// running app.
pub fn due_instant(date: &str, time: &str) -> Option<DateTime<Local>> {
    let mut parts = date.splitn(3, '/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;

    let (hour, minute) = time.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?
        .and_time(NaiveTime::from_hms_opt(hour, minute, 0)?);
    // An ambiguous wall-clock time (DST fold) resolves to its first occurrence.
    Local.from_local_datetime(&naive).earliest()
}

/// The positive span between `now` and `due`, or `None` when the due instant
/// is not strictly in the future. Zero or negative means no scheduling.
pub fn delay_until(due: DateTime<Local>, now: DateTime<Local>) -> Option<Duration> {
    (due - now).to_std().ok().filter(|d| !d.is_zero())
}

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map_or(31, |d| d.day())
}

/// A one-shot reminder waiting to fire.
#[derive(Debug)]
struct Reminder {
    fire_at: Instant,
    message: String,
}

/// Fire-and-forget reminder queue, drained by the UI event loop.
///
/// Entries fire exactly once, never before their deadline, whenever
/// `poll_due` observes a `now` at or past it. There is no cancellation path:
/// once scheduled, an entry fires or the process exits.
#[derive(Debug, Default)]
pub struct ReminderQueue {
    pending: Vec<Reminder>,
}

impl ReminderQueue {
    pub fn new() -> Self {
        ReminderQueue::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Schedule `message` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, message: String) {
        log::debug!("reminder in {}ms: {}", delay.as_millis(), message);
        self.schedule_at(Instant::now() + delay, message);
    }

    /// Schedule `message` to fire at an explicit deadline.
    pub fn schedule_at(&mut self, fire_at: Instant, message: String) {
        self.pending.push(Reminder { fire_at, message });
    }

    /// Remove and return the messages of every entry due at `now`, in the
    /// order they were scheduled.
    pub fn poll_due(&mut self, now: Instant) -> Vec<String> {
        if self.pending.iter().all(|r| r.fire_at > now) {
            return Vec::new();
        }
        let (due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|r| r.fire_at <= now);
        self.pending = pending;
        due.into_iter()
            .map(|r| {
                log::debug!("reminder fired: {}", r.message);
                r.message
            })
            .collect()
    }
}
