use chrono::{Local, NaiveDate};
use uuid::Uuid;

/// Source of "today" for past/today classification. Injected so tests
/// can pin the calendar to a fixed date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Produces opaque unique ids for venues and bookings.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
