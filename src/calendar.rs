use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};

use crate::models::venue::{Booking, Venue};
use crate::runtime::{Clock, IdGenerator};
use crate::store::VenueStore;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently displayed, independent of any venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMonth {
    year: i32,
    /// 1 = January .. 12 = December.
    month: u32,
}

impl ViewMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // Month is validated to 1..=12, so day 1 always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("first day of a valid month")
    }

    /// Weekday index of day 1, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        let next_first = self.next().first_day();
        (next_first - self.first_day()).num_days() as u32
    }

    /// Header string, e.g. "April 2026".
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// The cell sequence a 7-column view tiles into: leading `None`
    /// placeholders up to the first weekday, then one date per day.
    /// Trailing cells after the last day are simply absent.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let lead = self.first_weekday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
        for day in 1..=self.days_in_month() {
            cells.push(NaiveDate::from_ymd_opt(self.year, self.month, day));
        }
        cells
    }
}

/// Interaction status of a day. Exactly one applies; booked wins over
/// past for display, and only `Available` accepts a new booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Booked,
    Past,
    Available,
}

impl DayStatus {
    pub fn is_selectable(&self) -> bool {
        matches!(self, DayStatus::Available)
    }
}

pub fn classify(date: NaiveDate, today: NaiveDate, booked: &HashSet<NaiveDate>) -> DayStatus {
    if booked.contains(&date) {
        DayStatus::Booked
    } else if date < today {
        DayStatus::Past
    } else {
        DayStatus::Available
    }
}

/// One renderable calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub is_today: bool,
}

/// Month-view navigation plus the booking gate. Holds the injected
/// clock and id source; venue state stays in the store.
pub struct CalendarEngine {
    view: ViewMonth,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl CalendarEngine {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        let view = ViewMonth::containing(clock.today());
        Self { view, clock, ids }
    }

    pub fn view_month(&self) -> ViewMonth {
        self.view
    }

    pub fn next_month(&mut self) {
        self.view = self.view.next();
    }

    pub fn previous_month(&mut self) {
        self.view = self.view.previous();
    }

    /// Cells for the view month classified against the venue's
    /// bookings and the clock's today.
    pub fn month_cells(&self, venue: &Venue) -> Vec<Option<DayCell>> {
        let today = self.clock.today();
        let booked = venue.booked_dates();
        self.view
            .grid()
            .into_iter()
            .map(|slot| {
                slot.map(|date| DayCell {
                    date,
                    status: classify(date, today, &booked),
                    is_today: date == today,
                })
            })
            .collect()
    }

    /// The single mutation entry point for bookings. Re-validates even
    /// though the UI never offers non-selectable cells: the date must
    /// not be past and not already booked for this venue. Returns
    /// whether a booking was added; rejections leave the store as it
    /// was.
    pub fn add_booking(&self, store: &mut VenueStore, venue_id: &str, date: NaiveDate) -> bool {
        let today = self.clock.today();
        if date < today {
            debug!("booking for {} rejected: date is in the past", date);
            return false;
        }
        let Some(venue) = store.get_mut(venue_id) else {
            warn!("booking for unknown venue {} ignored", venue_id);
            return false;
        };
        if venue.is_booked(date) {
            debug!("booking for {} rejected: {} already booked", date, venue.name);
            return false;
        }
        let booking = Booking {
            id: self.ids.next_id(),
            date,
        };
        info!("booked {} on {}", venue.name, date);
        venue.insert_booking(booking);
        true
    }
}
