use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Duration, NaiveDate};
use venueBook::calendar::{CalendarEngine, DayStatus, ViewMonth};
use venueBook::models::venue::VenueDraft;
use venueBook::runtime::{Clock, IdGenerator};
use venueBook::store::VenueStore;

struct FixedClock {
    today: NaiveDate,
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

struct SequenceIds {
    counter: AtomicUsize,
}

impl SequenceIds {
    fn new() -> Self {
        Self { counter: AtomicUsize::new(0) }
    }
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("id-{}", n)
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 15).expect("valid fixture date")
}

fn setup() -> (CalendarEngine, VenueStore, String) {
    let clock = Arc::new(FixedClock { today: today() });
    let ids: Arc<dyn IdGenerator> = Arc::new(SequenceIds::new());
    let engine = CalendarEngine::new(clock, ids.clone());
    let mut store = VenueStore::new(ids);
    let venue_id = store.create(&VenueDraft {
        name: "Modern Loft".to_string(),
        location: "Arts District, Metro City".to_string(),
        ..VenueDraft::default()
    });
    (engine, store, venue_id)
}

#[test]
fn booking_in_the_past_leaves_store_unchanged() {
    let (engine, mut store, venue_id) = setup();

    let added = engine.add_booking(&mut store, &venue_id, today() - Duration::days(1));

    assert!(!added);
    assert!(store.get(&venue_id).expect("venue exists").bookings().is_empty());
}

#[test]
fn booking_today_succeeds() {
    let (engine, mut store, venue_id) = setup();

    let added = engine.add_booking(&mut store, &venue_id, today());

    assert!(added);
    let venue = store.get(&venue_id).expect("venue exists");
    assert_eq!(venue.bookings().len(), 1);
    assert_eq!(venue.bookings()[0].date, today());
}

#[test]
fn booking_an_already_booked_date_leaves_store_unchanged() {
    let (engine, mut store, venue_id) = setup();
    assert!(engine.add_booking(&mut store, &venue_id, today()));

    let added = engine.add_booking(&mut store, &venue_id, today());

    assert!(!added);
    let venue = store.get(&venue_id).expect("venue exists");
    assert_eq!(venue.bookings().len(), 1);
}

#[test]
fn booking_unknown_venue_leaves_store_unchanged() {
    let (engine, mut store, venue_id) = setup();

    let added = engine.add_booking(&mut store, "missing", today());

    assert!(!added);
    assert!(store.get(&venue_id).expect("venue exists").bookings().is_empty());
}

#[test]
fn today_then_tomorrow_are_stored_in_order() {
    let (engine, mut store, venue_id) = setup();

    assert!(engine.add_booking(&mut store, &venue_id, today()));
    assert!(engine.add_booking(&mut store, &venue_id, today() + Duration::days(1)));

    let venue = store.get(&venue_id).expect("venue exists");
    let dates: Vec<NaiveDate> = venue.bookings().iter().map(|b| b.date).collect();
    assert_eq!(dates, vec![today(), today() + Duration::days(1)]);
}

#[test]
fn bookings_stay_sorted_and_unique_over_any_sequence() {
    let (engine, mut store, venue_id) = setup();
    let attempts = [5, 1, 3, 1, 9, 3, 0, 2];
    for offset in attempts {
        engine.add_booking(&mut store, &venue_id, today() + Duration::days(offset));
    }

    let venue = store.get(&venue_id).expect("venue exists");
    let dates: Vec<NaiveDate> = venue.bookings().iter().map(|b| b.date).collect();
    let mut expected: Vec<NaiveDate> = dates.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(dates, expected, "dates must be ascending with no duplicates");
    assert_eq!(dates.len(), 6);

    let ids: Vec<&str> = venue.bookings().iter().map(|b| b.id.as_str()).collect();
    let mut unique_ids = ids.clone();
    unique_ids.sort();
    unique_ids.dedup();
    assert_eq!(ids.len(), unique_ids.len(), "booking ids must be unique");
}

#[test]
fn engine_opens_on_the_clocks_month() {
    let (engine, _store, _venue_id) = setup();
    assert_eq!(engine.view_month(), ViewMonth::new(2026, 4).expect("valid month"));
}

#[test]
fn month_navigation_round_trips() {
    let (mut engine, _store, _venue_id) = setup();
    let start = engine.view_month();

    engine.next_month();
    engine.previous_month();
    assert_eq!(engine.view_month(), start);

    // Across the December/January boundary as well.
    for _ in 0..9 {
        engine.next_month();
    }
    assert_eq!(engine.view_month(), ViewMonth::new(2027, 1).expect("valid month"));
    for _ in 0..9 {
        engine.previous_month();
    }
    assert_eq!(engine.view_month(), start);
}

#[test]
fn month_cells_classify_against_bookings_and_today() {
    let (engine, mut store, venue_id) = setup();
    let booked_date = today() + Duration::days(3);
    assert!(engine.add_booking(&mut store, &venue_id, booked_date));

    let venue = store.get(&venue_id).expect("venue exists");
    let cells = engine.month_cells(venue);

    // April 2026: 3 leading placeholders, then 30 dated cells.
    assert_eq!(cells.len(), 33);
    assert!(cells[..3].iter().all(|cell| cell.is_none()));

    let cell_for = |date: NaiveDate| {
        cells
            .iter()
            .flatten()
            .find(|cell| cell.date == date)
            .copied()
            .expect("date in view month")
    };

    let past = cell_for(today() - Duration::days(1));
    assert_eq!(past.status, DayStatus::Past);
    assert!(!past.is_today);

    let current = cell_for(today());
    assert_eq!(current.status, DayStatus::Available);
    assert!(current.is_today);
    assert!(current.status.is_selectable());

    let booked = cell_for(booked_date);
    assert_eq!(booked.status, DayStatus::Booked);
    assert!(!booked.status.is_selectable());

    let open = cell_for(today() + Duration::days(5));
    assert_eq!(open.status, DayStatus::Available);
}
