use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single whole-day reservation. Owned by exactly one venue.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: String,
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    pub amenities: Vec<String>,
    pub price_per_day: f64,
    pub description: String,
    pub image_url: String,
    // Sorted ascending by date, one entry per calendar day. Only the
    // calendar engine's add_booking appends here.
    bookings: Vec<Booking>,
}

impl Venue {
    pub fn from_draft(id: String, draft: &VenueDraft) -> Self {
        let mut venue = Venue {
            id,
            name: String::new(),
            location: String::new(),
            capacity: 0,
            amenities: Vec::new(),
            price_per_day: 0.0,
            description: String::new(),
            image_url: String::new(),
            bookings: Vec::new(),
        };
        venue.apply_draft(draft);
        venue
    }

    // Replaces every editable field; id and bookings stay as they are.
    pub fn apply_draft(&mut self, draft: &VenueDraft) {
        self.name = draft.name.trim().to_string();
        self.location = draft.location.trim().to_string();
        self.capacity = draft.capacity;
        self.amenities = parse_amenities(&draft.amenities);
        self.price_per_day = draft.price_per_day;
        self.description = draft.description.clone();
        self.image_url = if draft.image_url.trim().is_empty() {
            placeholder_image_url(&self.name)
        } else {
            draft.image_url.trim().to_string()
        };
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_booked(&self, date: NaiveDate) -> bool {
        self.bookings.iter().any(|booking| booking.date == date)
    }

    pub fn booked_dates(&self) -> HashSet<NaiveDate> {
        self.bookings.iter().map(|booking| booking.date).collect()
    }

    pub(crate) fn insert_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
        self.bookings.sort_by_key(|booking| booking.date);
    }
}

/// Form payload for creating or editing a venue. Amenities arrive as
/// the raw comma-separated input text.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VenueDraft {
    pub name: String,
    pub location: String,
    pub capacity: u32,
    pub price_per_day: f64,
    pub amenities: String,
    pub description: String,
    pub image_url: String,
}

impl Default for VenueDraft {
    fn default() -> Self {
        VenueDraft {
            name: String::new(),
            location: String::new(),
            capacity: 10,
            price_per_day: 100.0,
            amenities: String::new(),
            description: String::new(),
            image_url: String::new(),
        }
    }
}

impl VenueDraft {
    // Required-field rule the form enforces before submitting: name and
    // location present, capacity positive, price non-negative.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.location.trim().is_empty()
            && self.capacity >= 1
            && self.price_per_day >= 0.0
    }
}

pub fn parse_amenities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

pub fn placeholder_image_url(name: &str) -> String {
    format!("https://picsum.photos/seed/{}/800/600", name)
}
