use std::sync::Arc;

use log::{info, warn};

use crate::models::venue::{Venue, VenueDraft};
use crate::runtime::IdGenerator;

/// Authoritative in-memory collection of venues plus the single
/// optional selection. Newest venue first; creation prepends.
pub struct VenueStore {
    venues: Vec<Venue>,
    selected: Option<String>,
    ids: Arc<dyn IdGenerator>,
}

impl VenueStore {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            venues: Vec::new(),
            selected: None,
            ids,
        }
    }

    /// Store preloaded with the demo venues, first one selected.
    pub fn with_sample_venues(ids: Arc<dyn IdGenerator>) -> Self {
        let mut store = Self::new(ids);
        for draft in sample_venue_drafts().iter().rev() {
            store.create(draft);
        }
        if let Some(first) = store.venues.first() {
            store.selected = Some(first.id.clone());
        }
        store
    }

    /// Venues whose name or location contains `filter`, case
    /// insensitively. A blank filter returns everything, in store order.
    pub fn list(&self, filter: &str) -> Vec<&Venue> {
        let needle = filter.trim().to_lowercase();
        self.venues
            .iter()
            .filter(|venue| {
                needle.is_empty()
                    || venue.name.to_lowercase().contains(&needle)
                    || venue.location.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Creates a venue from the draft, prepends it and selects it.
    /// Returns the generated id.
    pub fn create(&mut self, draft: &VenueDraft) -> String {
        let id = self.ids.next_id();
        let venue = Venue::from_draft(id.clone(), draft);
        info!("created venue {} ({})", venue.name, id);
        self.venues.insert(0, venue);
        self.selected = Some(id.clone());
        id
    }

    /// Replaces the editable fields of the venue with matching id,
    /// keeping id and bookings. Unknown id is a no-op.
    pub fn update(&mut self, id: &str, draft: &VenueDraft) {
        match self.venues.iter_mut().find(|venue| venue.id == id) {
            Some(venue) => {
                venue.apply_draft(draft);
                info!("updated venue {}", id);
            }
            None => warn!("update of unknown venue {} ignored", id),
        }
    }

    /// Removes the venue with matching id. When it was selected, the
    /// selection falls back to the first remaining venue, if any.
    /// Unknown id is a no-op.
    pub fn delete(&mut self, id: &str) {
        let before = self.venues.len();
        self.venues.retain(|venue| venue.id != id);
        if self.venues.len() == before {
            warn!("delete of unknown venue {} ignored", id);
            return;
        }
        info!("deleted venue {}", id);
        if self.selected.as_deref() == Some(id) {
            self.selected = self.venues.first().map(|venue| venue.id.clone());
        }
    }

    pub fn select(&mut self, id: &str) {
        if self.venues.iter().any(|venue| venue.id == id) {
            self.selected = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Venue> {
        let id = self.selected.as_deref()?;
        self.get(id)
    }

    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Venue> {
        self.venues.iter_mut().find(|venue| venue.id == id)
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

fn sample_venue_drafts() -> Vec<VenueDraft> {
    vec![
        VenueDraft {
            name: "The Grand Ballroom".to_string(),
            location: "Downtown, Metro City".to_string(),
            capacity: 200,
            price_per_day: 1500.0,
            amenities: "Wi-Fi, Projector, Catering, Sound System".to_string(),
            description: "An elegant and spacious ballroom perfect for weddings, galas, and large corporate events. Features high ceilings and classic decor.".to_string(),
            image_url: "https://picsum.photos/seed/ballroom/800/600".to_string(),
        },
        VenueDraft {
            name: "Modern Loft".to_string(),
            location: "Arts District, Metro City".to_string(),
            capacity: 75,
            price_per_day: 800.0,
            amenities: "Wi-Fi, Kitchenette, Natural Light, Rooftop Access".to_string(),
            description: "A stylish and versatile loft with an industrial-chic vibe. Ideal for workshops, photo shoots, and intimate gatherings.".to_string(),
            image_url: "https://picsum.photos/seed/loft/800/600".to_string(),
        },
        VenueDraft {
            name: "Lakeside Conference Center".to_string(),
            location: "North Suburbs".to_string(),
            capacity: 120,
            price_per_day: 1100.0,
            amenities: "Wi-Fi, Whiteboards, AV Equipment, Free Parking".to_string(),
            description: "A professional setting with serene lake views. Our conference center is equipped with state-of-the-art technology for your next business meeting.".to_string(),
            image_url: "https://picsum.photos/seed/conference/800/600".to_string(),
        },
    ]
}
