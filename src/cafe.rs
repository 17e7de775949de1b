use chrono::Utc;
use geo::{HaversineDistance, Point};
use rand::Rng;
use serde::Serialize;

use crate::hours::HoursEvaluator;
use crate::overpass::RawElement;

// Rotating pool of stock photos; OSM carries no imagery, so every cafe gets
// one keyed off its id.
const IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1554118811-1e0d58224f24?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1509042239860-f550ce710b93?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1497935586351-b67a49e012bf?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1521017432531-fbd92d768814?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?q=80&w=1000&auto=format&fit=crop",
];

const NO_ADDRESS: &str = "Address not available";
const NO_ADDRESS_DETAIL: &str = "Address unavailable";
const NO_DESCRIPTION: &str = "A lovely spot for coffee.";
const NO_DESCRIPTION_DETAIL: &str = "Details fetched from OpenStreetMap.";
const UNNAMED: &str = "Unnamed Cafe";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Great-circle distance to another point, in meters.
    pub fn distance_m(&self, other: &Coordinate) -> f64 {
        Point::new(self.lng, self.lat).haversine_distance(&Point::new(other.lng, other.lat))
    }
}

/// A cafe as the UI consumes it. Rating, review count and image are mock
/// fields synthesized here; everything else comes from OSM tags.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    pub id: u64,
    pub name: String,
    pub rating: String,
    pub reviews: u32,
    pub address: String,
    pub image: String,
    pub is_open: bool,
    pub description: String,
    pub coordinates: Coordinate,
}

/// Every element the list view can use, in input order. Elements without a
/// name tag are dropped entirely rather than shown with a placeholder.
pub fn normalize(elements: &[RawElement], hours: &dyn HoursEvaluator) -> Vec<Cafe> {
    elements
        .iter()
        .filter_map(|x| normalize_one(x, hours))
        .collect()
}

pub fn normalize_one(element: &RawElement, hours: &dyn HoursEvaluator) -> Option<Cafe> {
    let coordinates = element.position()?;
    let name = element.tags.get("name").filter(|x| !x.is_empty())?.clone();

    let address = match element.tags.get("addr:street") {
        Some(street) => match element.tags.get("addr:housenumber") {
            Some(number) => format!("{number} {street}"),
            None => street.clone(),
        },
        None => NO_ADDRESS.to_string(),
    };

    // no opening_hours tag means open; the evaluator only sees tagged cafes
    let is_open = match element.tags.get("opening_hours") {
        Some(rules) => hours.is_open(rules, Utc::now()),
        None => true,
    };

    let mut rng = rand::thread_rng();
    Some(Cafe {
        id: element.id,
        name,
        rating: format!("{:.1}", rng.gen_range(3.0..5.0)),
        reviews: rng.gen_range(10..210),
        address,
        image: image_for(element.id).to_string(),
        is_open,
        description: element
            .tags
            .get("description")
            .cloned()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        coordinates,
    })
}

/// Detail view of a single element. Intentionally divergent from the list
/// path: unnamed cafes keep a placeholder instead of disappearing, the mock
/// rating and review count are fixed constants, the address uses the street
/// tag alone, and opening hours are not consulted.
pub fn normalize_detail(element: &RawElement) -> Option<Cafe> {
    let coordinates = element.position()?;
    Some(Cafe {
        id: element.id,
        name: element
            .tags
            .get("name")
            .cloned()
            .unwrap_or_else(|| UNNAMED.to_string()),
        rating: "4.5".to_string(),
        reviews: 100,
        address: element
            .tags
            .get("addr:street")
            .cloned()
            .unwrap_or_else(|| NO_ADDRESS_DETAIL.to_string()),
        image: image_for(element.id).to_string(),
        is_open: true,
        description: element
            .tags
            .get("description")
            .cloned()
            .unwrap_or_else(|| NO_DESCRIPTION_DETAIL.to_string()),
        coordinates,
    })
}

/// Same id, same image, for as long as the pool stays put.
pub fn image_for(id: u64) -> &'static str {
    IMAGES[(id % IMAGES.len() as u64) as usize]
}
