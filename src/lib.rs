use std::time::Duration;

use ureq::{Agent, AgentBuilder};

pub mod cafe;
pub mod error;
pub mod filter;
pub mod hours;
pub mod overpass;
pub mod session;

pub use cafe::{Cafe, Coordinate};
pub use error::FetchError;
pub use hours::{AlwaysOpen, HoursEvaluator};
pub use session::{Session, Ticket};

// Central Park, New York
pub const DEFAULT_LAT: f64 = 40.7812;
pub const DEFAULT_LON: f64 = -73.9665;
pub const DEFAULT_RADIUS_M: u32 = 2000;

pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Fetches cafes from an Overpass interpreter and normalizes them into
/// [`Cafe`] records ready for display.
pub struct Client {
    agent: Agent,
    endpoint: String,
    hours: Box<dyn HoursEvaluator>,
}

impl Client {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Client {
            agent: AgentBuilder::new()
                .user_agent(concat!("cafescout/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(30))
                .build(),
            endpoint: endpoint.into(),
            hours: Box::new(AlwaysOpen),
        }
    }

    /// Swap the opening-hours evaluator. The default reports every cafe as
    /// open regardless of its `opening_hours` tag.
    pub fn with_hours(mut self, hours: Box<dyn HoursEvaluator>) -> Self {
        self.hours = hours;
        self
    }

    /// All named cafes within `radius_m` of a point, in the order Overpass
    /// returned them.
    pub fn nearby(&self, lat: f64, lon: f64, radius_m: u32) -> Result<Vec<Cafe>, FetchError> {
        let elements = overpass::query(
            &self.agent,
            &self.endpoint,
            &overpass::nearby_query(lat, lon, radius_m),
        )?;
        Ok(cafe::normalize(&elements, &*self.hours))
    }

    /// A single cafe by OSM id, or `None` when nothing matches.
    pub fn by_id(&self, id: u64) -> Result<Option<Cafe>, FetchError> {
        let elements = overpass::query(&self.agent, &self.endpoint, &overpass::by_id_query(id))?;
        Ok(elements.first().and_then(cafe::normalize_detail))
    }
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_ENDPOINT)
    }
}
