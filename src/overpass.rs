use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;
use ureq::Agent;

use crate::cafe::Coordinate;
use crate::error::FetchError;

/// Overpass QL body selecting cafe nodes and ways around a point. `out
/// center;` makes ways report a computed center so they can be placed like
/// nodes.
pub fn nearby_query(lat: f64, lon: f64, radius_m: u32) -> String {
    format!(
        r#"(
  node["amenity"="cafe"](around:{radius_m},{lat},{lon});
  way["amenity"="cafe"](around:{radius_m},{lat},{lon});
);
out center;"#
    )
}

/// Selects a single node or way by id, again with a computed center.
pub fn by_id_query(id: u64) -> String {
    format!(
        r#"(
  node({id});
  way({id});
);
out center;"#
    )
}

pub fn query(agent: &Agent, endpoint: &str, body: &str) -> Result<Vec<RawElement>, FetchError> {
    let payload = format!("[out:json][timeout:25]; {body}");
    debug!("overpass query: {payload}");
    let response: OverpassResponse = agent
        .post(endpoint)
        .send_form(&[("data", &payload)])?
        .into_json()?;
    Ok(response.elements)
}

#[derive(Deserialize)]
struct OverpassResponse {
    elements: Vec<RawElement>,
}

/// One OSM element as Overpass returns it. Nodes carry `lat`/`lon` directly;
/// ways only get a `center` because the query asked for one.
#[derive(Debug, Deserialize)]
pub struct RawElement {
    pub id: u64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<Position>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl RawElement {
    /// Direct coordinates when present, otherwise the computed center. An
    /// element with neither is malformed and gets skipped by the normalizer.
    pub fn position(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate { lat, lng: lon }),
            _ => self.center.as_ref().map(|x| Coordinate {
                lat: x.lat,
                lng: x.lon,
            }),
        }
    }
}
