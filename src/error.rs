use thiserror::Error;

/// Why a lookup failed, kept distinct from a genuinely empty result set so
/// callers can tell "no cafes nearby" apart from "the lookup broke".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("overpass request failed: {0}")]
    Network(#[from] ureq::Error),
    #[error("malformed overpass response: {0}")]
    Decode(#[from] std::io::Error),
}
