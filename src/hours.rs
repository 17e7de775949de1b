use chrono::{DateTime, Utc};

/// Evaluates an OSM `opening_hours` rule string at a point in time.
///
/// The shipped implementation reports every cafe as open; swap in a real
/// grammar evaluator via `Client::with_hours`. Cafes without the tag are
/// treated as open before this is ever consulted, and that fallback must
/// survive any replacement.
pub trait HoursEvaluator {
    fn is_open(&self, rules: &str, at: DateTime<Utc>) -> bool;
}

/// Default evaluator: any rule string evaluates to open.
pub struct AlwaysOpen;

impl HoursEvaluator for AlwaysOpen {
    fn is_open(&self, _rules: &str, _at: DateTime<Utc>) -> bool {
        true
    }
}
