use tracing::warn;

use crate::cafe::Cafe;

/// Issued per lookup; newer tickets supersede older ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Holds the cafe list a caller is currently showing and arbitrates racing
/// lookups. An initial load, a geolocation callback and a manual relocate can
/// all be in flight at once with no guarantee which resolves last; a result
/// only lands when its ticket is still the newest one issued.
#[derive(Default)]
pub struct Session {
    issued: u64,
    cafes: Vec<Cafe>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Tag the next lookup. Call once per triggering event, before the fetch.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Install a resolved result. Returns false and keeps the current list
    /// when a newer ticket has been issued since this one.
    pub fn adopt(&mut self, ticket: Ticket, cafes: Vec<Cafe>) -> bool {
        if ticket.0 < self.issued {
            warn!(
                "discarding stale lookup result (ticket {} superseded by {})",
                ticket.0, self.issued
            );
            return false;
        }
        self.cafes = cafes;
        true
    }

    pub fn cafes(&self) -> &[Cafe] {
        &self.cafes
    }
}
