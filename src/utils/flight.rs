use std::collections::HashSet;

/// Kind of remote operation a user action can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Ingest,
    Query,
}

/// Single-flight guard keyed by operation kind.
///
/// A second operation of the same kind is refused while one is in flight;
/// operations of different kinds never serialize against each other. The
/// caller must pair every successful [`InFlight::begin`] with a
/// [`InFlight::finish`] on every completion path.
#[derive(Debug, Default)]
pub struct InFlight {
    active: HashSet<OpKind>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start an operation. Returns false (and changes nothing) if one
    /// of the same kind is already in flight.
    pub fn begin(&mut self, kind: OpKind) -> bool {
        self.active.insert(kind)
    }

    /// Mark an operation as completed, releasing the guard for its kind.
    pub fn finish(&mut self, kind: OpKind) {
        self.active.remove(&kind);
    }

    /// Whether an operation of the given kind is currently in flight.
    pub fn active(&self, kind: OpKind) -> bool {
        self.active.contains(&kind)
    }
}
