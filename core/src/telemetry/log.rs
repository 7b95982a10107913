use crate::prelude::TableKind;
use log::{debug, info};

/// Thin wrapper over the `log` facade so builders report in one format.
pub struct LogManager {
    kind: TableKind,
}

impl LogManager {
    pub fn new(kind: TableKind) -> Self {
        Self { kind }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.kind, message);
    }

    pub fn detail(&self, message: &str) {
        debug!("[{}] {}", self.kind, message);
    }
}
