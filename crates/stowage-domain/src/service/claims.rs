//! Process-wide carrier id claims

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Shared set of claimed carrier ids
///
/// Clones are handles to the same underlying set, so every registry built
/// on clones of one handle contends for the same ids. A claim holds the
/// lock across the membership test and the insert.
#[derive(Clone, Debug, Default)]
pub struct CarrierClaims {
    ids: Arc<Mutex<HashSet<String>>>,
}

impl CarrierClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an id; false when it is already taken
    pub fn claim(&self, id: &str) -> bool {
        self.ids.lock().unwrap().insert(id.to_string())
    }

    /// Release a claimed id; false when it was not claimed
    pub fn release(&self, id: &str) -> bool {
        self.ids.lock().unwrap().remove(id)
    }

    pub fn is_claimed(&self, id: &str) -> bool {
        self.ids.lock().unwrap().contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.lock().unwrap().is_empty()
    }
}
