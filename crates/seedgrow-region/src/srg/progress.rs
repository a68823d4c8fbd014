//! Progress notification
//!
//! Observers are plain callbacks receiving a fraction in `[0, 1]` and an
//! optional status message. They are called synchronously, in registration
//! order, and cannot influence the segmentation.

use std::fmt;

/// Boxed progress callback
pub type ProgressCallback = Box<dyn FnMut(f64, Option<&str>) + Send>;

/// Handle returned on registration, used to remove a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered list of progress observers
#[derive(Default)]
pub struct ProgressListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, ProgressCallback)>,
}

impl ProgressListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn add<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(f64, Option<&str>) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// Unregister a listener; returns false if `id` was not registered
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invoke every listener; `fraction` is clamped to `[0, 1]`
    pub fn notify(&mut self, fraction: f64, status: Option<&str>) {
        let fraction = fraction.clamp(0.0, 1.0);
        for (_, callback) in &mut self.listeners {
            callback(fraction, status);
        }
    }
}

impl fmt::Debug for ProgressListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
