use tokio::task::JoinHandle;

/// Owns a background listener task. Dropping the guard aborts the task, so
/// a listener never outlives whoever subscribed.
#[derive(Debug)]
pub struct Subscription {
    name: &'static str,
    handles: Vec<JoinHandle<()>>,
}

impl Subscription {
    pub fn new(name: &'static str, handle: JoinHandle<()>) -> Self {
        Self {
            name,
            handles: vec![handle],
        }
    }

    /// Ties another task to the same lifetime.
    pub fn with(mut self, handle: JoinHandle<()>) -> Self {
        self.handles.push(handle);
        self
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
        tracing::debug!(subscription = self.name, "Subscription released");
    }
}
