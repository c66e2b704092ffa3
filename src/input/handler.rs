use crate::{
    input::events::{MapEvent, MapEventType},
    prelude::{Arc, HashMap},
    Result,
};

/// Event listener callback type.
///
/// Listeners are compared by pointer identity: detaching removes exactly the
/// `Arc` that was attached, so callers keep their clone around for `off`.
pub type EventListener = Arc<dyn Fn(&MapEvent) -> Result<()> + Send + Sync>;

/// Wraps a closure into an [`EventListener`]
pub fn listener<F>(callback: F) -> EventListener
where
    F: Fn(&MapEvent) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(callback)
}

/// Event management system for a map view
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event type, in registration order
    listeners: HashMap<MapEventType, Vec<EventListener>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener. Registering the same listener twice is a no-op.
    pub fn on(&mut self, event_type: MapEventType, listener: EventListener) {
        let entry = self.listeners.entry(event_type).or_default();
        if !entry.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            entry.push(listener);
        }
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn off(&mut self, event_type: MapEventType, listener: &EventListener) -> bool {
        let Some(entry) = self.listeners.get_mut(&event_type) else {
            return false;
        };
        let before = entry.len();
        entry.retain(|l| !Arc::ptr_eq(l, listener));
        before != entry.len()
    }

    /// Drop every listener of one type
    pub fn clear(&mut self, event_type: MapEventType) {
        self.listeners.remove(&event_type);
    }

    /// Snapshot of the listeners registered for `event_type`
    pub fn listeners(&self, event_type: MapEventType) -> Vec<EventListener> {
        self.listeners
            .get(&event_type)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of listeners registered for `event_type`
    pub fn listener_count(&self, event_type: MapEventType) -> usize {
        self.listeners.get(&event_type).map_or(0, Vec::len)
    }

    /// Whether `listener` is currently registered for `event_type`
    pub fn contains(&self, event_type: MapEventType, listener: &EventListener) -> bool {
        self.listeners
            .get(&event_type)
            .is_some_and(|entry| entry.iter().any(|l| Arc::ptr_eq(l, listener)))
    }

    /// Emit an event to all current listeners
    pub fn emit(&self, event: &MapEvent) -> Result<()> {
        Self::dispatch(&self.listeners(event.event_type()), event)
    }

    /// Invoke a listener snapshot in order. Stops at the first error.
    ///
    /// Hosts that guard the manager behind a lock take the snapshot, release
    /// the lock and then dispatch, so listeners can call `on`/`off`.
    pub fn dispatch(listeners: &[EventListener], event: &MapEvent) -> Result<()> {
        for listener in listeners {
            listener(event)?;
        }
        Ok(())
    }
}
