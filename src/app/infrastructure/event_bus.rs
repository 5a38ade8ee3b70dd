//! Cross-window publish/subscribe.
//!
//! Emitting is fire-and-forget: the emitter never learns who received the
//! event. Listeners run on the emitting thread, so a window that must apply
//! the change on its own loop forwards it through its FLTK channel.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub payload: Value,
}

impl Event {
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

pub trait EventBus: Send + Sync {
    fn emit(&self, event: &str, payload: Value);
    fn listen(&self, event: &str, handler: EventHandler) -> ListenerId;
    fn unlisten(&self, id: ListenerId);
}

/// Serialize `payload` and emit it.
pub fn emit_json<T: Serialize>(bus: &dyn EventBus, event: &str, payload: &T) -> Result<()> {
    let value = serde_json::to_value(payload)?;
    bus.emit(event, value);
    Ok(())
}

/// A registered listener, removed from the bus when dropped.
pub struct Subscription {
    bus: Arc<dyn EventBus>,
    id: Option<ListenerId>,
}

impl Subscription {
    pub fn listen<F>(bus: Arc<dyn EventBus>, event: &str, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let id = bus.listen(event, Arc::new(handler));
        Self { bus, id: Some(id) }
    }

    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.bus.unlisten(id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

struct Listener {
    id: ListenerId,
    event: String,
    handler: EventHandler,
}

/// In-process bus shared by every window of the application.
#[derive(Default)]
pub struct LocalEventBus {
    next_id: AtomicU64,
    listeners: Mutex<Vec<Listener>>,
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.lock().iter().filter(|l| l.event == event).count()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Listener>> {
        // A panicking listener never runs under this lock.
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventBus for LocalEventBus {
    fn emit(&self, event: &str, payload: Value) {
        // Snapshot the handlers so a listener may unlisten while being called.
        let handlers: Vec<EventHandler> = self
            .lock()
            .iter()
            .filter(|l| l.event == event)
            .map(|l| Arc::clone(&l.handler))
            .collect();

        tracing::debug!(event, listeners = handlers.len(), "emitting event");

        let event = Event {
            name: event.to_string(),
            payload,
        };
        for handler in handlers {
            handler(&event);
        }
    }

    fn listen(&self, event: &str, handler: EventHandler) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push(Listener {
            id,
            event: event.to_string(),
            handler,
        });
        id
    }

    fn unlisten(&self, id: ListenerId) {
        self.lock().retain(|l| l.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_handler(counter: Arc<AtomicUsize>) -> impl Fn(&Event) + Send + Sync + 'static {
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_emit_reaches_only_matching_listeners() {
        let bus: Arc<dyn EventBus> = Arc::new(LocalEventBus::new());
        let hits = Arc::new(AtomicUsize::new(0));
        let misses = Arc::new(AtomicUsize::new(0));

        let _a = Subscription::listen(Arc::clone(&bus), "a", counting_handler(hits.clone()));
        let _b = Subscription::listen(Arc::clone(&bus), "b", counting_handler(misses.clone()));

        bus.emit("a", Value::Null);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(misses.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let bus = LocalEventBus::new();
        bus.emit("nobody", serde_json::json!({ "x": 1 }));
        assert_eq!(bus.listener_count("nobody"), 0);
    }

    #[test]
    fn test_dropping_subscription_unlistens() {
        let local = Arc::new(LocalEventBus::new());
        let bus: Arc<dyn EventBus> = local.clone();
        let hits = Arc::new(AtomicUsize::new(0));

        let subscription =
            Subscription::listen(Arc::clone(&bus), "a", counting_handler(hits.clone()));
        assert_eq!(local.listener_count("a"), 1);
        drop(subscription);
        assert_eq!(local.listener_count("a"), 0);

        bus.emit("a", Value::Null);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let local = Arc::new(LocalEventBus::new());
        let hits = Arc::new(AtomicUsize::new(0));
        let subscription = Subscription::listen(local.clone(), "a", counting_handler(hits.clone()));
        assert!(subscription.id().is_some());
        subscription.unsubscribe();
        assert_eq!(local.listener_count("a"), 0);
    }

    #[test]
    fn test_listener_can_unlisten_itself_during_emit() {
        let local = Arc::new(LocalEventBus::new());
        let slot: Arc<Mutex<Option<ListenerId>>> = Arc::new(Mutex::new(None));

        let bus_for_handler = Arc::clone(&local);
        let slot_for_handler = Arc::clone(&slot);
        let id = local.listen(
            "a",
            Arc::new(move |_: &Event| {
                if let Some(id) = slot_for_handler.lock().unwrap().take() {
                    bus_for_handler.unlisten(id);
                }
            }),
        );
        *slot.lock().unwrap() = Some(id);

        local.emit("a", Value::Null);
        assert_eq!(local.listener_count("a"), 0);
    }

    #[test]
    fn test_emit_json_and_parse_payload() {
        #[derive(Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Ping {
            n: u32,
        }

        let bus = Arc::new(LocalEventBus::new());
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        let _sub = Subscription::listen(bus.clone(), "ping", move |event| {
            sink.lock().unwrap().push(event.parse_payload::<Ping>().unwrap());
        });

        emit_json(&*bus, "ping", &Ping { n: 7 }).unwrap();
        assert_eq!(*received.lock().unwrap(), vec![Ping { n: 7 }]);
    }
}
