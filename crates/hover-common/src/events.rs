use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{LayoutMode, WindowId};

/// State changes broadcast to every window and view so surrounding UI can
/// reflect them.
///
/// Serialized as `{"event": "layout-changed", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum Event {
    LayoutChanged { window: WindowId, mode: LayoutMode },
    ShortcutsChanged { global: bool },
    FocusChanged { window: Option<WindowId> },
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that will see the event.
    pub fn publish(&self, event: Event) -> usize {
        match self.sender.send(event) {
            Ok(n) => n,
            Err(tokio::sync::broadcast::error::SendError(event)) => {
                tracing::trace!(?event, "no subscribers");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::ShortcutsChanged { global: true });

        let event = rx.recv().await.unwrap();
        assert_eq!(event, Event::ShortcutsChanged { global: true });
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::FocusChanged {
            window: Some(WindowId(1)),
        });

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::FocusChanged { window: Some(WindowId(1)) }));
        assert!(matches!(e2, Event::FocusChanged { window: Some(WindowId(1)) }));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(Event::ShortcutsChanged { global: false });
        assert_eq!(count, 0);
    }

    #[test]
    fn layout_changed_wire_format() {
        let event = Event::LayoutChanged {
            window: WindowId(3),
            mode: LayoutMode::Canvas,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "layout-changed");
        assert_eq!(json["payload"]["window"], 3);
        assert_eq!(json["payload"]["mode"], "canvas");
    }

    #[test]
    fn focus_changed_wire_format() {
        let json = serde_json::to_value(Event::FocusChanged { window: None }).unwrap();
        assert_eq!(json["event"], "focus-changed");
        assert!(json["payload"]["window"].is_null());
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"event":"something-new","payload":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
