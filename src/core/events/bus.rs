//=========================================================================
// Event Bus
//=========================================================================
//
// Per-frame typed outbox for gameplay events.
//
// Architecture:
//   Resolver → emit<E>() → HashMap<TypeId, Vec<E>>
//                               ↓
//   Listeners ← read<E>() / drain<E>()  (same frame)
//                               ↓
//   Owning mode ─────→ clear_all() at frame end
//
// Pattern: emit → read (N listeners) → clear → repeat
//
// The bus belongs to the mode that runs the simulation, so nothing
// outlives that mode and no global channel exists.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::queue::EventQueue;

//=== Public API ==========================================================

/// Marker trait for types that can travel over the [`EventBus`].
pub trait GameEvent: 'static {}

impl<T: 'static> GameEvent for T {}

//=========================================================================

/// Typed event queues, one per event type.
#[derive(Default)]
pub struct EventBus {
    queues: HashMap<TypeId, Box<dyn EventQueue>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Emission ---------------------------------------------------------

    /// Queues an event for delivery in the current frame.
    pub fn emit<E: GameEvent>(&mut self, event: E) {
        self.queue_mut::<E>().push(event);
    }

    //--- Consumption ------------------------------------------------------

    /// All events of type `E` emitted so far this frame.
    ///
    /// Several listeners may read the same events; they stay queued until
    /// cleared.
    pub fn read<E: GameEvent>(&self) -> &[E] {
        self.queues
            .get(&TypeId::of::<E>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<E>>())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Removes and returns all events of type `E`.
    pub fn drain<E: GameEvent>(&mut self) -> Vec<E> {
        self.queues
            .get_mut(&TypeId::of::<E>())
            .and_then(|q| q.as_any_mut().downcast_mut::<Vec<E>>())
            .map(std::mem::take)
            .unwrap_or_default()
    }

    //--- Query API --------------------------------------------------------

    pub fn count<E: GameEvent>(&self) -> usize {
        self.read::<E>().len()
    }

    pub fn has_events<E: GameEvent>(&self) -> bool {
        self.count::<E>() > 0
    }

    /// Total number of queued events across all types.
    pub fn total_count(&self) -> usize {
        self.queues.values().map(|q| q.len()).sum()
    }

    //--- Clearing ---------------------------------------------------------

    pub fn clear<E: GameEvent>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<E>()) {
            queue.clear_queue();
        }
    }

    /// Clears every queue, keeping allocations for the next frame.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn queue_mut<E: GameEvent>(&mut self) -> &mut Vec<E> {
        self.queues
            .entry(TypeId::of::<E>())
            .or_insert_with(|| Box::new(Vec::<E>::new()))
            .as_any_mut()
            .downcast_mut::<Vec<E>>()
            .expect("EventBus queue stored under mismatched TypeId")
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::{PlayerMessage, PlayerTeleported, TutorialMessage};
    use crate::core::math::Vector;
    use crate::data::TutorialMessageId;

    #[test]
    fn new_bus_is_empty() {
        let bus = EventBus::new();
        assert!(!bus.has_events::<PlayerMessage>());
        assert_eq!(bus.total_count(), 0);
        assert!(bus.read::<TutorialMessage>().is_empty());
    }

    #[test]
    fn events_are_read_in_emission_order() {
        let mut bus = EventBus::new();
        bus.emit(TutorialMessage::new(TutorialMessageId::FoundTeleporter));
        bus.emit(TutorialMessage::new(TutorialMessageId::FoundForceField));

        let ids: Vec<_> = bus.read::<TutorialMessage>().iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![TutorialMessageId::FoundTeleporter, TutorialMessageId::FoundForceField]
        );
    }

    #[test]
    fn event_types_are_queued_separately() {
        let mut bus = EventBus::new();
        bus.emit(PlayerMessage::new("ACCESS GRANTED."));
        bus.emit(PlayerTeleported {
            target_position: Vector::new(3, 4),
        });
        bus.emit(PlayerMessage::new("HELLO"));

        assert_eq!(bus.count::<PlayerMessage>(), 2);
        assert_eq!(bus.count::<PlayerTeleported>(), 1);
        assert_eq!(bus.total_count(), 3);
    }

    #[test]
    fn multiple_readers_see_same_events() {
        let mut bus = EventBus::new();
        bus.emit(PlayerMessage::new("A"));

        assert_eq!(bus.read::<PlayerMessage>().len(), 1);
        assert_eq!(bus.read::<PlayerMessage>()[0].text, "A");
        assert!(bus.has_events::<PlayerMessage>());
    }

    #[test]
    fn drain_takes_events_of_one_type() {
        let mut bus = EventBus::new();
        bus.emit(PlayerMessage::new("A"));
        bus.emit(TutorialMessage::new(TutorialMessageId::AccessCardNeeded));

        let drained = bus.drain::<PlayerMessage>();
        assert_eq!(drained.len(), 1);
        assert!(!bus.has_events::<PlayerMessage>());
        assert!(bus.has_events::<TutorialMessage>());
    }

    #[test]
    fn drain_of_unknown_type_is_empty() {
        let mut bus = EventBus::new();
        assert!(bus.drain::<PlayerTeleported>().is_empty());
    }

    #[test]
    fn clear_all_empties_every_queue() {
        let mut bus = EventBus::new();
        bus.emit(PlayerMessage::new("A"));
        bus.emit(TutorialMessage::new(TutorialMessageId::FoundTeleporter));

        bus.clear_all();
        assert_eq!(bus.total_count(), 0);

        bus.emit(PlayerMessage::new("B"));
        assert_eq!(bus.count::<PlayerMessage>(), 1);
    }

    #[test]
    fn clear_only_affects_one_type() {
        let mut bus = EventBus::new();
        bus.emit(PlayerMessage::new("A"));
        bus.emit(TutorialMessage::new(TutorialMessageId::FoundTeleporter));

        bus.clear::<PlayerMessage>();
        assert!(!bus.has_events::<PlayerMessage>());
        assert!(bus.has_events::<TutorialMessage>());
    }
}
