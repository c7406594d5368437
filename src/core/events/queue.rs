//=========================================================================
// Event Queue Trait
//=========================================================================
//
// Type-erased view of a `Vec<E>` so queues of different event types can
// live in one HashMap inside the EventBus.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::bus::GameEvent;

//=========================================================================

/// Type-erased storage for one event type's queue.
pub(super) trait EventQueue {
    /// Clears all events while keeping the allocation.
    fn clear_queue(&mut self);

    /// Number of queued events.
    fn len(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<E: GameEvent> EventQueue for Vec<E> {
    fn clear_queue(&mut self) {
        self.clear();
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Tests
//=========================================================================
