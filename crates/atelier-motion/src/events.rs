//! Lifecycle events for motion handles.
//!
//! The manager pushes an event on every handle state change of interest;
//! callers poll the queue after each update tick. The orchestrator uses
//! `Settled` to know when an entrance has finished and reveal bindings may
//! activate.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::types::{HandleId, MotionKind};

/// Event emitted when a handle changes state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MotionEvent {
    /// The handle began playing forward.
    Started {
        handle: HandleId,
        element: String,
        kind: MotionKind,
    },
    /// The handle completed normally at its end value.
    Settled {
        handle: HandleId,
        element: String,
        kind: MotionKind,
    },
    /// A reversal completed; the handle is back at its start value, idle.
    Reversed {
        handle: HandleId,
        element: String,
        kind: MotionKind,
    },
    /// The handle was disposed.
    Killed {
        handle: HandleId,
        element: String,
        kind: MotionKind,
    },
}

impl MotionEvent {
    /// The element this event concerns.
    pub fn element(&self) -> &str {
        match self {
            Self::Started { element, .. }
            | Self::Settled { element, .. }
            | Self::Reversed { element, .. }
            | Self::Killed { element, .. } => element,
        }
    }

    /// The handle this event concerns.
    pub fn handle(&self) -> HandleId {
        match self {
            Self::Started { handle, .. }
            | Self::Settled { handle, .. }
            | Self::Reversed { handle, .. }
            | Self::Killed { handle, .. } => *handle,
        }
    }
}

/// FIFO queue of motion events, drained by the caller after updates.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<MotionEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: MotionEvent) {
        self.events.push_back(event);
    }

    /// Drain all pending events in emission order.
    pub fn drain(&mut self) -> impl Iterator<Item = MotionEvent> + '_ {
        self.events.drain(..)
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&MotionEvent> {
        self.events.front()
    }

    /// Pop a single event.
    pub fn pop(&mut self) -> Option<MotionEvent> {
        self.events.pop_front()
    }

    /// Pending events for one element, oldest first, without removal.
    pub fn events_for_element(&self, element: &str) -> Vec<&MotionEvent> {
        self.events
            .iter()
            .filter(|e| e.element() == element)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(element: &str) -> MotionEvent {
        MotionEvent::Started {
            handle: HandleId::new(),
            element: element.to_string(),
            kind: MotionKind::FadeSlide,
        }
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::new();
        queue.push(started("a"));
        queue.push(started("b"));

        let order: Vec<String> = queue.drain().map(|e| e.element().to_string()).collect();
        assert_eq!(order, vec!["a", "b"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = EventQueue::new();
        queue.push(started("a"));

        assert!(queue.peek().is_some());
        assert_eq!(queue.len(), 1);
        queue.pop();
        assert!(queue.peek().is_none());
    }

    #[test]
    fn test_events_for_element() {
        let mut queue = EventQueue::new();
        queue.push(started("hero"));
        queue.push(started("card"));
        queue.push(started("hero"));

        assert_eq!(queue.events_for_element("hero").len(), 2);
        assert_eq!(queue.events_for_element("card").len(), 1);
        assert_eq!(queue.events_for_element("footer").len(), 0);
    }
}
