use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Contact notification delivered by a collision source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactEvent {
    Enter,
    Exit,
}

/// Contact flag plus the queue of events not yet applied to it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollisionComponent {
    /// Whether the drone is currently touching ground or the platform
    pub in_contact: bool,
    /// Number of contact enters seen this episode
    pub collision_count: u32,
    #[serde(skip)]
    pending: VecDeque<ContactEvent>,
}

impl CollisionComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.in_contact = false;
        self.collision_count = 0;
        self.pending.clear();
    }

    pub fn push(&mut self, event: ContactEvent) {
        self.pending.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply queued events in arrival order, returning the resulting flag
    pub fn drain(&mut self) -> bool {
        while let Some(event) = self.pending.pop_front() {
            self.apply(event);
        }
        self.in_contact
    }

    /// Apply one event immediately, bypassing the queue
    pub fn apply(&mut self, event: ContactEvent) {
        match event {
            ContactEvent::Enter => {
                self.in_contact = true;
                self.collision_count += 1;
            }
            ContactEvent::Exit => self.in_contact = false,
        }
    }
}
