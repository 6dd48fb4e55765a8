use crate::components::{ContactEvent, DroneState, FootGeometry};

/// Something that reports contact changes for the drone.
///
/// Polled once per step after integration; every returned event is queued on
/// the drone's collision component in order.
pub trait CollisionSource: Send {
    fn poll(&mut self, state: &DroneState, feet: &FootGeometry) -> Vec<ContactEvent>;

    /// Forget any contact state carried over from the previous episode
    fn reset(&mut self) {}
}

/// Flat-ground detector: contact while the lowest foot is at or below
/// `ground_y`. Emits an event only when the contact state changes.
#[derive(Debug, Clone)]
pub struct GroundContactDetector {
    ground_y: f64,
    in_contact: bool,
}

impl GroundContactDetector {
    pub fn new(ground_y: f64) -> Self {
        Self {
            ground_y,
            in_contact: false,
        }
    }

    pub fn ground_y(&self) -> f64 {
        self.ground_y
    }
}

impl CollisionSource for GroundContactDetector {
    fn poll(&mut self, state: &DroneState, feet: &FootGeometry) -> Vec<ContactEvent> {
        let lowest = feet
            .world_positions(state)
            .iter()
            .map(|foot| foot.y)
            .fold(f64::INFINITY, f64::min);
        let touching = lowest <= self.ground_y;

        match (self.in_contact, touching) {
            (false, true) => {
                self.in_contact = true;
                vec![ContactEvent::Enter]
            }
            (true, false) => {
                self.in_contact = false;
                vec![ContactEvent::Exit]
            }
            _ => Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.in_contact = false;
    }
}
