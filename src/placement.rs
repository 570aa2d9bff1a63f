/// The kind of object a tap places.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlacementKind {
    Pin,
    Ball,
}

impl PlacementKind {
    /// The name of the sub-node holding this object in the scene asset.
    ///
    /// Placed objects keep this name, which is how a swipe recognizes the ball.
    pub const fn node_name(self) -> &'static str {
        match self {
            PlacementKind::Pin => "pin",
            PlacementKind::Ball => "ball",
        }
    }
}

/// Derived view of the placement state machine. The transition is one way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementPhase {
    PlacingPins,
    PlacingBall,
}

/// Counts the pins placed during the session and decides what the next tap places.
///
/// The count starts at 1 and only grows. While it does not exceed the pin limit every tap places a
/// pin; after that every tap places a ball.
#[derive(Debug, Clone)]
pub struct PlacementCounter {
    count: usize,
    pins_placed: bool,
}

impl PlacementCounter {
    pub const DEFAULT_LIMIT: usize = 5;

    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether at least one pin was placed.
    pub fn pins_placed(&self) -> bool {
        self.pins_placed
    }

    pub fn phase(&self, limit: usize) -> PlacementPhase {
        if self.count <= limit {
            PlacementPhase::PlacingPins
        } else {
            PlacementPhase::PlacingBall
        }
    }

    /// What the next successful tap is going to place.
    pub fn next_kind(&self, limit: usize) -> PlacementKind {
        match self.phase(limit) {
            PlacementPhase::PlacingPins => PlacementKind::Pin,
            PlacementPhase::PlacingBall => PlacementKind::Ball,
        }
    }

    /// Register that an object of the given kind was placed.
    ///
    /// Only pins advance the count.
    pub fn record(&mut self, kind: PlacementKind) {
        match kind {
            PlacementKind::Pin => {
                self.count += 1;
                self.pins_placed = true;
            }
            PlacementKind::Ball => {}
        }
    }
}

impl Default for PlacementCounter {
    fn default() -> Self {
        Self {
            count: 1,
            pins_placed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_pins_then_balls() {
        let mut counter = PlacementCounter::default();
        let mut placed = Vec::new();
        for _ in 0..8 {
            let kind = counter.next_kind(PlacementCounter::DEFAULT_LIMIT);
            counter.record(kind);
            placed.push(kind);
        }
        assert_eq!(
            placed,
            [
                PlacementKind::Pin,
                PlacementKind::Pin,
                PlacementKind::Pin,
                PlacementKind::Pin,
                PlacementKind::Pin,
                PlacementKind::Ball,
                PlacementKind::Ball,
                PlacementKind::Ball,
            ]
        );
        assert_eq!(counter.count(), 6);
        assert_eq!(
            counter.phase(PlacementCounter::DEFAULT_LIMIT),
            PlacementPhase::PlacingBall
        );
    }

    #[test]
    fn fresh_counter_has_no_pins() {
        let counter = PlacementCounter::default();
        assert_eq!(counter.count(), 1);
        assert!(!counter.pins_placed());
        assert_eq!(
            counter.phase(PlacementCounter::DEFAULT_LIMIT),
            PlacementPhase::PlacingPins
        );
    }

    #[test]
    fn zero_limit_goes_straight_to_ball() {
        let counter = PlacementCounter::default();
        assert_eq!(counter.next_kind(0), PlacementKind::Ball);
    }

    #[test]
    fn raising_the_limit_resumes_pins() {
        let mut counter = PlacementCounter::default();
        counter.record(PlacementKind::Pin);
        counter.record(PlacementKind::Pin);
        assert_eq!(counter.next_kind(2), PlacementKind::Ball);
        assert_eq!(counter.next_kind(3), PlacementKind::Pin);
    }
}
