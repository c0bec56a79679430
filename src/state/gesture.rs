// Single-contact vertical drag tracking for the canvas surface.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Active {
        last_touch_y: f64,
    },
}

impl GestureState {
    #[cfg(test)]
    pub(crate) fn last_touch_y(&self) -> Option<f64> {
        match *self {
            Self::Idle => None,
            Self::Active { last_touch_y } => Some(last_touch_y),
        }
    }

    /// A new contact replaces whatever a lost previous contact left behind.
    pub fn start(&mut self, contact_y: f64) {
        *self = Self::Active {
            last_touch_y: contact_y,
        };
    }

    /// Returns the vertical scroll to issue for this move, if any.
    /// Positive means the finger moved up and content should scroll down.
    /// The reference point only moves when a scroll is returned.
    pub fn track_move(&mut self, contact_y: f64, threshold: f64) -> Option<f64> {
        let Self::Active { last_touch_y } = self else {
            return None;
        };
        let delta = *last_touch_y - contact_y;
        if delta.abs() > threshold {
            *last_touch_y = contact_y;
            Some(delta)
        } else {
            None
        }
    }

    pub fn end(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let g = GestureState::default();
        assert_eq!(g, GestureState::Idle);
        assert_eq!(g.last_touch_y(), None);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut g = GestureState::Idle;
        assert_eq!(g.track_move(50.0, 0.0), None);
        assert_eq!(g, GestureState::Idle);
    }

    #[test]
    fn upward_drag_yields_positive_delta_and_rebases() {
        let mut g = GestureState::Idle;
        g.start(100.0);
        assert_eq!(g.track_move(80.0, 0.0), Some(20.0));
        assert_eq!(g.last_touch_y(), Some(80.0));
        assert_eq!(g.track_move(90.0, 0.0), Some(-10.0));
        assert_eq!(g.last_touch_y(), Some(90.0));
    }

    #[test]
    fn zero_delta_keeps_reference_point() {
        let mut g = GestureState::Idle;
        g.start(100.0);
        assert_eq!(g.track_move(100.0, 0.0), None);
        assert_eq!(g.last_touch_y(), Some(100.0));
    }

    #[test]
    fn sub_threshold_moves_accumulate_against_the_old_reference() {
        let mut g = GestureState::Idle;
        g.start(100.0);
        assert_eq!(g.track_move(97.0, 4.0), None);
        assert_eq!(g.last_touch_y(), Some(100.0));
        assert_eq!(g.track_move(95.0, 4.0), Some(5.0));
        assert_eq!(g.last_touch_y(), Some(95.0));
    }

    #[test]
    fn start_overwrites_stale_contact() {
        let mut g = GestureState::Idle;
        g.start(10.0);
        g.start(300.0);
        assert_eq!(g.last_touch_y(), Some(300.0));
    }

    #[test]
    fn end_is_idempotent() {
        let mut g = GestureState::Idle;
        g.end();
        assert_eq!(g, GestureState::Idle);
        g.start(5.0);
        g.end();
        g.end();
        assert_eq!(g, GestureState::Idle);
    }
}
