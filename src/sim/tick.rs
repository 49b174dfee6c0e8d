//! Per-frame simulation tick
//!
//! Order within a tick: physics, window recycling, end-of-run check.

use super::collision::hit_detection;
use super::physics::integrate;
use super::state::{EndReason, Session, SessionPhase};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session has not started, nothing simulated
    Idle,
    /// Simulated one tick, keep scheduling frames
    Continue,
    /// Simulated one tick and the run ended on it
    Ended(EndReason),
    /// Session already ended, nothing simulated
    Halted,
}

/// Advance the session by one fixed tick
pub fn tick(session: &mut Session) -> TickOutcome {
    match session.phase {
        SessionPhase::Idle => return TickOutcome::Idle,
        SessionPhase::Ended => return TickOutcome::Halted,
        SessionPhase::Running => {}
    }

    session.ticks += 1;
    session.balloon = integrate(session.balloon, session.heating);

    // If a tree scrolled out of the picture, replace it with a new one
    session.recycle_windows();

    let balloon = &session.balloon;
    let reason = if hit_detection(balloon, &session.obstacles) {
        Some(EndReason::Collision)
    } else if balloon.is_out_of_fuel() && balloon.is_landed() {
        Some(EndReason::OutOfFuel)
    } else {
        None
    };

    match reason {
        Some(reason) => {
            session.end(reason);
            TickOutcome::Ended(reason)
        }
        None => TickOutcome::Continue,
    }
}
