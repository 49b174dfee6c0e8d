//! Balloon flight model
//!
//! Heating lifts quickly, cooling sinks slowly. Both directions are clamped,
//! and burning fuel costs more the higher the balloon flies.

use super::state::Balloon;
use crate::consts::*;

/// Advance the balloon by one tick
pub fn integrate(balloon: Balloon, heating: bool) -> Balloon {
    let mut next = balloon;

    if heating && next.fuel > 0.0 {
        next.vertical_velocity =
            (next.vertical_velocity - HEATING_ACCEL).max(MIN_VERTICAL_VELOCITY);
        next.fuel -= FUEL_COST_PER_ALTITUDE * next.altitude();
    } else {
        next.vertical_velocity =
            (next.vertical_velocity + COOLING_ACCEL).min(MAX_VERTICAL_VELOCITY);
    }

    next.y += next.vertical_velocity;
    if next.y > 0.0 {
        // Landed
        next.y = 0.0;
    }
    if next.y < 0.0 {
        // Only drifts forward while airborne
        next.x += next.horizontal_velocity;
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_resting_on_ground_stays_put() {
        let balloon = Balloon::default();
        assert_eq!(balloon.vertical_velocity, 5.0);

        let next = integrate(balloon, false);
        assert_eq!(next.vertical_velocity, 5.0);
        assert_eq!(next.y, 0.0);
        assert_eq!(next.x, 0.0);
        assert_eq!(next.fuel, FUEL_MAX);
    }

    #[test]
    fn test_heating_on_ground_costs_nothing() {
        let next = integrate(Balloon::default(), true);
        assert!(approx(next.vertical_velocity, 4.6));
        assert_eq!(next.fuel, FUEL_MAX);
        // Still pushing down into the ground
        assert_eq!(next.y, 0.0);
    }

    #[test]
    fn test_fuel_cost_scales_with_altitude() {
        let low = Balloon {
            y: -100.0,
            ..Balloon::default()
        };
        let high = Balloon {
            y: -300.0,
            ..Balloon::default()
        };
        let low_cost = FUEL_MAX - integrate(low, true).fuel;
        let high_cost = FUEL_MAX - integrate(high, true).fuel;
        assert!(approx(low_cost, 0.01));
        assert!(approx(high_cost, 0.03));
    }

    #[test]
    fn test_rise_rate_clamped() {
        let balloon = Balloon {
            y: -200.0,
            vertical_velocity: -6.8,
            ..Balloon::default()
        };
        let next = integrate(balloon, true);
        assert_eq!(next.vertical_velocity, MIN_VERTICAL_VELOCITY);
        let next = integrate(next, true);
        assert_eq!(next.vertical_velocity, MIN_VERTICAL_VELOCITY);
    }

    #[test]
    fn test_descent_rate_clamped() {
        let balloon = Balloon {
            y: -200.0,
            vertical_velocity: 4.9,
            ..Balloon::default()
        };
        let next = integrate(balloon, false);
        assert_eq!(next.vertical_velocity, MAX_VERTICAL_VELOCITY);
    }

    #[test]
    fn test_empty_tank_behaves_like_cooling() {
        let balloon = Balloon {
            y: -50.0,
            vertical_velocity: -2.0,
            fuel: 0.0,
            ..Balloon::default()
        };
        let next = integrate(balloon, true);
        assert!(approx(next.vertical_velocity, -1.8));
        assert_eq!(next.fuel, 0.0);
    }

    #[test]
    fn test_moves_forward_only_when_airborne() {
        let balloon = Balloon {
            y: -10.0,
            vertical_velocity: -1.0,
            ..Balloon::default()
        };
        let next = integrate(balloon, false);
        assert!(next.y < 0.0);
        assert_eq!(next.x, BALLOON_HORIZONTAL_VELOCITY);

        // Touches down this tick: no forward motion
        let landing = Balloon {
            y: -1.0,
            vertical_velocity: 3.0,
            ..Balloon::default()
        };
        let next = integrate(landing, false);
        assert_eq!(next.y, 0.0);
        assert_eq!(next.x, 0.0);
    }

    #[test]
    fn test_deterministic() {
        let balloon = Balloon {
            x: 120.0,
            y: -42.0,
            vertical_velocity: -3.3,
            fuel: 61.0,
            ..Balloon::default()
        };
        assert_eq!(integrate(balloon, true), integrate(balloon, true));
        assert_eq!(integrate(balloon, false), integrate(balloon, false));
    }
}
