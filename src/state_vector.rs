//! Cartesian state vector returned by ephemeris queries.
//!
//! Overview
//! -----------------
//! [`StateVector`] is the container returned by
//! [`Orrery::state_vector`](crate::orrery::Orrery::state_vector). It always
//! carries a **position** and **velocity** pair, plus the geometric one-way
//! **light time** from the observer to the target.
//!
//! Units
//! -----------------
//! * `position`: kilometers (km)
//! * `velocity`: kilometers per second (km/s)
//! * `light_time`: seconds (s)
//!
//! Use [`StateVector::position_au`] for the AU-scaled position the orbit
//! sampler plots, or [`StateVector::to_array`] for the flat 6-component form
//! `(x, y, z, vx, vy, vz)`.

use nalgebra::Vector3;

use crate::constants::AU;

/// Position and velocity of a body at an instant, relative to a reference
/// frame and observer.
#[derive(Debug, PartialEq, Clone)]
pub struct StateVector {
    /// Cartesian position (km)
    pub position: Vector3<f64>,
    /// Cartesian velocity (km/s)
    pub velocity: Vector3<f64>,
    /// Geometric one-way light time from observer to target (s)
    pub light_time: f64,
}

impl StateVector {
    /// Position scaled to astronomical units.
    ///
    /// Return
    /// ------
    /// * The position vector divided by [`AU`].
    #[must_use = "`.position_au()` returns a new vector; assign or use it"]
    pub fn position_au(&self) -> Vector3<f64> {
        self.position / AU
    }

    /// Flatten to the 6-component `(x, y, z, vx, vy, vz)` form, in km and km/s.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
        ]
    }
}

#[cfg(test)]
mod test_state_vector {
    use super::*;

    #[test]
    fn test_position_au() {
        let state = StateVector {
            position: Vector3::new(AU, -2.0 * AU, 0.5 * AU),
            velocity: Vector3::zeros(),
            light_time: 0.0,
        };
        assert_eq!(state.position_au(), Vector3::new(1.0, -2.0, 0.5));
    }

    #[test]
    fn test_to_array_ordering() {
        let state = StateVector {
            position: Vector3::new(1.0, 2.0, 3.0),
            velocity: Vector3::new(4.0, 5.0, 6.0),
            light_time: 0.0,
        };
        assert_eq!(state.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
