//! Kinematic state of the controlled axis.

/// Angular state of a single rigid axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisState {
    /// Angular position (rad)
    pub theta: f64,
    /// Angular rate (rad/s)
    pub omega: f64,
}

impl AxisState {
    pub fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega }
    }
}
