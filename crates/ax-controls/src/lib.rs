//! Control laws and torque limiting for axisim.
//!
//! This crate provides the feedback side of the closed loop: the attitude
//! control laws and the actuator saturation applied to their output.
//!
//! # Architecture
//!
//! - Laws are pure functions of the axis state ([`ControlLaw`])
//! - Saturation is a separate stage ([`TorqueLimit`])
//! - [`Controller`] composes the two into the torque command the plant sees
//!
//! Laws carry no mutable state, so one controller value can serve any number
//! of concurrent simulations.

pub mod controller;
pub mod error;
pub mod law;
pub mod saturation;

pub use controller::Controller;
pub use error::{ControlError, ControlResult};
pub use law::ControlLaw;
pub use saturation::TorqueLimit;
