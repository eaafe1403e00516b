//! Attitude control laws.

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Feedback law selecting the raw (unsaturated) torque command.
///
/// The law set is closed: callers that receive law names as strings go
/// through [`ControlLaw::from_tag`], and an unrecognized name fails there
/// instead of propagating into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law")]
pub enum ControlLaw {
    /// Proportional-derivative feedback: `u = kp*theta + kd*omega`.
    ///
    /// Stabilizing gains are negative with the usual sign conventions
    /// (torque opposing position and rate).
    #[serde(rename = "PD")]
    Pd {
        /// Proportional gain on angular position (N*m/rad)
        kp: f64,
        /// Derivative gain on angular rate (N*m*s/rad)
        kd: f64,
    },
    /// Switching law: full limit torque directed against the position error.
    #[serde(rename = "bang_bang")]
    BangBang,
}

impl ControlLaw {
    /// Build a law from its string tag, the form external callers supply.
    ///
    /// The gains are read only by laws that use them.
    ///
    /// # Errors
    /// Unrecognized tags fail with [`ControlError::UnknownLaw`].
    pub fn from_tag(tag: &str, kp: f64, kd: f64) -> ControlResult<Self> {
        match tag {
            "PD" => Ok(Self::Pd { kp, kd }),
            "bang_bang" => Ok(Self::BangBang),
            other => Err(ControlError::UnknownLaw {
                name: other.to_string(),
            }),
        }
    }

    /// Tag string used at serialization boundaries.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Pd { .. } => "PD",
            Self::BangBang => "bang_bang",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_accepts_known_laws() {
        let pd = ControlLaw::from_tag("PD", -1.0, -2.0).unwrap();
        assert_eq!(pd, ControlLaw::Pd { kp: -1.0, kd: -2.0 });

        let bb = ControlLaw::from_tag("bang_bang", 0.0, 0.0).unwrap();
        assert_eq!(bb, ControlLaw::BangBang);
    }

    #[test]
    fn from_tag_rejects_unknown_law() {
        let err = ControlLaw::from_tag("PID", 1.0, 0.1).unwrap_err();
        match err {
            ControlError::UnknownLaw { name } => assert_eq!(name, "PID"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serde_uses_external_tag_vocabulary() {
        let pd = ControlLaw::Pd { kp: -1.0, kd: -1.0 };
        let json = serde_json::to_string(&pd).unwrap();
        assert!(json.contains("\"PD\""));

        let bb: ControlLaw = serde_json::from_str(r#"{"law":"bang_bang"}"#).unwrap();
        assert_eq!(bb, ControlLaw::BangBang);
    }

    #[test]
    fn tag_round_trips() {
        let laws = [ControlLaw::Pd { kp: -1.0, kd: -1.0 }, ControlLaw::BangBang];
        for law in laws {
            let rebuilt = ControlLaw::from_tag(law.tag(), -1.0, -1.0).unwrap();
            assert_eq!(rebuilt.tag(), law.tag());
        }
    }
}
