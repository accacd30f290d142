//! Stair generation parameters.

use serde::{Deserialize, Serialize};
use stg_core::{Result, StairError};

/// Which side of the stair carries a handrail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RailType {
    #[default]
    None,
    Left,
    Right,
    Both,
}

/// Parameters driving a stair recompute.
///
/// All lengths are in millimetres. `elevation` is the total height climbed
/// along the path, `n_risers` the number of vertical faces cut into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StairConfig {
    /// Number of risers along the path.
    pub n_risers: u32,
    /// Thickness of riser and tread slabs.
    pub tread_thickness: f64,
    /// Nominal width of the stair, centred on the path.
    pub tread_width: f64,
    /// Horizontal overhang of each tread past its riser.
    pub tread_nosing: f64,
    pub rail_type: RailType,
    /// Handrail tube diameter.
    pub rail_diameter: f64,
    /// Total height climbed from path start to path end.
    pub elevation: f64,
    /// Walk the path from its far end instead.
    pub path_reversed: bool,
    /// Sweep a support beam under the path.
    pub has_support: bool,
}

impl Default for StairConfig {
    fn default() -> Self {
        Self {
            n_risers: 10,
            tread_thickness: 30.0,
            tread_width: 3000.0,
            tread_nosing: 30.0,
            rail_type: RailType::None,
            rail_diameter: 40.0,
            elevation: 2000.0,
            path_reversed: false,
            has_support: false,
        }
    }
}

impl StairConfig {
    /// Rejects parameter sets that cannot produce a solid.
    pub fn validate(&self) -> Result<()> {
        if self.n_risers == 0 {
            return Err(StairError::InvalidParameter(
                "n_risers must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("tread_thickness", self.tread_thickness),
            ("tread_width", self.tread_width),
            ("rail_diameter", self.rail_diameter),
            ("elevation", self.elevation),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StairError::InvalidParameter(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.tread_nosing.is_finite() || self.tread_nosing < 0.0 {
            return Err(StairError::InvalidParameter(format!(
                "tread_nosing must be non-negative, got {}",
                self.tread_nosing
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        StairConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_risers_rejected() {
        let cfg = StairConfig {
            n_risers: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(StairError::InvalidParameter(_))
        ));
    }

    #[test]
    fn negative_width_rejected() {
        let cfg = StairConfig {
            tread_width: -1.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn json_round_trip() {
        let cfg = StairConfig {
            n_risers: 14,
            rail_type: RailType::Both,
            has_support: true,
            ..Default::default()
        };
        let text = serde_json::to_string(&cfg).unwrap();
        let back: StairConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: StairConfig = serde_json::from_str(r#"{"n_risers": 7}"#).unwrap();
        assert_eq!(cfg.n_risers, 7);
        assert_eq!(cfg.elevation, 2000.0);
    }
}
