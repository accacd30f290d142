//! Closed union of the curve kinds a stair path may contain.

use serde::{Deserialize, Serialize};
use stg_math::{Point3, Vector3};

use crate::curve::{Arc, Curve, Helix, Polyline};

/// One segment of a stair path.
///
/// Flat base paths are built from `Polyline` and `Arc`; the skewing
/// stage turns arcs into `Helix` segments. Adding a curve kind here is a
/// compile-time-checked extension point: every consumer matches
/// exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Segment {
    Polyline(Polyline),
    Arc(Arc),
    Helix(Helix),
}

impl Segment {
    pub fn start(&self) -> Point3 {
        match self {
            Segment::Polyline(p) => p.start(),
            Segment::Arc(a) => a.start(),
            Segment::Helix(h) => h.start(),
        }
    }

    pub fn end(&self) -> Point3 {
        match self {
            Segment::Polyline(p) => p.end(),
            Segment::Arc(a) => a.end(),
            Segment::Helix(h) => h.end(),
        }
    }

    pub fn reversed(&self) -> Segment {
        match self {
            Segment::Polyline(p) => Segment::Polyline(p.reversed()),
            Segment::Arc(a) => Segment::Arc(a.reversed()),
            Segment::Helix(h) => Segment::Helix(h.reversed()),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Segment::Polyline(_) => "polyline",
            Segment::Arc(_) => "arc",
            Segment::Helix(_) => "helix",
        }
    }
}

impl Curve for Segment {
    fn point_at(&self, t: f64) -> Point3 {
        match self {
            Segment::Polyline(p) => p.point_at(t),
            Segment::Arc(a) => a.point_at(t),
            Segment::Helix(h) => h.point_at(t),
        }
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        match self {
            Segment::Polyline(p) => p.tangent_at(t),
            Segment::Arc(a) => a.tangent_at(t),
            Segment::Helix(h) => h.tangent_at(t),
        }
    }

    fn domain(&self) -> (f64, f64) {
        match self {
            Segment::Polyline(p) => p.domain(),
            Segment::Arc(a) => a.domain(),
            Segment::Helix(h) => h.domain(),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Segment::Polyline(p) => p.length(),
            Segment::Arc(a) => a.length(),
            Segment::Helix(h) => h.length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stg_math::{dvec3, DVec3};

    #[test]
    fn test_segment_delegates() {
        let seg = Segment::Polyline(Polyline::line(DVec3::ZERO, dvec3(3.0, 4.0, 0.0)));
        assert!((seg.length() - 5.0).abs() < 1e-12);
        assert!((seg.start() - DVec3::ZERO).length() < 1e-12);
        assert!((seg.end() - dvec3(3.0, 4.0, 0.0)).length() < 1e-12);
        assert_eq!(seg.kind_name(), "polyline");
    }

    #[test]
    fn test_reversed_roundtrip() {
        let seg = Segment::Arc(
            Arc::new(DVec3::ZERO, DVec3::Z, 2.0, 0.0, 1.0).unwrap(),
        );
        let back = seg.reversed().reversed();
        assert!((back.start() - seg.start()).length() < 1e-10);
        assert!((back.end() - seg.end()).length() < 1e-10);
    }
}
