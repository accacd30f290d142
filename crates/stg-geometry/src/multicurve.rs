//! A sequence of connected segments treated as one parametric curve.

use serde::{Deserialize, Serialize};
use stg_core::{Result, StairError, Tolerance};
use stg_math::{Point3, Vector3};

use crate::curve::Curve;
use crate::segment::Segment;

/// An ordered set of connected segments exposed as a single curve over
/// the cumulative arc-length parameter `[0, length]`.
///
/// Out-of-range parameters are clamped. A parameter exactly at a joint
/// resolves to the NEXT segment (the lookup takes the first segment
/// whose cumulative length strictly exceeds the parameter), which is
/// what fixes the tangent at shared endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiCurve {
    segments: Vec<Segment>,
    lengths: Vec<f64>,
    cum_len: Vec<f64>,
    total: f64,
}

impl MultiCurve {
    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(StairError::EmptyPath(
                "multi-curve requires at least one segment".into(),
            ));
        }
        let lengths: Vec<f64> = segments.iter().map(|s| s.length()).collect();
        let mut cum_len = Vec::with_capacity(lengths.len());
        let mut total = 0.0;
        for l in &lengths {
            total += l;
            cum_len.push(total);
        }
        Ok(Self {
            segments,
            lengths,
            cum_len,
            total,
        })
    }

    pub fn first_parameter(&self) -> f64 {
        0.0
    }

    pub fn last_parameter(&self) -> f64 {
        self.total
    }

    pub fn length(&self) -> f64 {
        self.total
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn start_point(&self) -> Point3 {
        self.segments[0].start()
    }

    pub fn end_point(&self) -> Point3 {
        self.segments.last().expect("non-empty multi-curve").end()
    }

    /// Map a global parameter into `(segment index, local parameter)`.
    fn map_to(&self, u: f64) -> (usize, f64) {
        let u = u.clamp(0.0, self.total);
        let i = self
            .cum_len
            .iter()
            .position(|&l| l > u)
            .unwrap_or(self.segments.len() - 1);
        // Fraction within the segment, in [0, 1]: u lies at most one
        // segment length below cum_len[i].
        let frac = if self.lengths[i] > 0.0 {
            1.0 + (u - self.cum_len[i]) / self.lengths[i]
        } else {
            1.0
        };
        let (fp, lp) = self.segments[i].domain();
        (i, fp + frac * (lp - fp))
    }

    pub fn value_at(&self, u: f64) -> Point3 {
        let (i, local) = self.map_to(u);
        self.segments[i].point_at(local)
    }

    pub fn tangent_at(&self, u: f64) -> Vector3 {
        let (i, local) = self.map_to(u);
        self.segments[i].tangent_at(local)
    }

    /// The same path traversed end-to-start.
    pub fn reversed(&self) -> Self {
        let segments: Vec<Segment> =
            self.segments.iter().rev().map(|s| s.reversed()).collect();
        Self::new(segments).expect("reversal keeps segment count")
    }
}

/// Order an unordered segment set into a connected chain, flipping
/// segments whose direction does not match the traversal.
///
/// Endpoints are matched within `tol.linear`. Fails when no connected
/// ordering exists.
pub fn sort_connected(segments: Vec<Segment>, tol: Tolerance) -> Result<Vec<Segment>> {
    if segments.is_empty() {
        return Err(StairError::EmptyPath("no segments to sort".into()));
    }

    let joins = |a: Point3, b: Point3| (a - b).length() < tol.linear;

    let mut pool: Vec<Option<Segment>> = segments.into_iter().map(Some).collect();
    let mut chain = std::collections::VecDeque::new();
    chain.push_back(pool[0].take().expect("first segment present"));
    let mut remaining = pool.len() - 1;

    while remaining > 0 {
        let head = chain.front().expect("non-empty chain").start();
        let tail = chain.back().expect("non-empty chain").end();
        let mut attached = false;

        for slot in pool.iter_mut() {
            let Some(seg) = slot else { continue };
            if joins(seg.start(), tail) {
                chain.push_back(slot.take().expect("checked above"));
            } else if joins(seg.end(), tail) {
                let seg = slot.take().expect("checked above");
                chain.push_back(seg.reversed());
            } else if joins(seg.end(), head) {
                chain.push_front(slot.take().expect("checked above"));
            } else if joins(seg.start(), head) {
                let seg = slot.take().expect("checked above");
                chain.push_front(seg.reversed());
            } else {
                continue;
            }
            attached = true;
            remaining -= 1;
            break;
        }

        if !attached {
            return Err(StairError::InvalidBaseShape(format!(
                "{remaining} segment(s) do not connect to the path"
            )));
        }
    }

    Ok(chain.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Arc, Polyline};
    use std::f64::consts::PI;
    use stg_math::{dvec3, DVec3};

    fn l_path() -> MultiCurve {
        MultiCurve::new(vec![
            Segment::Polyline(Polyline::line(DVec3::ZERO, dvec3(2.0, 0.0, 0.0))),
            Segment::Polyline(Polyline::line(dvec3(2.0, 0.0, 0.0), dvec3(2.0, 3.0, 0.0))),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            MultiCurve::new(vec![]),
            Err(StairError::EmptyPath(_))
        ));
    }

    #[test]
    fn test_boundary_exactness() {
        let mc = l_path();
        assert!((mc.value_at(0.0) - mc.start_point()).length() < 1e-12);
        assert!((mc.value_at(mc.length()) - mc.end_point()).length() < 1e-12);
        assert!((mc.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_joint_resolves_to_next_segment() {
        let mc = l_path();
        // Parameter exactly at the joint: tangent comes from segment 2
        let t = mc.tangent_at(2.0);
        assert!((t - dvec3(0.0, 1.0, 0.0)).length() < 1e-12);
        // Just before the joint it still belongs to segment 1
        let t = mc.tangent_at(2.0 - 1e-9);
        assert!((t - dvec3(1.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_clamping() {
        let mc = l_path();
        assert!((mc.value_at(-1.0) - mc.start_point()).length() < 1e-12);
        assert!((mc.value_at(100.0) - mc.end_point()).length() < 1e-12);
    }

    #[test]
    fn test_mixed_line_and_arc() {
        // Straight run, then a quarter turn of radius 1 around (2, 1, 0).
        // With a +Z axis angle 0 points along +Y, so the arc runs from
        // (3, 1, 0) at -PI/2 to (2, 2, 0) at 0.
        let arc = Arc::new(dvec3(2.0, 1.0, 0.0), DVec3::Z, 1.0, -PI / 2.0, 0.0).unwrap();
        let line_end = arc.start();
        assert!((line_end - dvec3(3.0, 1.0, 0.0)).length() < 1e-10);
        let mc = MultiCurve::new(vec![
            Segment::Polyline(Polyline::line(DVec3::ZERO, line_end)),
            Segment::Arc(arc),
        ])
        .unwrap();
        let p = mc.value_at(mc.length());
        assert!((p - dvec3(2.0, 2.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_reversed_traversal() {
        let mc = l_path();
        let rev = mc.reversed();
        assert!((rev.start_point() - mc.end_point()).length() < 1e-12);
        assert!((rev.end_point() - mc.start_point()).length() < 1e-12);
        let p = rev.value_at(1.5);
        let q = mc.value_at(mc.length() - 1.5);
        assert!((p - q).length() < 1e-10);
    }

    #[test]
    fn test_sort_connected_reorders_and_flips() {
        let a = Segment::Polyline(Polyline::line(dvec3(2.0, 0.0, 0.0), dvec3(2.0, 3.0, 0.0)));
        // Given backwards on purpose
        let b = Segment::Polyline(Polyline::line(dvec3(2.0, 0.0, 0.0), DVec3::ZERO));
        let sorted = sort_connected(vec![a, b], Tolerance::loose()).unwrap();
        assert_eq!(sorted.len(), 2);
        for pair in sorted.windows(2) {
            assert!((pair[0].end() - pair[1].start()).length() < 1e-6);
        }
    }

    #[test]
    fn test_sort_connected_rejects_disconnected() {
        let a = Segment::Polyline(Polyline::line(DVec3::ZERO, dvec3(1.0, 0.0, 0.0)));
        let b = Segment::Polyline(Polyline::line(dvec3(5.0, 5.0, 0.0), dvec3(6.0, 5.0, 0.0)));
        assert!(sort_connected(vec![a, b], Tolerance::loose()).is_err());
    }
}
