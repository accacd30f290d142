use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use stg_core::error::{Result, StairError};
use stg_core::traits::{BoundingBox, Validate};
use stg_math::{Aabb3, Point3, Vector3};

/// One closed, oriented set of polygon faces over a shared vertex pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shell {
    pub vertices: Vec<Point3>,
    pub faces: Vec<Vec<u32>>,
}

impl Shell {
    pub fn new(vertices: Vec<Point3>, faces: Vec<Vec<u32>>) -> Self {
        Self { vertices, faces }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn face_points(&self, face: usize) -> Vec<Point3> {
        self.faces[face]
            .iter()
            .map(|&i| self.vertices[i as usize])
            .collect()
    }

    pub fn translated(&self, offset: Vector3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| v + offset).collect(),
            faces: self.faces.clone(),
        }
    }

    pub fn aabb(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.vertices)
    }
}

impl Validate for Shell {
    fn validate(&self) -> Result<()> {
        // 1. Index bounds and minimum face size
        for (fi, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(StairError::Topology(format!(
                    "face {} has fewer than 3 vertices ({})",
                    fi,
                    face.len()
                )));
            }
            for &v in face {
                if v as usize >= self.vertices.len() {
                    return Err(StairError::Topology(format!(
                        "face {} references vertex {} out of {}",
                        fi,
                        v,
                        self.vertices.len()
                    )));
                }
            }
        }

        // 2. Closedness: every directed edge appears exactly once, paired
        //    with its reverse on the neighbouring face
        let mut edges: HashMap<(u32, u32), u32> = HashMap::new();
        for face in &self.faces {
            for i in 0..face.len() {
                let a = face[i];
                let b = face[(i + 1) % face.len()];
                if a == b {
                    return Err(StairError::Topology(format!(
                        "degenerate edge at vertex {a}"
                    )));
                }
                *edges.entry((a, b)).or_insert(0) += 1;
            }
        }
        for (&(a, b), &count) in &edges {
            if count != 1 {
                return Err(StairError::Topology(format!(
                    "directed edge {a}->{b} used {count} times (non-manifold)"
                )));
            }
            if edges.get(&(b, a)) != Some(&1) {
                return Err(StairError::Topology(format!(
                    "edge {a}->{b} has no mate on a neighbouring face (open shell)"
                )));
            }
        }

        Ok(())
    }
}

/// A solid bounded by one or more closed shells.
///
/// The reference kernel's fuse keeps the operands' shells side by side
/// (a compound); extent and bounding queries treat them as one body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FacetSolid {
    pub shells: Vec<Shell>,
}

impl FacetSolid {
    pub fn empty() -> Self {
        Self { shells: Vec::new() }
    }

    pub fn from_shell(shell: Shell) -> Self {
        Self {
            shells: vec![shell],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shells.iter().all(|s| s.is_empty())
    }

    pub fn shell_count(&self) -> usize {
        self.shells.len()
    }

    /// Compound merge: the shells of both operands side by side.
    pub fn merged(mut self, other: FacetSolid) -> FacetSolid {
        self.shells.extend(other.shells);
        self
    }

    pub fn translated(&self, offset: Vector3) -> Self {
        Self {
            shells: self.shells.iter().map(|s| s.translated(offset)).collect(),
        }
    }

    pub fn aabb(&self) -> Option<Aabb3> {
        let mut boxes = self.shells.iter().filter_map(|s| s.aabb());
        let first = boxes.next()?;
        Some(boxes.fold(first, |acc, b| acc.merge(&b)))
    }
}

impl Validate for FacetSolid {
    fn validate(&self) -> Result<()> {
        for shell in &self.shells {
            shell.validate()?;
        }
        Ok(())
    }
}

impl BoundingBox for FacetSolid {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        match self.aabb() {
            Some(b) => (b.min, b.max),
            None => (Point3::ZERO, Point3::ZERO),
        }
    }
}
