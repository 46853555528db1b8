//! Mesh data and procedural constructors.
//!
//! Meshes carry plain vertex and index data; GPU upload is the render
//! sink's business. Geometry is generated in code (mesh file parsing is
//! out of scope for this renderer).

use glam::Vec3;

/// A mesh containing vertex and index data.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Triangle list indices into the vertex arrays.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Flat square grid in the XZ plane, centered at the origin, facing +Y.
    ///
    /// `subdivisions` is the number of quads per side (minimum 1).
    pub fn plane(size: f32, subdivisions: u32) -> Self {
        let quads = subdivisions.max(1);
        let side = quads + 1;
        let step = size / quads as f32;
        let half = size / 2.0;

        let mut positions = Vec::with_capacity((side * side) as usize);
        let mut normals = Vec::with_capacity((side * side) as usize);
        for iz in 0..side {
            for ix in 0..side {
                positions.push(Vec3::new(
                    ix as f32 * step - half,
                    0.0,
                    iz as f32 * step - half,
                ));
                normals.push(Vec3::Y);
            }
        }

        let mut indices = Vec::with_capacity((quads * quads * 6) as usize);
        for iz in 0..quads {
            for ix in 0..quads {
                let a = iz * side + ix;
                let b = a + 1;
                let c = a + side;
                let d = c + 1;
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Axis-aligned cuboid centered at the origin, with per-face normals.
    pub fn cuboid(half_extents: Vec3) -> Self {
        // per face: outward normal and two in-plane axes with u x v = n
        let faces = [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::Y, Vec3::X),
        ];

        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (n, u, v) in faces {
            let base = positions.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                positions.push((n + u * su + v * sv) * half_extents);
                normals.push(n);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Open cylinder around the Y axis, centered at the origin.
    ///
    /// `segments` is the number of quads around the circumference
    /// (minimum 3).
    pub fn cylinder(radius: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let half = height / 2.0;

        let mut positions = Vec::with_capacity((segments as usize + 1) * 2);
        let mut normals = Vec::with_capacity((segments as usize + 1) * 2);
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            let (sin, cos) = angle.sin_cos();
            let normal = Vec3::new(cos, 0.0, sin);
            positions.push(Vec3::new(cos * radius, -half, sin * radius));
            positions.push(Vec3::new(cos * radius, half, sin * radius));
            normals.push(normal);
            normals.push(normal);
        }

        let mut indices = Vec::with_capacity(segments as usize * 6);
        for i in 0..segments {
            let a = i * 2; // bottom of this ring pair
            let b = a + 1; // top
            let c = a + 2; // bottom of the next pair
            let d = a + 3; // top of the next pair
            indices.extend_from_slice(&[a, b, d, a, d, c]);
        }

        Self {
            positions,
            normals,
            indices,
        }
    }
}
