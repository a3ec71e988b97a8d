use super::constants::{ROUND_SEGMENTS, SPHERE_RINGS, SPHERE_SEGMENTS};
use super::scene::{Primitive, SceneGraph};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Vertex layout shared with `scene.wgsl`. `node` indexes the per-node
/// world matrix array.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub node: u32,
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn vertex(&mut self, p: Vec3, n: Vec3, color: [f32; 3], node: u32) -> u32 {
        let i = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: p.to_array(),
            normal: n.normalize_or_zero().to_array(),
            color,
            node,
        });
        i
    }

    /// Stitch a `rows` x `cols` vertex grid (row-major, starting at `base`)
    /// into triangles.
    fn grid(&mut self, base: u32, rows: u32, cols: u32) {
        for r in 0..rows - 1 {
            for c in 0..cols - 1 {
                let a = base + r * cols + c;
                let b = a + cols;
                self.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }
    }

    /// Append the tessellation of `primitive` in node-local space.
    pub fn push_primitive(&mut self, primitive: &Primitive, color: [f32; 3], node: u32) {
        match *primitive {
            Primitive::Sphere { radius } => self.sphere(radius, 0.0, color, node),
            Primitive::Capsule { radius, length } => self.sphere(radius, length, color, node),
            Primitive::Cuboid { size } => self.cuboid(size * 0.5, color, node),
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => self.cylinder(radius_top, radius_bottom, height, color, node),
            Primitive::Torus { radius, tube, arc } => self.torus(radius, tube, arc, color, node),
        }
    }

    // A capsule is a sphere whose upper and lower hemispheres are pulled
    // apart by `stretch` along Y.
    fn sphere(&mut self, radius: f32, stretch: f32, color: [f32; 3], node: u32) {
        let cols = SPHERE_SEGMENTS + 1;
        let rows = SPHERE_RINGS + 1;
        let base = self.vertices.len() as u32;
        for r in 0..rows {
            let v = r as f32 / SPHERE_RINGS as f32;
            let theta = v * PI;
            let lift = if v < 0.5 { stretch * 0.5 } else { -stretch * 0.5 };
            for c in 0..cols {
                let phi = c as f32 / SPHERE_SEGMENTS as f32 * TAU;
                let n = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
                self.vertex(n * radius + Vec3::Y * lift, n, color, node);
            }
        }
        self.grid(base, rows, cols);
    }

    fn cuboid(&mut self, h: Vec3, color: [f32; 3], node: u32) {
        let faces: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::Z, Vec3::NEG_X),
            (Vec3::Z, Vec3::Y, Vec3::NEG_X),
            (Vec3::NEG_Z, Vec3::Y, Vec3::X),
        ];
        for (n, up, side) in faces {
            let center = n * h;
            let u = up * h;
            let s = side * h;
            let base = self.vertices.len() as u32;
            for (du, ds) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
                self.vertex(center + u * du + s * ds, n, color, node);
            }
            self.grid(base, 2, 2);
        }
    }

    fn cylinder(&mut self, rt: f32, rb: f32, height: f32, color: [f32; 3], node: u32) {
        let cols = ROUND_SEGMENTS + 1;
        let hh = height * 0.5;
        let slope = (rb - rt) / height.max(f32::EPSILON);
        let base = self.vertices.len() as u32;
        for (y, r) in [(hh, rt), (-hh, rb)] {
            for c in 0..cols {
                let a = c as f32 / ROUND_SEGMENTS as f32 * TAU;
                let (sin, cos) = a.sin_cos();
                let n = Vec3::new(sin, slope, cos);
                self.vertex(Vec3::new(r * sin, y, r * cos), n, color, node);
            }
        }
        self.grid(base, 2, cols);
        for (y, r, n) in [(hh, rt, Vec3::Y), (-hh, rb, Vec3::NEG_Y)] {
            if r <= 0.0 {
                continue;
            }
            let center = self.vertex(Vec3::new(0.0, y, 0.0), n, color, node);
            let ring = self.vertices.len() as u32;
            for c in 0..cols {
                let a = c as f32 / ROUND_SEGMENTS as f32 * TAU;
                self.vertex(Vec3::new(r * a.sin(), y, r * a.cos()), n, color, node);
            }
            for c in 0..ROUND_SEGMENTS {
                if n.y > 0.0 {
                    self.indices.extend_from_slice(&[center, ring + c, ring + c + 1]);
                } else {
                    self.indices.extend_from_slice(&[center, ring + c + 1, ring + c]);
                }
            }
        }
    }

    fn torus(&mut self, radius: f32, tube: f32, arc: f32, color: [f32; 3], node: u32) {
        let tube_cols = ROUND_SEGMENTS / 2 + 1;
        let rows = ROUND_SEGMENTS + 1;
        let base = self.vertices.len() as u32;
        for r in 0..rows {
            let u = r as f32 / ROUND_SEGMENTS as f32 * arc;
            let ring_center = Vec3::new(u.cos() * radius, u.sin() * radius, 0.0);
            for c in 0..tube_cols {
                let v = c as f32 / (tube_cols - 1) as f32 * TAU;
                let n = Vec3::new(v.cos() * u.cos(), v.cos() * u.sin(), v.sin());
                self.vertex(ring_center + n * tube, n, color, node);
            }
        }
        self.grid(base, rows, tube_cols);
    }
}

/// Bake every drawable node of `graph` into one mesh.
pub fn bake(graph: &SceneGraph) -> MeshData {
    let mut mesh = MeshData::default();
    for (i, node) in graph.nodes().iter().enumerate() {
        if let Some((primitive, color)) = &node.shape {
            mesh.push_primitive(primitive, *color, i as u32);
        }
    }
    mesh
}
