use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;

/// Index of a node inside a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Local transform: translation, XYZ Euler rotation (radians), per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, s: f32) -> Self {
        self.scale = Vec3::splat(s);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.translation)
    }
}

/// Drawable shapes, all centered on the node origin with Y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Sphere {
        radius: f32,
    },
    Cuboid {
        size: Vec3,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    /// Cylinder of `length` along Y capped by two hemispheres.
    Capsule {
        radius: f32,
        length: f32,
    },
    /// Ring in the XY plane swept through `arc` radians.
    Torus {
        radius: f32,
        tube: f32,
        arc: f32,
    },
}

impl Primitive {
    pub fn local_bounds(&self) -> Aabb {
        let half = match *self {
            Primitive::Sphere { radius } => Vec3::splat(radius),
            Primitive::Cuboid { size } => size * 0.5,
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => {
                let r = radius_top.max(radius_bottom);
                Vec3::new(r, height * 0.5, r)
            }
            Primitive::Capsule { radius, length } => {
                Vec3::new(radius, length * 0.5 + radius, radius)
            }
            Primitive::Torus { radius, tube, .. } => {
                Vec3::new(radius + tube, radius + tube, tube)
            }
        };
        Aabb::new(-half, half)
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }

    /// Bounds of this box after an affine transform (all eight corners).
    pub fn transformed(&self, m: &Mat4) -> Aabb {
        let mut out = Aabb::empty();
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            let p = m.transform_point3(corner);
            out = out.union(&Aabb::new(p, p));
        }
        out
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: &'static str,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>,
    pub local: Transform,
    pub shape: Option<(Primitive, [f32; 3])>,
}

/// Flat arena of transform nodes. A parent is always inserted before its
/// children, so a single forward pass composes every world matrix.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    by_name: FnvHashMap<&'static str, NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transform-only group node.
    pub fn add_group(&mut self, name: &'static str, parent: Option<NodeId>, local: Transform) -> NodeId {
        self.push(Node {
            name,
            parent,
            children: SmallVec::new(),
            local,
            shape: None,
        })
    }

    /// Add a drawable node with an sRGB-ish base colour.
    pub fn add_shape(
        &mut self,
        name: &'static str,
        parent: NodeId,
        local: Transform,
        primitive: Primitive,
        color: [f32; 3],
    ) -> NodeId {
        self.push(Node {
            name,
            parent: Some(parent),
            children: SmallVec::new(),
            local,
            shape: Some((primitive, color)),
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(p) = node.parent {
            debug_assert!(p.0 < id.0, "parent must precede child");
            self.nodes[p.0].children.push(id);
        }
        if !node.name.is_empty() {
            self.by_name.insert(node.name, id);
        }
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn local_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].local
    }

    /// World matrices for every node, indexed like the nodes.
    pub fn world_matrices(&self) -> Vec<Mat4> {
        let mut out: Vec<Mat4> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let local = node.local.matrix();
            let world = match node.parent {
                Some(p) => out[p.0] * local,
                None => local,
            };
            out.push(world);
        }
        out
    }

    /// World-space bounds of every drawable node.
    pub fn bounds(&self) -> Aabb {
        let worlds = self.world_matrices();
        self.nodes
            .iter()
            .zip(worlds.iter())
            .filter_map(|(n, w)| n.shape.map(|(p, _)| p.local_bounds().transformed(w)))
            .fold(Aabb::empty(), |acc, b| acc.union(&b))
    }
}
