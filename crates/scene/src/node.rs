//! The scene-graph node tree.

use std::sync::Arc;

use glam::Mat4;
use tracing::debug;

use brew_resources::Mesh;

use crate::anim::AnimationRule;
use crate::sink::RenderSink;

/// Per-frame update inputs threaded through the traversal.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext {
    /// Elapsed wall-clock seconds since launch.
    pub time: f64,
    /// Whether the bottle path animation advances. Rotations and orbits
    /// track time regardless.
    pub animation: bool,
}

impl UpdateContext {
    /// Context at the given time with animation enabled.
    pub fn new(time: f64) -> Self {
        Self {
            time,
            animation: true,
        }
    }
}

/// An entry in the scene tree: a transform, an animation rule, optional
/// geometry, and owned children.
///
/// The tree is strict ownership, not a DAG: every node is owned by exactly
/// one parent and the parent's global matrix is passed down during
/// traversal, so no node holds a back-reference.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    rule: AnimationRule,
    local: Mat4,
    global: Mat4,
    mesh: Option<Arc<Mesh>>,
    children: Vec<Node>,
}

impl Node {
    /// Create a static node with an identity transform.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rule: AnimationRule::Static,
            local: Mat4::IDENTITY,
            global: Mat4::IDENTITY,
            mesh: None,
            children: Vec::new(),
        }
    }

    /// Set the animation rule.
    pub fn with_rule(mut self, rule: AnimationRule) -> Self {
        self.rule = rule;
        self
    }

    /// Set the configured local transform.
    ///
    /// Animated rules overwrite this every update; it persists only for
    /// static nodes.
    pub fn with_local(mut self, local: Mat4) -> Self {
        self.local = local;
        self
    }

    /// Attach geometry, making the node drawable.
    pub fn with_mesh(mut self, mesh: Arc<Mesh>) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Append a child. Children update and draw in insertion order; that
    /// order is the only ordering guarantee.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child to an already-built node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Node name, used for debugging output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transform relative to the parent.
    pub fn local(&self) -> Mat4 {
        self.local
    }

    /// Transform relative to the scene root, as of the last update.
    pub fn global(&self) -> Mat4 {
        self.global
    }

    /// Child nodes in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Update the tree rooted at this node.
    ///
    /// Recomputes each node's local transform through its animation rule,
    /// composes `global = parent_global * local`, and recurses into
    /// children in insertion order. The root composes against identity.
    pub fn update(&mut self, ctx: &UpdateContext) {
        self.update_with_parent(ctx, Mat4::IDENTITY);
    }

    fn update_with_parent(&mut self, ctx: &UpdateContext, parent_global: Mat4) {
        if let Some(local) = self.rule.evaluate(ctx) {
            self.local = local;
        }
        self.global = parent_global * self.local;
        for child in &mut self.children {
            child.update_with_parent(ctx, self.global);
        }
    }

    /// Draw the tree rooted at this node.
    ///
    /// Submits every drawable node's cached global transform together with
    /// its model-view-projection matrix, in the same order update uses.
    /// Scene state is not mutated.
    pub fn draw(&self, view: &Mat4, projection: &Mat4, sink: &mut dyn RenderSink) {
        if let Some(mesh) = &self.mesh {
            let mvp = *projection * *view * self.global;
            sink.submit(mesh, &self.global, &mvp);
        }
        for child in &self.children {
            child.draw(view, projection, sink);
        }
    }

    /// Log the tree structure at debug level.
    pub fn dump(&self) {
        self.dump_at_depth(0);
    }

    fn dump_at_depth(&self, depth: usize) {
        debug!("{}{}", "  ".repeat(depth), self.name);
        for child in &self.children {
            child.dump_at_depth(depth + 1);
        }
    }
}
