//! The seam between scene traversal and whatever presents pixels.

use std::sync::Arc;

use glam::Mat4;

use brew_resources::Mesh;

use crate::light::SpotLight;

/// Receives the per-frame camera state and one submission per drawable
/// node.
///
/// Implementations own the actual presentation (GPU upload, logging, test
/// capture); the traversal only hands over matrices and shared mesh
/// handles and never mutates scene state while drawing.
pub trait RenderSink {
    /// Called once per frame before any submissions.
    fn begin_frame(&mut self, _view: &Mat4, _projection: &Mat4, _reflector: Option<&SpotLight>) {}

    /// Called once per drawable node, in traversal order.
    fn submit(&mut self, mesh: &Arc<Mesh>, global: &Mat4, mvp: &Mat4);

    /// Called once per frame after all submissions.
    fn end_frame(&mut self) {}
}

/// One recorded draw submission.
#[cfg(test)]
pub(crate) struct Submission {
    pub mesh: Arc<Mesh>,
    pub global: Mat4,
    pub mvp: Mat4,
}

/// Sink that records everything it receives, for traversal tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub submissions: Vec<Submission>,
}

#[cfg(test)]
impl RenderSink for RecordingSink {
    fn submit(&mut self, mesh: &Arc<Mesh>, global: &Mat4, mvp: &Mat4) {
        self.submissions.push(Submission {
            mesh: mesh.clone(),
            global: *global,
            mvp: *mvp,
        });
    }
}
