//! Scene layer
//!
//! Components contribute their world state and draw data each frame:
//! tickables advance under the scheduler, draw producers append render
//! entries, and the frame coordinator enforces the per-frame phase
//! discipline (update, collect, submit, reset).

pub mod frame;
pub mod mesh_renderer;
pub mod tickable;

pub use frame::FrameCoordinator;
pub use mesh_renderer::MeshRenderer;
pub use tickable::{TickScheduler, Tickable};

use crate::foundation::math::{Transform, Vec3};
use crate::render::material::MaterialContext;
use crate::render::render_list::RenderList;
use crate::render::RenderResult;

/// A component's world-state snapshot for one frame
///
/// Captured at collect time, after ticks have run, so light-distance
/// queries see current positions.
#[derive(Debug, Clone)]
pub struct ComponentState {
    /// World transform of the producing component
    pub world_transform: Transform,
}

impl ComponentState {
    /// Snapshot a component's world transform
    pub fn new(world_transform: Transform) -> Self {
        Self { world_transform }
    }

    /// World position used for nearest-light queries
    pub fn world_position(&self) -> Vec3 {
        self.world_transform.position
    }
}

/// A component that contributes draws to the frame
pub trait DrawProducer {
    /// Build this component's render entry and append it to `list`
    ///
    /// Returns the appended slot index. A full list surfaces as
    /// [`crate::render::RenderError::ListFull`]; the coordinator drops the
    /// draw and logs.
    fn enqueue(&self, list: &mut RenderList, ctx: &mut MaterialContext<'_>) -> RenderResult<usize>;
}
