//! Forward pass submission
//!
//! Drains the render list into the backend in append order, one draw call
//! per entry. No reordering or state batching happens here; draws land in
//! exactly the order components appended them. A failed bind or submit is
//! isolated to its entry: the failure is logged and counted, and the pass
//! continues with the next entry.

use crate::foundation::math::mat4_to_cols;
use crate::render::api::{RenderBackend, ViewId};
use crate::render::entry::{RenderEntry, TransformSet};
use crate::render::render_list::RenderList;
use crate::render::RenderResult;

/// The view the forward pass renders into
pub const FORWARD_VIEW: ViewId = ViewId(1);

/// End-of-frame submission report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSubmission {
    /// Entries submitted successfully
    pub submitted: u32,
    /// Entries that failed a bind or submit step
    pub failed: u32,
}

/// Submit every live entry in the list, in append order
///
/// Returns the per-frame submission counts; the caller resets the list
/// afterwards.
pub fn submit_forward(list: &RenderList, backend: &mut dyn RenderBackend) -> FrameSubmission {
    let mut stats = FrameSubmission::default();
    for (index, entry) in list.iter().enumerate() {
        match submit_entry(entry, backend) {
            Ok(()) => stats.submitted += 1,
            Err(e) => {
                log::warn!("forward draw {index} failed: {e}");
                stats.failed += 1;
            }
        }
    }
    log::trace!(
        "forward pass: {} submitted, {} failed",
        stats.submitted,
        stats.failed
    );
    stats
}

fn submit_entry(entry: &RenderEntry, backend: &mut dyn RenderBackend) -> RenderResult<()> {
    backend.bind_vertex_buffer(entry.vertex_buffer)?;
    backend.bind_index_buffer(entry.index_buffer)?;
    backend.bind_shader(entry.shader)?;

    for (slot, binding) in entry.textures.iter().enumerate() {
        backend.bind_texture(slot as u32, binding.texture, binding.sampler)?;
    }

    for uniform in &entry.uniforms {
        backend.set_uniform(uniform.handle(), uniform.as_bytes(), uniform.count())?;
    }

    match &entry.transforms {
        TransformSet::Single(matrix) => backend.set_transform(mat4_to_cols(matrix))?,
        TransformSet::Table(matrices) => {
            let table: Vec<[[f32; 4]; 4]> = matrices.iter().map(mat4_to_cols).collect();
            backend.set_transform_table(&table)?;
        }
    }

    backend.submit(entry.view, entry.shader)
}
