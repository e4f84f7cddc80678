//! Mesh draw producer
//!
//! A [`MeshRenderer`] owns the scene-side description of one drawable
//! mesh: GPU buffer handles, a material stage list, and a world transform.
//! Each frame it builds a fresh render entry, runs material application
//! against its current world state, and appends the entry to the render
//! list. Nothing it produces survives the frame.

use crate::foundation::math::{Mat4, Transform};
use crate::render::api::{IndexBufferHandle, VertexBufferHandle};
use crate::render::entry::RenderEntry;
use crate::render::material::{Material, MaterialContext};
use crate::render::render_list::RenderList;
use crate::render::RenderResult;
use crate::scene::{ComponentState, DrawProducer};

/// Scene component that emits one forward draw per frame
pub struct MeshRenderer {
    vertex_buffer: VertexBufferHandle,
    index_buffer: IndexBufferHandle,
    material: Material,

    /// World transform; mutate freely between frames
    pub transform: Transform,

    /// Optional bone/instance table overriding the single transform
    pub transform_table: Option<Vec<Mat4>>,
}

impl MeshRenderer {
    /// Create a renderer for uploaded mesh buffers
    pub fn new(
        vertex_buffer: VertexBufferHandle,
        index_buffer: IndexBufferHandle,
        material: Material,
    ) -> Self {
        Self {
            vertex_buffer,
            index_buffer,
            material,
            transform: Transform::identity(),
            transform_table: None,
        }
    }

    /// Set the initial world transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// This frame's world-state snapshot
    pub fn component_state(&self) -> ComponentState {
        ComponentState::new(self.transform.clone())
    }
}

impl DrawProducer for MeshRenderer {
    fn enqueue(&self, list: &mut RenderList, ctx: &mut MaterialContext<'_>) -> RenderResult<usize> {
        let mut entry = RenderEntry::new(self.vertex_buffer, self.index_buffer);
        match &self.transform_table {
            Some(table) => entry.set_transform_table(table.clone()),
            None => entry.set_transform(self.transform.to_matrix()),
        }

        let state = self.component_state();
        self.material.apply(&mut entry, Some(&state), ctx)?;
        list.append(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::backends::recording::RecordingBackend;
    use crate::render::forward::FORWARD_VIEW;
    use crate::render::lighting::LightSet;
    use crate::render::ShaderProgramHandle;

    #[test]
    fn test_enqueue_appends_a_forward_entry() {
        let mut backend = RecordingBackend::new();
        let lights = LightSet::new();
        let mut list = RenderList::with_capacity(4);

        let renderer = MeshRenderer::new(
            VertexBufferHandle(1),
            IndexBufferHandle(2),
            Material::forward(ShaderProgramHandle(3), Vec::new()),
        )
        .with_transform(Transform::from_position(Vec3::new(1.0, 0.0, 0.0)));

        let mut ctx = MaterialContext {
            backend: &mut backend,
            lights: &lights,
        };
        let slot = renderer.enqueue(&mut list, &mut ctx).unwrap();

        assert_eq!(slot, 0);
        let entry = &list.entries()[0];
        assert_eq!(entry.shader, ShaderProgramHandle(3));
        assert_eq!(entry.view, FORWARD_VIEW);
        assert_eq!(entry.transform_count(), 1);
        // Directional lighting uniforms came along
        assert_eq!(entry.uniforms.len(), 2);
    }

    #[test]
    fn test_transform_table_flows_into_entry() {
        let mut backend = RecordingBackend::new();
        let lights = LightSet::new();
        let mut list = RenderList::with_capacity(4);

        let mut renderer = MeshRenderer::new(
            VertexBufferHandle(1),
            IndexBufferHandle(2),
            Material::forward(ShaderProgramHandle(3), Vec::new()),
        );
        renderer.transform_table = Some(vec![Mat4::identity(); 7]);

        let mut ctx = MaterialContext {
            backend: &mut backend,
            lights: &lights,
        };
        renderer.enqueue(&mut list, &mut ctx).unwrap();

        assert_eq!(list.entries()[0].transform_count(), 7);
    }
}
