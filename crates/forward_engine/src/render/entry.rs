//! Render entries
//!
//! A [`RenderEntry`] is one GPU draw's complete state bundle: non-owning
//! buffer and shader handles, an ordered texture binding list, an owned
//! uniform descriptor list, and either a single transform or a bounded
//! transform table for skinned/instanced geometry. Entries are created
//! fresh each frame and consumed read-only exactly once by the forward
//! pass.

use crate::foundation::math::Mat4;
use crate::render::api::{
    IndexBufferHandle, ShaderProgramHandle, TextureHandle, VertexBufferHandle, ViewId,
};
use crate::render::uniforms::{UniformData, UniformHandle};

/// Maximum matrices in a transform table (bone/instance limit)
pub const MAX_TRANSFORM_TABLE: usize = 49;

/// One texture bound to a sampler uniform
///
/// Insertion order in the entry is binding order.
#[derive(Debug, Clone, Copy)]
pub struct TextureBinding {
    /// The texture to bind
    pub texture: TextureHandle,
    /// The sampler uniform it binds to
    pub sampler: UniformHandle,
}

/// Transforms for one draw: a single matrix or a bounded table
#[derive(Debug, Clone)]
pub enum TransformSet {
    /// One model matrix (static mesh)
    Single(Mat4),
    /// Up to [`MAX_TRANSFORM_TABLE`] matrices (skeletal/instanced)
    Table(Vec<Mat4>),
}

impl TransformSet {
    /// Build a transform table
    ///
    /// A table larger than [`MAX_TRANSFORM_TABLE`] is a programming error,
    /// not a recoverable condition.
    pub fn table(matrices: Vec<Mat4>) -> Self {
        assert!(
            matrices.len() <= MAX_TRANSFORM_TABLE,
            "transform table of {} exceeds the {MAX_TRANSFORM_TABLE} entry limit",
            matrices.len()
        );
        Self::Table(matrices)
    }

    /// Number of valid matrices
    pub fn count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Table(matrices) => matrices.len(),
        }
    }
}

/// One GPU draw record
///
/// The fixed-size part stays small (handles and a discriminant); the
/// variable-length members are heap-backed so a frame's worth of entries
/// keeps a bounded footprint.
#[derive(Debug, Clone)]
pub struct RenderEntry {
    /// Vertex buffer to bind (non-owning)
    pub vertex_buffer: VertexBufferHandle,

    /// Index buffer to bind (non-owning)
    pub index_buffer: IndexBufferHandle,

    /// Shader program to draw with; set by the material's base stage
    pub shader: ShaderProgramHandle,

    /// Texture bindings in binding order
    pub textures: Vec<TextureBinding>,

    /// Uniform descriptors owned by this entry
    pub uniforms: Vec<UniformData>,

    /// Transform state for the draw
    pub transforms: TransformSet,

    /// Target view the draw is submitted into; material application
    /// forces this to the forward view
    pub view: ViewId,
}

impl RenderEntry {
    /// Create an entry with an identity transform and the default view
    ///
    /// The shader program starts null; the material's base stage supplies
    /// the real program during application.
    pub fn new(vertex_buffer: VertexBufferHandle, index_buffer: IndexBufferHandle) -> Self {
        Self {
            vertex_buffer,
            index_buffer,
            shader: ShaderProgramHandle(0),
            textures: Vec::new(),
            uniforms: Vec::new(),
            transforms: TransformSet::Single(Mat4::identity()),
            view: ViewId(0),
        }
    }

    /// Append a texture binding (binding order is insertion order)
    pub fn push_texture(&mut self, texture: TextureHandle, sampler: UniformHandle) {
        self.textures.push(TextureBinding { texture, sampler });
    }

    /// Append an owned uniform descriptor
    pub fn push_uniform(&mut self, uniform: UniformData) {
        self.uniforms.push(uniform);
    }

    /// Set a single model transform
    pub fn set_transform(&mut self, matrix: Mat4) {
        self.transforms = TransformSet::Single(matrix);
    }

    /// Set a bone/instance transform table
    pub fn set_transform_table(&mut self, matrices: Vec<Mat4>) {
        self.transforms = TransformSet::table(matrices);
    }

    /// Number of valid transforms for this draw
    pub fn transform_count(&self) -> usize {
        self.transforms.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::uniforms::UniformKind;

    #[test]
    fn test_entry_starts_with_identity_transform() {
        let entry = RenderEntry::new(VertexBufferHandle(1), IndexBufferHandle(2));
        assert_eq!(entry.transform_count(), 1);
        assert!(entry.textures.is_empty());
        assert!(entry.uniforms.is_empty());
    }

    #[test]
    fn test_texture_binding_order_is_insertion_order() {
        let mut entry = RenderEntry::new(VertexBufferHandle(1), IndexBufferHandle(2));
        let sampler_a = UniformHandle::new(10, UniformKind::Sampler, 1);
        let sampler_b = UniformHandle::new(11, UniformKind::Sampler, 1);

        entry.push_texture(TextureHandle(100), sampler_a);
        entry.push_texture(TextureHandle(200), sampler_b);

        assert_eq!(entry.textures[0].texture, TextureHandle(100));
        assert_eq!(entry.textures[1].texture, TextureHandle(200));
    }

    #[test]
    fn test_transform_table_count() {
        let mut entry = RenderEntry::new(VertexBufferHandle(1), IndexBufferHandle(2));
        entry.set_transform_table(vec![Mat4::identity(); 3]);
        assert_eq!(entry.transform_count(), 3);
    }

    #[test]
    #[should_panic(expected = "transform table")]
    fn test_transform_table_over_limit_panics() {
        TransformSet::table(vec![Mat4::identity(); MAX_TRANSFORM_TABLE + 1]);
    }
}
