//! Backend abstraction trait for the rendering system
//!
//! Defines the contract between the forward pass and the underlying GPU
//! command-buffer library. The library itself is an external collaborator;
//! this layer only hands it buffer handles, shader programs, texture
//! bindings, uniform blobs, and transforms, then submits one draw per
//! render entry.

use crate::render::uniforms::UniformHandle;
use crate::render::RenderError;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to a vertex buffer owned by the GPU context
///
/// Valid only within the owning context's lifetime; render entries hold
/// these as non-owning references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexBufferHandle(pub u64);

/// Handle to an index buffer owned by the GPU context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexBufferHandle(pub u64);

/// Handle to a compiled shader program owned by the GPU context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderProgramHandle(pub u64);

/// Handle to a texture owned by the GPU context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Target view index a draw is submitted into
///
/// Views partition the frame into passes; the forward pass owns one view
/// (see [`crate::render::forward::FORWARD_VIEW`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u8);

/// Main rendering backend trait
///
/// Abstracts over GPU command-buffer libraries and provides a consistent
/// interface for the forward submission pass. Bind and submit calls return
/// a result so a backend can surface per-entry failures; the caller is
/// responsible for isolating them (one bad entry must not abort the
/// frame).
pub trait RenderBackend {
    /// Look up a vec3 shader uniform by name, returning a typed handle
    fn uniform_vec3(&mut self, name: &str) -> UniformHandle;

    /// Look up a vec4 array shader uniform by name
    ///
    /// `count` is the declared array length (1 for a plain vec4).
    fn uniform_vec4(&mut self, name: &str, count: u32) -> UniformHandle;

    /// Look up a texture sampler uniform by name
    fn uniform_sampler(&mut self, name: &str) -> UniformHandle;

    /// Bind the vertex buffer for the next draw
    fn bind_vertex_buffer(&mut self, buffer: VertexBufferHandle) -> BackendResult<()>;

    /// Bind the index buffer for the next draw
    fn bind_index_buffer(&mut self, buffer: IndexBufferHandle) -> BackendResult<()>;

    /// Bind the shader program for the next draw
    fn bind_shader(&mut self, shader: ShaderProgramHandle) -> BackendResult<()>;

    /// Bind a texture to a sampler uniform at the given slot
    ///
    /// Slot order is the entry's texture insertion order.
    fn bind_texture(
        &mut self,
        slot: u32,
        texture: TextureHandle,
        sampler: UniformHandle,
    ) -> BackendResult<()>;

    /// Upload a uniform blob for the next draw
    ///
    /// `data` is `count` elements of the handle's kind as packed floats;
    /// its length in bytes is always `kind.element_size() * count * 4`.
    fn set_uniform(&mut self, handle: UniformHandle, data: &[u8], count: u32)
        -> BackendResult<()>;

    /// Set the single model transform for the next draw
    fn set_transform(&mut self, matrix: [[f32; 4]; 4]) -> BackendResult<()>;

    /// Set a bone/instance transform table for the next draw
    fn set_transform_table(&mut self, matrices: &[[[f32; 4]; 4]]) -> BackendResult<()>;

    /// Submit the accumulated draw state as one draw call into `view`
    fn submit(&mut self, view: ViewId, shader: ShaderProgramHandle) -> BackendResult<()>;
}
