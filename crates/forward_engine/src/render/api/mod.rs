//! Public rendering API
//!
//! The backend abstraction the forward pass submits into: opaque resource
//! handles and the [`RenderBackend`] trait.

pub mod render_backend;

pub use render_backend::{
    BackendResult, IndexBufferHandle, RenderBackend, ShaderProgramHandle, TextureHandle,
    VertexBufferHandle, ViewId,
};
