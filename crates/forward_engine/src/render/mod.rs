//! # Rendering System
//!
//! The forward-rendering batch pipeline. Scene components append
//! [`RenderEntry`] draw records into a bounded [`RenderList`] during the
//! update pass; [`forward::submit_forward`] drains the list into a
//! [`RenderBackend`] in append order once per frame.
//!
//! ## Architecture
//!
//! - **Uniform descriptors** ([`uniforms`]): named, typed, owned buffers of
//!   shader parameter data attached to an entry
//! - **Render entries** ([`entry`]): one GPU draw's complete state bundle
//! - **Render list** ([`render_list`]): bounded append-only per-frame
//!   sequence
//! - **Light queries** ([`lighting`]): K-nearest active lights for a world
//!   position
//! - **Material application** ([`material`]): ordered stages that write
//!   lighting uniforms into an entry
//! - **Forward pass** ([`forward`]): in-order submission with per-entry
//!   failure isolation
//! - **Backend abstraction** ([`api`], [`backends`]): the opaque GPU target

pub mod api;
pub mod backends;
pub mod entry;
pub mod forward;
pub mod lighting;
pub mod material;
pub mod render_list;
pub mod uniforms;

pub use api::{
    BackendResult, IndexBufferHandle, RenderBackend, ShaderProgramHandle, TextureHandle,
    VertexBufferHandle, ViewId,
};
pub use backends::recording::{RecordedCommand, RecordingBackend};
pub use entry::{RenderEntry, TextureBinding, TransformSet, MAX_TRANSFORM_TABLE};
pub use forward::{submit_forward, FrameSubmission, FORWARD_VIEW};
pub use lighting::{LightKey, LightQuery, LightSet, PointLight};
pub use material::{
    BaseStage, ForwardLightingStage, Material, MaterialContext, MaterialStage,
    MAX_FORWARD_POINT_LIGHTS,
};
pub use render_list::{RenderList, FORWARD_LIST_CAPACITY};
pub use uniforms::{UniformData, UniformHandle, UniformKind, MAX_UNIFORM_FLOATS};

use thiserror::Error;

/// Rendering error types
///
/// Every variant is local to a single uniform write, append, or draw;
/// none of them abort the frame. The forward pass isolates failures per
/// entry and surfaces counts at end of frame.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Uniform data length does not match the declared type x count
    ///
    /// Aborts that single write; the descriptor's buffer is left untouched.
    #[error("uniform data size mismatch: expected {expected} floats, got {actual}")]
    SizeMismatch {
        /// Float count the descriptor was declared with
        expected: usize,
        /// Float count the caller supplied
        actual: usize,
    },

    /// Render list append exceeded capacity
    ///
    /// A recoverable signal: the caller drops the entry and logs. Never a
    /// silent overwrite.
    #[error("render list full: capacity {capacity} reached")]
    ListFull {
        /// The list's fixed capacity
        capacity: usize,
    },

    /// Uniform backing-buffer allocation was rejected
    ///
    /// Raised for zero-sized or implausibly large requests, which indicate
    /// malformed material data. Recoverable by skipping that uniform.
    #[error("uniform allocation rejected: {requested} floats (cap {cap})")]
    UniformAllocation {
        /// Float count that was requested
        requested: usize,
        /// Largest allowed request
        cap: usize,
    },

    /// GPU resource bind or submit failed for a single entry
    ///
    /// Isolated to that entry during submission; the pass continues.
    #[error("binding failed: {0}")]
    Binding(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
