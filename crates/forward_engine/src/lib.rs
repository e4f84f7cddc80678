//! # Forward Engine
//!
//! A forward-rendering batch pipeline: scene components emit per-draw data
//! (buffer handles, shader program, textures, per-instance transforms, and
//! lighting uniforms) into a bounded render list each frame, and a single
//! submission pass drains the list into a GPU backend in append order.
//!
//! ## Architecture
//!
//! The pipeline is split along clear seams:
//! - **Foundation**: math types, frame timing, logging
//! - **Render**: uniform descriptors, render entries, the bounded render
//!   list, nearest-light queries, material application stages, and the
//!   forward submission pass
//! - **Scene**: component world state, tick scheduling, draw producers, and
//!   the per-frame phase discipline
//! - **Backend Abstraction**: the opaque GPU target the pass submits into,
//!   with a headless recording implementation for tests and tooling
//!
//! ## Frame contract
//!
//! Each frame is a single-writer-then-single-reader handoff: the update
//! pass appends entries, the submission pass reads them in append order,
//! and the list is reset exactly once at the frame boundary. No entry
//! survives across frames.
//!
//! ## Quick Start
//!
//! ```rust
//! use forward_engine::prelude::*;
//!
//! let config = RenderConfig::default();
//! let mut backend = RecordingBackend::new();
//! let mut lights = LightSet::new();
//! lights.insert(PointLight::new(Vec3::new(0.0, 3.0, 0.0), 10.0,
//!     Vec3::new(1.0, 0.9, 0.8), 0.7));
//!
//! let material = Material::forward(ShaderProgramHandle(1), Vec::new());
//! let mesh = MeshRenderer::new(VertexBufferHandle(1), IndexBufferHandle(1), material);
//!
//! let mut coordinator = FrameCoordinator::new(&config);
//! coordinator.update(1.0 / 60.0, &mut []);
//! let stats = coordinator.render(&[&mesh], &lights, &mut backend);
//! assert_eq!(stats.submitted, 1);
//! ```

pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{ConfigError, RenderConfig},
        foundation::{
            math::{Mat4, Transform, Vec3, Vec4},
            time::{FixedStep, Timer},
        },
        render::{
            BaseStage, ForwardLightingStage, FrameSubmission, IndexBufferHandle, LightQuery,
            LightSet, Material, MaterialContext, MaterialStage, PointLight, RecordingBackend,
            RenderBackend, RenderEntry, RenderError, RenderList, RenderResult,
            ShaderProgramHandle, TextureHandle, TransformSet, UniformData, UniformHandle,
            UniformKind, VertexBufferHandle, ViewId, FORWARD_VIEW,
        },
        scene::{ComponentState, DrawProducer, FrameCoordinator, MeshRenderer, TickScheduler,
            Tickable},
    };
}
