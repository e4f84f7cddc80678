//! Material application
//!
//! A material is an explicit, ordered list of [`MaterialStage`]s composed
//! by configuration. Each stage writes a slice of draw state into a
//! [`RenderEntry`]; applying a material runs the stages in order against a
//! fresh entry once per frame. This replaces an inheritance chain
//! (base-class apply, then override) with data: the base behavior is just
//! the first stage in the list.

mod stages;

pub use stages::{BaseStage, ForwardLightingStage, MAX_FORWARD_POINT_LIGHTS};

use crate::render::api::{ShaderProgramHandle, TextureHandle};
use crate::render::entry::RenderEntry;
use crate::render::lighting::LightQuery;
use crate::render::{RenderBackend, RenderResult};
use crate::scene::ComponentState;

/// Shared services a stage draws on while applying
///
/// Passed explicitly through the update call chain; stages never reach
/// for global state.
pub struct MaterialContext<'a> {
    /// Backend for named-uniform lookups
    pub backend: &'a mut dyn RenderBackend,
    /// Scene lights for nearest-light queries
    pub lights: &'a dyn LightQuery,
}

/// One step of material application
pub trait MaterialStage {
    /// Write this stage's draw state into `entry`
    ///
    /// `state` carries the producing component's world state; stages that
    /// need it (e.g. light packing) degrade gracefully when it is absent.
    fn apply(
        &self,
        entry: &mut RenderEntry,
        state: Option<&ComponentState>,
        ctx: &mut MaterialContext<'_>,
    ) -> RenderResult<()>;
}

/// An ordered list of material stages
pub struct Material {
    stages: Vec<Box<dyn MaterialStage>>,
}

impl Material {
    /// Create a material with no stages
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage (applied after all earlier stages)
    pub fn with_stage(mut self, stage: Box<dyn MaterialStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Standard forward-lit material: base bindings, then forward lighting
    pub fn forward(
        shader: ShaderProgramHandle,
        textures: Vec<(TextureHandle, String)>,
    ) -> Self {
        Self::new()
            .with_stage(Box::new(BaseStage::new(shader, textures)))
            .with_stage(Box::new(ForwardLightingStage::new()))
    }

    /// Run every stage against `entry` in order
    pub fn apply(
        &self,
        entry: &mut RenderEntry,
        state: Option<&ComponentState>,
        ctx: &mut MaterialContext<'_>,
    ) -> RenderResult<()> {
        for stage in &self.stages {
            stage.apply(entry, state, ctx)?;
        }
        Ok(())
    }

    /// Number of stages
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}
