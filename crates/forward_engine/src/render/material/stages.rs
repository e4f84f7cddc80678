//! Built-in material stages
//!
//! [`BaseStage`] supplies the draw's program and texture bindings;
//! [`ForwardLightingStage`] routes the draw into the forward view and
//! attaches its lighting uniforms.

use crate::foundation::math::Vec3;
use crate::render::entry::RenderEntry;
use crate::render::forward::FORWARD_VIEW;
use crate::render::material::{MaterialContext, MaterialStage};
use crate::render::uniforms::UniformData;
use crate::render::{RenderResult, ShaderProgramHandle, TextureHandle};
use crate::scene::ComponentState;

/// Point lights packed per draw
///
/// Matches the 4-row vec4 arrays the forward shaders declare.
pub const MAX_FORWARD_POINT_LIGHTS: usize = 4;

/// Push a freshly built descriptor, or skip it on allocation failure
///
/// A rejected uniform degrades that parameter only, never the draw.
fn push_uniform_or_skip(entry: &mut RenderEntry, result: RenderResult<UniformData>) {
    match result {
        Ok(uniform) => entry.push_uniform(uniform),
        Err(e) => log::warn!("skipping uniform: {e}"),
    }
}

/// Base material bindings: shader program and textures
pub struct BaseStage {
    shader: ShaderProgramHandle,
    /// Texture and sampler-uniform name pairs, in binding order
    textures: Vec<(TextureHandle, String)>,
}

impl BaseStage {
    /// Create a base stage for a program and its texture bindings
    pub fn new(shader: ShaderProgramHandle, textures: Vec<(TextureHandle, String)>) -> Self {
        Self { shader, textures }
    }
}

impl MaterialStage for BaseStage {
    fn apply(
        &self,
        entry: &mut RenderEntry,
        _state: Option<&ComponentState>,
        ctx: &mut MaterialContext<'_>,
    ) -> RenderResult<()> {
        entry.shader = self.shader;
        for (texture, sampler_name) in &self.textures {
            let sampler = ctx.backend.uniform_sampler(sampler_name);
            entry.push_texture(*texture, sampler);
        }
        Ok(())
    }
}

/// Forward-lighting augmentation
///
/// Forces the entry into the forward view and writes the lighting
/// uniforms: a directional light (always present on every entry produced
/// through this stage) and, when component state is available, the packed
/// nearest-point-light arrays `lightPosRadius` / `lightColorAttn`.
pub struct ForwardLightingStage {
    /// Directional light direction written to every entry
    direction: Vec3,
    /// Directional light color written to every entry
    color: Vec3,
    /// Per-draw point light budget, at most [`MAX_FORWARD_POINT_LIGHTS`]
    max_point_lights: usize,
}

impl Default for ForwardLightingStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardLightingStage {
    /// Create a stage with the stock directional light
    pub fn new() -> Self {
        Self {
            direction: Vec3::new(0.0, -1.0, 0.0),
            color: Vec3::new(1.0, 0.0, 1.0),
            max_point_lights: MAX_FORWARD_POINT_LIGHTS,
        }
    }

    /// Override the directional light direction
    pub fn with_direction(mut self, direction: Vec3) -> Self {
        self.direction = direction;
        self
    }

    /// Override the directional light color
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Lower the per-draw point light budget
    pub fn with_max_point_lights(mut self, max: usize) -> Self {
        self.max_point_lights = max.clamp(1, MAX_FORWARD_POINT_LIGHTS);
        self
    }
}

impl MaterialStage for ForwardLightingStage {
    fn apply(
        &self,
        entry: &mut RenderEntry,
        state: Option<&ComponentState>,
        ctx: &mut MaterialContext<'_>,
    ) -> RenderResult<()> {
        // Route the draw into the forward pass view
        entry.view = FORWARD_VIEW;

        // Directional light, present whether or not point lights exist
        let dir_handle = ctx.backend.uniform_vec3("dirLightDirection");
        push_uniform_or_skip(
            entry,
            UniformData::from_values(
                dir_handle,
                1,
                &[self.direction.x, self.direction.y, self.direction.z],
            ),
        );
        let color_handle = ctx.backend.uniform_vec3("dirLightColor");
        push_uniform_or_skip(
            entry,
            UniformData::from_values(color_handle, 1, &[self.color.x, self.color.y, self.color.z]),
        );

        // Point light packing needs the component's world position;
        // without it this is a documented partial application, not an error
        let Some(state) = state else {
            log::trace!("no component state; point light packing skipped");
            return Ok(());
        };

        let nearest = ctx
            .lights
            .nearest_lights(state.world_position(), self.max_point_lights);
        if nearest.is_empty() {
            return Ok(());
        }

        // [PosX, PosY, PosZ, Radius] / [ColorR, ColorG, ColorB, Attenuation]
        let mut pos_radius = Vec::with_capacity(nearest.len() * 4);
        let mut color_attn = Vec::with_capacity(nearest.len() * 4);
        for light in &nearest {
            pos_radius.extend_from_slice(&[
                light.position.x,
                light.position.y,
                light.position.z,
                light.radius,
            ]);
            color_attn.extend_from_slice(&[
                light.color.x,
                light.color.y,
                light.color.z,
                light.attenuation,
            ]);
        }

        let count = nearest.len() as u32;
        let pos_handle = ctx
            .backend
            .uniform_vec4("lightPosRadius", MAX_FORWARD_POINT_LIGHTS as u32);
        push_uniform_or_skip(
            entry,
            UniformData::from_values(pos_handle, count, &pos_radius),
        );
        let attn_handle = ctx
            .backend
            .uniform_vec4("lightColorAttn", MAX_FORWARD_POINT_LIGHTS as u32);
        push_uniform_or_skip(
            entry,
            UniformData::from_values(attn_handle, count, &color_attn),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Transform;
    use crate::render::api::{IndexBufferHandle, VertexBufferHandle};
    use crate::render::backends::recording::RecordingBackend;
    use crate::render::lighting::{LightSet, PointLight};
    use crate::render::material::Material;

    fn fresh_entry() -> RenderEntry {
        RenderEntry::new(VertexBufferHandle(1), IndexBufferHandle(1))
    }

    fn apply_forward(
        backend: &mut RecordingBackend,
        lights: &LightSet,
        state: Option<&ComponentState>,
    ) -> RenderEntry {
        let material = Material::new().with_stage(Box::new(ForwardLightingStage::new()));
        let mut entry = fresh_entry();
        let mut ctx = MaterialContext { backend, lights };
        material.apply(&mut entry, state, &mut ctx).unwrap();
        entry
    }

    fn count_by_handle(entry: &RenderEntry, id: u64) -> usize {
        entry
            .uniforms
            .iter()
            .filter(|u| u.handle().id() == id)
            .count()
    }

    #[test]
    fn test_directional_uniforms_always_present() {
        let mut backend = RecordingBackend::new();
        let lights = LightSet::new();
        let state = ComponentState::new(Transform::identity());

        let without_state = apply_forward(&mut backend, &lights, None);
        let with_state = apply_forward(&mut backend, &lights, Some(&state));

        let dir_id = backend.uniform_id("dirLightDirection").unwrap();
        let color_id = backend.uniform_id("dirLightColor").unwrap();
        for entry in [&without_state, &with_state] {
            assert_eq!(count_by_handle(entry, dir_id), 1);
            assert_eq!(count_by_handle(entry, color_id), 1);
        }
    }

    #[test]
    fn test_stock_directional_values() {
        let mut backend = RecordingBackend::new();
        let lights = LightSet::new();
        let entry = apply_forward(&mut backend, &lights, None);

        assert_eq!(entry.uniforms[0].data(), &[0.0, -1.0, 0.0]);
        assert_eq!(entry.uniforms[1].data(), &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_forces_forward_view() {
        let mut backend = RecordingBackend::new();
        let lights = LightSet::new();
        let entry = apply_forward(&mut backend, &lights, None);
        assert_eq!(entry.view, FORWARD_VIEW);
    }

    #[test]
    fn test_point_light_packing_rows() {
        let mut backend = RecordingBackend::new();
        let mut lights = LightSet::new();
        lights.insert(PointLight::new(
            Vec3::new(1.0, 0.0, 0.0),
            2.0,
            Vec3::new(0.9, 0.8, 0.7),
            0.5,
        ));
        lights.insert(PointLight::new(
            Vec3::new(0.0, 1.0, 0.0),
            3.0,
            Vec3::new(0.1, 0.2, 0.3),
            0.25,
        ));

        let state = ComponentState::new(Transform::identity());
        let entry = apply_forward(&mut backend, &lights, Some(&state));

        let pos_id = backend.uniform_id("lightPosRadius").unwrap();
        let attn_id = backend.uniform_id("lightColorAttn").unwrap();
        let pos = entry
            .uniforms
            .iter()
            .find(|u| u.handle().id() == pos_id)
            .unwrap();
        let attn = entry
            .uniforms
            .iter()
            .find(|u| u.handle().id() == attn_id)
            .unwrap();

        assert_eq!(pos.count(), 2);
        assert_eq!(&pos.data()[0..4], &[1.0, 0.0, 0.0, 2.0]);
        assert_eq!(&pos.data()[4..8], &[0.0, 1.0, 0.0, 3.0]);
        assert_eq!(&attn.data()[0..4], &[0.9, 0.8, 0.7, 0.5]);
        assert_eq!(&attn.data()[4..8], &[0.1, 0.2, 0.3, 0.25]);
    }

    #[test]
    fn test_packing_caps_at_four_lights() {
        let mut backend = RecordingBackend::new();
        let mut lights = LightSet::new();
        for d in 1..=6 {
            lights.insert(PointLight::new(
                Vec3::new(d as f32, 0.0, 0.0),
                1.0,
                Vec3::new(1.0, 1.0, 1.0),
                0.5,
            ));
        }

        let state = ComponentState::new(Transform::identity());
        let entry = apply_forward(&mut backend, &lights, Some(&state));

        let pos_id = backend.uniform_id("lightPosRadius").unwrap();
        let pos = entry
            .uniforms
            .iter()
            .find(|u| u.handle().id() == pos_id)
            .unwrap();
        assert_eq!(pos.count(), 4);
        // Nearest four of the six
        assert_eq!(pos.data()[0], 1.0);
        assert_eq!(pos.data()[12], 4.0);
    }

    #[test]
    fn test_no_state_skips_point_packing() {
        let mut backend = RecordingBackend::new();
        let mut lights = LightSet::new();
        lights.insert(PointLight::new(
            Vec3::new(1.0, 0.0, 0.0),
            2.0,
            Vec3::new(1.0, 1.0, 1.0),
            0.5,
        ));

        let entry = apply_forward(&mut backend, &lights, None);
        // Directional only
        assert_eq!(entry.uniforms.len(), 2);
    }

    #[test]
    fn test_no_lights_skips_point_packing() {
        let mut backend = RecordingBackend::new();
        let lights = LightSet::new();
        let state = ComponentState::new(Transform::identity());
        let entry = apply_forward(&mut backend, &lights, Some(&state));
        assert_eq!(entry.uniforms.len(), 2);
    }

    #[test]
    fn test_base_stage_sets_program_and_bindings() {
        let mut backend = RecordingBackend::new();
        let lights = LightSet::new();
        let material = Material::forward(
            ShaderProgramHandle(42),
            vec![(TextureHandle(7), "diffuseMap".to_string())],
        );

        let mut entry = fresh_entry();
        let mut ctx = MaterialContext {
            backend: &mut backend,
            lights: &lights,
        };
        material.apply(&mut entry, None, &mut ctx).unwrap();

        assert_eq!(entry.shader, ShaderProgramHandle(42));
        assert_eq!(entry.textures.len(), 1);
        assert_eq!(entry.textures[0].texture, TextureHandle(7));
        assert_eq!(entry.view, FORWARD_VIEW);
    }
}
