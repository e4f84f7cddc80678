//! Recording render backend
//!
//! A headless [`RenderBackend`] that interns uniform names and records
//! every bind, upload, and submit in order. Used by the test suite and
//! the demo; also handy for dumping a frame's command stream when
//! debugging draw-order issues. Failure injection on chosen shader
//! programs exercises the forward pass's per-entry isolation.

use std::collections::{HashMap, HashSet};

use crate::render::api::{
    BackendResult, IndexBufferHandle, RenderBackend, ShaderProgramHandle, TextureHandle,
    VertexBufferHandle, ViewId,
};
use crate::render::uniforms::{UniformHandle, UniformKind};
use crate::render::RenderError;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    /// Vertex buffer bound
    BindVertexBuffer(VertexBufferHandle),
    /// Index buffer bound
    BindIndexBuffer(IndexBufferHandle),
    /// Shader program bound
    BindShader(ShaderProgramHandle),
    /// Texture bound to a sampler slot
    BindTexture {
        /// Binding slot
        slot: u32,
        /// Bound texture
        texture: TextureHandle,
        /// Sampler uniform id
        sampler: u64,
    },
    /// Uniform blob uploaded
    SetUniform {
        /// Uniform id
        id: u64,
        /// Raw blob bytes
        data: Vec<u8>,
        /// Live element count
        count: u32,
    },
    /// Single transform set
    SetTransform([[f32; 4]; 4]),
    /// Transform table set
    SetTransformTable(Vec<[[f32; 4]; 4]>),
    /// Draw submitted
    Submit {
        /// Target view
        view: ViewId,
        /// Program drawn with
        shader: ShaderProgramHandle,
    },
}

/// Command-recording backend with failure injection
#[derive(Debug, Default)]
pub struct RecordingBackend {
    commands: Vec<RecordedCommand>,
    uniforms: HashMap<String, UniformHandle>,
    next_uniform_id: u64,
    failing_shaders: HashSet<u64>,
}

impl RecordingBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a shader program as invalid: binding it fails
    pub fn fail_shader(&mut self, shader: ShaderProgramHandle) {
        self.failing_shaders.insert(shader.0);
    }

    /// The recorded command stream, in call order
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// Drop all recorded commands (interned uniforms are kept)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The id interned for a uniform name, if it was ever looked up
    pub fn uniform_id(&self, name: &str) -> Option<u64> {
        self.uniforms.get(name).map(|handle| handle.id())
    }

    fn intern(&mut self, name: &str, kind: UniformKind, count: u32) -> UniformHandle {
        if let Some(handle) = self.uniforms.get(name) {
            return *handle;
        }
        let handle = UniformHandle::new(self.next_uniform_id, kind, count);
        self.next_uniform_id += 1;
        self.uniforms.insert(name.to_string(), handle);
        handle
    }
}

impl RenderBackend for RecordingBackend {
    fn uniform_vec3(&mut self, name: &str) -> UniformHandle {
        self.intern(name, UniformKind::Vec3, 1)
    }

    fn uniform_vec4(&mut self, name: &str, count: u32) -> UniformHandle {
        self.intern(name, UniformKind::Vec4, count.max(1))
    }

    fn uniform_sampler(&mut self, name: &str) -> UniformHandle {
        self.intern(name, UniformKind::Sampler, 1)
    }

    fn bind_vertex_buffer(&mut self, buffer: VertexBufferHandle) -> BackendResult<()> {
        self.commands.push(RecordedCommand::BindVertexBuffer(buffer));
        Ok(())
    }

    fn bind_index_buffer(&mut self, buffer: IndexBufferHandle) -> BackendResult<()> {
        self.commands.push(RecordedCommand::BindIndexBuffer(buffer));
        Ok(())
    }

    fn bind_shader(&mut self, shader: ShaderProgramHandle) -> BackendResult<()> {
        if self.failing_shaders.contains(&shader.0) {
            return Err(RenderError::Binding(format!(
                "invalid shader program {}",
                shader.0
            )));
        }
        self.commands.push(RecordedCommand::BindShader(shader));
        Ok(())
    }

    fn bind_texture(
        &mut self,
        slot: u32,
        texture: TextureHandle,
        sampler: UniformHandle,
    ) -> BackendResult<()> {
        self.commands.push(RecordedCommand::BindTexture {
            slot,
            texture,
            sampler: sampler.id(),
        });
        Ok(())
    }

    fn set_uniform(
        &mut self,
        handle: UniformHandle,
        data: &[u8],
        count: u32,
    ) -> BackendResult<()> {
        self.commands.push(RecordedCommand::SetUniform {
            id: handle.id(),
            data: data.to_vec(),
            count,
        });
        Ok(())
    }

    fn set_transform(&mut self, matrix: [[f32; 4]; 4]) -> BackendResult<()> {
        self.commands.push(RecordedCommand::SetTransform(matrix));
        Ok(())
    }

    fn set_transform_table(&mut self, matrices: &[[[f32; 4]; 4]]) -> BackendResult<()> {
        self.commands
            .push(RecordedCommand::SetTransformTable(matrices.to_vec()));
        Ok(())
    }

    fn submit(&mut self, view: ViewId, shader: ShaderProgramHandle) -> BackendResult<()> {
        self.commands.push(RecordedCommand::Submit { view, shader });
        Ok(())
    }
}
