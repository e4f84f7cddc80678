//! Per-draw uniform descriptors
//!
//! A [`UniformData`] is the unit of per-draw shader parameterization: a
//! named, typed handle plus an owned buffer of 32-bit floats. Descriptors
//! are created fresh each frame by material application, consumed exactly
//! once by the forward pass, and dropped with their entry. Ownership of the
//! backing buffer is exclusive to the descriptor and released exactly once
//! on every exit path.

use crate::render::{RenderError, RenderResult};

/// Largest backing-buffer allocation a descriptor will accept, in floats
///
/// Requests above this indicate malformed material data rather than a
/// legitimate uniform; bone tables go through the entry's transform table
/// instead of a descriptor.
pub const MAX_UNIFORM_FLOATS: usize = 256;

/// Element type of a shader uniform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformKind {
    /// Single float
    Scalar,
    /// Texture sampler slot
    Sampler,
    /// Three-component vector
    Vec3,
    /// Four-component vector
    Vec4,
    /// 4x4 matrix
    Mat4,
}

impl UniformKind {
    /// Number of floats in one element of this kind
    pub const fn element_size(self) -> usize {
        match self {
            Self::Scalar | Self::Sampler => 1,
            Self::Vec3 => 3,
            Self::Vec4 => 4,
            Self::Mat4 => 16,
        }
    }
}

/// Opaque, typed shader-uniform identifier
///
/// Obtained from a backend by name (see
/// [`crate::render::RenderBackend::uniform_vec3`]); carries the element
/// kind and the declared array capacity so descriptor sizes can be checked
/// without consulting the backend again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformHandle {
    id: u64,
    kind: UniformKind,
    count: u32,
}

impl UniformHandle {
    /// Create a handle; backends call this when interning a name
    pub fn new(id: u64, kind: UniformKind, count: u32) -> Self {
        Self { id, kind, count }
    }

    /// Backend-assigned identifier
    pub fn id(self) -> u64 {
        self.id
    }

    /// Element kind
    pub fn kind(self) -> UniformKind {
        self.kind
    }

    /// Declared array capacity (1 for non-arrays)
    pub fn count(self) -> u32 {
        self.count
    }
}

/// Named, typed, owned buffer of shader parameter data
///
/// The buffer length is always exactly `kind.element_size() * count`; a
/// descriptor with `count > 0` never has an empty buffer. The buffer is
/// freed when the descriptor is dropped, on every path.
#[derive(Debug, Clone)]
pub struct UniformData {
    handle: UniformHandle,
    data: Vec<f32>,
    count: u32,
}

impl UniformData {
    /// Allocate a zero-filled descriptor for `count` elements of the
    /// handle's kind
    ///
    /// `count` is the live element count (e.g. the number of lights
    /// packed) and may be less than the handle's declared capacity. Fails
    /// with [`RenderError::UniformAllocation`] when the requested size is
    /// zero or exceeds [`MAX_UNIFORM_FLOATS`].
    pub fn new(handle: UniformHandle, count: u32) -> RenderResult<Self> {
        debug_assert!(
            count <= handle.count(),
            "live count {count} exceeds declared capacity {}",
            handle.count()
        );
        let size = handle.kind().element_size() * count as usize;
        if size == 0 || size > MAX_UNIFORM_FLOATS {
            return Err(RenderError::UniformAllocation {
                requested: size,
                cap: MAX_UNIFORM_FLOATS,
            });
        }
        Ok(Self {
            handle,
            data: vec![0.0; size],
            count,
        })
    }

    /// Allocate a descriptor and fill it with `values` in one step
    pub fn from_values(handle: UniformHandle, count: u32, values: &[f32]) -> RenderResult<Self> {
        let mut descriptor = Self::new(handle, count)?;
        descriptor.write(values)?;
        Ok(descriptor)
    }

    /// Copy `values` into the backing buffer
    ///
    /// The length must equal `kind.element_size() * count` exactly;
    /// anything else fails with [`RenderError::SizeMismatch`] and leaves
    /// the buffer untouched.
    pub fn write(&mut self, values: &[f32]) -> RenderResult<()> {
        if values.len() != self.data.len() {
            return Err(RenderError::SizeMismatch {
                expected: self.data.len(),
                actual: values.len(),
            });
        }
        self.data.copy_from_slice(values);
        Ok(())
    }

    /// The typed handle this descriptor uploads to
    pub fn handle(&self) -> UniformHandle {
        self.handle
    }

    /// Live element count
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The packed float data
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The packed data as the byte blob handed to the GPU layer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}
