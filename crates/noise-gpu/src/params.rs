use glam::Vec2;
use noise_core::FrameParams;

/// Per-frame data uploaded to the GPU as the sole uniform buffer.
/// Must match the `Params` struct in `shaders/noise.wgsl`.
/// `repr(C)` + `bytemuck` ensures safe casting to `&[u8]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NoiseUniforms {
    /// Render target width and height in pixels.
    pub size: [f32; 2],
    /// Frame index, consumed as the noise seed.
    pub frame: u32,
    pub _pad: u32, // keep 16-byte alignment
}

impl NoiseUniforms {
    pub fn new(size: Vec2, frame: u32) -> Self {
        Self {
            size: size.to_array(),
            frame,
            _pad: 0,
        }
    }

    pub fn from_params(params: &FrameParams) -> Self {
        Self::new(params.size, params.frame)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
