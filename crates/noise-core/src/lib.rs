pub mod fullscreen;
pub mod noise;

use glam::Vec2;

// ---------------------------------------------------------------------------
// FrameParams — the host-owned value behind the uniform block
// ---------------------------------------------------------------------------

/// Per-frame parameters the host writes before each draw call.
///
/// The device only ever reads these; the host fully rewrites the backing
/// uniform buffer once per frame (and on resize) before the draw is issued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Render target dimensions in pixels. Positive and finite — enforced
    /// by [`FrameParams::new`].
    pub size: Vec2,
    /// Frame index used as the noise seed; wraps at `u32::MAX`.
    pub frame: u32,
}

impl FrameParams {
    /// Build params for a render target of the given pixel dimensions.
    ///
    /// A zero, negative, or non-finite dimension yields `None`; such a
    /// surface must never reach the device.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        if !size_valid(width, height) {
            return None;
        }
        Some(Self {
            size: Vec2::new(width, height),
            frame: 0,
        })
    }

    /// Advance the frame counter by one, wrapping at `u32::MAX`.
    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Update the target size, preserving the frame counter.
    ///
    /// Returns `false` and leaves `self` untouched for degenerate sizes, so
    /// a minimized window never produces an invalid uniform block.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if !size_valid(width, height) {
            return false;
        }
        self.size = Vec2::new(width, height);
        true
    }

    /// The noise seed for the current frame.
    pub fn seed(&self) -> f32 {
        self.frame as f32
    }

    /// Map an interpolated UV in \[0, 1\]² back to pixel coordinates.
    pub fn pixel_coord(&self, uv: Vec2) -> Vec2 {
        uv * self.size
    }
}

/// True when both dimensions are usable as a render target size.
pub fn size_valid(width: f32, height: f32) -> bool {
    width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
