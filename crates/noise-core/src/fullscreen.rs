use glam::{Vec2, Vec4};

// ---------------------------------------------------------------------------
// Oversized full-screen triangle — CPU mirror of `vs_main`
// ---------------------------------------------------------------------------

/// Clip-space corners of the oversized full-screen triangle.
///
/// The apex extends past the viewport on two sides so that a single triangle
/// covers all of the \[-1, 1\]² square — no quad, no index buffer, no
/// vertex buffer at all.
pub const TRIANGLE: [Vec2; 3] = [
    Vec2::new(-1.0, -3.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(3.0, 1.0),
];

/// What the vertex stage hands the rasterizer for one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullscreenVertex {
    /// Homogeneous clip-space position, z = 0, w = 1.
    pub position: Vec4,
    /// Maps the visible square to \[0, 1\]². Leaves that range at the
    /// off-screen apex, which is never rasterized.
    pub uv: Vec2,
}

/// The vertex rule: `index` ∈ {0, 1, 2} selects a table entry.
///
/// The pipeline guarantees the index range (the draw call is `0..3`), so an
/// out-of-range index is a caller bug and panics like any slice overrun.
pub fn vertex(index: u32) -> FullscreenVertex {
    let p = TRIANGLE[index as usize];
    FullscreenVertex {
        position: Vec4::new(p.x, p.y, 0.0, 1.0),
        uv: p * 0.5 + Vec2::splat(0.5),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
