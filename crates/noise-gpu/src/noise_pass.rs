use noise_core::FrameParams;
use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, TextureView};

use crate::params::NoiseUniforms;

/// The per-pixel noise shader: an oversized full-screen triangle in the
/// vertex stage, a sine-hash greyscale fragment stage, and one 16-byte
/// uniform block at group 0 binding 0 shared by both.
pub const NOISE_WGSL: &str = include_str!("../shaders/noise.wgsl");

/// Holds the noise render pipeline plus the GPU resources it reads: the
/// uniform buffer behind the `Params` block and its bind group.
///
/// Nothing here depends on the target resolution — resizes only change what
/// the host writes into the uniform buffer, so the pass is built once.
pub struct NoisePass {
    pipeline: RenderPipeline,
    uniform_buf: Buffer,
    bind_group: BindGroup,
}

impl NoisePass {
    pub fn new(device: &Device, surface_format: wgpu::TextureFormat) -> Self {
        // --- bind group layout -------------------------------------------------
        // binding 0 : Params uniform buffer, visible to both stages (only the
        // fragment stage reads it today; the layout reserves room to grow).
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("noise_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("noise_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // --- uniform buffer ----------------------------------------------------
        let uniform_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("noise_uniforms"),
            size: std::mem::size_of::<NoiseUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("noise_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });

        // --- pipeline ----------------------------------------------------------
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("noise"),
            source: wgpu::ShaderSource::Wgsl(NOISE_WGSL.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("noise_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        log::debug!("noise pass created for {surface_format:?}");

        Self {
            pipeline,
            uniform_buf,
            bind_group,
        }
    }

    /// Rewrite the uniform block for the coming frame. The host calls this
    /// before recording the pass; the device never sees a partial update.
    pub fn upload(&self, queue: &Queue, params: &FrameParams) {
        let uniforms = NoiseUniforms::from_params(params);
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the noise pass into `encoder`, writing `target` edge to edge.
    pub fn record(&self, encoder: &mut wgpu::CommandEncoder, target: &TextureView) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("noise-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..3, 0..1); // oversized triangle, no vertex buffer
    }
}

// ---------------------------------------------------------------------------
// Tests — the WGSL contract, checked through naga (no device required)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::NOISE_WGSL;

    fn parse() -> naga::Module {
        naga::front::wgsl::parse_str(NOISE_WGSL).expect("noise.wgsl should parse")
    }

    #[test]
    fn shader_validates() {
        let module = parse();
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        )
        .validate(&module)
        .expect("noise.wgsl should validate");
    }

    #[test]
    fn shader_exports_exactly_the_two_entry_points() {
        let module = parse();
        let stages: Vec<_> = module
            .entry_points
            .iter()
            .map(|ep| (ep.name.as_str(), ep.stage))
            .collect();
        assert_eq!(stages.len(), 2, "got {stages:?}");
        assert!(stages.contains(&("vs_main", naga::ShaderStage::Vertex)));
        assert!(stages.contains(&("fs_main", naga::ShaderStage::Fragment)));
    }

    #[test]
    fn params_block_sits_at_group_zero_binding_zero() {
        let module = parse();
        let uniforms: Vec<_> = module
            .global_variables
            .iter()
            .filter(|(_, var)| var.space == naga::AddressSpace::Uniform)
            .collect();
        assert_eq!(uniforms.len(), 1, "exactly one uniform block expected");
        let binding = uniforms[0].1.binding.as_ref().expect("resource binding");
        assert_eq!((binding.group, binding.binding), (0, 0));
    }

    #[test]
    fn params_block_spans_sixteen_bytes() {
        // The WGSL block and `NoiseUniforms` must agree byte for byte.
        let module = parse();
        let (_, var) = module
            .global_variables
            .iter()
            .find(|(_, var)| var.space == naga::AddressSpace::Uniform)
            .expect("uniform block");
        let size = module.types[var.ty].inner.size(module.to_ctx());
        assert_eq!(size as usize, std::mem::size_of::<super::NoiseUniforms>());
    }
}
