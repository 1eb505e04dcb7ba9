//! Instanced forward renderer shared by the web and native frontends.
//!
//! The frontends own the surface; this type owns the pipeline, one static
//! mesh per [`MeshKind`] and one growable instance buffer per mesh kind.

use crate::constants::MAX_POINT_LIGHTS;
use crate::instance::{FrameOutput, InstanceRaw, MeshKind};
use crate::mesh::{mesh_for, Vertex};
use crate::state::Camera;
use crate::theme::Theme;
use glam::Vec3;
use wgpu::util::DeviceExt;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const FOG_NEAR: f32 = 20.0;
const FOG_FAR: f32 = 75.0;
const AMBIENT_INTENSITY: f32 = 1.3;
const KEY_LIGHT_STRENGTH: f32 = 0.55;
const KEY_LIGHT_POSITION: [f32; 3] = [15.0, 10.0, 5.0];

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
struct LightRaw {
    position_range: [f32; 4],
    color_intensity: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    fog_color: [f32; 4],
    ambient: [f32; 4],
    key_dir: [f32; 4],
    params: [f32; 4],
    lights: [LightRaw; MAX_POINT_LIGHTS],
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

struct InstanceSlot {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: u32,
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4
];

fn create_depth(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_instance_buffer(device: &wgpu::Device, kind: MeshKind, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("instances_{:?}", kind)),
        size: (capacity.max(1) * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
    instances: Vec<InstanceSlot>,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl SceneRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &VERTEX_ATTRS,
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<InstanceRaw>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &INSTANCE_ATTRS,
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let meshes = MeshKind::ALL
            .iter()
            .map(|kind| {
                let data = mesh_for(*kind);
                GpuMesh {
                    vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some(&format!("vertices_{:?}", kind)),
                        contents: bytemuck::cast_slice(&data.vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
                    index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some(&format!("indices_{:?}", kind)),
                        contents: bytemuck::cast_slice(&data.indices),
                        usage: wgpu::BufferUsages::INDEX,
                    }),
                    index_count: data.index_count(),
                }
            })
            .collect();
        let instances = MeshKind::ALL
            .iter()
            .map(|kind| InstanceSlot {
                buffer: create_instance_buffer(device, *kind, 64),
                capacity: 64,
                len: 0,
            })
            .collect();

        log::info!("[render] pipeline ready {}x{} format={:?}", width, height, format);
        Self {
            pipeline,
            globals_buffer,
            globals_bind_group,
            meshes,
            instances,
            depth_view: create_depth(device, width, height),
            width,
            height,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.depth_view = create_depth(device, width, height);
        }
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, frame: &FrameOutput) {
        for (kind, batch) in frame.batches() {
            let slot = &mut self.instances[kind.index()];
            if batch.len() > slot.capacity {
                let capacity = batch.len().next_power_of_two();
                slot.buffer = create_instance_buffer(device, kind, capacity);
                slot.capacity = capacity;
                log::debug!("[render] grew {:?} instances to {}", kind, capacity);
            }
            if !batch.is_empty() {
                queue.write_buffer(&slot.buffer, 0, bytemuck::cast_slice(batch));
            }
            slot.len = batch.len() as u32;
        }
    }

    fn globals(camera: &Camera, theme: &Theme, frame: &FrameOutput) -> Globals {
        let mut lights = [LightRaw::default(); MAX_POINT_LIGHTS];
        for (dst, l) in lights.iter_mut().zip(frame.lights.iter()) {
            dst.position_range = l.position.extend(l.range).to_array();
            dst.color_intensity = l.color.with_alpha(l.intensity);
        }
        let key = Vec3::from(KEY_LIGHT_POSITION).normalize();
        Globals {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            fog_color: theme.fog.with_alpha(1.0),
            ambient: theme.bloom.scaled(AMBIENT_INTENSITY).with_alpha(KEY_LIGHT_STRENGTH),
            key_dir: key.extend(0.0).to_array(),
            params: [frame.lights.len() as f32, FOG_NEAR, FOG_FAR, 0.0],
            lights,
        }
    }

    /// Draw one frame into `target`, clearing to the theme background.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        frame: &FrameOutput,
        camera: &Camera,
        theme: &Theme,
    ) {
        self.upload(device, queue, frame);
        let globals = Self::globals(camera, theme, frame);
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let [r, g, b] = theme.background.0;
        let clear = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("scene_encoder"),
        });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            for kind in MeshKind::ALL {
                let slot = &self.instances[kind.index()];
                if slot.len == 0 {
                    continue;
                }
                let mesh = &self.meshes[kind.index()];
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, slot.buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..slot.len);
            }
        }
        queue.submit(Some(encoder.finish()));
    }
}
