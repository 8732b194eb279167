use crate::constants::{AMBIENT_LIGHT, CLEAR_COLOR};
use lumen_core::constants::MAX_LIGHTS;
use lumen_core::{Camera, HeightMap, MeshSpec, SceneFrame};
use web_sys as web;

mod helpers;
mod mesh;
mod targets;

use mesh::{GpuMesh, VERTEX_LAYOUT};
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightPacked {
    pos_intensity: [f32; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    lights: [LightPacked; MAX_LIGHTS],
    // light count, ambient
    params: [f32; 4],
}

impl FrameUniforms {
    fn new(camera: &Camera, frame: &SceneFrame) -> Self {
        let mut lights = [LightPacked::default(); MAX_LIGHTS];
        let count = frame.lights.len().min(MAX_LIGHTS);
        for (slot, light) in lights.iter_mut().zip(frame.lights.iter()) {
            *slot = LightPacked {
                pos_intensity: light.position.extend(light.intensity).to_array(),
                color: light.color.extend(1.0).to_array(),
            };
        }
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            lights,
            params: [count as f32, AMBIENT_LIGHT, 0.0, 0.0],
        }
    }
}

// ===================== Shared device =====================

/// Adapter, device and queue shared by every canvas on the page.
pub struct Gpu {
    instance: wgpu::Instance,
    device: wgpu::Device,
    queue: wgpu::Queue,
    adapter: wgpu::Adapter,
    // Kept alive for the bind groups that sample it
    _height_tex: wgpu::Texture,
    height_view: wgpu::TextureView,
    height_sampler: wgpu::Sampler,
}

impl Gpu {
    /// Acquire an adapter compatible with `canvas` and return the surface made for it.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        heightmap: &HeightMap,
    ) -> anyhow::Result<(Self, wgpu::Surface<'static>)> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; older WebGPU implementations reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let (height_tex, height_view) = helpers::create_height_texture(&device, &queue, heightmap);
        let height_sampler = helpers::create_repeat_sampler(&device);
        log::info!("[gpu] adapter: {:?}", adapter.get_info().name);

        Ok((
            Self {
                instance,
                device,
                queue,
                adapter,
                _height_tex: height_tex,
                height_view,
                height_sampler,
            },
            surface,
        ))
    }

    pub fn create_surface(
        &self,
        canvas: &web::HtmlCanvasElement,
    ) -> anyhow::Result<wgpu::Surface<'static>> {
        Ok(self
            .instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?)
    }
}

// ===================== Per-canvas renderer =====================

pub struct SceneRenderer {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    // sRGB view of the surface texture; the shader writes linear colour
    view_format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    depth: DepthTarget,
    frame_uniforms: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
    camera: Camera,
}

impl SceneRenderer {
    pub fn new(
        gpu: &Gpu,
        surface: wgpu::Surface<'static>,
        canvas: &web::HtmlCanvasElement,
        specs: &[MeshSpec],
        camera_z: f32,
    ) -> anyhow::Result<Self> {
        let device = &gpu.device;
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let caps = surface.get_capabilities(&gpu.adapter);
        let (format, view_format) = helpers::pick_surface_formats(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas: prefer premultiplied alpha so the page shows through
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format == format {
                vec![]
            } else {
                vec![view_format]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(lumen_core::SCENE_WGSL.into()),
        });
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[
                helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let mesh_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&frame_bgl, &mesh_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[VERTEX_LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // Open meshes (the faceted knot, the plane) are seen from both sides
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: helpers::DEPTH_FORMAT,
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
                    format: view_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let frame_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: frame_uniforms.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&gpu.height_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&gpu.height_sampler),
                },
            ],
        });

        let meshes = specs
            .iter()
            .map(|spec| GpuMesh::new(device, &mesh_bgl, spec))
            .collect();

        let mut camera = Camera::looking_at_origin(camera_z, 1.0);
        camera.set_viewport(width, height);

        Ok(Self {
            surface,
            config,
            view_format,
            pipeline,
            depth: DepthTarget::new(device, width, height),
            frame_uniforms,
            frame_bind_group,
            meshes,
            camera,
        })
    }

    pub fn resize_if_needed(&mut self, gpu: &Gpu, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&gpu.device, &self.config);
            self.depth.recreate(&gpu.device, width, height);
            self.camera.set_viewport(width, height);
        }
    }

    /// Reconfigure after the surface was lost or went out of date.
    pub fn reconfigure(&mut self, gpu: &Gpu) {
        self.surface.configure(&gpu.device, &self.config);
    }

    pub fn render(&mut self, gpu: &Gpu, frame: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        gpu.queue.write_buffer(
            &self.frame_uniforms,
            0,
            bytemuck::bytes_of(&FrameUniforms::new(&self.camera, frame)),
        );
        if frame.meshes.len() != self.meshes.len() {
            log::warn!(
                "[gpu] frame has {} meshes, renderer has {} (first: {})",
                frame.meshes.len(),
                self.meshes.len(),
                self.meshes.first().map(|m| m.name).unwrap_or("-")
            );
        }
        for (mesh, draw) in self.meshes.iter().zip(frame.meshes.iter()) {
            mesh.write(&gpu.queue, draw);
        }

        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
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
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            for mesh in self.meshes.iter().take(frame.meshes.len()) {
                rpass.set_bind_group(1, &mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        gpu.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
