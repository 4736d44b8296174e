use std::{borrow::Cow, path::Path, sync::Arc, time::Instant};

use glam::{Mat4, Quat};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::{
    camera::Camera,
    config::Config,
    error::RenderError,
    input::InputState,
    light::Light,
    mesh::generate_sphere,
    shader_types::{GpuVertex, Uniforms},
    texture::Texture,
    transform::Transform,
};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub struct State {
    window: Arc<Window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    size: winit::dpi::PhysicalSize<u32>,
    surface: wgpu::Surface<'static>,
    surface_format: wgpu::TextureFormat,
    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,

    uniforms: Uniforms,
    uniform_buf: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,

    pub camera: Camera,
    pub input: InputState,
    globe: Transform,
    light: Light,
    start_time: Instant,
    last_frame: Instant,
}

impl State {
    pub async fn new(window: Arc<Window>, config: &Config) -> Result<State, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await?;
        log::info!("using adapter {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        let mut size = window.inner_size();
        size.width = size.width.max(1);
        size.height = size.height.max(1);

        let cap = surface.get_capabilities(&adapter);
        let surface_format = preferred_surface_format(&cap.formats)?;

        let mut camera = config.camera;
        camera.set_aspect(size.width, size.height);

        let uniforms = Uniforms::default();
        let uniform_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let vertex_shader = load_shader(&device, &config.vertex_shader).await?;
        let fragment_shader = load_shader(&device, &config.fragment_shader).await?;

        log::info!("linking render pipeline");
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("globe_pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &vertex_shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[GpuVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(surface_format.add_srgb_suffix().into())],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
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
            multiview: None,
            cache: None,
        });
        if let Some(err) = device.pop_error_scope().await {
            return Err(RenderError::LinkPipeline(err.to_string()));
        }

        let earth = Texture::load(&device, &queue, &config.earth_texture)?;
        let clouds = Texture::load(&device, &queue, &config.clouds_texture)?;
        let sampler = Texture::sampler(&device);

        let bind_group_layout = pipeline.get_bind_group_layout(0);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globe_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&earth.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&clouds.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let sphere = generate_sphere(config.sphere_resolution);
        log::info!(
            "sphere has {} vertices and {} indices",
            sphere.vertex_count(),
            sphere.indices.len()
        );

        let vertices = sphere
            .vertices
            .iter()
            .map(GpuVertex::from)
            .collect::<Vec<_>>();
        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Indices"),
            contents: bytemuck::cast_slice(&sphere.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let depth_view = create_depth_view(&device, size);
        let now = Instant::now();

        let state = State {
            window,
            device,
            queue,
            size,
            surface,
            surface_format,
            depth_view,
            clear_color: config.clear_color,
            uniforms,
            uniform_buf,
            pipeline,
            bind_group,
            vertex_buf,
            index_buf,
            index_count: sphere.indices.len() as u32,
            camera,
            input: InputState::default(),
            // the mesh's poles lie on Z, turn them onto Y
            globe: Transform::from_rotation(Quat::from_rotation_x(-90.0_f32.to_radians())),
            light: config.light,
            start_time: now,
            last_frame: now,
        };

        state.configure_surface();

        Ok(state)
    }

    fn configure_surface(&self) {
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: self.surface_format,
            view_formats: vec![self.surface_format.add_srgb_suffix()],
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            width: self.size.width,
            height: self.size.height,
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::AutoVsync,
        };
        self.surface.configure(&self.device, &surface_config);
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        log::debug!("resizing to {}x{}", new_size.width, new_size.height);

        self.size = new_size;

        self.configure_surface();
        self.depth_view = create_depth_view(&self.device, self.size);
        self.camera.set_aspect(self.size.width, self.size.height);
    }

    fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.input.apply(&mut self.camera, dt);

        let view = self.camera.view();
        let model = Mat4::from(&self.globe);

        self.uniforms = Uniforms {
            model_view_projection: self.camera.view_projection() * model,
            normal_matrix: self.globe.normal_matrix(view),
            light_direction: self.light.view_direction(view),
            light_intensity: self.light.intensity,
            time: now.duration_since(self.start_time).as_secs_f32(),
            ..self.uniforms
        };
        self.queue
            .write_buffer(&self.uniform_buf, 0, bytemuck::cast_slice(&[self.uniforms]));
    }

    pub fn render(&mut self) {
        self.update();

        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                self.configure_surface();
                return;
            }
            Err(err) => {
                log::warn!("skipping frame: {err}");
                return;
            }
        };
        let texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.surface_format.add_srgb_suffix()),
                ..Default::default()
            });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor::default());

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: None,
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &texture_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
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

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, Some(&self.bind_group), &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        render_pass.set_index_buffer(self.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);

        drop(render_pass);

        self.queue.submit([encoder.finish()]);
        self.window.pre_present_notify();
        surface_texture.present();
    }

    pub fn get_window(&self) -> &Window {
        &self.window
    }
}

/// The first format the surface reports, which wgpu orders by preference
pub fn preferred_surface_format(
    formats: &[wgpu::TextureFormat],
) -> Result<wgpu::TextureFormat, RenderError> {
    formats.first().copied().ok_or(RenderError::NoSurfaceFormat)
}

async fn load_shader(device: &wgpu::Device, path: &Path) -> Result<wgpu::ShaderModule, RenderError> {
    let source = std::fs::read_to_string(path).map_err(|source| RenderError::ReadShader {
        path: path.to_owned(),
        source,
    })?;

    log::info!("compiling {}", path.display());
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: path.to_str(),
        source: wgpu::ShaderSource::Wgsl(Cow::Owned(source)),
    });
    if let Some(err) = device.pop_error_scope().await {
        return Err(RenderError::CompileShader {
            path: path.to_owned(),
            message: err.to_string(),
        });
    }

    Ok(module)
}

fn create_depth_view(
    device: &wgpu::Device,
    size: winit::dpi::PhysicalSize<u32>,
) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some("depth"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}
