use std::collections::HashMap;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use wgpu::util::DeviceExt;
use wgpu::*;
use winit::window::Window;

use crate::game::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::game::rect::Rect;
use crate::render::canvas::{Canvas, DrawCommand};
use crate::render::target::{SpriteId, TextAlign};
use crate::render::text_renderer::TextRenderer;
use crate::resource_path::find_resource;
use crate::shaders::SPRITE_SHADER;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl SpriteVertex {
    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x2,
                },
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x2,
                },
                VertexAttribute {
                    offset: (std::mem::size_of::<[f32; 2]>() * 2) as BufferAddress,
                    shader_location: 2,
                    format: VertexFormat::Float32x4,
                },
            ],
        }
    }
}

pub struct WgpuRenderer {
    pub device: Arc<Device>,
    pub queue: Arc<Queue>,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
}

impl WgpuRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, String> {
        let size = window.inner_size();

        let instance = Instance::new(InstanceDescriptor {
            backends: Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| format!("Failed to create surface: {:?}", e))?;

        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| "Failed to find an appropriate adapter".to_string())?;

        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    required_features: Features::empty(),
                    required_limits: Limits::default(),
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| format!("Failed to create device: {:?}", e))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
            surface,
            surface_config,
            size,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.surface_config.width = new_size.width;
            self.surface_config.height = new_size.height;
            self.surface.configure(&self.device, &self.surface_config);
        }
    }

    pub fn begin_frame(&mut self) -> Option<SurfaceTexture> {
        self.surface.get_current_texture().ok()
    }
}

struct LoadedTexture {
    bind_group: BindGroup,
    width: u32,
    height: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum TextureKey {
    Sprite(SpriteId),
    White,
}

/// Replays a recorded `Canvas` as textured quads in submission order,
/// batching consecutive draws that share a texture.
pub struct SpriteRenderer {
    device: Arc<Device>,
    queue: Arc<Queue>,
    pipeline: RenderPipeline,
    bind_group_layout: BindGroupLayout,
    textures: HashMap<TextureKey, LoadedTexture>,
    text: Option<TextRenderer>,
}

impl SpriteRenderer {
    pub fn new(device: Arc<Device>, queue: Arc<Queue>, surface_format: TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Sprite Bind Group Layout"),
            entries: &[
                BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Texture {
                        sample_type: TextureSampleType::Float { filterable: true },
                        view_dimension: TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 1,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Sampler(SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: ShaderSource::Wgsl(SPRITE_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("Sprite Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[SpriteVertex::desc()],
                compilation_options: PipelineCompilationOptions::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(ColorTargetState {
                    format: surface_format,
                    blend: Some(BlendState::ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: PipelineCompilationOptions::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let text = match TextRenderer::new(device.clone(), queue.clone(), surface_format) {
            Ok(t) => Some(t),
            Err(e) => {
                eprintln!("Text rendering disabled: {}", e);
                None
            }
        };

        let mut renderer = Self {
            device,
            queue,
            pipeline,
            bind_group_layout,
            textures: HashMap::new(),
            text,
        };
        renderer.create_white_texture();
        renderer
    }

    /// Load every sprite sheet up front; a missing file gets a loud warning
    /// and a placeholder so the game still runs.
    pub fn load_all_textures(&mut self) {
        for sprite in SpriteId::ALL {
            let loaded = find_resource(sprite.asset_path())
                .and_then(|path| image::open(path).ok())
                .map(|img| img.to_rgba8());

            let texture = match loaded {
                Some(img) => {
                    let (w, h) = (img.width(), img.height());
                    self.upload_texture(&img, w, h)
                }
                None => {
                    eprintln!("Missing sprite sheet: {}", sprite.asset_path());
                    self.placeholder_texture()
                }
            };
            self.textures.insert(TextureKey::Sprite(sprite), texture);
        }
    }

    fn create_white_texture(&mut self) {
        let white = self.upload_texture(&[255u8; 4], 1, 1);
        self.textures.insert(TextureKey::White, white);
    }

    fn placeholder_texture(&self) -> LoadedTexture {
        // 2x2 magenta/black checker, impossible to miss on screen.
        let pixels: [u8; 16] = [
            255, 0, 255, 255, 0, 0, 0, 255, //
            0, 0, 0, 255, 255, 0, 255, 255,
        ];
        self.upload_texture(&pixels, 2, 2)
    }

    fn upload_texture(&self, pixels: &[u8], width: u32, height: u32) -> LoadedTexture {
        let size = Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = self.device.create_texture(&TextureDescriptor {
            label: Some("Sprite Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.queue.write_texture(
            ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: Origin3d::ZERO,
                aspect: TextureAspect::All,
            },
            pixels,
            ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&TextureViewDescriptor::default());
        let sampler = self.device.create_sampler(&SamplerDescriptor {
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            address_mode_w: AddressMode::ClampToEdge,
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mipmap_filter: FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = self.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Sprite Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&sampler),
                },
            ],
        });

        LoadedTexture {
            bind_group,
            width,
            height,
        }
    }

    fn to_ndc(p: Vec2) -> [f32; 2] {
        [
            p.x / WORLD_WIDTH * 2.0 - 1.0,
            1.0 - p.y / WORLD_HEIGHT * 2.0,
        ]
    }

    fn push_quad(
        vertices: &mut Vec<SpriteVertex>,
        indices: &mut Vec<u32>,
        corners: [Vec2; 4],
        uvs: [[f32; 2]; 4],
        color: [f32; 4],
    ) {
        let base = vertices.len() as u32;
        for (corner, uv) in corners.iter().zip(uvs.iter()) {
            vertices.push(SpriteVertex {
                position: Self::to_ndc(*corner),
                uv: *uv,
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn src_uvs(&self, key: TextureKey, src: Rect) -> [[f32; 2]; 4] {
        let (tw, th) = self
            .textures
            .get(&key)
            .map(|t| (t.width as f32, t.height as f32))
            .unwrap_or((1.0, 1.0));
        let u0 = src.x / tw;
        let v0 = src.y / th;
        let u1 = (src.x + src.w) / tw;
        let v1 = (src.y + src.h) / th;
        [[u0, v0], [u1, v0], [u1, v1], [u0, v1]]
    }

    /// Draw one frame: clear, replay the canvas in order, then the text
    /// overlay, then present.
    pub fn render(&mut self, canvas: &Canvas, renderer: &mut WgpuRenderer) {
        let frame = match renderer.begin_frame() {
            Some(f) => f,
            None => return,
        };
        let view = frame.texture.create_view(&TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        let mut vertices: Vec<SpriteVertex> = Vec::new();
        let mut indices: Vec<u32> = Vec::new();
        let mut batches: Vec<(TextureKey, std::ops::Range<u32>)> = Vec::new();

        let mut push_batched =
            |key: TextureKey,
             vertices: &mut Vec<SpriteVertex>,
             indices: &mut Vec<u32>,
             batches: &mut Vec<(TextureKey, std::ops::Range<u32>)>,
             corners: [Vec2; 4],
             uvs: [[f32; 2]; 4],
             color: [f32; 4]| {
                let start = indices.len() as u32;
                Self::push_quad(vertices, indices, corners, uvs, color);
                let end = indices.len() as u32;
                match batches.last_mut() {
                    Some((last_key, range)) if *last_key == key => range.end = end,
                    _ => batches.push((key, start..end)),
                }
            };

        for command in &canvas.commands {
            match command {
                DrawCommand::Sprite {
                    sprite,
                    src,
                    corners,
                } => {
                    let key = TextureKey::Sprite(*sprite);
                    let uvs = self.src_uvs(key, *src);
                    push_batched(
                        key,
                        &mut vertices,
                        &mut indices,
                        &mut batches,
                        *corners,
                        uvs,
                        [1.0, 1.0, 1.0, 1.0],
                    );
                }
                DrawCommand::Fill { dst, color } => {
                    let corners = [
                        Vec2::new(dst.x, dst.y),
                        Vec2::new(dst.x + dst.w, dst.y),
                        Vec2::new(dst.x + dst.w, dst.y + dst.h),
                        Vec2::new(dst.x, dst.y + dst.h),
                    ];
                    let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
                    push_batched(
                        TextureKey::White,
                        &mut vertices,
                        &mut indices,
                        &mut batches,
                        corners,
                        uvs,
                        *color,
                    );
                }
                DrawCommand::Text { .. } => {}
            }
        }

        let vertex_buffer = self.device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Sprite Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });
        let index_buffer = self.device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: BufferUsages::INDEX,
        });

        {
            let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Sprite Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color {
                            r: 0.02,
                            g: 0.05,
                            b: 0.12,
                            a: 1.0,
                        }),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !indices.is_empty() {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                pass.set_index_buffer(index_buffer.slice(..), IndexFormat::Uint32);
                for (key, range) in &batches {
                    if let Some(texture) = self.textures.get(key) {
                        pass.set_bind_group(0, &texture.bind_group, &[]);
                        pass.draw_indexed(range.clone(), 0, 0..1);
                    }
                }
            }
        }

        if let Some(ref text) = self.text {
            for command in &canvas.commands {
                if let DrawCommand::Text {
                    text: string,
                    x,
                    y,
                    size,
                    color,
                    align,
                } = command
                {
                    let x = match align {
                        TextAlign::Left => *x,
                        TextAlign::Center => *x - text.measure(string, *size) * 0.5,
                    };
                    text.render_text(
                        &mut encoder,
                        &view,
                        string,
                        x,
                        *y,
                        *size,
                        *color,
                        WORLD_WIDTH as u32,
                        WORLD_HEIGHT as u32,
                    );
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }
}
