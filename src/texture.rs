use std::path::Path;

use image::{RgbaImage, imageops::FilterType};

use crate::error::RenderError;

pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Decodes an image file into RGBA8 with the first row at the bottom, so a
/// texture coordinate of v = 0 samples the bottom edge of the picture.
pub fn decode(path: &Path) -> Result<RgbaImage, RenderError> {
    let image = image::open(path).map_err(|source| RenderError::LoadTexture {
        path: path.to_owned(),
        source,
    })?;

    Ok(image.flipv().into_rgba8())
}

/// Builds every mip level down to 1x1, starting with `base` itself
pub fn mip_chain(base: RgbaImage) -> Vec<RgbaImage> {
    let mut levels = vec![base];

    loop {
        let last = &levels[levels.len() - 1];
        let (width, height) = last.dimensions();
        if width <= 1 && height <= 1 {
            break;
        }

        let next = image::imageops::resize(
            last,
            (width / 2).max(1),
            (height / 2).max(1),
            FilterType::Triangle,
        );
        levels.push(next);
    }

    levels
}

pub struct Texture {
    pub view: wgpu::TextureView,
}

impl Texture {
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<Self, RenderError> {
        log::info!("loading texture {}", path.display());

        let levels = mip_chain(decode(path)?);
        let (width, height) = levels[0].dimensions();

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: path.to_str(),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in levels.iter().enumerate() {
            let (width, height) = level.dimensions();
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                level.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * width),
                    rows_per_image: Some(height),
                },
                wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Ok(Self { view })
    }

    pub fn sampler(device: &wgpu::Device) -> wgpu::Sampler {
        device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("globe_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        })
    }
}
