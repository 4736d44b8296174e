use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to open graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface supports no texture formats on this adapter")]
    NoSurfaceFormat,
    #[error("failed to read shader {}: {source}", path.display())]
    ReadShader {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("shader {} failed to compile:\n{message}", path.display())]
    CompileShader { path: PathBuf, message: String },
    #[error("failed to link render pipeline:\n{0}")]
    LinkPipeline(String),
    #[error("failed to load texture {}: {source}", path.display())]
    LoadTexture {
        path: PathBuf,
        source: image::ImageError,
    },
}
