// Host-side constants: DOM ids, background texture and clear colour

pub const CANVAS_ID: &str = "app-canvas";

// Text texture refracted through the membrane
pub const BACKGROUND_TEXTURE_SIZE: u32 = 1024;
pub const BACKGROUND_TEXT: &str = "OBSIDIAN MEMBRANE";
pub const BACKGROUND_FONT: &str = "bold 50px Arial";
pub const BACKGROUND_TEXT_OFFSET: [f64; 2] = [225.0, -200.0]; // from texture centre, px

// #0B0C0C, linearised for the sRGB surface
pub const CLEAR_COLOR: [f64; 3] = [0.0033, 0.0037, 0.0037];

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
