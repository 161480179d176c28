pub mod boundary;
pub mod camera;
pub mod config;
pub mod constants;
pub mod field;
pub mod input;
pub mod membrane;
pub mod mesh;
pub mod uniforms;
pub mod waves;

pub static MEMBRANE_WGSL: &str = include_str!("../shaders/membrane.wgsl");

pub use boundary::BoundaryEnforcer;
pub use camera::{Camera, CameraSettler};
pub use config::{ConfigError, NoiseLayer, SimulationConfig};
pub use constants::*;
pub use field::{ClickImpulse, DisplacementField, FieldInputs, VertexRecord, WaveShape};
pub use input::{ease_out_cubic, Ease, PointerTracker, Viewport};
pub use membrane::Membrane;
pub use mesh::{DeformableMesh, GridMesh, MeshVertex};
pub use uniforms::{PulseChannel, PulseRequest, ShaderUniforms, NO_PULSE};
pub use waves::{WaveEmitter, WaveOrigin};
