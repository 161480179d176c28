//! Frame driver owning every piece of simulation state for one membrane.
//!
//! Event handlers call `pointer_*`; they only touch pointer state and the
//! pending click/pulse slots. [`Membrane::update`] then runs one pass in a
//! fixed order: input, wave emission, field step (boundary included),
//! geometry commit, camera, uniforms.

use crate::camera::{Camera, CameraSettler};
use crate::config::{validate_extent, ConfigError, SimulationConfig};
use crate::constants::{CLICK_SHADER_PULSE_STRENGTH, MAX_FRAME_DT_SEC, MESH_VIEWPORT_SCALE};
use crate::field::{ClickImpulse, DisplacementField, FieldInputs};
use crate::input::{PointerTracker, Viewport};
use crate::mesh::{self, GridMesh, MeshVertex};
use crate::uniforms::{PulseChannel, PulseRequest, ShaderUniforms};
use crate::waves::{WaveEmitter, WaveOrigin};
use glam::Vec2;

pub struct Membrane {
    config: SimulationConfig,
    viewport: Viewport,
    time: f32,
    tracker: PointerTracker,
    emitter: WaveEmitter,
    field: DisplacementField,
    mesh: GridMesh,
    settler: CameraSettler,
    camera: Camera,
    click: Option<ClickImpulse>,
    pending_click: Option<Vec2>,
    pending_pulse: Option<PulseRequest>,
    pulse: PulseChannel,
    uniforms: ShaderUniforms,
}

impl Membrane {
    pub fn new(config: SimulationConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_extent(viewport.world_width, viewport.world_height)?;

        let [sx, sy] = config.segments;
        let mesh = GridMesh::new(
            viewport.world_width * MESH_VIEWPORT_SCALE,
            viewport.world_height * MESH_VIEWPORT_SCALE,
            sx,
            sy,
        );
        let field = DisplacementField::new(
            &config,
            mesh.rest_positions(),
            mesh.size(),
            viewport.max_extent(),
        );
        let camera = Camera {
            aspect: viewport.width_px / viewport.height_px.max(1.0),
            ..Camera::default()
        };
        let pulse = PulseChannel::default();
        let uniforms = ShaderUniforms::assemble(&camera, 0.0, Vec2::ZERO, &pulse, &config);
        log::info!(
            "[membrane] grid {}x{} over {:.2}x{:.2} world units, seed {}",
            sx + 1,
            sy + 1,
            mesh.size().x,
            mesh.size().y,
            config.seed
        );
        Ok(Self {
            tracker: PointerTracker::new(&config),
            emitter: WaveEmitter::new(&config),
            field,
            mesh,
            settler: CameraSettler::default(),
            camera,
            click: None,
            pending_click: None,
            pending_pulse: None,
            pulse,
            uniforms,
            viewport,
            time: 0.0,
            config,
        })
    }

    // ---------------- Event side ----------------

    pub fn pointer_move(&mut self, screen_px: Vec2) {
        let world = self.viewport.screen_to_world(screen_px);
        self.tracker.pointer_move(world);
    }

    pub fn pointer_down(&mut self, screen_px: Vec2) {
        let world = self.viewport.screen_to_world(screen_px);
        self.tracker.pointer_down(world);
        self.pending_click = Some(world);
        self.pending_pulse = Some(PulseRequest {
            origin: world,
            strength: CLICK_SHADER_PULSE_STRENGTH,
        });
    }

    pub fn pointer_up(&mut self) {
        self.tracker.pointer_up();
    }

    /// Pixel size changes keep the mesh; only the mapping and pointer radii follow.
    pub fn resize(&mut self, viewport: Viewport) {
        if validate_extent(viewport.world_width, viewport.world_height).is_err() {
            log::warn!("[membrane] ignoring degenerate viewport {:?}", viewport);
            return;
        }
        self.viewport = viewport;
        self.field.set_viewport_extent(viewport.max_extent());
        self.camera.aspect = viewport.width_px / viewport.height_px.max(1.0);
    }

    // ---------------- Frame side ----------------

    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };
        self.time += dt;
        let now = self.time;

        self.tracker.step(dt);
        if let Some(origin) = self.pending_click.take() {
            self.click = Some(ClickImpulse {
                origin,
                start_time: now,
                strength: self.config.click_strength,
            });
        }

        let spawned = self.emitter.update(
            now,
            self.tracker.smoothed(),
            self.tracker.is_dragging(),
            self.tracker.drag_speed(),
        );
        if let (Some(origin), None) = (spawned, self.pending_pulse) {
            self.pending_pulse = Some(PulseRequest {
                origin: origin.position,
                strength: origin.strength,
            });
        }
        if let Some(request) = self.pending_pulse.take() {
            self.pulse.fire(request, now);
        }

        self.field.step(&FieldInputs {
            now,
            dt,
            pointer: self.tracker.smoothed(),
            pointer_velocity: self.tracker.velocity(),
            dragging: self.tracker.is_dragging(),
            waves: self.emitter.origins(),
            click: self.click.as_ref(),
        });
        if self
            .click
            .is_some_and(|c| self.field.click_expired(&c, now))
        {
            self.click = None;
        }

        if !mesh::commit(&self.field, &mut self.mesh) {
            log::warn!("[membrane] vertex buffer out of sync, regenerating from rest");
            self.mesh.reset();
            self.field.rebuild(self.mesh.rest_positions());
        }

        self.camera.eye = self.settler.step(self.tracker.velocity(), now, dt);
        self.uniforms = ShaderUniforms::assemble(
            &self.camera,
            now,
            self.tracker.smoothed(),
            &self.pulse,
            &self.config,
        );
    }

    /// Interleaved vertices for upload.
    pub fn write_vertices(&mut self, out: &mut Vec<MeshVertex>) {
        self.mesh.write_vertices(out);
    }

    // ---------------- Accessors ----------------

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn waves(&self) -> &[WaveOrigin] {
        self.emitter.origins()
    }

    pub fn click(&self) -> Option<&ClickImpulse> {
        self.click.as_ref()
    }

    pub fn pulse(&self) -> &PulseChannel {
        &self.pulse
    }

    pub fn field(&self) -> &DisplacementField {
        &self.field
    }

    pub fn mesh(&self) -> &GridMesh {
        &self.mesh
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn uniforms(&self) -> &ShaderUniforms {
        &self.uniforms
    }
}
