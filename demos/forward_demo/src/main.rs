//! Forward pipeline demo
//!
//! Drives the whole pipeline headlessly: a couple of spinning meshes
//! under a fixed-rate tick, a handful of point lights, and the recording
//! backend standing in for the GPU. Run with `RUST_LOG=debug` to watch
//! the per-frame submission stats.

use forward_engine::prelude::*;

/// A mesh that spins around the Y axis under fixed-rate ticks
struct Spinner {
    renderer: MeshRenderer,
    orbit_radius: f32,
    angle: f32,
    step: f32,
    elapsed: f32,
}

impl Spinner {
    fn new(renderer: MeshRenderer, orbit_radius: f32, step: f32) -> Self {
        Self {
            renderer,
            orbit_radius,
            angle: 0.0,
            step,
            elapsed: 0.0,
        }
    }

    fn sync_transform(&mut self, alpha: f32) {
        let angle = self.angle + self.step * alpha;
        self.renderer.transform = Transform::from_position(Vec3::new(
            self.orbit_radius * angle.cos(),
            0.0,
            self.orbit_radius * angle.sin(),
        ));
    }
}

impl Tickable for Spinner {
    fn interpolate_tick(&mut self, delta: f32) {
        self.sync_transform(delta);
    }

    fn process_tick(&mut self) {
        self.angle += self.step;
    }

    fn advance_time(&mut self, time_delta: f32) {
        self.elapsed += time_delta;
    }
}

fn main() {
    forward_engine::foundation::logging::init();
    log::info!("starting forward pipeline demo");

    let config = RenderConfig::default();
    let mut backend = RecordingBackend::new();

    // Scene lights: two near the orbit, one far away that should rarely
    // make the per-draw cut
    let mut lights = LightSet::new();
    lights.insert(PointLight::new(
        Vec3::new(2.0, 1.0, 0.0),
        8.0,
        Vec3::new(1.0, 0.9, 0.8),
        0.7,
    ));
    lights.insert(PointLight::new(
        Vec3::new(-2.0, 1.0, 0.0),
        8.0,
        Vec3::new(0.4, 0.6, 1.0),
        0.5,
    ));
    lights.insert(PointLight::new(
        Vec3::new(0.0, 50.0, 0.0),
        100.0,
        Vec3::new(1.0, 1.0, 1.0),
        0.2,
    ));

    // Two orbiting meshes sharing a shader; handles stand in for buffers
    // uploaded by the asset layer
    let material = |shader| {
        Material::forward(
            ShaderProgramHandle(shader),
            vec![(TextureHandle(1), "diffuseMap".to_string())],
        )
    };
    let mut inner = Spinner::new(
        MeshRenderer::new(VertexBufferHandle(1), IndexBufferHandle(1), material(10)),
        1.5,
        0.2,
    );
    let mut outer = Spinner::new(
        MeshRenderer::new(VertexBufferHandle(2), IndexBufferHandle(2), material(10)),
        4.0,
        0.05,
    );

    let mut coordinator = FrameCoordinator::new(&config);
    let mut timer = Timer::new();

    for _ in 0..120 {
        let delta = timer.tick().max(1.0 / 240.0);

        coordinator.update(delta, &mut [&mut inner, &mut outer]);
        let stats = coordinator.render(
            &[&inner.renderer, &outer.renderer],
            &lights,
            &mut backend,
        );

        log::debug!(
            "frame {}: {} submitted, {} failed, {} commands recorded",
            coordinator.frame(),
            stats.submitted,
            stats.failed,
            backend.commands().len()
        );
        backend.clear();
    }

    log::info!(
        "demo finished: {} frames in {:.2}s ({:.2}s simulated)",
        coordinator.frame(),
        timer.elapsed_seconds(),
        inner.elapsed
    );
}
