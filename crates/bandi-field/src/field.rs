//! Particle field state and per-frame update.

use bandi_core::{ColorSlot, PointerState};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ratatui::Frame;
use ratatui::widgets::Paragraph;

use crate::particle::Particle;
use crate::render;

/// The particle field. Owns a fixed set of particles, the canvas
/// extent in field units, and the color slot it polls each frame.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    slot: ColorSlot,
}

impl ParticleField {
    /// Populate `count` randomized particles over a `width` x `height`
    /// canvas, seeding from the OS.
    pub fn new(count: usize, width: f32, height: f32, slot: ColorSlot) -> Self {
        Self::with_rng(&mut SmallRng::from_os_rng(), count, width, height, slot)
    }

    /// Like [`ParticleField::new`] but with a fixed seed, so particle
    /// trajectories are reproducible.
    pub fn seeded(count: usize, width: f32, height: f32, slot: ColorSlot, seed: u64) -> Self {
        Self::with_rng(
            &mut SmallRng::seed_from_u64(seed),
            count,
            width,
            height,
            slot,
        )
    }

    fn with_rng<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32, slot: ColorSlot) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
            slot,
        }
    }

    /// Build a field from explicit particles.
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32, slot: ColorSlot) -> Self {
        Self {
            particles,
            width,
            height,
            slot,
        }
    }

    /// Reset the canvas extent. Particle positions are not rescaled;
    /// anything stranded outside the new bounds wraps on its next
    /// advance.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance the simulation by one frame: drift plus wraparound for
    /// every particle, then pointer repulsion while tracking.
    pub fn step(&mut self, pointer: &PointerState) {
        let position = pointer.position();
        for particle in &mut self.particles {
            particle.advance(self.width, self.height);
            if let Some((px, py)) = position {
                particle.repel_from(px, py);
            }
        }
    }

    /// Run one frame: step the simulation, poll the color slot, and
    /// paint particles and links over the whole frame area.
    pub fn render(&mut self, frame: &mut Frame, pointer: &PointerState) {
        self.step(pointer);
        let color = self.slot.current();
        let area = frame.area();
        let lines = render::draw(&self.particles, color, area);
        frame.render_widget(Paragraph::new(lines), area);
    }
}
