use serde::{Deserialize, Serialize};

// Uniform draws in [0, 1).
pub trait Entropy {
    fn unit(&mut self) -> f32;
}

impl Entropy for fastrand::Rng {
    fn unit(&mut self) -> f32 {
        self.f32()
    }
}

// base + added * r
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    pub base: f32,
    #[serde(default)]
    pub added: f32,
}

impl Spread {
    pub const fn new(base: f32, added: f32) -> Self {
        Self { base, added }
    }

    pub const fn fixed(base: f32) -> Self {
        Self { base, added: 0.0 }
    }

    pub fn sample(&self, rng: &mut dyn Entropy) -> f32 {
        self.base + self.added * rng.unit()
    }

    pub fn ticks(&self, rng: &mut dyn Entropy) -> u32 {
        self.sample(rng).max(0.0) as u32
    }

    pub fn count(&self, rng: &mut dyn Entropy) -> usize {
        self.sample(rng).max(0.0) as usize
    }
}
