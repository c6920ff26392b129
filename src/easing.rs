use std::f32::consts::{FRAC_PI_2, PI};

pub fn sine_ease(progress: f32) -> f32 {
    (progress * FRAC_PI_2).sin()
}

pub fn cosine_ease(progress: f32) -> f32 {
    -(progress * PI).cos() / 2.0 + 0.5
}
