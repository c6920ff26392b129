use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::random::Spread;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::fs;
use std::path::Path;

// Lengths are logical units, times are frame ticks, velocities are per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub strings: Vec<String>,
    pub char_size: f32,
    pub char_spacing: f32,
    pub line_height: f32,

    pub firework_prev_points: usize,
    pub firework_line_width: Spread,
    pub firework_spawn_time: Spread,
    pub firework_reach_time: Spread,
    pub firework_circle_size: Spread,
    pub firework_circle_time: Spread,
    pub firework_circle_fade_time: Spread,
    pub firework_shards: Spread,
    pub firework_shard_prev_points: usize,
    pub firework_shard_vel: Spread,
    pub firework_shard_size: Spread,

    pub gravity: f32,
    pub up_flow: f32,
    pub letter_contemplating_wait_time: u32,

    pub balloon_spawn_time: Spread,
    pub balloon_inflate_time: Spread,
    pub balloon_size: Spread,
    pub balloon_vel: Spread,
    pub balloon_radian: Spread,

    pub background: Rgb,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strings: ["HAPPY", "BIRTHDAY!", "To my dear wife", "SMARTY"]
                .into_iter()
                .map(String::from)
                .collect(),
            char_size: 30.0,
            char_spacing: 35.0,
            line_height: 40.0,

            firework_prev_points: 10,
            firework_line_width: Spread::new(5.0, 8.0),
            firework_spawn_time: Spread::new(0.0, 200.0),
            firework_reach_time: Spread::new(30.0, 30.0),
            firework_circle_size: Spread::new(20.0, 10.0),
            firework_circle_time: Spread::new(30.0, 30.0),
            firework_circle_fade_time: Spread::new(10.0, 5.0),
            firework_shards: Spread::new(5.0, 5.0),
            firework_shard_prev_points: 3,
            firework_shard_vel: Spread::new(4.0, 2.0),
            firework_shard_size: Spread::new(3.0, 3.0),

            gravity: 0.1,
            up_flow: -0.1,
            letter_contemplating_wait_time: 360,

            balloon_spawn_time: Spread::new(0.0, 20.0),
            balloon_inflate_time: Spread::new(10.0, 10.0),
            balloon_size: Spread::new(20.0, 20.0),
            balloon_vel: Spread::new(0.4, 0.4),
            balloon_radian: Spread::new(-(FRAC_PI_2 - 0.5), -1.0),

            background: Rgb(0x11, 0x11, 0x11),
        }
    }
}

impl Options {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let options: Options =
            serde_json::from_str(&content).map_err(|source| Error::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("loaded options from {}", path.display());
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> String {
        // Options holds only plain numbers, strings and colours.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn widest_line(&self) -> usize {
        self.strings
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn total_width(&self) -> f32 {
        self.char_spacing * self.widest_line() as f32
    }

    pub fn total_height(&self) -> f32 {
        self.line_height * self.strings.len() as f32
    }

    pub fn validate(&self) -> Result<()> {
        if self.strings.iter().all(|line| line.trim().is_empty()) {
            return Err(invalid("strings", "at least one non-empty line is required"));
        }

        for (field, value) in [
            ("char_size", self.char_size),
            ("char_spacing", self.char_spacing),
            ("line_height", self.line_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        for (field, value) in [
            ("firework_prev_points", self.firework_prev_points),
            ("firework_shard_prev_points", self.firework_shard_prev_points),
        ] {
            if value < 2 {
                return Err(invalid(field, format!("must be at least 2, got {value}")));
            }
        }

        for (field, spread) in [
            ("firework_reach_time", self.firework_reach_time),
            ("firework_circle_time", self.firework_circle_time),
            ("firework_circle_fade_time", self.firework_circle_fade_time),
            ("balloon_inflate_time", self.balloon_inflate_time),
        ] {
            if spread.base < 1.0 {
                return Err(invalid(
                    field,
                    format!("base must be at least one tick, got {}", spread.base),
                ));
            }
        }

        for (field, spread) in self.spreads() {
            if !(spread.base.is_finite() && spread.added.is_finite()) {
                return Err(invalid(field, "must be finite"));
            }
            if spread.added < 0.0 && field != "balloon_radian" {
                return Err(invalid(
                    field,
                    format!("added must not be negative, got {}", spread.added),
                ));
            }
        }

        Ok(())
    }

    fn spreads(&self) -> [(&'static str, Spread); 14] {
        [
            ("firework_line_width", self.firework_line_width),
            ("firework_spawn_time", self.firework_spawn_time),
            ("firework_reach_time", self.firework_reach_time),
            ("firework_circle_size", self.firework_circle_size),
            ("firework_circle_time", self.firework_circle_time),
            ("firework_circle_fade_time", self.firework_circle_fade_time),
            ("firework_shards", self.firework_shards),
            ("firework_shard_vel", self.firework_shard_vel),
            ("firework_shard_size", self.firework_shard_size),
            ("balloon_spawn_time", self.balloon_spawn_time),
            ("balloon_inflate_time", self.balloon_inflate_time),
            ("balloon_size", self.balloon_size),
            ("balloon_vel", self.balloon_vel),
            ("balloon_radian", self.balloon_radian),
        ]
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidOption {
        field,
        reason: reason.into(),
    }
}
