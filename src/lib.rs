//! skywriter - fireworks that spell a message and float away on balloons.
//!
//! Each character of the message is a [`Letter`](letter::Letter) that runs
//! its own little state machine: a firework climbs to the letter, bursts into
//! a disc and a spray of shards, settles as a coloured glyph, then inflates
//! a balloon and drifts off screen. The [`Animator`](animator::Animator)
//! steps every letter once per frame against a [`Surface`](surface::Surface)
//! and keeps asking its [`FrameScheduler`](schedule::FrameScheduler) for more
//! frames until the whole message has floated away.

pub mod animator;
pub mod canvas;
pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod letter;
pub mod random;
pub mod schedule;
pub mod shard;
pub mod surface;
pub mod trail;

pub use crate::animator::{Animator, Viewport};
pub use crate::canvas::TermCanvas;
pub use crate::color::{Hsla, Rgb, Rgba};
pub use crate::config::Options;
pub use crate::error::{Error, Result};
pub use crate::letter::{Letter, Phase, PhaseKind};
pub use crate::schedule::{FrameClock, FrameScheduler};
pub use crate::surface::Surface;
