//! Audible cues for world signals. Fire-and-forget: a failed cue is logged
//! and the game carries on.
use crate::world::Signal;
use log::{debug, warn};
use std::io::Write;

const BELL: &[u8] = b"\x07";

pub trait Feedback {
    fn signal(&mut self, signal: Signal);
}

/// Rings the terminal bell: once for food, twice for game over.
pub struct Bell<W> {
    out: W,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W) -> Self {
        Bell { out }
    }

    fn ring(&mut self, times: usize) -> std::io::Result<()> {
        for _ in 0..times {
            self.out.write_all(BELL)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Feedback for Bell<W> {
    fn signal(&mut self, signal: Signal) {
        let times = match signal {
            Signal::FoodEaten => 1,
            Signal::GameOver => 2,
        };
        if let Err(e) = self.ring(times) {
            warn!("Could not ring the bell for {:?}: {}", signal, e);
        }
    }
}

/// Used with `--mute`.
pub struct Silent;

impl Feedback for Silent {
    fn signal(&mut self, signal: Signal) {
        debug!("Muted {:?}", signal);
    }
}
