use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use ratatui::style::Color;

use crate::game::{Celebration, Player, WinningLine};

/// How long new confetti keeps spawning after a win.
pub const STREAM_FOR: Duration = Duration::from_secs(4);
/// When the last confetti is removed.
pub const CLEAR_AFTER: Duration = Duration::from_secs(6);
pub const MAX_PARTICLES: usize = 150;

const COLORS: [Color; 10] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::LightMagenta,
    Color::LightBlue,
    Color::Magenta,
    Color::LightGreen,
    Color::Cyan,
    Color::LightRed,
    Color::Red,
];
const GLYPHS: [char; 4] = ['*', '+', '•', '✦'];

/// One confetti piece. Positions are fractions of the screen, `y` grows
/// downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub glyph: char,
    speed: f64,
    tilt: f64,
}

/// Falling confetti shown after a win, driven by [`Confetti::tick`].
pub struct Confetti {
    rng: StdRng,
    particles: Vec<Particle>,
    requested: Option<Player>,
    started: Option<Instant>,
    last_tick: Option<Instant>,
    wave: f64,
}

impl Confetti {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Confetti {
            rng,
            particles: Vec::new(),
            requested: None,
            started: None,
            last_tick: None,
            wave: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_active(&self) -> bool {
        self.requested.is_some() || self.started.is_some()
    }

    pub fn is_streaming(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|start| now.duration_since(start) < STREAM_FOR)
    }

    /// Drop all confetti immediately.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.requested = None;
        self.started = None;
        self.last_tick = None;
    }

    /// Advance the animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(winner) = self.requested.take() {
            tracing::debug!(winner = winner.name(), "confetti started");
            self.started = Some(now);
            self.last_tick = Some(now);
            while self.particles.len() < MAX_PARTICLES {
                let particle = self.spawn(true);
                self.particles.push(particle);
            }
        }

        let Some(start) = self.started else {
            return;
        };
        if now.duration_since(start) >= CLEAR_AFTER {
            self.clear();
            return;
        }

        let dt = self
            .last_tick
            .map_or(0.0, |last| now.duration_since(last).as_secs_f64());
        self.last_tick = Some(now);
        self.wave += dt;

        let streaming = self.is_streaming(now);
        let sway = self.wave.sin() * 0.02 * dt;
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.y += p.speed * dt;
            p.x += sway + p.tilt * dt;
            if p.y < 1.0 && (0.0..1.0).contains(&p.x) {
                i += 1;
            } else if streaming {
                self.particles[i] = self.spawn(false);
                i += 1;
            } else {
                self.particles.swap_remove(i);
            }
        }
    }

    fn spawn(&mut self, anywhere: bool) -> Particle {
        Particle {
            x: self.rng.random_range(0.0..1.0),
            y: if anywhere {
                self.rng.random_range(-1.0..0.0)
            } else {
                0.0
            },
            color: COLORS[self.rng.random_range(0..COLORS.len())],
            glyph: GLYPHS[self.rng.random_range(0..GLYPHS.len())],
            speed: self.rng.random_range(0.2..0.5),
            tilt: self.rng.random_range(-0.05..0.05),
        }
    }
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

impl Celebration for Confetti {
    fn celebrate(&mut self, winner: Player, _line: &WinningLine) {
        self.requested = Some(winner);
    }
}
