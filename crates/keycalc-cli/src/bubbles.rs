//! Decorative bubble animation
//!
//! Ten bubbles sit at fixed positions and pulse: every tick advances a
//! counter modulo 100 and each bubble's scale follows
//! `1 + sin(tick / 20 + id) * 0.2`.

/// Number of bubbles drawn
pub const BUBBLE_COUNT: usize = 10;
/// Ticks before the counter wraps
pub const TICK_CYCLE: u32 = 100;

const PULSE_PERIOD: f64 = 20.0;
const PULSE_AMPLITUDE: f64 = 0.2;

/// One bubble's fixed geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bubble {
    /// Index, also the pulse phase offset
    pub id: usize,
    /// Diameter in pixels at scale 1
    pub size: u32,
    /// Horizontal position, percent of the frame width
    pub left_pct: u32,
    /// Vertical position, percent of the frame height
    pub top_pct: u32,
}

impl Bubble {
    /// Geometry of bubble `id`
    #[must_use]
    pub const fn new(id: usize) -> Self {
        let i = id as u32;
        Self {
            id,
            size: 50 + i * 10,
            left_pct: 10 + i * 8,
            top_pct: 15 + i * 7,
        }
    }
}

/// Animation state
#[derive(Debug, Clone)]
pub struct Bubbles {
    bubbles: Vec<Bubble>,
    tick: u32,
}

impl Default for Bubbles {
    fn default() -> Self {
        Self::new()
    }
}

impl Bubbles {
    /// Creates the bubble set at tick 0
    #[must_use]
    pub fn new() -> Self {
        Self {
            bubbles: (0..BUBBLE_COUNT).map(Bubble::new).collect(),
            tick: 0,
        }
    }

    /// Advances the animation one step
    pub fn tick(&mut self) {
        self.tick = (self.tick + 1) % TICK_CYCLE;
    }

    /// Current tick counter
    #[must_use]
    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    /// All bubbles
    #[must_use]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Scale factor of `bubble` at the current tick, within 0.8..=1.2
    #[must_use]
    pub fn scale(&self, bubble: &Bubble) -> f64 {
        let phase = f64::from(self.tick) / PULSE_PERIOD + bubble.id as f64;
        1.0 + phase.sin() * PULSE_AMPLITUDE
    }

    /// Drawn diameter of `bubble` at the current tick
    #[must_use]
    pub fn diameter(&self, bubble: &Bubble) -> f64 {
        f64::from(bubble.size) * self.scale(bubble)
    }

    /// Renders the bubble field as `height` rows of `width` columns,
    /// each bubble at its percentage position
    #[must_use]
    pub fn field(&self, width: usize, height: usize) -> Vec<String> {
        let mut rows = vec![vec![' '; width]; height];
        for bubble in &self.bubbles {
            let col = bubble.left_pct as usize * width / 100;
            let row = bubble.top_pct as usize * height / 100;
            if let Some(cell) = rows.get_mut(row).and_then(|r| r.get_mut(col)) {
                *cell = glyph(self.diameter(bubble));
            }
        }
        rows.into_iter().map(|r| r.into_iter().collect()).collect()
    }
}

/// Character used for a bubble of the given drawn diameter
#[must_use]
pub fn glyph(diameter: f64) -> char {
    if diameter < 60.0 {
        '·'
    } else if diameter < 90.0 {
        '∘'
    } else if diameter < 120.0 {
        'o'
    } else {
        'O'
    }
}
