use std::fmt;

use tracing::{debug, trace};

use crate::auto_advance::AutoAdvance;
use crate::constants::*;

/// Horizontal shift of the slide track, in percent of one slide width.
/// Negative in the direction of forward progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset(f32);

impl Offset {
    pub fn for_index(index: usize, step_percent: f32) -> Self {
        // 0.0 - x keeps slide 0 at +0% rather than -0%
        Offset(0.0 - index as f32 * step_percent)
    }

    pub fn percent(self) -> f32 {
        self.0
    }

    /// Offset converted to pixels for a track `width` pixels wide.
    pub fn pixels(self, width: f32) -> f32 {
        self.0 / 100.0 * width
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translateX({}%)", self.percent())
    }
}

/// The container the carousel drives: it knows how many slides it holds and
/// accepts the offset to present them at.
pub trait Track {
    fn slide_count(&self) -> usize;
    fn set_offset(&mut self, offset: Offset);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Next,
    Previous,
    Tick,
}

#[derive(Debug, Clone, Copy)]
pub struct CarouselOptions {
    pub interval: f32,     // seconds between automatic advances
    pub step_percent: f32, // track shift per slide
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            interval: AUTO_ADVANCE_INTERVAL,
            step_percent: SLIDE_STEP_PERCENT,
        }
    }
}

pub struct Carousel<T: Track> {
    track: T,
    slide_count: usize,
    current_slide_index: usize,
    step_percent: f32,
    auto_advance: AutoAdvance,
}

impl<T: Track> Carousel<T> {
    /// Wires a carousel onto `track`.
    ///
    /// The slide count is read once here. An empty track gets no carousel at
    /// all (`None`), so there is nothing to trigger. Otherwise the first slide
    /// is rendered right away and the auto-advance timer starts.
    pub fn initialize(track: T, options: CarouselOptions) -> Option<Self> {
        let slide_count = track.slide_count();
        if slide_count == 0 {
            debug!("Carousel has no slides, skipping wiring");
            return None;
        }

        let mut carousel = Self {
            track,
            slide_count,
            current_slide_index: 0,
            step_percent: options.step_percent,
            auto_advance: AutoAdvance::new(options.interval),
        };
        carousel.render();
        debug!(
            slides = slide_count,
            interval = carousel.auto_advance.period(),
            "Carousel initialized"
        );
        Some(carousel)
    }

    pub fn advance(&mut self) {
        self.current_slide_index = (self.current_slide_index + 1) % self.slide_count;
        self.render();
    }

    pub fn retreat(&mut self) {
        self.current_slide_index =
            (self.current_slide_index + self.slide_count - 1) % self.slide_count;
        self.render();
    }

    pub fn tick(&mut self) {
        self.advance();
    }

    pub fn render(&mut self) {
        let offset = self.offset();
        trace!(index = self.current_slide_index, %offset, "Render");
        self.track.set_offset(offset);
    }

    pub fn handle(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::Next => self.advance(),
            Trigger::Previous => self.retreat(),
            Trigger::Tick => self.tick(),
        }
    }

    /// Feeds `dt` seconds of frame time to the auto-advance timer and applies
    /// one tick per elapsed period. Returns the number of ticks applied.
    pub fn update(&mut self, dt: f32) -> u32 {
        let ticks = self.auto_advance.update(dt);
        // every full lap of slide_count ticks lands back on the same slide
        for _ in 0..ticks as usize % self.slide_count {
            self.handle(Trigger::Tick);
        }
        ticks
    }

    pub fn active_index(&self) -> usize {
        self.current_slide_index
    }

    pub fn offset(&self) -> Offset {
        Offset::for_index(self.current_slide_index, self.step_percent)
    }

    pub fn track(&self) -> &T {
        &self.track
    }
}
