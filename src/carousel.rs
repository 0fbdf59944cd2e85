use std::time::Duration;
use crate::interval::Interval;

/// Anything that carries the carousel's active flag.
pub trait Toggle {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// Rotates the active flag over a fixed list of slides and their dots.
///
/// Dots are matched to slides by position only. When the lists differ in
/// length, positions past the end of the shorter one never become active.
pub struct Carousel<S: Toggle, D: Toggle> {
    slides: Vec<S>,
    dots: Vec<D>,
    index: usize,
    interval: Interval,
    started: bool,
}

impl<S: Toggle, D: Toggle> Carousel<S, D> {
    /// Captures the slides and dots. Returns `None` when there is nothing to rotate.
    pub fn initialize(slides: Vec<S>, dots: Vec<D>, period: Duration) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }

        Some(Self {
            slides,
            dots,
            index: 0,
            interval: Interval::new(period),
            started: false,
        })
    }

    /// Marks the first slide active right away and arms the timer.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.interval.reset();
        self.render(self.index);
    }

    pub fn render(&mut self, index: usize) {
        for (n, slide) in self.slides.iter_mut().enumerate() {
            slide.set_active(n == index);
        }
        for (n, dot) in self.dots.iter_mut().enumerate() {
            dot.set_active(n == index);
        }
    }

    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.slides.len();
        self.render(self.index);
    }

    /// Feeds one frame delta to the timer, running a full tick for every elapsed period.
    pub fn update(&mut self, dt: Duration) {
        if !self.started {
            return;
        }

        let ticks = self.interval.advance(dt);
        for _ in 0..ticks {
            self.tick();
        }
        if ticks > 0 {
            log::debug!("carousel advanced {} tick(s), active slide {}", ticks, self.index);
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn dots(&self) -> &[D] {
        &self.dots
    }
}
