use std::path::PathBuf;
use std::time::Duration;
use raylib::prelude::*;
use crate::carousel::Carousel;
use crate::config::Args;
use crate::dot::{layout_dots, Dot};
use crate::slide::Slide;
use crate::texture_loader::load_texture_with_exif_rotation;

pub trait Engine {
    fn new(args: &Args) -> Self;
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> bool;
    fn render_frame(&mut self, dt: Duration, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D);
}

pub struct CarouselEngine {
    period: Duration,
    dots: Option<usize>,
    carousel: Option<Carousel<Slide, Dot>>,
}

impl Engine for CarouselEngine {
    fn new(args: &Args) -> Self {
        Self {
            period: args.interval(),
            dots: args.dots.map(|n| n as usize),
            carousel: None,
        }
    }

    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> bool {
        let mut slides = Vec::with_capacity(paths.len());
        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => slides.push(Slide::new(texture)),
                Err(e) => log::warn!("Skipping slide: {:#}", e),
            }
        }

        let dots = layout_dots(self.dots.unwrap_or(slides.len()));
        if dots.len() != slides.len() {
            log::info!("{} slide(s) but {} dot(s); unmatched positions stay inactive", slides.len(), dots.len());
        }

        self.carousel = Carousel::initialize(slides, dots, self.period);
        match self.carousel.as_mut() {
            Some(carousel) => {
                carousel.start();
                log::info!(
                    "Carousel {} with {} slide(s) on slide {}, rotating every {} ms",
                    if carousel.is_started() { "running" } else { "idle" },
                    carousel.slides().len(),
                    carousel.index(),
                    carousel.period().as_millis()
                );
                true
            }
            None => {
                log::debug!("Carousel::initialize returned None, no timer armed");
                false
            }
        }
    }

    fn render_frame(&mut self, dt: Duration, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.update(dt);
        }

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);

            match self.carousel.as_ref() {
                Some(carousel) => {
                    for slide in carousel.slides() {
                        slide.draw(&mut d);
                    }
                    for dot in carousel.dots() {
                        dot.draw(&mut d);
                    }
                }
                None => d.draw_text("No slides to show.", 20, 20, 40, Color::GRAY),
            }
        });
    }
}
