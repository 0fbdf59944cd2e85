use std::time::Duration;
use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod carousel;
mod config;
mod constants;
mod dot;
mod engine;
mod interval;
mod slide;
mod texture_loader;

use crate::config::Args;
use crate::constants::*;
use crate::engine::{CarouselEngine, Engine};
use crate::texture_loader::load_sorted_image_paths;

fn init_logger() {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    log::info!("Slide directory: {}", args.directory.display());

    let image_paths = load_sorted_image_paths(&args.directory)?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Login Media Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = CarouselEngine::new(&args);
    if !engine.initialize(&mut rl, &thread, image_paths) {
        log::warn!("No slides loaded from {}, carousel stays idle", args.directory.display());
    }

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("Failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::try_from_secs_f32(rl.get_frame_time()).unwrap_or(Duration::ZERO);

        engine.render_frame(dt, &mut rl, &thread, &mut framebuffer);

        // Render textures are stored upside down, hence the negative source height
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}
