use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod auto_advance;
mod carousel;
mod clipboard;
mod config;
mod constants;
mod controls;
mod ffmpeg;
mod slide;
mod state;
mod texture_loader;

use crate::carousel::Carousel;
use crate::clipboard::CopyButton;
use crate::config::Args;
use crate::constants::*;
use crate::controls::{Command, Controls};
use crate::ffmpeg::Ffmpeg;
use crate::slide::{Slide, SlideTrack};
use crate::texture_loader::{load_slide, load_sorted_image_paths};

// Mouse position mapped from the (resizable) window onto the fixed-size canvas
fn canvas_point(rl: &RaylibHandle) -> Vector2 {
    let mouse = rl.get_mouse_position();
    Vector2::new(
        mouse.x * RENDER_WIDTH as f32 / rl.get_screen_width().max(1) as f32,
        mouse.y * RENDER_HEIGHT as f32 / rl.get_screen_height().max(1) as f32,
    )
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // --- Read the slide set once ---
    let mut image_paths = load_sorted_image_paths(&args.directory)
        .with_context(|| format!("Error loading images from {:?}", args.directory))?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let slides: Vec<Slide> = image_paths
        .iter()
        .map(|path| load_slide(&mut rl, &thread, path))
        .collect();
    info!("Loaded {} slides from {:?}", slides.len(), args.directory);

    // --- Wire the carousel; an empty slide set leaves it idle ---
    let viewport = Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32);
    let track = SlideTrack::new(slides, viewport);
    let mut carousel = Carousel::initialize(track, args.carousel_options());

    let controls = Controls::new(carousel.is_some() && !args.hide_buttons, args.citation.is_some());
    let mut copy_button = args.citation.clone().map(|text| CopyButton::new("Copy citation", text));

    let mut ffmpeg = match &args.record {
        Some(path) => Some(Ffmpeg::spawn(RENDER_WIDTH, RENDER_HEIGHT, FPS, path)?),
        None => None,
    };
    let recording_frames = args.recording_frames();
    let mut recorded_frames = 0;

    let mut framebuffer = rl.load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("Failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Recordings advance by exactly one frame per frame, whatever the wall clock says
        let dt = if ffmpeg.is_some() { FRAME_TIME } else { rl.get_frame_time() };

        // 1. User triggers, in the order they arrived this frame
        for command in controls.poll(&rl, canvas_point(&rl)) {
            match command {
                Command::Carousel(trigger) => {
                    if let Some(carousel) = carousel.as_mut() {
                        carousel.handle(trigger);
                        debug!(?trigger, slide = carousel.active_index(), "Carousel moved");
                    }
                }
                Command::Copy => {
                    if let Some(button) = copy_button.as_mut() {
                        button.activate(&mut rl);
                    }
                }
            }
        }

        // 2. Timers
        if let Some(carousel) = carousel.as_mut() {
            carousel.update(dt);
        }
        if let Some(button) = copy_button.as_mut() {
            button.update(dt);
        }

        // --- Render each frame into fixed size "framebuffer" ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(Color::BLACK);

            if let Some(carousel) = carousel.as_ref() {
                carousel.track().draw(&mut d);
            }
            for button in controls.arrows() {
                button.draw(&mut d, BUTTON_BACKGROUND, Color::WHITE);
            }
            if let (Some(button), Some(copy)) = (controls.copy.as_ref(), copy_button.as_ref()) {
                let (background, foreground) = copy.colors();
                button.draw_label(&mut d, copy.label(), background, foreground);
            }
        });

        // Draw inverted copy of framebuffer to the screen
        {
            let mut d = rl.begin_drawing(&thread);
            let sw = d.get_screen_width() as f32;
            let sh = d.get_screen_height() as f32;
            d.draw_texture_pro(
                &framebuffer,
                Rectangle::new(
                    0.0,
                    0.0,
                    framebuffer.width() as f32,
                    -(framebuffer.height() as f32),
                ),
                Rectangle::new(0.0, 0.0, sw, sh),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }

        if let Some(recorder) = ffmpeg.as_mut() {
            let image = framebuffer.load_image()
                .map_err(|e| anyhow!("Failed to read back frame: {}", e))?;
            recorder.write(&image)?;

            recorded_frames += 1;
            if recorded_frames >= recording_frames {
                break;
            }
        }
    }

    // Closes the pipe and waits for ffmpeg to finish the file
    drop(ffmpeg);
    Ok(())
}
