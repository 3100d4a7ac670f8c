use std::path::PathBuf;

use clap::Parser;

use crate::carousel::CarouselOptions;
use crate::constants::*;

#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(about = "Looping image carousel with manual and automatic advance")]
pub struct Args {
    /// Directory holding the slide images
    pub directory: PathBuf,

    /// Time between automatic advances, in milliseconds
    #[arg(long, default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Track shift per slide, in percent of the track width
    #[arg(long, default_value_t = 100.0, value_parser = positive_f32)]
    pub step_percent: f32,

    /// Shuffle the slides once at startup
    #[arg(long)]
    pub shuffle: bool,

    /// Hide the previous/next buttons (arrow keys still work)
    #[arg(long)]
    pub hide_buttons: bool,

    /// Citation text offered by the copy button; no button without it
    #[arg(long)]
    pub citation: Option<String>,

    /// Record the carousel to this video file instead of running interactively
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Length of the recording, in seconds
    #[arg(long, default_value_t = 30.0, value_parser = positive_f32)]
    pub duration: f32,
}

fn positive_f32(value: &str) -> Result<f32, String> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(_) => Err(format!("{value} is not a finite positive number")),
        Err(e) => Err(e.to_string()),
    }
}

impl Args {
    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions {
            interval: self.interval_ms as f32 / 1000.0,
            step_percent: self.step_percent,
        }
    }

    /// Number of frames a recording of `duration` seconds holds at `FPS`.
    pub fn recording_frames(&self) -> u64 {
        (self.duration * FPS as f32).round().max(1.0) as u64
    }
}
