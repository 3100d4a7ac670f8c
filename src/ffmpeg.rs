use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::io::Write;
use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{info, warn};

/// Encodes rendered frames into a video by piping raw RGBA into `ffmpeg`.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
    frames: u64,
}

impl Ffmpeg {
    pub fn spawn(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .context("Failed to start ffmpeg process")?;
        let stdin = process.stdin.take().context("Failed to open ffmpeg stdin")?;
        info!("Recording to {:?}", output);
        Ok(Ffmpeg { process, stdin: Some(stdin), frames: 0 })
    }

    /// Sends one frame. raylib hands render textures over bottom row first,
    /// ffmpeg wants them top row first, so rows are written in reverse.
    pub fn write(&mut self, image: &Image) -> Result<()> {
        let stdin = self.stdin.as_mut().context("ffmpeg stdin already closed")?;
        let row_len = image.width() as usize * 4; // 4 bytes per pixel (RGBA)
        let height = image.height() as usize;

        // SAFETY: the image holds width * height RGBA pixels and outlives the slice
        let pixels =
            unsafe { std::slice::from_raw_parts(image.data() as *const u8, row_len * height) };

        for row in pixels.chunks_exact(row_len).rev() {
            stdin.write_all(row).context("Failed to write to ffmpeg stdin")?;
        }
        self.frames += 1;
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Closing stdin tells ffmpeg the stream is over
        self.stdin = None;
        match self.process.wait() {
            Ok(status) if status.success() => info!("Recorded {} frames", self.frames),
            Ok(status) => warn!("ffmpeg exited with {}", status),
            Err(e) => warn!("Failed to wait for ffmpeg process: {}", e),
        }
    }
}
