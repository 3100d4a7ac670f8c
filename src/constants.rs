use raylib::prelude::Color;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const AUTO_ADVANCE_INTERVAL: f32 = 5.0;   // Time between automatic advances (seconds)
pub const SLIDE_STEP_PERCENT: f32 = 100.0;    // Track shift per slide (percent of track width)
pub const SLIDE_FIT_RATIO: f32 = 0.9;         // Largest share of the viewport an image may cover

pub const COPY_FEEDBACK_DURATION: f32 = 2.0;  // How long "Copied!" stays up (seconds)
pub const COPIED_LABEL: &str = "Copied!";

pub const PLACEHOLDER_CAPTION: &str = "Quantum Visual";
pub const PLACEHOLDER_ALT: &str = "Image placeholder";

pub const PLACEHOLDER_BACKGROUND: Color = Color::new(0x1a, 0x1a, 0x2e, 0xff); // #1a1a2e
pub const PLACEHOLDER_FOREGROUND: Color = Color::new(0x00, 0xf2, 0xea, 0xff); // #00f2ea
// Translucent white behind buttons
pub const BUTTON_BACKGROUND: Color = Color::new(0xff, 0xff, 0xff, 0x28);
// Highlight while "Copied!" shows
pub const COPIED_BACKGROUND: Color = Color::new(0x00, 0xf2, 0xea, 0xff);
