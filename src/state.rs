#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CopyState {
    Ready,                      // Showing the button's own label
    Copied { remaining: f32 },  // Showing "Copied!" for `remaining` more seconds
}
