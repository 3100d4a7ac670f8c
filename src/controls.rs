use raylib::prelude::*;

use crate::carousel::Trigger;
use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Carousel(Trigger),
    Copy,
}

pub struct Button {
    pub bounds: Rectangle,
    pub label: &'static str,
    pub command: Command,
}

impl Button {
    pub fn new(bounds: Rectangle, label: &'static str, command: Command) -> Self {
        Self { bounds, label, command }
    }

    /// Left and top edges are inside, right and bottom edges are not.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.bounds.x
            && point.y >= self.bounds.y
            && point.x < self.bounds.x + self.bounds.width
            && point.y < self.bounds.y + self.bounds.height
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, background: Color, foreground: Color) {
        self.draw_label(d, self.label, background, foreground);
    }

    /// Draws the button with a label other than its own, e.g. a feedback text.
    pub fn draw_label(
        &self,
        d: &mut impl RaylibDraw,
        label: &str,
        background: Color,
        foreground: Color,
    ) {
        d.draw_rectangle_rec(self.bounds, background);
        let font_size = (self.bounds.height * 0.5) as i32;
        // rough centering, the default font is about half as wide as it is tall
        let text_width = label.chars().count() as f32 * font_size as f32 * 0.5;
        d.draw_text(
            label,
            (self.bounds.x + (self.bounds.width - text_width) * 0.5) as i32,
            (self.bounds.y + (self.bounds.height - font_size as f32) * 0.5) as i32,
            font_size,
            foreground,
        );
    }
}

/// Every on-screen trigger. Buttons that are not present are simply `None`.
pub struct Controls {
    pub previous: Option<Button>,
    pub next: Option<Button>,
    pub copy: Option<Button>,
}

impl Controls {
    /// Lays the controls out on a `RENDER_WIDTH` x `RENDER_HEIGHT` canvas.
    pub fn new(show_arrows: bool, show_copy: bool) -> Self {
        let size = 96.0;
        let margin = 32.0;
        let middle = (RENDER_HEIGHT as f32 - size) * 0.5;

        let previous = show_arrows.then(|| {
            Button::new(
                Rectangle::new(margin, middle, size, size),
                "<",
                Command::Carousel(Trigger::Previous),
            )
        });
        let next = show_arrows.then(|| {
            Button::new(
                Rectangle::new(RENDER_WIDTH as f32 - margin - size, middle, size, size),
                ">",
                Command::Carousel(Trigger::Next),
            )
        });
        let copy = show_copy.then(|| {
            Button::new(
                Rectangle::new(
                    (RENDER_WIDTH as f32 - 360.0) * 0.5,
                    RENDER_HEIGHT as f32 - margin - 64.0,
                    360.0,
                    64.0,
                ),
                "Copy citation",
                Command::Copy,
            )
        });

        Self { previous, next, copy }
    }

    pub fn arrows(&self) -> impl Iterator<Item = &Button> {
        [&self.previous, &self.next].into_iter().flatten()
    }

    fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.arrows().chain(self.copy.as_ref())
    }

    /// Command of the button under `point`, if any.
    pub fn hit(&self, point: Vector2) -> Option<Command> {
        self.buttons().find(|b| b.contains(point)).map(|b| b.command)
    }

    /// Collects this frame's commands from the keyboard and from a click at
    /// `pointer` (already mapped to canvas coordinates).
    pub fn poll(&self, rl: &RaylibHandle, pointer: Vector2) -> Vec<Command> {
        let mut commands = Vec::new();

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            commands.push(Command::Carousel(Trigger::Next));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            commands.push(Command::Carousel(Trigger::Previous));
        }
        if self.copy.is_some() && rl.is_key_pressed(KeyboardKey::KEY_C) {
            commands.push(Command::Copy);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            commands.extend(self.hit(pointer));
        }

        commands
    }
}
