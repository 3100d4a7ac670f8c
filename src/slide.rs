use raylib::prelude::*;

use crate::carousel::{Offset, Track};
use crate::constants::*;

pub enum Slide {
    Image(Texture2D),
    /// Stands in for an image that could not be loaded.
    Placeholder,
}

impl Slide {
    /// Scale that fits a `width` x `height` image inside the viewport.
    /// Images that already fit keep their size.
    pub fn fit_scale(width: f32, height: f32, viewport: Rectangle) -> f32 {
        let max_width = viewport.width * SLIDE_FIT_RATIO;
        let max_height = viewport.height * SLIDE_FIT_RATIO;
        (max_width / width).min(max_height / height).min(1.0)
    }

    /// Draws the slide centered in `frame`.
    pub fn draw(&self, d: &mut impl RaylibDraw, frame: Rectangle) {
        match self {
            Slide::Image(image) => {
                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;
                let scale = Slide::fit_scale(tex_width, tex_height, frame);

                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;

                d.draw_texture_pro(
                    image,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(
                        frame.x + (frame.width - scaled_width) * 0.5,
                        frame.y + (frame.height - scaled_height) * 0.5,
                        scaled_width,
                        scaled_height,
                    ),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
            Slide::Placeholder => {
                // 600x400 panel, like the placeholder service the page used to fall back to
                let scale = Slide::fit_scale(600.0, 400.0, frame);
                let panel = Rectangle::new(
                    frame.x + (frame.width - 600.0 * scale) * 0.5,
                    frame.y + (frame.height - 400.0 * scale) * 0.5,
                    600.0 * scale,
                    400.0 * scale,
                );
                d.draw_rectangle_rec(panel, PLACEHOLDER_BACKGROUND);

                let font_size = (48.0 * scale) as i32;
                d.draw_text(
                    PLACEHOLDER_CAPTION,
                    (panel.x + 40.0 * scale) as i32,
                    (panel.y + panel.height * 0.5 - font_size as f32) as i32,
                    font_size,
                    PLACEHOLDER_FOREGROUND,
                );
                d.draw_text(
                    PLACEHOLDER_ALT,
                    (panel.x + 40.0 * scale) as i32,
                    (panel.y + panel.height * 0.5 + font_size as f32 * 0.5) as i32,
                    font_size / 2,
                    Color::GRAY,
                );
            }
        }
    }
}

/// The row of slides the carousel shifts left and right.
pub struct SlideTrack {
    slides: Vec<Slide>,
    viewport: Rectangle,
    offset: Offset,
}

impl SlideTrack {
    pub fn new(slides: Vec<Slide>, viewport: Rectangle) -> Self {
        Self { slides, viewport, offset: Offset::default() }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Where slide `index` currently sits, one viewport width per slide.
    pub fn frame(&self, index: usize) -> Rectangle {
        let width = self.viewport.width;
        Rectangle::new(
            self.viewport.x + index as f32 * width + self.offset().pixels(width),
            self.viewport.y,
            width,
            self.viewport.height,
        )
    }

    /// Indices of the slides that overlap the viewport.
    pub fn visible(&self) -> Vec<usize> {
        let left = self.viewport.x;
        let right = self.viewport.x + self.viewport.width;
        (0..self.slides.len())
            .filter(|&i| {
                let frame = self.frame(i);
                frame.x < right && frame.x + frame.width > left
            })
            .collect()
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        for i in self.visible() {
            self.slides[i].draw(d, self.frame(i));
        }
    }
}

impl Track for SlideTrack {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Carousel, CarouselOptions};

    fn viewport() -> Rectangle {
        Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32)
    }

    fn placeholders(n: usize) -> SlideTrack {
        SlideTrack::new((0..n).map(|_| Slide::Placeholder).collect(), viewport())
    }

    #[test]
    fn small_images_keep_their_size() {
        assert_eq!(Slide::fit_scale(600.0, 400.0, viewport()), 1.0);
    }

    #[test]
    fn large_images_fit_the_viewport() {
        let wide = Slide::fit_scale(3456.0, 1000.0, viewport());
        assert!((3456.0 * wide - 1728.0).abs() < 0.01);

        let tall = Slide::fit_scale(1000.0, 1944.0, viewport());
        assert!((1944.0 * tall - 972.0).abs() < 0.01);
    }

    #[test]
    fn slides_sit_one_width_apart() {
        let track = placeholders(3);
        assert_eq!(track.frame(0).x, 0.0);
        assert_eq!(track.frame(2).x, 2.0 * RENDER_WIDTH as f32);
        assert_eq!(track.visible(), vec![0]);
    }

    #[test]
    fn carousel_offset_brings_active_slide_into_view() {
        let mut carousel =
            Carousel::initialize(placeholders(3), CarouselOptions::default()).unwrap();
        carousel.advance();
        carousel.advance();

        let track = carousel.track();
        assert_eq!(track.offset().percent(), -200.0);
        assert_eq!(track.frame(2).x, 0.0);
        assert_eq!(track.frame(0).x, -2.0 * RENDER_WIDTH as f32);
        assert_eq!(track.visible(), vec![2]);
    }

    #[test]
    fn partial_offset_shows_two_slides() {
        let mut track = placeholders(3);
        track.set_offset(Offset::for_index(1, 50.0));
        assert_eq!(track.visible(), vec![0, 1]);
    }

    #[test]
    fn empty_track_has_nothing_visible() {
        let track = placeholders(0);
        assert_eq!(track.slide_count(), 0);
        assert!(track.visible().is_empty());
    }
}
