use ggez::graphics::{Color, DrawParam, Image, ImageFormat, Rect};
use ggez::Context;
use itertools::iproduct;

const FORMAT: ImageFormat = ImageFormat::Rgba8UnormSrgb;

/// A single white pixel, tinted and stretched to draw filled rectangles
pub fn pixel(ctx: &Context) -> Image {
    let (r, g, b, a) = Color::WHITE.to_rgba();
    Image::from_pixels(ctx, &[r, g, b, a], FORMAT, 1, 1)
}

/// A filled circle of the given color on a transparent square of side `2 * radius`
pub fn circle(ctx: &Context, radius: u32, color: Color) -> Image {
    let diameter = radius * 2;
    Image::from_pixels(ctx, &circle_rgba(radius, color), FORMAT, diameter, diameter)
}

/// Row-major RGBA bytes of a filled circle, a pixel is inside when its
/// offset from the center is at most `radius`
pub fn circle_rgba(radius: u32, color: Color) -> Vec<u8> {
    let (r, g, b, a) = color.to_rgba();
    let radius = radius as i64;
    let diameter = radius * 2;
    iproduct!(0..diameter, 0..diameter)
        .flat_map(|(y, x)| {
            let (dx, dy) = (x - radius, y - radius);
            if dx * dx + dy * dy <= radius * radius {
                [r, g, b, a]
            } else {
                [0; 4]
            }
        })
        .collect()
}

/// Scale and position an image so that it exactly covers `rect`
pub fn stretch(image: &Image, rect: Rect) -> DrawParam {
    DrawParam::default()
        .dest([rect.x, rect.y])
        .scale([rect.w / image.width() as f32, rect.h / image.height() as f32])
}
