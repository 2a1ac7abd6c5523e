use ggez::graphics::{Text, TextFragment};

pub use texture::{circle, pixel, stretch};

mod texture;

/// Text in the given font, `None` meaning the built-in one
pub fn text<T: Into<TextFragment>>(content: T, scale: f32, font: Option<&str>) -> Text {
    let mut text = Text::new(content);
    text.set_scale(scale);
    if let Some(font) = font {
        text.set_font(font);
    }
    text
}

pub mod palette {
    use ggez::graphics::Color;

    pub const BACKGROUND: Color = Color::new(100. / 255., 149. / 255., 237. / 255., 1.); // cornflower blue
    pub const SNAKE: Color = Color::BLACK;
    pub const FOOD: Color = Color::new(1., 165. / 255., 0., 1.); // orange
    pub const SCORE: Color = Color::BLACK;
    pub const TITLE: Color = Color::WHITE;
    pub const MENU_ROW: Color = Color::new(0., 1., 1., 1.); // aqua
    pub const MENU_TEXT: Color = Color::BLACK;
}
