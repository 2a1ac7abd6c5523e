use ggez::graphics::{TextAlign, TextLayout};

pub trait TextLayoutExtension {
    // top_left is TextLayout::top_left()
    fn top_middle() -> Self;
}

impl TextLayoutExtension for TextLayout {
    fn top_middle() -> Self {
        TextLayout {
            h_align: TextAlign::Middle,
            v_align: TextAlign::Begin,
        }
    }
}
