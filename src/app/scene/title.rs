use std::cell::Cell;
use std::rc::Rc;

use ggez::graphics::{Canvas, DrawParam, Image, Rect, TextLayout};
use ggez::{Context, GameError};

use crate::app::input::MouseSnapshot;
use crate::app::prefs::Prefs;
use crate::app::scene::{Content, Scene, SnakeScene};
use crate::basic::{Grid, Point};
use crate::error::Result;
use crate::rendering::{self, palette};
use crate::support::text_layout::TextLayoutExtension;

const ROWS: usize = 5;
const ROW_SIZE: Point = Point { x: 100., y: 50. };
const ROW_SPACING: f32 = 100.;
const TITLE_SCALE: f32 = 48.;
const ROW_SCALE: f32 = 24.;

/// A rectangle on screen and what happens when it is clicked
pub struct ClickRegion {
    pub rect: Rect,
    action: Box<dyn Fn()>,
}

/// The click targets of the last drawn frame
#[derive(Default)]
pub struct Menu {
    regions: Vec<ClickRegion>,
}

impl Menu {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push<F: Fn() + 'static>(&mut self, rect: Rect, action: F) {
        self.regions.push(ClickRegion { rect, action: Box::new(action) });
    }

    pub fn regions(&self) -> &[ClickRegion] {
        &self.regions
    }

    /// Run the action of every region containing `point`,
    /// returns how many were hit
    pub fn click(&self, point: Point) -> usize {
        let mut hits = 0;
        for region in self.regions.iter().filter(|r| r.rect.contains(point)) {
            log::info!("click at {:?} inside {:?}", point, region.rect);
            (region.action)();
            hits += 1;
        }
        hits
    }
}

/// Distance of the content from the top-left corner of the window
fn padding(width: f32, height: f32) -> Point {
    const RATE: f32 = 0.1;
    Point {
        x: (width * RATE).min(100.),
        y: (height * RATE).min(100.),
    }
}

/// Top-left corner of the `i`th menu row, counting from 1
fn row_position(padding: Point, i: usize) -> Point {
    padding + Point { x: 0., y: i as f32 * ROW_SPACING }
}

fn row_label(i: usize) -> String {
    match i {
        1 => "start game".to_string(),
        i => format!("options {}", i),
    }
}

/// Title screen with a flat list of clickable rows
pub struct TitleScene {
    prefs: Prefs,
    grid: Grid,
    padding: Point,
    menu: Menu,
    content: Content<Image>,
    start_requested: Rc<Cell<bool>>,
}

impl TitleScene {
    pub fn new(prefs: Prefs, grid: Grid) -> Self {
        let padding = padding(prefs.width as f32, prefs.height as f32);
        Self {
            prefs,
            grid,
            padding,
            menu: Menu::default(),
            content: Content::new("/"),
            start_requested: Rc::new(Cell::new(false)),
        }
    }

    /// Replace last frame's click targets with this frame's
    fn rebuild_menu(&mut self) {
        self.menu.clear();
        for i in 1..=ROWS {
            let pos = row_position(self.padding, i);
            let rect = Rect::new(pos.x, pos.y, ROW_SIZE.x, ROW_SIZE.y);
            let label = row_label(i);
            let start_requested = Rc::clone(&self.start_requested);
            self.menu.push(rect, move || {
                log::info!("click {}", label);
                if i == 1 {
                    start_requested.set(true);
                }
            });
        }
    }
}

impl Scene for TitleScene {
    fn name(&self) -> &str {
        "title"
    }

    fn load_content(&mut self, ctx: &mut Context) -> Result {
        self.content.set(rendering::pixel(ctx));
        Ok(())
    }

    fn unload_content(&mut self) {
        self.content.unload();
        self.menu.clear();
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        self.rebuild_menu();

        let pixel = self
            .content
            .get()
            .ok_or_else(|| GameError::CustomError("title drawn before loading".to_string()))?;
        let font = self.prefs.font_name();
        let mut canvas = Canvas::from_frame(ctx, palette::BACKGROUND);

        let mut title = rendering::text(self.prefs.window_title.as_str(), TITLE_SCALE, font);
        title.set_layout(TextLayout::top_middle());
        let center = Point { x: self.prefs.width as f32 / 2., y: self.padding.y };
        canvas.draw(&title, DrawParam::default().dest(center).color(palette::TITLE));

        for (i, region) in (1..).zip(self.menu.regions()) {
            canvas.draw(
                pixel,
                rendering::stretch(pixel, region.rect).color(palette::MENU_ROW),
            );
            let label = rendering::text(row_label(i), ROW_SCALE, font);
            let pos = Point { x: region.rect.x, y: region.rect.y };
            canvas.draw(&label, DrawParam::default().dest(pos).color(palette::MENU_TEXT));
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn on_mouse(&mut self, current: &MouseSnapshot, previous: &MouseSnapshot) {
        if current.left_just_pressed(previous) {
            self.menu.click(current.position);
        }
    }

    fn next_scene(&mut self) -> Option<Box<dyn Scene>> {
        if self.start_requested.replace(false) {
            Some(Box::new(SnakeScene::new(self.prefs.clone(), self.grid)))
        } else {
            None
        }
    }
}
