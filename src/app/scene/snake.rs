use std::time::Duration;

use ggez::audio::{self, SoundSource};
use ggez::graphics::{Canvas, Color, DrawParam, Drawable, Image};
use ggez::input::keyboard::KeyCode;
use ggez::{Context, GameError};

use crate::app::audio as jukebox;
use crate::app::game::{Event, SnakeGame};
use crate::app::input::KeyboardSnapshot;
use crate::app::prefs::Prefs;
use crate::app::scene::{Content, Scene, TitleScene};
use crate::basic::{Dir, Grid, Point};
use crate::error::{ErrorConversion, Result};
use crate::rendering::{self, palette};

const SCORE_SCALE: f32 = 24.;

// checked in this order every update, all held keys are applied
const CONTROLS: [(Dir, [KeyCode; 2]); 4] = [
    (Dir::Up, [KeyCode::Up, KeyCode::W]),
    (Dir::Down, [KeyCode::Down, KeyCode::S]),
    (Dir::Left, [KeyCode::Left, KeyCode::A]),
    (Dir::Right, [KeyCode::Right, KeyCode::D]),
];

struct Assets {
    eat: audio::Source,
    level_up: audio::Source,
    // loaded with the rest, nothing triggers it since the game never ends
    #[allow(dead_code)]
    game_over: audio::Source,
    pixel: Image,
    circle: Image,
}

pub struct SnakeScene {
    prefs: Prefs,
    grid: Grid,
    /// Created when the scene is initialized
    game: Option<SnakeGame>,
    content: Content<Assets>,
    back_to_title: bool,
}

impl SnakeScene {
    pub fn new(prefs: Prefs, grid: Grid) -> Self {
        Self {
            prefs,
            grid,
            game: None,
            content: Content::new("music"),
            back_to_title: false,
        }
    }

    /// Fresh snake, food and score
    fn start_game(&mut self) {
        log::info!("new game on a {}x{} grid", self.grid.cols, self.grid.rows);
        self.game = Some(SnakeGame::new(self.grid, self.prefs.move_interval));
    }

    fn load_assets(&mut self, ctx: &mut Context) -> Result {
        let bgm = audio::Source::new(ctx, self.content.path("bgm.ogg"))?;
        let eat = audio::Source::new(ctx, self.content.path("eat.wav"))?;
        let level_up = audio::Source::new(ctx, self.content.path("level up.wav"))?;
        let game_over = audio::Source::new(ctx, self.content.path("game over.wav"))?;

        let radius = (self.grid.cell_size / 2) as u32;
        self.content.set(Assets {
            eat,
            level_up,
            game_over,
            pixel: rendering::pixel(ctx),
            circle: rendering::circle(ctx, radius, Color::WHITE),
        });

        jukebox::play(ctx, bgm)?;
        Ok(())
    }

    fn loaded_assets(&mut self) -> Result<&mut Assets> {
        self.content
            .get_mut()
            .ok_or_else(|| GameError::CustomError("snake scene used before loading".to_string()).into())
    }
}

impl Scene for SnakeScene {
    fn name(&self) -> &str {
        "snake"
    }

    fn initialize(&mut self, ctx: &mut Context) -> Result {
        self.start_game();
        self.load_content(ctx)
    }

    fn load_content(&mut self, ctx: &mut Context) -> Result {
        if self.content.is_loaded() {
            log::warn!("snake scene assets already loaded");
            return Ok(());
        }
        self.load_assets(ctx).with_trace_step("SnakeScene::load_content")
    }

    fn unload_content(&mut self) {
        self.content.unload();
    }

    fn update(&mut self, ctx: &mut Context, dt: Duration) -> Result {
        let Some(game) = self.game.as_mut() else {
            return Ok(());
        };
        let events = game.advance(dt);
        if events.is_empty() {
            return Ok(());
        }

        let assets = self.loaded_assets()?;
        for event in events {
            match event {
                Event::Ate { score } => {
                    log::info!("food eaten, score {}", score);
                    assets.eat.play_detached(ctx)?;
                    assets.level_up.play_detached(ctx)?;
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let font = self.prefs.font_name();
        let game = self.game.as_ref().ok_or_else(|| {
            GameError::CustomError("snake scene drawn before initialize".to_string())
        })?;
        let grid = game.grid();

        let mut canvas = Canvas::from_frame(ctx, palette::BACKGROUND);
        let assets = self.content.get().ok_or_else(|| {
            GameError::CustomError("snake scene drawn before loading".to_string())
        })?;

        canvas.draw(
            &assets.circle,
            rendering::stretch(&assets.circle, grid.to_pixel(game.food())).color(palette::FOOD),
        );

        for cell in game.snake().cells() {
            canvas.draw(
                &assets.pixel,
                rendering::stretch(&assets.pixel, grid.to_pixel(cell)).color(palette::SNAKE),
            );
        }

        // drawn offset by its own size
        let text = rendering::text(format!("Score: {}", game.score()), SCORE_SCALE, font);
        let offset = text
            .dimensions(ctx)
            .map(|r| Point { x: r.w, y: r.h })
            .unwrap_or_default();
        canvas.draw(&text, DrawParam::default().dest(offset).color(palette::SCORE));

        canvas.finish(ctx)?;
        Ok(())
    }

    fn on_keyboard(&mut self, current: &KeyboardSnapshot, previous: &KeyboardSnapshot) {
        if let Some(game) = self.game.as_mut() {
            for (dir, keys) in CONTROLS {
                if keys.iter().any(|&k| current.is_down(k)) {
                    game.steer(dir);
                }
            }
        }

        if current.just_pressed(previous, KeyCode::Escape) {
            self.back_to_title = true;
        }
    }

    fn next_scene(&mut self) -> Option<Box<dyn Scene>> {
        if std::mem::take(&mut self.back_to_title) {
            Some(Box::new(TitleScene::new(self.prefs.clone(), self.grid)))
        } else {
            None
        }
    }
}
