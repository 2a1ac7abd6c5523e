use ggez::conf::{FullscreenType, WindowMode, WindowSetup};
use ggez::event::EventHandler;
use ggez::graphics::{Canvas, FontData};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::Context;

use crate::app::prefs::{Prefs, StartScene, FONT_NAME};
use crate::app::scene::{Scene, SceneHost, SnakeScene, TitleScene};
use crate::error::{Error, ErrorConversion, Result};
use crate::rendering::palette;

pub mod audio;
pub mod control;
pub mod game;
pub mod input;
pub mod prefs;
pub mod scene;

pub struct App {
    host: SceneHost,
}

impl App {
    pub fn new(ctx: &mut Context, prefs: Prefs) -> Result<Self> {
        let grid = prefs.grid()?;

        if let Some(path) = &prefs.font {
            let font = FontData::from_path(ctx, path)?;
            ctx.gfx.add_font(FONT_NAME, font);
        }
        audio::init(prefs.music_volume);

        let first: Box<dyn Scene> = match prefs.start_scene {
            StartScene::Title => Box::new(TitleScene::new(prefs, grid)),
            StartScene::Snake => Box::new(SnakeScene::new(prefs, grid)),
        };
        let mut host = SceneHost::new();
        host.load_scene(first, ctx).with_trace_step("App::new")?;

        Ok(Self { host })
    }

    pub fn wm(prefs: &Prefs) -> WindowMode {
        WindowMode {
            width: prefs.width as f32,
            height: prefs.height as f32,
            maximized: false,
            fullscreen_type: FullscreenType::Windowed,
            borderless: false,
            resizable: false,
            ..WindowMode::default()
        }
    }

    pub fn ws(prefs: &Prefs) -> WindowSetup {
        WindowSetup::default()
            .title(&prefs.window_title)
            .vsync(true)
    }
}

/// Escape quits from the title only, and never on a repeat: a back
/// press held over from the snake scene repeats into the title.
fn quits_on(key: Option<KeyCode>, repeated: bool, scene: Option<&str>) -> bool {
    key == Some(KeyCode::Escape) && !repeated && scene == Some("title")
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        let dt = ctx.time.delta();
        self.host.update(ctx, dt)
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        if self.host.is_empty() {
            log::warn!("no active scene");
            Canvas::from_frame(ctx, palette::BACKGROUND).finish(ctx)?;
            return Ok(());
        }
        self.host.draw(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> Result {
        if quits_on(input.keycode, repeated, self.host.scene_name()) {
            ctx.request_quit();
        }
        Ok(())
    }

    fn quit_event(&mut self, ctx: &mut Context) -> Result<bool> {
        log::info!("shutting down");
        self.host.shutdown();
        audio::teardown(ctx)?;
        Ok(false)
    }
}

#[test]
fn test_escape_quits_only_fresh_on_title() {
    let esc = Some(KeyCode::Escape);
    assert!(quits_on(esc, false, Some("title")));
    // held over from the snake scene's back press
    assert!(!quits_on(esc, true, Some("title")));
    assert!(!quits_on(esc, false, Some("snake")));
    assert!(!quits_on(esc, false, None));
    assert!(!quits_on(Some(KeyCode::Q), false, Some("title")));
}
