use std::time::Duration;

use static_assertions::const_assert;

use crate::basic::Grid;
use crate::error::{Error, ErrorConversion, Result};

const DEFAULT_WIDTH: i32 = 1280;
const DEFAULT_HEIGHT: i32 = 720;
const DEFAULT_CELL_SIZE: i32 = 20;
const DEFAULT_PADDING: i32 = 2;

// the default window must fit a padded grid
const_assert!(DEFAULT_WIDTH / DEFAULT_CELL_SIZE >= Grid::min_len(DEFAULT_PADDING));
const_assert!(DEFAULT_HEIGHT / DEFAULT_CELL_SIZE >= Grid::min_len(DEFAULT_PADDING));

/// Name under which a custom font is registered with ggez
pub const FONT_NAME: &str = "default";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StartScene {
    Title,
    Snake,
}

#[derive(Clone, Debug)]
pub struct Prefs {
    pub window_title: String,
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    /// Cells along each edge that are never part of the playing field
    pub padding: i32,

    pub move_interval: Duration,
    pub music_volume: f32,

    /// Resource path of a font to use instead of the built-in one
    pub font: Option<String>,
    pub start_scene: StartScene,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            window_title: "Snake".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            padding: DEFAULT_PADDING,

            move_interval: Duration::from_millis(100),
            music_volume: 0.5,

            font: None,
            start_scene: StartScene::Title,
        }
    }
}

// builder
impl Prefs {
    pub fn start_scene(mut self, start_scene: StartScene) -> Self {
        self.start_scene = start_scene;
        self
    }

    pub fn font<S: ToString>(mut self, path: S) -> Self {
        self.font = Some(path.to_string());
        self
    }

    /// Apply command line arguments: `snake` skips the title,
    /// `--font=PATH` replaces the built-in font
    pub fn from_args<I: IntoIterator<Item = String>>(self, args: I) -> Self {
        args.into_iter().skip(1).fold(self, |prefs, arg| match arg.as_str() {
            "snake" => prefs.start_scene(StartScene::Snake),
            "title" => prefs.start_scene(StartScene::Title),
            _ => match arg.strip_prefix("--font=") {
                Some(path) => prefs.font(path),
                None => {
                    log::warn!("ignoring unknown argument {:?}", arg);
                    prefs
                }
            },
        })
    }
}

impl Prefs {
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.width, self.height, self.cell_size, self.padding)
            .map_err(Error::from)
            .with_trace_step("Prefs::grid")
    }

    /// The font to set on text, `None` for the built-in one
    pub fn font_name(&self) -> Option<&'static str> {
        self.font.as_ref().map(|_| FONT_NAME)
    }
}

#[test]
fn test_default_grid() {
    let grid = Prefs::default().grid().unwrap();
    assert_eq!((grid.cols, grid.rows, grid.padding), (64, 36, 2));
}

#[test]
fn test_from_args() {
    let args = |a: &[&str]| a.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_eq!(
        Prefs::default().from_args(args(&["game", "snake"])).start_scene,
        StartScene::Snake
    );
    assert_eq!(Prefs::default().from_args(args(&["game"])).start_scene, StartScene::Title);
    let prefs = Prefs::default().from_args(args(&["game", "other", "--font=/fonts/mono.ttf"]));
    assert_eq!(prefs.start_scene, StartScene::Title);
    assert_eq!(prefs.font.as_deref(), Some("/fonts/mono.ttf"));
    assert_eq!(prefs.font_name(), Some(FONT_NAME));
}

#[test]
fn test_bad_grid_is_reported() {
    let prefs = Prefs { cell_size: 400, ..Prefs::default() };
    assert!(prefs.grid().is_err());
}
