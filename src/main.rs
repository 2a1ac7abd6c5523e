#[macro_use]
extern crate derive_more;

use std::{env, path::PathBuf, process};

use ggez::event::run;
use ggez::ContextBuilder;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::app::prefs::Prefs;
use crate::app::App;
use crate::error::{Error, ErrorType};

mod app;
mod basic;
mod error;
mod rendering;
mod support;

fn main() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .expect("failed to initialize logger");

    let prefs = Prefs::default().from_args(env::args());
    if let Err(e) = prefs.grid() {
        exit_with(e);
    }

    let mut builder = ContextBuilder::new("scene_snake", "gorilskij")
        .window_mode(App::wm(&prefs))
        .window_setup(App::ws(&prefs));
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        builder = builder.add_resource_path(PathBuf::from(manifest_dir).join("resources"));
    }

    let (mut ctx, event_loop) = match builder.build() {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("failed to create window: {}", e);
            process::exit(1);
        }
    };

    log::info!("starting with {:?}", prefs.start_scene);
    let app = match App::new(&mut ctx, prefs) {
        Ok(app) => app,
        Err(e) => exit_with(e),
    };

    run(ctx, event_loop, app)
}

fn exit_with(e: Error) -> ! {
    let code = match e.kind() {
        ErrorType::GridError(_) => {
            log::error!("invalid window configuration: {}", e);
            2
        }
        ErrorType::GameError(_) => {
            log::error!("{}", e);
            1
        }
    };
    process::exit(code)
}
