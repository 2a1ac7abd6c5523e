use std::time::Duration;

use ggez::Context;

use crate::app::input::{InputSource, InputTracker, KeyboardSnapshot, MouseSnapshot};
use crate::error::{ErrorConversion, Result};

pub use content::Content;
pub use snake::SnakeScene;
pub use title::TitleScene;

mod content;
mod snake;
mod title;

/// A self-contained unit of update/draw/input logic with its own assets.
/// Exactly one scene is active at a time, owned by a [`SceneHost`].
///
/// `C` is whatever the host hands down every frame, normally the
/// `ggez::Context`.
pub trait Scene<C: ?Sized = Context> {
    fn name(&self) -> &str;

    /// Called once when the scene becomes active
    fn initialize(&mut self, ctx: &mut C) -> Result {
        self.load_content(ctx)
    }

    fn load_content(&mut self, _ctx: &mut C) -> Result {
        Ok(())
    }

    /// Release everything [`Scene::load_content`] acquired, called at
    /// most once, when the scene is disposed
    fn unload_content(&mut self) {}

    fn update(&mut self, _ctx: &mut C, _dt: Duration) -> Result {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut C) -> Result;

    fn on_keyboard(&mut self, _current: &KeyboardSnapshot, _previous: &KeyboardSnapshot) {}

    fn on_mouse(&mut self, _current: &MouseSnapshot, _previous: &MouseSnapshot) {}

    /// Polled after every update, returning a scene replaces this one
    fn next_scene(&mut self) -> Option<Box<dyn Scene<C>>> {
        None
    }
}

/// The per-scene state every scene has: input history and whether
/// it has been disposed
struct Stage<C: ?Sized> {
    scene: Box<dyn Scene<C>>,
    input: InputTracker,
    disposed: bool,
}

impl<C: ?Sized> Stage<C> {
    fn new(scene: Box<dyn Scene<C>>) -> Self {
        Self {
            scene,
            input: InputTracker::default(),
            disposed: false,
        }
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        log::info!("disposing scene {}", self.scene.name());
        self.scene.unload_content();
    }
}

impl<C: InputSource + ?Sized> Stage<C> {
    fn update(&mut self, ctx: &mut C, dt: Duration) -> Result {
        if self.disposed {
            return Ok(());
        }
        self.scene.update(ctx, dt)?;

        let ((keyboard, prev_keyboard), (mouse, prev_mouse)) = self.input.poll(ctx);
        self.scene.on_keyboard(&keyboard, &prev_keyboard);
        self.scene.on_mouse(&mouse, &prev_mouse);
        Ok(())
    }
}

impl<C: ?Sized> Drop for Stage<C> {
    fn drop(&mut self) {
        self.dispose()
    }
}

/// Single-slot scene switcher, no history and no transitions
pub struct SceneHost<C: ?Sized = Context> {
    current: Option<Stage<C>>,
}

impl<C: ?Sized> Default for SceneHost<C> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<C: InputSource + ?Sized> SceneHost<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn scene_name(&self) -> Option<&str> {
        self.current.as_ref().map(|stage| stage.scene.name())
    }

    /// Dispose the active scene (if any), then activate and initialize `next`
    pub fn load_scene(&mut self, next: Box<dyn Scene<C>>, ctx: &mut C) -> Result {
        if let Some(mut previous) = self.current.take() {
            previous.dispose();
        }
        log::info!("loading scene {}", next.name());
        let stage = self.current.insert(Stage::new(next));
        stage
            .scene
            .initialize(ctx)
            .with_trace_step(format!("SceneHost::load_scene({})", stage.scene.name()))
    }

    pub fn update(&mut self, ctx: &mut C, dt: Duration) -> Result {
        let Some(stage) = self.current.as_mut() else {
            return Ok(());
        };
        stage.update(ctx, dt)?;
        if let Some(next) = stage.scene.next_scene() {
            self.load_scene(next, ctx)?;
        }
        Ok(())
    }

    pub fn draw(&mut self, ctx: &mut C) -> Result {
        match self.current.as_mut() {
            Some(stage) => stage.scene.draw(ctx),
            None => Ok(()),
        }
    }

    /// Dispose the active scene and leave the slot empty
    pub fn shutdown(&mut self) {
        if let Some(mut stage) = self.current.take() {
            stage.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    #[derive(Default)]
    struct FakeCtx {
        keyboard: KeyboardSnapshot,
        mouse: MouseSnapshot,
    }

    impl InputSource for FakeCtx {
        fn keyboard(&self) -> KeyboardSnapshot {
            self.keyboard.clone()
        }

        fn mouse(&self) -> MouseSnapshot {
            self.mouse
        }
    }

    struct Recorder {
        name: &'static str,
        log: Log,
        successor: Option<&'static str>,
    }

    impl Recorder {
        fn boxed(name: &'static str, log: &Log) -> Box<dyn Scene<FakeCtx>> {
            Box::new(Self { name, log: log.clone(), successor: None })
        }

        fn push(&self, what: &str) {
            self.log.borrow_mut().push(format!("{} {}", self.name, what));
        }
    }

    impl Scene<FakeCtx> for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn load_content(&mut self, _ctx: &mut FakeCtx) -> Result {
            self.push("load");
            Ok(())
        }

        fn unload_content(&mut self) {
            self.push("unload");
        }

        fn update(&mut self, _ctx: &mut FakeCtx, _dt: Duration) -> Result {
            self.push("update");
            Ok(())
        }

        fn draw(&mut self, _ctx: &mut FakeCtx) -> Result {
            self.push("draw");
            Ok(())
        }

        fn on_mouse(&mut self, current: &MouseSnapshot, previous: &MouseSnapshot) {
            if current.left_just_pressed(previous) {
                self.push("click");
            }
        }

        fn next_scene(&mut self) -> Option<Box<dyn Scene<FakeCtx>>> {
            let name = self.successor.take()?;
            Some(Recorder::boxed(name, &self.log))
        }
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn test_swap_disposes_previous_first() {
        let log = Log::default();
        let mut ctx = FakeCtx::default();
        let mut host = SceneHost::new();
        host.load_scene(Recorder::boxed("a", &log), &mut ctx).unwrap();
        host.load_scene(Recorder::boxed("b", &log), &mut ctx).unwrap();
        assert_eq!(entries(&log), vec!["a load", "a unload", "b load"]);
        assert_eq!(host.scene_name(), Some("b"));

        drop(host);
        assert_eq!(entries(&log), vec!["a load", "a unload", "b load", "b unload"]);
    }

    #[test]
    fn test_empty_host_is_noop() {
        let mut ctx = FakeCtx::default();
        let mut host: SceneHost<FakeCtx> = SceneHost::new();
        assert!(host.is_empty());
        host.update(&mut ctx, Duration::from_millis(16)).unwrap();
        host.draw(&mut ctx).unwrap();
        host.shutdown();
        assert!(host.is_empty());
    }

    #[test]
    fn test_shutdown_disposes_once() {
        let log = Log::default();
        let mut ctx = FakeCtx::default();
        let mut host = SceneHost::new();
        host.load_scene(Recorder::boxed("a", &log), &mut ctx).unwrap();
        host.shutdown();
        host.shutdown();
        drop(host);
        assert_eq!(entries(&log), vec!["a load", "a unload"]);
    }

    #[test]
    fn test_stage_dispose_is_idempotent() {
        let log = Log::default();
        let mut stage = Stage::<FakeCtx>::new(Recorder::boxed("a", &log));
        stage.dispose();
        stage.dispose();
        stage.update(&mut FakeCtx::default(), Duration::ZERO).unwrap();
        drop(stage);
        assert_eq!(entries(&log), vec!["a unload"]);
    }

    #[test]
    fn test_mouse_is_edge_triggered() {
        let log = Log::default();
        let mut ctx = FakeCtx::default();
        let mut host = SceneHost::new();
        host.load_scene(Recorder::boxed("a", &log), &mut ctx).unwrap();

        ctx.mouse.left = true;
        host.update(&mut ctx, Duration::ZERO).unwrap();
        host.update(&mut ctx, Duration::ZERO).unwrap();
        ctx.mouse.left = false;
        host.update(&mut ctx, Duration::ZERO).unwrap();
        ctx.mouse.left = true;
        host.update(&mut ctx, Duration::ZERO).unwrap();

        let clicks = entries(&log).iter().filter(|e| *e == "a click").count();
        assert_eq!(clicks, 2);
    }

    #[test]
    fn test_requested_successor_replaces_scene() {
        let log = Log::default();
        let mut ctx = FakeCtx::default();
        let mut host: SceneHost<FakeCtx> = SceneHost::new();
        let first = Box::new(Recorder { name: "a", log: log.clone(), successor: Some("b") });
        host.load_scene(first, &mut ctx).unwrap();
        host.update(&mut ctx, Duration::ZERO).unwrap();
        host.draw(&mut ctx).unwrap();
        assert_eq!(host.scene_name(), Some("b"));
        assert_eq!(
            entries(&log),
            vec!["a load", "a update", "a unload", "b load", "b draw"]
        );
    }
}
