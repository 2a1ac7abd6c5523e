use std::cell::RefCell;

use ggez::audio::{self, SoundSource};
use ggez::{Context, GameResult};

/// A piece of looping background music
pub trait Track {
    type Ctx: ?Sized;

    fn is_playing(&self) -> bool;
    fn start(&mut self, ctx: &mut Self::Ctx, volume: f32) -> GameResult;
    fn halt(&mut self, ctx: &mut Self::Ctx) -> GameResult;
}

impl Track for audio::Source {
    type Ctx = Context;

    fn is_playing(&self) -> bool {
        self.playing()
    }

    fn start(&mut self, ctx: &mut Context, volume: f32) -> GameResult {
        self.set_repeat(true);
        self.set_volume(volume);
        self.play(ctx)
    }

    fn halt(&mut self, ctx: &mut Context) -> GameResult {
        self.stop(ctx)
    }
}

/// The one background music player of the process, at most one
/// track plays at a time
pub struct Jukebox<T: Track = audio::Source> {
    volume: f32,
    current: Option<T>,
}

impl<T: Track> Jukebox<T> {
    pub fn new(volume: f32) -> Self {
        Self { volume, current: None }
    }

    pub fn is_playing(&self) -> bool {
        self.current.as_ref().map_or(false, T::is_playing)
    }

    /// Start looping `track`, stopping whatever was playing before
    pub fn play(&mut self, ctx: &mut T::Ctx, mut track: T) -> GameResult {
        self.stop(ctx)?;
        track.start(ctx, self.volume)?;
        log::info!("music started (volume {})", self.volume);
        self.current = Some(track);
        Ok(())
    }

    pub fn stop(&mut self, ctx: &mut T::Ctx) -> GameResult {
        let playing = self.is_playing();
        match self.current.take() {
            Some(mut track) if playing => {
                track.halt(ctx)?;
                log::info!("music stopped");
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

thread_local! {
    static JUKEBOX: RefCell<Option<Jukebox>> = RefCell::new(None);
}

/// Set up the process-wide jukebox, must happen before any scene loads
pub fn init(volume: f32) {
    JUKEBOX.with(|j| *j.borrow_mut() = Some(Jukebox::new(volume)));
}

/// Stop the music and drop the jukebox, later calls to [`play`] are ignored
pub fn teardown(ctx: &mut Context) -> GameResult {
    match JUKEBOX.with(|j| j.borrow_mut().take()) {
        Some(mut jukebox) => jukebox.stop(ctx),
        None => Ok(()),
    }
}

/// Hand a track to the process-wide jukebox
pub fn play(ctx: &mut Context, track: audio::Source) -> GameResult {
    JUKEBOX.with(|j| match j.borrow_mut().as_mut() {
        Some(jukebox) => jukebox.play(ctx, track),
        None => {
            log::warn!("jukebox not initialized, dropping music track");
            Ok(())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log(Vec<String>);

    struct FakeTrack {
        name: &'static str,
        playing: bool,
    }

    impl FakeTrack {
        fn new(name: &'static str) -> Self {
            Self { name, playing: false }
        }
    }

    impl Track for FakeTrack {
        type Ctx = Log;

        fn is_playing(&self) -> bool {
            self.playing
        }

        fn start(&mut self, log: &mut Log, volume: f32) -> GameResult {
            self.playing = true;
            log.0.push(format!("start {} at {}", self.name, volume));
            Ok(())
        }

        fn halt(&mut self, log: &mut Log) -> GameResult {
            self.playing = false;
            log.0.push(format!("stop {}", self.name));
            Ok(())
        }
    }

    #[test]
    fn test_stops_before_replay() {
        let mut log = Log::default();
        let mut jukebox = Jukebox::new(0.5);
        jukebox.play(&mut log, FakeTrack::new("title")).unwrap();
        jukebox.play(&mut log, FakeTrack::new("game")).unwrap();
        assert!(jukebox.is_playing());
        assert_eq!(log.0, vec!["start title at 0.5", "stop title", "start game at 0.5"]);
    }

    #[test]
    fn test_stop_when_idle() {
        let mut log = Log::default();
        let mut jukebox: Jukebox<FakeTrack> = Jukebox::new(0.5);
        jukebox.stop(&mut log).unwrap();
        assert!(!jukebox.is_playing());
        assert!(log.0.is_empty());
    }
}
