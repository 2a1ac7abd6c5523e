/// Assets owned by one scene. Names are resolved against a root
/// directory inside the resource path and the loaded value is released
/// when the scene unloads.
pub struct Content<T> {
    root: String,
    loaded: Option<T>,
}

impl<T> Content<T> {
    pub fn new<S: ToString>(root: S) -> Self {
        Self { root: root.to_string(), loaded: None }
    }

    /// Full resource path of an asset
    pub fn path(&self, name: &str) -> String {
        format!("/{}/{}", self.root.trim_matches('/'), name)
            .replace("//", "/")
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn set(&mut self, assets: T) -> &mut T {
        self.loaded.insert(assets)
    }

    pub fn get(&self) -> Option<&T> {
        self.loaded.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.loaded.as_mut()
    }

    /// Release the assets, returns them if they were loaded
    pub fn unload(&mut self) -> Option<T> {
        self.loaded.take()
    }
}

#[test]
fn test_paths() {
    let content: Content<()> = Content::new("music");
    assert_eq!(content.path("level up.wav"), "/music/level up.wav");
    let content: Content<()> = Content::new("/");
    assert_eq!(content.path("bgm.ogg"), "/bgm.ogg");
}

#[test]
fn test_unload_once() {
    let mut content = Content::new("");
    content.set(5);
    assert_eq!(content.get(), Some(&5));
    assert_eq!(content.unload(), Some(5));
    assert_eq!(content.unload(), None);
    assert!(!content.is_loaded());
}
