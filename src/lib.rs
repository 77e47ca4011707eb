pub mod carousel;
pub mod config;
pub mod events;
pub mod gesture;
pub mod render {
    pub mod loader;
    pub mod overlay;
    pub mod viewer;
}
