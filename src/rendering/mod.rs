pub mod background {
    pub mod background;
}
pub mod camera {
    pub mod camera;
}
pub mod hud {
    pub mod hud;
}
