use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::config::GameConfig;

/// Cached logical size of the primary window. World origin is the viewport
/// center, +y up.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl FromWorld for Viewport {
    fn from_world(world: &mut World) -> Self {
        world
            .get_resource::<GameConfig>()
            .map(|cfg| Self::new(cfg.window.width, cfg.window.height))
            .unwrap_or(Self::new(1280.0, 720.0))
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn half(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn top(&self) -> f32 {
        self.height * 0.5
    }

    pub fn bottom(&self) -> f32 {
        -self.height * 0.5
    }

    /// Region a circle of `radius` may occupy while staying fully visible.
    /// Collapses to the center line on axes narrower than the circle.
    pub fn inner_bounds(&self, radius: f32) -> Rect {
        let half = (self.half() - Vec2::splat(radius)).max(Vec2::ZERO);
        Rect::from_center_half_size(Vec2::ZERO, half)
    }
}

/// Keeps [`Viewport`] in sync with the primary window (resizable canvas).
pub fn sync_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let next = Viewport::new(window.width(), window.height());
    if viewport.set_if_neq(next) {
        debug!(target: "scene", "viewport resized to {}x{}", next.width, next.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_bounds_inset_by_radius() {
        let v = Viewport::new(800.0, 600.0);
        let r = v.inner_bounds(20.0);
        assert_eq!(r.min, Vec2::new(-380.0, -280.0));
        assert_eq!(r.max, Vec2::new(380.0, 280.0));
    }

    #[test]
    fn inner_bounds_collapse_when_tiny() {
        let v = Viewport::new(10.0, 600.0);
        let r = v.inner_bounds(20.0);
        assert_eq!(r.min.x, 0.0);
        assert_eq!(r.max.x, 0.0);
    }

    #[test]
    fn init_resource_uses_window_config() {
        let mut app = App::new();
        let mut cfg = GameConfig::default();
        cfg.window.width = 1024.0;
        cfg.window.height = 768.0;
        app.insert_resource(cfg).init_resource::<Viewport>();
        let v = app.world().resource::<Viewport>();
        assert_eq!(v.size(), Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn from_world_without_config_falls_back() {
        let mut world = World::new();
        let v = Viewport::from_world(&mut world);
        assert_eq!(v.size(), Vec2::new(1280.0, 720.0));
    }

    #[test]
    fn from_world_reads_config() {
        let mut world = World::new();
        let mut cfg = GameConfig::default();
        cfg.window.width = 640.0;
        cfg.window.height = 480.0;
        world.insert_resource(cfg);
        let v = Viewport::from_world(&mut world);
        assert_eq!(v.size(), Vec2::new(640.0, 480.0));
    }
}
