use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;

use crate::app::assets::SceneAssets;
use crate::app::state::AppState;
use crate::core::components::{Asteroid, FallKind, Faller, SceneEntity, Star};
use crate::core::config::{FallerConfig, GameConfig, SpawnRange};
use crate::core::system::system_order::GameplaySet;
use crate::core::viewport::Viewport;
use crate::gameplay::schedule::SpawnSchedule;
use crate::gameplay::session::GameSession;

/// Spawn-position RNG. Seeded from `GameConfig.seed` when present so runs
/// can be replayed.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl FromWorld for SpawnRng {
    fn from_world(world: &mut World) -> Self {
        Self::from_seed(world.get_resource::<GameConfig>().and_then(|c| c.seed))
    }
}

pub struct FallerSpawnPlugin;

impl Plugin for FallerSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnSchedule>()
            .init_resource::<SpawnRng>()
            .init_resource::<GameSession>()
            .init_resource::<Viewport>()
            .add_systems(OnEnter(AppState::Playing), arm_spawn_schedule)
            .add_systems(
                Update,
                (tick_spawn_schedule, cull_offscreen)
                    .chain()
                    .in_set(GameplaySet::Spawn)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Installs the two looping spawn entries for a new scene lifetime.
pub fn arm_spawn_schedule(mut schedule: ResMut<SpawnSchedule>, cfg: Res<GameConfig>) {
    *schedule = SpawnSchedule::default()
        .every(Duration::from_millis(cfg.star.interval_ms), FallKind::Star)
        .every(
            Duration::from_millis(cfg.asteroid.interval_ms),
            FallKind::Asteroid,
        );
    if !schedule.is_armed() {
        warn!(target: "spawn", "no spawn entries armed; nothing will fall");
        return;
    }
    info!(
        target: "spawn",
        "spawn schedule armed: star every {}ms, asteroid every {}ms",
        cfg.star.interval_ms, cfg.asteroid.interval_ms
    );
}

/// Random point just above the top edge, inset horizontally so the whole
/// entity starts inside the viewport's width.
pub fn spawn_position(rng: &mut impl Rng, viewport: &Viewport, radius: f32) -> Vec2 {
    let bounds = viewport.inner_bounds(radius);
    let x = if bounds.max.x > bounds.min.x {
        rng.gen_range(bounds.min.x..=bounds.max.x)
    } else {
        bounds.min.x
    };
    Vec2::new(x, viewport.top() + radius)
}

/// Straight-down velocity with speed drawn from `range` (bounds may be given
/// in either order).
pub fn fall_velocity(rng: &mut impl Rng, range: &SpawnRange<f32>) -> Vec2 {
    let (lo, hi) = if range.min <= range.max {
        (range.min, range.max)
    } else {
        (range.max, range.min)
    };
    let speed = if hi > lo { rng.gen_range(lo..hi) } else { lo };
    Vec2::new(0.0, -speed.max(0.0))
}

/// Spawns one faller with its sprite, sensor collider and velocity.
pub fn spawn_faller(
    commands: &mut Commands,
    kind: FallKind,
    tuning: &FallerConfig,
    position: Vec2,
    velocity: Vec2,
    image: Handle<Image>,
) -> Entity {
    let mut entity = commands.spawn((
        Faller {
            kind,
            radius: tuning.collider_radius * tuning.scale,
        },
        SceneEntity,
        Sprite::from_image(image),
        Transform::from_translation(position.extend(0.5)).with_scale(Vec3::splat(tuning.scale)),
        RigidBody::KinematicVelocityBased,
        Collider::ball(tuning.collider_radius),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
        Velocity::linear(velocity),
    ));
    match kind {
        FallKind::Star => entity.insert(Star),
        FallKind::Asteroid => entity.insert(Asteroid),
    };
    entity.id()
}

fn tick_spawn_schedule(
    mut commands: Commands,
    time: Res<Time>,
    mut schedule: ResMut<SpawnSchedule>,
    mut rng: ResMut<SpawnRng>,
    mut session: ResMut<GameSession>,
    viewport: Res<Viewport>,
    assets: Res<SceneAssets>,
    cfg: Res<GameConfig>,
) {
    for kind in schedule.advance(time.delta()) {
        let tuning = match kind {
            FallKind::Star => &cfg.star,
            FallKind::Asteroid => &cfg.asteroid,
        };
        let radius = tuning.collider_radius * tuning.scale;
        let position = spawn_position(&mut rng.0, &viewport, radius);
        let velocity = fall_velocity(&mut rng.0, &tuning.speed_range);
        let e = spawn_faller(
            &mut commands,
            kind,
            tuning,
            position,
            velocity,
            assets.image_for(kind),
        );
        session.record_spawn(kind);
        debug!(target: "spawn", "{} {:?} at x={:.1} vy={:.1}", kind.label(), e, position.x, velocity.y);
    }
}

/// True once the entity is entirely below the bottom edge by more than `margin`.
pub fn is_past_bottom(y: f32, radius: f32, viewport: &Viewport, margin: f32) -> bool {
    y + radius < viewport.bottom() - margin
}

fn cull_offscreen(
    mut commands: Commands,
    viewport: Res<Viewport>,
    cfg: Res<GameConfig>,
    mut session: ResMut<GameSession>,
    q: Query<(Entity, &Transform, &Faller)>,
) {
    for (e, tf, faller) in &q {
        if is_past_bottom(tf.translation.y, faller.radius, &viewport, cfg.spawn.cull_margin) {
            commands.entity(e).despawn();
            session.culled += 1;
            debug!(target: "spawn", "culled {} {:?}", faller.kind.label(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_position_within_top_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        let v = Viewport::new(800.0, 600.0);
        for _ in 0..500 {
            let p = spawn_position(&mut rng, &v, 12.0);
            assert!(p.x >= -388.0 && p.x <= 388.0, "x out of range: {}", p.x);
            assert_eq!(p.y, 312.0);
        }
    }

    #[test]
    fn spawn_position_narrow_viewport_centers() {
        let mut rng = StdRng::seed_from_u64(3);
        let v = Viewport::new(10.0, 100.0);
        assert_eq!(spawn_position(&mut rng, &v, 12.0).x, 0.0);
    }

    #[test]
    fn fall_velocity_points_down_within_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let range = SpawnRange { min: 100.0, max: 200.0 };
        for _ in 0..200 {
            let v = fall_velocity(&mut rng, &range);
            assert_eq!(v.x, 0.0);
            assert!(v.y <= -100.0 && v.y > -200.0, "vy={}", v.y);
        }
    }

    #[test]
    fn fall_velocity_handles_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        let fixed = SpawnRange { min: 150.0, max: 150.0 };
        assert_eq!(fall_velocity(&mut rng, &fixed), Vec2::new(0.0, -150.0));
        let inverted = SpawnRange { min: 200.0, max: 100.0 };
        let v = fall_velocity(&mut rng, &inverted);
        assert!(v.y <= -100.0 && v.y > -200.0);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let v = Viewport::new(800.0, 600.0);
        let mut a = SpawnRng::from_seed(Some(42));
        let mut b = SpawnRng::from_seed(Some(42));
        for _ in 0..10 {
            assert_eq!(
                spawn_position(&mut a.0, &v, 10.0),
                spawn_position(&mut b.0, &v, 10.0)
            );
        }
    }

    #[test]
    fn past_bottom_respects_margin() {
        let v = Viewport::new(800.0, 600.0);
        assert!(!is_past_bottom(-300.0, 10.0, &v, 64.0));
        assert!(!is_past_bottom(-370.0, 10.0, &v, 64.0));
        assert!(is_past_bottom(-375.0, 10.0, &v, 64.0));
    }
}
