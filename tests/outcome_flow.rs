use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
use star_catcher::app::scene::end_when_session_finished;
use star_catcher::core::components::FallKind;
use star_catcher::core::system::system_order::GameplaySet;
use star_catcher::gameplay::outcomes::{GameLost, GameWon, OutcomesPlugin, StarCollected};
use star_catcher::{AppState, Faller, GameConfig, GameSession, Player};

fn outcome_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(cfg)
        .init_state::<AppState>()
        .add_event::<CollisionEvent>()
        .configure_sets(
            Update,
            (GameplaySet::Outcomes, GameplaySet::Session).chain(),
        )
        .add_plugins(OutcomesPlugin)
        .add_systems(
            Update,
            end_when_session_finished
                .in_set(GameplaySet::Session)
                .run_if(in_state(AppState::Playing)),
        );
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Playing);
    app.update();
    app
}

fn spawn_player(app: &mut App) -> Entity {
    app.world_mut().spawn(Player { radius: 20.0 }).id()
}

fn spawn_faller(app: &mut App, kind: FallKind) -> Entity {
    app.world_mut().spawn(Faller { kind, radius: 12.0 }).id()
}

fn overlap(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::SENSOR));
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

#[test]
fn star_overlap_scores_and_despawns_once() {
    let mut app = outcome_app(GameConfig::default());
    let player = spawn_player(&mut app);
    let star = spawn_faller(&mut app, FallKind::Star);

    // Same pair reported twice, in both orders, within one frame.
    overlap(&mut app, player, star);
    overlap(&mut app, star, player);
    app.update();

    let session = app.world().resource::<GameSession>();
    assert_eq!(session.score(), 10);
    assert_eq!(session.stars_collected, 1);
    assert!(app.world().get_entity(star).is_err());
    assert!(app.world().get_entity(player).is_ok());

    let collected: Vec<_> = app
        .world_mut()
        .resource_mut::<Events<StarCollected>>()
        .drain()
        .collect();
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0].score, 10);
    assert_eq!(state(&app), AppState::Playing);
}

#[test]
fn overlaps_without_player_are_ignored() {
    let mut app = outcome_app(GameConfig::default());
    let a = spawn_faller(&mut app, FallKind::Star);
    let b = spawn_faller(&mut app, FallKind::Asteroid);
    overlap(&mut app, a, b);
    app.update();

    let session = app.world().resource::<GameSession>();
    assert_eq!(session.score(), 0);
    assert!(!session.is_finished());
    assert!(app.world().get_entity(a).is_ok());
}

#[test]
fn asteroid_ends_the_game() {
    let mut app = outcome_app(GameConfig::default());
    let player = spawn_player(&mut app);
    let star = spawn_faller(&mut app, FallKind::Star);
    let rock = spawn_faller(&mut app, FallKind::Asteroid);

    overlap(&mut app, player, star);
    overlap(&mut app, rock, player);
    app.update();

    {
        let session = app.world().resource::<GameSession>();
        assert!(session.game_over());
        assert!(!session.game_won());
        assert_eq!(session.score(), 10);
        assert_eq!(session.banner(), Some("GAME OVER"));
    }
    // Asteroids stay in the scene; only stars are consumed.
    assert!(app.world().get_entity(rock).is_ok());
    let lost = app.world().resource::<Events<GameLost>>();
    assert_eq!(lost.len(), 1);

    app.update();
    assert_eq!(state(&app), AppState::Ended);

    // Rules no longer run once the scene has ended.
    let late = spawn_faller(&mut app, FallKind::Star);
    overlap(&mut app, player, late);
    app.update();
    assert_eq!(app.world().resource::<GameSession>().score(), 10);
    assert!(app.world().get_entity(late).is_ok());
}

#[test]
fn reaching_target_wins() {
    let mut cfg = GameConfig::default();
    cfg.scoring.per_star = 50;
    let mut app = outcome_app(cfg);
    let player = spawn_player(&mut app);
    let first = spawn_faller(&mut app, FallKind::Star);
    let second = spawn_faller(&mut app, FallKind::Star);
    let rock = spawn_faller(&mut app, FallKind::Asteroid);

    overlap(&mut app, player, first);
    overlap(&mut app, player, second);
    // Arrives after the win in the same batch; the won flag holds.
    overlap(&mut app, player, rock);
    app.update();

    {
        let session = app.world().resource::<GameSession>();
        assert_eq!(session.score(), 100);
        assert!(session.game_won());
        assert!(!session.game_over());
        assert_eq!(session.banner(), Some("YOU WIN!"));
    }
    assert_eq!(app.world().resource::<Events<GameWon>>().len(), 1);

    app.update();
    assert_eq!(state(&app), AppState::Ended);
}

#[test]
fn entering_playing_resets_the_session() {
    let mut app = outcome_app(GameConfig::default());
    let player = spawn_player(&mut app);
    let rock = spawn_faller(&mut app, FallKind::Asteroid);
    overlap(&mut app, player, rock);
    app.update();
    app.update();
    assert_eq!(state(&app), AppState::Ended);

    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Playing);
    app.update();
    let session = app.world().resource::<GameSession>();
    assert_eq!(state(&app), AppState::Playing);
    assert!(!session.is_finished());
    assert_eq!(session.score(), 0);
}
