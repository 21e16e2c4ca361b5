//! Text labels: title, goal, instructions, live score and the end banner.
use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::SceneEntity;
use crate::core::system::system_order::GameplaySet;
use crate::gameplay::outcomes::{GameLost, GameWon, StarCollected};
use crate::gameplay::session::GameSession;

const TITLE: &str = "Star Catcher";
const INSTRUCTIONS: &str = "Arrow keys or WASD to move. Catch stars, dodge asteroids.";
const RESTART_HINT: &str = "Press R or Enter to play again";

#[derive(Component)]
pub struct ScoreLabel;

#[derive(Component)]
pub struct BannerRoot;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (update_score_label, spawn_end_banner)
                .in_set(GameplaySet::Session)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

fn label(text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

pub fn spawn_hud(commands: &mut Commands, session: &GameSession) {
    commands
        .spawn((
            SceneEntity,
            Name::new("Hud"),
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::top(Val::Px(16.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|p| {
            p.spawn(label(TITLE, 40.0, Color::srgb(1.0, 0.85, 0.3)));
            p.spawn(label(session.goal_label(), 22.0, Color::WHITE));
            p.spawn(label(INSTRUCTIONS, 18.0, Color::srgb(0.7, 0.7, 0.8)));
        });

    commands.spawn((
        SceneEntity,
        ScoreLabel,
        label(session.score_label(), 28.0, Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(16.0),
            ..default()
        },
    ));
}

fn update_score_label(
    mut collected: EventReader<StarCollected>,
    session: Res<GameSession>,
    mut q: Query<&mut Text, With<ScoreLabel>>,
) {
    if collected.is_empty() {
        return;
    }
    collected.clear();
    let s = session.score_label();
    for mut text in &mut q {
        if text.as_str() != s {
            *text = Text::new(s.clone());
        }
    }
}

/// Shows the terminal banner for the first win or loss of the scene.
fn spawn_end_banner(
    mut commands: Commands,
    mut won: EventReader<GameWon>,
    mut lost: EventReader<GameLost>,
    session: Res<GameSession>,
    existing: Query<(), With<BannerRoot>>,
) {
    let ended = won.read().count() + lost.read().count() > 0;
    if !ended || !existing.is_empty() {
        return;
    }
    let Some(banner) = session.banner() else {
        return;
    };
    let color = if session.game_won() {
        Color::srgb(0.4, 1.0, 0.5)
    } else {
        Color::srgb(1.0, 0.3, 0.3)
    };
    commands
        .spawn((
            SceneEntity,
            BannerRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
        ))
        .with_children(|p| {
            p.spawn(label(banner, 64.0, color));
            p.spawn(label(session.score_label(), 28.0, Color::WHITE));
            p.spawn(label(RESTART_HINT, 20.0, Color::srgb(0.7, 0.7, 0.8)));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScoringConfig;

    fn hud_app() -> App {
        let mut app = App::new();
        app.insert_resource(GameSession::new(&ScoringConfig::default()))
            .add_event::<StarCollected>()
            .add_event::<GameWon>()
            .add_event::<GameLost>()
            .add_systems(Update, (update_score_label, spawn_end_banner));
        app
    }

    fn banner_count(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<(), With<BannerRoot>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn score_label_follows_collections() {
        let mut app = hud_app();
        let e = app.world_mut().spawn((ScoreLabel, Text::new("Score: 0 / 100"))).id();
        app.update();
        assert_eq!(app.world().get::<Text>(e).unwrap().as_str(), "Score: 0 / 100");

        // Label only refreshes on collection events.
        app.world_mut().resource_mut::<GameSession>().collect_star();
        app.update();
        assert_eq!(app.world().get::<Text>(e).unwrap().as_str(), "Score: 0 / 100");

        let star = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(StarCollected { star, score: 10 });
        app.update();
        assert_eq!(app.world().get::<Text>(e).unwrap().as_str(), "Score: 10 / 100");
    }

    #[test]
    fn banner_spawns_once_per_outcome() {
        let mut app = hud_app();
        app.update();
        assert_eq!(banner_count(&mut app), 0);

        app.world_mut().resource_mut::<GameSession>().hit_asteroid();
        app.world_mut().send_event(GameLost { score: 0 });
        app.update();
        assert_eq!(banner_count(&mut app), 1);

        app.world_mut().send_event(GameLost { score: 0 });
        app.update();
        assert_eq!(banner_count(&mut app), 1);
    }
}
