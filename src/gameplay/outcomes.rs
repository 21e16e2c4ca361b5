//! Player overlap outcomes: star collection and asteroid hits.
//!
//! Rapier reports sensor overlaps as `CollisionEvent::Started`. Each pair
//! involving the player and a faller is applied to [`GameSession`]; a star is
//! despawned as it is counted and never counted twice.
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use smallvec::SmallVec;

use crate::app::state::AppState;
use crate::core::components::{FallKind, Faller, Player};
use crate::core::config::GameConfig;
use crate::core::system::system_order::GameplaySet;
use crate::gameplay::session::{GameSession, Outcome};

#[derive(Event, Debug, Clone, Copy)]
pub struct StarCollected {
    pub star: Entity,
    pub score: u32,
}

#[derive(Event, Debug, Default, Clone, Copy)]
pub struct GameWon {
    pub score: u32,
}

#[derive(Event, Debug, Default, Clone, Copy)]
pub struct GameLost {
    pub score: u32,
}

pub struct OutcomesPlugin;

impl Plugin for OutcomesPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StarCollected>()
            .add_event::<GameWon>()
            .add_event::<GameLost>()
            .init_resource::<GameSession>()
            .add_systems(OnEnter(AppState::Playing), reset_session)
            .add_systems(
                Update,
                handle_player_overlaps
                    .in_set(GameplaySet::Outcomes)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Fresh score and flags for a new scene lifetime.
pub fn reset_session(mut session: ResMut<GameSession>, cfg: Res<GameConfig>) {
    *session = GameSession::new(&cfg.scoring);
}

/// Orders an overlap pair as `(faller, kind)` when one side is the player.
pub fn classify_pair(
    a: Entity,
    b: Entity,
    players: &Query<(), With<Player>>,
    fallers: &Query<&Faller>,
) -> Option<(Entity, FallKind)> {
    let other = if players.contains(a) {
        b
    } else if players.contains(b) {
        a
    } else {
        return None;
    };
    fallers.get(other).ok().map(|f| (other, f.kind))
}

fn handle_player_overlaps(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    players: Query<(), With<Player>>,
    fallers: Query<&Faller>,
    mut session: ResMut<GameSession>,
    mut ev_collected: EventWriter<StarCollected>,
    mut ev_won: EventWriter<GameWon>,
    mut ev_lost: EventWriter<GameLost>,
) {
    // Despawns are deferred; stars handled earlier in this batch still resolve.
    let mut consumed: SmallVec<[Entity; 4]> = SmallVec::new();
    for ev in collisions.read() {
        let CollisionEvent::Started(a, b, _flags) = ev else {
            continue;
        };
        let Some((faller, kind)) = classify_pair(*a, *b, &players, &fallers) else {
            continue;
        };
        if consumed.contains(&faller) {
            continue;
        }
        let outcome = session.apply(kind);
        if outcome == Outcome::Ignored {
            continue;
        }
        if kind == FallKind::Star {
            consumed.push(faller);
            commands.entity(faller).despawn();
        }
        match outcome {
            Outcome::Scored { score } => {
                ev_collected.write(StarCollected { star: faller, score });
                debug!(target: "outcome", "star {:?} collected, score={score}", faller);
            }
            Outcome::Won { score } => {
                ev_collected.write(StarCollected { star: faller, score });
                ev_won.write(GameWon { score });
                info!(target: "outcome", "target reached: score={score}");
            }
            Outcome::Lost { score } => {
                ev_lost.write(GameLost { score });
                info!(target: "outcome", "asteroid {:?} hit the ship at score={score}", faller);
            }
            Outcome::Ignored => {}
        }
    }
}
