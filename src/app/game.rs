// This file is part of Star Catcher.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::assets::SceneAssetsPlugin;
use crate::app::scene::ScenePlugin;
use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::system::system_order::GameplaySet;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::outcomes::OutcomesPlugin;
use crate::gameplay::player::PlayerPlugin;
use crate::gameplay::spawn::FallerSpawnPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::background::background::BackgroundPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::hud::hud::HudPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let clear = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.window.clear_color())
            .unwrap_or_else(|| GameConfig::default().window.clear_color());
        app.insert_resource(ClearColor(clear))
            .init_state::<AppState>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Spawn,
                    GameplaySet::Outcomes,
                    GameplaySet::Session,
                )
                    .chain(),
            )
            .add_plugins((
                CameraPlugin,
                SceneAssetsPlugin,
                PhysicsSetupPlugin,
                ScenePlugin,
                PlayerPlugin,
                FallerSpawnPlugin,
                OutcomesPlugin,
                BackgroundPlugin,
                HudPlugin,
                AutoClosePlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ));
    }
}
