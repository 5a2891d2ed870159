// src/view/mod.rs
pub mod scene;
pub mod ui;
pub mod visualization;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use ui::{LegendState, hover_vertex_system, legend_panel_system};
use visualization::{
    fill::{FillFade, animate_region_fill_system},
    region::{draw_chart_system, spawn_region_fill_system},
};

/// Fenster-Darstellung der Grafik. Erwartet `ChartScene` und `ChartFrame` als Ressourcen.
pub struct RegionViewerPlugin;

impl Plugin for RegionViewerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<LegendState>()
            .init_resource::<FillFade>()
            .add_systems(
                Startup,
                (crate::setup::setup_camera, spawn_region_fill_system),
            )
            .add_systems(
                Update,
                (
                    // UI zuerst, damit Sichtbarkeit und Hover im selben Frame wirken
                    (hover_vertex_system, legend_panel_system).chain(),
                    animate_region_fill_system,
                    draw_chart_system,
                )
                    .chain(),
            );
    }
}
