// ./src/setup.rs
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

/// Hintergrundfarbe der Grafik
pub const BACKGROUND_COLOR: Color = Color::rgb(0.97, 0.97, 0.98);

pub fn setup_camera(mut commands: Commands) {
    // Kamera
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(BACKGROUND_COLOR),
            ..default()
        },
        ..default()
    });
}
