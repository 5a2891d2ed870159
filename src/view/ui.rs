// ./src/view/ui.rs
use crate::math::geometry::region::{AnalysisReason, RegionProperties};
use crate::solver::VertexHit;
use crate::view::{
    scene::ChartScene,
    visualization::{fill::FillFade, frame::ChartFrame},
};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{
    EguiContexts,
    egui::{self, Color32, RichText},
};

/// Sichtbarkeit der Legenden-Einträge und der aktuell überfahrene Eckpunkt.
#[derive(Resource, Debug, Clone)]
pub struct LegendState {
    pub show_region: bool,
    pub show_constraints: bool,
    pub show_vertices: bool,
    pub hovered: Option<VertexHit>,
}

impl Default for LegendState {
    fn default() -> Self {
        Self {
            show_region: true,
            show_constraints: true,
            show_vertices: true,
            hovered: None,
        }
    }
}

fn hsla_to_color32(hue: f32) -> Color32 {
    let [r, g, b, _] = Color::hsla(hue, 0.7, 0.55, 1.0).as_rgba_f32();
    Color32::from_rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

pub fn legend_panel_system(
    mut contexts: EguiContexts,
    scene: Res<ChartScene>,
    mut legend: ResMut<LegendState>,
    mut fade: ResMut<FillFade>,
) {
    let (analysis, polygon) = scene.region();

    egui::Window::new("Legende")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(scene.title());
            ui.separator();

            if ui
                .checkbox(&mut legend.show_region, "Zulässige Region")
                .changed()
            {
                fade.set_visible(legend.show_region);
                info!("Region visibility toggled: {}", legend.show_region);
            }
            ui.checkbox(&mut legend.show_vertices, "Eckpunkte");
            ui.checkbox(&mut legend.show_constraints, "Restriktionen");

            if legend.show_constraints {
                for line in scene.constraint_lines() {
                    ui.label(RichText::new(line.label).color(hsla_to_color32(line.hue)));
                }
            }

            ui.collapsing("Geometrie der Region", |ui| {
                match analysis.reason {
                    AnalysisReason::Analysed => {
                        ui.label(format!("Geschlossen: {}", analysis.is_closed_polygon));
                        ui.label(format!("Konvex: {}", analysis.is_convex));
                        ui.label(format!(
                            "Schließverhältnis: {:.3} (mittlere Kante {:.3})",
                            analysis.closure_ratio, analysis.average_edge_length
                        ));
                    }
                    AnalysisReason::InsufficientVertices { count } => {
                        ui.label(format!("Zu wenige Eckpunkte für ein Polygon: {count}"));
                    }
                }
                if analysis.has_unbounded_vertex {
                    ui.label("Enthält unbeschränkte Eckpunkte");
                }
                ui.label(format!("Form: {:?}", polygon.shape));
                ui.label(format!("Fläche: {:.3}", polygon.area()));
                ui.label(format!("Deckkraft: {:.2}", fade.opacity()));
            });

            ui.separator();
            match legend.hovered {
                Some(hit) => {
                    ui.label(format!(
                        "Koordinaten: ({:.4}, {:.4})",
                        hit.position.x, hit.position.y
                    ));
                    ui.label(format!("Wert Z: {:.4}", hit.objective_value));
                    if hit.is_optimum {
                        ui.label(RichText::new("Optimaler Punkt").strong());
                    }
                }
                None => {
                    ui.label(RichText::new("Eckpunkt überfahren für Details").weak());
                }
            }
        });
}

/// Radius in Pixeln, innerhalb dessen ein Eckpunkt als überfahren gilt.
const HOVER_RADIUS: f32 = 8.0;

/// Bestimmt den Eckpunkt unter dem Mauszeiger.
pub fn hover_vertex_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    scene: Res<ChartScene>,
    frame: Res<ChartFrame>,
    mut legend: ResMut<LegendState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };

    let hovered = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor))
        .and_then(|world| {
            scene
                .response
                .vertices
                .iter()
                .find(|v| frame.to_world(v.position()).distance(world) <= HOVER_RADIUS)
        })
        .and_then(|vertex| scene.response.vertex_at(vertex.position()));

    if legend.hovered != hovered {
        legend.hovered = hovered;
    }
}
