// src/view/visualization/region.rs
use super::{fill::RegionFill, frame::ChartFrame};
use crate::math::geometry::region::RegionProperties;
use crate::view::{scene::ChartScene, ui::LegendState};
use bevy::prelude::*;
use bevy::render::{
    mesh::{Indices, PrimitiveTopology},
    render_asset::RenderAssetUsages,
};
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

pub const REGION_FILL_COLOR: Color = Color::rgba(0.145, 0.388, 0.922, 0.0);
pub const REGION_STROKE_COLOR: Color = Color::rgba(0.145, 0.388, 0.922, 1.0);
pub const VERTEX_COLOR: Color = Color::rgba(0.392, 0.455, 0.545, 0.8);
pub const OPTIMUM_COLOR: Color = Color::rgb(0.196, 0.863, 0.149);
pub const FRAME_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.3);

const DASH_LENGTH: f32 = 8.0;
const DASH_GAP: f32 = 6.0;
const VERTEX_RADIUS: f32 = 6.0;
const OPTIMUM_RADIUS: f32 = 11.0;

/// Zerlegt die Strecke a-b in Striche der Länge `dash` mit Lücken `gap`.
pub fn dash_segments(a: Vec2, b: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    let length = a.distance(b);
    if length <= f32::EPSILON || dash <= 0.0 {
        return Vec::new();
    }

    let direction = (b - a) / length;
    let period = dash + gap.max(0.0);
    let mut segments = Vec::new();
    let mut offset = 0.0;
    while offset < length {
        let end = (offset + dash).min(length);
        segments.push((a + direction * offset, a + direction * end));
        offset += period;
    }
    segments
}

/// Erzeugt das Füll-Mesh der Region; Deckkraft startet bei 0 und wird animiert.
pub fn spawn_region_fill_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    scene: Res<ChartScene>,
    frame: Res<ChartFrame>,
) {
    if !scene.response.solution_type.has_region() {
        info!("Solution is infeasible, no region fill spawned.");
        return;
    }

    let (_, polygon) = scene.region();
    if !polygon.shape.is_fillable() {
        info!("Region shape {:?} is drawn without fill.", polygon.shape);
        return;
    }

    let indices = match polygon.fill_triangles() {
        Ok(indices) => indices,
        Err(err) => {
            warn!("Region fill skipped: {}", err);
            return;
        }
    };

    let positions: Vec<[f32; 3]> = frame
        .world_points(polygon.ring())
        .into_iter()
        .map(|p| [p.x, p.y, 0.0])
        .collect();
    let indices: Vec<u32> = indices.into_iter().map(|i| i as u32).collect();

    let mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_indices(Indices::U32(indices));

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(mesh)),
            material: materials.add(ColorMaterial::from(REGION_FILL_COLOR)),
            transform: Transform::from_xyz(0.0, 0.0, -1.0),
            ..default()
        },
        RegionFill,
    ));
    info!(
        "Region fill spawned ({:?}, area {:.3}).",
        polygon.shape,
        polygon.area()
    );
}

/// Zeichnet Rahmen, Restriktionen, Regionsrand, Eckpunkte und Optimum.
/// Die Region wird in jedem Frame neu klassifiziert.
pub fn draw_chart_system(
    scene: Res<ChartScene>,
    frame: Res<ChartFrame>,
    legend: Res<LegendState>,
    mut gizmos: Gizmos,
) {
    let corners = frame.world_points(&scene.bounds.corners());
    gizmos.linestrip_2d(
        corners.iter().copied().chain(corners.first().copied()),
        FRAME_COLOR,
    );

    if legend.show_constraints {
        for line in scene.constraint_lines() {
            let color = Color::hsla(line.hue, 0.7, 0.55, 0.85);
            let a = frame.to_world(line.endpoints[0]);
            let b = frame.to_world(line.endpoints[1]);
            for (start, end) in dash_segments(a, b, DASH_LENGTH, DASH_GAP) {
                gizmos.line_2d(start, end, color);
            }
        }
    }

    if legend.show_region && scene.response.solution_type.has_region() {
        let (_, polygon) = scene.region();
        let points = frame.world_points(&polygon.points);
        if polygon.shape.is_fillable() {
            gizmos.linestrip_2d(points, REGION_STROKE_COLOR);
        } else if let [a, b] = points.as_slice() {
            for (start, end) in dash_segments(*a, *b, DASH_LENGTH, DASH_GAP) {
                gizmos.line_2d(start, end, REGION_STROKE_COLOR);
            }
        }
    }

    if legend.show_vertices {
        for vertex in &scene.response.vertices {
            gizmos
                .circle_2d(frame.to_world(vertex.position()), VERTEX_RADIUS, VERTEX_COLOR)
                .segments(24);
        }
    }

    if let Some(optimum) = scene.response.optimum {
        gizmos
            .circle_2d(frame.to_world(optimum.position()), OPTIMUM_RADIUS, OPTIMUM_COLOR)
            .segments(32);
    }
}
