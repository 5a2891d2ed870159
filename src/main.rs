// ./src/main.rs
use bevy::log::LogPlugin;
use bevy::prelude::*;
use feasible_region::{
    args::ViewerArgs,
    math::{
        MathResult,
        geometry::region::{ClassifierConfig, RegionClassifier},
    },
    solver::SolverResponse,
    view::{
        RegionViewerPlugin,
        scene::ChartScene,
        visualization::{
            frame::ChartFrame,
            svg::{SvgExportJob, export_chart_svg_system},
        },
    },
};

/// Größe der Grafik in Weltkoordinaten (entspricht Pixeln bei Standard-Kamera).
const CHART_SIZE: Vec2 = Vec2::new(900.0, 600.0);

fn main() -> MathResult<()> {
    let args = ViewerArgs::parse(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => ClassifierConfig::from_json_file(path)?,
        None => ClassifierConfig::default(),
    };
    let response = SolverResponse::from_json_file(&args.response)?;
    let scene = ChartScene::new(response, RegionClassifier::new(config))?;

    match args.svg {
        Some(path) => {
            let job = SvgExportJob::new(path);
            App::new()
                .add_plugins((MinimalPlugins, LogPlugin::default()))
                .insert_resource(scene)
                .insert_resource(job.clone())
                .add_systems(Startup, export_chart_svg_system)
                .run();
            if let Some(err) = job.take_failure() {
                return Err(err);
            }
        }
        None => {
            let frame = ChartFrame::new(scene.bounds, CHART_SIZE);
            let title = format!("Grafisches Verfahren - {}", scene.title());
            App::new()
                .add_plugins(DefaultPlugins.set(WindowPlugin {
                    primary_window: Some(Window {
                        title,
                        ..default()
                    }),
                    ..default()
                }))
                .insert_resource(scene)
                .insert_resource(frame)
                .add_plugins(RegionViewerPlugin)
                .run();
        }
    }

    Ok(())
}
