// src/view/visualization/svg.rs
use crate::math::error::{MathError, MathResult};
use crate::math::geometry::region::RegionProperties;
use crate::math::types::{Point2D, ViewportBounds};
use crate::view::scene::ChartScene;
use bevy::app::AppExit;
use bevy::log::{error, info};
use bevy::prelude::{EventWriter, Res, Resource};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use svg::Document;
use svg::node::element::{Circle, Line, Polygon, Polyline, Rectangle, Text};

// ===================================================================================
// Abbildung Datenkoordinaten -> SVG-Pixel (y nach unten)
// ===================================================================================
struct SvgFrame {
    bounds: ViewportBounds,
    width: f64,
    height: f64,
    padding: f64,
}

impl SvgFrame {
    fn map(&self, p: Point2D) -> (f64, f64) {
        let n = self.bounds.normalize(p);
        (
            self.padding + n.x * self.width,
            self.padding + (1.0 - n.y) * self.height,
        )
    }

    fn points_attr(&self, points: &[Point2D]) -> String {
        points
            .iter()
            .map(|p| {
                let (x, y) = self.map(*p);
                format!("{:.3},{:.3}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Optionen für den SVG-Export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgExportOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Deckkraft der Regionsfüllung (vom Renderer vorgegeben).
    pub fill_opacity: f32,
}

impl Default for SvgExportOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 40.0,
            fill_opacity: 0.35,
        }
    }
}

/// Baut das SVG-Dokument der Grafik.
pub fn render_chart_svg(scene: &ChartScene, options: &SvgExportOptions) -> Document {
    let frame = SvgFrame {
        bounds: scene.bounds,
        width: options.width,
        height: options.height,
        padding: options.padding,
    };
    let total_width = options.width + 2.0 * options.padding;
    let total_height = options.height + 2.0 * options.padding;

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, total_width, total_height))
        .set("width", total_width)
        .set("height", total_height)
        .add(
            Rectangle::new()
                .set("width", total_width)
                .set("height", total_height)
                .set("fill", "#ffffff"),
        )
        .add(
            Rectangle::new()
                .set("x", options.padding)
                .set("y", options.padding)
                .set("width", options.width)
                .set("height", options.height)
                .set("fill", "none")
                .set("stroke", "#cccccc"),
        )
        .add(
            Text::new(scene.title())
                .set("x", total_width / 2.0)
                .set("y", options.padding / 2.0)
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", 18)
                .set("class", "chart-title"),
        );

    for line in scene.constraint_lines() {
        let (x1, y1) = frame.map(line.endpoints[0]);
        let (x2, y2) = frame.map(line.endpoints[1]);
        document = document.add(
            Line::new()
                .set("x1", x1)
                .set("y1", y1)
                .set("x2", x2)
                .set("y2", y2)
                .set("stroke", format!("hsla({}, 70%, 55%, 0.85)", line.hue))
                .set("stroke-width", 2)
                .set("stroke-dasharray", "5,5")
                .set("class", "constraint"),
        );
    }

    if scene.response.solution_type.has_region() {
        let (_, polygon) = scene.region();
        if polygon.shape.is_fillable() {
            document = document.add(
                Polygon::new()
                    .set("points", frame.points_attr(polygon.ring()))
                    .set("fill", "rgb(37, 99, 235)")
                    .set("fill-opacity", options.fill_opacity)
                    .set("stroke", "rgb(37, 99, 235)")
                    .set("stroke-width", 3)
                    .set("class", "feasible-region"),
            );
            if let Some(anchor) = polygon.label_anchor() {
                let (x, y) = frame.map(anchor);
                document = document.add(
                    Text::new(format!("A = {:.2}", polygon.area()))
                        .set("x", x)
                        .set("y", y)
                        .set("text-anchor", "middle")
                        .set("font-family", "sans-serif")
                        .set("font-size", 14)
                        .set("fill", "rgb(30, 64, 175)")
                        .set("class", "region-area"),
                );
            }
        } else if !polygon.is_empty() {
            document = document.add(
                Polyline::new()
                    .set("points", frame.points_attr(&polygon.points))
                    .set("fill", "none")
                    .set("stroke", "rgb(37, 99, 235)")
                    .set("stroke-width", 3)
                    .set("stroke-dasharray", "8,6")
                    .set("class", "feasible-region"),
            );
        }
    }

    for vertex in &scene.response.vertices {
        let (cx, cy) = frame.map(vertex.position());
        document = document.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", 6)
                .set("fill", "rgba(100, 116, 139, 0.8)")
                .set("class", "vertex"),
        );
    }

    if let Some(optimum) = scene.response.optimum {
        let (cx, cy) = frame.map(optimum.position());
        document = document.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", 10)
                .set("fill", "rgb(50, 220, 38)")
                .set("stroke", "rgb(38, 185, 28)")
                .set("stroke-width", 3)
                .set("class", "optimum"),
        );
    }

    document
}

/// Schreibt die Grafik als SVG-Datei.
pub fn export_chart_svg(
    scene: &ChartScene,
    options: &SvgExportOptions,
    path: impl AsRef<Path>,
) -> MathResult<()> {
    let document = render_chart_svg(scene, options);
    svg::save(path.as_ref(), &document)?;
    info!("Chart SVG '{}' written.", path.as_ref().display());
    Ok(())
}

/// Export-Auftrag für den Betrieb ohne Fenster.
///
/// Der Fehlerplatz wird zwischen allen Klonen geteilt, so dass der Aufrufer
/// nach `App::run` nachsehen kann, ob der Export geklappt hat.
#[derive(Resource, Debug, Clone)]
pub struct SvgExportJob {
    pub path: PathBuf,
    pub options: SvgExportOptions,
    failure: Arc<Mutex<Option<MathError>>>,
}

impl SvgExportJob {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: SvgExportOptions::default(),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Entnimmt den Fehler des letzten Exports.
    pub fn take_failure(&self) -> Option<MathError> {
        self.failure.lock().ok().and_then(|mut slot| slot.take())
    }

    fn record_failure(&self, err: MathError) {
        if let Ok(mut slot) = self.failure.lock() {
            *slot = Some(err);
        }
    }
}

/// Schreibt die Grafik einmal und beendet die App, auch im Fehlerfall.
pub fn export_chart_svg_system(
    scene: Res<ChartScene>,
    job: Res<SvgExportJob>,
    mut exit: EventWriter<AppExit>,
) {
    info!(
        "Exporting {} chart with bounds {}",
        scene.response.solution_type, scene.bounds
    );
    if let Err(err) = export_chart_svg(&scene, &job.options, &job.path) {
        error!("SVG export failed: {}", err);
        job.record_failure(err);
    }
    exit.send(AppExit);
}
