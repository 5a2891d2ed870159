// src/view/visualization/fill.rs
use crate::math::utils::comparison::lerp;
use bevy::prelude::*;

/// Deckkraft der Regionsfüllung, über Frames animiert.
///
/// Der Zustand gehört dem Renderer; die Klassifikation sieht davon nichts.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FillFade {
    opacity: f32,
    visible: bool,
    /// Deckkraft bei voll sichtbarer Region.
    pub max_opacity: f32,
    /// Dauer einer vollständigen Ein- oder Ausblendung in Sekunden.
    pub fade_seconds: f32,
}

impl Default for FillFade {
    fn default() -> Self {
        Self {
            opacity: 0.0,
            visible: true,
            max_opacity: 0.35,
            fade_seconds: 0.4,
        }
    }
}

impl FillFade {
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sichtbarkeit aus der Legende übernehmen.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn target(&self) -> f32 {
        if self.visible { self.max_opacity } else { 0.0 }
    }

    pub fn is_settled(&self) -> bool {
        self.opacity == self.target()
    }

    /// Bewegt die Deckkraft um `dt` Sekunden Richtung Ziel und gibt sie zurück.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let target = self.target();
        if self.fade_seconds <= 0.0 {
            self.opacity = target;
            return self.opacity;
        }

        let step = (dt / self.fade_seconds) * self.max_opacity;
        let remaining = target - self.opacity;
        if remaining.abs() <= step {
            self.opacity = target;
        } else {
            let t = step / remaining.abs();
            self.opacity = lerp(self.opacity, target, t);
        }
        self.opacity
    }
}

/// Marker für das Füll-Mesh der Region.
#[derive(Component, Debug)]
pub struct RegionFill;

/// Überträgt die animierte Deckkraft auf das Material der Regionsfüllung.
pub fn animate_region_fill_system(
    time: Res<Time>,
    mut fade: ResMut<FillFade>,
    fills: Query<&Handle<ColorMaterial>, With<RegionFill>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if fade.is_settled() {
        return;
    }
    let opacity = fade.advance(time.delta_seconds());

    for handle in fills.iter() {
        if let Some(material) = materials.get_mut(handle) {
            material.color.set_a(opacity);
        }
    }
}
