//! 2D-Kamera für Pan und exponentiellen Zoom.

use glam::Vec2;

use crate::shared::UxOptions;

/// 2D-Kamera mit Pan-Offset und exponentiellem Zoom.
///
/// Abbildung: `world = (screen - pan) / zoom`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Pan-Offset in Screen-Koordinaten
    pub pan: Vec2,
    /// Zoom-Exponent, geklemmt auf `[-max_zoom, max_zoom]`
    pub zoom_exp: f32,
    /// Abgeleiteter Zoom-Faktor (`zoom_base ^ zoom_exp`, immer > 0)
    pub zoom: f32,
}

impl Camera2D {
    /// Erstellt eine neue Kamera (kein Pan, Zoom 1.0)
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom_exp: 0.0,
            zoom: 1.0,
        }
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.pan) / self.zoom
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos * self.zoom + self.pan
    }

    /// Pan per Bewegungstasten.
    ///
    /// `direction` ist die Summe der gehaltenen Richtungen (je Achse -1, 0, +1
    /// oder mehr, wenn Tasten doppelt belegt sind). Die Geschwindigkeit wird mit
    /// `zoom` skaliert, damit sie auf dem Bildschirm konstant wirkt.
    pub fn pan_by_keys(&mut self, direction: Vec2, frame_duration: f32, speed: f32) {
        self.pan += direction * (speed * frame_duration * self.zoom);
    }

    /// Wendet ein Scroll-Delta als Zoom an und hält dabei den Weltpunkt unter
    /// `mouse_pos` fest.
    ///
    /// Reihenfolge der Rechenschritte ist fest, da die Zoom-Faktoren nicht
    /// exakt invertierbar sind.
    pub fn apply_scroll_zoom(&mut self, scroll_y: f32, mouse_pos: Vec2, options: &UxOptions) {
        self.zoom_exp = (self.zoom_exp + scroll_y * options.scroll_zoom_sensitivity)
            .clamp(-options.max_zoom, options.max_zoom);
        let new_zoom = options.zoom_base.powf(self.zoom_exp);
        let old_zoom = self.zoom;
        self.zoom = new_zoom;

        // Weltposition der Maus mit altem und neuem Zoom
        let original_mouse = (mouse_pos - self.pan) / old_zoom;
        let new_mouse = (mouse_pos - self.pan) / new_zoom;

        let correction = (new_mouse - original_mouse) * new_zoom;
        self.pan += correction;
    }

    /// Drag-Schwelle in Welteinheiten.
    pub fn drag_threshold_world(&self, threshold: f32) -> f32 {
        threshold * self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
