//! Achsen-alignierte Bounding-Boxen (Mittelpunkt + Halbgröße).

use glam::Vec2;

/// Achsen-alignierte Box in Welt-Koordinaten.
///
/// Eine Box mit Halbgröße `Vec2::ZERO` gilt als inaktiv: sie schneidet weder
/// Punkte noch andere Boxen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    /// Mittelpunkt
    pub center: Vec2,
    /// Halbe Breite/Höhe (nie negativ)
    pub half_size: Vec2,
}

impl Aabb {
    /// Inaktive Box im Ursprung.
    pub const ZERO: Self = Self {
        center: Vec2::ZERO,
        half_size: Vec2::ZERO,
    };

    /// Erstellt eine Box aus Mittelpunkt und Halbgröße.
    pub fn new(center: Vec2, half_size: Vec2) -> Self {
        Self {
            center,
            half_size: half_size.abs(),
        }
    }

    /// Quadratische Box mit gleicher Halbgröße in beiden Achsen.
    pub fn square(center: Vec2, half_extent: f32) -> Self {
        Self::new(center, Vec2::splat(half_extent))
    }

    /// Normalisierte Box zwischen zwei beliebigen Eckpunkten.
    ///
    /// Die Zugrichtung spielt keine Rolle, die Größe ist immer nicht-negativ.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            center: (min + max) * 0.5,
            half_size: (max - min) * 0.5,
        }
    }

    /// Linke obere Ecke (kleinste Koordinaten).
    pub fn min(&self) -> Vec2 {
        self.center - self.half_size
    }

    /// Rechte untere Ecke (größte Koordinaten).
    pub fn max(&self) -> Vec2 {
        self.center + self.half_size
    }

    /// Volle Breite/Höhe.
    pub fn size(&self) -> Vec2 {
        self.half_size * 2.0
    }

    /// `true`, wenn die Box eine positive Ausdehnung hat.
    pub fn has_area(&self) -> bool {
        self.half_size.length_squared() > 0.0
    }

    /// Prüft, ob ein Punkt echt innerhalb der Box liegt (Rand exklusiv).
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x < self.half_size.x && d.y < self.half_size.y
    }

    /// Prüft zwei Boxen auf Überlappung (Berührung am Rand zählt nicht).
    pub fn intersects(&self, other: &Aabb) -> bool {
        let d = (other.center - self.center).abs();
        let reach = self.half_size + other.half_size;
        d.x < reach.x && d.y < reach.y
    }

    /// Verschiebt die Box um `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
