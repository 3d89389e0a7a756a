//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host-Renderer sie konsumiert.

use super::options::Theme;
use crate::core::{Aabb, Camera2D, ComponentId, NetId, PortId};
use glam::Vec2;

/// Ein Bauteil im Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderComponent {
    pub id: ComponentId,
    pub bounds: Aabb,
    pub selected: bool,
    pub hovered: bool,
}

/// Ein Netz als vollständige Polylinie (Port, Vertices, Port).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNet {
    pub id: NetId,
    pub points: Vec<Vec2>,
}

/// Gummiband-Draht vom Quell-Port zur Maus während des Verdrahtens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WirePreview {
    pub from: Vec2,
    pub to: Vec2,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Darstellungsparameter
    pub theme: Theme,
    /// Bauteile in Zeichenreihenfolge
    pub components: Vec<RenderComponent>,
    /// Netze in Erstellungsreihenfolge
    pub nets: Vec<RenderNet>,
    /// Port-Mittelpunkt unter der Maus (für Hervorhebung)
    pub hovered_port: Option<(PortId, Vec2)>,
    /// Aktives Selektionsrechteck
    pub selection_box: Option<Aabb>,
    /// Draht-Vorschau (nur während des Verdrahtens)
    pub wire_preview: Option<WirePreview>,
}

impl RenderScene {
    /// Anzahl selektierter Bauteile im Frame.
    pub fn selected_count(&self) -> usize {
        self.components.iter().filter(|c| c.selected).count()
    }
}
