//! In-Memory-View-Modell: Bauteil-, Port- und Netz-Geometrie plus Selektion.
//!
//! Alle IDs sind dichte Indizes und werden ausschließlich von den
//! `add_*`-Funktionen vergeben. Ungültige IDs sind ein Programmierfehler
//! und führen zu einem Panic beim Indexzugriff.

use std::ops::Range;

use glam::Vec2;
use indexmap::IndexSet;

use super::{
    Aabb, Camera2D, ComponentDesc, ComponentDescId, ComponentId, NetId, PortDirection, PortId,
};
use crate::shared::options::Theme;

/// Geometrie eines platzierten Bauteils.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    /// Katalog-Typ
    pub desc: ComponentDescId,
    /// Bounding-Box in Welt-Koordinaten
    pub bounds: Aabb,
    /// Globale Port-IDs dieses Bauteils (`start..end`)
    pub ports: Range<usize>,
}

/// Geometrie eines Ports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortView {
    /// Besitzendes Bauteil
    pub component: ComponentId,
    /// Position relativ zum Bauteil-Mittelpunkt
    pub offset: Vec2,
    /// Signalrichtung
    pub direction: PortDirection,
}

/// Ein Netz zwischen zwei Ports mit editierbaren Zwischen-Vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct NetView {
    pub from: PortId,
    pub to: PortId,
    /// Innere Vertices (ohne die beiden Port-Endpunkte)
    pub vertices: Vec<Vec2>,
}

/// Szene mit Geometrie, Selektion, Hover und Kamera.
#[derive(Debug, Clone)]
pub struct Scene {
    descs: Vec<ComponentDesc>,
    /// Platzierte Bauteile (Index = `ComponentId`)
    pub components: Vec<ComponentView>,
    /// Alle Ports (Index = `PortId`)
    pub ports: Vec<PortView>,
    /// Alle Netze (Index = `NetId`)
    pub nets: Vec<NetView>,
    /// Selektierte Bauteile in Einfüge-Reihenfolge
    pub selected: IndexSet<ComponentId>,
    /// Selektionsrechteck (Halbgröße 0 = inaktiv)
    pub selection_box: Aabb,
    /// Bauteil unter der Maus im aktuellen Frame
    pub hovered_component: Option<ComponentId>,
    /// Port unter der Maus im aktuellen Frame
    pub hovered_port: Option<PortId>,
    /// Kamera der Ansicht
    pub camera: Camera2D,
    /// Darstellungsparameter
    pub theme: Theme,
}

impl Scene {
    /// Erstellt eine leere Szene für den gegebenen Bauteil-Katalog.
    pub fn new(descs: Vec<ComponentDesc>, theme: Theme) -> Self {
        Self {
            descs,
            components: Vec::new(),
            ports: Vec::new(),
            nets: Vec::new(),
            selected: IndexSet::new(),
            selection_box: Aabb::ZERO,
            hovered_component: None,
            hovered_port: None,
            camera: Camera2D::new(),
            theme,
        }
    }

    /// Katalog-Eintrag eines Typs.
    ///
    /// # Panics
    /// Bei unbekannter `ComponentDescId`.
    pub fn desc(&self, id: ComponentDescId) -> &ComponentDesc {
        &self.descs[id.index()]
    }

    /// Platziert ein Bauteil mit Mittelpunkt `position` und legt seine Ports an.
    ///
    /// # Panics
    /// Bei unbekannter `ComponentDescId`.
    pub fn add_component(&mut self, desc_id: ComponentDescId, position: Vec2) -> ComponentId {
        let id = ComponentId(self.components.len());
        let desc = &self.descs[desc_id.index()];
        let bounds = Aabb::new(position, desc.size * 0.5);

        let start = self.ports.len();
        self.ports.extend(desc.ports.iter().map(|port| PortView {
            component: id,
            offset: port.offset,
            direction: port.direction,
        }));
        let end = self.ports.len();

        self.components.push(ComponentView {
            desc: desc_id,
            bounds,
            ports: start..end,
        });
        id
    }

    /// Legt ein Netz ohne Zwischen-Vertices an.
    ///
    /// # Panics
    /// Bei unbekannten Port-IDs.
    pub fn add_net(&mut self, from: PortId, to: PortId) -> NetId {
        assert!(from.index() < self.ports.len() && to.index() < self.ports.len());
        let id = NetId(self.nets.len());
        self.nets.push(NetView {
            from,
            to,
            vertices: Vec::new(),
        });
        id
    }

    /// Hängt einen Vertex an das Ende der Vertex-Liste.
    pub fn add_vertex(&mut self, net: NetId, vertex: Vec2) {
        self.nets[net.index()].vertices.push(vertex);
    }

    /// Entfernt den letzten Vertex eines Netzes.
    pub fn remove_vertex(&mut self, net: NetId) -> Option<Vec2> {
        self.nets[net.index()].vertices.pop()
    }

    /// Setzt die Position eines vorhandenen Vertex.
    pub fn set_vertex(&mut self, net: NetId, index: usize, pos: Vec2) {
        self.nets[net.index()].vertices[index] = pos;
    }

    pub fn component(&self, id: ComponentId) -> &ComponentView {
        &self.components[id.index()]
    }

    pub fn net(&self, id: NetId) -> &NetView {
        &self.nets[id.index()]
    }

    /// Globale Port-IDs eines Bauteils.
    pub fn port_ids(&self, component: ComponentId) -> impl Iterator<Item = PortId> {
        self.components[component.index()].ports.clone().map(PortId)
    }

    /// Port-Mittelpunkt in Welt-Koordinaten.
    pub fn port_center(&self, port: PortId) -> Vec2 {
        let view = &self.ports[port.index()];
        self.components[view.component.index()].bounds.center + view.offset
    }

    /// Hit-Box eines Ports (quadratisch, Kantenlänge = Port-Breite).
    pub fn port_bounds(&self, port: PortId) -> Aabb {
        Aabb::square(self.port_center(port), self.theme.port_width * 0.5)
    }

    /// Alle Bauteile, deren Box das Rechteck schneidet, in Index-Reihenfolge.
    pub fn components_in_box(&self, area: &Aabb) -> Vec<ComponentId> {
        self.components
            .iter()
            .enumerate()
            .filter(|(_, c)| c.bounds.intersects(area))
            .map(|(i, _)| ComponentId(i))
            .collect()
    }

    /// `true`, wenn Bauteile selektiert sind oder das Rechteck aktiv ist.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty() || self.selection_box.has_area()
    }

    /// Prüft, ob ein Weltpunkt im Selektionsrechteck oder auf einem
    /// selektierten Bauteil liegt.
    pub fn point_in_selection(&self, world_pos: Vec2) -> bool {
        self.selection_box.contains_point(world_pos)
            || self
                .selected
                .iter()
                .any(|id| self.components[id.index()].bounds.contains_point(world_pos))
    }

    /// Löscht Selektion und Selektionsrechteck.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.selection_box = Aabb::ZERO;
    }
}
