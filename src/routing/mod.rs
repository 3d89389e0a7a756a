//! Schnittstelle zur externen Routing-Engine.
//!
//! Die Engine kennt Bauteile als Hindernis-Knoten, Ports als Andockpunkte
//! und Netze als Kanten. Der Interaktions-Kern meldet Geometrie-Änderungen
//! und holt nach `route()` die neuen Pfade ab.

mod orthogonal;

pub use orthogonal::OrthogonalRouter;

use crate::core::{Aabb, ComponentId, NetId, PortId, PortSide};
use glam::Vec2;

/// Routing-Engine für Verbindungspfade zwischen Ports.
pub trait Router {
    /// Registriert ein Bauteil als Knoten/Hindernis.
    fn add_node(&mut self, id: ComponentId, bounds: Aabb);

    /// Registriert einen Port.
    ///
    /// `position` ist relativ zur linken oberen Ecke des Knotens.
    fn add_port(&mut self, id: PortId, node: ComponentId, side: PortSide, position: Vec2);

    /// Registriert eine Kante zwischen zwei Ports.
    fn add_edge(
        &mut self,
        id: NetId,
        from_node: ComponentId,
        from_port: PortId,
        to_node: ComponentId,
        to_port: PortId,
    );

    /// Verschiebt einen Knoten um `delta`.
    fn move_node(&mut self, id: ComponentId, delta: Vec2);

    /// Berechnet alle Pfade neu.
    fn route(&mut self);

    /// Liefert den zuletzt berechneten Pfad einer Kante inklusive Endpunkten.
    ///
    /// Unbekannte oder noch nicht geroutete Kanten liefern einen leeren Pfad.
    fn edge_path(&self, id: NetId) -> Vec<Vec2>;
}
