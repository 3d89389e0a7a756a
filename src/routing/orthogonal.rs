//! Einfacher orthogonaler Router ohne Hindernisvermeidung.
//!
//! Jeder Pfad verlässt den Quell-Port senkrecht zu seiner Seite, läuft über
//! eine gemeinsame Mittel-Spalte und erreicht den Ziel-Port ebenso. Dient als
//! Standard-Engine, solange der Host keine eigene einhängt.

use std::collections::HashMap;

use glam::Vec2;

use super::Router;
use crate::core::{Aabb, ComponentId, NetId, PortId, PortSide};

/// Länge des geraden Stücks vor jedem Port.
const STUB_LENGTH: f32 = 10.0;

#[derive(Debug, Clone, Copy)]
struct PortAnchor {
    node: ComponentId,
    side: PortSide,
    /// relativ zur linken oberen Ecke des Knotens
    position: Vec2,
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    from: PortId,
    to: PortId,
}

/// Orthogonaler Standard-Router.
#[derive(Debug, Default)]
pub struct OrthogonalRouter {
    nodes: HashMap<ComponentId, Aabb>,
    ports: HashMap<PortId, PortAnchor>,
    edges: HashMap<NetId, Edge>,
    paths: HashMap<NetId, Vec<Vec2>>,
}

impl OrthogonalRouter {
    /// Erstellt einen leeren Router.
    pub fn new() -> Self {
        Self::default()
    }

    fn anchor_world(&self, port: PortId) -> Option<(Vec2, PortSide)> {
        let anchor = self.ports.get(&port)?;
        let node = self.nodes.get(&anchor.node)?;
        Some((node.min() + anchor.position, anchor.side))
    }

    fn route_edge(&self, edge: Edge) -> Vec<Vec2> {
        let (Some((start, start_side)), Some((end, end_side))) =
            (self.anchor_world(edge.from), self.anchor_world(edge.to))
        else {
            return Vec::new();
        };

        let stub_a = start + start_side.outward() * STUB_LENGTH;
        let stub_b = end + end_side.outward() * STUB_LENGTH;
        let mid_x = (stub_a.x + stub_b.x) * 0.5;

        let mut path: Vec<Vec2> = Vec::with_capacity(6);
        for p in [
            start,
            stub_a,
            Vec2::new(mid_x, stub_a.y),
            Vec2::new(mid_x, stub_b.y),
            stub_b,
            end,
        ] {
            if path.last() != Some(&p) {
                path.push(p);
            }
        }
        path
    }
}

impl Router for OrthogonalRouter {
    fn add_node(&mut self, id: ComponentId, bounds: Aabb) {
        self.nodes.insert(id, bounds);
    }

    fn add_port(&mut self, id: PortId, node: ComponentId, side: PortSide, position: Vec2) {
        self.ports.insert(
            id,
            PortAnchor {
                node,
                side,
                position,
            },
        );
    }

    fn add_edge(
        &mut self,
        id: NetId,
        _from_node: ComponentId,
        from_port: PortId,
        _to_node: ComponentId,
        to_port: PortId,
    ) {
        self.edges.insert(
            id,
            Edge {
                from: from_port,
                to: to_port,
            },
        );
    }

    fn move_node(&mut self, id: ComponentId, delta: Vec2) {
        if let Some(bounds) = self.nodes.get_mut(&id) {
            bounds.translate(delta);
        }
    }

    fn route(&mut self) {
        let paths = self
            .edges
            .iter()
            .map(|(id, edge)| (*id, self.route_edge(*edge)))
            .collect();
        self.paths = paths;
    }

    fn edge_path(&self, id: NetId) -> Vec<Vec2> {
        self.paths.get(&id).cloned().unwrap_or_default()
    }
}
