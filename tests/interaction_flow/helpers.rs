use std::collections::HashMap;

use circuit_ux::{
    Aabb, CircuitSession, ComponentDesc, ComponentId, MouseDownState, NetId, OrthogonalRouter,
    PortDirection, PortId, PortSide, Router, UxOptions,
};
use glam::Vec2;

/// Router-Testdouble: delegiert an den orthogonalen Router, protokolliert
/// Aufrufe und erlaubt feste Pfade pro Netz.
#[derive(Default)]
pub struct RecordingRouter {
    inner: OrthogonalRouter,
    pub fixed_paths: HashMap<NetId, Vec<Vec2>>,
    pub moves: Vec<(ComponentId, Vec2)>,
    pub edges: Vec<(NetId, PortId, PortId)>,
    pub route_calls: usize,
}

impl Router for RecordingRouter {
    fn add_node(&mut self, id: ComponentId, bounds: Aabb) {
        self.inner.add_node(id, bounds);
    }

    fn add_port(&mut self, id: PortId, node: ComponentId, side: PortSide, position: Vec2) {
        self.inner.add_port(id, node, side, position);
    }

    fn add_edge(
        &mut self,
        id: NetId,
        from_node: ComponentId,
        from_port: PortId,
        to_node: ComponentId,
        to_port: PortId,
    ) {
        self.edges.push((id, from_port, to_port));
        self.inner
            .add_edge(id, from_node, from_port, to_node, to_port);
    }

    fn move_node(&mut self, id: ComponentId, delta: Vec2) {
        self.moves.push((id, delta));
        self.inner.move_node(id, delta);
    }

    fn route(&mut self) {
        self.route_calls += 1;
        self.inner.route();
    }

    fn edge_path(&self, id: NetId) -> Vec<Vec2> {
        match self.fixed_paths.get(&id) {
            Some(path) => path.clone(),
            None => self.inner.edge_path(id),
        }
    }
}

/// Katalog-Index einer portlosen 20×20-Box.
pub const BOX: circuit_ux::ComponentDescId = circuit_ux::ComponentDescId(0);
/// Katalog-Index eines Bauteils mit einem Eingang links und einem Ausgang rechts.
pub const BUFFER: circuit_ux::ComponentDescId = circuit_ux::ComponentDescId(1);

pub fn catalog() -> Vec<ComponentDesc> {
    vec![
        ComponentDesc::new("BOX", Vec2::splat(20.0)),
        ComponentDesc::new("BUF", Vec2::new(40.0, 20.0))
            .with_port("A", PortDirection::In, Vec2::new(-20.0, 0.0))
            .with_port("Y", PortDirection::Out, Vec2::new(20.0, 0.0)),
    ]
}

pub type TestSession = CircuitSession<RecordingRouter>;

pub fn session() -> TestSession {
    CircuitSession::new(catalog(), UxOptions::default(), RecordingRouter::default())
}

/// Führt einen Frame mit Maus an der Weltposition `world` aus.
pub fn frame(session: &mut TestSession, world: Vec2, down: bool) -> MouseDownState {
    session.input.mouse_pos = session.scene.camera.world_to_screen(world);
    session.input.modifiers.lmb = down;
    session.input.scroll = Vec2::ZERO;
    session.draw();
    session.mouse_state()
}

/// Eingangs- und Ausgangs-Port eines BUFFER-Bauteils.
pub fn buffer_ports(session: &TestSession, id: ComponentId) -> (PortId, PortId) {
    let mut ports = session.scene.port_ids(id);
    let input = ports.next().expect("Eingang vorhanden");
    let output = ports.next().expect("Ausgang vorhanden");
    (input, output)
}
