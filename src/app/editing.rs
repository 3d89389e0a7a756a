//! Use-Cases zum Anlegen von Bauteilen und Netzen in Szene und Router.

use glam::Vec2;

use crate::core::{ComponentDescId, ComponentId, NetId, PortId, PortSide, Scene};
use crate::routing::Router;

/// Platziert ein Bauteil und registriert es samt Ports beim Router.
pub fn add_component<R: Router + ?Sized>(
    scene: &mut Scene,
    router: &mut R,
    desc: ComponentDescId,
    position: Vec2,
) -> ComponentId {
    let id = scene.add_component(desc, position);
    let bounds = scene.component(id).bounds;
    router.add_node(id, bounds);

    for port in scene.port_ids(id) {
        let view = scene.ports[port.index()];
        // Router erwartet Port-Positionen relativ zur linken oberen Ecke
        router.add_port(
            port,
            id,
            PortSide::for_direction(view.direction),
            view.offset + bounds.half_size,
        );
    }

    log::debug!(
        "Bauteil {} ({}) platziert bei ({:.1}, {:.1})",
        id,
        scene.desc(desc).type_name,
        position.x,
        position.y
    );
    id
}

/// Legt ein Netz zwischen zwei Ports an und registriert es als Router-Kante.
pub fn add_net<R: Router + ?Sized>(
    scene: &mut Scene,
    router: &mut R,
    from: PortId,
    to: PortId,
) -> NetId {
    let id = scene.add_net(from, to);
    let from_node = scene.ports[from.index()].component;
    let to_node = scene.ports[to.index()].component;
    router.add_edge(id, from_node, from, to_node, to);

    log::debug!("Netz {} angelegt: Port {} -> Port {}", id, from, to);
    id
}
