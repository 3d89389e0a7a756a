//! Routen-Synchronisation: überträgt Router-Pfade in die editierbaren
//! Vertex-Listen der Netze.

use glam::Vec2;

use crate::core::{NetId, Scene};
use crate::routing::Router;

/// Statistik eines Synchronisationslaufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteSyncStats {
    /// Netze, deren Vertices überschrieben wurden
    pub nets_synced: usize,
    /// Angehängte Platzhalter-Vertices
    pub vertices_added: usize,
    /// Entfernte Vertices am Listenende
    pub vertices_removed: usize,
}

/// Lässt den Router alle Pfade neu berechnen und gleicht danach jedes Netz ab.
pub fn route_and_sync<R: Router + ?Sized>(scene: &mut Scene, router: &mut R) -> RouteSyncStats {
    router.route();

    let mut stats = RouteSyncStats::default();
    for index in 0..scene.nets.len() {
        let net = NetId(index);
        let path = router.edge_path(net);
        sync_net_vertices(scene, net, &path, &mut stats);
    }

    log::trace!(
        "Routen synchronisiert: {} Netze, +{} / -{} Vertices",
        stats.nets_synced,
        stats.vertices_added,
        stats.vertices_removed
    );
    stats
}

/// Gleicht die inneren Vertices eines Netzes an einen Pfad an.
///
/// Pfade mit höchstens zwei Punkten werden ignoriert. Sonst wird die
/// Vertex-Liste am Ende verlängert oder gekürzt, bis sie `path.len() - 2`
/// Einträge hat, und anschließend in Reihenfolge überschrieben.
pub fn sync_net_vertices(scene: &mut Scene, net: NetId, path: &[Vec2], stats: &mut RouteSyncStats) {
    if path.len() <= 2 {
        return;
    }

    let interior = &path[1..path.len() - 1];
    let mut current = scene.net(net).vertices.len();

    while current < interior.len() {
        scene.add_vertex(net, Vec2::ZERO);
        current += 1;
        stats.vertices_added += 1;
    }
    while current > interior.len() {
        scene.remove_vertex(net);
        current -= 1;
        stats.vertices_removed += 1;
    }

    for (index, point) in interior.iter().enumerate() {
        scene.set_vertex(net, index, *point);
    }
    stats.nets_synced += 1;
}
