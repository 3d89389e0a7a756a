use circuit_ux::{MouseDownState, NetId, RouteSyncStats, Router};
use glam::Vec2;

use super::helpers::{buffer_ports, frame, session, TestSession, BUFFER};

fn connected_buffers() -> (TestSession, NetId) {
    let mut s = session();
    let first = s.add_component(BUFFER, Vec2::ZERO);
    let second = s.add_component(BUFFER, Vec2::new(100.0, 0.0));
    let (_, out) = buffer_ports(&s, first);
    let (input, _) = buffer_ports(&s, second);
    let net = s.add_net(out, input);
    (s, net)
}

#[test]
fn test_route_copies_interior_points_of_fixed_path() {
    let (mut s, net) = connected_buffers();
    s.router_mut().fixed_paths.insert(
        net,
        vec![
            Vec2::new(20.0, 0.0),
            Vec2::new(40.0, 0.0),
            Vec2::new(40.0, 30.0),
            Vec2::new(80.0, 0.0),
        ],
    );

    let stats = s.route();

    assert_eq!(
        stats,
        RouteSyncStats {
            nets_synced: 1,
            vertices_added: 2,
            vertices_removed: 0,
        }
    );
    assert_eq!(
        s.scene.net(net).vertices,
        vec![Vec2::new(40.0, 0.0), Vec2::new(40.0, 30.0)]
    );
    assert_eq!(s.router().route_calls, 1);
}

#[test]
fn test_shorter_path_trims_vertices_from_the_tail() {
    let (mut s, net) = connected_buffers();
    for vertex in [Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)] {
        s.add_vertex(net, vertex);
    }
    s.router_mut().fixed_paths.insert(
        net,
        vec![Vec2::new(20.0, 0.0), Vec2::new(50.0, 0.0), Vec2::new(80.0, 0.0)],
    );

    let stats = s.route();

    assert_eq!(stats.vertices_removed, 2);
    assert_eq!(s.scene.net(net).vertices, vec![Vec2::new(50.0, 0.0)]);
}

#[test]
fn test_degenerate_path_leaves_vertices_untouched() {
    let (mut s, net) = connected_buffers();
    s.add_vertex(net, Vec2::new(7.0, 7.0));
    s.router_mut()
        .fixed_paths
        .insert(net, vec![Vec2::new(20.0, 0.0), Vec2::new(80.0, 0.0)]);

    let stats = s.route();

    assert_eq!(stats, RouteSyncStats::default());
    assert_eq!(s.scene.net(net).vertices, vec![Vec2::new(7.0, 7.0)]);
}

#[test]
fn test_route_twice_is_idempotent() {
    let (mut s, net) = connected_buffers();

    s.route();
    let first = s.scene.net(net).vertices.clone();
    let stats = s.route();

    assert_eq!(s.scene.net(net).vertices, first);
    assert_eq!(stats.vertices_added, 0);
    assert_eq!(stats.vertices_removed, 0);
    assert_eq!(stats.nets_synced, 1);
}

#[test]
fn test_moving_component_reroutes_attached_net() {
    let (mut s, net) = connected_buffers();
    s.route();
    // gleiche Höhe: Knick-Punkte fallen zusammen
    assert_eq!(s.scene.net(net).vertices.len(), 3);
    let calls_before = s.router().route_calls;

    assert_eq!(frame(&mut s, Vec2::ZERO, true), MouseDownState::SelectOne);
    assert_eq!(frame(&mut s, Vec2::new(0.0, 40.0), true), MouseDownState::MoveSelection);
    frame(&mut s, Vec2::new(0.0, 40.0), false);

    assert!(s.router().route_calls > calls_before);
    let path = s.router().edge_path(net);
    assert_eq!(path.first(), Some(&Vec2::new(20.0, 40.0)));
    assert_eq!(path.last(), Some(&Vec2::new(80.0, 0.0)));
    assert_eq!(s.scene.net(net).vertices, path[1..path.len() - 1].to_vec());
    assert_eq!(s.scene.net(net).vertices.len(), 4);
}

#[test]
fn test_render_scene_draws_ports_and_vertices() {
    let (mut s, net) = connected_buffers();
    s.route();

    let render = s.draw();
    let drawn = &render.nets[net.index()];

    assert_eq!(drawn.points.first(), Some(&Vec2::new(20.0, 0.0)));
    assert_eq!(drawn.points.last(), Some(&Vec2::new(80.0, 0.0)));
    assert_eq!(drawn.points.len(), s.scene.net(net).vertices.len() + 2);
}

#[test]
fn test_vertex_editing_through_session() {
    let (mut s, net) = connected_buffers();

    s.add_vertex(net, Vec2::new(30.0, 0.0));
    s.add_vertex(net, Vec2::new(30.0, 20.0));
    s.set_vertex(net, 0, Vec2::new(35.0, 0.0));
    assert_eq!(s.remove_vertex(net), Some(Vec2::new(30.0, 20.0)));
    assert_eq!(s.scene.net(net).vertices, vec![Vec2::new(35.0, 0.0)]);

    assert_eq!(s.remove_vertex(net), Some(Vec2::new(35.0, 0.0)));
    assert_eq!(s.remove_vertex(net), None);
}
