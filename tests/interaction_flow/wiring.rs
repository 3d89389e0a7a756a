use circuit_ux::{MouseDownState, Router};
use glam::Vec2;

use super::helpers::{buffer_ports, frame, session, TestSession, BUFFER};

/// Zwei Buffer nebeneinander: Ausgang des ersten bei (20, 0),
/// Eingang des zweiten bei (80, 0).
fn two_buffers() -> (TestSession, Vec2, Vec2) {
    let mut s = session();
    let first = s.add_component(BUFFER, Vec2::ZERO);
    let second = s.add_component(BUFFER, Vec2::new(100.0, 0.0));
    let (_, out) = buffer_ports(&s, first);
    let (input, _) = buffer_ports(&s, second);
    let out_pos = s.scene.port_center(out);
    let in_pos = s.scene.port_center(input);
    (s, out_pos, in_pos)
}

#[test]
fn test_click_wiring_connects_two_ports() {
    let (mut s, out_pos, in_pos) = two_buffers();
    assert_eq!(out_pos, Vec2::new(20.0, 0.0));
    assert_eq!(in_pos, Vec2::new(80.0, 0.0));

    assert_eq!(frame(&mut s, out_pos, true), MouseDownState::ClickPort);
    let source = s.interaction.wire_source.expect("Quell-Port gesetzt");
    assert_eq!(s.scene.port_center(source), out_pos);

    assert_eq!(frame(&mut s, out_pos, false), MouseDownState::ClickWiring);
    assert_eq!(frame(&mut s, Vec2::new(50.0, 30.0), false), MouseDownState::ClickWiring);
    assert_eq!(frame(&mut s, in_pos, true), MouseDownState::ConnectPort);

    let net = s.last_step().and_then(|step| step.created_net).expect("Netz angelegt");
    assert_eq!(s.scene.nets.len(), 1);
    let target = s.scene.hovered_port.expect("Ziel-Port unter der Maus");
    assert_eq!(s.scene.net(net).from, source);
    assert_eq!(s.scene.net(net).to, target);
    assert_eq!(s.router().edges, vec![(net, source, target)]);
    assert!(s.interaction.wire_source.is_none());

    // Vertices entsprechen dem Inneren des Router-Pfads
    let path = s.router().edge_path(net);
    assert!(path.len() > 2);
    assert_eq!(s.scene.net(net).vertices, path[1..path.len() - 1].to_vec());

    assert_eq!(frame(&mut s, in_pos, false), MouseDownState::Up);
}

#[test]
fn test_wire_preview_follows_mouse_while_wiring() {
    let (mut s, out_pos, _) = two_buffers();

    frame(&mut s, out_pos, true);
    frame(&mut s, out_pos, false);
    let mouse = Vec2::new(55.0, 40.0);
    s.input.mouse_pos = s.scene.camera.world_to_screen(mouse);
    let render = s.draw();

    let preview = render.wire_preview.expect("Vorschau während ClickWiring");
    assert_eq!(preview.from, out_pos);
    assert_eq!(preview.to, mouse);
}

#[test]
fn test_click_wiring_back_onto_source_creates_no_net() {
    let (mut s, out_pos, _) = two_buffers();

    frame(&mut s, out_pos, true);
    frame(&mut s, out_pos, false);
    assert_eq!(frame(&mut s, out_pos, true), MouseDownState::ConnectPort);

    assert!(s.scene.nets.is_empty());
    assert!(s.router().edges.is_empty());
    assert!(s.last_step().and_then(|step| step.created_net).is_none());
    assert!(s.interaction.wire_source.is_none());
    assert_eq!(frame(&mut s, out_pos, false), MouseDownState::Up);
}

#[test]
fn test_click_wiring_onto_empty_space_floats() {
    let (mut s, out_pos, _) = two_buffers();

    frame(&mut s, out_pos, true);
    frame(&mut s, out_pos, false);
    assert_eq!(frame(&mut s, Vec2::new(50.0, 80.0), true), MouseDownState::FloatingWire);

    assert!(s.scene.nets.is_empty());
    assert!(s.interaction.wire_source.is_none());
    assert!(s.draw().wire_preview.is_none());
    assert_eq!(frame(&mut s, Vec2::new(50.0, 80.0), false), MouseDownState::Up);
}

#[test]
fn test_drag_wiring_connects_on_release_over_port() {
    let (mut s, out_pos, in_pos) = two_buffers();

    assert_eq!(frame(&mut s, out_pos, true), MouseDownState::ClickPort);
    // Innerhalb der Drag-Schwelle bleibt der Port-Klick bestehen
    assert_eq!(frame(&mut s, out_pos + Vec2::new(5.0, 0.0), true), MouseDownState::ClickPort);
    assert_eq!(frame(&mut s, Vec2::new(50.0, 0.0), true), MouseDownState::DragWiring);
    assert_eq!(frame(&mut s, in_pos, true), MouseDownState::DragWiring);
    assert_eq!(frame(&mut s, in_pos, false), MouseDownState::ConnectPort);

    assert_eq!(s.scene.nets.len(), 1);
    assert_eq!(s.router().edges.len(), 1);
    assert_eq!(frame(&mut s, in_pos, false), MouseDownState::Up);
}

#[test]
fn test_drag_wiring_released_in_empty_space_floats() {
    let (mut s, out_pos, _) = two_buffers();

    frame(&mut s, out_pos, true);
    assert_eq!(frame(&mut s, Vec2::new(50.0, 40.0), true), MouseDownState::DragWiring);
    assert_eq!(frame(&mut s, Vec2::new(50.0, 40.0), false), MouseDownState::FloatingWire);

    assert!(s.scene.nets.is_empty());
    assert!(s.router().edges.is_empty());
    assert_eq!(frame(&mut s, Vec2::new(50.0, 40.0), false), MouseDownState::Up);
}

#[test]
fn test_port_press_anchors_drag_start() {
    let (mut s, out_pos, _) = two_buffers();

    // Vorheriger Klick ins Leere setzt einen anderen Anker
    frame(&mut s, Vec2::new(300.0, 300.0), true);
    frame(&mut s, Vec2::new(300.0, 300.0), false);
    frame(&mut s, Vec2::new(300.0, 300.0), false);
    assert_eq!(s.interaction.down_start, Vec2::new(300.0, 300.0));

    assert_eq!(frame(&mut s, out_pos, true), MouseDownState::ClickPort);
    assert_eq!(s.interaction.down_start, out_pos);
    assert_eq!(frame(&mut s, out_pos + Vec2::new(0.0, 4.0), true), MouseDownState::ClickPort);
}

#[test]
fn test_port_press_inside_selection_moves_instead_of_wiring() {
    let (mut s, out_pos, _) = two_buffers();

    // Bauteil selektieren, dann auf dessen Port drücken
    frame(&mut s, Vec2::ZERO, true);
    frame(&mut s, Vec2::ZERO, false);
    assert_eq!(s.scene.selected.len(), 1);

    // knapp innerhalb des Bauteils, aber noch über dem Port
    let on_port = out_pos - Vec2::new(1.0, 0.0);
    assert_eq!(frame(&mut s, on_port, true), MouseDownState::MoveSelection);
    assert!(s.scene.hovered_port.is_some());
    assert!(s.interaction.wire_source.is_none());
}
