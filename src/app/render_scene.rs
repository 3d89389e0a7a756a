//! Builder für Render-Szenen aus der Szene und dem Maus-Zustand.

use glam::Vec2;

use super::interaction::InteractionState;
use crate::core::{ComponentId, NetId, Scene};
use crate::shared::{RenderComponent, RenderNet, RenderScene, WirePreview};

/// Baut eine RenderScene aus dem aktuellen Zustand.
pub fn build(scene: &Scene, interaction: &InteractionState, world_mouse: Vec2) -> RenderScene {
    let components = scene
        .components
        .iter()
        .enumerate()
        .map(|(index, view)| {
            let id = ComponentId(index);
            RenderComponent {
                id,
                bounds: view.bounds,
                selected: scene.selected.contains(&id),
                hovered: scene.hovered_component == Some(id),
            }
        })
        .collect();

    let nets = scene
        .nets
        .iter()
        .enumerate()
        .map(|(index, net)| {
            let mut points = Vec::with_capacity(net.vertices.len() + 2);
            points.push(scene.port_center(net.from));
            points.extend_from_slice(&net.vertices);
            points.push(scene.port_center(net.to));
            RenderNet {
                id: NetId(index),
                points,
            }
        })
        .collect();

    let wire_preview = if interaction.state.is_wiring() {
        interaction.wire_source.map(|port| WirePreview {
            from: scene.port_center(port),
            to: world_mouse,
        })
    } else {
        None
    };

    RenderScene {
        camera: scene.camera.clone(),
        theme: scene.theme,
        components,
        nets,
        hovered_port: scene
            .hovered_port
            .map(|port| (port, scene.port_center(port))),
        selection_box: scene
            .selection_box
            .has_area()
            .then_some(scene.selection_box),
        wire_preview,
    }
}
