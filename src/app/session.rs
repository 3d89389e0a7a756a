//! Editier-Sitzung: bündelt Eingabe, Szene, Kamera, Maus-Automat und Router
//! und führt die Frame-Pipeline aus.

use glam::Vec2;

use super::hit_test;
use super::input::{InputSnapshot, KeyCode};
use super::interaction::{InteractionState, MouseDownState, StepOutcome};
use super::route_sync::{route_and_sync, RouteSyncStats};
use super::{editing, render_scene};
use crate::core::{ComponentDesc, ComponentDescId, ComponentId, NetId, PortId, Scene};
use crate::routing::{OrthogonalRouter, Router};
use crate::shared::{RenderScene, UxOptions};

/// Explizites Sitzungsobjekt. Jeder Einstieg nimmt `&mut self`; es gibt
/// keinen globalen Zustand und keine internen Locks.
pub struct CircuitSession<R: Router = OrthogonalRouter> {
    /// Eingabe des aktuellen Frames (wird vom Host geschrieben)
    pub input: InputSnapshot,
    /// View-Modell
    pub scene: Scene,
    /// Maus-Automat
    pub interaction: InteractionState,
    /// Laufzeit-Optionen
    pub options: UxOptions,
    router: R,
    last_step: Option<StepOutcome>,
}

impl CircuitSession<OrthogonalRouter> {
    /// Erstellt eine Sitzung mit dem orthogonalen Standard-Router.
    pub fn with_default_router(descs: Vec<ComponentDesc>, options: UxOptions) -> Self {
        Self::new(descs, options, OrthogonalRouter::new())
    }
}

impl<R: Router> CircuitSession<R> {
    /// Erstellt eine leere Sitzung für einen Bauteil-Katalog.
    pub fn new(descs: Vec<ComponentDesc>, options: UxOptions, router: R) -> Self {
        log::info!("Sitzung mit {} Bauteiltypen gestartet", descs.len());
        Self {
            input: InputSnapshot::new(),
            scene: Scene::new(descs, options.theme()),
            interaction: InteractionState::new(),
            options,
            router,
            last_step: None,
        }
    }

    /// Platziert ein Bauteil (Mittelpunkt `position`, Welt-Koordinaten).
    ///
    /// # Panics
    /// Bei unbekannter `ComponentDescId`.
    pub fn add_component(&mut self, desc: ComponentDescId, position: Vec2) -> ComponentId {
        editing::add_component(&mut self.scene, &mut self.router, desc, position)
    }

    /// Verbindet zwei Ports mit einem neuen Netz.
    ///
    /// # Panics
    /// Bei unbekannten Port-IDs.
    pub fn add_net(&mut self, from: PortId, to: PortId) -> NetId {
        editing::add_net(&mut self.scene, &mut self.router, from, to)
    }

    /// Hängt einen Vertex an ein Netz an.
    pub fn add_vertex(&mut self, net: NetId, vertex: Vec2) {
        self.scene.add_vertex(net, vertex);
    }

    /// Entfernt den letzten Vertex eines Netzes.
    pub fn remove_vertex(&mut self, net: NetId) -> Option<Vec2> {
        self.scene.remove_vertex(net)
    }

    /// Setzt einen vorhandenen Vertex.
    pub fn set_vertex(&mut self, net: NetId, index: usize, pos: Vec2) {
        self.scene.set_vertex(net, index, pos);
    }

    /// Routet alle Netze neu und gleicht die Vertices ab.
    pub fn route(&mut self) -> RouteSyncStats {
        route_and_sync(&mut self.scene, &mut self.router)
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    /// Aktueller Zustand des Maus-Automaten.
    pub fn mouse_state(&self) -> MouseDownState {
        self.interaction.state
    }

    /// Ergebnis des letzten Frames.
    pub fn last_step(&self) -> Option<StepOutcome> {
        self.last_step
    }

    /// Mausposition in Welt-Koordinaten mit der aktuellen Kamera.
    pub fn world_mouse(&self) -> Vec2 {
        self.scene.camera.screen_to_world(self.input.mouse_pos)
    }

    /// Führt die Frame-Pipeline aus und liefert die Render-Szene.
    ///
    /// Reihenfolge: Tasten-Pan, Scroll-Zoom, Hit-Test, Maus-Automat
    /// (inkl. Routen-Synchronisation), Render-Szene.
    pub fn draw(&mut self) -> RenderScene {
        self.apply_key_pan();

        let scroll_y = self.input.scroll.y;
        if scroll_y.abs() > self.options.scroll_deadzone {
            self.scene
                .camera
                .apply_scroll_zoom(scroll_y, self.input.mouse_pos, &self.options);
        }

        let world_mouse = self.world_mouse();
        hit_test::update_hover(&mut self.scene, world_mouse, self.options.mouse_fudge);

        let step = self.interaction.step(
            &mut self.scene,
            &mut self.router,
            world_mouse,
            self.input.primary_down(),
            self.options.drag_threshold,
        );
        self.last_step = Some(step);

        render_scene::build(&self.scene, &self.interaction, world_mouse)
    }

    fn apply_key_pan(&mut self) {
        let keys = &self.input.keys;
        let mut direction = Vec2::ZERO;
        if keys.is_held(KeyCode::W) {
            direction.y -= 1.0;
        }
        if keys.is_held(KeyCode::A) {
            direction.x -= 1.0;
        }
        if keys.is_held(KeyCode::S) {
            direction.y += 1.0;
        }
        if keys.is_held(KeyCode::D) {
            direction.x += 1.0;
        }
        if direction != Vec2::ZERO {
            self.scene.camera.pan_by_keys(
                direction,
                self.input.frame_duration as f32,
                self.options.pan_speed,
            );
        }
    }
}
