//! Maus-Zustandsautomat: übersetzt Tasten-Übergänge und Bewegung in
//! Selektion, Verschieben und Verdrahten.
//!
//! ## Zustandsübergänge
//!
//! ```text
//! Up          -> MoveSelection  (down & inSel)
//! Up          -> ClickPort      (down & overPort & !inSel)
//! Up          -> SelectOne      (down & overComp & !overPort & !inSel)
//! Up          -> Down           (down, sonst)
//! Down        -> Deselect       (!down & sel)
//! Down        -> Click          (!down & !sel)
//! Down        -> SelectArea     (move & !sel)
//! SelectOne   -> MoveSelection  (move)
//! ClickPort   -> DragWiring     (move)
//! ClickPort   -> ClickWiring    (!down)
//! DragWiring  -> ConnectPort    (!down & overPort)
//! DragWiring  -> FloatingWire   (!down & !overPort)
//! ClickWiring -> ConnectPort    (down & overPort)
//! ClickWiring -> FloatingWire   (down & !overPort)
//! Click, Deselect, SelectArea, SelectOne, MoveSelection,
//! ConnectPort, FloatingWire -> Up (!down)
//! ```
//!
//! Pro Frame laufen drei Phasen strikt nacheinander: Übergänge bis zum
//! Fixpunkt, dabei Exit-/Entry-Aktionen genau einmal pro Kante, danach die
//! kontinuierlichen Aktionen des erreichten Zustands.

use glam::Vec2;

use super::editing;
use super::route_sync::route_and_sync;
use crate::core::{Aabb, NetId, PortId, Scene};
use crate::routing::Router;

/// Zustand des primären Maus-Gestus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseDownState {
    /// Taste losgelassen, kein Gestus aktiv
    #[default]
    Up,
    /// Gedrückt auf leerer Fläche, noch unentschieden
    Down,
    /// Klick ins Leere ohne Selektion
    Click,
    /// Klick ins Leere mit Selektion: Selektion wird aufgehoben
    Deselect,
    /// Rechteck-Selektion per Drag
    SelectArea,
    /// Einzelnes Bauteil angeklickt
    SelectOne,
    /// Selektion wird verschoben
    MoveSelection,
    /// Port gedrückt, noch unentschieden
    ClickPort,
    /// Draht wird per Drag gezogen
    DragWiring,
    /// Draht hängt nach Port-Klick an der Maus
    ClickWiring,
    /// Draht endet auf einem Port
    ConnectPort,
    /// Draht endet im Leeren
    FloatingWire,
}

/// Eingabe-Prädikate eines Auswertungsschritts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Predicates {
    /// Primäre Maustaste gehalten
    pub down: bool,
    /// Maus über einem Port
    pub over_port: bool,
    /// Maus über einem Bauteil
    pub over_component: bool,
    /// Gehalten und weiter als die Drag-Schwelle von `down_start` entfernt
    pub moved: bool,
    /// Selektion nicht leer oder Selektionsrechteck aktiv
    pub selected: bool,
    /// Maus im Selektionsrechteck oder auf einem selektierten Bauteil
    pub in_selection: bool,
}

impl MouseDownState {
    /// Alle Zustände.
    pub const ALL: [MouseDownState; 12] = [
        MouseDownState::Up,
        MouseDownState::Down,
        MouseDownState::Click,
        MouseDownState::Deselect,
        MouseDownState::SelectArea,
        MouseDownState::SelectOne,
        MouseDownState::MoveSelection,
        MouseDownState::ClickPort,
        MouseDownState::DragWiring,
        MouseDownState::ClickWiring,
        MouseDownState::ConnectPort,
        MouseDownState::FloatingWire,
    ];

    /// Übergangsfunktion. Liefert `self`, wenn keine Kante feuert.
    pub fn next(self, p: &Predicates) -> MouseDownState {
        use MouseDownState::*;
        match self {
            Up => {
                if !p.down {
                    Up
                } else if p.in_selection {
                    MoveSelection
                } else if p.over_port {
                    ClickPort
                } else if p.over_component {
                    SelectOne
                } else {
                    Down
                }
            }
            Down => {
                if !p.down {
                    if p.selected {
                        Deselect
                    } else {
                        Click
                    }
                } else if p.moved && !p.selected {
                    SelectArea
                } else {
                    Down
                }
            }
            Click | Deselect | SelectArea | MoveSelection => release_to_up(self, p),
            SelectOne => {
                if !p.down {
                    Up
                } else if p.moved {
                    MoveSelection
                } else {
                    SelectOne
                }
            }
            ClickPort => {
                if p.moved {
                    DragWiring
                } else if !p.down {
                    ClickWiring
                } else {
                    ClickPort
                }
            }
            DragWiring => {
                if p.down {
                    DragWiring
                } else if p.over_port {
                    ConnectPort
                } else {
                    FloatingWire
                }
            }
            ClickWiring => {
                if !p.down {
                    ClickWiring
                } else if p.over_port {
                    ConnectPort
                } else {
                    FloatingWire
                }
            }
            ConnectPort | FloatingWire => release_to_up(self, p),
        }
    }

    /// Ereignis-Zustände beenden die Übergangskette eines Frames, damit sie
    /// mindestens einen Frame lang sichtbar sind.
    pub fn is_event(self) -> bool {
        matches!(
            self,
            MouseDownState::Click
                | MouseDownState::Deselect
                | MouseDownState::ConnectPort
                | MouseDownState::FloatingWire
        )
    }

    /// `true`, solange ein Draht an der Maus hängt.
    pub fn is_wiring(self) -> bool {
        matches!(
            self,
            MouseDownState::ClickPort | MouseDownState::DragWiring | MouseDownState::ClickWiring
        )
    }
}

/// Gemeinsame Exit-Bedingung der Endzustände: Loslassen führt nach `Up`.
fn release_to_up(state: MouseDownState, p: &Predicates) -> MouseDownState {
    if p.down {
        state
    } else {
        MouseDownState::Up
    }
}

/// Ergebnis eines Frames des Automaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Zustand vor dem Frame
    pub previous: MouseDownState,
    /// Zustand nach dem Frame
    pub state: MouseDownState,
    /// Über `ConnectPort` angelegtes Netz
    pub created_net: Option<NetId>,
}

/// Über Frames hinweg getragener Zustand des Automaten.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Aktueller Zustand
    pub state: MouseDownState,
    /// Welt-Anker des letzten Drucks (bei `MoveSelection` der letzte Frame)
    pub down_start: Vec2,
    /// Quell-Port des Drahts, solange verdrahtet wird
    pub wire_source: Option<PortId>,
}

impl InteractionState {
    /// Erstellt den Automaten im Zustand `Up`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Berechnet die Prädikate aus Szene und Maus.
    pub fn predicates(
        &self,
        scene: &Scene,
        world_pos: Vec2,
        down: bool,
        drag_threshold: f32,
    ) -> Predicates {
        let threshold = scene.camera.drag_threshold_world(drag_threshold);
        Predicates {
            down,
            over_port: scene.hovered_port.is_some(),
            over_component: scene.hovered_component.is_some(),
            moved: down && (world_pos - self.down_start).length() > threshold,
            selected: scene.has_selection(),
            in_selection: scene.point_in_selection(world_pos),
        }
    }

    /// Führt einen Frame aus: Übergänge bis zum Fixpunkt, dann
    /// kontinuierliche Aktionen.
    ///
    /// Erwartet, dass der Hover-Zustand der Szene für diesen Frame bereits
    /// aktualisiert ist.
    pub fn step<R: Router + ?Sized>(
        &mut self,
        scene: &mut Scene,
        router: &mut R,
        world_pos: Vec2,
        down: bool,
        drag_threshold: f32,
    ) -> StepOutcome {
        let previous = self.state;
        let mut created_net = None;

        // Jeder Zustand wird pro Frame höchstens einmal betreten
        for _ in 0..MouseDownState::ALL.len() {
            let predicates = self.predicates(scene, world_pos, down, drag_threshold);
            let old = self.state;
            let new = old.next(&predicates);
            if new == old {
                break;
            }

            log::debug!("Maus-Zustand: {:?} -> {:?}", old, new);
            self.on_exit(old, world_pos);
            if let Some(net) = self.on_enter(new, scene, router) {
                created_net = Some(net);
            }
            self.state = new;

            if new.is_event() {
                break;
            }
        }

        self.run_continuous(scene, router, world_pos);

        StepOutcome {
            previous,
            state: self.state,
            created_net,
        }
    }

    fn on_exit(&mut self, state: MouseDownState, world_pos: Vec2) {
        if state == MouseDownState::Up {
            self.down_start = world_pos;
        }
    }

    fn on_enter<R: Router + ?Sized>(
        &mut self,
        state: MouseDownState,
        scene: &mut Scene,
        router: &mut R,
    ) -> Option<NetId> {
        match state {
            MouseDownState::Deselect => {
                scene.clear_selection();
            }
            MouseDownState::SelectOne => {
                scene.selected.clear();
                if let Some(hovered) = scene.hovered_component {
                    scene.selected.insert(hovered);
                }
            }
            MouseDownState::ClickPort => {
                self.wire_source = scene.hovered_port;
            }
            MouseDownState::ConnectPort => {
                let source = self.wire_source.take();
                if let (Some(from), Some(to)) = (source, scene.hovered_port) {
                    if from != to {
                        let net = editing::add_net(scene, router, from, to);
                        route_and_sync(scene, router);
                        return Some(net);
                    }
                    log::debug!("Draht auf Quell-Port beendet, kein Netz angelegt");
                }
            }
            MouseDownState::FloatingWire => {
                if let Some(port) = self.wire_source.take() {
                    log::debug!("Draht von Port {} im Leeren verworfen", port);
                }
            }
            _ => {}
        }
        None
    }

    fn run_continuous<R: Router + ?Sized>(
        &mut self,
        scene: &mut Scene,
        router: &mut R,
        world_pos: Vec2,
    ) {
        match self.state {
            MouseDownState::MoveSelection => {
                let delta = world_pos - self.down_start;
                for id in &scene.selected {
                    scene.components[id.index()].bounds.translate(delta);
                    router.move_node(*id, delta);
                }
                route_and_sync(scene, router);
                scene.selection_box.translate(delta);
                self.down_start = world_pos;
            }
            MouseDownState::SelectArea => {
                scene.selection_box = Aabb::from_corners(self.down_start, world_pos);
                let hits = scene.components_in_box(&scene.selection_box);
                scene.selected.clear();
                scene.selected.extend(hits);
            }
            _ => {}
        }
    }
}
