//! Eingabe-Snapshot: wird einmal pro Frame von der Host-Eingabeschicht befüllt.

use glam::Vec2;

/// Tasten, die der Interaktions-Kern auswertet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
}

impl KeyCode {
    /// Anzahl der Varianten (Größe des `KeySet`-Arrays).
    pub const COUNT: usize = 4;

    /// Alle Varianten in Index-Reihenfolge.
    pub const ALL: [KeyCode; Self::COUNT] = [
        KeyCode::W,
        KeyCode::A,
        KeyCode::S,
        KeyCode::D,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Menge gehaltener Tasten als festes Bool-Array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySet {
    held: [bool; KeyCode::COUNT],
}

impl KeySet {
    /// Leere Menge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markiert eine Taste als gehalten.
    pub fn press(&mut self, key: KeyCode) {
        self.held[key.index()] = true;
    }

    /// Markiert eine Taste als losgelassen.
    pub fn release(&mut self, key: KeyCode) {
        self.held[key.index()] = false;
    }

    /// Gibt zurück, ob die Taste gehalten wird.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held[key.index()]
    }

    /// Lässt alle Tasten los.
    pub fn clear(&mut self) {
        self.held = [false; KeyCode::COUNT];
    }

    /// Iteriert über alle gehaltenen Tasten.
    pub fn iter_held(&self) -> impl Iterator<Item = KeyCode> + '_ {
        KeyCode::ALL.into_iter().filter(|k| self.is_held(*k))
    }
}

/// Maustasten und Modifikatoren.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Linke Maustaste gedrückt
    pub lmb: bool,
    /// Rechte Maustaste gedrückt
    pub rmb: bool,
    /// Mittlere Maustaste gedrückt
    pub mmb: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Eingabezustand eines Frames. Für den Kern read-only.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Mausposition in Screen-Koordinaten
    pub mouse_pos: Vec2,
    /// Scroll-Delta dieses Frames
    pub scroll: Vec2,
    /// Gehaltene Tasten
    pub keys: KeySet,
    /// Maustasten und Modifikatoren
    pub modifiers: Modifiers,
    /// Dauer des letzten Frames in Sekunden
    pub frame_duration: f64,
}

impl InputSnapshot {
    /// Erstellt einen leeren Snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob die linke Maustaste gehalten wird.
    pub fn primary_down(&self) -> bool {
        self.modifiers.lmb
    }
}
