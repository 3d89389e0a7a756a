//! Bezeichner und Bauteil-Beschreibungen des Schaltungsmodells.

use glam::Vec2;

macro_rules! dense_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl $name {
            /// Index in den dichten Vektor der Szene.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

dense_id!(
    /// ID eines platzierten Bauteils
    ComponentId
);
dense_id!(
    /// ID eines Ports (global über alle Bauteile)
    PortId
);
dense_id!(
    /// ID eines Netzes
    NetId
);
dense_id!(
    /// Index in den Bauteil-Katalog
    ComponentDescId
);

/// Signalrichtung eines Ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    In,
    Out,
    InOut,
}

/// Seite, von der der Router einen Port anfährt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSide {
    Left,
    Right,
}

impl PortSide {
    /// Eingänge werden von links angefahren, alles andere von rechts.
    pub fn for_direction(direction: PortDirection) -> Self {
        match direction {
            PortDirection::In => PortSide::Left,
            PortDirection::Out | PortDirection::InOut => PortSide::Right,
        }
    }

    /// Einheitsvektor aus dem Bauteil heraus.
    pub fn outward(self) -> Vec2 {
        match self {
            PortSide::Left => Vec2::NEG_X,
            PortSide::Right => Vec2::X,
        }
    }
}

/// Beschreibung eines Ports innerhalb eines Bauteiltyps.
#[derive(Debug, Clone, PartialEq)]
pub struct PortDesc {
    /// Anzeigename (z.B. "A", "Q")
    pub name: String,
    /// Signalrichtung
    pub direction: PortDirection,
    /// Position relativ zum Bauteil-Mittelpunkt
    pub offset: Vec2,
}

/// Katalog-Eintrag eines Bauteiltyps.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDesc {
    /// Typname (z.B. "AND")
    pub type_name: String,
    /// Volle Größe der Bauteil-Box
    pub size: Vec2,
    /// Ports in fester Reihenfolge
    pub ports: Vec<PortDesc>,
}

impl ComponentDesc {
    /// Erstellt einen Bauteiltyp ohne Ports.
    pub fn new(type_name: impl Into<String>, size: Vec2) -> Self {
        Self {
            type_name: type_name.into(),
            size,
            ports: Vec::new(),
        }
    }

    /// Fügt einen Port hinzu (Builder-Stil).
    pub fn with_port(
        mut self,
        name: impl Into<String>,
        direction: PortDirection,
        offset: Vec2,
    ) -> Self {
        self.ports.push(PortDesc {
            name: name.into(),
            direction,
            offset,
        });
        self
    }

    /// Standard-Gatter mit `inputs` Eingängen links und einem Ausgang rechts.
    pub fn gate(type_name: impl Into<String>, inputs: usize) -> Self {
        let height = (inputs.max(1) as f32 + 1.0) * 10.0;
        let half = Vec2::new(20.0, height * 0.5);
        let mut desc = Self::new(type_name, half * 2.0);
        for i in 0..inputs {
            let y = -half.y + (i as f32 + 1.0) * 10.0;
            desc = desc.with_port(format!("I{i}"), PortDirection::In, Vec2::new(-half.x, y));
        }
        desc.with_port("Q", PortDirection::Out, Vec2::new(half.x, 0.0))
    }
}
