//! Datenmodell: Kontrollpunkt eines Hermite-Splines.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Richtung eines Tangenten-Handles relativ zum Kontrollpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Ausgehende Tangente (zum nächsten Punkt hin)
    Forward,
    /// Eingehende Tangente (vom vorherigen Punkt her)
    Backward,
}

/// Kontrollpunkt eines Hermite-Splines.
///
/// Position in Weltkoordinaten, beide Handles als Tangentenvektoren relativ
/// zur Position. Besitz und Mutation liegen beim aufrufenden
/// Kurven-Container; die Geometrie-Funktionen lesen Punkte nur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplinePoint {
    /// Position im Weltraum
    pub position: Vec3,
    /// Ausgehendes Tangenten-Handle
    pub forward_handle: Vec3,
    /// Eingehendes Tangenten-Handle
    pub backward_handle: Vec3,
}

impl SplinePoint {
    /// Erstellt einen Kontrollpunkt mit expliziten Handles.
    pub fn new(position: Vec3, forward_handle: Vec3, backward_handle: Vec3) -> Self {
        Self {
            position,
            forward_handle,
            backward_handle,
        }
    }

    /// Erstellt einen glatten Punkt: Backward-Handle ist das gespiegelte
    /// Forward-Handle.
    pub fn mirrored(position: Vec3, forward_handle: Vec3) -> Self {
        Self::new(position, forward_handle, -forward_handle)
    }

    /// Liefert das Handle für die gewählte Richtung.
    pub fn handle(&self, direction: Direction) -> Vec3 {
        match direction {
            Direction::Forward => self.forward_handle,
            Direction::Backward => self.backward_handle,
        }
    }
}
