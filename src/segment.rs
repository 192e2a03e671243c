//! Geschlossene Auswertung eines Hermite-Segments: Position und Normale.

use crate::point::{Direction, SplinePoint};
use glam::Vec3;

/// Position im Weltraum für `t` zwischen den Punkten A und B.
///
/// Kubische Hermite-Basis: A trägt sein Forward-Handle bei, B sein
/// Backward-Handle (Handles sind relativ zur lokalen Orientierung des
/// jeweiligen Punkts definiert, nicht zur Segmentrichtung).
///
/// `t` wird nicht geklemmt — außerhalb von [0, 1] extrapoliert das Polynom.
pub fn evaluate_position(a: &SplinePoint, b: &SplinePoint, t: f32) -> Vec3 {
    let omt = 1.0 - t;
    let omt2 = omt * omt;
    let t2 = t * t;

    a.position * (omt2 * omt)
        + a.handle(Direction::Forward) * (3.0 * omt2 * t)
        + b.handle(Direction::Backward) * (3.0 * omt * t2)
        + b.position * (t2 * t)
}

/// Normalen-artiger Vektor für `t` zwischen den Punkten A und B.
///
/// Nicht auf Einheitslänge normalisiert und kein senkrechter Vektor im
/// strengen Sinn; Verbraucher normalisieren bei Bedarf selbst.
/// Handle-Auswahl wie bei [`evaluate_position`]: A Forward, B Backward.
pub fn evaluate_normal(a: &SplinePoint, b: &SplinePoint, t: f32) -> Vec3 {
    let t2 = t * t;

    (6.0 * t2 - 6.0 * t) * a.position
        + (3.0 * t2 - (4.0 * t + 1.0)) * a.handle(Direction::Forward)
        + (-6.0 * t2 + 6.0 * t) * b.position
        + (3.0 * t2 - 2.0 * t) * b.handle(Direction::Backward)
}
