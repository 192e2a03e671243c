//! Hermite-Spline-Segment-Geometrie.
//!
//! Reine, zustandslose Berechnungen über einzelne Segmente: Bogenlänge per
//! 5-Punkt-Gauß-Legendre-Quadratur sowie Position und Normale in
//! geschlossener Form. Dazu Abtast-Hilfen für gleichmäßig verteilte Punkte.
//!
//! Keine Topologie (Segmentreihenfolge, Loops), kein Caching, keine
//! Validierung: nicht-finite Eingaben propagieren per IEEE-754-Arithmetik.
//! Alle Funktionen sind frei von geteiltem Zustand und ohne Synchronisation
//! parallel aufrufbar.

pub mod length;
pub mod point;
pub mod sampling;
pub mod segment;

pub use length::segment_length;
pub use point::{Direction, SplinePoint};
pub use sampling::{polyline_length, resample_segment_by_distance, sample_segment};
pub use segment::{evaluate_normal, evaluate_position};
