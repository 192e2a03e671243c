//! Bogenlänge eines Hermite-Segments per 5-Punkt-Gauß-Legendre-Quadratur.

use crate::point::{Direction, SplinePoint};
use glam::Vec3;

/// Stützstelle und Gewicht einer Gauß-Legendre-Regel auf [-1, 1].
#[derive(Debug, Clone, Copy)]
struct GaussLegendreCoefficient {
    abscissa: f32,
    weight: f32,
}

/// Feste Koeffiziententabelle der 5-Punkt-Regel.
const GAUSS_LEGENDRE_5: [GaussLegendreCoefficient; 5] = [
    GaussLegendreCoefficient {
        abscissa: 0.0,
        weight: 0.568_888_9,
    },
    GaussLegendreCoefficient {
        abscissa: -0.538_469_3,
        weight: 0.478_628_67,
    },
    GaussLegendreCoefficient {
        abscissa: 0.538_469_3,
        weight: 0.478_628_67,
    },
    GaussLegendreCoefficient {
        abscissa: -0.906_179_85,
        weight: 0.236_926_88,
    },
    GaussLegendreCoefficient {
        abscissa: 0.906_179_85,
        weight: 0.236_926_88,
    },
];

/// Approximierte Bogenlänge des Segments zwischen `start` und `end`.
///
/// Integriert den Betrag der Hermite-Ableitung über t ∈ [0, 1] mit einer
/// festen 5-Punkt-Gauß-Legendre-Regel. In die Ableitung gehen nur die
/// Forward-Handles beider Punkte ein. Deterministisch, keine Validierung;
/// nicht-finite Eingaben propagieren durch die Arithmetik.
pub fn segment_length(start: &SplinePoint, end: &SplinePoint) -> f32 {
    // Koeffizienten der kubischen Hermite-Ableitung
    let c0 = start.handle(Direction::Forward);
    let c1 = 6.0 * (end.position - start.position)
        - 4.0 * start.handle(Direction::Forward)
        - 2.0 * end.handle(Direction::Forward);
    let c2 = 6.0 * (start.position - end.position)
        + 3.0 * (start.handle(Direction::Forward) + end.handle(Direction::Forward));

    let derivative = |t: f32| -> Vec3 { c0 + t * (c1 + t * c2) };

    let mut length = 0.0f32;
    for coefficient in &GAUSS_LEGENDRE_5 {
        // Intervallwechsel von [-1, 1] nach [0, 1]; das abschließende 0.5
        // ist die zugehörige Jacobi-Determinante.
        let t = 0.5 * (1.0 + coefficient.abscissa);
        length += derivative(t).length() * coefficient.weight;
    }
    0.5 * length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_straight_segment() {
        let start = SplinePoint::mirrored(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let end = SplinePoint::mirrored(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(segment_length(&start, &end), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_straight_segment_matches_chord() {
        // Handles kollinear zur Sehne und passend skaliert: Kurve ist eine Gerade
        let start = SplinePoint::mirrored(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0));
        let end = SplinePoint::mirrored(Vec3::new(3.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0));
        assert_relative_eq!(segment_length(&start, &end), 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_curved_segment_longer_than_chord() {
        // Handles quer zur Sehne biegen die Kurve aus
        let start = SplinePoint::mirrored(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0));
        let end = SplinePoint::mirrored(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, -2.0, 0.0));
        let chord = start.position.distance(end.position);
        assert!(segment_length(&start, &end) > chord);
    }

    #[test]
    fn test_length_is_deterministic() {
        let start = SplinePoint::mirrored(Vec3::new(0.3, 1.7, -2.0), Vec3::new(1.0, 0.5, 0.25));
        let end = SplinePoint::mirrored(Vec3::new(4.0, -1.0, 3.0), Vec3::new(-0.5, 2.0, 1.0));

        let first = segment_length(&start, &end);
        for _ in 0..10 {
            assert_eq!(segment_length(&start, &end), first);
        }
    }

    #[test]
    fn test_length_symmetric_under_reversal() {
        // Umgekehrte Durchlaufrichtung: Rollen getauscht, Tangenten negiert
        let start = SplinePoint::mirrored(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        let end = SplinePoint::mirrored(Vec3::new(3.0, 0.0, 1.0), Vec3::new(1.0, -1.0, 0.0));

        let reversed_start = SplinePoint::mirrored(end.position, -end.forward_handle);
        let reversed_end = SplinePoint::mirrored(start.position, -start.forward_handle);

        assert_relative_eq!(
            segment_length(&start, &end),
            segment_length(&reversed_start, &reversed_end),
            epsilon = 1e-4
        );
    }
}
