//! Abtastung eines Segments: dichte Punktlisten und gleichmäßige
//! Arc-Length-Verteilung.
//!
//! Baut ausschließlich auf [`evaluate_position`] auf; keine Topologie,
//! kein Caching. Die Längen hier sind Polylinien-Näherungen der
//! Positionskurve, nicht die Quadratur aus [`crate::length`].

use crate::point::SplinePoint;
use crate::segment::evaluate_position;
use glam::Vec3;

/// Tastet ein Segment gleichmäßig im Parameterraum ab.
///
/// Liefert `samples_per_segment + 1` Punkte inklusive beider Endpunkte.
/// `samples_per_segment == 0` ergibt nur Start- und Endposition.
pub fn sample_segment(a: &SplinePoint, b: &SplinePoint, samples_per_segment: usize) -> Vec<Vec3> {
    if samples_per_segment == 0 {
        return vec![a.position, b.position];
    }

    let mut result = Vec::with_capacity(samples_per_segment + 1);
    for i in 0..=samples_per_segment {
        let t = i as f32 / samples_per_segment as f32;
        result.push(evaluate_position(a, b, t));
    }
    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Verteilt Punkte gleichmäßig (Arc-Length) entlang eines Segments.
///
/// `max_segment_length`: maximaler Abstand zwischen zwei Ausgabepunkten.
/// Degenerierte Segmente (Länge < EPSILON) ergeben nur die Startposition.
pub fn resample_segment_by_distance(
    a: &SplinePoint,
    b: &SplinePoint,
    max_segment_length: f32,
) -> Vec<Vec3> {
    let start = a.position;

    // Arc-Length-LUT für Gesamtlänge und die Umkehrung t(s)
    let lut_samples = 256;
    let mut arc_lengths = Vec::with_capacity(lut_samples + 1);
    let mut prev = start;
    let mut cumulative = 0.0f32;
    arc_lengths.push(0.0f32);
    for i in 1..=lut_samples {
        let t = i as f32 / lut_samples as f32;
        let p = evaluate_position(a, b, t);
        cumulative += prev.distance(p);
        arc_lengths.push(cumulative);
        prev = p;
    }

    let total_length = cumulative;
    if total_length < f32::EPSILON {
        return vec![start];
    }

    let segment_count = (total_length / max_segment_length).ceil().max(1.0) as usize;
    let target_spacing = total_length / segment_count as f32;

    let mut positions = Vec::with_capacity(segment_count + 1);
    positions.push(start);

    for seg in 1..segment_count {
        let target_length = seg as f32 * target_spacing;
        let idx = arc_lengths
            .partition_point(|&len| len < target_length)
            .min(lut_samples)
            .max(1);

        let len_before = arc_lengths[idx - 1];
        let len_after = arc_lengths[idx];
        let frac = if (len_after - len_before).abs() > f32::EPSILON {
            (target_length - len_before) / (len_after - len_before)
        } else {
            0.0
        };

        let t = ((idx - 1) as f32 + frac) / lut_samples as f32;
        positions.push(evaluate_position(a, b, t));
    }

    positions.push(b.position);
    positions
}
