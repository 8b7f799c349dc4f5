//! Umrisse der Board-Elemente und Überlappungstest per Polygon-Verschneidung.
//!
//! Exakte Punkt-Tests laufen analytisch, die Flächenverschneidung über `geo`.

use geo::{Area, BooleanOps, LineString, Polygon};
use glam::Vec2;

/// Anzahl Stützpunkte eines Vollkreises bei der Polygonisierung
pub const ARC_SEGMENTS: usize = 32;

/// Mindest-Schnittfläche, ab der zwei Umrisse als überlappend gelten (mm²)
pub const OVERLAP_AREA_EPSILON: f64 = 1e-6;

/// Geometrischer Umriss eines Board-Elements (ggf. um einen Abstand erweitert)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    /// Kreisfläche (Pad-Ring)
    Circle { center: Vec2, radius: f32 },
    /// Strecke mit runden Enden (Leiterbahn)
    Capsule { start: Vec2, end: Vec2, radius: f32 },
    /// Rechteck, dessen Ecken um `radius` abgerundet nach außen wachsen (Bauteil)
    RoundedRect {
        center: Vec2,
        half_size: Vec2,
        radius: f32,
    },
}

impl Outline {
    /// Prüft, ob der Punkt innerhalb des Umrisses liegt
    pub fn contains(&self, point: Vec2) -> bool {
        match *self {
            Outline::Circle { center, radius } => center.distance(point) <= radius,
            Outline::Capsule { start, end, radius } => {
                distance_to_segment(point, start, end) <= radius
            }
            Outline::RoundedRect {
                center,
                half_size,
                radius,
            } => {
                let offset = (point - center).abs() - half_size;
                offset.max(Vec2::ZERO).length() <= radius
            }
        }
    }

    /// Achsenparalleles Begrenzungsrechteck als (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        match *self {
            Outline::Circle { center, radius } => {
                (center - Vec2::splat(radius), center + Vec2::splat(radius))
            }
            Outline::Capsule { start, end, radius } => (
                start.min(end) - Vec2::splat(radius),
                start.max(end) + Vec2::splat(radius),
            ),
            Outline::RoundedRect {
                center,
                half_size,
                radius,
            } => {
                let extent = half_size + Vec2::splat(radius);
                (center - extent, center + extent)
            }
        }
    }

    /// Approximiert den Umriss als gegen den Uhrzeigersinn orientiertes Polygon
    pub fn to_polygon(&self) -> Polygon<f64> {
        let mut points: Vec<(f64, f64)> = Vec::with_capacity(ARC_SEGMENTS + 4);

        match *self {
            Outline::Circle { center, radius } => {
                push_arc(&mut points, center, radius, 0.0, std::f32::consts::TAU, ARC_SEGMENTS);
            }
            Outline::Capsule { start, end, radius } => {
                let direction = end - start;
                if direction.length_squared() <= f32::EPSILON {
                    push_arc(&mut points, start, radius, 0.0, std::f32::consts::TAU, ARC_SEGMENTS);
                } else {
                    let heading = direction.y.atan2(direction.x);
                    let half_turn = std::f32::consts::PI;
                    let quarter = std::f32::consts::FRAC_PI_2;
                    let steps = ARC_SEGMENTS / 2;
                    push_arc(&mut points, end, radius, heading - quarter, half_turn, steps);
                    push_arc(&mut points, start, radius, heading + quarter, half_turn, steps);
                }
            }
            Outline::RoundedRect {
                center,
                half_size,
                radius,
            } => {
                let corners = [
                    Vec2::new(half_size.x, half_size.y),
                    Vec2::new(-half_size.x, half_size.y),
                    Vec2::new(-half_size.x, -half_size.y),
                    Vec2::new(half_size.x, -half_size.y),
                ];
                if radius <= 0.0 {
                    points.extend(corners.iter().map(|c| to_coord(center + *c)));
                } else {
                    let quarter = std::f32::consts::FRAC_PI_2;
                    for (index, corner) in corners.iter().enumerate() {
                        push_arc(
                            &mut points,
                            center + *corner,
                            radius,
                            quarter * index as f32,
                            quarter,
                            ARC_SEGMENTS / 4,
                        );
                    }
                }
            }
        }

        Polygon::new(LineString::from(points), vec![])
    }

    /// Prüft, ob die Schnittfläche beider Umrisse nicht leer ist
    pub fn overlaps(&self, other: &Outline) -> bool {
        let (a_min, a_max) = self.bounds();
        let (b_min, b_max) = other.bounds();
        if a_max.x < b_min.x || b_max.x < a_min.x || a_max.y < b_min.y || b_max.y < a_min.y {
            return false;
        }

        let a = self.to_polygon();
        let b = other.to_polygon();
        if a.unsigned_area() <= OVERLAP_AREA_EPSILON || b.unsigned_area() <= OVERLAP_AREA_EPSILON
        {
            return false;
        }

        a.intersection(&b).unsigned_area() > OVERLAP_AREA_EPSILON
    }
}

/// Kürzester Abstand von `point` zur Strecke `start`-`end`
pub fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let segment = end - start;
    let length_sq = segment.length_squared();
    if length_sq <= f32::EPSILON {
        return point.distance(start);
    }
    let t = ((point - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}

/// Dreht `point` um 90° um `center`.
pub fn rotate_90(point: Vec2, center: Vec2, clockwise: bool) -> Vec2 {
    let rel = point - center;
    let rotated = if clockwise {
        Vec2::new(rel.y, -rel.x)
    } else {
        Vec2::new(-rel.y, rel.x)
    };
    center + rotated
}

fn push_arc(
    points: &mut Vec<(f64, f64)>,
    center: Vec2,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    steps: usize,
) {
    let closed = (sweep - std::f32::consts::TAU).abs() <= f32::EPSILON;
    // Vollkreis: letzter Punkt fällt auf den ersten
    let count = if closed { steps } else { steps + 1 };
    for step in 0..count {
        let angle = start_angle + sweep * step as f32 / steps as f32;
        points.push(to_coord(center + Vec2::new(angle.cos(), angle.sin()) * radius));
    }
}

fn to_coord(v: Vec2) -> (f64, f64) {
    (f64::from(v.x), f64::from(v.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_contains_and_overlap() {
        let a = Outline::Circle {
            center: Vec2::ZERO,
            radius: 1.0,
        };
        let b = Outline::Circle {
            center: Vec2::new(1.5, 0.0),
            radius: 1.0,
        };
        let far = Outline::Circle {
            center: Vec2::new(3.0, 0.0),
            radius: 0.5,
        };

        assert!(a.contains(Vec2::new(0.5, 0.5)));
        assert!(!a.contains(Vec2::new(1.0, 1.0)));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_capsule_contains_round_caps() {
        let capsule = Outline::Capsule {
            start: Vec2::ZERO,
            end: Vec2::new(10.0, 0.0),
            radius: 0.5,
        };

        assert!(capsule.contains(Vec2::new(5.0, 0.4)));
        assert!(capsule.contains(Vec2::new(10.4, 0.0)));
        assert!(!capsule.contains(Vec2::new(5.0, 0.6)));
    }

    #[test]
    fn test_zero_length_capsule_is_circle() {
        let capsule = Outline::Capsule {
            start: Vec2::new(2.0, 2.0),
            end: Vec2::new(2.0, 2.0),
            radius: 1.0,
        };
        let polygon = capsule.to_polygon();
        let full = std::f64::consts::PI;

        assert_relative_eq!(polygon.unsigned_area(), full, epsilon = 0.05);
    }

    #[test]
    fn test_touching_rectangles_do_not_overlap() {
        let a = Outline::RoundedRect {
            center: Vec2::ZERO,
            half_size: Vec2::new(1.0, 1.0),
            radius: 0.0,
        };
        let b = Outline::RoundedRect {
            center: Vec2::new(2.0, 0.0),
            half_size: Vec2::new(1.0, 1.0),
            radius: 0.0,
        };

        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_rounded_rect_grows_by_radius() {
        let padded = Outline::RoundedRect {
            center: Vec2::ZERO,
            half_size: Vec2::new(1.0, 1.0),
            radius: 0.5,
        };

        assert!(padded.contains(Vec2::new(1.4, 0.0)));
        assert!(!padded.contains(Vec2::new(1.45, 1.45)));
        assert_relative_eq!(padded.to_polygon().unsigned_area(), 4.0 + 4.0 + 0.785, epsilon = 0.02);
    }

    #[test]
    fn test_rotate_90_both_directions() {
        let center = Vec2::new(1.0, 1.0);
        let point = Vec2::new(2.0, 1.0);

        assert_eq!(rotate_90(point, center, true), Vec2::new(1.0, 0.0));
        assert_eq!(rotate_90(point, center, false), Vec2::new(1.0, 2.0));
    }
}
