use super::*;
use nalgebra::vector;

#[test]
fn line_evaluation_and_inverse() {
    let l = Line::new(2.0, 1.0);
    assert_eq!(l.y_at(3.0), 7.0);
    assert_eq!(l.x_at(7.0), Some(3.0));
    assert!(Line::horizontal(4.0).x_at(4.0).is_none());
}

#[test]
fn half_plane_boundary_policy() {
    let l = Line::new(1.0, 0.0);
    // (1, 1) lies on the line.
    assert!(!l.is_above(1.0, 1.0, Boundary::Open));
    assert!(!l.is_below(1.0, 1.0, Boundary::Open));
    assert!(l.is_above(1.0, 1.0, Boundary::Closed));
    assert!(l.is_below(1.0, 1.0, Boundary::Closed));
    // Off the line the policy is irrelevant.
    assert!(l.is_above(1.0, 2.0, Boundary::Open));
    assert!(l.is_below(1.0, 0.5, Boundary::Closed));
    assert!(!l.is_above(1.0, 0.5, Boundary::Closed));
    assert_eq!(Boundary::default(), Boundary::Open);
}

#[test]
fn line_through_points() {
    let l = Line::through(vector![0.0, 1.0], vector![2.0, 5.0]).unwrap();
    assert!((l.slope - 2.0).abs() < 1e-12);
    assert!((l.intercept - 1.0).abs() < 1e-12);
    assert!(Line::through(vector![1.0, 0.0], vector![1.0, 3.0]).is_none());
}

#[test]
fn parallel_lines_do_not_intersect() {
    let a = Line::new(0.5, 0.0);
    let b = Line::new(0.5, 2.0);
    assert!(a.intersection(&b).is_none());
    let p = a.intersection(&Line::new(-0.5, 2.0)).unwrap();
    assert!((p - vector![2.0, 1.0]).norm() < 1e-12);
}

#[test]
fn display_line() {
    assert_eq!(Line::new(-2.0, 1.5).to_string(), "y = -2x + 1.5");
}

#[test]
fn default_triangle_edges() {
    let t = Triangle::default();
    let sqrt3 = 3f64.sqrt();
    assert_eq!(t.side, 3.0);
    assert_eq!(t.base, Line::new(0.0, 0.0));
    assert_eq!(t.left, Line::new(sqrt3, 0.0));
    assert_eq!(t.right, Line::new(-sqrt3, 3.0 * sqrt3));
    assert!((t.area() - 9.0 * sqrt3 / 4.0).abs() < 1e-12);
    assert!((t.height() - 1.5 * sqrt3).abs() < 1e-12);
}

#[test]
fn vertices_from_edge_intersections() {
    let t = Triangle::default();
    let [a, b, c] = t.vertices().expect("edges are pairwise non-parallel");
    assert!((a - vector![0.0, 0.0]).norm() < 1e-12);
    assert!((b - vector![3.0, 0.0]).norm() < 1e-12);
    assert!((c - vector![1.5, 1.5 * 3f64.sqrt()]).norm() < 1e-12);
    // Each pair of vertices is one side apart.
    for (p, q) in [(a, b), (b, c), (c, a)] {
        assert!(((p - q).norm() - 3.0).abs() < 1e-12);
    }
}

#[test]
fn interior_test_excludes_edges() {
    let t = Triangle::default();
    assert!(t.contains(vector![1.5, 1.0], Boundary::Open));
    // On the base.
    assert!(!t.contains(vector![1.5, 0.0], Boundary::Open));
    assert!(t.contains(vector![1.5, 0.0], Boundary::Closed));
    // Outside, above the left edge.
    assert!(!t.contains(vector![0.5, 2.0], Boundary::Closed));
    // Outside, to the right of the right edge.
    assert!(!t.contains(vector![2.9, 1.0], Boundary::Closed));
}

#[test]
fn bounding_box_covers_triangle() {
    let t = Triangle::equilateral(2.0);
    let bb = t.bounding_box();
    assert_eq!(bb.area(), 4.0);
    for v in t.vertices().unwrap() {
        assert!(v.x >= bb.min.x - 1e-12 && v.x <= bb.max.x + 1e-12);
        assert!(v.y >= bb.min.y - 1e-12 && v.y <= bb.max.y + 1e-12);
    }
}

#[test]
fn display_triangle_lists_edges() {
    let s = Triangle::default().to_string();
    assert!(s.starts_with("base: y = 0x + 0"));
    assert!(s.contains("left: "));
    assert!(s.contains("right: "));
}
