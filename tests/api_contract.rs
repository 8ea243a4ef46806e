#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use polygeom::api;
use polygeom::error::{GeometryError, InputError};
use polygeom::PolygeomError;

const SQUARE_XS: [f64; 4] = [0.0, 1.0, 1.0, 0.0];
const SQUARE_YS: [f64; 4] = [0.0, 0.0, 1.0, 1.0];

const BOWTIE_XS: [f64; 4] = [0.0, 1.0, 1.0, 0.0];
const BOWTIE_YS: [f64; 4] = [0.0, 1.0, 0.0, 1.0];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn reversed(v: &[f64]) -> Vec<f64> {
    v.iter().rev().copied().collect()
}

fn unpack(packed: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let m = packed.len() / 2;
    (packed[..m].to_vec(), packed[m..].to_vec())
}

#[test]
fn unit_square_predicates() {
    assert_relative_eq!(api::signed_area(&SQUARE_XS, &SQUARE_YS).unwrap(), 1.0);
    assert!(api::is_convex(&SQUARE_XS, &SQUARE_YS).unwrap());
    assert!(api::is_simple(&SQUARE_XS, &SQUARE_YS).unwrap());
    assert!(api::is_counterclockwise_oriented(&SQUARE_XS, &SQUARE_YS).unwrap());
    assert!(!api::is_clockwise_oriented(&SQUARE_XS, &SQUARE_YS).unwrap());
}

#[test]
fn reversed_square_predicates() {
    let xs = reversed(&SQUARE_XS);
    let ys = reversed(&SQUARE_YS);
    assert_relative_eq!(api::signed_area(&xs, &ys).unwrap(), -1.0);
    assert!(api::is_clockwise_oriented(&xs, &ys).unwrap());
    assert!(!api::is_counterclockwise_oriented(&xs, &ys).unwrap());
}

#[test]
fn square_point_orientation() {
    assert_eq!(api::orientation(&SQUARE_XS, &SQUARE_YS, [0.5, 0.5]).unwrap(), 1);
    assert_eq!(api::orientation(&SQUARE_XS, &SQUARE_YS, [2.0, 2.0]).unwrap(), -1);
    assert_eq!(api::orientation(&SQUARE_XS, &SQUARE_YS, [0.5, 0.0]).unwrap(), 0);
    assert!(api::contains_point(&SQUARE_XS, &SQUARE_YS, [0.5, 0.5]).unwrap());
    assert!(!api::contains_point(&SQUARE_XS, &SQUARE_YS, [0.5, 0.0]).unwrap());
}

#[test]
fn bowtie_repair_is_simple_and_covers_both_lobes() {
    init_tracing();
    assert!(!api::is_simple(&BOWTIE_XS, &BOWTIE_YS).unwrap());

    let packed = api::make_poly_simple(&BOWTIE_XS, &BOWTIE_YS).unwrap();
    assert_eq!(packed.len() % 2, 0);
    let (xs, ys) = unpack(&packed);
    assert!(api::is_simple(&xs, &ys).unwrap());

    // Points inside either lobe are inside the repaired polygon.
    assert_eq!(api::orientation(&xs, &ys, [0.2, 0.5]).unwrap(), 1);
    assert_eq!(api::orientation(&xs, &ys, [0.8, 0.5]).unwrap(), 1);
}

#[test]
fn repair_of_convex_polygon_keeps_vertices_and_area() {
    let xs = [0.0, 3.0, 4.0, 1.0];
    let ys = [0.0, -1.0, 2.0, 3.0];
    let (rx, ry) = unpack(&api::make_poly_simple(&xs, &ys).unwrap());
    assert_eq!(rx.len(), 4);
    for (x, y) in xs.iter().zip(&ys) {
        assert!(rx.iter().zip(&ry).any(|(a, b)| a == x && b == y));
    }
    assert_relative_eq!(
        api::signed_area(&rx, &ry).unwrap(),
        api::signed_area(&xs, &ys).unwrap()
    );
}

#[test]
fn repair_is_idempotent() {
    let once = api::make_poly_simple(&BOWTIE_XS, &BOWTIE_YS).unwrap();
    let (xs, ys) = unpack(&once);
    let twice = api::make_poly_simple(&xs, &ys).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn collinear_triangle_is_degenerate() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 1.0, 2.0];
    assert_eq!(api::signed_area(&xs, &ys).unwrap(), 0.0);
    assert!(!api::is_simple(&xs, &ys).unwrap());
    assert!(api::is_convex(&xs, &ys).unwrap());
    assert!(!api::is_clockwise_oriented(&xs, &ys).unwrap());
    assert!(!api::is_counterclockwise_oriented(&xs, &ys).unwrap());
}

#[test]
fn malformed_input_is_an_error() {
    let err = api::is_simple(&[0.0, 1.0, 1.0], &[0.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        PolygeomError::Input(InputError::LengthMismatch { xs: 3, ys: 2 })
    ));

    let err = api::signed_area(&[0.0, 1.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        PolygeomError::Input(InputError::TooFewPoints(2))
    ));

    let err = api::orientation(&SQUARE_XS, &SQUARE_YS, [f64::NAN, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        PolygeomError::Input(InputError::NonFiniteQueryPoint { .. })
    ));
}

/// Repairs `xs`/`ys` and checks that the result is simple, covers at least
/// the input's area and has every input vertex inside or on its boundary.
fn assert_repair_encloses(xs: &[f64], ys: &[f64]) {
    let (rx, ry) = unpack(&api::make_poly_simple(xs, ys).unwrap());
    assert!(api::is_simple(&rx, &ry).unwrap(), "not simple: {rx:?} {ry:?}");

    let before = api::signed_area(xs, ys).unwrap().abs();
    let after = api::signed_area(&rx, &ry).unwrap().abs();
    assert!(after >= before, "area shrank from {before} to {after}");

    for (&x, &y) in xs.iter().zip(ys) {
        assert_ne!(api::orientation(&rx, &ry, [x, y]).unwrap(), -1, "({x}, {y}) left out");
    }
}

#[test]
fn repair_encloses_self_touching_and_crossing_shapes() {
    init_tracing();
    // Bowtie.
    assert_repair_encloses(&BOWTIE_XS, &BOWTIE_YS);
    // Two triangles sharing the vertex (0, 0).
    assert_repair_encloses(
        &[0.0, 10.0, 10.0, 0.0, 10.0, 10.0],
        &[0.0, 0.0, 1.0, 0.0, 3.0, 4.0],
    );
    // Figure eight crossing at x = 5/3.
    assert_repair_encloses(&[0.0, 3.0, 3.0, 1.0], &[0.0, 0.0, 2.0, -1.0]);
    // Crossing at (2/3, 1/3).
    assert_repair_encloses(&[0.0, 2.0, 1.0, 0.0], &[0.0, 1.0, 0.0, 1.0]);
    // Square whose closing edge runs back along the bottom edge.
    assert_repair_encloses(
        &[0.0, 2.0, 2.0, 0.0, 0.0, 1.0],
        &[0.0, 0.0, 2.0, 2.0, 0.0, 0.0],
    );
    // Convex quadrilateral.
    assert_repair_encloses(&[0.0, 3.0, 4.0, 1.0], &[0.0, -1.0, 2.0, 3.0]);
}

#[test]
fn repair_drops_zero_area_spike() {
    let xs = [0.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.0];
    let ys = [0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0];
    let (rx, ry) = unpack(&api::make_poly_simple(&xs, &ys).unwrap());
    assert!(api::is_simple(&rx, &ry).unwrap());
    assert_relative_eq!(api::signed_area(&rx, &ry).unwrap(), 1.0);
    assert_eq!(api::orientation(&rx, &ry, [2.0, 0.5]).unwrap(), -1);
}

#[test]
fn repair_of_collinear_points_is_degenerate() {
    let err = api::make_poly_simple(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        PolygeomError::Geometry(GeometryError::DegenerateBoundary(_))
    ));
}

#[test]
fn repair_without_enclosed_region_is_an_error() {
    let err = api::make_poly_simple(&[3.0, 3.0, 3.0], &[1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        PolygeomError::Geometry(GeometryError::NoHole)
    ));
}
