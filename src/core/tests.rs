use super::*;
use glam::Vec3;

// ── ControlPoints ──

#[test]
fn test_control_points_rejects_single_point() {
    let err = ControlPoints::new(vec![Vec3::ZERO]).unwrap_err();
    assert_eq!(err, KernelError::InvalidControlPoints { count: 1 });
}

#[test]
fn test_control_points_rejects_eleven_points() {
    let points = vec![Vec3::ONE; 11];
    assert!(matches!(
        ControlPoints::new(points),
        Err(KernelError::InvalidControlPoints { count: 11 })
    ));
}

#[test]
fn test_control_points_accepts_bounds() {
    assert!(ControlPoints::new(vec![Vec3::ZERO, Vec3::X]).is_ok());
    assert!(ControlPoints::new(vec![Vec3::ZERO; MAX_CONTROL_POINTS]).is_ok());
}

#[test]
fn test_line_clamps_count() {
    // 11 → 10, 1 → 2
    let many = ControlPoints::line(Vec3::ZERO, Vec3::new(9.0, 0.0, 0.0), 11);
    assert_eq!(many.len(), 10);
    assert!(many.as_slice()[1].abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5));

    let few = ControlPoints::line(Vec3::ZERO, Vec3::X, 1);
    assert_eq!(few.len(), 2);
    assert_eq!(few.degree(), 1);
}

#[test]
fn test_resized_clamps_and_keeps_endpoints() {
    let points = ControlPoints::new(vec![
        Vec3::ZERO,
        Vec3::new(3.0, 0.0, 6.0),
        Vec3::new(7.0, 0.0, 6.0),
        Vec3::new(10.0, 0.0, 0.0),
    ])
    .unwrap();

    let grown = points.resized(11);
    assert_eq!(grown.len(), 10);
    assert_eq!(grown.first(), points.first());
    assert_eq!(grown.last(), points.last());

    let shrunk = points.resized(1);
    assert_eq!(shrunk.len(), 2);
    assert_eq!(shrunk.as_slice(), &[points.first(), points.last()]);
}

#[test]
fn test_insert_and_remove_respect_limits() {
    let mut points = ControlPoints::line(Vec3::ZERO, Vec3::X, 2);
    assert!(points.remove(0).is_err(), "unter 2 Punkte darf nicht entfernt werden");

    points.insert(1, Vec3::new(0.5, 1.0, 0.0)).unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points.as_slice()[1], Vec3::new(0.5, 1.0, 0.0));

    assert_eq!(points.remove(7).unwrap(), None);
    assert_eq!(points.remove(1).unwrap(), Some(Vec3::new(0.5, 1.0, 0.0)));

    let mut full = ControlPoints::line(Vec3::ZERO, Vec3::X, 10);
    assert!(full.insert(0, Vec3::Y).is_err());
    assert_eq!(full.len(), 10);
}

#[test]
fn test_set_ignores_invalid_index() {
    let mut points = ControlPoints::line(Vec3::ZERO, Vec3::X, 3);
    assert!(points.set(2, Vec3::Y));
    assert_eq!(points.last(), Vec3::Y);
    assert!(!points.set(3, Vec3::Z));
}

// ── SamplePlan ──

#[test]
fn test_distance_plan_count_formula() {
    let (count, spacing) = SamplePlan::Distance(2.0).resolve(9.0).unwrap();
    assert_eq!(count, 5);
    assert_eq!(spacing, 2.0);

    // Abstand größer als Kurve → trotzdem Start + Ende
    let (count, _) = SamplePlan::Distance(50.0).resolve(9.0).unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_distance_plan_rejects_non_positive_spacing() {
    for spacing in [0.0, -1.0, f32::NAN] {
        assert!(matches!(
            SamplePlan::Distance(spacing).resolve(10.0),
            Err(KernelError::InvalidSamplingParameter { name: "spacing", .. })
        ));
    }
}

#[test]
fn test_count_plan_clamps_to_two() {
    let (count, spacing) = SamplePlan::Count(0).resolve(10.0).unwrap();
    assert_eq!(count, 2);
    assert_eq!(spacing, 10.0);
}

#[test]
fn test_count_plan_last_distance_is_total() {
    let distances = SamplePlan::Count(7).distances(13.7).unwrap();
    assert_eq!(distances.len(), 7);
    assert_eq!(distances[0], 0.0);
    assert_eq!(*distances.last().unwrap(), 13.7);
}

#[test]
fn test_distance_plan_tiny_spacing_is_rejected() {
    for spacing in [1e-20, 1e-6] {
        assert!(matches!(
            SamplePlan::Distance(spacing).resolve(10.0),
            Err(KernelError::InvalidSamplingParameter { name: "spacing", .. })
        ));
    }
}

#[test]
fn test_distance_plan_at_sample_ceiling() {
    // 999 999 Intervalle → genau MAX_SAMPLE_COUNT Samples
    let (count, _) = SamplePlan::Distance(1.0).resolve(999_999.0).unwrap();
    assert_eq!(count, MAX_SAMPLE_COUNT);
    assert!(SamplePlan::Distance(1.0).resolve(1_000_000.0).is_err());
}
