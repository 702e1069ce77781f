use milanko_core::consts::{YEAR_MAX, YEAR_MIN};
use milanko_core::params::{
    snap_year, Albedo, ChartKind, CycleMode, Latitude, ParameterSet, Scenario,
};

// ---------------------------------------------------------------------------
// Enum encodings
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_encoding() {
    assert_eq!(Scenario::Base.as_str(), "base");
    assert_eq!(Scenario::Aqua.as_str(), "aqua");
    assert_eq!(Scenario::Dry.as_str(), "dry");
}

#[test]
fn test_albedo_encoding() {
    assert_eq!(Albedo::Low.as_str(), "0.30");
    assert_eq!(Albedo::High.as_str(), "0.33");
}

#[test]
fn test_cycle_mode_flags() {
    assert_eq!(CycleMode::Constant.flag(), 'F');
    assert_eq!(CycleMode::Variable.flag(), 'V');
}

#[test]
fn test_latitude_degrees() {
    assert_eq!(Latitude::Deg0.degrees(), 0);
    assert_eq!(Latitude::Deg50.degrees(), 50);
    assert_eq!(Latitude::Deg90.degrees(), 90);
}

#[test]
fn test_chart_kind_encoding() {
    assert_eq!(ChartKind::Temperature.as_str(), "Temp");
    assert_eq!(ChartKind::Variation.as_str(), "Var_temp");
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_display_labels() {
    assert_eq!(format!("{}", Scenario::Base), "Base");
    assert_eq!(format!("{}", Albedo::Low), "0.30");
    assert_eq!(format!("{}", CycleMode::Constant), "Constant");
    assert_eq!(format!("{}", CycleMode::Variable), "Variable");
    assert_eq!(format!("{}", Latitude::Deg50), "50°");
    assert_eq!(format!("{}", ChartKind::Variation), "Variation");
}

// ---------------------------------------------------------------------------
// Choice lists
// ---------------------------------------------------------------------------

#[test]
fn test_all_lists_are_complete() {
    assert_eq!(Scenario::ALL.len(), 3);
    assert_eq!(Albedo::ALL.len(), 2);
    assert_eq!(CycleMode::ALL.len(), 2);
    assert_eq!(Latitude::ALL.len(), 3);
    assert_eq!(ChartKind::ALL.len(), 2);
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_parameter_set_defaults() {
    let p = ParameterSet::default();
    assert_eq!(p.scenario, Scenario::Base);
    assert_eq!(p.albedo, Albedo::Low);
    assert_eq!(p.obliquity, CycleMode::Constant);
    assert_eq!(p.eccentricity, CycleMode::Constant);
    assert_eq!(p.precession, CycleMode::Constant);
    assert_eq!(p.latitude, Latitude::Deg0);
    assert_eq!(p.chart, ChartKind::Temperature);
}

// ---------------------------------------------------------------------------
// Year snapping
// ---------------------------------------------------------------------------

#[test]
fn test_snap_year_accepts_grid_values() {
    assert_eq!(snap_year(100), Some(100));
    assert_eq!(snap_year(10_000), Some(10_000));
    assert_eq!(snap_year(200_000), Some(200_000));
}

#[test]
fn test_snap_year_rounds_to_nearest_step() {
    assert_eq!(snap_year(149), Some(100));
    assert_eq!(snap_year(150), Some(200));
    assert_eq!(snap_year(12_349), Some(12_300));
    assert_eq!(snap_year(199_951), Some(200_000));
}

#[test]
fn test_snap_year_rejects_out_of_range() {
    assert_eq!(snap_year(0), None);
    assert_eq!(snap_year(99), None);
    assert_eq!(snap_year(-100), None);
    assert_eq!(snap_year(200_001), None);
    assert_eq!(snap_year(i64::MAX), None);
}

#[test]
fn test_snap_year_bounds_match_consts() {
    assert_eq!(snap_year(i64::from(YEAR_MIN)), Some(YEAR_MIN));
    assert_eq!(snap_year(i64::from(YEAR_MAX)), Some(YEAR_MAX));
    assert_eq!(snap_year(i64::from(YEAR_MIN) - 1), None);
    assert_eq!(snap_year(i64::from(YEAR_MAX) + 1), None);
}
