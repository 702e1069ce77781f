use milanko_core::params::{Albedo, ChartKind, CycleMode, Latitude, ParameterSet, Scenario};
use milanko_core::resource::{display_name, image_filename, image_url, stats_filename, stats_url};

fn varied() -> ParameterSet {
    ParameterSet {
        scenario: Scenario::Aqua,
        albedo: Albedo::High,
        obliquity: CycleMode::Variable,
        eccentricity: CycleMode::Constant,
        precession: CycleMode::Variable,
        latitude: Latitude::Deg50,
        chart: ChartKind::Variation,
    }
}

// ---------------------------------------------------------------------------
// Exact encodings
// ---------------------------------------------------------------------------

#[test]
fn test_image_filename_defaults() {
    let p = ParameterSet::default();
    assert_eq!(image_filename(&p), "Temp_lat0_alb0.30_excF_oblF_preF.png");
}

#[test]
fn test_stats_filename_defaults() {
    let p = ParameterSet::default();
    assert_eq!(stats_filename(&p), "base_lat0_alb0.30_excF_oblF_preF.csv");
}

#[test]
fn test_filenames_with_varied_parameters() {
    let p = varied();
    assert_eq!(
        image_filename(&p),
        "Var_temp_lat50_alb0.33_excF_oblV_preV.png"
    );
    assert_eq!(stats_filename(&p), "aqua_lat50_alb0.33_excF_oblV_preV.csv");
}

// ---------------------------------------------------------------------------
// Determinism and shared field order
// ---------------------------------------------------------------------------

#[test]
fn test_builder_is_deterministic() {
    let p = varied();
    assert_eq!(image_filename(&p), image_filename(&p));
    assert_eq!(stats_filename(&p), stats_filename(&p));
}

#[test]
fn test_image_and_stats_share_one_suffix() {
    let p = varied();
    let image = image_filename(&p);
    let stats = stats_filename(&p);
    let image_suffix = image
        .strip_prefix("Var_temp_")
        .and_then(|s| s.strip_suffix(".png"))
        .unwrap();
    let stats_suffix = stats
        .strip_prefix("aqua_")
        .and_then(|s| s.strip_suffix(".csv"))
        .unwrap();
    assert_eq!(image_suffix, stats_suffix);
}

#[test]
fn test_each_field_changes_the_name() {
    let base = image_filename(&ParameterSet::default());
    let mut p = ParameterSet::default();
    p.latitude = Latitude::Deg90;
    assert_ne!(image_filename(&p), base);
    let mut p = ParameterSet::default();
    p.albedo = Albedo::High;
    assert_ne!(image_filename(&p), base);
    let mut p = ParameterSet::default();
    p.eccentricity = CycleMode::Variable;
    assert_ne!(image_filename(&p), base);
    let mut p = ParameterSet::default();
    p.obliquity = CycleMode::Variable;
    assert_ne!(image_filename(&p), base);
    let mut p = ParameterSet::default();
    p.precession = CycleMode::Variable;
    assert_ne!(image_filename(&p), base);
}

#[test]
fn test_eccentricity_and_obliquity_are_not_interchangeable() {
    let mut ecc_only = ParameterSet::default();
    ecc_only.eccentricity = CycleMode::Variable;
    let mut obl_only = ParameterSet::default();
    obl_only.obliquity = CycleMode::Variable;
    assert_ne!(image_filename(&ecc_only), image_filename(&obl_only));
    assert_eq!(
        image_filename(&ecc_only),
        "Temp_lat0_alb0.30_excV_oblF_preF.png"
    );
    assert_eq!(
        image_filename(&obl_only),
        "Temp_lat0_alb0.30_excF_oblV_preF.png"
    );
}

// ---------------------------------------------------------------------------
// URL assembly
// ---------------------------------------------------------------------------

#[test]
fn test_url_joins_base_and_filename() {
    let p = ParameterSet::default();
    assert_eq!(
        image_url("https://example.test/data", &p),
        "https://example.test/data/Temp_lat0_alb0.30_excF_oblF_preF.png"
    );
    assert_eq!(
        stats_url("https://example.test/data", &p),
        "https://example.test/data/base_lat0_alb0.30_excF_oblF_preF.csv"
    );
}

#[test]
fn test_url_tolerates_trailing_slash() {
    let p = ParameterSet::default();
    assert_eq!(
        image_url("https://example.test/data/", &p),
        image_url("https://example.test/data", &p)
    );
}

#[test]
fn test_display_name_is_last_component() {
    assert_eq!(
        display_name("https://example.test/data/Temp_lat0.png"),
        "Temp_lat0.png"
    );
    assert_eq!(display_name("bare-name.png"), "bare-name.png");
}
