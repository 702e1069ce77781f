//! Static locale tables. Every user-visible string lives here; panels
//! resolve the table once per frame and never concatenate translated
//! fragments.

use std::fmt;

use milanko_core::layout::LayoutMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: &[Self] = &[Self::En, Self::Fr];

    pub fn strings(&self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Fr => &FR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "EN"),
            Self::Fr => write!(f, "FR"),
        }
    }
}

/// One locale's worth of UI text.
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub language: &'static str,
    pub layout: &'static str,
    pub layout_list: &'static str,
    pub layout_horizontal: &'static str,
    pub layout_vertical: &'static str,
    pub layout_grid: &'static str,
    pub scenario: &'static str,
    pub chart_kind: &'static str,
    pub chart_temperature: &'static str,
    pub chart_variation: &'static str,
    pub albedo: &'static str,
    pub obliquity: &'static str,
    pub eccentricity: &'static str,
    pub precession: &'static str,
    pub latitude: &'static str,
    pub constant: &'static str,
    pub variable: &'static str,
    pub year: &'static str,
    pub years: &'static str,
    pub mean: &'static str,
    pub max: &'static str,
    pub min: &'static str,
    pub loading: &'static str,
    pub data_unavailable: &'static str,
    pub temperature_range: &'static str,
    pub amplitude: &'static str,
    pub add_to_comparison: &'static str,
    pub images_in_comparison: &'static str,
    pub image_added: &'static str,
    pub image_removed: &'static str,
    pub empty_viewer: &'static str,
    pub image_not_found: &'static str,
    pub remove: &'static str,
    pub about: &'static str,
}

impl Strings {
    pub fn layout_label(&self, mode: LayoutMode) -> &'static str {
        match mode {
            LayoutMode::List => self.layout_list,
            LayoutMode::Horizontal => self.layout_horizontal,
            LayoutMode::Vertical => self.layout_vertical,
            LayoutMode::Grid => self.layout_grid,
        }
    }
}

static EN: Strings = Strings {
    title: "Temperature Curves",
    subtitle: "Configure parameters and compare climate data visualizations",
    language: "Language",
    layout: "Layout",
    layout_list: "List",
    layout_horizontal: "Horizontal Split",
    layout_vertical: "Vertical Split",
    layout_grid: "Grid (2×2)",
    scenario: "Scenario",
    chart_kind: "Temperature Type",
    chart_temperature: "Temperature (°C)",
    chart_variation: "Temperature Variation",
    albedo: "Albedo",
    obliquity: "Obliquity",
    eccentricity: "Eccentricity",
    precession: "Precession",
    latitude: "Latitude",
    constant: "Constant",
    variable: "Variable",
    year: "Year",
    years: "years",
    mean: "Mean:",
    max: "Max:",
    min: "Min:",
    loading: "Loading...",
    data_unavailable: "Data unavailable",
    temperature_range: "Temperature Range",
    amplitude: "Amplitude:",
    add_to_comparison: "Add to Comparison",
    images_in_comparison: "image(s) in comparison",
    image_added: "Image added to comparison",
    image_removed: "Image removed from comparison",
    empty_viewer: "Select parameters and click \"Add to Comparison\" to view images",
    image_not_found: "Image not found:",
    remove: "Remove",
    about: "About",
};

static FR: Strings = Strings {
    title: "Courbes de Température",
    subtitle: "Configurez les paramètres et comparez les visualisations de données climatiques",
    language: "Langue",
    layout: "Disposition",
    layout_list: "Liste",
    layout_horizontal: "Division Horizontale",
    layout_vertical: "Division Verticale",
    layout_grid: "Grille (2×2)",
    scenario: "Scénario",
    chart_kind: "Type de température",
    chart_temperature: "Température (°C)",
    chart_variation: "Variation de température",
    albedo: "Albédo",
    obliquity: "Obliquité",
    eccentricity: "Excentricité",
    precession: "Précession",
    latitude: "Latitude",
    constant: "Constante",
    variable: "Variable",
    year: "Année",
    years: "années",
    mean: "Moyenne :",
    max: "Max :",
    min: "Min :",
    loading: "Chargement...",
    data_unavailable: "Données indisponibles",
    temperature_range: "Plage de Température",
    amplitude: "Amplitude :",
    add_to_comparison: "Ajouter à la Comparaison",
    images_in_comparison: "image(s) en comparaison",
    image_added: "Image ajoutée à la comparaison",
    image_removed: "Image retirée de la comparaison",
    empty_viewer: "Sélectionnez des paramètres puis cliquez « Ajouter à la Comparaison » pour afficher les images",
    image_not_found: "Image introuvable :",
    remove: "Retirer",
    about: "À propos",
};
