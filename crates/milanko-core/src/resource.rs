//! Canonical resource names for the remote dataset.
//!
//! Image and statistics files share one parameter encoding and one field
//! order, produced by a single suffix builder. Transposing fields would
//! silently point at files that do not exist on the host, so nothing else
//! in the crate is allowed to assemble these names by hand.

use crate::params::ParameterSet;

/// Shared `lat.._alb.._exc.._obl.._pre..` suffix of every resource name.
fn param_suffix(params: &ParameterSet) -> String {
    format!(
        "lat{}_alb{}_exc{}_obl{}_pre{}",
        params.latitude.degrees(),
        params.albedo.as_str(),
        params.eccentricity.flag(),
        params.obliquity.flag(),
        params.precession.flag(),
    )
}

/// File name of the chart image for `params`.
pub fn image_filename(params: &ParameterSet) -> String {
    format!("{}_{}.png", params.chart.as_str(), param_suffix(params))
}

/// File name of the per-year statistics file for `params`.
pub fn stats_filename(params: &ParameterSet) -> String {
    format!("{}_{}.csv", params.scenario.as_str(), param_suffix(params))
}

/// Absolute URL of the chart image for `params`.
pub fn image_url(base: &str, params: &ParameterSet) -> String {
    format!("{}/{}", base.trim_end_matches('/'), image_filename(params))
}

/// Absolute URL of the statistics file for `params`.
pub fn stats_url(base: &str, params: &ParameterSet) -> String {
    format!("{}/{}", base.trim_end_matches('/'), stats_filename(params))
}

/// Last path component of a resource URL, for user-facing messages.
pub fn display_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
