//! Convective heat-transfer correlations for internal pipe flow.

use crate::flow::{FlowRegime, petukhov_friction_factor};

/// Fully developed laminar Nusselt number for constant wall temperature.
pub const LAMINAR_NUSSELT: f64 = 3.66;

const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Nusselt number for flow in a pipe of diameter `diameter` and length `length`.
///
/// - laminar: Hausen entry-length form around `3.66`
/// - transition: Gnielinski with `(Re − 1000)`
/// - turbulent: Gnielinski with `Re`
///
/// Both Gnielinski branches carry the `1 + (D/L)^(2/3)` entrance correction.
pub fn nusselt_number(reynolds: f64, prandtl: f64, diameter: f64, length: f64) -> f64 {
    let d_over_l = diameter / length;
    match FlowRegime::from_reynolds(reynolds) {
        FlowRegime::Laminar => {
            let graetz = d_over_l * reynolds * prandtl;
            LAMINAR_NUSSELT + (0.0668 * graetz) / (1.0 + 0.04 * graetz.powf(TWO_THIRDS))
        }
        FlowRegime::Transition => gnielinski(reynolds - 1000.0, reynolds, prandtl, d_over_l),
        FlowRegime::Turbulent => gnielinski(reynolds, reynolds, prandtl, d_over_l),
    }
}

fn gnielinski(re_term: f64, reynolds: f64, prandtl: f64, d_over_l: f64) -> f64 {
    let f8 = petukhov_friction_factor(reynolds) / 8.0;
    (f8 * re_term * prandtl) / (1.0 + 12.7 * f8.sqrt() * (prandtl.powf(TWO_THIRDS) - 1.0))
        * (1.0 + d_over_l.powf(TWO_THIRDS))
}

/// Convective coefficient `h = Nu·k/D` [W/(m²·K)].
pub fn convective_coefficient(nusselt: f64, conductivity: f64, diameter: f64) -> f64 {
    nusselt * conductivity / diameter
}
