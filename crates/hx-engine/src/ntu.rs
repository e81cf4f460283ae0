//! Effectiveness–NTU relations.

use crate::input::ExchangerType;
use std::f64::consts::PI;

/// Capacity ratio used by the single-stream model.
///
/// Only one stream is described by the input, so both capacity rates are
/// taken equal. The `Cr < 1` branches of [`effectiveness`] are unreachable
/// from [`simulate`](crate::simulate).
pub const CAPACITY_RATIO: f64 = 1.0;

/// Heat-capacity rate `Ċ = ρ·Q·c_p` [W/K].
pub fn capacity_rate(density: f64, flow_rate: f64, specific_heat: f64) -> f64 {
    density * flow_rate * specific_heat
}

/// Inner surface of the pipe `π·D·L` [m²].
pub fn transfer_surface_area(diameter: f64, length: f64) -> f64 {
    PI * diameter * length
}

/// Number of transfer units `h·A_s / Ċ`.
pub fn number_of_transfer_units(h: f64, surface_area: f64, capacity_rate: f64) -> f64 {
    h * surface_area / capacity_rate
}

/// Effectiveness of an exchanger arrangement for a given NTU and capacity
/// ratio `cr` in `[0, 1]`.
///
/// `cr = 0` (one stream with unbounded capacity) reduces every arrangement to
/// `1 − e^(−NTU)`.
pub fn effectiveness(kind: ExchangerType, ntu: f64, cr: f64) -> f64 {
    if cr == 0.0 {
        return 1.0 - (-ntu).exp();
    }

    match kind {
        ExchangerType::Counter => {
            if cr < 1.0 {
                let decay = (-ntu * (1.0 - cr)).exp();
                (1.0 - decay) / (1.0 - cr * decay)
            } else {
                ntu / (1.0 + ntu)
            }
        }
        ExchangerType::Parallel => (1.0 - (-ntu * (1.0 + cr)).exp()) / (1.0 + cr),
        ExchangerType::Cross => {
            if cr < 1.0 {
                1.0 - ((1.0 / cr) * ntu.powf(0.22) * ((-cr * ntu.powf(0.78)).exp() - 1.0)).exp()
            } else {
                1.0 - (-(1.0 - (-cr * ntu.powf(0.78)).exp())).exp()
            }
        }
    }
}
