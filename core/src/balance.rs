//! Cross-segment consistency checks: does the outflow carry what the donor and
//! acceptor deliver, and are the two inflow pressures matched.

use serde::Serialize;
use tracing::warn;

/// Reported flow balance error when the outflow carries nothing.
pub const MAX_IMBALANCE_PCT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceChecks {
    pub flow_balance_error_pct: f64,
    pub pressure_diff_mmhg: f64,
}

impl BalanceChecks {
    pub fn new(
        donor_flow_m3_s: f64,
        acceptor_flow_m3_s: f64,
        outflow_flow_m3_s: f64,
        donor_pressure_mmhg: f64,
        acceptor_pressure_mmhg: f64,
    ) -> Self {
        Self {
            flow_balance_error_pct: flow_balance_error(
                donor_flow_m3_s,
                acceptor_flow_m3_s,
                outflow_flow_m3_s,
            ),
            pressure_diff_mmhg: pressure_difference(donor_pressure_mmhg, acceptor_pressure_mmhg),
        }
    }
}

/// `|Q_donor + Q_acceptor − Q_outflow| / Q_outflow · 100`.
///
/// An outflow of zero is treated as maximal imbalance and reported as
/// [`MAX_IMBALANCE_PCT`].
pub fn flow_balance_error(donor: f64, acceptor: f64, outflow: f64) -> f64 {
    if outflow > 0.0 {
        ((donor + acceptor) - outflow).abs() / outflow * 100.0
    } else {
        warn!("outflow carries no volume, flow balance reported as maximal");
        MAX_IMBALANCE_PCT
    }
}

/// Unsigned donor/acceptor pressure difference, mmHg.
pub fn pressure_difference(donor_mmhg: f64, acceptor_mmhg: f64) -> f64 {
    (donor_mmhg - acceptor_mmhg).abs()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
