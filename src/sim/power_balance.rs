//! Grid power balance computation.

/// Computes net power from the per-tick device outputs.
///
/// Supply is solar plus generator plus any battery discharge; load is city
/// demand plus any battery charge. `battery_flow_kw` follows the battery
/// convention (positive = discharging into the grid, negative = charging
/// from it), so it is split here rather than summed blindly.
///
/// # Arguments
///
/// * `solar_kw` - Solar output (>= 0)
/// * `generator_kw` - Generator output (>= 0)
/// * `battery_flow_kw` - Battery flow (positive = supply, negative = load)
/// * `demand_kw` - City demand (>= 0)
///
/// # Returns
///
/// Net power in kW (positive = surplus, negative = deficit)
pub fn net_power_kw(solar_kw: f64, generator_kw: f64, battery_flow_kw: f64, demand_kw: f64) -> f64 {
    let supply = solar_kw + generator_kw + battery_flow_kw.max(0.0);
    let load = demand_kw + (-battery_flow_kw).max(0.0);
    supply - load
}
