use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N3, P1, Z0},
};

/// Convective heat-transfer coefficient, W/m²·K in SI.
///
/// The raw [`value`](uom::si::Quantity::value) of this quantity is expressed
/// in the SI coherent unit, W/m²·K.
pub type HeatTransferCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, ThermalConductivity},
        length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn conductivity_over_length_is_a_coefficient() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(0.026);
        let diameter = Length::new::<meter>(0.05);

        let h: HeatTransferCoefficient = k / diameter;

        assert_relative_eq!(h.value, 0.52, max_relative = 1e-12);
    }
}
