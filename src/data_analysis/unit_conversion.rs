// src/data_analysis/unit_conversion.rs

use ndarray::Array1;

use crate::config::Calibration;

/// Converts raw load cell voltage to force in newtons.
pub fn voltage_to_force(load_voltage: &Array1<f64>, calibration: &Calibration) -> Array1<f64> {
    let scale = calibration.newtons_per_volt();
    load_voltage.mapv(|v| v * scale)
}

/// Converts raw potentiometer readings (inches) to displacement in millimetres,
/// relative to the first reading. Index 0 is therefore always zero.
pub fn position_to_displacement(position: &Array1<f64>, calibration: &Calibration) -> Array1<f64> {
    let Some(&start) = position.first() else {
        return Array1::zeros(0);
    };
    let scale = calibration.inches_to_mm * calibration.displacement_sign;
    position.mapv(|p| (p - start) * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_voltage_force() {
        let calibration = Calibration::default();
        let force = voltage_to_force(&Array1::from_elem(1000, 0.1), &calibration);
        let expected = 0.1 * 86.289 * 4.44822 * -1.0;
        assert!(force.iter().all(|&f| (f - expected).abs() < 1e-9));
    }

    #[test]
    fn test_displacement_is_self_relative() {
        let calibration = Calibration::default();
        let position = Array1::linspace(0.0, 1.0, 1000);
        let displacement = position_to_displacement(&position, &calibration);

        assert_eq!(displacement.len(), 1000);
        assert_eq!(displacement[0], 0.0);
        assert!((displacement[999] - (1.0 - 0.0) * 25.4 * -1.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_start_position() {
        let calibration = Calibration::default();
        let position = Array1::from(vec![2.5, 2.4, 2.0]);
        let displacement = position_to_displacement(&position, &calibration);
        assert_eq!(displacement[0], 0.0);
        assert!((displacement[2] - 12.7).abs() < 1e-9);
    }

    #[test]
    fn test_empty_position() {
        let displacement = position_to_displacement(&Array1::zeros(0), &Calibration::default());
        assert!(displacement.is_empty());
    }
}
