//! Construction-time validation of power transformers.

mod common;

use common::{
    WRONG_HIGH_VOLTAGES, WRONG_IMPEDANCES, WRONG_IRUSH_DELAYS, WRONG_IRUSH_RATIOS,
    WRONG_RATED_POWERS, build, catalog_cases,
};
use grid_shield::ProtectionError;
use grid_shield::config::ProtectionConfig;
use grid_shield::devices::{PowerTransformer, TransformerParams};
use rstest::rstest;

#[test]
fn missing_parameters_are_reported() {
    assert_eq!(
        build(&[]).err(),
        Some(ProtectionError::MissingParameter("ratedPower"))
    );
    assert_eq!(
        build(&[1000.0]).err(),
        Some(ProtectionError::MissingParameter("highVoltageLevel"))
    );
}

#[test]
fn every_catalog_rating_without_voltage_is_missing_a_parameter() {
    for kva in common::RATED_POWERS {
        assert!(
            matches!(build(&[kva]), Err(ProtectionError::MissingParameter(_))),
            "{kva} kVA without voltage"
        );
    }
}

#[test]
fn invalid_rated_power_is_rejected() {
    for (i, case) in catalog_cases().iter().enumerate() {
        let wrong = WRONG_RATED_POWERS[i];
        let calls: [&[f64]; 4] = [
            &[wrong, case.high_voltage_level],
            &[wrong, case.high_voltage_level, case.impedance],
            &[wrong, case.high_voltage_level, case.impedance, case.irush_ratio],
            &[
                wrong,
                case.high_voltage_level,
                case.impedance,
                case.irush_ratio,
                case.irush_delay,
            ],
        ];
        for args in calls {
            assert_eq!(
                build(args).err(),
                Some(ProtectionError::IllegalArgument("ratedPower")),
                "{wrong} kVA"
            );
        }
    }
}

#[test]
fn invalid_voltage_level_is_rejected() {
    for (i, case) in catalog_cases().iter().enumerate() {
        let wrong = WRONG_HIGH_VOLTAGES[i];
        let calls: [&[f64]; 4] = [
            &[case.rated_power, wrong],
            &[case.rated_power, wrong, case.impedance],
            &[case.rated_power, wrong, case.impedance, case.irush_ratio],
            &[
                case.rated_power,
                wrong,
                case.impedance,
                case.irush_ratio,
                case.irush_delay,
            ],
        ];
        for args in calls {
            assert_eq!(
                build(args).err(),
                Some(ProtectionError::IllegalArgument("highVoltageLevel")),
                "{wrong} kV"
            );
        }
    }
}

#[test]
fn invalid_impedance_is_rejected() {
    for (i, case) in catalog_cases().iter().enumerate() {
        let wrong = WRONG_IMPEDANCES[i];
        let base = [case.rated_power, case.high_voltage_level, wrong];
        let calls: [&[f64]; 3] = [
            &base,
            &[base[0], base[1], wrong, case.irush_ratio],
            &[base[0], base[1], wrong, case.irush_ratio, case.irush_delay],
        ];
        for args in calls {
            assert_eq!(
                build(args).err(),
                Some(ProtectionError::IllegalArgument("impedance")),
                "{wrong} Z%"
            );
        }
    }
}

#[test]
fn invalid_irush_ratio_is_rejected() {
    for (i, case) in catalog_cases().iter().enumerate() {
        let wrong = WRONG_IRUSH_RATIOS[i];
        let calls: [&[f64]; 2] = [
            &[case.rated_power, case.high_voltage_level, case.impedance, wrong],
            &[
                case.rated_power,
                case.high_voltage_level,
                case.impedance,
                wrong,
                case.irush_delay,
            ],
        ];
        for args in calls {
            assert_eq!(
                build(args).err(),
                Some(ProtectionError::IllegalArgument("irushRatio")),
                "{wrong} x In"
            );
        }
    }
}

#[test]
fn invalid_irush_delay_is_rejected() {
    for (i, case) in catalog_cases().iter().enumerate() {
        let wrong = WRONG_IRUSH_DELAYS[i];
        let args = [
            case.rated_power,
            case.high_voltage_level,
            case.impedance,
            case.irush_ratio,
            wrong,
        ];
        assert_eq!(
            build(&args).err(),
            Some(ProtectionError::IllegalArgument("irushDelay")),
            "{wrong} s"
        );
    }
}

#[rstest]
#[case::impedance_low(&[150.0, 13.8, 1.0], true)]
#[case::impedance_high(&[150.0, 13.8, 7.0], true)]
#[case::impedance_below(&[150.0, 13.8, 0.99], false)]
#[case::impedance_above(&[150.0, 13.8, 7.01], false)]
#[case::irush_ratio_low(&[150.0, 13.8, 5.0, 5.0], true)]
#[case::irush_ratio_high(&[150.0, 13.8, 5.0, 20.0], true)]
#[case::irush_ratio_below(&[150.0, 13.8, 5.0, 4.99], false)]
#[case::irush_ratio_above(&[150.0, 13.8, 5.0, 20.01], false)]
#[case::irush_delay_low(&[150.0, 13.8, 5.0, 8.0, 0.1], true)]
#[case::irush_delay_high(&[150.0, 13.8, 5.0, 8.0, 1.0], true)]
#[case::irush_delay_below(&[150.0, 13.8, 5.0, 8.0, 0.09], false)]
#[case::irush_delay_above(&[150.0, 13.8, 5.0, 8.0, 1.01], false)]
fn range_bounds_are_inclusive(#[case] args: &[f64], #[case] valid: bool) {
    assert_eq!(build(args).is_ok(), valid, "{args:?}");
}

#[rstest]
#[case(f64::NAN, "ratedPower")]
#[case(0.0, "ratedPower")]
fn falsy_rated_power_is_missing(#[case] rated_power: f64, #[case] parameter: &'static str) {
    assert_eq!(
        build(&[rated_power, 13.8]).err(),
        Some(ProtectionError::MissingParameter(parameter))
    );
}

#[test]
fn configured_catalog_drives_validation() {
    let validator = ProtectionConfig::compact().validator();
    let params = TransformerParams::new()
        .rated_power(500.0)
        .high_voltage_level(13.8);

    assert!(PowerTransformer::try_from_params(&params).is_ok());
    assert_eq!(
        PowerTransformer::with_validator(&params, &validator).err(),
        Some(ProtectionError::IllegalArgument("ratedPower"))
    );
}

#[test]
fn configured_defaults_fill_unset_parameters() {
    let cfg = ProtectionConfig::from_toml_str(
        r#"
[defaults]
impedance = 4.0
irush_ratio = 10.0
"#,
    )
    .expect("valid config");
    let params = TransformerParams::new()
        .rated_power(150.0)
        .high_voltage_level(13.8);
    let tr = PowerTransformer::with_validator(&params, &cfg.validator()).expect("valid");
    assert_eq!(tr.impedance(), 4.0);
    assert_eq!(tr.irush_ratio(), 10.0);
    assert_eq!(tr.irush_delay(), 0.1);
}

#[test]
fn error_messages_identify_the_field() {
    let err = build(&[150.0, 13.8, 9.0]).expect_err("impedance out of range");
    assert_eq!(err.to_string(), "impedance is not valid.");
    let err = build(&[]).expect_err("nothing supplied");
    assert_eq!(err.to_string(), "ratedPower is missing.");
}
