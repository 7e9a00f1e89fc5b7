//! Linear dose and excess-risk model.
//!
//! `daily = flux × 5e-5 × shield_factor`, `total = daily × days`,
//! `risk% = total / 1000 × 5` (5 % per Sv). Nothing is rounded here.

use radrisk_core::{
    DoseEstimate, Estimate, MissionDuration, ProtonFlux, RiskEstimate, ShieldingMaterial,
};

/// mSv per day per unit of proton flux (p/cm²/s/sr), unshielded.
pub const DOSE_PER_FLUX_DAY: f64 = 0.00005;

pub const MSV_PER_SV: f64 = 1000.0;

/// ICRP linear excess-relative-risk coefficient.
pub const RISK_PERCENT_PER_SV: f64 = 5.0;

/// Total mission dose and cancer-risk percentage.
pub fn estimate(
    flux: ProtonFlux,
    days: MissionDuration,
    material: ShieldingMaterial,
) -> (DoseEstimate, RiskEstimate) {
    let e = evaluate(flux, days, material);
    (e.dose, e.risk)
}

/// Same as [`estimate`], keeping the inputs and the daily dose alongside.
pub fn evaluate(flux: ProtonFlux, days: MissionDuration, material: ShieldingMaterial) -> Estimate {
    let base_dose_per_day = flux.value() * DOSE_PER_FLUX_DAY;
    let daily_dose = base_dose_per_day * material.shield_factor();
    let total_dose = daily_dose * f64::from(days.days());
    let risk_percent = (total_dose / MSV_PER_SV) * RISK_PERCENT_PER_SV;

    Estimate {
        flux,
        days,
        material,
        daily_dose_msv: daily_dose,
        dose: DoseEstimate(total_dose),
        risk: RiskEstimate(risk_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radrisk_core::display::format_2dp;
    use strum::IntoEnumIterator;

    fn flux(v: f64) -> ProtonFlux {
        ProtonFlux::new(v).unwrap()
    }

    fn days(d: u16) -> MissionDuration {
        MissionDuration::new(d).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        let tol = 1e-12 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn short_unshielded_mission_at_fallback_flux() {
        let e = evaluate(flux(100.0), days(180), ShieldingMaterial::None);
        assert_close(e.daily_dose_msv, 0.005);
        assert_close(e.dose.msv(), 0.9);
        assert_close(e.risk.percent(), 0.0045);
        assert_eq!(format_2dp(e.dose.msv()), "0.90");
        assert_eq!(format_2dp(e.risk.percent()), "0.00");
    }

    #[test]
    fn year_long_aluminum_mission() {
        let e = evaluate(flux(1000.0), days(365), ShieldingMaterial::Aluminum);
        assert_close(e.daily_dose_msv, 0.035);
        assert_close(e.dose.msv(), 12.775);
        assert_close(e.risk.percent(), 0.063875);
        assert_eq!(format_2dp(e.dose.msv()), "12.78");
        assert_eq!(format_2dp(e.risk.percent()), "0.06");
    }

    #[test]
    fn max_length_polyethylene_mission() {
        let (dose, risk) = estimate(flux(5000.0), days(1000), ShieldingMaterial::Polyethylene);
        assert_close(dose.msv(), 125.0);
        assert_close(risk.percent(), 0.625);
        assert_eq!(format_2dp(dose.msv()), "125.00");
        assert_eq!(format_2dp(risk.percent()), "0.63");
    }

    #[test]
    fn zero_flux_yields_zero() {
        for m in ShieldingMaterial::iter() {
            let (dose, risk) = estimate(ProtonFlux::ZERO, days(1000), m);
            assert_eq!(dose.msv(), 0.0);
            assert_eq!(risk.percent(), 0.0);
        }
    }

    #[test]
    fn outputs_are_non_negative() {
        for f in [0.0, 0.01, 1.0, 100.0, 1e4, 1e6] {
            for d in [1, 2, 180, 365, 999, 1000] {
                for m in ShieldingMaterial::iter() {
                    let (dose, risk) = estimate(flux(f), days(d), m);
                    assert!(dose.msv() >= 0.0);
                    assert!(risk.percent() >= 0.0);
                }
            }
        }
    }

    #[test]
    fn dose_strictly_increases_with_days() {
        for m in ShieldingMaterial::iter() {
            let mut prev = 0.0;
            for d in 1..=1000 {
                let (dose, _) = estimate(flux(42.0), days(d), m);
                assert!(dose.msv() > prev, "{m} day {d}");
                prev = dose.msv();
            }
        }
    }

    #[test]
    fn better_shielding_lowers_dose() {
        let f = flux(250.0);
        let d = days(300);
        let (none, _) = estimate(f, d, ShieldingMaterial::None);
        let (al, _) = estimate(f, d, ShieldingMaterial::Aluminum);
        let (poly, _) = estimate(f, d, ShieldingMaterial::Polyethylene);
        assert!(poly < al);
        assert!(al < none);
    }

    #[test]
    fn risk_is_dose_over_two_hundred() {
        for f in [0.5, 100.0, 1234.0, 5000.0] {
            for d in [1, 77, 500, 1000] {
                for m in ShieldingMaterial::iter() {
                    let (dose, risk) = estimate(flux(f), days(d), m);
                    assert_close(risk.percent(), dose.msv() / 200.0);
                }
            }
        }
    }
}
