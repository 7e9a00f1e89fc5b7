//! Evaluation report for one cycle.
//!
//! Takes the flux reading and the estimate and produces the framed text
//! shown to the user, with both metrics at two decimals and a live/fallback
//! notice.

use radrisk_core::display::{format_2dp, format_sci};
use radrisk_core::{Estimate, FluxReading, FluxSource};
use std::time::Duration;

/// Inner width of the report frame, in columns.
const FRAME_WIDTH: usize = 62;

pub const FALLBACK_NOTICE: &str =
    "Unable to fetch live data. Using default flux: 100 p/cm²/s/sr";

pub const MODEL_CAPTION: &str =
    "ICRP model: 5% risk increase per 1 Sv of exposure. Not for clinical use.";

/// Everything one evaluation cycle hands to the presentation layer.
#[derive(Debug, Clone)]
pub struct Report {
    pub reading: FluxReading,
    pub estimate: Estimate,
    pub fetch_time: Duration,
}

impl Report {
    pub fn build(reading: FluxReading, estimate: Estimate, fetch_time: Duration) -> Self {
        Report {
            reading,
            estimate,
            fetch_time,
        }
    }

    /// Total dose in mSv, two decimals.
    pub fn dose_display(&self) -> String {
        format_2dp(self.estimate.dose.msv())
    }

    /// Cancer risk in percent, two decimals.
    pub fn risk_display(&self) -> String {
        format_2dp(self.estimate.risk.percent())
    }

    /// Success or warning line describing where the flux came from.
    pub fn flux_notice(&self) -> String {
        match self.reading.source {
            FluxSource::Live => format!(
                "Live Proton Flux (≥10 MeV): {} protons/cm²/s/sr",
                format_sci(self.reading.flux.value())
            ),
            FluxSource::Fallback => FALLBACK_NOTICE.to_string(),
        }
    }

    /// Render the report as a framed block of text.
    pub fn render(&self) -> String {
        let e = &self.estimate;
        let rule = "═".repeat(FRAME_WIDTH);
        let mut out = String::new();

        out.push('\n');
        out.push_str(&format!("╔{rule}╗\n"));
        out.push_str(&format!(
            "║{:^width$}║\n",
            "MISSION RADIATION RISK ESTIMATE",
            width = FRAME_WIDTH
        ));
        out.push_str(&format!("╠{rule}╣\n"));
        out.push_str(&row("Proton flux (p/cm2/s/sr):", &format_sci(e.flux.value())));
        out.push_str(&row(
            "Flux source:",
            match self.reading.source {
                FluxSource::Live => "LIVE",
                FluxSource::Fallback => "FALLBACK",
            },
        ));
        out.push_str(&row("Fetch time:", &format!("{:?}", self.fetch_time)));
        out.push_str(&row("Mission duration (days):", &e.days.days().to_string()));
        out.push_str(&row(
            "Shielding:",
            &format!("{} (x{:.2})", e.material, e.material.shield_factor()),
        ));
        out.push_str(&row("Daily dose (mSv):", &format!("{:.4}", e.daily_dose_msv)));
        out.push_str(&format!("╠{rule}╣\n"));
        out.push_str(&row("Estimated total dose (mSv):", &self.dose_display()));
        out.push_str(&row(
            "Estimated cancer risk:",
            &format!("{} %", self.risk_display()),
        ));
        out.push_str(&format!("╠{rule}╣\n"));

        // Free-form lines: no right border, they may exceed the frame.
        out.push_str(&format!("║  {}\n", self.flux_notice()));
        out.push_str(&format!("║  {MODEL_CAPTION}\n"));
        out.push_str(&format!("╚{rule}╝\n"));
        out
    }
}

/// One `label ... value` line inside the frame.
fn row(label: &str, value: &str) -> String {
    let value_width = FRAME_WIDTH - 3 - label.chars().count();
    format!("║  {label}{value:>value_width$} ║\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dose::evaluate;
    use radrisk_core::{MissionDuration, ProtonFlux, ShieldingMaterial};

    fn report(flux: f64, days: u16, material: ShieldingMaterial, live: bool) -> Report {
        let flux = ProtonFlux::new(flux).unwrap();
        let reading = if live {
            FluxReading::live(flux)
        } else {
            FluxReading::fallback()
        };
        let estimate = evaluate(reading.flux, MissionDuration::new(days).unwrap(), material);
        Report::build(reading, estimate, Duration::from_millis(120))
    }

    #[test]
    fn renders_both_metrics_to_two_decimals() {
        let r = report(5000.0, 1000, ShieldingMaterial::Polyethylene, true);
        assert_eq!(r.dose_display(), "125.00");
        assert_eq!(r.risk_display(), "0.63");

        let text = r.render();
        assert!(text.contains("125.00"));
        assert!(text.contains("0.63 %"));
        assert!(text.contains("Polyethylene (x0.50)"));
        assert!(text.contains("LIVE"));
        assert!(text.contains(MODEL_CAPTION));
    }

    #[test]
    fn live_notice_shows_flux_in_scientific_notation() {
        let r = report(1000.0, 365, ShieldingMaterial::Aluminum, true);
        assert_eq!(
            r.flux_notice(),
            "Live Proton Flux (≥10 MeV): 1.00e+03 protons/cm²/s/sr"
        );
    }

    #[test]
    fn fallback_notice_is_a_warning() {
        let r = report(100.0, 180, ShieldingMaterial::None, false);
        assert_eq!(r.flux_notice(), FALLBACK_NOTICE);

        let text = r.render();
        assert!(text.contains("FALLBACK"));
        assert!(text.contains(FALLBACK_NOTICE));
        assert!(text.contains("0.90"));
        assert!(text.contains("0.00 %"));
    }

    #[test]
    fn framed_rows_share_a_width() {
        let text = report(100.0, 180, ShieldingMaterial::None, true).render();
        let framed: Vec<usize> = text
            .lines()
            .filter(|l| l.ends_with('║') || l.ends_with('╗') || l.ends_with('╣'))
            .map(|l| l.chars().count())
            .collect();
        assert!(!framed.is_empty());
        assert!(framed.iter().all(|&w| w == FRAME_WIDTH + 2), "{framed:?}");
    }
}
