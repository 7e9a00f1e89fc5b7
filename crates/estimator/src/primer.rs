//! Background reading shown before the calculator.

/// NOAA SWPC solar cycle progression chart.
pub const SOLAR_CYCLE_IMAGE_URL: &str =
    "https://services.swpc.noaa.gov/json/solar-cycle/cycle_update.png";

const TITLE: &str = "Cosmic Radiation Origin and Risks";

const BODY: &str = "\
Cosmic radiation is a form of high-energy radiation that originates from
outside Earth's atmosphere. There are two main types relevant to space
missions:

  - Galactic Cosmic Rays (GCRs): constant background radiation from deep space.
  - Solar Energetic Particles (SEPs): burst-like radiation from solar flares
    and coronal mass ejections.

These can cause:

  - Cellular damage
  - Increased cancer risk
  - Radiation sickness on long missions

The solar cycle affects the intensity of this radiation.";

const CALCULATOR_BLURB: &str = "\
The `estimate` command computes the radiation dose and cancer risk for a
space mission from the real-time solar particle flux and the selected
shielding.";

/// The full primer as plain text.
pub fn render() -> String {
    let underline = "=".repeat(TITLE.len());
    format!(
        "{TITLE}\n{underline}\n\n{BODY}\n\nNOAA Solar Cycle Status: {SOLAR_CYCLE_IMAGE_URL}\n\n{CALCULATOR_BLURB}\n"
    )
}
