//! Raw field parsing — the boundary between text input and the typed core
//!
//! The classifier only ever sees validated floats. This module owns the
//! three concerns that sit upstream of it:
//! - rejecting non-numeric text with a typed error instead of letting NaN
//!   leak into threshold comparisons
//! - substituting the documented defaults for absent score-mode fields
//! - choosing the scoring mode, expressed as the tagged `WellInputs`
//!   variant rather than a runtime field-presence check

use crate::config::InputDefaults;
use crate::types::{AdvancedInputs, BasicInputs, InputError, ScoreInputs, WellInputs};

/// Flow rate substituted when the score-mode field is left blank (bbl/day).
pub const DEFAULT_FLOW_RATE_BBL_DAY: f64 = 750.0;

/// Sand concentration substituted when the score-mode field is left blank (ppm).
pub const DEFAULT_SAND_CONCENTRATION_PPM: f64 = 250.0;

/// Parse a required numeric field.
///
/// Empty text is `MissingField`, unparseable text is `NotNumeric`, and text
/// that parses to a non-finite float (`"NaN"`, `"inf"`) is `NotFinite` —
/// `str::parse::<f64>` accepts those spellings, so the finiteness check
/// cannot be skipped here.
pub fn parse_required(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField { field });
    }
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotNumeric {
        field,
        raw: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    Ok(value)
}

/// Parse an optional numeric field, substituting `default` when blank.
///
/// Only truly absent input takes the default. Non-numeric text is still an
/// error — a typo must not silently become the default value.
pub fn parse_or_default(field: &'static str, raw: &str, default: f64) -> Result<f64, InputError> {
    if raw.trim().is_empty() {
        return Ok(default);
    }
    parse_required(field, raw)
}

/// Build a mode-tagged input record from the five raw form fields.
///
/// Both pressure fields present selects the advanced mode (well depth may
/// then be blank — the advanced rules do not use it); both blank selects
/// the basic mode. Exactly one pressure supplied is an error rather than a
/// silent fall-back to basic.
pub fn well_inputs_from_form(
    formation_strength: &str,
    well_depth: &str,
    flow_rate: &str,
    reservoir_pressure: &str,
    bottomhole_pressure: &str,
) -> Result<WellInputs, InputError> {
    let has_reservoir = !reservoir_pressure.trim().is_empty();
    let has_bottomhole = !bottomhole_pressure.trim().is_empty();

    match (has_reservoir, has_bottomhole) {
        (true, true) => {
            let inputs = AdvancedInputs::new(
                parse_required("formation_strength", formation_strength)?,
                parse_required("flow_rate", flow_rate)?,
                parse_required("reservoir_pressure", reservoir_pressure)?,
                parse_required("bottomhole_pressure", bottomhole_pressure)?,
            )?;
            Ok(WellInputs::Advanced(inputs))
        }
        (false, false) => {
            let inputs = BasicInputs::new(
                parse_required("formation_strength", formation_strength)?,
                parse_required("well_depth", well_depth)?,
                parse_required("flow_rate", flow_rate)?,
            )?;
            Ok(WellInputs::Basic(inputs))
        }
        _ => Err(InputError::IncompletePressurePair),
    }
}

/// Build score-mode inputs from two optional raw fields, applying the
/// configured defaults for whichever is blank.
pub fn score_inputs_from_form(
    flow_rate: &str,
    sand_concentration: &str,
    defaults: &InputDefaults,
) -> Result<ScoreInputs, InputError> {
    ScoreInputs::new(
        parse_or_default("flow_rate", flow_rate, defaults.flow_rate_bbl_day)?,
        parse_or_default(
            "sand_concentration",
            sand_concentration,
            defaults.sand_concentration_ppm,
        )?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_accepts_plain_numbers() {
        assert_eq!(parse_required("flow_rate", "501"), Ok(501.0));
        assert_eq!(parse_required("flow_rate", "  501.5 "), Ok(501.5));
    }

    #[test]
    fn test_parse_required_rejects_empty() {
        assert_eq!(
            parse_required("flow_rate", "   "),
            Err(InputError::MissingField { field: "flow_rate" })
        );
    }

    #[test]
    fn test_parse_required_rejects_garbage() {
        let err = parse_required("well_depth", "8000ft").unwrap_err();
        assert!(matches!(err, InputError::NotNumeric { field: "well_depth", .. }));
    }

    #[test]
    fn test_parse_required_rejects_nan_spelling() {
        // "NaN" parses successfully as f64, so it needs an explicit reject
        let err = parse_required("flow_rate", "NaN").unwrap_err();
        assert!(matches!(err, InputError::NotFinite { field: "flow_rate", .. }));

        let err = parse_required("flow_rate", "inf").unwrap_err();
        assert!(matches!(err, InputError::NotFinite { field: "flow_rate", .. }));
    }

    #[test]
    fn test_parse_or_default_substitutes_only_when_blank() {
        assert_eq!(
            parse_or_default("flow_rate", "", DEFAULT_FLOW_RATE_BBL_DAY),
            Ok(750.0)
        );
        assert_eq!(
            parse_or_default("flow_rate", "900", DEFAULT_FLOW_RATE_BBL_DAY),
            Ok(900.0)
        );
        // A typo is an error, not a silent default
        assert!(parse_or_default("flow_rate", "9oo", DEFAULT_FLOW_RATE_BBL_DAY).is_err());
    }

    #[test]
    fn test_form_without_pressures_is_basic() {
        let inputs = well_inputs_from_form("6000", "4000", "10", "", "").unwrap();
        assert!(matches!(inputs, WellInputs::Basic(_)));
    }

    #[test]
    fn test_form_with_both_pressures_is_advanced() {
        let inputs = well_inputs_from_form("1000", "", "20", "1000", "700").unwrap();
        match inputs {
            WellInputs::Advanced(advanced) => {
                assert_eq!(advanced.reservoir_pressure_psi, 1000.0);
                assert_eq!(advanced.bottomhole_pressure_psi, 700.0);
            }
            other => panic!("expected advanced inputs, got {other:?}"),
        }
    }

    #[test]
    fn test_half_a_pressure_pair_is_an_error() {
        let err = well_inputs_from_form("1000", "8000", "20", "1000", "").unwrap_err();
        assert_eq!(err, InputError::IncompletePressurePair);

        let err = well_inputs_from_form("1000", "8000", "20", "", "700").unwrap_err();
        assert_eq!(err, InputError::IncompletePressurePair);
    }

    #[test]
    fn test_negative_magnitude_is_rejected_at_the_boundary() {
        let err = well_inputs_from_form("-10", "4000", "10", "", "").unwrap_err();
        assert!(matches!(
            err,
            InputError::NegativeMagnitude { field: "formation_strength", .. }
        ));
    }

    #[test]
    fn test_score_form_defaults_both_fields() {
        let defaults = InputDefaults::default();
        let inputs = score_inputs_from_form("", "", &defaults).unwrap();
        assert_eq!(inputs.flow_rate_bbl_day, DEFAULT_FLOW_RATE_BBL_DAY);
        assert_eq!(inputs.sand_concentration_ppm, DEFAULT_SAND_CONCENTRATION_PPM);
    }

    #[test]
    fn test_score_form_mixes_explicit_and_default() {
        let defaults = InputDefaults::default();
        let inputs = score_inputs_from_form("900", "", &defaults).unwrap();
        assert_eq!(inputs.flow_rate_bbl_day, 900.0);
        assert_eq!(inputs.sand_concentration_ppm, 250.0);
    }
}
