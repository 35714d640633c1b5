use serde::Deserialize;
use std::{fs, path::Path};

use crate::{error::SolverResult, initialization::HatProfile, solver::SolverParameters};

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct HatParamParser {
    pub baseline: f64,
    pub plateau: f64,
    pub lower: f64,
    pub upper: f64,
    #[serde(default)]
    pub include_upper: bool,
}
impl From<HatParamParser> for HatProfile {
    fn from(hat: HatParamParser) -> Self {
        HatProfile {
            baseline: hat.baseline,
            plateau: hat.plateau,
            lower: hat.lower,
            upper: hat.upper,
            include_upper: hat.include_upper,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct SolverParamParser {
    pub domain_length: f64,
    pub point_count: usize,
    pub dt: f64,
    pub step_count: i64,
    #[serde(default)]
    pub wave_speed: Option<f64>,
    #[serde(default)]
    pub hat: Option<HatParamParser>,
}
impl SolverParamParser {
    pub fn parse(file_path: impl AsRef<Path>) -> SolverResult<Self> {
        let file_content = fs::read_to_string(file_path)?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> SolverResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
    pub fn solver_params(&self) -> SolverResult<SolverParameters> {
        SolverParameters::with_signed_steps(
            self.domain_length,
            self.point_count,
            self.dt,
            self.step_count,
            self.wave_speed,
        )
    }
    /// The configured hat, or the one matching the equation when absent.
    pub fn hat_profile(&self) -> HatProfile {
        match self.hat {
            Some(hat) => hat.into(),
            None if self.wave_speed.is_some() => HatProfile::linear_script(),
            None => HatProfile::nonlinear_script(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;

    #[test]
    fn test_parse_linear_params() {
        let parser = SolverParamParser::parse_str(
            r#"{"domain_length": 2.0, "point_count": 41, "dt": 0.025, "step_count": 25, "wave_speed": 1.0}"#,
        )
        .unwrap();
        assert_eq!(parser.solver_params().unwrap(), SolverParameters::linear_reference());
        assert_eq!(parser.hat_profile(), HatProfile::linear_script());
    }

    #[test]
    fn test_parse_nonlinear_params_with_hat() {
        let parser = SolverParamParser::parse_str(
            r#"{
                "domain_length": 2,
                "point_count": 41,
                "dt": 0.025,
                "step_count": 25,
                "hat": {"baseline": 0.5, "plateau": 1.5, "lower": 0.2, "upper": 0.4}
            }"#,
        )
        .unwrap();
        assert_eq!(parser.solver_params().unwrap(), SolverParameters::nonlinear_reference());
        let hat = parser.hat_profile();
        assert_eq!(hat.baseline, 0.5);
        assert!(!hat.include_upper);
    }

    #[test]
    fn test_negative_step_count() {
        let parser = SolverParamParser::parse_str(
            r#"{"domain_length": 2.0, "point_count": 41, "dt": 0.025, "step_count": -3}"#,
        )
        .unwrap();
        assert!(matches!(
            parser.solver_params(),
            Err(SolverError::InvalidArgument { name: "step_count", .. })
        ));
    }

    #[test]
    fn test_malformed_file() {
        assert!(matches!(
            SolverParamParser::parse_str(r#"{"domain_length": 2.0}"#),
            Err(SolverError::ParamFile(_))
        ));
        assert!(matches!(
            SolverParamParser::parse("does/not/exist.json"),
            Err(SolverError::Io(_))
        ));
    }
}
