//! Case files and command-line input overrides.

use crate::error::{CliError, CliResult};
use clap::Args;
use hx_engine::{SimulationInput, SimulationRequest, SweepDefinition, SweepParameter, resolve};
use std::path::{Path, PathBuf};

/// Simulation input shared by every subcommand that runs the engine.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// YAML or JSON case file; flags override its fields
    #[arg(long)]
    pub case: Option<PathBuf>,
    /// Exchanger arrangement (counter, parallel, cross)
    #[arg(long = "type")]
    pub exchanger_type: Option<String>,
    /// Working fluid id (see `hx-cli fluids`)
    #[arg(long)]
    pub fluid: Option<String>,
    /// Inlet temperature [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub inlet_temp: Option<f64>,
    /// Outlet temperature [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub outlet_temp: Option<f64>,
    /// Volumetric flow rate [m³/s]
    #[arg(long)]
    pub flow_rate: Option<f64>,
    /// Pipe diameter [m]
    #[arg(long)]
    pub diameter: Option<f64>,
    /// Pipe length [m]
    #[arg(long)]
    pub length: Option<f64>,
}

impl InputArgs {
    /// Case file (if any) with command-line flags laid over it.
    pub fn resolve(&self) -> CliResult<SimulationRequest> {
        let base = match &self.case {
            Some(path) => load_case(path)?,
            None => SimulationRequest::default(),
        };
        Ok(base.overlay(self.overrides()))
    }

    fn overrides(&self) -> SimulationRequest {
        SimulationRequest {
            exchanger_type: self.exchanger_type.clone(),
            fluid: self.fluid.clone(),
            inlet_temp: self.inlet_temp,
            outlet_temp: self.outlet_temp,
            flow_rate: self.flow_rate,
            diameter: self.diameter,
            length: self.length,
        }
    }
}

/// Load a case file, picking the format from its extension.
pub fn load_case(path: &Path) -> CliResult<SimulationRequest> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse_error = |message: String| CliError::CaseFileParse {
        path: path.to_path_buf(),
        message,
    };

    match extension.as_deref() {
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
        }
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => Err(CliError::CaseFileFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Set the swept field to the first grid value.
///
/// The swept value is replaced at every grid point, so a sweep only needs
/// the other six fields from the caller.
fn seed_swept_field(
    request: SimulationRequest,
    parameter: SweepParameter,
    start: f64,
) -> SimulationRequest {
    let mut seeded = request;
    match parameter {
        SweepParameter::FlowRate => seeded.flow_rate = Some(start),
        SweepParameter::Diameter => seeded.diameter = Some(start),
        SweepParameter::Length => seeded.length = Some(start),
        SweepParameter::InletTemp => seeded.inlet_temp = Some(start),
        SweepParameter::OutletTemp => seeded.outlet_temp = Some(start),
    }
    seeded
}

/// Base input for a sweep over `def`.
///
/// Only completeness and identifiers are checked here. Numeric checks run
/// per grid point, so an unsafe or invalid start value fails that point
/// instead of the whole sweep.
pub fn sweep_base(request: SimulationRequest, def: &SweepDefinition) -> CliResult<SimulationInput> {
    let seeded = seed_swept_field(request, def.parameter, def.start);
    Ok(resolve(&seeded)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_engine::{SimError, SweepSpacing, execute_sweep};

    fn write_case(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("hx_cli_case_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_yaml_and_json() {
        let yaml = write_case("water.yaml", "fluid: water\ndiameter: 0.05\n");
        let request = load_case(&yaml).unwrap();
        assert_eq!(request.fluid.as_deref(), Some("water"));
        assert_eq!(request.diameter, Some(0.05));

        let json = write_case("oil.json", r#"{"type": "cross", "length": 3.0}"#);
        let request = load_case(&json).unwrap();
        assert_eq!(request.exchanger_type.as_deref(), Some("cross"));
        assert_eq!(request.length, Some(3.0));
    }

    #[test]
    fn rejects_unknown_extension_and_bad_content() {
        let txt = write_case("case.txt", "fluid: water\n");
        assert!(matches!(
            load_case(&txt),
            Err(CliError::CaseFileFormat { .. })
        ));

        let bad = write_case("bad.yaml", "fluid: [water\n");
        assert!(matches!(
            load_case(&bad),
            Err(CliError::CaseFileParse { .. })
        ));

        let missing = std::env::temp_dir().join("hx_cli_case_test/does-not-exist.yaml");
        assert!(matches!(
            load_case(&missing),
            Err(CliError::CaseFileRead { .. })
        ));
    }

    #[test]
    fn flags_override_case_file() {
        let path = write_case("override.yml", "fluid: water\nlength: 2.0\n");
        let args = InputArgs {
            case: Some(path),
            length: Some(5.0),
            ..InputArgs::default()
        };
        let request = args.resolve().unwrap();
        assert_eq!(request.fluid.as_deref(), Some("water"));
        assert_eq!(request.length, Some(5.0));
    }

    fn water_without_inlet() -> SimulationRequest {
        SimulationRequest {
            exchanger_type: Some("counter".into()),
            fluid: Some("water".into()),
            outlet_temp: Some(40.0),
            flow_rate: Some(0.01),
            diameter: Some(0.05),
            length: Some(2.0),
            ..SimulationRequest::default()
        }
    }

    #[test]
    fn reversed_sweep_with_unsafe_start_still_runs() {
        let def = SweepDefinition::new(
            SweepParameter::InletTemp,
            700.0,
            100.0,
            7,
            SweepSpacing::Linear,
        )
        .unwrap();

        let base = sweep_base(water_without_inlet(), &def).unwrap();
        assert_eq!(base.inlet_temp_c, 700.0);

        let sweep = execute_sweep(&base, &def);
        assert_eq!(sweep.num_successful, 5);
        assert_eq!(sweep.num_failed, 2);
        let failed: Vec<usize> = sweep.failures.iter().map(|f| f.point_index).collect();
        assert_eq!(failed, vec![0, 1]);
    }

    #[test]
    fn sweep_base_still_needs_the_other_fields() {
        let def = SweepDefinition::new(SweepParameter::Length, 1.0, 5.0, 3, SweepSpacing::Linear)
            .unwrap();
        let request = SimulationRequest {
            fluid: None,
            ..water_without_inlet()
        };
        assert!(matches!(
            sweep_base(request, &def),
            Err(CliError::Simulation(SimError::MissingField { field: "fluid" }))
        ));
    }

    #[test]
    fn seeding_touches_only_the_swept_field() {
        let request = SimulationRequest {
            flow_rate: Some(0.3),
            ..SimulationRequest::default()
        };
        let seeded = seed_swept_field(request.clone(), SweepParameter::FlowRate, 0.1);
        assert_eq!(seeded.flow_rate, Some(0.1));

        let seeded = seed_swept_field(request, SweepParameter::Length, 1.0);
        assert_eq!(seeded.length, Some(1.0));
        assert_eq!(seeded.flow_rate, Some(0.3));
    }
}
