mod case;
mod error;

use case::{InputArgs, sweep_base};
use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use hx_engine::{
    DEFAULT_FLOW_RANGE, DEFAULT_SWEEP_POINTS, Objective, OptimizationReport, SimulationResult,
    SweepDefinition, SweepParameter, SweepResult, SweepSpacing, execute_sweep, optimize, run,
};
use hx_fluids::filter_catalog;
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hx-cli")]
#[command(about = "hxsim CLI - pipe heat exchanger performance tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one exchanger configuration
    Simulate {
        #[command(flatten)]
        input: InputArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep one input over a grid
    Sweep {
        #[command(flatten)]
        input: InputArgs,
        /// Swept input (flow_rate, diameter, length, inlet_temp, outlet_temp)
        #[arg(long)]
        parameter: SweepParameter,
        /// First grid value
        #[arg(long, allow_negative_numbers = true)]
        start: f64,
        /// Last grid value
        #[arg(long, allow_negative_numbers = true)]
        end: f64,
        /// Number of grid points
        #[arg(long, default_value_t = DEFAULT_SWEEP_POINTS)]
        points: usize,
        /// Logarithmic spacing instead of linear
        #[arg(long)]
        log: bool,
        /// Print the sweep as JSON
        #[arg(long)]
        json: bool,
    },
    /// Trade efficiency against cost over a flow-rate sweep
    Optimize {
        #[command(flatten)]
        input: InputArgs,
        /// Lowest flow rate [m³/s]
        #[arg(long, default_value_t = DEFAULT_FLOW_RANGE.0)]
        start: f64,
        /// Highest flow rate [m³/s]
        #[arg(long, default_value_t = DEFAULT_FLOW_RANGE.1)]
        end: f64,
        /// Number of grid points
        #[arg(long, default_value_t = DEFAULT_SWEEP_POINTS)]
        points: usize,
        /// Efficiency [%] that scores 1.0
        #[arg(long, default_value_t = Objective::default().target_efficiency)]
        target_efficiency: f64,
        /// Cost at which the score drops to zero
        #[arg(long, default_value_t = Objective::default().max_cost)]
        max_cost: f64,
        /// Cost per m³/s of flow
        #[arg(long, default_value_t = Objective::default().cost_per_unit)]
        cost_per_unit: f64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported fluids and their properties
    Fluids {
        /// Filter by id, name, category or alias
        query: Option<String>,
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Simulate { input, json } => cmd_simulate(&input, json),
        Commands::Sweep {
            input,
            parameter,
            start,
            end,
            points,
            log,
            json,
        } => {
            let spacing = if log {
                SweepSpacing::Logarithmic
            } else {
                SweepSpacing::Linear
            };
            SweepDefinition::new(parameter, start, end, points, spacing)
                .map_err(CliError::from)
                .and_then(|def| cmd_sweep(&input, &def, json))
        }
        Commands::Optimize {
            input,
            start,
            end,
            points,
            target_efficiency,
            max_cost,
            cost_per_unit,
            json,
        } => SweepDefinition::new(
            SweepParameter::FlowRate,
            start,
            end,
            points,
            SweepSpacing::Linear,
        )
        .and_then(|def| {
            Objective::new(target_efficiency, max_cost, cost_per_unit).map(|obj| (def, obj))
        })
        .map_err(CliError::from)
        .and_then(|(def, objective)| cmd_optimize(&input, &def, &objective, json)),
        Commands::Fluids { query, json } => cmd_fluids(query.as_deref().unwrap_or(""), json),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_simulate(input: &InputArgs, json: bool) -> CliResult<()> {
    let request = input.resolve()?;
    tracing::debug!(?request, "resolved simulation request");
    let result = run(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn print_result(r: &SimulationResult) {
    println!("Results ({} flow):", r.flow_regime);
    println!("  Heat transfer rate: {:.3} W", r.heat_transfer_rate_w);
    println!("  Effectiveness:      {:.6}", r.effectiveness);
    println!("  NTU:                {:.6}", r.ntu);
    println!("  Capacity ratio:     {:.1}", r.capacity_ratio);
    println!("  Pressure drop:      {:.3} Pa", r.pressure_drop_pa);
    println!("  Pressure drop ratio:{:.4}", r.pressure_drop_ratio);
    println!("  Velocity:           {:.4e} m/s", r.velocity_m_s);
    println!("  Reynolds number:    {:.2}", r.reynolds);
    println!("  Friction factor:    {:.6}", r.friction_factor);
    println!("  Nusselt number:     {:.4}", r.nusselt);
    println!("  h:                  {:.3} W/(m²·K)", r.heat_transfer_coeff_w_m2_k);
    println!("  U:                  {:.3} W/(m²·K)", r.overall_coeff_w_m2_k);
}

#[derive(Serialize)]
struct SweepRow<'a> {
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a SimulationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn sweep_rows(sweep: &SweepResult) -> Vec<SweepRow<'_>> {
    sweep
        .independent_values
        .iter()
        .zip(&sweep.results)
        .enumerate()
        .map(|(i, (value, result))| SweepRow {
            value: *value,
            result: result.as_ref(),
            error: sweep
                .failures
                .iter()
                .find(|f| f.point_index == i)
                .map(|f| f.error.to_string()),
        })
        .collect()
}

fn cmd_sweep(input: &InputArgs, def: &SweepDefinition, json: bool) -> CliResult<()> {
    let base = sweep_base(input.resolve()?, def)?;
    let sweep = execute_sweep(&base, def);

    if json {
        println!("{}", serde_json::to_string_pretty(&sweep_rows(&sweep))?);
        return Ok(());
    }

    println!("{def}");
    println!(
        "  {:>14}  {:>12}  {:>16}  {:>14}  {:>12}",
        def.parameter.to_string(),
        "effectiveness",
        "heat rate [W]",
        "Δp [Pa]",
        "Re"
    );
    for row in sweep_rows(&sweep) {
        match (row.result, row.error) {
            (Some(r), _) => println!(
                "  {:>14.6}  {:>12.6}  {:>16.3}  {:>14.3}  {:>12.2}",
                row.value, r.effectiveness, r.heat_transfer_rate_w, r.pressure_drop_pa, r.reynolds
            ),
            (None, error) => println!(
                "  {:>14.6}  failed: {}",
                row.value,
                error.unwrap_or_default()
            ),
        }
    }
    println!(
        "✓ {} succeeded, {} failed",
        sweep.num_successful, sweep.num_failed
    );
    if let (Some(q), Some(dp)) = (
        peak(&sweep.heat_transfer_rate_w()),
        peak(&sweep.pressure_drop_pa()),
    ) {
        println!("  Peak heat rate: {q:.3} W, peak Δp: {dp:.3} Pa");
    }
    Ok(())
}

fn peak(series: &[f64]) -> Option<f64> {
    series.iter().copied().reduce(f64::max)
}

fn cmd_optimize(
    input: &InputArgs,
    def: &SweepDefinition,
    objective: &Objective,
    json: bool,
) -> CliResult<()> {
    let base = sweep_base(input.resolve()?, def)?;
    let report = optimize(&base, def, objective);

    if json {
        let body = serde_json::json!({
            "definition": &report.definition,
            "objective": &report.objective,
            "points": &report.points,
            "best": &report.best,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print_report(&report);
    }

    if report.best.is_none() {
        return Err(CliError::NoFeasiblePoint);
    }
    Ok(())
}

fn print_report(report: &OptimizationReport) {
    println!("{}", report.definition);
    println!(
        "  {:>12}  {:>10}  {:>10}  {:>10}",
        "flow [m³/s]", "eff [%]", "cost", "score"
    );
    for p in &report.points {
        println!(
            "  {:>12.4}  {:>10.4}  {:>10.2}  {:>10.6}",
            p.value, p.efficiency, p.cost, p.score
        );
    }
    if let Some(best) = &report.best {
        println!(
            "✓ Best: flow {:.4} m³/s, efficiency {:.4}%, cost {:.2}, score {:.6}",
            best.value, best.efficiency, best.cost, best.score
        );
    }
}

#[derive(Serialize)]
struct FluidRow {
    id: &'static str,
    name: &'static str,
    category: String,
    properties: hx_fluids::FluidSpec,
}

fn cmd_fluids(query: &str, json: bool) -> CliResult<()> {
    let entries = filter_catalog(query);

    if json {
        let rows: Vec<FluidRow> = entries
            .iter()
            .map(|e| FluidRow {
                id: e.id.key(),
                name: e.display_name(),
                category: e.category.to_string(),
                properties: *e.id.properties(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No fluids match '{query}'");
        return Ok(());
    }

    println!(
        "  {:<18} {:<22} {:<12} {:>9} {:>7} {:>10} {:>7} {:>9} {:>8}",
        "id", "name", "category", "ρ", "c_p", "μ", "k", "Pr", "T_c [K]"
    );
    for e in entries {
        let p = e.id.properties();
        println!(
            "  {:<18} {:<22} {:<12} {:>9} {:>7} {:>10.3e} {:>7} {:>9} {:>8}",
            e.id.key(),
            e.display_name(),
            e.category.to_string(),
            p.density_kg_m3,
            p.specific_heat_j_kg_k,
            p.viscosity_pa_s,
            p.thermal_conductivity_w_m_k,
            p.prandtl,
            p.critical_temperature_k
        );
    }
    Ok(())
}
