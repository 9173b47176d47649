use std::env;
use std::path::PathBuf;

use grid_shield::devices::TransformerParams;

/// Parsed command-line options.
#[derive(Debug, Default)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub preset: Option<String>,
    pub params: TransformerParams,
    pub demand_kw: Option<f64>,
    pub json: bool,
    pub table_out: Option<PathBuf>,
}

impl CliOptions {
    /// Returns `true` unless the run only asks for the ANSI 51 current or
    /// the settings table.
    pub fn wants_transformer(&self) -> bool {
        self.params.rated_power.is_some() || (self.table_out.is_none() && self.demand_kw.is_none())
    }
}

pub enum Command {
    Run(CliOptions),
    Help,
}

pub fn parse_args() -> Result<Command, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

pub fn parse_args_from(args: &[String]) -> Result<Command, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--config" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --config (expected a TOML file path)",
                )?;
                if opts.config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name = args.next_or_err(
                    i,
                    "missing value for --preset (expected a preset name)",
                )?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--rated-power" => {
                i += 1;
                opts.params.rated_power = Some(args.number_at(i, "--rated-power")?);
            }
            "--voltage" => {
                i += 1;
                opts.params.high_voltage_level = Some(args.number_at(i, "--voltage")?);
            }
            "--impedance" => {
                i += 1;
                opts.params.impedance = Some(args.number_at(i, "--impedance")?);
            }
            "--irush-ratio" => {
                i += 1;
                opts.params.irush_ratio = Some(args.number_at(i, "--irush-ratio")?);
            }
            "--irush-delay" => {
                i += 1;
                opts.params.irush_delay = Some(args.number_at(i, "--irush-delay")?);
            }
            "--demand" => {
                i += 1;
                opts.demand_kw = Some(args.number_at(i, "--demand")?);
            }
            "--json" => opts.json = true,
            "--table-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --table-out (expected a file path)",
                )?;
                if opts.table_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--table-out provided more than once".to_string());
                }
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.config.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--config` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    Ok(Command::Run(opts))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
    fn number_at(&self, index: usize, flag: &str) -> Result<f64, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }

    fn number_at(&self, index: usize, flag: &str) -> Result<f64, String> {
        let err = format!("missing value for {flag} (expected a number)");
        let raw = self.next_or_err(index, &err)?;
        raw.parse::<f64>()
            .map_err(|_| format!("{flag} value \"{raw}\" is not a valid number"))
    }
}

pub fn print_usage() {
    eprintln!("grid-shield: transformer protection settings calculator");
    eprintln!();
    eprintln!("Usage: grid-shield [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --rated-power <kVA>      Transformer rated power (required)");
    eprintln!("  --voltage <kV>           Primary voltage level (required)");
    eprintln!("  --impedance <%>          Short-circuit impedance (default 5.0)");
    eprintln!("  --irush-ratio <x In>     Inrush current multiple (default 8.0)");
    eprintln!("  --irush-delay <s>        Inrush duration (default 0.1)");
    eprintln!("  --demand <kW>            Also compute ANSI 51 nominal current at --voltage");
    eprintln!("  --config <path>          Load catalogs and defaults from a TOML file");
    eprintln!("  --preset <name>          Use a built-in configuration (standard, compact)");
    eprintln!("  --json                   Print the transformer settings as JSON");
    eprintln!("  --table-out <path>       Write the catalog settings table to CSV");
    eprintln!("  --help                   Show this help message");
}
