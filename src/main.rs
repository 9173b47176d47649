//! grid-shield entry point: CLI wiring and config-driven settings output.

mod cli;

use std::process;

use grid_shield::config::ProtectionConfig;
use grid_shield::devices::{PowerTransformer, Validator};
use grid_shield::logging::init_tracing;
use grid_shield::protection::TimeOvercurrent;
use grid_shield::report::{catalog_sweep, export_csv};

use cli::{CliOptions, Command};

fn load_config(opts: &CliOptions) -> ProtectionConfig {
    // --config takes priority, then --preset, then the standard catalog
    let loaded = if let Some(ref path) = opts.config {
        ProtectionConfig::from_toml_file(path)
    } else if let Some(ref name) = opts.preset {
        ProtectionConfig::from_preset(name)
    } else {
        Ok(ProtectionConfig::standard())
    };

    let config = loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    config
}

fn print_transformer(tr: &PowerTransformer, json: bool) {
    if json {
        match serde_json::to_string_pretty(tr) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("error: failed to serialize settings: {e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("Power transformer");
    println!("  Rated power:              {} kVA", tr.rated_power());
    println!("  High voltage level:       {} kV", tr.high_voltage_level());
    println!("  Impedance:                {:.2} %", tr.impedance());
    println!("  Inrush ratio:             {:.2} x In", tr.irush_ratio());
    println!("  Inrush delay:             {:.2} s", tr.irush_delay());
    println!("  Nominal current:          {:.2} A", tr.nominal_current());
    println!("  ANSI current:             {:.2} A", tr.ansi_current());
    println!("  ANSI earth-fault current: {:.2} A", tr.ansi_earth_fault_current());
    println!("  Inrush current:           {:.2} A", tr.inrush_current());
    println!("  ANSI delay:               {:.1} s", tr.ansi_delay());
}

fn run(opts: &CliOptions) {
    let config = load_config(opts);
    let validator: Validator = config.validator();

    if opts.wants_transformer() {
        match PowerTransformer::with_validator(&opts.params, &validator) {
            Ok(tr) => print_transformer(&tr, opts.json),
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }

    if let Some(demand) = opts.demand_kw {
        let Some(voltage) = opts.params.high_voltage_level else {
            eprintln!("error: --demand requires --voltage");
            process::exit(1);
        };
        let ansi51 =
            TimeOvercurrent::with_power_factor(demand, voltage, config.ansi51.power_factor);
        println!(
            "ANSI {}: nominal current {:.2} A ({demand} kW at {voltage} kV, pf {})",
            ansi51.function().code(),
            ansi51.nominal_current(),
            ansi51.power_factor
        );
    }

    if let Some(ref path) = opts.table_out {
        let rows = catalog_sweep(&validator).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            process::exit(1);
        });
        if let Err(e) = export_csv(&rows, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Settings table written to {}", path.display());
    }
}

fn main() {
    init_tracing();

    match cli::parse_args() {
        Ok(Command::Help) => cli::print_usage(),
        Ok(Command::Run(opts)) => run(&opts),
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    }
}
