mod args;

use std::path::Path;
use clap::Parser;
use tracing::{error, info};
use spin_sim::config::{Config, ConfigFile, SimulationConfig};
use spin_sim::export::write_trajectory;
use spin_sim::Result;
use args::{Action, BatchArgs, RunArgs, SpinSimArgs};

fn main() {
    let args = SpinSimArgs::parse();
    spin_sim::logging::init_tracing(&args.log_level);
    let result = match args.action {
        Action::Run(run_args) => run(&run_args),
        Action::NewConfig(new_args) => new_config(&new_args.destination),
        Action::Batch(batch_args) => batch(&batch_args),
    };
    if let Err(e) = result {
        error!("{}",e);
        std::process::exit(1);
    }
}

fn run(args:&RunArgs) -> Result<()> {
    let mut cfg = match &args.config {
        Some(file) => SimulationConfig::from_file(file)?,
        None => SimulationConfig::default(),
    };
    if let Some(out) = &args.out {
        cfg.output.path = out.clone();
    }
    if let Some(format) = args.format {
        cfg.output.format = format;
    }
    simulate_and_export(&cfg,&cfg.output.path)
}

fn new_config(destination:&Path) -> Result<()> {
    let written = SimulationConfig::default().to_file(destination)?;
    println!("wrote {}",written.display());
    Ok(())
}

fn batch(args:&BatchArgs) -> Result<()> {
    let configs = SimulationConfig::find_all(&args.config_dir)?;
    std::fs::create_dir_all(&args.output_dir)?;
    info!(n = configs.len(),"running batch");
    for file in configs.iter() {
        let cfg = SimulationConfig::from_file(file)?;
        let name = file.file_stem().unwrap_or(file.as_os_str());
        simulate_and_export(&cfg,&args.output_dir.join(name))?;
    }
    Ok(())
}

fn simulate_and_export(cfg:&SimulationConfig,out:&Path) -> Result<()> {
    let ens = cfg.simulate()?;
    let written = write_trajectory(&ens,out,cfg.output.format)?;
    println!("{} samples -> {}",ens.trajectory().len(),written.display());
    println!("final state: mz = {:.6}, mxy = {:.6} after t = {}",ens.mz(),ens.mxy(),ens.elapsed());
    Ok(())
}
