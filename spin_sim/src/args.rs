use clap;
use std::path::PathBuf;
use spin_sim::export::ExportFormat;

/// Bloch relaxation of an ideal spin ensemble under instantaneous pulses
#[derive(clap::Parser,Debug)]
#[command(author, version, about, long_about = None)]
pub struct SpinSimArgs {
    /// default log filter when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level:String,
    #[command(subcommand)]
    pub action: Action,
}

#[derive(clap::Subcommand,Debug)]
pub enum Action {
    /// run one simulation and export its trajectory
    Run(RunArgs),
    /// write the default simulation config
    NewConfig(NewConfigArgs),
    /// run every config found in a directory
    Batch(BatchArgs),
}

#[derive(clap::Args,Debug)]
pub struct RunArgs {
    /// simulation config (defaults are used when omitted)
    #[clap(short, long)]
    pub config:Option<PathBuf>,
    /// overrides the output path of the config
    #[clap(short, long)]
    pub out:Option<PathBuf>,
    #[clap(short, long, value_enum)]
    pub format:Option<ExportFormat>,
}

#[derive(clap::Args,Debug)]
pub struct NewConfigArgs {
    pub destination:PathBuf,
}

#[derive(clap::Args,Debug)]
pub struct BatchArgs {
    pub config_dir:PathBuf,
    /// trajectories are written here, named after their config
    pub output_dir:PathBuf,
}
