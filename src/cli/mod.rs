pub mod completions;
pub mod gen;
pub mod list;
pub mod package;
pub mod recolor;
pub mod run;

use clap::{Parser, Subcommand};

/// regen - Code generation and asset helpers for game builds
#[derive(Parser, Debug)]
#[command(name = "regen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate marked regions from generator specs
    Gen(gen::GenArgs),

    /// Discover and run every generator in a project
    Run(run::RunArgs),

    /// List discovered generators without running them
    List(list::ListArgs),

    /// Derive coloured sprite variants from a base set
    Recolor(recolor::RecolorArgs),

    /// Archive a build artifact
    Package(package::PackageArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
