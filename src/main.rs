use clap::Parser;
use miette::Result;
use regen::cli::{Cli, Commands};
use regen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Gen(args) => regen::cli::gen::run(args, &printer)?,
        Commands::Run(args) => regen::cli::run::run(args, &printer)?,
        Commands::List(args) => regen::cli::list::run(args, &printer)?,
        Commands::Recolor(args) => regen::cli::recolor::run(args, &printer)?,
        Commands::Package(args) => regen::cli::package::run(args, &printer)?,
        Commands::Completions(args) => regen::cli::completions::run(args)?,
    }

    Ok(())
}
