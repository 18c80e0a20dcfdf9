use clap::Parser;
use icongen::cli::{generate, Cli, Commands};
use icongen::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        None => generate::run(generate::GenerateArgs::default(), &printer)?,
        Some(Commands::Generate(args)) => generate::run(args, &printer)?,
        Some(Commands::List(args)) => icongen::cli::list::run(args, &printer)?,
        Some(Commands::Completions(args)) => icongen::cli::completions::run(args)?,
    }

    Ok(())
}
