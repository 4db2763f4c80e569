use std::process;
use tour_colony::driver::{self, ConsolePresenter, Driver};
use tour_colony::utils::config::Arguments;
use tour_colony::utils::{yaml, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Arguments = argh::from_env();
    if let Err(error) = run(args) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn run(args: Arguments) -> Result<()> {
    let atlas = yaml::load_atlas(&args.cities)?;
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);

    let mut presenter = ConsolePresenter::new(&atlas);
    if args.compare {
        let results = Driver::compare(&atlas, &config, &mut presenter)?;
        print!("{}", driver::show_brief(&results));
        return Ok(());
    }

    let mut search = Driver::new(atlas.clone(), config)?;
    let (_, elapsed) = search.run(&mut presenter)?;
    println!("--- computing time: {} μs ---", elapsed);
    Ok(())
}
