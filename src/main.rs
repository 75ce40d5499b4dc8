//! passgen - password suggestions built from three letter English words

use clap::Parser;
use passgen::{
    cli::Cli,
    logging,
    output,
    types::{GenerationRequest, OutputMode},
    PasswordGenerator, PassgenError, SeededSource, WordPool,
};
use std::process;

fn main() {
    // Initialize the library before parsing so .env values reach clap
    if let Err(e) = passgen::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<PassgenError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.about {
        println!("{}", output::ABOUT_TEXT);
        return Ok(());
    }

    if cli.version {
        print!("{}", output::version_text());
        return Ok(());
    }

    let request = cli.request()?;
    tracing::debug!(?request, "Resolved generation request");

    let pool = match &cli.wordlist {
        Some(path) => WordPool::from_file(path)?,
        None => WordPool::builtin(),
    };

    let rng = match cli.seed {
        Some(seed) => SeededSource::from_seed(seed),
        None => SeededSource::from_time(),
    };

    let mut generator = PasswordGenerator::with_source(pool, rng);
    print_suggestions(&mut generator, &request)?;
    Ok(())
}

fn print_suggestions(
    generator: &mut PasswordGenerator<SeededSource>,
    request: &GenerationRequest,
) -> passgen::Result<()> {
    match request.mode {
        OutputMode::Quiet => {
            println!("{}", generator.generate(request)?);
        }
        OutputMode::Json => {
            let suggestions = generator.suggestions(request)?;
            println!("{}", output::render_json(&suggestions)?);
        }
        OutputMode::Table => {
            let suggestions = generator.suggestions(request)?;
            print!(
                "{}",
                output::render_table(generator.pool().size(), request, &suggestions)
            );
        }
    }
    Ok(())
}
