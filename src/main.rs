use std::process::ExitCode;

use anyhow::Context;
use huffpack::cli::{self, Command, Job};

fn run(jobs: &[Job]) -> anyhow::Result<()> {
    for job in jobs {
        job.run().with_context(|| {
            format!(
                "failed to {} {} into {}",
                job.mode,
                job.input.display(),
                job.output.display()
            )
        })?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let (jobs, verbose) = match cli::parse(std::env::args().skip(1)) {
        Ok(Command::Run { jobs, verbose }) => (jobs, verbose),
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&jobs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
