use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use pseudo_element_map::config::GPERF_ENV;
use pseudo_element_map::logging::{level_filter, tracing_init};
use pseudo_element_map::{generate, Cli, GenError, GeneratorConfig, Gperf};

fn run(config: &GeneratorConfig) -> anyhow::Result<()> {
    let gperf = Gperf::new(&config.gperf);
    generate(config, &gperf).with_context(|| {
        format!(
            "Error when generating {} from {} :(",
            config.output_file.display(),
            config.gperf_file.display()
        )
    })?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logging = match tracing_init(level_filter(cli.verbose, cli.quiet)) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("{err:#}");
            false
        }
    };

    let config = GeneratorConfig::resolve(cli, std::env::var_os(GPERF_ENV));
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if logging {
                error!("{err:#}");
            } else {
                eprintln!("{err:#}");
            }
            let code = err.downcast_ref::<GenError>().map_or(1, GenError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
