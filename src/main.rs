use cogify::config::cli::program_name;
use cogify::utils::logger;
use cogify::{
    parse_args, CliArgs, CogEngine, GdalPipeline, GdalTools, PathLocator, Preflight,
    ProcessRunner,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let argv: Vec<_> = std::env::args_os().collect();
    let program = program_name(argv.first());
    let args = parse_args(argv);

    logger::init_cli_logger(args.verbose(), args.monitor());

    match &args {
        CliArgs::Parsed(config) => {
            tracing::debug!("CLI config: {:?}", config);
            if !config.extra.is_empty() {
                tracing::debug!("Ignoring extra arguments: {:?}", config.extra);
            }
        }
        CliArgs::Rejected(e) => tracing::debug!("Argument parsing failed: {}", e),
    }

    let tools = GdalTools::default();
    let preflight = Preflight::new(PathLocator::from_env(), tools.clone());
    let pipeline = GdalPipeline::new(ProcessRunner::new(), tools);
    let engine = CogEngine::new_with_monitoring(pipeline, preflight, args.monitor());

    match engine.run(&program, args.request()).await {
        Ok(output) => {
            tracing::info!("Output saved to: {}", output.display());
            Ok(())
        }
        Err(e) => {
            if let Some(message) = e.user_message() {
                println!("{}", message);
            }
            std::process::exit(e.exit_code());
        }
    }
}
