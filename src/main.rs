use asciiart::cli::Args;
use asciiart::convert;
use asciiart::error::EXIT_USAGE;
use asciiart::AsciiArtError;

fn main() {
    let args = match Args::try_parse_env() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too, and go to stdout
            let _ = e.print();
            std::process::exit(if e.use_stderr() { EXIT_USAGE } else { 0 });
        }
    };

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), AsciiArtError> {
    let input = args.input_locator();
    let output = args.output_locator();
    let options = args.convert_options();
    log::debug!(
        "width={} alphabet={} invert={}",
        options.width,
        options.alphabet,
        options.render.invert
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AsciiArtError::Runtime)?;

    rt.block_on(convert::run(&input, &output, &options))?;
    Ok(())
}
