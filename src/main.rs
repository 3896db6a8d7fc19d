use mdjson::{
    Config, Highlighter, PlainHighlighter, Renderer, SyntectHighlighter, cli::Cli, logger,
};

fn run() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse_args(std::env::args()));
    logger::set_verbose(config.verbose);

    let highlighter: Box<dyn Highlighter> = if config.highlight {
        Box::new(SyntectHighlighter::new())
    } else {
        Box::new(PlainHighlighter)
    };
    let renderer = Renderer::new(highlighter);

    mdjson::run(&config, &renderer)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        logger::error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
