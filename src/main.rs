use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use termtokens::cli::Args;
use termtokens::config::Config;
use termtokens::generate::{Generator, Outcome};
use termtokens::preview::render_preview;
use termtokens::registry::ThemeRegistry;
use termtokens::watch;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let config = Config::from_args(&args)?;
    let generator = Generator::new(ThemeRegistry::new(), config);
    let requested = args.theme.as_deref();

    if args.list {
        for theme in generator.discover() {
            println!("{}\t{}\t{}", theme.name, theme.adapter.name(), theme.path.display());
        }
        return Ok(());
    }

    if args.preview {
        if let Some(rendered) = generator.render(requested)? {
            eprint!("{}", render_preview(&rendered.theme.name, &rendered.colors));
        }
    }

    if args.watch {
        return watch::watch(&generator, requested);
    }

    if args.stdout {
        if let Some(rendered) = generator.render(requested)? {
            print!("{}", rendered.tokens);
        }
        return Ok(());
    }

    match generator.run(requested)? {
        Outcome::Written { .. } => {}
        Outcome::NoThemes => warn!("skipped token generation"),
    }
    Ok(())
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("termtokens=debug")
        } else {
            EnvFilter::new("termtokens=info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
