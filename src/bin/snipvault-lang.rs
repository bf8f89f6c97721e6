#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use snipvault_lang::{classify, Evidence, Mode};
#[cfg(feature = "cli")]
use std::io::Read;
#[cfg(feature = "cli")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(
    name = "snipvault-lang",
    about = "Guess the programming language of captured text",
    version
)]
struct Cli {
    /// File to classify; reads stdin when omitted.
    file: Option<String>,

    /// Evidence stages to run (full or quick).
    #[arg(short, long, default_value = "full")]
    mode: Mode,

    /// Address of the page the text came from (full mode only).
    #[arg(short, long, default_value = "")]
    address: String,

    /// Title of the page the text came from (full mode only).
    #[arg(short, long, default_value = "")]
    title: String,

    /// Emit a JSON object instead of the bare tag.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snipvault_lang=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let text = if let Some(path) = &cli.file {
        std::fs::read_to_string(path)?
    } else {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let evidence = Evidence {
        text,
        address: cli.address,
        title: cli.title,
    };
    let language = classify(&evidence, cli.mode);

    if cli.json {
        println!("{}", serde_json::json!({ "language": language }));
    } else {
        println!("{}", language);
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("snipvault-lang CLI requires building with --features cli");
    std::process::exit(1);
}
