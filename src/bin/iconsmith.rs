use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "iconsmith", version)]
struct Cli {
    /// Log debug events (per-image byte counts) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the icon set and write every output file.
    Generate(GenerateArgs),
    /// Print the default configuration as JSON.
    PrintConfig,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory, created if absent.
    #[arg(long, default_value = "public")]
    out_dir: PathBuf,

    /// JSON configuration; built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override rendered sizes, e.g. `--sizes 256,48,16`.
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<u32>>,

    /// Render sizes in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::PrintConfig => cmd_print_config(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => iconsmith::IconSetConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => iconsmith::IconSetConfig::default(),
    };
    if let Some(sizes) = args.sizes {
        override_sizes(&mut config, sizes);
    }

    let threading = iconsmith::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let painter = config.note_icon();
    let set = iconsmith::build_icon_set(&config, &painter, &threading)
        .with_context(|| "build icon set")?;
    let written = set
        .write_to_dir(&args.out_dir)
        .with_context(|| format!("write icons to '{}'", args.out_dir.display()))?;

    eprintln!(
        "wrote {} files to {}",
        written.len(),
        args.out_dir.display()
    );
    Ok(())
}

/// Replace the rendered sizes and drop aliases or ico members that no longer exist.
fn override_sizes(config: &mut iconsmith::IconSetConfig, sizes: Vec<u32>) {
    config.sizes = sizes;
    let rendered = config.sizes.clone();
    config.aliases.retain(|alias| {
        let keep = rendered.contains(&alias.size);
        if !keep {
            tracing::warn!(file = %alias.file, size = alias.size, "alias dropped: size not rendered");
        }
        keep
    });
    if let Some(ico) = &mut config.ico {
        ico.sizes
            .retain(|size| rendered.contains(size) && *size <= iconsmith::MAX_ICO_SIDE);
        if ico.sizes.is_empty() {
            tracing::warn!(file = %ico.file, "ico dropped: no eligible sizes rendered");
            config.ico = None;
        }
    }
}

fn cmd_print_config() -> anyhow::Result<()> {
    let json = iconsmith::IconSetConfig::default()
        .to_json_pretty()
        .with_context(|| "serialize default config")?;
    println!("{json}");
    Ok(())
}
