use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stampbox", version, about = "Letterbox and watermark a directory of images")]
struct Cli {
    /// Input directory, walked recursively.
    input: PathBuf,

    /// Output directory. Defaults to `handledImage` next to the input.
    output: Option<PathBuf>,

    /// JSON config file (camelCase keys).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side of the square output canvas.
    #[arg(long)]
    size: Option<u32>,

    /// Watermark blend strength in [0, 1].
    #[arg(long)]
    alpha: Option<f32>,

    /// Only letterbox, skip the watermark.
    #[arg(long, default_value_t = false)]
    no_watermark: bool,

    /// Clear canvas pixels under the text before adding it.
    #[arg(long, default_value_t = false)]
    clean_before_add: bool,

    /// Watermark text.
    #[arg(long)]
    text: Option<String>,

    /// Overwrite existing outputs (implies --keep-names).
    #[arg(long, default_value_t = false)]
    replace: bool,

    /// Keep input file names instead of appending a random suffix.
    #[arg(long, default_value_t = false)]
    keep_names: bool,

    /// Seed both random generators for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// More logging (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let cfg = load_config(&cli)?;
    cfg.validate().context("invalid configuration")?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| stampbox::default_output_root(&cli.input));

    let (rng, suffixes) = match cfg.seed {
        Some(seed) => (
            stampbox::WatermarkRng::from_seed(seed),
            stampbox::SuffixGenerator::from_seed(seed.wrapping_add(1), cfg.suffix_len),
        ),
        None => (
            stampbox::WatermarkRng::from_time(),
            stampbox::SuffixGenerator::from_time(cfg.suffix_len),
        ),
    };

    let mut driver = stampbox::BatchDriver::new(stampbox::FsCodec, cfg.batch_opts(), rng, suffixes);
    let report = driver
        .run(&cli.input, &output)
        .with_context(|| format!("process '{}'", cli.input.display()))?;

    eprintln!(
        "processed {} skipped {} failed {} ignored {} -> {}",
        report.processed,
        report.skipped,
        report.failed,
        report.ignored,
        output.display()
    );
    Ok(())
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<stampbox::StampConfig> {
    let mut cfg = match &cli.config {
        Some(path) => stampbox::StampConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => stampbox::StampConfig::default(),
    };

    if let Some(size) = cli.size {
        cfg.img_size = size;
    }
    if let Some(alpha) = cli.alpha {
        cfg.alpha = alpha;
    }
    if cli.no_watermark {
        cfg.need_watermark = false;
    }
    if cli.clean_before_add {
        cfg.clean_before_add = true;
    }
    if let Some(text) = &cli.text {
        cfg.watermark_text = text.clone();
    }
    if cli.replace {
        cfg.replace_old_file = true;
        cfg.random_naming = false;
    }
    if cli.keep_names {
        cfg.random_naming = false;
    }
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }
    Ok(cfg)
}
