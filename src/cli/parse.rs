use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::{
    constants::DEFAULT_BINS,
    sampler::{LcgParams, Transform},
    transform::{inverse_exponential, inverse_logistic},
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "lcg-hist",
    about = "LCG sampling with high-resolution braille histograms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render one static histogram of LCG samples
    Hist(HistArgs),
    /// Animated histogram that fills as samples stream in
    Watch(WatchArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Inverse CDF applied to each uniform sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TransformKind {
    /// Raw uniform samples
    None,
    /// Logistic inverse CDF, -ln(1/x - 1)
    Logistic,
    /// Exponential inverse CDF, -ln(x)
    Exponential,
}

impl TransformKind {
    pub(crate) fn as_fn(self) -> Option<Transform> {
        match self {
            Self::None => None,
            Self::Logistic => Some(inverse_logistic),
            Self::Exponential => Some(inverse_exponential),
        }
    }

    pub(crate) fn default_title(self) -> &'static str {
        match self {
            Self::None => "Uniform LCG Samples",
            Self::Logistic => "Logistic Inverse CDF",
            Self::Exponential => "Exponential Inverse CDF",
        }
    }
}

/// Recurrence parameters shared by `hist` and `watch`.
#[derive(Args, Debug)]
pub struct SamplerArgs {
    #[arg(long, default_value_t = 4321)]
    pub seed: u64,
    #[arg(long, default_value_t = 7829)]
    pub modulus: u64,
    #[arg(long, default_value_t = 378)]
    pub multiplier: u64,
    #[arg(long, default_value_t = 2310)]
    pub increment: u64,

    #[arg(short = 'x', long, value_enum, default_value_t = TransformKind::None)]
    pub transform: TransformKind,
}

impl SamplerArgs {
    pub(crate) fn params(&self) -> LcgParams {
        LcgParams {
            seed: self.seed,
            modulus: self.modulus,
            multiplier: self.multiplier,
            increment: self.increment,
        }
    }
}

/// `lcg-hist hist …`
#[derive(Parser, Debug)]
pub struct HistArgs {
    #[command(flatten)]
    pub sampler: SamplerArgs,

    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Use the coarse 20-bin layout instead of --bins
    #[arg(long)]
    pub coarse: bool,

    /// Eager mode: collect every distinct state first and normalize by the
    /// largest one (instead of streaming and dividing by modulus - 1)
    #[arg(long)]
    pub batch: bool,

    /// Graph title (derived from the transform if omitted)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Optional subtitle
    #[arg(short, long)]
    pub subtitle: Option<String>,

    /// Color (name or `#RRGGBB`)
    #[arg(long, default_value = "steel")]
    pub color: String,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `lcg-hist watch …`
#[derive(Parser, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub sampler: SamplerArgs,

    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Samples consumed per rendered frame
    #[arg(long, default_value_t = 32)]
    pub per_frame: usize,

    #[arg(long, default_value_t = 60)]
    pub fps: u64,

    #[arg(long, default_value = "steel")]
    pub color: String,

    #[arg(long, help = "Emit timing diagnostics")]
    pub debug: bool,
}
