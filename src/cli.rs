use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Interval multiset in EDO steps, e.g. "11,7,16"
    #[arg(value_name = "INTERVALS")]
    pub intervals: String,

    /// Register window sizes in octaves, comma-separated
    #[arg(long, default_value = "3")]
    pub octaves: String,

    /// EDO size (steps per octave, overrides config)
    #[arg(long)]
    pub edo: Option<u32>,

    /// Placement engine: v1|uniform, v2|prefix-slack, prefix-dominance, repulsion
    #[arg(long)]
    pub mode: Option<String>,

    /// Odd-interval tie-break per column, e.g. "up,down,up"
    #[arg(long)]
    pub odd_bias: Option<String>,

    /// Path to config TOML
    #[arg(long, default_value = "tensura.toml")]
    pub config: String,

    /// Emit full result records as JSON instead of the ranked table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show only the best N orderings per window in table output
    #[arg(long, default_value_t = 8)]
    pub top: usize,
}
