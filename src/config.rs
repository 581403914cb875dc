use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Side length of the square grid.
    #[arg(long, default_value_t = 25)]
    pub grid_size: usize,

    /// Number of random walls for the generated scenario.
    #[arg(long, default_value_t = 120)]
    pub num_walls: usize,

    /// Seed for reproducible scenarios.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between rendered frames.
    #[arg(long, default_value_t = 25)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Allow diagonal movement (8-way adjacency).
    #[arg(long, default_value_t = false)]
    pub diagonal: bool,

    /// Build the grid from a road network JSON file instead of a random
    /// scenario.
    #[arg(long)]
    pub road_map: Option<String>,
}
