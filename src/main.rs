use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use interactive_pathfinding::algorithms::a_star::search;
use interactive_pathfinding::algorithms::common::{manhattan, SearchResult};
use interactive_pathfinding::config::Config;
use interactive_pathfinding::grid::{Adjacency, Grid, Position};
use interactive_pathfinding::render::TerminalRenderer;
use interactive_pathfinding::road_network::RoadNetwork;
use interactive_pathfinding::scenario::Scenario;
use interactive_pathfinding::stats::SearchReport;

fn main() {
    env_logger::init();
    let config = Config::parse();

    if config.grid_size < 5 {
        eprintln!("grid size must be at least 5");
        std::process::exit(1);
    }

    let adjacency = if config.diagonal {
        Adjacency::Diagonal
    } else {
        Adjacency::Orthogonal
    };

    println!("Starting shortest path visualization...");
    println!("Grid size: {}x{}", config.grid_size, config.grid_size);
    println!(
        "Adjacency: {}",
        if config.diagonal { "orthogonal + diagonal" } else { "orthogonal" }
    );
    if config.no_visualization {
        println!("Visualization disabled - running in fast mode");
    } else {
        println!("Visualization enabled with {}ms delay", config.delay_ms);
    }
    println!();

    let (mut grid, start, end) = match build_grid(&config, adjacency) {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut renderer = TerminalRenderer::new(config.delay_ms, !config.no_visualization);
    let search_start = Instant::now();
    let result = search(&mut grid, start, end, manhattan, |g| renderer.frame(g));
    let elapsed = search_start.elapsed();

    println!("\n=== SEARCH COMPLETE ===");
    match &result {
        SearchResult::Found(_) => println!("SUCCESS: path found from {} to {}", start, end),
        SearchResult::Exhausted => println!("FAILED: no path exists with the current walls"),
        SearchResult::Interrupted => println!("INTERRUPTED: search abandoned"),
    }
    renderer.draw(&grid);

    let report = SearchReport::new(&grid, &result, start, end, renderer.frames(), elapsed);
    println!("{}", report);
}

fn build_grid(config: &Config, adjacency: Adjacency) -> Result<(Grid, Position, Position), String> {
    if let Some(path) = &config.road_map {
        let network = RoadNetwork::load(path)?;
        let (mut grid, positions) = network.rasterize(config.grid_size, adjacency)?;

        // Deterministic node order so a fixed seed picks the same endpoints.
        let mut nodes: Vec<(i64, Position)> = positions.into_iter().collect();
        nodes.sort();
        let (start, end) = pick_endpoints(&nodes, config.seed)?;

        grid.designate_start(start);
        grid.designate_end(end);
        println!("Road map: {} ({} mapped nodes)", path, nodes.len());
        Ok((grid, start, end))
    } else {
        println!("Random scenario: {} walls", config.num_walls);
        let scenario = Scenario::generate(config.grid_size, config.num_walls, adjacency, config.seed);
        Ok((scenario.grid, scenario.start, scenario.end))
    }
}

fn pick_endpoints(
    nodes: &[(i64, Position)],
    seed: Option<u64>,
) -> Result<(Position, Position), String> {
    if nodes.len() < 2 {
        return Err("road network needs at least two mapped nodes".to_string());
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = nodes[rng.gen_range(0..nodes.len())].1;
    // Nearby nodes can project onto the same cell, so retry a bounded number
    // of times before giving up.
    for _ in 0..nodes.len() * 3 {
        let end = nodes[rng.gen_range(0..nodes.len())].1;
        if end != start {
            return Ok((start, end));
        }
    }
    Err("all road network nodes project onto a single cell".to_string())
}
