use interactive_pathfinding::algorithms::a_star::search;
use interactive_pathfinding::algorithms::common::{manhattan, SearchControl, SearchResult};
use interactive_pathfinding::grid::{Adjacency, CellState, Grid, Position};
use interactive_pathfinding::road_network::{RoadNetwork, RoadNode};
use interactive_pathfinding::scenario::Scenario;
use interactive_pathfinding::stats::reference_optimal_length;

fn run_silent(grid: &mut Grid) -> SearchResult {
    let start = grid.start().expect("start designated");
    let end = grid.end().expect("end designated");
    search(grid, start, end, manhattan, |_| SearchControl::Continue)
}

fn assert_orthogonal_steps(path: &[Position]) {
    for pair in path.windows(2) {
        let dr = (pair[0].row as i32 - pair[1].row as i32).abs();
        let dc = (pair[0].col as i32 - pair[1].col as i32).abs();
        assert_eq!(dr + dc, 1, "non-adjacent step {:?}", pair);
    }
}

#[test]
fn corner_to_corner_matches_manhattan_distance() {
    let mut grid = Grid::new(5, Adjacency::Orthogonal);
    grid.designate_start(Position::new(0, 0));
    grid.designate_end(Position::new(4, 4));
    grid.recompute_all_neighbors();

    match run_silent(&mut grid) {
        SearchResult::Found(path) => {
            assert_eq!(path.len() - 1, 8);
            assert_orthogonal_steps(&path);
        }
        other => panic!("expected a path, got {:?}", other),
    }
}

#[test]
fn engine_agrees_with_the_reference_solver() {
    let scenario = Scenario::generate(15, 60, Adjacency::Orthogonal, Some(1234));
    let mut grid = scenario.grid;
    let expected = reference_optimal_length(&grid, scenario.start, scenario.end);

    match run_silent(&mut grid) {
        SearchResult::Found(path) => {
            assert_eq!(Some(path.len() - 1), expected);
            assert_orthogonal_steps(&path);
        }
        SearchResult::Exhausted => assert_eq!(expected, None),
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn exhausted_search_leaves_the_exploration_visible() {
    let mut grid = Grid::new(6, Adjacency::Orthogonal);
    grid.designate_start(Position::new(0, 0));
    grid.designate_end(Position::new(5, 5));
    // Box the end cell in completely.
    grid.toggle_wall(Position::new(4, 5));
    grid.toggle_wall(Position::new(4, 4));
    grid.toggle_wall(Position::new(5, 4));
    grid.recompute_all_neighbors();

    assert_eq!(run_silent(&mut grid), SearchResult::Exhausted);
    // Everything reachable was explored and stays marked.
    assert_eq!(grid.count(CellState::Closed), 6 * 6 - 3 - 1 - 1);
    assert_eq!(grid.state_at(Position::new(0, 0)), CellState::Start);
}

#[test]
fn rerunning_an_identical_scenario_reproduces_the_search() {
    let run_traced = || {
        let scenario = Scenario::generate(12, 50, Adjacency::Orthogonal, Some(99));
        let mut grid = scenario.grid;
        let mut trace = Vec::new();
        let result = search(&mut grid, scenario.start, scenario.end, manhattan, |g| {
            trace.push((g.count(CellState::Open), g.count(CellState::Closed)));
            SearchControl::Continue
        });
        (result, trace)
    };

    let (first, first_trace) = run_traced();
    let (second, second_trace) = run_traced();
    assert_eq!(first, second);
    assert_eq!(first_trace, second_trace);
}

#[test]
fn search_over_a_carved_road_network() {
    // A ring of four nodes; corridors follow the grid borders.
    let network = RoadNetwork {
        nodes: vec![
            RoadNode { id: 10, x: 0.0, y: 0.0 },
            RoadNode { id: 11, x: 9.0, y: 0.0 },
            RoadNode { id: 12, x: 9.0, y: 9.0 },
            RoadNode { id: 13, x: 0.0, y: 9.0 },
        ],
        edges: vec![(10, 11), (11, 12), (12, 13), (13, 10)],
    };
    let (mut grid, positions) = network.rasterize(10, Adjacency::Orthogonal).unwrap();

    grid.designate_start(positions[&10]);
    grid.designate_end(positions[&12]);

    match run_silent(&mut grid) {
        SearchResult::Found(path) => {
            assert_orthogonal_steps(&path);
            // Shortest route around the ring: along two borders.
            assert_eq!(path.len() - 1, 18);
        }
        other => panic!("expected a path through the corridors, got {:?}", other),
    }
}

#[test]
fn wall_edits_between_runs_change_the_outcome() {
    let mut grid = Grid::new(5, Adjacency::Orthogonal);
    grid.designate_start(Position::new(0, 0));
    grid.designate_end(Position::new(0, 4));
    grid.recompute_all_neighbors();

    match run_silent(&mut grid) {
        SearchResult::Found(path) => assert_eq!(path.len() - 1, 4),
        other => panic!("expected a path, got {:?}", other),
    }

    // Edit phase: rebuild the board, cut the direct row, re-search.
    grid.reset();
    grid.designate_start(Position::new(0, 0));
    grid.designate_end(Position::new(0, 4));
    for row in 0..4 {
        grid.toggle_wall(Position::new(row, 2));
    }
    grid.recompute_all_neighbors();

    match run_silent(&mut grid) {
        SearchResult::Found(path) => {
            assert!(path.contains(&Position::new(4, 2)), "path must use the gap");
            assert_eq!(path.len() - 1, 12);
        }
        other => panic!("expected a detour path, got {:?}", other),
    }
}
