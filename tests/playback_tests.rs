// Integration tests for scenarios, JSON transport and playback

use algotty::algorithms::searching::SearchAlgorithm;
use algotty::algorithms::sorting::{PivotPolicy, SortAlgorithm};
use algotty::frame::{Frame, View};
use algotty::input::parse_edges;
use algotty::playback::{advance, Player, Speed};
use algotty::scenario::Scenario;
use algotty::structures::GraphAlgorithm;
use std::time::Duration;

fn frames(n: usize) -> Vec<Frame> {
    (0..n).map(|i| Frame::new(i, View::Array(vec![i as i64]))).collect()
}

#[test]
fn test_advance_clamps_to_last_frame() {
    let run = frames(5);
    let speed = Speed::new(10);
    assert_eq!(advance(&run, 0, Duration::from_millis(250), speed), 2);
    assert_eq!(advance(&run, 3, Duration::from_secs(60), speed), 4);
    assert_eq!(advance(&[], 0, Duration::from_secs(1), speed), 0);
    assert_eq!(advance(&run, 1, Duration::ZERO, speed), 1);
}

#[test]
fn test_player_autoplay_stops_at_end() {
    let mut player = Player::new(frames(3), Speed::new(10));
    player.play();
    player.tick(Duration::from_secs(5));
    assert_eq!(player.index(), 2);
    assert!(!player.is_playing());
    assert!(player.at_end());
}

#[test]
fn test_scenario_run_matches_direct_runner() {
    let scenario = Scenario::Search {
        algorithm: SearchAlgorithm::Binary,
        values: vec![1, 3, 4, 7, 9, 12, 15],
        target: 7,
    };
    let direct: Vec<Frame> = SearchAlgorithm::Binary
        .run(&[1, 3, 4, 7, 9, 12, 15], 7)
        .collect();
    assert_eq!(scenario.run().unwrap(), direct);
}

#[test]
fn test_scenario_errors_surface_before_frames() {
    let scenario = Scenario::Sort {
        algorithm: SortAlgorithm::Counting,
        values: vec![1, -2],
        pivot: PivotPolicy::Last,
    };
    assert!(scenario.run().is_err());
}

#[test]
fn test_graph_scenario_json_shape() {
    let scenario = Scenario::Graph {
        algorithm: GraphAlgorithm::Dijkstra,
        edges: parse_edges("1-2:4, 2-3:1, 1-3:7").unwrap(),
        directed: false,
        start: 1,
    };
    let run = scenario.run().unwrap();
    let last = run.last().unwrap().to_json().unwrap();
    assert_eq!(last["step"], run.len() - 1);
    assert!(last["view"]["values"].is_object());
    assert_eq!(last["data"]["final_distances"]["3"], 5);
    assert!(last["metrics"]["settled"].as_u64().unwrap() >= 3);
}

#[test]
fn test_sort_json_highlights_are_role_lists() {
    let run = SortAlgorithm::Bubble
        .run(&[2, 1], PivotPolicy::Last)
        .unwrap()
        .collect::<Vec<_>>();
    let compare = run[1].to_json().unwrap();
    assert_eq!(compare["view"]["highlights"]["compare"], serde_json::json!([0, 1]));
}
