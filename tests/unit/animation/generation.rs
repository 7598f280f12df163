use super::*;
use crate::grammar::catalogue::{self, GrammarDescription};

static BROKEN: GrammarDescription = GrammarDescription {
    name: "broken",
    rules: &["f::10", "l:+fq-:0"],
    seed: "l",
    iterations: 2,
    turn_angle: 90.0,
};

fn request(desc: &'static GrammarDescription) -> GrammarRequest {
    GrammarRequest {
        description: desc,
        seed: desc.seed.to_string(),
        iterations: desc.iterations,
        turn_angle: desc.turn_angle,
    }
}

#[test]
fn generate_produces_layout_for_hilbert() {
    let desc = catalogue::get("hilbert").unwrap();
    let out = generate(&request(desc), &Viewport::reference(500.0)).unwrap();
    assert_eq!(out.commands.count_drawing_moves(), 4usize.pow(5) - 1);
    assert!(out.layout.scale > 0.0);
}

#[test]
fn background_task_matches_synchronous_run() {
    let desc = catalogue::get("tree").unwrap();
    let vp = Viewport::reference(400.0);
    let latest = Arc::new(AtomicU64::new(7));
    let task = GenerationTask::spawn(request(desc), vp, 7, latest);
    assert_eq!(task.version(), 7);

    let background = task.wait().unwrap();
    let direct = generate(&request(desc), &vp).unwrap();
    assert_eq!(background.commands, direct.commands);
    assert_eq!(background.layout, direct.layout);
}

#[test]
fn unknown_rule_surfaces_as_config_error() {
    let latest = Arc::new(AtomicU64::new(1));
    let task = GenerationTask::spawn(request(&BROKEN), Viewport::reference(300.0), 1, latest);
    let err = task.wait().unwrap_err();
    assert!(err.is_config());
}

#[test]
fn superseded_worker_sends_nothing() {
    let desc = catalogue::get("koch").unwrap();
    let latest = Arc::new(AtomicU64::new(2));
    let task = GenerationTask::spawn(request(desc), Viewport::reference(300.0), 1, latest);
    assert!(task.wait().is_err());
}

#[test]
fn superseded_worker_abandons_long_expansion() {
    let desc = catalogue::get("hilbert").unwrap();
    let huge = GrammarRequest {
        iterations: 13,
        ..request(desc)
    };
    let latest = Arc::new(AtomicU64::new(1));
    let task = GenerationTask::spawn(huge, Viewport::reference(300.0), 1, Arc::clone(&latest));

    let start = std::time::Instant::now();
    latest.store(2, Ordering::Release);
    assert!(task.wait().is_err());
    // A finished depth-13 Hilbert run is tens of millions of commands.
    assert!(
        start.elapsed() < std::time::Duration::from_secs(1),
        "stale worker took {:?}",
        start.elapsed()
    );
}
