use super::*;
use crate::grammar::command::DrawCommand::{BranchEnd, BranchStart, Move, Turn};

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn zero_moves_are_skipped_but_turns_apply() {
    let cmds = [Turn(90.0), Move(0.0), Turn(-90.0), Turn(90.0), Move(5.0)];
    let mut turtle = Turtle::new(Pose::default());
    let step = turtle.next_step(&cmds, 1.0).unwrap();
    assert!(close(step.from, Point::new(0.0, 0.0)));
    assert!(close(step.to, Point::new(0.0, 5.0)));
    assert!(!step.branch_resumed);
    assert!(turtle.is_exhausted(&cmds));
    assert!(turtle.next_step(&cmds, 1.0).is_none());
}

#[test]
fn scale_applies_to_distance() {
    let cmds = [Move(4.0)];
    let mut turtle = Turtle::new(Pose::new(10.0, 10.0, 0.0));
    let step = turtle.next_step(&cmds, 2.5).unwrap();
    assert!(close(step.to, Point::new(20.0, 10.0)));
}

#[test]
fn branch_end_restores_pushed_pose() {
    let cmds = [
        Move(1.0),
        BranchStart,
        Turn(90.0),
        Move(1.0),
        BranchEnd,
        Move(1.0),
    ];
    let mut turtle = Turtle::new(Pose::default());
    let a = turtle.next_step(&cmds, 1.0).unwrap();
    let b = turtle.next_step(&cmds, 1.0).unwrap();
    let c = turtle.next_step(&cmds, 1.0).unwrap();

    assert!(close(a.to, Point::new(1.0, 0.0)));
    assert!(close(b.to, Point::new(1.0, 1.0)));
    assert!(c.branch_resumed);
    assert!(close(c.from, Point::new(1.0, 0.0)));
    assert!(close(c.to, Point::new(2.0, 0.0)));
    assert_eq!(turtle.pose().angle, 0.0);
}

#[test]
fn balanced_branches_leave_empty_stack() {
    let cmds = [
        BranchStart,
        Move(1.0),
        BranchStart,
        Turn(30.0),
        Move(1.0),
        BranchEnd,
        BranchEnd,
        BranchStart,
        Move(2.0),
        BranchEnd,
    ];
    let mut turtle = Turtle::new(Pose::default());
    while turtle.next_step(&cmds, 1.0).is_some() {}
    assert_eq!(turtle.pushes(), 3);
    assert_eq!(turtle.pops(), 3);
    assert_eq!(turtle.stack_depth(), 0);
    assert!(turtle.warnings().is_empty());
}

#[test]
fn unmatched_branch_end_warns_and_keeps_pose() {
    let cmds = [BranchEnd];
    let start = Pose::new(3.0, 4.0, 15.0);
    let mut turtle = Turtle::new(start);
    assert!(turtle.next_step(&cmds, 1.0).is_none());
    assert_eq!(turtle.pose(), start);
    assert_eq!(
        turtle.warnings(),
        &[TraversalWarning::UnmatchedBranchEnd { index: 0 }]
    );
}

#[test]
fn reset_returns_to_start() {
    let cmds = [BranchStart, Move(1.0), BranchEnd, BranchEnd];
    let mut turtle = Turtle::new(Pose::default());
    while turtle.next_step(&cmds, 1.0).is_some() {}
    assert!(turtle.is_exhausted(&cmds));
    assert_eq!(turtle.warnings().len(), 1);

    turtle.reset();
    assert_eq!(turtle.cursor(), 0);
    assert_eq!(turtle.pose(), Pose::default());
    assert!(turtle.warnings().is_empty());
    assert_eq!(turtle.pushes(), 0);
}

#[test]
fn silent_turtle_still_counts_warnings_each_pass() {
    let cmds = [Move(1.0), BranchEnd, Move(1.0)];
    let mut turtle = Turtle::silent(Pose::default());
    assert!(!turtle.reports_warnings());
    assert!(Turtle::new(Pose::default()).reports_warnings());

    for _ in 0..2 {
        turtle.reset();
        while turtle.next_step(&cmds, 1.0).is_some() {}
        assert_eq!(
            turtle.warnings(),
            &[TraversalWarning::UnmatchedBranchEnd { index: 1 }]
        );
        assert!(!turtle.reports_warnings());
    }
}
