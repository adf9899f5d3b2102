use tatter::{
    BreakCause, Cloth, GridConfig, Interaction, SolverConfig, StepObserver, Vec2,
};

#[derive(Debug, PartialEq)]
enum Event {
    Integrate,
    Iteration(usize),
    Broken(usize, BreakCause),
    Complete,
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl StepObserver for Recorder {
    fn on_integrate(&mut self) { self.events.push(Event::Integrate); }
    fn on_constraint_iteration(&mut self, i: usize) { self.events.push(Event::Iteration(i)); }
    fn on_constraint_broken(&mut self, index: usize, cause: BreakCause) {
        self.events.push(Event::Broken(index, cause));
    }
    fn on_step_complete(&mut self) { self.events.push(Event::Complete); }
}

/// Spacing equal to the rest length: the cloth only sags under gravity.
fn calm_cloth(cols: usize, rows: usize) -> Cloth {
    let grid = GridConfig::new(cols, rows).with_spacing(Vec2::new(20.0, 20.0));
    Cloth::new(grid, SolverConfig::default()).unwrap()
}

#[test]
fn tick_walks_integrate_then_every_pass() {
    let mut cloth = calm_cloth(4, 4);
    let mut recorder = Recorder::default();
    cloth.tick_observed(Interaction::idle(), &mut recorder);

    let mut expected = vec![Event::Integrate];
    expected.extend((0..6).map(Event::Iteration));
    expected.push(Event::Complete);
    assert_eq!(recorder.events, expected);
}

#[test]
fn cut_reports_the_severed_constraint() {
    let mut cloth = calm_cloth(5, 4);
    // Horizontal constraint between (1,2) and (2,2): index 2 * 4 + 1.
    let target = 2 * (cloth.cols() - 1) + 1;
    let c = &cloth.constraints()[target];
    let mid = cloth.particles()[c.a].pos.midpoint(cloth.particles()[c.b].pos);

    let mut recorder = Recorder::default();
    cloth.tick_observed(Interaction::cut_at(mid), &mut recorder);

    assert!(!cloth.constraints()[target].active);
    assert!(recorder.events.contains(&Event::Broken(target, BreakCause::Cut)));
    // the top row is far from the cursor
    for c in &cloth.constraints()[..cloth.cols() - 1] {
        assert!(c.active);
    }
}

#[test]
fn snapshot_lists_only_active_segments() {
    let mut cloth = calm_cloth(6, 6);
    let cursor = cloth.position_at(3, 3);
    let snapshot = cloth.tick(Interaction::cut_at(cursor));
    let segments = snapshot.segments().count();
    let positions = snapshot.positions().count();

    assert_eq!(positions, 36);
    assert_eq!(segments, cloth.active_constraint_count());
    assert!(segments < cloth.constraint_count(), "cut should have removed something");
}

#[test]
fn snapshot_segments_use_current_positions() {
    let mut cloth = calm_cloth(3, 3);
    let snapshot = cloth.tick(Interaction::idle());
    let particles = snapshot.particles();
    for ((from, to), c) in snapshot.segments().zip(snapshot.constraints()) {
        assert_eq!(from, particles[c.a].pos);
        assert_eq!(to, particles[c.b].pos);
    }
}

#[test]
fn deactivation_is_monotone_across_ticks() {
    let mut cloth = Cloth::new(GridConfig::for_viewport(1600.0), SolverConfig::default()).unwrap();
    let mut was_active: Vec<bool> = cloth.constraints().iter().map(|c| c.active).collect();

    for t in 0..240 {
        let input = if t < 120 {
            // sweep a cut through the middle rows
            Interaction::cut_at(Vec2::new(300.0 + 8.0 * t as f64, 400.0))
        } else {
            Interaction::idle()
        };
        cloth.tick(input);
        for (i, c) in cloth.constraints().iter().enumerate() {
            assert!(was_active[i] || !c.active, "constraint {} reactivated at tick {}", i, t);
            was_active[i] = c.active;
        }
    }
    assert!(cloth.active_constraint_count() < cloth.constraint_count());
}

#[test]
fn hanging_cloth_drops_but_top_row_holds() {
    let mut cloth = calm_cloth(8, 8);
    let top: Vec<Vec2> = (0..8).map(|col| cloth.position_at(col, 0)).collect();
    let bottom: Vec<Vec2> = (0..8).map(|col| cloth.position_at(col, 7)).collect();

    for _ in 0..120 {
        cloth.tick(Interaction::idle());
    }

    for col in 0..8 {
        assert_eq!(cloth.position_at(col, 0), top[col], "top row col {} moved", col);
        assert!(
            cloth.position_at(col, 7).y > bottom[col].y,
            "bottom row col {} should sag (y grows downward)",
            col,
        );
    }
    assert_eq!(cloth.active_constraint_count(), cloth.constraint_count(), "gravity alone should not tear");
}

#[test]
fn quit_request_is_ignored() {
    let mut a = calm_cloth(4, 4);
    let mut b = calm_cloth(4, 4);
    a.tick(Interaction::idle());
    b.tick(Interaction { quit_requested: true, ..Interaction::idle() });
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn dragging_past_break_length_tears_from_the_pins() {
    let grid = GridConfig::new(6, 6).with_spacing(Vec2::new(20.0, 20.0));
    let config = SolverConfig::default().with_drag_radius(1_000.0);
    let mut cloth = Cloth::new(grid, config).unwrap();

    // Every free particle is grabbed and yanked 400 units below the pins.
    cloth.tick(Interaction::drag_at(Vec2::new(60.0, 400.0)));

    let horizontal = (cloth.cols() - 1) * cloth.rows();
    for (i, c) in cloth.constraints()[horizontal..horizontal + cloth.cols()].iter().enumerate() {
        assert!(!c.active, "pin constraint {} should have snapped", i);
    }
    for c in &cloth.constraints()[..cloth.cols() - 1] {
        assert!(c.active, "constraints between pins never stretch");
    }
}
