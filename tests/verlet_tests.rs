use tatter::solver;
use tatter::{Cloth, GridConfig, Interaction, Particle, SolverConfig, Vec2};

fn hanging_cloth() -> Cloth {
    Cloth::new(GridConfig::for_viewport(1600.0), SolverConfig::default()).unwrap()
}

#[test]
fn pinned_particles_are_bit_identical_across_ticks() {
    let mut cloth = hanging_cloth();
    let before: Vec<Particle> = cloth.particles().iter().filter(|p| p.pinned).cloned().collect();
    assert_eq!(before.len(), cloth.cols());

    for _ in 0..200 {
        cloth.tick(Interaction::idle());
    }

    let after: Vec<Particle> = cloth.particles().iter().filter(|p| p.pinned).cloned().collect();
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.pos.x.to_bits(), a.pos.x.to_bits());
        assert_eq!(b.pos.y.to_bits(), a.pos.y.to_bits());
        assert_eq!(b.prev_pos.x.to_bits(), a.prev_pos.x.to_bits());
        assert_eq!(b.prev_pos.y.to_bits(), a.prev_pos.y.to_bits());
    }
}

#[test]
fn implied_velocity_is_clamped_after_integration() {
    let mut cloth = hanging_cloth();
    let config = cloth.solver_config().clone();

    // Sweep a drag quickly across the cloth so dragged particles try to jump
    // further than the clamp allows.
    let start = cloth.position_at(20, 10);
    for t in 0..120 {
        let cursor = start + Vec2::new(25.0 * t as f64, 0.0);
        let input = Interaction::drag_at(cursor);

        let mut integrated = cloth.particles().to_vec();
        solver::integrate(&mut integrated, &input, &config);
        for p in integrated.iter().filter(|p| !p.pinned) {
            let v = p.velocity_raw();
            // tolerance covers rounding in (prev + v) - prev
            assert!(v.x.abs() <= config.velocity_clamp + 1e-9, "vx {} exceeds clamp", v.x);
            // gravity lands on y after the clamp
            assert!((v.y - config.gravity).abs() <= config.velocity_clamp + 1e-9, "vy {} exceeds clamp", v.y);
        }

        cloth.tick(input);
    }
}

#[test]
fn drag_snaps_particle_onto_cursor() {
    let config = SolverConfig::default();
    let mut particles = vec![Particle::with_prev(Vec2::new(100.0, 100.0), Vec2::new(98.0, 101.0))];
    let cursor = Vec2::new(110.0, 95.0);

    solver::integrate(&mut particles, &Interaction::drag_at(cursor), &config);

    // The snap happens before the velocity step, so the cursor becomes the
    // previous position and the jump is carried as velocity.
    assert_eq!(particles[0].prev_pos, cursor);
    let expected_vx = ((110.0 - 98.0) * 0.99f64).clamp(-20.0, 20.0);
    let expected_vy = ((95.0 - 101.0) * 0.99f64).clamp(-20.0, 20.0);
    assert_eq!(particles[0].pos.x, cursor.x + expected_vx);
    assert_eq!(particles[0].pos.y, cursor.y + (expected_vy + 0.4));
}

#[test]
fn dragged_cloth_follows_cursor() {
    // Spacing equal to the rest length, so only gravity moves the cloth.
    let grid = GridConfig::default().with_spacing(Vec2::new(20.0, 20.0));
    let mut cloth = Cloth::new(grid, SolverConfig::default()).unwrap();
    let grabbed = cloth.index(25, 15);
    let start = cloth.particles()[grabbed].pos;
    let target = start + Vec2::new(40.0, 10.0);

    // Creep the cursor toward the target so the particle stays in range.
    for t in 1..=40 {
        let cursor = start + (target - start).scale(t as f64 / 40.0);
        cloth.tick(Interaction::drag_at(cursor));
    }
    for _ in 0..5 {
        cloth.tick(Interaction::drag_at(target));
    }

    let pos = cloth.particles()[grabbed].pos;
    assert!(
        pos.distance(target) < start.distance(target),
        "dragged particle should end closer to the cursor: start {:?}, end {:?}",
        start,
        pos,
    );
}

#[test]
fn free_fall_accumulates_gravity() {
    let config = SolverConfig::default().with_damping(1.0);
    let mut particles = vec![Particle::new(Vec2::new(0.0, 0.0))];
    for _ in 0..10 {
        solver::integrate(&mut particles, &Interaction::idle(), &config);
    }
    // Displacement after n ticks is g * n(n+1)/2.
    let expected = 0.4 * 55.0;
    assert!((particles[0].pos.y - expected).abs() < 1e-9, "y = {}", particles[0].pos.y);
    assert_eq!(particles[0].pos.x, 0.0);
}
