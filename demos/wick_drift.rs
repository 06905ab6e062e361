//! Watch the Wick drift breathe the projected E₈ lattice.
//!
//! Each root's coordinates are scaled by 1 + sin(t + idx)·wick·0.4, so the
//! projected cloud swells and contracts unevenly as universe time advances.

use exceptional_lattice::prelude::*;

fn radius(nodes: &[Node2D]) -> (f64, f64) {
    let r: Vec<f64> = nodes.iter().map(|n| n.x.hypot(n.y)).collect();
    let mean = r.iter().sum::<f64>() / r.len() as f64;
    let max = r.iter().cloned().fold(0.0, f64::max);
    (mean, max)
}

fn main() {
    env_logger::init();

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            Wick Drift of the E₈ Projection          ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    for wick in [0.0, 0.5, 1.0] {
        let mut session = ExplorerSession::new(&ExplorerConfig {
            wick_rotation: wick,
            auto_rotate: true,
            ..Default::default()
        });

        println!("━━━ wick = {:.1} ━━━", wick);
        println!("  {:>6}  {:>10}  {:>10}  {:>10}", "t", "angle", "mean |r|", "max |r|");
        println!("  {:─>6}  {:─>10}  {:─>10}  {:─>10}", "", "", "", "");
        for step in 0..8 {
            let t = step as f64 * 0.5;
            session.params_mut().universe_time = t;
            let (mean, max) = radius(&session.frame_nodes());
            println!(
                "  {:>6.2}  {:>10.5}  {:>10.4}  {:>10.4}",
                t,
                session.params().angle,
                mean,
                max
            );
            session.tick();
        }
        println!();
    }
}
