//! Follow a chain of decays through the E₈ root system.
//!
//! Shows:
//! 1. A root splitting into β + γ
//! 2. The γ product decaying in turn
//! 3. Where each product lands under the Petrie projection

use exceptional_lattice::prelude::*;

const GENERATIONS: usize = 6;

fn main() {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║         E₈ Decay Cascade · α → β + γ → …           ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    for group in [LieGroupType::E8, LieGroupType::F4] {
        cascade(group, 0);
        println!();
    }
}

fn cascade(group: LieGroupType, start: usize) {
    println!("═══ {} starting at node {} ═══", group, start);
    println!();

    let mut session = ExplorerSession::new(&ExplorerConfig {
        group,
        ..Default::default()
    });
    let mut current = start;

    for generation in 0..GENERATIONS {
        if let Err(e) = session.select(current) {
            println!("  stopped: {}", e);
            return;
        }
        let Some(event) = session.decay_selected() else {
            println!("  {:>2}: node {} has no decay channel", generation, current);
            return;
        };
        let [beta, gamma] = event.interaction.children;
        println!(
            "  {:>2}: {} → {} + {}",
            generation, event.interaction.parent, beta, gamma
        );
        println!(
            "      screen ({:+.3}, {:+.3}) → γ at ({:+.3}, {:+.3}), {:?} line",
            event.parent_position.x,
            event.parent_position.y,
            event.child_positions[1].x,
            event.child_positions[1].y,
            gamma.category.propagator_style()
        );

        // Continue with γ if it is itself a node of the system.
        match session.roots().iter().position(|r| r.approx_eq(&gamma)) {
            Some(next) => current = next,
            None => {
                println!("      γ is not a root of {}, cascade ends", group);
                return;
            }
        }
    }
}
