//! Truss Solver Example - Braced Cantilever

use anyhow::Result;
use truss_solver::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Truss Solver Example: Braced Cantilever ===\n");

    // Two wall anchors carrying a loaded tip through a tie and a strut
    //
    //     B
    //     |\
    //     | \
    //     A--C  <- 10 kN downward at C
    //
    let nodes = vec![
        Node::new("A", 0.0, 0.0).with_support(Support::fixed()),
        Node::new("B", 0.0, 3.0).with_support(Support::fixed()),
        Node::new("C", 4.0, 0.0).with_load(NodeLoad::fy(-10_000.0)),
    ];

    // 50 cm² steel sections
    let members = vec![
        Member::new("A-C", "A", "C", 0.005, 200e9),
        Member::new("B-C", "B", "C", 0.005, 200e9),
    ];

    let model = TrussModel::new(nodes, members)?;
    let results = model.analyze()?;

    println!("Node Displacements:");
    for node in model.nodes() {
        let disp = results.displacement(&node.id).unwrap();
        println!(
            "  {}: DX={:.4}mm, DY={:.4}mm",
            node.id,
            disp.dx * 1000.0,
            disp.dy * 1000.0
        );
    }

    println!("\nSupport Reactions:");
    for node in model.nodes().iter().filter(|n| n.support.is_supported()) {
        let rxn = results.reaction(&node.id).unwrap();
        println!(
            "  {}: RX={:.2}kN, RY={:.2}kN",
            node.id,
            rxn.rx / 1000.0,
            rxn.ry / 1000.0
        );
    }

    println!("\nMember Forces:");
    for force in &results.member_forces {
        let state = if force.axial >= 0.0 { "tension" } else { "compression" };
        println!(
            "  {}: P={:.2}kN ({})",
            force.member,
            force.axial / 1000.0,
            state
        );
    }

    println!(
        "\nMax displacement: {:.4}mm",
        results.max_displacement * 1000.0
    );

    println!("\n=== Analysis Complete ===");
    Ok(())
}
