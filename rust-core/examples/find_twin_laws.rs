/// Example listing twin laws for a few typical crystal forms
///
/// Each cell is Niggli-reduced, its lattice point group is built from two-fold
/// axes, and the operations missing from the space group are reported.
use crystal_twinning::lattice::UnitCell;
use crystal_twinning::symmetries::SpaceGroup;
use crystal_twinning::twinning::find_potential_twinning;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Potential twin laws ===\n");

    let examples = [
        ("Trigonal protein crystal", [65.0, 65.0, 120.0, 90.0, 90.0, 120.0], "P 31"),
        ("Tetragonal protein crystal", [80.0, 80.0, 110.0, 90.0, 90.0, 90.0], "P 41"),
        ("Cubic crystal", [105.0, 105.0, 105.0, 90.0, 90.0, 90.0], "I 2 3"),
        ("Pseudo-orthorhombic monoclinic", [50.0, 60.0, 70.0, 90.0, 90.3, 90.0], "P 1 21 1"),
        ("Orthorhombic crystal", [45.0, 60.0, 75.0, 90.0, 90.0, 90.0], "P 21 21 21"),
    ];

    for (i, (label, [a, b, c, alpha, beta, gamma], symbol)) in examples.iter().enumerate() {
        let cell = UnitCell::new(*a, *b, *c, *alpha, *beta, *gamma)?;
        let sg = SpaceGroup::from_symbol(symbol)?;
        println!("{}. {} ({})", i + 1, label, sg);
        println!(
            "   Cell: {} {} {} {} {} {}",
            cell.a, cell.b, cell.c, cell.alpha, cell.beta, cell.gamma
        );

        let twins = find_potential_twinning(&cell, Some(sg), 3.0, false)?;
        if twins.is_empty() {
            println!("   No twin laws\n");
            continue;
        }
        for op in &twins {
            println!("   Twin law: {:<12} ({})", op.as_hkl(), op.triplet());
        }
        println!();
    }

    Ok(())
}
