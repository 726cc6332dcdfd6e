/// Example walking through the three generation stages
///
/// A unit cell is built for a few common chiralities, stacked into a ribbon and
/// rolled into a tube. Run with `RUST_LOG=debug` to see the generator's logs.
use tubegen::{BoundaryCondition, Chirality, Dimension, TubeConfig, TubeGen, generate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Nanotube unit cells ===\n");
    for (n, m) in [(5, 5), (9, 0), (6, 5)] {
        let generator = TubeGen::new(Chirality::new(n, m)?, 1.42)?;
        println!("{}\n", generator);
    }

    println!("=== A (6, 5) tube, open at both ends ===\n");
    let generator = TubeGen::new(Chirality::new(6, 5)?, 1.42)?;
    let ribbon = generator.make_ribbon(2, BoundaryCondition::Periodic, BoundaryCondition::Open)?;
    println!(
        "   Ribbon: {} sites, degrees {}..={}",
        ribbon.len(),
        ribbon.min_degree().unwrap_or(0),
        ribbon.max_degree().unwrap_or(0)
    );
    let tube = generator.roll_tube(&ribbon);
    let z_max = tube.iter().map(|site| site.pos.z).fold(f64::MIN, f64::max);
    println!(
        "   Tube:   {} sites on radius {:.3}, {:.3} long\n",
        tube.len(),
        generator.radius(),
        z_max
    );

    println!("=== Same structure through the configuration ===\n");
    let config = TubeConfig::new(Chirality::new(6, 5)?, 2)
        .with_boundary_conditions(BoundaryCondition::Periodic, BoundaryCondition::Open)
        .with_embedding(Dimension::_3D)
        .with_spacing(1.42);
    let structure = generate(&config)?;
    println!("   {} with {} sites", structure.name(), structure.len());

    Ok(())
}
