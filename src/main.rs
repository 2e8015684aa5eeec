//! Run the reference setup:
//!
//! 1. Circle and its Joukowski image
//! 2. Streamfunction around the circle for Gamma = 0 and Gamma = -3
//! 3. Same streamfunction mapped to the airfoil plane
//!
//! cargo run --release
//!
//! Set `RUST_LOG=debug` for details.
use joukowski::config::Setup;
use joukowski::panels::{Plane, ShapePanel, StreamPanel, DEFAULT_LEVELS};
use log::{error, info};

const CIRCULATIONS: [f64; 2] = [0., -3.];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(&Setup::default()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(setup: &Setup) -> joukowski::Result<()> {
    let shape = ShapePanel::new(&setup.flow, setup.n_boundary)?;
    info!(
        "Circle with R = {:1.2} around {}: {} points, chord of transformed circle {:.4}",
        shape.radius,
        setup.flow.center,
        shape.circle.len(),
        shape.chord()
    );

    for plane in [Plane::Circle, Plane::Airfoil] {
        for panel in StreamPanel::for_circulations(setup, &CIRCULATIONS, plane)? {
            let levels = panel.levels(DEFAULT_LEVELS);
            match panel.range() {
                Some((min, max)) => info!(
                    "psi for Gamma = {} ({} plane): grid {:?}, range [{:.4}, {:.4}], {} levels",
                    panel.circulation,
                    panel.plane,
                    panel.grid.shape(),
                    min,
                    max,
                    levels.len()
                ),
                None => info!(
                    "psi for Gamma = {} ({} plane): no finite values",
                    panel.circulation, panel.plane
                ),
            }
        }
    }
    Ok(())
}
