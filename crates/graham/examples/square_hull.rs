//! Print the hull of a small point set and of a replayable random cloud.
//!
//! Usage:
//!   cargo run -p graham --example square_hull
//!   cargo run -p graham --example square_hull -- 500

use graham::prelude::*;

fn main() -> Result<(), HullError> {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);

    let square = [(0.0, 0.0), (4.0, 0.0), (2.0, 0.0), (4.0, 4.0), (0.0, 4.0), (1.0, 3.0)];
    let set = PointSet::from_coords(&square)?;
    println!("pivot: {}", set.pivot());
    for p in set.hull() {
        println!("  {p}");
    }

    let cfg = CloudCfg {
        count: PointCount::Fixed(n),
        region: Region::Disk { radius: 1.0 },
        grid_step: None,
    };
    let cloud = draw_point_cloud(cfg, ReplayToken::new(2025, 0));
    let set = PointSet::new(cloud)?;
    println!(
        "random disk: n={}, distinct={}, hull={}",
        n,
        set.len(),
        set.hull().len()
    );
    Ok(())
}
