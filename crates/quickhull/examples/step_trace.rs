//! Print the traversal step by step for a small random cloud.
//!
//! Usage:
//!   cargo run -p quickhull --example step_trace -- [count] [seed]

use quickhull::{HullCfg, QuickHull, RandomPointsCfg, WindowCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(20);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let window = WindowCfg {
        width: 80,
        height: 40,
        margin: 2,
    };
    let cfg = RandomPointsCfg { count, window };
    let hull_cfg = HullCfg::with_reference(quickhull::ReferencePoint::Fixed(window.center()));
    let mut qh = match QuickHull::from_random(cfg, seed, hull_cfg) {
        Ok(qh) => qh,
        Err(err) => {
            eprintln!("step_trace: {err}");
            return;
        }
    };
    let (min, max) = qh.extremes();
    println!("extremes {min} {max}");
    while qh.step() {
        let seg = qh.current_segment();
        println!(
            "step {:>3}: next {} -> {} ({} candidates), furthest {:?}, hull size {}",
            qh.steps(),
            seg.a,
            seg.b,
            qh.current_node().points.len(),
            qh.furthest(),
            qh.hull_points().len()
        );
    }
    for p in qh.finalize().points() {
        println!("{},{}", p.x, p.y);
    }
}
