//! Headless timing of the generation stepper

use std::time::Instant;
use heat_life::{Grid, rendering::{self, DisplayList}};
use rand::{SeedableRng, rngs::StdRng};

/// Average ms per generation, stepping only
fn benchmark_evolve(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::generate(size, size, &mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.evolve();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Average ms per generation including the colour mapping into a display list
fn benchmark_evolve_and_draw(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::generate(size, size, &mut StdRng::seed_from_u64(size as u64));
    let mut frame = DisplayList::new();

    let start = Instant::now();
    for _ in 0..iterations {
        frame.clear();
        grid = grid.next_generation(|x, y, cell| rendering::draw_cell(&mut frame, x, y, cell));
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();

    println!("=== Heat Life Stepper Benchmark ===\n");

    let sizes = [80, 200, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>14}", "Size", "Step", "Step+Draw", "Cells/sec");
    println!("{:-<52}", "");

    for size in sizes {
        log::info!("benchmarking {size}x{size}, seed {size}, {iterations} generations");
        let step_ms = benchmark_evolve(size, iterations);
        let draw_ms = benchmark_evolve_and_draw(size, iterations);
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>13.1}M",
            format!("{}x{}", size, size),
            step_ms,
            draw_ms,
            cells / (draw_ms / 1000.0) / 1_000_000.0
        );
    }
}
