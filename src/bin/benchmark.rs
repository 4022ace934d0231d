//! Headless benchmark comparing the serial and parallel step

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::Simulation;

fn seeded(size: usize) -> Simulation {
    let mut sim = Simulation::new(size, size);
    sim.randomize(&mut StdRng::seed_from_u64(size as u64));
    sim
}

fn benchmark_serial(size: usize, iterations: u32) -> f64 {
    let mut sim = seeded(size);

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32) -> f64 {
    let mut sim = seeded(size);

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step_parallel();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [40, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations);
        let parallel_ms = benchmark_parallel(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 1000;
    let cells = size * size;
    let parallel_ms = benchmark_parallel(size, iterations);
    println!(
        "\nThroughput at {size}x{size}: {:.1}M cells/sec",
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
