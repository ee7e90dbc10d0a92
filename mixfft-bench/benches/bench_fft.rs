use std::alloc::{GlobalAlloc, Layout, System};
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mixfft::{Complex64, MixedRadixFft};
use mixfft_bench::{signal, sizes_from};
use rustfft::num_complex::Complex as RustComplex;
use rustfft::FftPlanner as RustFftPlanner;

// ---------------- Allocation tracking ----------------
struct CountingAllocator;

static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

// ---------------- Benchmark helpers ----------------
fn bench_plan(c: &mut Criterion, size: usize) {
    let mut group = c.benchmark_group(format!("plan_{}", size));
    group.bench_function(BenchmarkId::new("mixfft", size), |b| {
        b.iter(|| MixedRadixFft::<f64>::from_len(size));
    });
    group.finish();
}

fn bench_complex(c: &mut Criterion, size: usize) {
    let mut group = c.benchmark_group(format!("complex_{}", size));
    let input = signal(size);

    let plan = MixedRadixFft::<f64>::from_len(size);
    let mut out = vec![Complex64::zero(); size];
    let mut reported = false;
    group.bench_function(BenchmarkId::new("mixfft/forward", size), |b| {
        b.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            let before = ALLOCATIONS.load(Ordering::Relaxed);
            for _ in 0..iters {
                let start = Instant::now();
                plan.forward(&input, out.as_mut_slice());
                total += start.elapsed();
            }
            if !reported {
                let allocs = (ALLOCATIONS.load(Ordering::Relaxed) - before) as u64;
                println!(
                    "mixfft {}: radices {:?}, {} allocations/op",
                    size,
                    plan.radices(),
                    allocs / iters.max(1)
                );
                reported = true;
            }
            total
        });
    });

    group.bench_function(BenchmarkId::new("mixfft/inverse", size), |b| {
        b.iter(|| plan.inverse(&input, out.as_mut_slice()));
    });

    let mut planner = RustFftPlanner::<f64>::new();
    let rust_fft = planner.plan_fft_forward(size);
    let rust_input: Vec<RustComplex<f64>> = input
        .iter()
        .map(|c| RustComplex::new(c.re, c.im))
        .collect();
    let mut rust_data = rust_input.clone();
    group.bench_function(BenchmarkId::new("rustfft/forward", size), |b| {
        b.iter(|| {
            rust_data.copy_from_slice(&rust_input);
            rust_fft.process(&mut rust_data);
        });
    });

    group.finish();
}

fn main_bench(c: &mut Criterion) {
    let sizes = sizes_from(env::var("MIXFFT_BENCH_SIZES").ok().as_deref());
    for size in sizes {
        bench_plan(c, size);
        bench_complex(c, size);
    }
}

criterion_group!(benches, main_bench);
criterion_main!(benches);
