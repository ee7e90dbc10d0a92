//! Demonstrates enabling verbose logging for mixfft.
use mixfft::{Complex64, FftDirection, FftPlanner};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let mut planner = FftPlanner::<f64>::new();
    let plan = planner.plan(360).unwrap();
    let mut data: Vec<Complex64> = (0..360).map(|i| Complex64::new(i as f64, 0.0)).collect();

    plan.process_in_place(FftDirection::Forward, &mut data);
    plan.process_in_place(FftDirection::Inverse, &mut data);
    log::info!("roundtrip error at 17: {:e}", (data[17].re - 17.0).abs());
}
