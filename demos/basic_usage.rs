//! Basic usage example for mixfft
//!
//! Plans a few awkward lengths, runs forward and inverse transforms through
//! the different input and output bindings, and shares plans via the planner.

use mixfft::{fft, fft_n, ifft, Complex32, Complex64, FftPlanner, MixedRadixFft, Source};

fn show(label: &str, data: &[Complex64]) {
    println!(
        "   {label}: {:?}",
        data.iter()
            .map(|c| format!("{:.2}{:+.2}i", c.re, c.im))
            .collect::<Vec<_>>()
    );
}

fn main() -> Result<(), mixfft::FftError> {
    println!("=== mixfft Basic Usage Example ===\n");

    // 1. One-shot transforms
    println!("1. One-shot FFT of length 6");
    let data: Vec<Complex64> = (1..=6).map(|i| Complex64::new(i as f64, 0.0)).collect();
    let spectrum = fft(&data);
    show("Input", &data);
    show("FFT", &spectrum);
    show("IFFT", &ifft(&spectrum));
    println!();

    // 2. Reusable plan
    println!("2. Reusable plan for a prime length");
    let plan = MixedRadixFft::<f64>::new(13)?;
    println!("   radices: {:?}", plan.radices());
    let impulse: Vec<Complex64> = (0..13)
        .map(|i| if i == 0 { Complex64::new(1.0, 0.0) } else { Complex64::zero() })
        .collect();
    let mut out: Vec<Complex64> = Vec::new();
    plan.forward(&impulse, &mut out);
    show("FFT(impulse)", &out);
    println!();

    // 3. Streaming input
    println!("3. Transform straight from an iterator");
    let tone = (0..12).map(|i| {
        let angle = 2.0 * std::f64::consts::PI * 3.0 * i as f64 / 12.0;
        Complex64::new(angle.cos(), 0.0)
    });
    show("FFT(cos 3t)", &fft_n(tone, 12));
    let from_stream = plan.forward_vec(Source::sequential(impulse.iter().copied()));
    println!("   stream == slice: {}", from_stream == out);
    println!();

    // 4. Planner and mixed precision
    println!("4. Planner with single precision");
    let mut planner = FftPlanner::<f32>::new();
    for n in [60, 360, 1000, 60] {
        let plan = planner.plan(n)?;
        let ones = vec![Complex32::new(1.0, 0.0); n];
        let dc = plan.forward_vec(&ones)[0];
        println!("   n = {n:4}: radices {:?}, DC bin {:.1}", plan.radices(), dc.re);
    }
    println!("   cached plans: {}", planner.len());

    match MixedRadixFft::<f64>::new(-4) {
        Ok(_) => println!("   unexpected plan for -4"),
        Err(e) => println!("   size -4 rejected: {e}"),
    }

    Ok(())
}
