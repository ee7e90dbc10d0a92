use anyhow::{bail, Result};
use std::env;
use std::process::Command;

/// Cargo options shared by the development commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
    pub no_default_features: bool,
    pub bench_sizes: Option<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }

    fn apply(&self, cmd: &mut Command) {
        if self.no_default_features {
            cmd.arg("--no-default-features");
        }
        if let Some(f) = self.features_arg() {
            cmd.arg("--features").arg(f);
        }
    }
}

/// Read the configuration from `MIXFFT_FEATURES`, `MIXFFT_NO_STD` and
/// `MIXFFT_BENCH_SIZES`.
pub fn detect_config() -> BuildConfig {
    let extra = env::var("MIXFFT_FEATURES").unwrap_or_default();
    let no_std = env::var("MIXFFT_NO_STD").unwrap_or_default();
    let sizes = env::var("MIXFFT_BENCH_SIZES").ok();
    compute_config(&extra, &no_std, sizes.as_deref())
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(extra: &str, no_std: &str, bench_sizes: Option<&str>) -> BuildConfig {
    let mut features: Vec<String> = Vec::new();
    for feat in extra.split(|c: char| c.is_whitespace() || c == ',') {
        if !feat.is_empty() && !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }
    let no_default_features = matches!(no_std.trim(), "1" | "true" | "yes");
    let bench_sizes = bench_sizes
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    BuildConfig {
        features,
        no_default_features,
        bench_sizes,
    }
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("build");
    cfg.apply(&mut cmd);
    cmd
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("test");
    cfg.apply(&mut cmd);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    if let Some(sizes) = &cfg.bench_sizes {
        cmd.env("MIXFFT_BENCH_SIZES", sizes);
    }
    cmd.args(["bench", "--manifest-path", "mixfft-bench/Cargo.toml"]);
    cmd
}

pub fn demo_command(name: &str) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--example", name]);
    if name == "verbose_logging" {
        cmd.args(["--features", "verbose-logging"]);
    }
    cmd
}

/// Run `cmd` to completion, failing on a non-zero exit.
pub fn run(mut cmd: Command) -> Result<()> {
    let status = cmd.status()?;
    if !status.success() {
        bail!("{:?} exited with {}", cmd.get_program(), status);
    }
    Ok(())
}
