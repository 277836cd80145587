use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the employee registry workspace",
    long_about = "A unified CLI for running local invocations, CI checks,\n\
                  and Lambda packaging in the employee registry workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay sample create/fetch events against the in-memory store
    Smoke {
        /// Optional path to a JSON event file to replay instead
        #[arg(long)]
        event: Option<String>,
    },
    /// Run CI checks (fmt, clippy, tests, smoke)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build and package the Lambda artifact for deployment
    LambdaPackage {
        /// Compilation target triple for the Lambda binary
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for the binary
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run the local invocation smoke
    Smoke,
    /// Run check + smoke
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_smoke(event: Option<&str>) {
    let mut cargo_args = vec![
        "run",
        "-p",
        "employee_registry_lambda",
        "--bin",
        "local_invoke",
    ];
    if let Some(path) = event {
        cargo_args.push("--");
        cargo_args.push(path);
    }
    run_cargo(&cargo_args);
}

fn package_lambda(target: &str, profile: BuildProfile) {
    ensure_rust_target_installed(target);
    ensure_c_linker_available(target);

    step("Build employee lambda binary");

    let mut cargo_args = vec![
        "build",
        "-p",
        "employee_registry_lambda",
        "--target",
        target,
        "--bin",
        "employee_lambda",
    ];
    if let Some(flag) = profile.as_cargo_flag() {
        cargo_args.push(flag);
    }
    run_cargo(&cargo_args);

    step("Package lambda zip artifact");
    let profile_dir = profile.dir_name();
    let target_dir = Path::new("target").join(target).join(profile_dir);
    let dist_dir = Path::new("dist");
    fs::create_dir_all(dist_dir).expect("failed to create lambda dist directory");

    package_lambda_zip(
        &target_dir.join(binary_name("employee_lambda", target)),
        &dist_dir.join("employee_lambda.zip"),
    );

    eprintln!(
        "\nPackaged artifact:\n- {}",
        dist_dir.join("employee_lambda.zip").display()
    );
}

fn ensure_rust_target_installed(target: &str) {
    let listing = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output();

    match listing {
        Ok(output) if output.status.success() => {
            let installed = String::from_utf8_lossy(&output.stdout);
            if installed.lines().all(|line| line.trim() != target) {
                panic!(
                    "rust target `{target}` is not installed; add it with `rustup target add {target}` and re-run `cargo run -p xtask -- lambda-package`"
                );
            }
        }
        Ok(output) => {
            let detail = String::from_utf8_lossy(&output.stderr);
            panic!(
                "could not list installed rust targets: {}",
                detail.trim()
            );
        }
        Err(error) => {
            eprintln!("warning: rustup not runnable ({error}); skipping target preflight");
        }
    }
}

fn ensure_c_linker_available(target: &str) {
    if !cfg!(windows) || !target.ends_with("unknown-linux-gnu") {
        return;
    }

    let overrides = [
        format!("CC_{}", target.replace('-', "_")),
        format!("CC_{target}"),
        "TARGET_CC".to_string(),
        "CC".to_string(),
    ];
    let configured = overrides
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .any(|value| !value.is_empty() && tool_responds(&value));

    if configured || tool_responds("x86_64-linux-gnu-gcc") {
        return;
    }

    panic!(
        "no C cross-linker found for `{target}`; install x86_64-linux-gnu-gcc or set \
         CC_x86_64_unknown_linux_gnu. The AWS SDK's TLS stack needs a Linux C toolchain \
         when cross-compiling from Windows."
    );
}

fn tool_responds(program: &str) -> bool {
    let mut parts = program.split_whitespace();
    let Some(bin) = parts.next() else {
        return false;
    };

    Command::new(bin)
        .args(parts)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn binary_name(bin_name: &str, target: &str) -> String {
    if target.contains("windows") {
        format!("{bin_name}.exe")
    } else {
        bin_name.to_string()
    }
}

fn package_lambda_zip(binary_path: &Path, zip_path: &Path) {
    let binary = fs::read(binary_path).unwrap_or_else(|error| {
        panic!(
            "could not read lambda binary at '{}': {error}",
            binary_path.display()
        )
    });

    let file = fs::File::create(zip_path).expect("failed to create lambda zip");
    let mut zip = ZipWriter::new(file);
    // The Lambda runtime expects an executable named `bootstrap` at the zip root.
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)
        .expect("failed to add bootstrap entry to lambda zip");
    zip.write_all(&binary)
        .expect("failed to write bootstrap entry");
    zip.finish().expect("failed to finish lambda zip");
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test employee_registry_core");
    run_cargo(&["test", "-p", "employee_registry_core"]);

    step("Test employee_registry_lambda");
    run_cargo(&["test", "-p", "employee_registry_lambda"]);
}

fn ci_smoke() {
    step("Run local invocation smoke");
    run_smoke(None);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Smoke { event } => {
            run_smoke(event.as_deref());
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Smoke => ci_smoke(),
                CiJob::All => {
                    ci_check();
                    ci_smoke();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::LambdaPackage { target, profile } => {
            package_lambda(&target, profile);
        }
    }
}
