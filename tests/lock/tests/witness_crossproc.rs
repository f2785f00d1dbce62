//! Cross-process determinism for search witnesses.
//!
//! Spawns the `witness_fixture` binary under four environment variants and
//! asserts all produce identical output.

use std::path::Path;
use std::process::Command;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_witness_fixture");

    let mut command = Command::new(bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {bin} (work_dir={}, overrides={env_overrides:?}): {e}",
            work_dir.display()
        )
    });

    assert!(
        output.status.success(),
        "witness_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let root = Path::new(&root);
    let baseline = run_variant(root, &[]);

    // Sanity checks.
    assert!(
        baseline.contains("listing_digest=sha256:"),
        "baseline output missing listing_digest"
    );
    assert!(
        baseline.contains("config_digest=sha256:"),
        "baseline output missing config_digest"
    );
    assert!(
        baseline.contains("listing_len=9"),
        "baseline output missing listing_len=9"
    );
    assert!(
        baseline.contains("witness[0]=IMG_0001.png|found:0|sha256:"),
        "baseline output missing first witness"
    );
    assert!(
        baseline.contains("witness[3]=readme.txt|absent|sha256:"),
        "baseline output missing readme miss"
    );
    assert!(
        baseline.contains("witness[7]=IMG_0003.jpeg|found:1|sha256:"),
        "baseline output missing jpeg hit"
    );
    assert!(
        baseline.contains("found_count=4"),
        "baseline output missing found_count=4"
    );

    // Variant 2: different cwd.
    let alt_cwd = tempfile::tempdir().expect("tempdir");
    let variant_cwd = run_variant(alt_cwd.path(), &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes to {}",
        alt_cwd.path().display()
    );

    // Variant 3: different locale env.
    let variant_locale = run_variant(root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    // Variant 4: spurious env vars.
    let variant_noise = run_variant(
        root,
        &[
            ("BISECT_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with spurious env vars");
}
