//! Integration tests for the generate command.
//!
//! These run the `shelf` binary against small component libraries in
//! temporary directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const VITE_CONFIG: &str = r#"export default defineConfig({
    resolve: { alias: [{ find: '@', replacement: path.resolve(__dirname, 'src') }] },
});
"#;

fn write(root: &Path, path: &str, contents: &str) {
    let file = root.join(path);
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, contents).unwrap();
}

/// Button and Toggle analyze cleanly; Input imports a shared hook that
/// does not exist.
fn component_library() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(root, "vite.config.ts", VITE_CONFIG);
    write(
        root,
        "src/shared/ui/Button/Button.tsx",
        "import React from 'react';\nimport cn from 'classnames';\nimport { cx } from '@/shared/lib/utils/classes';\nimport { Icon } from '@/shared/ui/Icon';",
    );
    write(
        root,
        "src/shared/ui/Button/Button.stories.tsx",
        "import type { Meta } from '@storybook/react';",
    );
    write(
        root,
        "src/shared/lib/utils/classes.ts",
        "import { twMerge } from 'tailwind-merge';",
    );
    write(
        root,
        "src/shared/ui/Input/Input.tsx",
        "import { useCombinedRefs } from '@/shared/lib/hooks/useCombinedRefs';",
    );
    write(root, "src/shared/ui/Toggle/Toggle.tsx", "import React from 'react';");

    temp
}

fn shelf(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shelf"));
    cmd.current_dir(root).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn manifest(root: &Path, name: &str) -> serde_json::Value {
    let contents = fs::read_to_string(root.join("registry").join(format!("{name}.json"))).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn test_generate_single_component() {
    let temp = component_library();
    let root = temp.path();

    shelf(root)
        .args(["generate", "Button"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Generating registry for Button..."))
        .stderr(predicate::str::contains("Generated registry/Button.json"));

    let record = manifest(root, "Button");
    assert_eq!(record["name"], "Button");
    assert_eq!(
        record["dependencies"]["external"],
        serde_json::json!(["classnames", "tailwind-merge"])
    );
    assert_eq!(record["dependencies"]["registry"], serde_json::json!(["Icon"]));
    assert_eq!(
        record["dependencies"]["shared"],
        serde_json::json!(["src/shared/lib/utils/classes.ts"])
    );
    assert_eq!(
        record["files"],
        serde_json::json!(["src/shared/ui/Button/Button.tsx"])
    );

    // Only the requested component is written
    assert!(!root.join("registry/Toggle.json").exists());
}

#[test]
fn test_generate_missing_component_fails() {
    let temp = component_library();

    shelf(temp.path())
        .args(["generate", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate registry for Ghost"));

    assert!(!temp.path().join("registry/Ghost.json").exists());
}

#[test]
fn test_generate_unresolvable_import_fails() {
    let temp = component_library();

    shelf(temp.path())
        .args(["generate", "Input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("@/shared/lib/hooks/useCombinedRefs"));
}

#[test]
fn test_generate_all_isolates_failures() {
    let temp = component_library();
    let root = temp.path();

    shelf(root)
        .args(["generate", "--all"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 3 components: Button, Input, Toggle"))
        .stderr(predicate::str::contains("Failed to generate registry for Input"))
        .stderr(predicate::str::contains("Generated registry/Toggle.json"));

    assert!(root.join("registry/Button.json").exists());
    assert!(root.join("registry/Toggle.json").exists());
    assert!(!root.join("registry/Input.json").exists());

    let toggle = manifest(root, "Toggle");
    assert_eq!(toggle["dependencies"]["external"], serde_json::json!([]));
}

#[test]
fn test_generate_all_fails_when_configured() {
    let temp = component_library();
    let root = temp.path();
    write(root, "shelf.toml", "fail_on_batch_error = true\n");

    shelf(root)
        .args(["generate", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 3 components failed: Input"));

    // Healthy components are still written
    assert!(root.join("registry/Button.json").exists());
}

#[test]
fn test_config_overrides_output_dir() {
    let temp = component_library();
    let root = temp.path();
    write(
        root,
        "shelf.toml",
        "output_dir = \"public/r\"\npeer_dependencies = []\n",
    );

    shelf(root).args(["generate", "Toggle"]).assert().success();

    let contents = fs::read_to_string(root.join("public/r/Toggle.json")).unwrap();
    let record: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(record["dependencies"]["external"], serde_json::json!(["react"]));
}

#[test]
fn test_unknown_config_key_fails() {
    let temp = component_library();
    write(temp.path(), "shelf.toml", "outdir = \"dist\"\n");

    shelf(temp.path())
        .args(["generate", "Button"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shelf.toml"));
}

#[test]
fn test_generate_requires_target() {
    let temp = component_library();

    shelf(temp.path()).arg("generate").assert().failure();
    shelf(temp.path())
        .args(["generate", "Button", "--all"])
        .assert()
        .failure();
}
