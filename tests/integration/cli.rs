//! End-to-end tests for the treehash binary

use super::test_utils::populate_sample_tree;
use std::fs;
use std::process::Command;
use tempfile::TempDir;
use treehash::tree::hasher::compute_hash;
use treehash::HashAlgorithm;

fn treehash() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treehash"));
    cmd.env_remove("TREEHASH_LOG");
    cmd
}

#[test]
fn test_prints_single_file_digest() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

    let output = treehash()
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let leaf = compute_hash(b"a.txthello", HashAlgorithm::Sha256);
    let expected = hex::encode(compute_hash(&leaf, HashAlgorithm::Sha256));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), format!("{}\n", expected));
}

#[test]
fn test_output_is_lowercase_hex() {
    let temp_dir = TempDir::new().unwrap();
    populate_sample_tree(temp_dir.path());

    let output = treehash().arg("--dir").arg(temp_dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let digest = stdout.trim_end_matches('\n');
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

/// Two separate copies of the same content hashed relative to their roots agree
#[test]
fn test_separate_copies_same_digest() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    populate_sample_tree(first.path());
    populate_sample_tree(second.path());

    let run = |dir: &std::path::Path| {
        let output = treehash().current_dir(dir).args(["--dir", "./"]).output().unwrap();
        assert!(output.status.success());
        output.stdout
    };

    assert_eq!(run(first.path()), run(second.path()));
}

#[test]
fn test_streaming_flag_same_digest() {
    let temp_dir = TempDir::new().unwrap();
    populate_sample_tree(temp_dir.path());

    let batch = treehash().arg("--dir").arg(temp_dir.path()).output().unwrap();
    let streamed = treehash()
        .arg("--dir")
        .arg(temp_dir.path())
        .arg("--streaming")
        .output()
        .unwrap();

    assert!(batch.status.success());
    assert_eq!(batch.stdout, streamed.stdout);
}

#[test]
fn test_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = treehash()
        .arg("--dir")
        .arg(temp_dir.path().join("missing"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_config_file_selects_algorithm() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    populate_sample_tree(&data);

    let config = temp_dir.path().join("treehash.toml");
    fs::write(&config, "[hash]\nalgorithm = \"blake3\"\n").unwrap();

    let sha = treehash().arg("--dir").arg(&data).output().unwrap();
    let blake = treehash()
        .arg("--dir")
        .arg(&data)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    let flag = treehash()
        .arg("--dir")
        .arg(&data)
        .args(["--algorithm", "blake3"])
        .output()
        .unwrap();

    assert!(blake.status.success());
    assert_ne!(sha.stdout, blake.stdout);
    assert_eq!(blake.stdout, flag.stdout);
}
