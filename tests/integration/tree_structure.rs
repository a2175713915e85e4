//! Integration tests for structural sensitivity and tree shape

use super::test_utils::sample_tree;
use std::fs;
use tempfile::TempDir;
use treehash::tree::builder::TreeBuilder;
use treehash::tree::node::Node;
use treehash::TreeError;

/// Adding an empty subdirectory changes the root hash
#[test]
fn test_empty_directory_addition_different_root() {
    let temp_dir = sample_tree();
    let root = temp_dir.path().to_path_buf();
    let builder = TreeBuilder::new(root.clone());

    let root1 = builder.compute_root().unwrap();
    fs::create_dir(root.join("empty_dir")).unwrap();
    let root2 = builder.compute_root().unwrap();

    assert_ne!(root1, root2);
}

/// Removing an empty subdirectory changes the root hash
#[test]
fn test_empty_directory_removal_different_root() {
    let temp_dir = sample_tree();
    let root = temp_dir.path().to_path_buf();
    let builder = TreeBuilder::new(root.clone());

    let root1 = builder.compute_root().unwrap();
    fs::remove_dir(root.join("dir1").join("nested")).unwrap();
    let root2 = builder.compute_root().unwrap();

    assert_ne!(root1, root2);
}

/// Nesting an empty subdirectory one level deeper changes the root hash
#[test]
fn test_empty_directory_nesting_different_root() {
    let temp_dir = sample_tree();
    let root = temp_dir.path().to_path_buf();
    let builder = TreeBuilder::new(root.clone());

    fs::create_dir(root.join("outer")).unwrap();
    let root1 = builder.compute_root().unwrap();

    fs::create_dir(root.join("outer").join("inner")).unwrap();
    let root2 = builder.compute_root().unwrap();

    assert_ne!(root1, root2);
}

/// The built tree mirrors the directory hierarchy
#[test]
fn test_tree_is_isomorphic_to_directory() {
    let temp_dir = sample_tree();
    let root = temp_dir.path().to_path_buf();
    let tree = TreeBuilder::new(root.clone()).build().unwrap();

    let expected = Node::directory(
        "",
        vec![
            Node::directory(
                root.join("dir1"),
                vec![
                    Node::file(root.join("dir1").join("file3.txt"), "content3"),
                    Node::directory(root.join("dir1").join("nested"), vec![]),
                ],
            ),
            Node::file(root.join("file1.txt"), "content1"),
            Node::file(root.join("file2.txt"), "content2"),
        ],
    );

    assert_eq!(tree.root(), &expected);
    assert_eq!(tree.node_count(), 6);
    assert_eq!(tree.file_count(), 3);
}

/// Hashing a file path instead of a directory is rejected
#[test]
fn test_file_root_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file.txt");
    fs::write(&file, "content").unwrap();

    let result = TreeBuilder::new(file).build();
    assert!(matches!(result, Err(TreeError::NotADirectory(_))));
}

/// A symlink to a directory is read as a file, fails, and aborts the whole build
#[cfg(unix)]
#[test]
fn test_directory_symlink_aborts_build() {
    let temp_dir = sample_tree();
    let root = temp_dir.path().to_path_buf();
    std::os::unix::fs::symlink(root.join("dir1"), root.join("dir1").join("loop")).unwrap();

    let result = TreeBuilder::new(root).build();
    assert!(matches!(result, Err(TreeError::Read { .. })));
}
