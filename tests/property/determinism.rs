//! Property-based tests for determinism and sensitivity guarantees

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;
use treehash::tree::builder::TreeBuilder;
use treehash::tree::hasher::hash_node;
use treehash::tree::node::Node;
use treehash::tree::stream::StreamingHasher;
use treehash::{HashAlgorithm, HashOptions};

/// Flat set of files, optionally placed one directory deep
fn file_set() -> impl Strategy<Value = BTreeMap<(Option<String>, String), Vec<u8>>> {
    prop::collection::btree_map(
        (prop::option::of("[a-d]{1,3}"), "[a-z]{1,6}\\.txt"),
        prop::collection::vec(any::<u8>(), 0..64),
        0..8,
    )
}

fn write_files(root: &std::path::Path, files: &BTreeMap<(Option<String>, String), Vec<u8>>) {
    for ((dir, name), content) in files {
        let parent = match dir {
            Some(dir) => {
                let parent = root.join(format!("d_{}", dir));
                fs::create_dir_all(&parent).unwrap();
                parent
            }
            None => root.to_path_buf(),
        };
        fs::write(parent.join(name), content).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Hashing the same directory twice, batch or streaming, gives one digest
    #[test]
    fn prop_batch_and_streaming_agree(files in file_set(), blake in any::<bool>()) {
        let temp_dir = TempDir::new().unwrap();
        write_files(temp_dir.path(), &files);

        let options = HashOptions {
            algorithm: if blake { HashAlgorithm::Blake3 } else { HashAlgorithm::Sha256 },
            ..HashOptions::default()
        };
        let root = temp_dir.path().to_path_buf();

        let builder = TreeBuilder::new(root.clone()).with_options(options.clone());
        let batch1 = builder.compute_root().unwrap();
        let batch2 = builder.compute_root().unwrap();
        let streamed = StreamingHasher::new(root, options).digest().unwrap();

        prop_assert_eq!(batch1, batch2);
        prop_assert_eq!(batch1, streamed);
    }

    /// Flipping any single content byte changes the root digest
    #[test]
    fn prop_content_sensitivity(
        content in prop::collection::vec(any::<u8>(), 1..128),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let original = Node::directory("", vec![Node::file("f", content.clone())]);

        let mut changed_content = content;
        let i = index.index(changed_content.len());
        changed_content[i] ^= flip;
        let changed = Node::directory("", vec![Node::file("f", changed_content)]);

        prop_assert_ne!(
            hash_node(&original, HashAlgorithm::Sha256),
            hash_node(&changed, HashAlgorithm::Sha256)
        );
    }

    /// Renaming a leaf changes the root digest
    #[test]
    fn prop_name_sensitivity(a in "[a-z]{1,8}", b in "[a-z]{1,8}", content in any::<Vec<u8>>()) {
        prop_assume!(a != b);
        let left = Node::directory("", vec![Node::file(a, content.clone())]);
        let right = Node::directory("", vec![Node::file(b, content)]);

        prop_assert_ne!(
            hash_node(&left, HashAlgorithm::Sha256),
            hash_node(&right, HashAlgorithm::Sha256)
        );
    }
}
