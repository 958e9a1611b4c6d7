#[cfg(test)]
mod tests {
    use std::fs;

    use concord::index::record::WordRecord;
    use concord::index::WordIndex;
    use concord::storage::{load_repository, save_repository};
    use concord::tree::BinarySearchTree;

    #[test]
    fn test_index_save_load_report_cycle() {
        // 1. Write two small input files
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "The cat sat.\nOn the mat.\nThe end.\n").unwrap();
        fs::write(&b, "The dog barked.\n").unwrap();

        // 2. Index both files
        let mut index = WordIndex::new();
        index.process_file(&a).unwrap();
        index.process_file(&b).unwrap();

        let a_id = a.display().to_string();
        let b_id = b.display().to_string();

        // 3. Persist and reload
        let repo = dir.path().join("repository.ccrd");
        save_repository(&repo, index.tree()).unwrap();
        let restored: BinarySearchTree<WordRecord> = load_repository(&repo).unwrap();
        let restored = WordIndex::from_tree(restored);

        // 4. The reloaded index is traversal-equivalent to the original
        let original: Vec<_> = index.words().map(|r| r.text().to_string()).collect();
        let reloaded: Vec<_> = restored.words().map(|r| r.text().to_string()).collect();
        assert_eq!(reloaded, original);
        assert_eq!(
            original,
            vec!["barked", "cat", "dog", "end", "mat", "on", "sat", "the"]
        );

        // 5. Occurrence detail survives the round trip
        let the = restored.words().find(|r| r.text() == "the").unwrap();
        assert_eq!(the.lines_in(&a_id), Some(&[1, 2, 3][..]));
        assert_eq!(the.lines_in(&b_id), Some(&[1][..]));
        assert_eq!(the.frequency(), 4);
    }

    #[test]
    fn test_reindexing_accumulates_into_existing_repository() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("words.txt");
        let repo = dir.path().join("repository.ccrd");
        fs::write(&input, "alpha beta\n").unwrap();

        // First run: fresh repository
        let mut index = WordIndex::from_tree(load_repository(&repo).unwrap());
        index.process_file(&input).unwrap();
        save_repository(&repo, index.tree()).unwrap();

        // Second run over the same file: occurrences accumulate, the word
        // set does not grow
        let mut index = WordIndex::from_tree(load_repository(&repo).unwrap());
        index.process_file(&input).unwrap();
        save_repository(&repo, index.tree()).unwrap();

        let index = WordIndex::from_tree(load_repository(&repo).unwrap());
        assert_eq!(index.len(), 2);

        let input_id = input.display().to_string();
        let alpha = index.words().find(|r| r.text() == "alpha").unwrap();
        assert_eq!(alpha.lines_in(&input_id), Some(&[1, 1][..]));
    }

    #[test]
    fn test_corrupt_repository_recovery_contract() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path().join("repository.ccrd");
        fs::write(&repo, b"definitely not a repository").unwrap();

        // The storage layer refuses the file; the caller recovers by
        // starting from an empty tree, which behaves like any other index.
        let loaded: Result<BinarySearchTree<WordRecord>, _> = load_repository(&repo);
        assert!(loaded.is_err());

        let mut index = WordIndex::new();
        index.record("fresh", "x.txt", 1).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_missing_repository_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path().join("no-such-file.ccrd");
        let tree: BinarySearchTree<WordRecord> = load_repository(&repo).unwrap();
        assert!(tree.is_empty());
    }
}
