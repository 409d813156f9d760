#![no_main]

use libfuzzer_sys::fuzz_target;
use scrape::build_tree;

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let tree = build_tree(&html);

    // Whatever the input, the arena must stay internally consistent.
    for id in tree.nodes() {
        match tree.parent(id) {
            Some(parent) => assert!(tree.children(parent).contains(&id)),
            None => assert_eq!(id, tree.root()),
        }
        for &child in tree.children(id) {
            assert_eq!(tree.parent(child), Some(id));
        }
    }

    let _ = tree.get_by_address("html/body/div[0]/@text");
});
