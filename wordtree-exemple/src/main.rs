use wordtree_core::tree::trie::Trie;

fn main() {
    // Build a small tree by hand; insertion lowercases its input and
    // silently skips anything non-alphabetic
    let mut tree = Trie::new();
    tree.insert("tree");
    tree.insert("three");
    tree.insert("free");
    tree.insert("pizza");

    // Exact lookup is case-insensitive
    println!("contains(\"pizza\"): {}", if tree.contains("PIZZA") { "Yes" } else { "No" });

    // Number of distinct words stored; duplicates would not change it
    println!("count: {}", tree.count());

    // Up to two completions of "t", shortest first
    println!("predict(\"t\", 2): {:?}", tree.predict("t", 2));

    // A second tree: only words below the exact "acorn" node qualify as
    // completions, and "acorn" never completes itself
    let mut word_tree = Trie::new();
    word_tree.insert("acknowledging");
    word_tree.insert("acorn");
    word_tree.insert("acorns");
    word_tree.insert("acoustic");

    for prediction in word_tree.predict("acorn", 2) {
        println!("{}", prediction);
    }
}
