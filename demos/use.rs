use balanced_tree::{BalancedTree, NodeRef};

fn print_subtree(node: Option<NodeRef<'_, i32>>, depth: usize) {
    if let Some(node) = node {
        print_subtree(node.right(), depth + 1);
        println!(
            "{:indent$}{} (height {}, balance {})",
            "",
            node.key(),
            node.height(),
            node.balance_factor(),
            indent = depth * 4
        );
        print_subtree(node.left(), depth + 1);
    }
}

fn main() {
    let mut tree = BalancedTree::new();
    for key in [3, 2, 1, 4, 5, 6, 7] {
        tree.insert(key);
    }
    assert!(!tree.insert(4));
    assert!(tree.contains(&5));
    assert!(tree.is_balanced());

    println!("{} keys, height {}", tree.len(), tree.height());
    print_subtree(tree.root(), 0);

    print!("{{ ");
    for key in &tree {
        print!("{key}, ");
    }
    println!("}}");
}
