//! Builds a tree from random keys, prints its traversals, unbalances it with a few large
//! keys, and rebalances it again.

use balanced_bst::Tree;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(about = "Build, unbalance, and rebalance a binary search tree")]
struct Args {
    /// How many random keys to build the tree from.
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Random keys are drawn from `0..max`.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(1..))]
    max: i32,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Keys inserted to unbalance the tree.
    #[arg(long, num_args = 1.., default_values_t = [150, 200, 250])]
    extra: Vec<i32>,
}

fn print_traversals(tree: &Tree<i32>) {
    println!("In-order Traversal: {:?}", tree.in_order());
    println!("Pre-order Traversal: {:?}", tree.pre_order());
    println!("Post-order Traversal: {:?}", tree.post_order());
    println!("Level-order Traversal:");
    tree.level_order(|node| print!("{} ", node.key()));
    println!("\n");
}

fn main() {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Creating a Binary Search Tree with random numbers...");
    let keys: Vec<i32> = (0..args.size).map(|_| rng.gen_range(0..args.max)).collect();
    let mut tree = Tree::from_keys(keys);

    println!("Initial Tree Traversals:");
    print_traversals(&tree);

    println!("Is the tree balanced? {}", tree.is_balanced());

    println!("Unbalancing the tree by adding numbers {:?}...", args.extra);
    for key in args.extra {
        tree.insert(key);
    }

    println!(
        "After unbalancing, is the tree balanced? {}",
        tree.is_balanced()
    );

    println!("Rebalancing the tree...");
    tree.rebalance();

    println!(
        "After rebalancing, is the tree balanced? {}",
        tree.is_balanced()
    );

    println!("Final Tree Traversals:");
    print_traversals(&tree);
}
