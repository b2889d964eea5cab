//! # Finite sets, partitions and graphs

#![warn(clippy::pedantic)]

use finsets::{prelude::*, set};

fn main() -> Result<()> {
    let a = set![1, 2, 3, 4];
    let b = set![3, 4, 5];
    println!("A:     {a}\nB:     {b}\nA ∩ B: {}", a.intersection(&b));

    let parity = PartitionSet::from_equivalence(a.union(&b), &|x: &i32, y: &i32| x % 2 == y % 2)?;
    println!("A ∪ B by parity: {parity}");

    let mut hierarchy = Hierarchy::new();
    let root = hierarchy.root(1);
    let two = hierarchy.create_child(root, 2)?;
    let three = hierarchy.create_child(root, 3)?;
    let four = hierarchy.create_child(two, 4)?;
    hierarchy.create_child(two, 5)?;
    let six = hierarchy.create_child(three, 6)?;

    let tree = Tree::from_root(&hierarchy, root)?;
    let path = tree.find_path_between(&four, &six)?;
    let values: Vec<_> = hierarchy.values(&path)?;
    println!("Path from 4 to 6: {values:?}");

    Ok(())
}
