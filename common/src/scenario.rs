//! Seeded random scenes plus linear-scan reference answers, shared by the
//! quadtree tests and benches.

use crate::shapes::Rectangle;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub rect: Rectangle,
}

/// `n` items inside `bounds`, ids `0..n`, reproducible for a given `seed`.
pub fn generate_random_items(n: usize, bounds: &Rectangle, max_size: f32, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|id| Item {
            id: id as u32,
            rect: bounds.get_random_rectangle_inside(max_size, &mut rng),
        })
        .collect()
}

/// Ids of live items intersecting `region`. An empty `removed` means nothing was removed.
pub fn brute_force_query(region: &Rectangle, items: &[Item], removed: &[bool]) -> Vec<u32> {
    items
        .iter()
        .filter(|item| is_live(item, removed) && region.intersects(&item.rect))
        .map(|item| item.id)
        .collect()
}

/// Every intersecting pair of live items as `(higher id, lower id)`, each once.
pub fn brute_force_intersections(items: &[Item], removed: &[bool]) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    for i in 0..items.len() {
        if !is_live(&items[i], removed) {
            continue;
        }
        for j in 0..i {
            if is_live(&items[j], removed) && items[i].rect.intersects(&items[j].rect) {
                pairs.push((items[i].id, items[j].id));
            }
        }
    }
    pairs
}

fn is_live(item: &Item, removed: &[bool]) -> bool {
    removed.is_empty() || !removed[item.id as usize]
}
