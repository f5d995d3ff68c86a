use std::collections::HashMap;

use graph_walker::{TraversalOrder, Walker};

fn graph(edges: &[(char, &str)]) -> HashMap<char, Vec<char>> {
    edges.iter().map(|(n, s)| (*n, s.chars().collect())).collect()
}

fn successors(g: &HashMap<char, Vec<char>>) -> impl Fn(&char) -> Vec<char> + '_ {
    move |n: &char| g.get(n).cloned().unwrap_or_default()
}

#[test]
fn small_tree_in_all_orders() {
    let g = graph(&[('A', "BC"), ('B', "D"), ('C', ""), ('D', "")]);
    let walker = Walker::in_tree(successors(&g));

    assert_eq!(walker.pre_order_from(['A']).collect::<Vec<_>>(), ['A', 'B', 'D', 'C']);
    assert_eq!(walker.post_order_from(['A']).collect::<Vec<_>>(), ['D', 'B', 'C', 'A']);
    assert_eq!(walker.breadth_first_from(['A']).collect::<Vec<_>>(), ['A', 'B', 'C', 'D']);
}

#[test]
fn graph_walker_visits_cycle_once() {
    let g = graph(&[('A', "B"), ('B', "A")]);
    let walker = Walker::in_graph(successors(&g));

    assert_eq!(walker.pre_order_from(['A']).collect::<String>(), "AB");
    assert_eq!(walker.breadth_first_from(['A']).collect::<String>(), "AB");
    assert_eq!(walker.post_order_from(['A']).collect::<String>(), "BA");
}

#[test]
fn tree_walker_goes_around_cycle_forever() {
    let g = graph(&[('A', "B"), ('B', "A")]);
    let walker = Walker::in_tree(successors(&g));

    assert_eq!(walker.pre_order_from(['A']).take(4).collect::<String>(), "ABAB");
    assert_eq!(walker.breadth_first_from(['A']).take(4).collect::<String>(), "ABAB");
}

#[test]
fn repeated_walks_are_identical() {
    let g = graph(&[('A', "BCD"), ('B', "CE"), ('C', "A"), ('D', "E"), ('E', "B")]);
    let walker = Walker::in_graph(successors(&g));

    for order in TraversalOrder::ALL {
        let first: String = walker.walk_from(order, ['A']).collect();
        let second: String = walker.walk_from(order, ['A']).collect();
        assert_eq!(first, second, "{order} walks differ");
        assert_eq!(first.len(), 5, "{order} walk {first} is not a permutation");
    }
}

#[test]
fn infinite_graph_is_walked_lazily() {
    let walker = Walker::in_tree(|n: &u64| [n + 1]);

    assert_eq!(walker.pre_order_from([7]).take(5).collect::<Vec<_>>(), [7, 8, 9, 10, 11]);
    assert_eq!(walker.breadth_first_from([7]).take(5).collect::<Vec<_>>(), [7, 8, 9, 10, 11]);

    let graph_walker = Walker::in_graph(|n: &u64| [n + 1]);
    assert_eq!(graph_walker.pre_order_from([0]).nth(1000), Some(1000));
}

#[test]
fn infinite_start_nodes_are_walked_lazily() {
    let walker = Walker::in_graph(|n: &u64| [n + 1]);

    assert_eq!(walker.breadth_first_from(0u64..).take(5).collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    assert_eq!(walker.pre_order_from((0u64..).step_by(10)).nth(3), Some(3));
}

#[test]
fn zero_start_nodes_yield_nothing() {
    let walker = Walker::in_graph(|n: &u64| [n + 1]);

    assert_eq!(walker.pre_order_from(Vec::new()).next(), None);
    assert_eq!(walker.post_order_from(Vec::new()).next(), None);
    assert_eq!(walker.breadth_first_from(Vec::new()).next(), None);
}

#[test]
fn order_is_loaded_from_configuration() -> anyhow::Result<()> {
    let g = graph(&[('A', "BC"), ('B', "D")]);
    let walker = Walker::in_graph(successors(&g));

    let order: TraversalOrder = serde_json::from_str(r#""post_order""#)?;
    assert_eq!(walker.walk_from(order, ['A']).collect::<String>(), "DBCA");

    let order: TraversalOrder = "breadth_first".parse()?;
    assert_eq!(walker.walk_from(order, ['A']).collect::<String>(), "ABCD");
    assert_eq!(serde_json::to_string(&TraversalOrder::PreOrder)?, r#""pre_order""#);
    Ok(())
}

#[test]
fn deep_chain_does_not_recurse() {
    let depth = 1_000_000u32;
    let walker = Walker::in_tree(move |n: &u32| (*n < depth).then_some(n + 1));

    assert_eq!(walker.pre_order_from([0]).count(), depth as usize + 1);
    assert_eq!(walker.post_order_from([0]).next(), Some(depth));
}

#[test]
fn independent_sessions_share_a_walker_across_threads() {
    let g = graph(&[('A', "BC"), ('B', "D"), ('C', "D"), ('D', "A")]);
    let walker = Walker::in_graph(successors(&g));

    let walks: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| walker.pre_order_from(['A']).collect::<String>()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(walks.iter().all(|w| w == "ABDC"));
}
