use std::collections::{HashMap, HashSet, VecDeque};

use graph_walker::{detect_cycle_in_graph, TraversalOrder, Walker};
use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use proptest::prelude::*;

/// A random tree rooted at 0: every other node picks a parent with a lower id.
fn tree_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..40).prop_flat_map(|n| {
        (1..n)
            .map(|i| 0..i)
            .collect::<Vec<_>>()
            .prop_map(move |parents| {
                let mut adj = vec![Vec::new(); n];
                for (i, parent) in parents.into_iter().enumerate() {
                    adj[parent].push(i + 1);
                }
                adj
            })
    })
}

/// A random DAG on at most `max` nodes: edges only go from lower to higher ids.
fn dag_strategy(max: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..max).prop_flat_map(|n| {
        (0..n)
            .map(|i| proptest::collection::vec(i + 1..=n, 0..4))
            .collect::<Vec<_>>()
            .prop_map(move |mut adj| {
                for succ in &mut adj {
                    succ.retain(|&s| s < n);
                }
                adj
            })
    })
}

/// A random directed graph on at most `max` nodes, cycles allowed.
fn graph_strategy(max: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..max).prop_flat_map(|n| proptest::collection::vec(proptest::collection::vec(0..n, 0..4), n))
}

fn to_petgraph(adj: &[Vec<usize>]) -> (DiGraph<(), ()>, Vec<NodeIndex>) {
    let mut g = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..adj.len()).map(|_| g.add_node(())).collect();
    for (from, succ) in adj.iter().enumerate() {
        for &to in succ {
            g.add_edge(nodes[from], nodes[to], ());
        }
    }
    (g, nodes)
}

fn descendants(adj: &[Vec<usize>], node: usize) -> HashSet<usize> {
    let walker = Walker::in_graph(|n: &usize| adj[*n].clone());
    walker.pre_order_from(adj[node].clone()).collect()
}

fn positions(order: &[usize]) -> HashMap<usize, usize> {
    order.iter().enumerate().map(|(i, n)| (*n, i)).collect()
}

fn depths(adj: &[Vec<usize>]) -> HashMap<usize, usize> {
    let mut depth = HashMap::from([(0, 0)]);
    let mut queue = VecDeque::from([0]);
    while let Some(n) = queue.pop_front() {
        for &s in &adj[n] {
            if !depth.contains_key(&s) {
                depth.insert(s, depth[&n] + 1);
                queue.push_back(s);
            }
        }
    }
    depth
}

proptest! {
    #[test]
    fn tree_orders_visit_every_node_once(adj in tree_strategy()) {
        let walker = Walker::in_tree(|n: &usize| adj[*n].clone());
        for order in TraversalOrder::ALL {
            let mut visited: Vec<usize> = walker.walk_from(order, [0]).collect();
            visited.sort_unstable();
            prop_assert_eq!(visited, (0..adj.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn pre_order_emits_parents_before_children(adj in tree_strategy()) {
        let walker = Walker::in_tree(|n: &usize| adj[*n].clone());
        let pos = positions(&walker.pre_order_from([0]).collect::<Vec<_>>());
        for (parent, children) in adj.iter().enumerate() {
            for child in children {
                prop_assert!(pos[&parent] < pos[child]);
            }
        }
    }

    #[test]
    fn post_order_emits_children_before_parents(adj in tree_strategy()) {
        let walker = Walker::in_tree(|n: &usize| adj[*n].clone());
        let pos = positions(&walker.post_order_from([0]).collect::<Vec<_>>());
        for (parent, children) in adj.iter().enumerate() {
            for child in children {
                prop_assert!(pos[child] < pos[&parent]);
            }
        }
    }

    #[test]
    fn post_order_emits_descendants_first_in_dags(adj in dag_strategy(24)) {
        let walker = Walker::in_graph(|n: &usize| adj[*n].clone());
        let order: Vec<usize> = walker.post_order_from([0]).collect();
        let pos = positions(&order);
        for &node in &order {
            for d in descendants(&adj, node) {
                prop_assert!(pos[&d] < pos[&node], "{} emitted after ancestor {}", d, node);
            }
        }
    }

    #[test]
    fn breadth_first_is_level_ordered(adj in graph_strategy(24)) {
        let walker = Walker::in_graph(|n: &usize| adj[*n].clone());
        let depth = depths(&adj);
        let levels: Vec<usize> = walker.breadth_first_from([0]).map(|n| depth[&n]).collect();
        prop_assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn every_order_reaches_what_petgraph_reaches(adj in graph_strategy(24)) {
        let (g, nodes) = to_petgraph(&adj);
        let mut dfs = Dfs::new(&g, nodes[0]);
        let mut expected = HashSet::new();
        while let Some(nx) = dfs.next(&g) {
            expected.insert(nx.index());
        }

        let walker = Walker::in_graph(|n: &usize| adj[*n].clone());
        for order in TraversalOrder::ALL {
            let visited: Vec<usize> = walker.walk_from(order, [0]).collect();
            let distinct: HashSet<usize> = visited.iter().copied().collect();
            prop_assert_eq!(distinct.len(), visited.len());
            prop_assert_eq!(&distinct, &expected);
        }
    }

    // Tree-mode walks of a DAG repeat shared descendants, so DAGs stay small.
    #[test]
    fn dags_have_no_cycle(adj in dag_strategy(12)) {
        prop_assert!(detect_cycle_in_graph(|n: &usize| adj[*n].clone(), 0).is_empty());
    }

    #[test]
    fn cycle_found_iff_one_is_reachable(adj in graph_strategy(10)) {
        let (g, _) = to_petgraph(&adj);
        let reachable = descendants(&adj, 0);
        let on_cycle: HashSet<usize> = kosaraju_scc(&g)
            .into_iter()
            .filter(|scc| scc.len() > 1 || adj[scc[0].index()].contains(&scc[0].index()))
            .flatten()
            .map(|nx| nx.index())
            .collect();
        let expected = on_cycle.contains(&0) || reachable.iter().any(|n| on_cycle.contains(n));

        let cycle = detect_cycle_in_graph(|n: &usize| adj[*n].clone(), 0);
        prop_assert_eq!(!cycle.is_empty(), expected);
        if expected {
            prop_assert_eq!(cycle.first(), cycle.last());
            for w in cycle.windows(2) {
                prop_assert!(adj[w[0]].contains(&w[1]));
                prop_assert!(on_cycle.contains(&w[0]));
            }
        }
    }
}
