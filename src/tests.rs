//! General graph tests, run against every kind of graph.

#![cfg(test)]

use crate::prelude::*;
use crate::set;
use concat_idents::concat_idents;

/// Creates analogous tests for every kind of graph.
macro_rules! test {
    ($($name: ident),*) => {
        $(
            concat_idents!(fn_name = general, $name {
                #[test]
                fn fn_name() {
                    GeneralGraph::<u32>::$name();
                }
            });

            concat_idents!(fn_name = cycle, $name {
                #[test]
                fn fn_name() {
                    Cycle::<u32>::$name();
                }
            });

            concat_idents!(fn_name = path, $name {
                #[test]
                fn fn_name() {
                    Path::<u32>::$name();
                }
            });

            concat_idents!(fn_name = tree, $name {
                #[test]
                fn fn_name() {
                    Tree::<NodeId>::$name();
                }
            });

            concat_idents!(fn_name = graph, $name {
                #[test]
                fn fn_name() {
                    Graph::<u32>::$name();
                }
            });

            concat_idents!(fn_name = graph_tree, $name {
                #[test]
                fn fn_name() {
                    <Graph<NodeId> as Suite<NodeId>>::$name();
                }
            });
        )*
    };
}

trait Suite<T: Element>: GraphTrait<T> {
    /// A few graphs for general-purpose testing, each paired with a value that is not one of its
    /// vertices.
    fn suite() -> Vec<(Self, T)>;

    /// Test that every link joins two vertices.
    fn _edges_within() {
        for (graph, _) in Self::suite() {
            for link in graph.edge_set() {
                assert!(
                    link.within(graph.vertex_set()),
                    "link {link:?} leaves the graph {graph:?}"
                );
            }
        }
    }

    /// Test that neighbourhoods are non-empty sets of vertices.
    fn _neighbours_within() {
        for (graph, _) in Self::suite() {
            for point in graph.vertex_set() {
                if let Some(next) = graph.neighbours(point) {
                    let next = next.as_ref();
                    assert!(!next.is_empty(), "empty neighbourhood for {point:?}");
                    assert!(graph.vertex_set().contains_set(next));
                }
            }
        }
    }

    /// Test [`GraphTrait::are_connected`] and [`GraphTrait::connected_component`] on a single
    /// vertex.
    fn _connected_reflexive() {
        for (graph, _) in Self::suite() {
            for point in graph.vertex_set() {
                assert_eq!(graph.are_connected(point, point), Ok(true));
                let component = graph.connected_component(point).unwrap();
                assert!(component.vertex_set().contains(point));
            }
        }
    }

    /// Test that the connected components partition the vertices.
    fn _components_partition() {
        for (graph, _) in Self::suite() {
            let components = graph.connected_components();
            let cards: usize = components.iter().map(|c| c.vertex_set().card()).sum();
            let union = FiniteSet::union_of(components.iter().map(|c| c.vertex_set().clone()));

            assert_eq!(cards, graph.vertex_set().card(), "components overlap");
            assert_eq!(
                &union,
                graph.vertex_set(),
                "components don't cover the graph"
            );
        }
    }

    /// Test that everything reachable from a vertex lies in its component.
    fn _reach_within_component() {
        for (graph, _) in Self::suite() {
            for point in graph.vertex_set() {
                let reached = graph.neighbours_of(&FiniteSet::singleton(point.clone()));
                let component = graph.connected_component(point).unwrap();
                assert!(reached.contains(point));
                assert!(component.vertex_set().contains_set(&reached));
            }
        }
    }

    /// Test [`GraphTrait::on`] with every vertex.
    fn _on_everything() {
        for (graph, _) in Self::suite() {
            let induced = graph.on(graph.vertex_set());
            assert_eq!(induced.vertex_set(), graph.vertex_set());
            assert_eq!(induced.edge_set(), graph.edge_set());
        }
    }

    /// Test [`GraphTrait::flow_by`] from every vertex.
    fn _flow() {
        for (graph, _) in Self::suite() {
            for point in graph.vertex_set() {
                let flow = graph.flow_by(Ord::cmp, point).unwrap();
                assert_eq!(flow.head(), Some(point));
                assert!(graph.vertex_set().contains_set(flow.as_set()));
            }
        }
    }

    /// Test every operation with a point outside the graph.
    fn _outsider() {
        for (graph, outsider) in Self::suite() {
            assert!(graph.neighbours(&outsider).is_none());
            assert!(matches!(
                graph.connected_component(&outsider),
                Err(SetError::InvalidArgument(_))
            ));
            assert!(graph.flow_by(Ord::cmp, &outsider).is_err());
            assert!(graph
                .on(&FiniteSet::singleton(outsider))
                .vertex_set()
                .is_empty());
        }
    }
}

impl Suite<u32> for GeneralGraph<u32> {
    fn suite() -> Vec<(Self, u32)> {
        vec![
            (GeneralGraph::new(set![], set![]).unwrap(), 0),
            (GeneralGraph::new(set![1, 2, 3], set![]).unwrap(), 0),
            (
                GeneralGraph::new(
                    (0..8).collect(),
                    set![
                        Link::new(0, 1),
                        Link::new(1, 2),
                        Link::new(2, 0),
                        Link::new(3, 4),
                        Link::new(5, 5)
                    ],
                )
                .unwrap(),
                8,
            ),
        ]
    }
}

impl Suite<u32> for Cycle<u32> {
    fn suite() -> Vec<(Self, u32)> {
        vec![
            (Cycle::new(vec![7]).unwrap(), 0),
            (Cycle::new(vec![1, 2]).unwrap(), 0),
            (Cycle::new(vec![4, 0, 3, 1, 2]).unwrap(), 5),
        ]
    }
}

impl Suite<u32> for Path<u32> {
    fn suite() -> Vec<(Self, u32)> {
        vec![
            (Path::new(vec![9]).unwrap(), 0),
            (Path::new(vec![3, 1, 2]).unwrap(), 0),
            (Path::new((0..10).rev().collect()).unwrap(), 10),
        ]
    }
}

impl Suite<NodeId> for Tree<NodeId> {
    fn suite() -> Vec<(Self, NodeId)> {
        let mut hierarchy = Hierarchy::new();
        let chain = hierarchy.chain(0..4).unwrap();
        let root = hierarchy.root(0);
        for i in 1..4 {
            let child = hierarchy.create_child(root, i).unwrap();
            for j in 0..i {
                hierarchy.create_child(child, 10 * i + j).unwrap();
            }
        }

        let single = Tree::new(&hierarchy, &set![root]).unwrap();
        let chain = Tree::new(&hierarchy, chain.as_ref()).unwrap();
        let bushy = Tree::from_root(&hierarchy, root).unwrap();
        let outsider = hierarchy.root(0);
        vec![(single, outsider), (chain, outsider), (bushy, outsider)]
    }
}

impl Suite<u32> for Graph<u32> {
    fn suite() -> Vec<(Self, u32)> {
        GeneralGraph::suite()
            .into_iter()
            .map(|(graph, outsider)| (graph.into(), outsider))
            .chain(Cycle::suite().into_iter().map(|(graph, outsider)| (graph.into(), outsider)))
            .chain(Path::suite().into_iter().map(|(graph, outsider)| (graph.into(), outsider)))
            .collect()
    }
}

impl Suite<NodeId> for Graph<NodeId> {
    fn suite() -> Vec<(Self, NodeId)> {
        Tree::<NodeId>::suite()
            .into_iter()
            .map(|(graph, outsider)| (graph.into(), outsider))
            .collect()
    }
}

test!(
    _edges_within,
    _neighbours_within,
    _connected_reflexive,
    _components_partition,
    _reach_within_component,
    _on_everything,
    _flow,
    _outsider
);
