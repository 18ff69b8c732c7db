//! 连通分量扫描
//!
//! 按插入顺序以未访问顶点为根做 BFS，每个根对应一个分量。时间戳与 DFS 共用同一套
//! 状态机，但 tout 在"当前顶点的邻居扫描完毕"时分配，而不是在其所有后代完成时。

use super::state::{TimestampTable, TraversalState};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// 单个分量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub root: VertexId,
    /// 出队顺序
    pub members: Vec<VertexId>,
}

impl Component {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.members.contains(&v)
    }
}

/// 扫描结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScan {
    pub components: Vec<Component>,
    pub timestamps: TimestampTable,
}

impl ComponentScan {
    /// 顶点所在分量的序号
    pub fn component_of(&self, v: VertexId) -> Option<usize> {
        self.components.iter().position(|c| c.contains(v))
    }
}

/// 连通分量扫描器
pub struct ComponentScanner<'a> {
    graph: &'a Graph,
}

impl<'a> ComponentScanner<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    pub fn run(&self) -> ComponentScan {
        let mut state = TraversalState::new(self.graph.vertex_count());
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for root in self.graph.vertices().map(|v| v.id()) {
            if state.is_visited(root) {
                continue;
            }

            state.discover(root, None);
            queue.push_back(root);
            let mut members = Vec::new();

            while let Some(current) = queue.pop_front() {
                members.push(current);

                for &w in self.graph.neighbors(current) {
                    if !state.is_visited(w) {
                        state.discover(w, Some(current));
                        queue.push_back(w);
                    }
                }

                state.finish(current);
            }

            debug!(
                root = self.graph.name(root),
                size = members.len(),
                "发现连通分量"
            );
            components.push(Component { root, members });
        }

        ComponentScan {
            components,
            timestamps: state.into_table(self.graph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_components() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", None);
        graph.add_edge("C", "D", None);

        let scan = ComponentScanner::new(&graph).run();
        let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);

        assert_eq!(scan.components.len(), 2);
        assert_eq!(scan.components[0].members, vec![a, b]);
        assert_eq!(scan.components[1].members, vec![c, d]);

        let t = &scan.timestamps;
        assert_eq!((t.tin(a), t.tout(a)), (Some(1), Some(3)));
        assert_eq!((t.tin(b), t.tout(b)), (Some(2), Some(4)));
        assert_eq!((t.tin(c), t.tout(c)), (Some(5), Some(7)));
        assert_eq!((t.tin(d), t.tout(d)), (Some(6), Some(8)));
    }

    #[test]
    fn test_tout_after_neighbor_scan() {
        // A 的两个邻居在 A 完成之前都已分配 tin
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", None);
        graph.add_edge("A", "C", None);
        graph.add_edge("B", "D", None);

        let scan = ComponentScanner::new(&graph).run();
        let t = &scan.timestamps;
        let id = |name: &str| graph.index_of(name).unwrap();

        assert_eq!(t.tin(id("B")), Some(2));
        assert_eq!(t.tin(id("C")), Some(3));
        assert_eq!(t.tout(id("A")), Some(4));
        assert_eq!(t.tin(id("D")), Some(5));
        assert_eq!(t.tout(id("B")), Some(6));
        assert_eq!(t.tout(id("C")), Some(7));
        assert_eq!(t.tout(id("D")), Some(8));

        let order: Vec<&str> = scan.components[0]
            .members
            .iter()
            .map(|&v| graph.name(v))
            .collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_directed_forward_reachability() {
        // B -> A：从 A 出发到不了 B，B 成为新的根
        let mut graph = Graph::directed();
        graph.add_vertex("A", None);
        graph.add_edge("B", "A", None);
        graph.add_edge("B", "C", None);

        let scan = ComponentScanner::new(&graph).run();
        let [a, b, c] = [0, 1, 2].map(VertexId::new);

        assert_eq!(scan.components.len(), 2);
        assert_eq!(scan.components[0].members, vec![a]);
        assert_eq!(scan.components[1].root, b);
        assert_eq!(scan.components[1].members, vec![b, c]);
        assert_eq!(scan.component_of(c), Some(1));
    }

    #[test]
    fn test_isolated_vertices_are_singletons() {
        let mut graph = Graph::undirected();
        graph.add_vertex("X", None);
        graph.add_vertex("Y", None);

        let scan = ComponentScanner::new(&graph).run();
        assert_eq!(scan.components.len(), 2);
        assert!(scan.components.iter().all(|c| c.len() == 1));
        assert_eq!(scan.timestamps.tout(VertexId::new(1)), Some(4));
    }
}
