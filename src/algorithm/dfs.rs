//! 迭代式深度优先搜索
//!
//! 按插入顺序依次以未访问顶点为根，用显式栈遍历整个图，记录发现/完成时间戳和前驱，
//! 生成发现森林。
//!
//! 栈顶顶点每轮取第一个未访问邻居入栈，没有则出栈并记录完成时间。访问标记只增不减，
//! 所以游标之前的邻居必然都已访问，从游标继续扫描和每轮从头扫描得到同一个邻居。

use super::state::{TimestampTable, TraversalState};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// DFS 结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsForest {
    /// 每个顶点的 (tin, tout)，按插入顺序
    pub timestamps: TimestampTable,
    /// 按 tin 升序的顶点
    pub discovery_order: Vec<VertexId>,
    /// 每棵树的根，按发现顺序
    pub roots: Vec<VertexId>,
    parents: Vec<Option<VertexId>>,
    children: Vec<Vec<VertexId>>,
}

impl DfsForest {
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.parents.get(v.index()).copied().flatten()
    }

    /// 直接子节点，按 tin 升序
    pub fn children(&self, v: VertexId) -> &[VertexId] {
        self.children
            .get(v.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tree_count(&self) -> usize {
        self.roots.len()
    }
}

/// DFS 引擎
pub struct DfsEngine<'a> {
    graph: &'a Graph,
}

impl<'a> DfsEngine<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 遍历整个图
    pub fn run(&self) -> DfsForest {
        let n = self.graph.vertex_count();
        let mut state = TraversalState::new(n);
        let mut cursor = vec![0usize; n];
        let mut roots = Vec::new();
        let mut stack: Vec<VertexId> = Vec::new();

        for root in self.graph.vertices().map(|v| v.id()) {
            if state.is_visited(root) {
                continue;
            }

            debug!(root = self.graph.name(root), "DFS 新树");
            roots.push(root);
            state.discover(root, None);
            stack.push(root);

            while let Some(&top) = stack.last() {
                match self.next_unvisited(top, &mut cursor, &state) {
                    Some(next) => {
                        state.discover(next, Some(top));
                        stack.push(next);
                    }
                    None => {
                        stack.pop();
                        state.finish(top);
                    }
                }
            }
        }

        // 子节点在发现时按序加入，天然按 tin 升序
        let mut parents = vec![None; n];
        let mut children = vec![Vec::new(); n];
        let timestamps = {
            let mut order: Vec<VertexId> = self.graph.vertices().map(|v| v.id()).collect();
            order.sort_by_key(|&v| state.tin(v));
            for &v in &order {
                if let Some(p) = state.predecessor(v) {
                    parents[v.index()] = Some(p);
                    children[p.index()].push(v);
                }
            }
            state.into_table(self.graph)
        };

        DfsForest {
            discovery_order: timestamps.discovery_order(),
            timestamps,
            roots,
            parents,
            children,
        }
    }

    /// 栈顶顶点的第一个未访问邻居
    fn next_unvisited(
        &self,
        u: VertexId,
        cursor: &mut [usize],
        state: &TraversalState,
    ) -> Option<VertexId> {
        let neighbors = self.graph.neighbors(u);
        let pos = &mut cursor[u.index()];
        while *pos < neighbors.len() {
            let v = neighbors[*pos];
            if !state.is_visited(v) {
                return Some(v);
            }
            *pos += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(graph: &Graph, ids: &[VertexId]) -> Vec<String> {
        ids.iter().map(|&v| graph.name(v).to_string()).collect()
    }

    #[test]
    fn test_undirected_chain() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", None);
        graph.add_edge("B", "C", None);

        let forest = DfsEngine::new(&graph).run();
        let [a, b, c] = [0, 1, 2].map(VertexId::new);

        assert_eq!(names(&graph, &forest.discovery_order), vec!["A", "B", "C"]);
        assert_eq!(forest.timestamps.tin(a), Some(1));
        assert_eq!(forest.timestamps.tout(a), Some(6));
        assert_eq!(forest.timestamps.tin(b), Some(2));
        assert_eq!(forest.timestamps.tout(b), Some(5));
        assert_eq!(forest.timestamps.tin(c), Some(3));
        assert_eq!(forest.timestamps.tout(c), Some(4));

        assert_eq!(forest.children(a), &[b]);
        assert_eq!(forest.children(b), &[c]);
        assert!(forest.children(c).is_empty());
        assert_eq!(forest.parent(c), Some(b));
        assert_eq!(forest.roots, vec![a]);
    }

    #[test]
    fn test_directed_multiple_roots() {
        // C 只能通过入边到达 A，因此自成一棵树
        let mut graph = Graph::directed();
        graph.add_edge("A", "B", None);
        graph.add_edge("C", "A", None);
        graph.add_vertex("D", None);

        let forest = DfsEngine::new(&graph).run();
        let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);

        assert_eq!(forest.roots, vec![a, c, d]);
        assert_eq!(forest.tree_count(), 3);
        assert_eq!(forest.timestamps.tin(a), Some(1));
        assert_eq!(forest.timestamps.tin(b), Some(2));
        assert_eq!(forest.timestamps.tout(b), Some(3));
        assert_eq!(forest.timestamps.tout(a), Some(4));
        assert_eq!(forest.timestamps.tin(c), Some(5));
        assert_eq!(forest.timestamps.tout(c), Some(6));
        assert_eq!(forest.timestamps.tin(d), Some(7));
        assert_eq!(forest.timestamps.tout(d), Some(8));
        assert_eq!(forest.parent(c), None);
    }

    #[test]
    fn test_children_sorted_by_tin() {
        let mut graph = Graph::directed();
        graph.add_edge("R", "X", None);
        graph.add_edge("R", "Y", None);
        graph.add_edge("X", "Z", None);

        let forest = DfsEngine::new(&graph).run();
        let r = graph.index_of("R").unwrap();
        assert_eq!(names(&graph, forest.children(r)), vec!["X", "Y"]);
        assert_eq!(
            names(&graph, &forest.discovery_order),
            vec!["R", "X", "Z", "Y"]
        );
    }

    #[test]
    fn test_revisits_top_after_child_finishes() {
        // 完成 B 后回到 A，继续取 A 的下一个未访问邻居 C
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", None);
        graph.add_edge("A", "C", None);
        graph.add_edge("B", "C", None);

        let forest = DfsEngine::new(&graph).run();
        // A -> B -> C（通过 B-C 边），C 是 B 的子节点
        assert_eq!(names(&graph, &forest.discovery_order), vec!["A", "B", "C"]);
        let b = graph.index_of("B").unwrap();
        let c = graph.index_of("C").unwrap();
        assert_eq!(forest.parent(c), Some(b));
    }

    #[test]
    fn test_empty_graph() {
        let forest = DfsEngine::new(&Graph::directed()).run();
        assert!(forest.discovery_order.is_empty());
        assert!(forest.timestamps.is_empty());
    }
}
