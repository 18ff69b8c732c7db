//! 遍历状态
//!
//! 每次遍历独占一份：访问状态、发现/完成时间戳、前驱，以及共享的时间计数器。

use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};

/// 顶点访问状态，只能单向推进
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitState {
    Unvisited,
    /// 已分配 tin
    Discovered,
    /// 已分配 tout
    Finished,
}

/// 时间计数器，从 1 开始，先自增再取值
#[derive(Debug, Default)]
pub struct Clock {
    time: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) -> u64 {
        self.time += 1;
        self.time
    }

    pub fn now(&self) -> u64 {
        self.time
    }
}

/// 按顶点下标寻址的遍历状态
#[derive(Debug)]
pub(crate) struct TraversalState {
    clock: Clock,
    state: Vec<VisitState>,
    tin: Vec<u64>,
    tout: Vec<u64>,
    predecessor: Vec<Option<VertexId>>,
}

impl TraversalState {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            clock: Clock::new(),
            state: vec![VisitState::Unvisited; vertex_count],
            tin: vec![0; vertex_count],
            tout: vec![0; vertex_count],
            predecessor: vec![None; vertex_count],
        }
    }

    pub(crate) fn is_visited(&self, v: VertexId) -> bool {
        self.state[v.index()] != VisitState::Unvisited
    }

    /// Unvisited -> Discovered
    pub(crate) fn discover(&mut self, v: VertexId, parent: Option<VertexId>) -> u64 {
        debug_assert_eq!(self.state[v.index()], VisitState::Unvisited);
        let t = self.clock.tick();
        self.state[v.index()] = VisitState::Discovered;
        self.tin[v.index()] = t;
        self.predecessor[v.index()] = parent;
        t
    }

    /// Discovered -> Finished
    pub(crate) fn finish(&mut self, v: VertexId) -> u64 {
        debug_assert_eq!(self.state[v.index()], VisitState::Discovered);
        let t = self.clock.tick();
        self.state[v.index()] = VisitState::Finished;
        self.tout[v.index()] = t;
        t
    }

    pub(crate) fn tin(&self, v: VertexId) -> u64 {
        self.tin[v.index()]
    }

    pub(crate) fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessor[v.index()]
    }

    /// 结束遍历，生成时间戳表
    pub(crate) fn into_table(self, graph: &Graph) -> TimestampTable {
        let entries = graph
            .vertices()
            .map(|vertex| {
                let i = vertex.id().index();
                TimestampEntry {
                    vertex: vertex.id(),
                    tin: self.tin[i],
                    tout: self.tout[i],
                }
            })
            .collect();
        TimestampTable { entries }
    }
}

/// 单个顶点的时间戳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampEntry {
    pub vertex: VertexId,
    pub tin: u64,
    pub tout: u64,
}

/// 时间戳表，按顶点插入顺序排列
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimestampTable {
    entries: Vec<TimestampEntry>,
}

impl TimestampTable {
    pub fn entries(&self) -> &[TimestampEntry] {
        &self.entries
    }

    pub fn get(&self, v: VertexId) -> Option<&TimestampEntry> {
        self.entries.get(v.index())
    }

    pub fn tin(&self, v: VertexId) -> Option<u64> {
        self.get(v).map(|e| e.tin)
    }

    pub fn tout(&self, v: VertexId) -> Option<u64> {
        self.get(v).map(|e| e.tout)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按 tin 升序排列的顶点
    pub fn discovery_order(&self) -> Vec<VertexId> {
        let mut order: Vec<&TimestampEntry> = self.entries.iter().collect();
        order.sort_by_key(|e| e.tin);
        order.into_iter().map(|e| e.vertex).collect()
    }
}
