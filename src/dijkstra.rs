/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::hash::Hash;

use crate::adjacency::Adjacency;
use crate::constants::Weight;
use crate::constants::{WEIGHT_MAX, WEIGHT_ZERO};
use crate::heap_item::HeapItem;
use crate::params::Params;
use crate::shortest_path::ShortestPath;

/// Single source, single target Dijkstra search with early exit at the target.
///
/// Edge weights must be non-negative. This is not checked: with negative weights the search
/// still terminates, but the returned paths are not necessarily the shortest ones.
///
/// A `Dijkstra` can be reused for many queries, possibly on different graphs. Every query
/// starts from a fresh state, the allocations are kept.
pub struct Dijkstra<N> {
    data: HashMap<N, Data<N>>,
    heap: BinaryHeap<HeapItem<N>>,
    seq: u64,
    max_weight: Weight,
    max_settled_nodes: usize,
}

impl<N: Eq + Hash + Clone> Dijkstra<N> {
    pub fn new() -> Self {
        Dijkstra {
            data: HashMap::new(),
            heap: BinaryHeap::new(),
            seq: 0,
            max_weight: WEIGHT_MAX,
            max_settled_nodes: usize::MAX,
        }
    }

    pub fn with_params(params: &Params) -> Self {
        let mut dijkstra = Dijkstra::new();
        dijkstra.set_max_weight(params.max_weight.unwrap_or(WEIGHT_MAX));
        dijkstra.set_max_settled_nodes(params.max_settled_nodes.unwrap_or(usize::MAX));
        dijkstra
    }

    pub fn set_max_weight(&mut self, weight: Weight) {
        self.max_weight = weight;
    }

    pub fn set_max_settled_nodes(&mut self, nodes: usize) {
        self.max_settled_nodes = nodes;
    }

    /// Calculates the shortest path from `start` to `end`. Returns `None` if `start` is not a
    /// node of `graph` or if `end` cannot be reached from it.
    pub fn calc_path<G>(&mut self, graph: &G, start: &N, end: &N) -> Option<ShortestPath<N>>
    where
        G: Adjacency<N> + ?Sized,
    {
        self.do_calc_path(graph, start, end);
        self.build_path(start, end)
    }

    pub fn calc_weight<G>(&mut self, graph: &G, start: &N, end: &N) -> Option<Weight>
    where
        G: Adjacency<N> + ?Sized,
    {
        self.do_calc_path(graph, start, end);
        self.get_final_weight(end)
    }

    fn do_calc_path<G>(&mut self, graph: &G, start: &N, end: &N)
    where
        G: Adjacency<N> + ?Sized,
    {
        self.data.clear();
        self.heap.clear();
        self.seq = 0;
        if !graph.contains_node(start) {
            return;
        }
        self.update_node(start.clone(), WEIGHT_ZERO, None);
        self.push(WEIGHT_ZERO, start.clone());

        let mut settled = 0;
        while let Some(curr) = self.heap.pop() {
            if self.is_settled(&curr.node) {
                // there is no decrease key operation, so outdated heap items are skipped here
                continue;
            }
            if settled >= self.max_settled_nodes || curr.weight > self.max_weight {
                break;
            }
            settled += 1;
            self.set_settled(&curr.node);
            if curr.node == *end {
                break;
            }
            for (adj, edge_weight) in graph.out_edges(&curr.node) {
                if self.is_settled(adj) {
                    continue;
                }
                let weight = curr.weight + *edge_weight;
                if weight < self.get_weight(adj) {
                    self.update_node(adj.clone(), weight, Some(curr.node.clone()));
                    self.push(weight, adj.clone());
                }
            }
        }
    }

    fn build_path(&self, start: &N, end: &N) -> Option<ShortestPath<N>> {
        let weight = self.get_final_weight(end)?;
        let mut path = vec![end.clone()];
        let mut node = end;
        while let Some(parent) = self.data.get(node).and_then(|d| d.parent.as_ref()) {
            path.push(parent.clone());
            node = parent;
        }
        path.reverse();
        Some(ShortestPath::new(start.clone(), end.clone(), weight, path))
    }

    /// The weight of `end` if it has been settled. Nodes that were only reached tentatively, for
    /// example because a search limit was hit, count as not found.
    fn get_final_weight(&self, end: &N) -> Option<Weight> {
        match self.data.get(end) {
            Some(data) if data.settled => Some(data.weight),
            _ => None,
        }
    }

    fn push(&mut self, weight: Weight, node: N) {
        self.heap.push(HeapItem::new(weight, self.seq, node));
        self.seq += 1;
    }

    fn update_node(&mut self, node: N, weight: Weight, parent: Option<N>) {
        let data = self.data.entry(node).or_insert_with(Data::new);
        data.weight = weight;
        data.parent = parent;
    }

    fn set_settled(&mut self, node: &N) {
        if let Some(data) = self.data.get_mut(node) {
            data.settled = true;
        }
    }

    fn is_settled(&self, node: &N) -> bool {
        self.data.get(node).map_or(false, |d| d.settled)
    }

    fn get_weight(&self, node: &N) -> Weight {
        self.data.get(node).map_or(WEIGHT_MAX, |d| d.weight)
    }
}

impl<N: Eq + Hash + Clone> Default for Dijkstra<N> {
    fn default() -> Self {
        Self::new()
    }
}

struct Data<N> {
    settled: bool,
    weight: Weight,
    parent: Option<N>,
}

impl<N> Data<N> {
    fn new() -> Self {
        Data {
            settled: false,
            weight: WEIGHT_MAX,
            parent: None,
        }
    }
}
