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

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use rand::Rng;

use crate::adjacency::Adjacency;
use crate::constants::Weight;

/// Adjacency lists for a directed, weighted graph. Nodes keep their insertion order and every
/// adjacency list keeps the order in which its edges were added.
#[derive(Clone)]
pub struct InputGraph<N> {
    nodes: Vec<N>,
    node_index: HashMap<N, usize>,
    out_edges: Vec<Vec<(N, Weight)>>,
    num_edges: usize,
}

impl<N: Eq + Hash + Clone> InputGraph<N> {
    pub fn new() -> Self {
        InputGraph {
            nodes: Vec::new(),
            node_index: HashMap::new(),
            out_edges: Vec::new(),
            num_edges: 0,
        }
    }

    /// Adds a node without any edges. Adding an existing node has no effect.
    pub fn add_node(&mut self, node: N) {
        self.index_of(node);
    }

    pub fn add_edge(&mut self, from: N, to: N, weight: Weight) -> usize {
        self.do_add_edge(from, to, weight, false)
    }

    /// Adds two directed edges, one in each direction, both with the given weight.
    pub fn add_edge_bidir(&mut self, from: N, to: N, weight: Weight) -> usize {
        self.do_add_edge(from, to, weight, true)
    }

    pub fn get_num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn get_num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn get_nodes(&self) -> &[N] {
        &self.nodes
    }

    /// All directed edges as `(from, to, weight)`, grouped by source node in node order.
    pub fn get_edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> + '_ {
        self.nodes
            .iter()
            .zip(self.out_edges.iter())
            .flat_map(|(from, edges)| edges.iter().map(move |(to, w)| (from, to, *w)))
    }

    fn index_of(&mut self, node: N) -> usize {
        if let Some(&index) = self.node_index.get(&node) {
            return index;
        }
        let index = self.nodes.len();
        self.node_index.insert(node.clone(), index);
        self.nodes.push(node);
        self.out_edges.push(Vec::new());
        index
    }

    fn do_add_edge(&mut self, from: N, to: N, weight: Weight, bidir: bool) -> usize {
        if from == to {
            warn!("Loop edges are not allowed. Skipped edge with weight: {}", weight);
            return 0;
        }
        if !weight.is_finite() || weight < 0.0 {
            warn!(
                "Edge weights must be finite and non-negative. Skipped edge with weight: {}",
                weight
            );
            return 0;
        }
        let from_index = self.index_of(from.clone());
        let to_index = self.index_of(to.clone());
        self.out_edges[from_index].push((to, weight));
        self.num_edges += 1;
        if bidir {
            self.out_edges[to_index].push((from, weight));
            self.num_edges += 1;
            2
        } else {
            1
        }
    }
}

impl InputGraph<usize> {
    /// Builds a random graph on the nodes `0..num_nodes`, mostly used for testing purposes
    #[cfg(test)]
    pub fn random(rng: &mut StdRng, num_nodes: usize, mean_degree: f32) -> Self {
        let num_edges = (mean_degree * num_nodes as f32) as usize;
        let mut result = InputGraph::new();
        for node in 0..num_nodes {
            result.add_node(node);
        }
        let mut edge_count = 0;
        while edge_count < num_edges {
            let head = rng.gen_range(0, num_nodes);
            let tail = rng.gen_range(0, num_nodes);
            // integer weights keep sums exact, zero weights and duplicates are allowed on purpose
            let weight = rng.gen_range(0, 100) as Weight;
            edge_count += result.add_edge(tail, head, weight);
        }
        result
    }

    #[cfg(test)]
    pub fn unit_test_output_string(&self) -> String {
        self.get_edges()
            .map(|(from, to, weight)| format!("g.add_edge({}, {}, {:?});", from, to, weight))
            .collect::<Vec<String>>()
            .join("\n")
            + "\n"
    }
}

impl<N: Eq + Hash + Clone> Adjacency<N> for InputGraph<N> {
    fn contains_node(&self, node: &N) -> bool {
        self.node_index.contains_key(node)
    }

    fn out_edges(&self, node: &N) -> &[(N, Weight)] {
        match self.node_index.get(node) {
            Some(&index) => &self.out_edges[index],
            None => &[],
        }
    }
}

impl<N: fmt::Debug + Eq + Hash + Clone> fmt::Debug for InputGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (from, to, weight) in self.get_edges() {
            writeln!(f, "g.add_edge({:?}, {:?}, {:?});", from, to, weight)?;
        }
        Ok(())
    }
}

impl<N: Eq + Hash + Clone> Default for InputGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
