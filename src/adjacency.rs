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

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::constants::Weight;

/// A read-only view of a directed, weighted graph as seen by the shortest path search.
///
/// Nodes that are referenced as neighbors but are not part of the key set are treated as nodes
/// without outgoing edges, so implementations should return an empty slice for them rather than
/// fail.
pub trait Adjacency<N> {
    /// Returns true if `node` is a key of this graph, i.e. it is a valid start node.
    fn contains_node(&self, node: &N) -> bool;

    /// The outgoing `(neighbor, weight)` pairs of `node` in their iteration order.
    fn out_edges(&self, node: &N) -> &[(N, Weight)];
}

impl<N, S> Adjacency<N> for HashMap<N, Vec<(N, Weight)>, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn out_edges(&self, node: &N) -> &[(N, Weight)] {
        self.get(node).map(|edges| edges.as_slice()).unwrap_or(&[])
    }
}

impl<N: Ord> Adjacency<N> for BTreeMap<N, Vec<(N, Weight)>> {
    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn out_edges(&self, node: &N) -> &[(N, Weight)] {
        self.get(node).map(|edges| edges.as_slice()).unwrap_or(&[])
    }
}
