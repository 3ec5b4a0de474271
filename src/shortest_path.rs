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

use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::constants::WEIGHT_MAX;
use crate::constants::WEIGHT_ZERO;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ShortestPath<N> {
    source: N,
    target: N,
    weight: Weight,
    nodes: Vec<N>,
}

impl<N: PartialEq> PartialEq for ShortestPath<N> {
    fn eq(&self, other: &ShortestPath<N>) -> bool {
        self.source == other.source && self.target == other.target && self.weight == other.weight
        // do not insist on equal nodes arrays, because there can be unambiguous shortest paths
    }
}

impl<N: Clone> ShortestPath<N> {
    pub fn new(source: N, target: N, weight: Weight, nodes: Vec<N>) -> Self {
        ShortestPath {
            source,
            target,
            weight,
            nodes,
        }
    }

    pub fn singular(node: N) -> Self {
        ShortestPath {
            source: node.clone(),
            target: node.clone(),
            weight: WEIGHT_ZERO,
            nodes: vec![node],
        }
    }

    pub fn none(source: N, target: N) -> Self {
        ShortestPath {
            source,
            target,
            weight: WEIGHT_MAX,
            nodes: vec![],
        }
    }

    pub fn get_source(&self) -> &N {
        &self.source
    }

    pub fn get_target(&self) -> &N {
        &self.target
    }

    pub fn get_weight(&self) -> Weight {
        self.weight
    }

    /// The nodes from source to target, both inclusive. Empty if no path was found.
    pub fn get_nodes(&self) -> &Vec<N> {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    pub fn is_found(&self) -> bool {
        self.weight != WEIGHT_MAX
    }
}
