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

use std::cmp::Ordering;

use crate::constants::Weight;

/// Entry of the search's `BinaryHeap`. The heap pops the smallest weight first and among equal
/// weights the item that was pushed first.
#[derive(Copy, Clone, Debug)]
pub struct HeapItem<N> {
    pub weight: Weight,
    pub seq: u64,
    pub node: N,
}

impl<N> HeapItem<N> {
    pub fn new(weight: Weight, seq: u64, node: N) -> HeapItem<N> {
        HeapItem { weight, seq, node }
    }
}

impl<N> PartialOrd for HeapItem<N> {
    fn partial_cmp(&self, other: &HeapItem<N>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapItem<N> {
    fn cmp(&self, other: &HeapItem<N>) -> Ordering {
        // reversed, BinaryHeap is a max-heap
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialEq for HeapItem<N> {
    fn eq(&self, other: &HeapItem<N>) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for HeapItem<N> {}
