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

#[macro_use]
extern crate log;

use std::hash::Hash;

pub use crate::adjacency::Adjacency;
pub use crate::constants::*;
pub use crate::dijkstra::Dijkstra;
pub use crate::error::{NetworkError, RouteError};
pub use crate::input_graph::InputGraph;
pub use crate::params::Params;
pub use crate::road_network::{City, CityKind, Metric, NetworkStats, Road, RoadKind, RoadNetwork};
pub use crate::route::{calc_route, Leg, Route, RoutePlanner};
pub use crate::shortest_path::ShortestPath;

mod adjacency;
mod constants;
mod dijkstra;
mod error;
#[cfg(test)]
mod floyd_warshall;
mod heap_item;
mod input_graph;
mod params;
mod road_network;
mod route;
mod shortest_path;

/// Calculates the shortest path from `start` to `end`.
///
/// Returns `None` if `start` is not a node of `graph` or if there is no path to `end`. Edge
/// weights must not be negative, otherwise the result is unspecified.
pub fn find_shortest_path<N, G>(graph: &G, start: &N, end: &N) -> Option<ShortestPath<N>>
where
    N: Eq + Hash + Clone,
    G: Adjacency<N> + ?Sized,
{
    let mut calc = create_calculator();
    calc.calc_path(graph, start, end)
}

/// Creates a `Dijkstra` search that can be used to run many shortest path calculations in a row,
/// reusing its allocations. Use one calculator per thread.
pub fn create_calculator<N: Eq + Hash + Clone>() -> Dijkstra<N> {
    Dijkstra::new()
}
