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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CityId, Weight};
use crate::error::NetworkError;
use crate::input_graph::InputGraph;

/// The road attribute used as edge weight. Distance and travel time are independent weightings,
/// neither is derived from the other.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Metric {
    /// kilometers
    Distance,
    /// minutes
    Time,
}

impl Metric {
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Distance => "km",
            Metric::Time => "min",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Metric::Distance => write!(f, "distance"),
            Metric::Time => write!(f, "time"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CityKind {
    Capital,
    LargeCity,
    City,
    Town,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RoadKind {
    Motorway,
    Expressway,
    Local,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub kind: CityKind,
}

impl City {
    pub fn new(id: CityId, name: &str, kind: CityKind) -> Self {
        City {
            id,
            name: name.trim().to_string(),
            latitude: 0.0,
            longitude: 0.0,
            population: 0,
            kind,
        }
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Road {
    pub from: CityId,
    pub to: CityId,
    pub distance_km: f64,
    pub time_min: f64,
    /// One-way roads can only be driven from `from` to `to`.
    pub one_way: bool,
    pub kind: RoadKind,
    pub toll: bool,
}

impl Road {
    pub fn new(from: CityId, to: CityId, distance_km: f64, time_min: f64) -> Self {
        Road {
            from,
            to,
            distance_km,
            time_min,
            one_way: false,
            kind: RoadKind::Expressway,
            toll: false,
        }
    }

    pub fn one_way(from: CityId, to: CityId, distance_km: f64, time_min: f64) -> Self {
        Road {
            one_way: true,
            kind: RoadKind::Local,
            ..Road::new(from, to, distance_km, time_min)
        }
    }

    pub fn with_kind(mut self, kind: RoadKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_toll(mut self, toll: bool) -> Self {
        self.toll = toll;
        self
    }

    pub fn cost(&self, metric: Metric) -> Weight {
        match metric {
            Metric::Distance => self.distance_km,
            Metric::Time => self.time_min,
        }
    }

    /// Returns true if this road can be driven from `from` directly to `to`.
    pub fn connects(&self, from: CityId, to: CityId) -> bool {
        (self.from == from && self.to == to) || (!self.one_way && self.from == to && self.to == from)
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct NetworkStats {
    pub num_cities: usize,
    pub num_roads: usize,
    pub num_one_way_roads: usize,
    /// one-way roads count once, two-way roads twice
    pub num_directed_edges: usize,
    /// roads per city
    pub density: f64,
}

/// Cities and the roads between them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RoadNetwork {
    cities: Vec<City>,
    roads: Vec<Road>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        RoadNetwork::default()
    }

    /// Adds a city. Surrounding whitespace is removed from its name.
    pub fn add_city(&mut self, mut city: City) -> Result<(), NetworkError> {
        city.name = city.name.trim().to_string();
        if self.city(city.id).is_some() {
            return Err(NetworkError::DuplicateCityId(city.id));
        }
        if self.find_city(&city.name).is_some() {
            return Err(NetworkError::DuplicateCityName(city.name));
        }
        self.cities.push(city);
        Ok(())
    }

    pub fn add_road(&mut self, road: Road) -> Result<(), NetworkError> {
        if road.from == road.to {
            return Err(NetworkError::LoopRoad(road.from));
        }
        for id in &[road.from, road.to] {
            if self.city(*id).is_none() {
                return Err(NetworkError::UnknownCityId(*id));
            }
        }
        for (field, value) in &[("distance", road.distance_km), ("time", road.time_min)] {
            if !value.is_finite() || *value < 0.0 {
                return Err(NetworkError::InvalidRoadCost {
                    from: road.from,
                    to: road.to,
                    field: *field,
                    value: *value,
                });
            }
        }
        self.roads.push(road);
        Ok(())
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// Looks up a city by name, ignoring case and surrounding whitespace.
    pub fn find_city(&self, name: &str) -> Option<&City> {
        let name = name.trim().to_lowercase();
        self.cities
            .iter()
            .find(|c| c.name.trim().to_lowercase() == name)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Builds a graph snapshot using the given metric as edge weight. Every city becomes a node,
    /// also cities without any roads.
    pub fn to_input_graph(&self, metric: Metric) -> InputGraph<CityId> {
        let mut graph = InputGraph::new();
        for city in &self.cities {
            graph.add_node(city.id);
        }
        for road in &self.roads {
            let weight = road.cost(metric);
            if road.one_way {
                graph.add_edge(road.from, road.to, weight);
            } else {
                graph.add_edge_bidir(road.from, road.to, weight);
            }
        }
        debug!(
            "built {} graph with {} nodes and {} edges",
            metric,
            graph.get_num_nodes(),
            graph.get_num_edges()
        );
        graph
    }

    pub fn stats(&self) -> NetworkStats {
        let num_cities = self.cities.len();
        let num_roads = self.roads.len();
        let num_one_way_roads = self.roads.iter().filter(|r| r.one_way).count();
        NetworkStats {
            num_cities,
            num_roads,
            num_one_way_roads,
            num_directed_edges: 2 * num_roads - num_one_way_roads,
            density: if num_cities == 0 {
                0.0
            } else {
                num_roads as f64 / num_cities as f64
            },
        }
    }
}
