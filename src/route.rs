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

use crate::constants::{CityId, Weight};
use crate::dijkstra::Dijkstra;
use crate::error::RouteError;
use crate::input_graph::InputGraph;
use crate::params::Params;
use crate::road_network::{City, Metric, Road, RoadKind, RoadNetwork};

/// One hop of a route, i.e. the road taken between two consecutive cities.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub time_min: f64,
    pub kind: RoadKind,
    pub toll: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    pub metric: Metric,
    /// The optimized cost in the unit of `metric`.
    pub cost: Weight,
    pub legs: Vec<Leg>,
}

impl Route {
    /// The city names from origin to destination.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.legs.iter().map(|l| l.from.as_str()).collect();
        if let Some(last) = self.legs.last() {
            cities.push(last.to.as_str());
        }
        cities
    }

    pub fn total_distance_km(&self) -> f64 {
        self.legs.iter().map(|l| l.distance_km).sum()
    }

    pub fn total_time_min(&self) -> f64 {
        self.legs.iter().map(|l| l.time_min).sum()
    }

    pub fn num_intermediate_stops(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    pub fn average_leg_distance_km(&self) -> f64 {
        if self.legs.is_empty() {
            0.0
        } else {
            self.total_distance_km() / self.legs.len() as f64
        }
    }

    /// `None` if the route takes no time at all.
    pub fn average_speed_kmh(&self) -> Option<f64> {
        let time = self.total_time_min();
        if time > 0.0 {
            Some(self.total_distance_km() / (time / 60.0))
        } else {
            None
        }
    }

    pub fn has_tolls(&self) -> bool {
        self.legs.iter().any(|l| l.toll)
    }
}

/// Answers route queries on a `RoadNetwork`. The graph snapshot for the configured metric is
/// built once and rebuilt whenever the metric changes.
pub struct RoutePlanner<'a> {
    network: &'a RoadNetwork,
    params: Params,
    graph: InputGraph<CityId>,
    dijkstra: Dijkstra<CityId>,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(network: &'a RoadNetwork, params: Params) -> Self {
        RoutePlanner {
            network,
            params,
            graph: network.to_input_graph(params.metric),
            dijkstra: Dijkstra::with_params(&params),
        }
    }

    pub fn get_params(&self) -> &Params {
        &self.params
    }

    pub fn set_params(&mut self, params: Params) {
        if params.metric != self.params.metric {
            self.graph = self.network.to_input_graph(params.metric);
        }
        self.dijkstra = Dijkstra::with_params(&params);
        self.params = params;
    }

    /// Calculates the cheapest route between the cities with the given names.
    pub fn calc_route(&mut self, from: &str, to: &str) -> Result<Route, RouteError> {
        let origin = self.resolve(from)?;
        let destination = self.resolve(to)?;
        if origin.id == destination.id {
            return Err(RouteError::SameCity(origin.name.clone()));
        }
        debug!(
            "calculating route from {} to {} by {}",
            origin.name, destination.name, self.params.metric
        );
        let path = match self.dijkstra.calc_path(&self.graph, &origin.id, &destination.id) {
            Some(path) => path,
            None => {
                debug!("no route from {} to {}", origin.name, destination.name);
                return Err(RouteError::NoRoute {
                    from: origin.name.clone(),
                    to: destination.name.clone(),
                });
            }
        };
        let legs = path
            .get_nodes()
            .windows(2)
            .map(|w| self.leg(w[0], w[1]))
            .collect::<Result<Vec<Leg>, RouteError>>()?;
        let route = Route {
            metric: self.params.metric,
            cost: path.get_weight(),
            legs,
        };
        debug!(
            "found route with cost {} {} and {} legs",
            route.cost,
            route.metric.unit(),
            route.legs.len()
        );
        Ok(route)
    }

    fn resolve(&self, name: &str) -> Result<&'a City, RouteError> {
        self.network
            .find_city(name)
            .ok_or_else(|| RouteError::UnknownCity(name.trim().to_string()))
    }

    /// The road the search used between two consecutive cities, the cheapest one under the
    /// current metric and the first one among equally cheap roads.
    fn leg(&self, from: CityId, to: CityId) -> Result<Leg, RouteError> {
        let metric = self.params.metric;
        let road = self
            .network
            .roads()
            .iter()
            .filter(|r| r.connects(from, to))
            .fold(None, |best: Option<&Road>, r| match best {
                Some(b) if b.cost(metric) <= r.cost(metric) => Some(b),
                _ => Some(r),
            });
        let name = |id: CityId| {
            self.network
                .city(id)
                .map(|c| c.name.clone())
                .ok_or_else(|| RouteError::UnknownCity(id.to_string()))
        };
        match road {
            Some(road) => Ok(Leg {
                from: name(from)?,
                to: name(to)?,
                distance_km: road.distance_km,
                time_min: road.time_min,
                kind: road.kind,
                toll: road.toll,
            }),
            None => Err(RouteError::NoRoute {
                from: name(from)?,
                to: name(to)?,
            }),
        }
    }
}

/// Calculates a single route, see `RoutePlanner` for running many queries on the same network.
pub fn calc_route(
    network: &RoadNetwork,
    from: &str,
    to: &str,
    params: &Params,
) -> Result<Route, RouteError> {
    RoutePlanner::new(network, *params).calc_route(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road_network::CityKind;

    /// A few Spanish cities. The Madrid - Barcelona motorway is longer than the way via Zaragoza
    /// but faster.
    fn spain() -> RoadNetwork {
        let mut n = RoadNetwork::new();
        let cities = vec![
            (1, "Madrid", CityKind::Capital),
            (2, "Barcelona", CityKind::Capital),
            (3, "Valencia", CityKind::LargeCity),
            (5, "Zaragoza", CityKind::LargeCity),
            (9, "Las Palmas", CityKind::City),
            (11, "Alicante", CityKind::City),
            (26, "Móstoles", CityKind::Town),
            (27, "Alcalá de Henares", CityKind::Town),
        ];
        for (id, name, kind) in cities {
            n.add_city(City::new(id, name, kind)).unwrap();
        }
        let roads = vec![
            Road::new(1, 5, 300.0, 195.0),
            Road::new(5, 2, 250.0, 180.0)
                .with_kind(RoadKind::Motorway)
                .with_toll(true),
            Road::new(1, 2, 621.0, 340.0).with_kind(RoadKind::Motorway),
            Road::new(1, 3, 355.0, 210.0),
            Road::new(3, 11, 166.0, 100.0)
                .with_kind(RoadKind::Motorway)
                .with_toll(true),
            Road::one_way(1, 26, 20.0, 25.0),
            Road::one_way(26, 27, 25.0, 30.0),
        ];
        for road in roads {
            n.add_road(road).unwrap();
        }
        n
    }

    #[test]
    fn shortest_by_distance() {
        let n = spain();
        let route = calc_route(&n, "Madrid", "Barcelona", &Params::default()).unwrap();
        assert_eq!(Metric::Distance, route.metric);
        assert_eq!(550.0, route.cost);
        assert_eq!(vec!["Madrid", "Zaragoza", "Barcelona"], route.cities());
        assert_eq!(550.0, route.total_distance_km());
        assert_eq!(375.0, route.total_time_min());
        assert_eq!(1, route.num_intermediate_stops());
        assert_eq!(275.0, route.average_leg_distance_km());
        assert!(route.has_tolls());
    }

    #[test]
    fn fastest_by_time() {
        let n = spain();
        let params = Params::default().with_metric(Metric::Time);
        let route = calc_route(&n, "Madrid", "Barcelona", &params).unwrap();
        assert_eq!(340.0, route.cost);
        assert_eq!(vec!["Madrid", "Barcelona"], route.cities());
        // both totals come from the road itself
        assert_eq!(621.0, route.total_distance_km());
        assert_eq!(340.0, route.total_time_min());
        assert_eq!(0, route.num_intermediate_stops());
        assert!(!route.has_tolls());
        let speed = route.average_speed_kmh().unwrap();
        assert!((speed - 621.0 / (340.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn switching_metric_rebuilds_graph() {
        let n = spain();
        let mut planner = RoutePlanner::new(&n, Params::default());
        assert_eq!(550.0, planner.calc_route("madrid", "barcelona").unwrap().cost);
        planner.set_params(planner.get_params().with_metric(Metric::Time));
        assert_eq!(340.0, planner.calc_route("madrid", "barcelona").unwrap().cost);
        planner.set_params(Params::default());
        assert_eq!(550.0, planner.calc_route("madrid", "barcelona").unwrap().cost);
    }

    #[test]
    fn two_way_roads_work_in_both_directions() {
        let n = spain();
        let mut planner = RoutePlanner::new(&n, Params::default());
        let route = planner.calc_route("Alicante", "Zaragoza").unwrap();
        assert_eq!(166.0 + 355.0 + 300.0, route.cost);
        assert_eq!(
            vec!["Alicante", "Valencia", "Madrid", "Zaragoza"],
            route.cities()
        );
    }

    #[test]
    fn one_way_roads() {
        let n = spain();
        let mut planner = RoutePlanner::new(&n, Params::default());
        let route = planner.calc_route("Madrid", "Alcalá de Henares").unwrap();
        assert_eq!(45.0, route.cost);
        assert_eq!(
            Err(RouteError::NoRoute {
                from: "Alcalá de Henares".to_string(),
                to: "Madrid".to_string()
            }),
            planner.calc_route("Alcalá de Henares", "Madrid")
        );
    }

    #[test]
    fn island_is_unreachable() {
        let n = spain();
        let err = calc_route(&n, "Madrid", "Las Palmas", &Params::default()).unwrap_err();
        assert_eq!("no route exists from Madrid to Las Palmas", err.to_string());
    }

    #[test]
    fn rejects_unknown_and_equal_cities() {
        let n = spain();
        let mut planner = RoutePlanner::new(&n, Params::default());
        assert_eq!(
            Err(RouteError::UnknownCity("Atlantis".to_string())),
            planner.calc_route(" Atlantis ", "Madrid")
        );
        assert_eq!(
            Err(RouteError::UnknownCity("Lisboa".to_string())),
            planner.calc_route("Madrid", "Lisboa")
        );
        assert_eq!(
            Err(RouteError::SameCity("Madrid".to_string())),
            planner.calc_route("Madrid", "MADRID")
        );
    }

    #[test]
    fn route_length_limit() {
        let n = spain();
        let params = Params::default().with_max_weight(500.0);
        assert!(calc_route(&n, "Madrid", "Valencia", &params).is_ok());
        assert!(matches!(
            calc_route(&n, "Madrid", "Barcelona", &params),
            Err(RouteError::NoRoute { .. })
        ));
    }

    #[test]
    fn legs_use_cheapest_parallel_road() {
        let mut n = spain();
        n.add_road(Road::one_way(1, 3, 350.0, 260.0)).unwrap();
        let route = calc_route(&n, "Madrid", "Valencia", &Params::default()).unwrap();
        assert_eq!(350.0, route.cost);
        assert_eq!(260.0, route.total_time_min());
        assert_eq!(RoadKind::Local, route.legs[0].kind);
        let params = Params::default().with_metric(Metric::Time);
        let route = calc_route(&n, "Madrid", "Valencia", &params).unwrap();
        assert_eq!(210.0, route.cost);
        assert_eq!(355.0, route.total_distance_km());
    }
}
