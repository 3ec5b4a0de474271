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

use thiserror::Error;

use crate::constants::CityId;

/// Errors raised while assembling a `RoadNetwork`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("a city with id {0} already exists")]
    DuplicateCityId(CityId),

    #[error("a city named '{0}' already exists")]
    DuplicateCityName(String),

    #[error("road starts and ends at city {0}")]
    LoopRoad(CityId),

    #[error("road references unknown city id {0}")]
    UnknownCityId(CityId),

    #[error("road from {from} to {to} has invalid {field}: {value}")]
    InvalidRoadCost {
        from: CityId,
        to: CityId,
        field: &'static str,
        value: f64,
    },
}

/// Reasons why no route can be returned for a query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("unknown city: '{0}'")]
    UnknownCity(String),

    #[error("origin and destination are the same city: {0}")]
    SameCity(String),

    #[error("no route exists from {from} to {to}")]
    NoRoute { from: String, to: String },
}
