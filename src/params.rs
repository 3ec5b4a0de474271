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
use crate::road_network::Metric;

/// Settings for route queries. Missing fields fall back to their defaults when deserializing.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct Params {
    /// Selects whether road distances or travel times are used as edge weights.
    pub metric: Metric,
    /// The search stops once the smallest tentative weight exceeds this value and targets that
    /// have not been settled by then are reported as not found. `None` means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<Weight>,
    /// The maximum number of nodes settled per query. With `None` the search only ends once the
    /// target is settled or all reachable nodes have been.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_settled_nodes: Option<usize>,
}

impl Params {
    pub fn new(
        metric: Metric,
        max_weight: Option<Weight>,
        max_settled_nodes: Option<usize>,
    ) -> Self {
        Params {
            metric,
            max_weight,
            max_settled_nodes,
        }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = Some(max_weight);
        self
    }

    pub fn with_max_settled_nodes(mut self, max_settled_nodes: usize) -> Self {
        self.max_settled_nodes = Some(max_settled_nodes);
        self
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::new(Metric::Distance, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_survives_json() {
        let params = Params::default();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(r#"{"metric":"Distance"}"#, json);
        assert_eq!(params, serde_json::from_str::<Params>(&json).unwrap());
    }

    #[test]
    fn limits_survive_json() {
        let params = Params::default()
            .with_metric(Metric::Time)
            .with_max_weight(90.5)
            .with_max_settled_nodes(1_000);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(params, serde_json::from_str::<Params>(&json).unwrap());
    }

    #[test]
    fn missing_fields_use_defaults() {
        assert_eq!(Params::default(), serde_json::from_str::<Params>("{}").unwrap());
        let params: Params = serde_json::from_str(r#"{"metric":"Time"}"#).unwrap();
        assert_eq!(Params::default().with_metric(Metric::Time), params);
        let params: Params = serde_json::from_str(r#"{"max_settled_nodes":3}"#).unwrap();
        assert_eq!(Some(3), params.max_settled_nodes);
        assert_eq!(None, params.max_weight);
    }

    #[test]
    fn limits_survive_bincode() {
        let params = Params::default().with_max_weight(500.0);
        let bytes = bincode::serialize(&params).unwrap();
        assert_eq!(params, bincode::deserialize::<Params>(&bytes).unwrap());
    }
}
