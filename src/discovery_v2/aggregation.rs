// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Query aggregation results
//!
//! Aggregations are discriminated by their `type` field and may nest: most
//! result buckets carry their own sub-aggregations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An aggregation returned by a query, selected by `type`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryAggregation {
    Term(QueryTermAggregation),
    GroupBy(QueryGroupByAggregation),
    Histogram(QueryHistogramAggregation),
    Timeslice(QueryTimesliceAggregation),
    Nested(QueryNestedAggregation),
    Filter(QueryFilterAggregation),
    Min(QueryCalculationAggregation),
    Max(QueryCalculationAggregation),
    Sum(QueryCalculationAggregation),
    Average(QueryCalculationAggregation),
    UniqueCount(QueryCalculationAggregation),
    TopHits(QueryTopHitsAggregation),
    Pair(QueryPairAggregation),
    Trend(QueryTrendAggregation),
    Topic(QueryTopicAggregation),
    /// A type this client does not know about
    #[serde(other)]
    Unknown,
}

impl QueryAggregation {
    /// The wire discriminator of this aggregation
    pub fn type_name(&self) -> &'static str {
        match self {
            QueryAggregation::Term(_) => "term",
            QueryAggregation::GroupBy(_) => "group_by",
            QueryAggregation::Histogram(_) => "histogram",
            QueryAggregation::Timeslice(_) => "timeslice",
            QueryAggregation::Nested(_) => "nested",
            QueryAggregation::Filter(_) => "filter",
            QueryAggregation::Min(_) => "min",
            QueryAggregation::Max(_) => "max",
            QueryAggregation::Sum(_) => "sum",
            QueryAggregation::Average(_) => "average",
            QueryAggregation::UniqueCount(_) => "unique_count",
            QueryAggregation::TopHits(_) => "top_hits",
            QueryAggregation::Pair(_) => "pair",
            QueryAggregation::Trend(_) => "trend",
            QueryAggregation::Topic(_) => "topic",
            QueryAggregation::Unknown => "unknown",
        }
    }

    /// Sub-aggregations of every result bucket, in order
    pub fn sub_aggregations(&self) -> Vec<&QueryAggregation> {
        fn flatten(buckets: &[Option<Vec<QueryAggregation>>]) -> Vec<&QueryAggregation> {
            buckets.iter().flatten().flatten().collect()
        }

        match self {
            QueryAggregation::Term(agg) => {
                agg.results.iter().flat_map(|r| r.aggregations.iter().flatten()).collect()
            }
            QueryAggregation::GroupBy(agg) => {
                agg.results.iter().flat_map(|r| r.aggregations.iter().flatten()).collect()
            }
            QueryAggregation::Histogram(agg) => {
                agg.results.iter().flat_map(|r| r.aggregations.iter().flatten()).collect()
            }
            QueryAggregation::Timeslice(agg) => {
                agg.results.iter().flat_map(|r| r.aggregations.iter().flatten()).collect()
            }
            QueryAggregation::Nested(agg) => flatten(std::slice::from_ref(&agg.aggregations)),
            QueryAggregation::Filter(agg) => flatten(std::slice::from_ref(&agg.aggregations)),
            QueryAggregation::Pair(agg) => {
                agg.results.iter().flat_map(|r| r.aggregations.iter().flatten()).collect()
            }
            QueryAggregation::Trend(agg) => {
                agg.results.iter().flat_map(|r| r.aggregations.iter().flatten()).collect()
            }
            QueryAggregation::Topic(agg) => {
                agg.results.iter().flat_map(|r| r.aggregations.iter().flatten()).collect()
            }
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Bucketing aggregations
// ============================================================================

/// Most frequent values of a field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTermAggregation {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub results: Vec<QueryTermAggregationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTermAggregationResult {
    pub key: String,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevancy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_matching_documents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_matching_results: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Documents grouped by a query condition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryGroupByAggregation {
    #[serde(default)]
    pub results: Vec<QueryGroupByAggregationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryGroupByAggregationResult {
    pub key: String,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevancy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_matching_documents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_matching_results: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Numeric field values split into fixed-width intervals
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryHistogramAggregation {
    pub field: String,
    pub interval: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub results: Vec<QueryHistogramAggregationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryHistogramAggregationResult {
    pub key: i64,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Date field values split into calendar intervals
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTimesliceAggregation {
    pub field: String,
    /// e.g. `1d`, `1w`, `1M`
    pub interval: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub results: Vec<QueryTimesliceAggregationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTimesliceAggregationResult {
    pub key_as_string: String,
    /// Milliseconds since the epoch
    pub key: i64,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Aggregations restricted to a nested document path
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryNestedAggregation {
    pub path: String,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Aggregations restricted to documents matching a filter
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryFilterAggregation {
    #[serde(rename = "match")]
    pub match_filter: String,
    pub matching_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

// ============================================================================
// Metric aggregations
// ============================================================================

/// `min`, `max`, `sum`, `average` or `unique_count` of a field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryCalculationAggregation {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// The highest ranked documents of the enclosing bucket
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTopHitsAggregation {
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<QueryTopHitsAggregationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTopHitsAggregationResult {
    pub matching_results: i64,
    #[serde(default)]
    pub hits: Vec<Map<String, Value>>,
}

// ============================================================================
// Relation aggregations
// ============================================================================

/// Cross-tabulation of two term or group_by aggregations
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryPairAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_estimated_matching_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_total_matching_documents: Option<bool>,
    #[serde(default)]
    pub results: Vec<QueryPairAggregationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryPairAggregationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// How a facet's frequency changes across time segments
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTrendAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_segments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_estimated_matching_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_total_matching_documents: Option<bool>,
    #[serde(default)]
    pub results: Vec<QueryTrendAggregationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTrendAggregationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Facet values that stand out in the latest time segment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTopicAggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_segments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_estimated_matching_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_total_matching_documents: Option<bool>,
    #[serde(default)]
    pub results: Vec<QueryTopicAggregationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryTopicAggregationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_term_aggregation() {
        let agg: QueryAggregation = serde_json::from_value(json!({
            "type": "nested",
            "path": "enriched_text.entities",
            "matching_results": 12,
            "aggregations": [{
                "type": "term",
                "field": "enriched_text.entities.text",
                "count": 2,
                "results": [
                    {"key": "IBM", "matching_results": 8, "aggregations": [
                        {"type": "max", "field": "year", "value": 2020.0}
                    ]},
                    {"key": "Watson", "matching_results": 4}
                ]
            }]
        }))
        .unwrap();

        assert_eq!(agg.type_name(), "nested");
        let QueryAggregation::Nested(nested) = &agg else {
            panic!("expected nested, got {:?}", agg);
        };
        assert_eq!(nested.matching_results, 12);

        let subs = agg.sub_aggregations();
        assert_eq!(subs.len(), 1);
        let QueryAggregation::Term(term) = subs[0] else {
            panic!("expected term");
        };
        assert_eq!(term.results[0].key, "IBM");
        assert_eq!(
            subs[0].sub_aggregations()[0],
            &QueryAggregation::Max(QueryCalculationAggregation {
                field: "year".to_string(),
                value: Some(2020.0),
            })
        );
    }

    #[test]
    fn test_filter_uses_match_key() {
        let agg: QueryAggregation = serde_json::from_value(json!({
            "type": "filter",
            "match": "enriched_text.sentiment.label::positive",
            "matching_results": 3
        }))
        .unwrap();
        match agg {
            QueryAggregation::Filter(filter) => {
                assert_eq!(filter.match_filter, "enriched_text.sentiment.label::positive");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_tolerated() {
        let agg: QueryAggregation =
            serde_json::from_value(json!({"type": "brand_new", "field": "x"})).unwrap();
        assert_eq!(agg, QueryAggregation::Unknown);
    }

    #[test]
    fn test_serializes_discriminator() {
        let agg = QueryAggregation::UniqueCount(QueryCalculationAggregation {
            field: "author".to_string(),
            value: Some(7.0),
        });
        assert_eq!(
            serde_json::to_value(&agg).unwrap(),
            json!({"type": "unique_count", "field": "author", "value": 7.0})
        );
    }
}
