//! Restriction language for selecting credentials by attribute value.
//!
//! Queries are written as MongoDB style JSON objects:
//!
//! ```text
//! query = {subquery}
//! subquery = {subquery, ..., subquery}          // implicit $and
//! subquery = "$and": [{subquery}, ...]
//! subquery = "$or": [{subquery}, ...]
//! subquery = "$not": {subquery}
//! subquery = "attr": "value"                    // equality
//! subquery = "attr": {"$neq": "value"}          // also $gt, $gte, $lt, $lte, $like
//! subquery = "attr": {"$in": ["v1", "v2"]}
//! ```

use crate::errors::prelude::*;

use serde::ser::{Serialize, Serializer};
use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    And(Vec<Query>),
    Or(Vec<Query>),
    Not(Box<Query>),
    Eq(String, String),
    Neq(String, String),
    Gt(String, String),
    Gte(String, String),
    Lt(String, String),
    Lte(String, String),
    Like(String, String),
    In(String, Vec<String>),
}

impl Query {
    /// Parses a JSON query string.
    ///
    /// # Example
    /// ```
    /// use ursa_cl::query::Query;
    ///
    /// let query = Query::parse_from_json(r#"{"name":{"$in":["v1","v2"]}}"#).unwrap();
    /// assert_eq!(Query::In("name".to_string(), vec!["v1".to_string(), "v2".to_string()]), query);
    /// ```
    pub fn parse_from_json(json: &str) -> UrsaCryptoResult<Query> {
        trace!("Query::parse_from_json: >>> json: {:?}", json);

        let value: Value = serde_json::from_str(json)
            .map_err(|err| err.to_ursa(UrsaCryptoErrorKind::InvalidStructure, "Query is not valid JSON"))?;

        let query = Query::from_value(&value)?.optimize();

        trace!("Query::parse_from_json: <<< query: {:?}", query);

        Ok(query)
    }

    /// Unwraps single element `$and` and recurses into every node. A single
    /// element `$or` is kept so that it serializes back as written.
    pub fn optimize(self) -> Query {
        match self {
            Query::And(mut subqueries) if subqueries.len() == 1 => subqueries.remove(0).optimize(),
            Query::And(subqueries) => {
                Query::And(subqueries.into_iter().map(Query::optimize).collect())
            }
            Query::Or(subqueries) => {
                Query::Or(subqueries.into_iter().map(Query::optimize).collect())
            }
            Query::Not(subquery) => Query::Not(Box::new(subquery.optimize())),
            query => query,
        }
    }

    /// Attribute names the query restricts, in the order they appear.
    pub fn get_name(&self) -> Vec<&String> {
        match self {
            Query::And(subqueries) | Query::Or(subqueries) => {
                subqueries.iter().flat_map(Query::get_name).collect()
            }
            Query::Not(subquery) => subquery.get_name(),
            Query::Eq(name, _)
            | Query::Neq(name, _)
            | Query::Gt(name, _)
            | Query::Gte(name, _)
            | Query::Lt(name, _)
            | Query::Lte(name, _)
            | Query::Like(name, _)
            | Query::In(name, _) => vec![name],
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Query::And(subqueries) => json!({ "$and": Query::values(subqueries) }),
            Query::Or(subqueries) => json!({ "$or": Query::values(subqueries) }),
            Query::Not(subquery) => json!({ "$not": subquery.to_value() }),
            Query::Eq(name, value) => Query::clause(name, Value::from(value.as_str())),
            Query::Neq(name, value) => Query::restriction(name, "$neq", value),
            Query::Gt(name, value) => Query::restriction(name, "$gt", value),
            Query::Gte(name, value) => Query::restriction(name, "$gte", value),
            Query::Lt(name, value) => Query::restriction(name, "$lt", value),
            Query::Lte(name, value) => Query::restriction(name, "$lte", value),
            Query::Like(name, value) => Query::restriction(name, "$like", value),
            Query::In(name, values) => Query::clause(name, json!({ "$in": values })),
        }
    }

    fn values(subqueries: &[Query]) -> Vec<Value> {
        subqueries.iter().map(Query::to_value).collect()
    }

    fn clause(name: &str, value: Value) -> Value {
        let mut map = Map::new();
        map.insert(name.to_string(), value);
        Value::Object(map)
    }

    fn restriction(name: &str, op: &str, value: &str) -> Value {
        Query::clause(name, Query::clause(op, Value::from(value)))
    }

    fn from_value(value: &Value) -> UrsaCryptoResult<Query> {
        let map = value.as_object().ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("Query must be a JSON object, found {}", value),
            )
        })?;

        Query::from_map(map)
    }

    fn from_map(map: &Map<String, Value>) -> UrsaCryptoResult<Query> {
        map.iter()
            .map(|(key, value)| Query::from_clause(key, value))
            .collect::<UrsaCryptoResult<Vec<Query>>>()
            .map(Query::And)
    }

    fn from_clause(key: &str, value: &Value) -> UrsaCryptoResult<Query> {
        match key {
            "$and" => Ok(Query::And(Query::from_list(key, value)?)),
            "$or" => Ok(Query::Or(Query::from_list(key, value)?)),
            "$not" => Ok(Query::Not(Box::new(Query::from_value(value)?))),
            _ if key.starts_with('$') => Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("Unknown operator '{}'", key),
            )),
            name => match value {
                Value::String(value) => Ok(Query::Eq(name.to_string(), value.clone())),
                Value::Object(operator) => Query::from_operator(name, operator),
                _ => Err(err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Value of '{}' must be a string or an operator object", name),
                )),
            },
        }
    }

    fn from_list(key: &str, value: &Value) -> UrsaCryptoResult<Vec<Query>> {
        value
            .as_array()
            .ok_or_else(|| {
                err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("'{}' takes an array of queries", key),
                )
            })?
            .iter()
            .map(Query::from_value)
            .collect()
    }

    fn from_operator(name: &str, operator: &Map<String, Value>) -> UrsaCryptoResult<Query> {
        let mut entries = operator.iter();

        let (op, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(err_msg(
                    UrsaCryptoErrorKind::InvalidStructure,
                    format!("Restriction on '{}' must hold exactly one operator", name),
                ))
            }
        };

        let name = name.to_string();

        if op == "$in" {
            let values = value
                .as_array()
                .ok_or_else(|| {
                    err_msg(
                        UrsaCryptoErrorKind::InvalidStructure,
                        format!("'$in' on '{}' takes an array of strings", name),
                    )
                })?
                .iter()
                .map(|value| Query::string_value(&name, op, value))
                .collect::<UrsaCryptoResult<Vec<String>>>()?;
            return Ok(Query::In(name, values));
        }

        let value = Query::string_value(&name, op, value)?;

        match op.as_str() {
            "$neq" => Ok(Query::Neq(name, value)),
            "$gt" => Ok(Query::Gt(name, value)),
            "$gte" => Ok(Query::Gte(name, value)),
            "$lt" => Ok(Query::Lt(name, value)),
            "$lte" => Ok(Query::Lte(name, value)),
            "$like" => Ok(Query::Like(name, value)),
            _ => Err(err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("Unknown operator '{}' on '{}'", op, name),
            )),
        }
    }

    fn string_value(name: &str, op: &str, value: &Value) -> UrsaCryptoResult<String> {
        value.as_str().map(str::to_string).ok_or_else(|| {
            err_msg(
                UrsaCryptoErrorKind::InvalidStructure,
                format!("'{}' on '{}' takes string values, found {}", op, name, value),
            )
        })
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Query {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Query::from_value(&value)
            .map(Query::optimize)
            .map_err(de::Error::custom)
    }
}
