//! The result record produced by a search.

use std::collections::BTreeMap;

use voxnav_core::Coord;

/// Field names written by every search.
pub mod field {
    pub const SOLVED: &str = "solved";
    pub const ALGORITHM: &str = "algorithm";
    pub const START: &str = "start_coords";
    pub const GOAL: &str = "goal_coords";
    pub const PATH: &str = "path";
    pub const TIME_SPENT: &str = "time_spent";
    pub const EXPLORED_NODES: &str = "explored_nodes";
    pub const PATH_LENGTH: &str = "path_length";
    pub const LINE_OF_SIGHT_CHECKS: &str = "line_of_sight_checks";
}

/// One value of a [`PathData`] record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DataValue {
    Text(String),
    Coord(Coord),
    Path(Vec<Coord>),
    Float(f64),
    Count(usize),
    Integer(i64),
    Bool(bool),
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Coord> for DataValue {
    fn from(v: Coord) -> Self {
        Self::Coord(v)
    }
}

impl From<Vec<Coord>> for DataValue {
    fn from(v: Vec<Coord>) -> Self {
        Self::Path(v)
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<usize> for DataValue {
    fn from(v: usize) -> Self {
        Self::Count(v)
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Ordered map from field name to value describing one search.
///
/// The typed accessors read the fields every search writes; they return
/// `None` if a field is missing or holds a different kind of value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PathData {
    fields: BTreeMap<String, DataValue>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<DataValue>) -> Option<DataValue> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&DataValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataValue)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn solved(&self) -> Option<bool> {
        match self.get(field::SOLVED)? {
            DataValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn algorithm(&self) -> Option<&str> {
        match self.get(field::ALGORITHM)? {
            DataValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn start(&self) -> Option<Coord> {
        self.coord(field::START)
    }

    pub fn goal(&self) -> Option<Coord> {
        self.coord(field::GOAL)
    }

    /// The path, goal first.
    pub fn path(&self) -> Option<&[Coord]> {
        match self.get(field::PATH)? {
            DataValue::Path(v) => Some(v),
            _ => None,
        }
    }

    /// Wall-clock search time in milliseconds.
    pub fn time_spent_ms(&self) -> Option<f64> {
        self.float(field::TIME_SPENT)
    }

    pub fn explored_nodes(&self) -> Option<usize> {
        self.count(field::EXPLORED_NODES)
    }

    /// Path length in physical units.
    pub fn path_length(&self) -> Option<f64> {
        self.float(field::PATH_LENGTH)
    }

    pub fn line_of_sight_checks(&self) -> Option<usize> {
        self.count(field::LINE_OF_SIGHT_CHECKS)
    }

    fn coord(&self, name: &str) -> Option<Coord> {
        match self.get(name)? {
            DataValue::Coord(v) => Some(*v),
            _ => None,
        }
    }

    fn float(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            DataValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn count(&self, name: &str) -> Option<usize> {
        match self.get(name)? {
            DataValue::Count(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors() {
        let mut d = PathData::new();
        d.insert(field::SOLVED, true);
        d.insert(field::ALGORITHM, "demo");
        d.insert(field::START, Coord::new(0, 0, 0));
        d.insert(field::PATH, vec![Coord::new(1, 0, 0), Coord::new(0, 0, 0)]);
        d.insert(field::PATH_LENGTH, 1.0);
        d.insert(field::EXPLORED_NODES, 3usize);
        assert_eq!(d.solved(), Some(true));
        assert_eq!(d.algorithm(), Some("demo"));
        assert_eq!(d.start(), Some(Coord::ZERO));
        assert_eq!(d.path().map(<[Coord]>::len), Some(2));
        assert_eq!(d.path_length(), Some(1.0));
        assert_eq!(d.explored_nodes(), Some(3));
        assert_eq!(d.goal(), None);
        assert_eq!(d.line_of_sight_checks(), None);
    }

    #[test]
    fn mismatched_kind_reads_as_none() {
        let mut d = PathData::new();
        d.insert(field::SOLVED, "yes");
        d.insert(field::EXPLORED_NODES, 4i64);
        assert_eq!(d.solved(), None);
        assert_eq!(d.explored_nodes(), None);
    }

    #[test]
    fn fields_iterate_in_name_order() {
        let mut d = PathData::new();
        d.insert("b", 1i64);
        d.insert("a", 2i64);
        assert_eq!(d.insert("b", 3i64), Some(DataValue::Integer(1)));
        let names: Vec<_> = d.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(d.len(), 2);
        assert!(!d.is_empty());
    }
}
