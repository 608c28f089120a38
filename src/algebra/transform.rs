//! Weight transformations that keep the edge structure.

use crate::error::{GraphError, GraphResult};
use crate::store::{Graph, NodeKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Transform {
    /// Weights as built.
    #[default]
    Original,
    /// Every weight becomes 1.
    Binary,
    /// Each focal's weights sum to 1.
    Row,
    /// All weights sum to 1.
    Double,
}

impl FromStr for Transform {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" => Ok(Transform::Original),
            "B" => Ok(Transform::Binary),
            "R" => Ok(Transform::Row),
            "D" => Ok(Transform::Double),
            _ => Err(GraphError::InvalidParameter(format!(
                "unknown transformation '{}', expected one of O, B, R, D",
                s
            ))),
        }
    }
}

impl<N: NodeKey> Graph<N> {
    /// Applies `transform`. Rows or graphs whose weights sum to zero stay zero.
    pub fn transform(&self, transform: Transform) -> GraphResult<Self> {
        match transform {
            Transform::Original => Ok(self.clone()),
            Transform::Binary => self.map_weights(|_| 1.0),
            Transform::Row => {
                let mut row_sums: HashMap<&N, f64> = HashMap::new();
                for (focal, _, w) in self.iter() {
                    *row_sums.entry(focal).or_insert(0.0) += w;
                }
                let weights = self
                    .iter()
                    .map(|(focal, _, w)| match row_sums[focal] {
                        s if s > 0.0 => w / s,
                        _ => 0.0,
                    })
                    .collect();
                self.with_weights(weights)
            }
            Transform::Double => {
                let total = self.total_weight();
                if total > 0.0 {
                    self.map_weights(|w| w / total)
                } else {
                    Ok(self.clone())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn star() -> Graph<u32> {
        Graph::new([(0, 1, 1.0), (0, 2, 3.0), (1, 0, 2.0), (2, 0, 0.0)]).unwrap()
    }

    #[rstest]
    #[case("o", Transform::Original)]
    #[case("B", Transform::Binary)]
    #[case(" r ", Transform::Row)]
    #[case("D", Transform::Double)]
    fn test_parse(#[case] input: &str, #[case] expected: Transform) {
        assert_eq!(input.parse::<Transform>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!("V".parse::<Transform>(), Err(GraphError::InvalidParameter(_))));
    }

    #[test]
    fn test_row_standardization() {
        let row = star().transform(Transform::Row).unwrap();
        assert_eq!(row.weight(&0, &1), Some(0.25));
        assert_eq!(row.weight(&0, &2), Some(0.75));
        assert_eq!(row.weight(&1, &0), Some(1.0));
        assert_eq!(row.weight(&2, &0), Some(0.0));
        assert!(row.same_structure(&star()));
    }

    #[test]
    fn test_binary_and_double() {
        let g = star();
        assert!(g.transform(Transform::Binary).unwrap().weights().iter().all(|&w| w == 1.0));
        let double = g.transform(Transform::Double).unwrap();
        assert!((double.total_weight() - 1.0).abs() < 1e-12);
        assert_eq!(g.transform(Transform::Original).unwrap(), g);
    }
}
