use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A node of the dataset exactly as it arrives over the wire.
///
/// Interior nodes carry `name` and `children`; leaves carry `name`, `category`
/// and `value`. The published sales dataset encodes `value` as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub value: Option<RawValue>,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn parse(&self) -> Option<f64> {
        match self {
            RawValue::Number(v) => Some(*v),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// The value as written in the source document. String values keep
    /// their exact digits, so `"29.80"` stays `"29.80"`.
    pub fn display(&self) -> String {
        match self {
            RawValue::Number(v) => v.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("invalid JSON: {0}")]
    Json(String),
    #[error("{path}: leaf is missing `{field}`")]
    MissingField { path: String, field: &'static str },
    #[error("{path}: value {raw:?} is not a finite number")]
    InvalidValue { path: String, raw: String },
    #[error("{path}: value {value} is negative")]
    NegativeValue { path: String, value: String },
}

/// Validated dataset tree. Every leaf is guaranteed to carry a name, a
/// category and a finite non-negative value.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub root: DatasetNode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetNode {
    Branch {
        name: String,
        children: Vec<DatasetNode>,
    },
    Leaf(Leaf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub name: String,
    pub category: String,
    /// Numeric value used for sizing.
    pub value: f64,
    /// Value text exactly as it appeared in the source, used for display.
    pub value_text: String,
}

impl Leaf {
    /// Leaf built in code rather than parsed; its display text is the
    /// shortest decimal form of `value`.
    pub fn new(name: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            value,
            value_text: value.to_string(),
        }
    }
}

impl Dataset {
    pub fn from_json(body: &str) -> Result<Self, DatasetError> {
        let raw: RawNode =
            serde_json::from_str(body).map_err(|e| DatasetError::Json(e.to_string()))?;
        Self::from_raw(&raw)
    }

    /// Validate a raw tree. Missing or malformed leaf fields are rejected
    /// rather than defaulted.
    pub fn from_raw(raw: &RawNode) -> Result<Self, DatasetError> {
        let root = convert(raw, &mut Vec::new())?;
        Ok(Self { root })
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Leaves in document order.
    pub fn leaves(&self) -> impl Iterator<Item = &Leaf> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                match node {
                    DatasetNode::Leaf(leaf) => return Some(leaf),
                    DatasetNode::Branch { children, .. } => {
                        stack.extend(children.iter().rev());
                    }
                }
            }
            None
        })
    }
}

impl DatasetNode {
    pub fn name(&self) -> &str {
        match self {
            DatasetNode::Branch { name, .. } => name,
            DatasetNode::Leaf(leaf) => &leaf.name,
        }
    }
}

fn convert(raw: &RawNode, path: &mut Vec<String>) -> Result<DatasetNode, DatasetError> {
    path.push(raw.name.clone().unwrap_or_else(|| "?".to_string()));
    let node = if raw.children.is_empty() {
        convert_leaf(raw, path)?
    } else {
        let children = raw
            .children
            .iter()
            .map(|child| convert(child, path))
            .collect::<Result<Vec<_>, _>>()?;
        DatasetNode::Branch {
            name: raw.name.clone().unwrap_or_default(),
            children,
        }
    };
    path.pop();
    Ok(node)
}

fn convert_leaf(raw: &RawNode, path: &[String]) -> Result<DatasetNode, DatasetError> {
    let path_str = || path.join("/");
    let name = raw.name.clone().ok_or_else(|| DatasetError::MissingField {
        path: path_str(),
        field: "name",
    })?;
    let category = raw
        .category
        .clone()
        .ok_or_else(|| DatasetError::MissingField {
            path: path_str(),
            field: "category",
        })?;
    let raw_value = raw.value.as_ref().ok_or_else(|| DatasetError::MissingField {
        path: path_str(),
        field: "value",
    })?;
    let value = raw_value
        .parse()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DatasetError::InvalidValue {
            path: path_str(),
            raw: raw_value.display(),
        })?;
    if value < 0.0 {
        return Err(DatasetError::NegativeValue {
            path: path_str(),
            value: raw_value.display(),
        });
    }
    Ok(DatasetNode::Leaf(Leaf {
        name,
        category,
        value,
        value_text: raw_value.display(),
    }))
}
