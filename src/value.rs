use core::fmt;

use crate::linalg::RowReductionResult;
use crate::matrix::vector::Vector;
use crate::matrix::vector_list::VectorList;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Any result the engine can hand back to a caller for display.
///
/// ```
/// use rowspace::{Matrix, Value};
///
/// let a = Matrix::from_ints(2, 2, &[1, 2, 2, 4]).unwrap();
/// let answers: Vec<Value> = vec![a.rank().into(), a.det().unwrap().into(), a.is_square().into()];
/// let shown: Vec<String> = answers.iter().map(ToString::to_string).collect();
/// assert_eq!(shown, ["1", "0", "true"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Matrix(Matrix),
    Vector(Vector),
    VectorList(VectorList),
    Boolean(bool),
    RowReduction(Box<RowReductionResult>),
}

impl Value {
    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Matrix(_) => "matrix",
            Value::Vector(_) => "vector",
            Value::VectorList(_) => "vector list",
            Value::Boolean(_) => "boolean",
            Value::RowReduction(_) => "row reduction",
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Value::Matrix(m)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl From<VectorList> for Value {
    fn from(l: VectorList) -> Self {
        Value::VectorList(l)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// Counts such as rank and nullity become exact scalars.
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Scalar(Scalar::int(n as i64))
    }
}

impl From<RowReductionResult> for Value {
    fn from(r: RowReductionResult) -> Self {
        Value::RowReduction(Box::new(r))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Matrix(m) => write!(f, "{m}"),
            Value::Vector(v) => write!(f, "{v}"),
            Value::VectorList(l) => write!(f, "{l}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::RowReduction(r) => write!(f, "{r}"),
        }
    }
}
