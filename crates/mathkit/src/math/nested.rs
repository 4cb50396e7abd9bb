//! Recursive nested data used to seed and read back shaped containers.

/// Either a single value or an ordered sequence of nested values.
///
/// This is the typed form of "arbitrarily nested lists of numbers". Whether a
/// given value matches a shape is decided by the container that receives it.
#[derive(Clone, Debug, PartialEq)]
pub enum NestedData<T> {
    Scalar(T),
    Sequence(Vec<NestedData<T>>),
}

impl<T> NestedData<T> {
    /// Two-level sequence from a list of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        rows.into_iter().map(NestedData::from).collect()
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, NestedData::Scalar(_))
    }

    pub fn as_sequence(&self) -> Option<&[NestedData<T>]> {
        match self {
            NestedData::Sequence(items) => Some(items),
            NestedData::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            NestedData::Scalar(v) => Some(v),
            NestedData::Sequence(_) => None,
        }
    }

    /// Depth-first, left-to-right list of every scalar.
    pub fn flatten(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    pub(crate) fn flatten_into(&self, out: &mut Vec<T>)
    where
        T: Clone,
    {
        match self {
            NestedData::Scalar(v) => out.push(v.clone()),
            NestedData::Sequence(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl<T> From<Vec<T>> for NestedData<T> {
    fn from(values: Vec<T>) -> Self {
        NestedData::Sequence(values.into_iter().map(NestedData::Scalar).collect())
    }
}

impl<T> FromIterator<NestedData<T>> for NestedData<T> {
    fn from_iter<I: IntoIterator<Item = NestedData<T>>>(iter: I) -> Self {
        NestedData::Sequence(iter.into_iter().collect())
    }
}

/// Build a [`NestedData`] literal from bracketed numbers.
///
/// ```
/// use mathkit::nested;
/// use mathkit::math::NestedData;
///
/// let d: NestedData<f64> = nested![[1.0, 2.0], [3.0, 4.0]];
/// assert_eq!(d.flatten(), vec![1.0, 2.0, 3.0, 4.0]);
/// ```
#[macro_export]
macro_rules! nested {
    (@seq [$($done:expr),*]) => {
        $crate::math::NestedData::Sequence(vec![$($done),*])
    };
    (@seq [$($done:expr),*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nested!(@seq [$($done,)* $crate::nested!(@seq [] $($inner)*)] $($($rest)*)?)
    };
    (@seq [$($done:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::nested!(@seq [$($done,)* $crate::math::NestedData::Scalar($value)] $($($rest)*)?)
    };
    ($($tokens:tt)*) => {
        $crate::nested!(@seq [] $($tokens)*)
    };
}
