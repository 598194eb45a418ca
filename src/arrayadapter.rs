//! Adapter trait for accessing different types of distance matrices.
//!
//! Includes adapters for `ndarray::Array2`, nested `Vec` rows,
//! and a serialized lower triangular matrix in a `Vec`.

/// Adapter trait for accessing different types of arrays
#[allow(clippy::len_without_is_empty)]
pub trait ArrayAdapter<N: Copy> {
	/// Get the length of an array structure
	fn len(&self) -> usize;
	/// Verify that it is a square matrix
	fn is_square(&self) -> bool;
	/// Get the contents at cell x,y
	fn get(&self, x: usize, y: usize) -> N;
}

/// Adapter trait for using `ndarray::Array2`
#[cfg(feature = "ndarray")]
impl<N: Copy> ArrayAdapter<N> for ndarray::Array2<N> {
	#[inline]
	fn len(&self) -> usize {
		self.shape()[0]
	}
	#[inline]
	fn is_square(&self) -> bool {
		self.shape()[0] == self.shape()[1]
	}
	#[inline]
	fn get(&self, x: usize, y: usize) -> N {
		self[[x, y]]
	}
}

/// Adapter for a matrix given as nested rows
impl<N: Copy> ArrayAdapter<N> for Vec<Vec<N>> {
	#[inline]
	fn len(&self) -> usize {
		<[Vec<N>]>::len(self)
	}
	#[inline]
	fn is_square(&self) -> bool {
		let n = <[Vec<N>]>::len(self);
		self.iter().all(|row| row.len() == n)
	}
	#[inline]
	fn get(&self, x: usize, y: usize) -> N {
		self[x][y]
	}
}

/// Lower triangular matrix in serial form (without diagonal)
///
/// The diagonal is implicitly zero, and the matrix is symmetric by construction.
///
/// ## Example
/// ```
/// use medoids::ArrayAdapter;
/// let data = medoids::arrayadapter::LowerTriangle { n: 4, data: vec![1, 2, 3, 4, 5, 6] };
/// assert_eq!(data.get(0, 3), data.get(3, 0));
/// assert_eq!(data.get(2, 2), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LowerTriangle<N> {
	/// Matrix size
	pub n: usize,
	/// Matrix data, lower triangular form without diagonal
	pub data: Vec<N>,
}

impl<N> LowerTriangle<N> {
	/// Fill a lower triangle from a pair function.
	///
	/// `f(x, y)` is called exactly once for every `x > y`.
	///
	/// ```
	/// use medoids::ArrayAdapter;
	/// let pos = [1i32, 2, 4];
	/// let tri = medoids::arrayadapter::LowerTriangle::from_fn(3, |x, y| (pos[x] - pos[y]).abs());
	/// assert_eq!(tri.get(0, 2), 3);
	/// ```
	pub fn from_fn<F>(n: usize, mut f: F) -> Self
	where
		F: FnMut(usize, usize) -> N,
	{
		let mut data = Vec::with_capacity(n * n.saturating_sub(1) / 2);
		for x in 1..n {
			for y in 0..x {
				data.push(f(x, y));
			}
		}
		LowerTriangle { n, data }
	}
}

/// Adapter implementation for LowerTriangle
impl<N: Copy + num_traits::Zero> ArrayAdapter<N> for LowerTriangle<N> {
	#[inline]
	fn len(&self) -> usize {
		self.n
	}
	#[inline]
	fn is_square(&self) -> bool {
		self.data.len() == (self.n * self.n.saturating_sub(1)) >> 1
	}
	#[inline]
	fn get(&self, x: usize, y: usize) -> N {
		match x.cmp(&y) {
			std::cmp::Ordering::Less => self.data[((y * (y - 1)) >> 1) + x],
			std::cmp::Ordering::Greater => self.data[((x * (x - 1)) >> 1) + y],
			std::cmp::Ordering::Equal => N::zero(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lower_triangle_from_fn() {
		let tri = LowerTriangle::from_fn(5, |x, y| (x * 10 + y) as i32);
		assert!(tri.is_square(), "triangle has wrong size");
		assert_eq!(tri.data, vec![10, 20, 21, 30, 31, 32, 40, 41, 42, 43]);
		assert_eq!(tri.get(1, 4), 41, "upper cell not mirrored");
		assert_eq!(tri.get(3, 3), 0, "diagonal not zero");
	}

	#[test]
	fn test_empty_triangle() {
		let tri: LowerTriangle<f64> = LowerTriangle::from_fn(0, |_, _| 1.);
		assert_eq!(tri.len(), 0);
		assert!(tri.is_square());
	}

	#[test]
	fn test_nested_rows() {
		let rows = vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]];
		assert!(rows.is_square());
		assert_eq!(ArrayAdapter::len(&rows), 3);
		assert_eq!(rows.get(2, 1), 3);
		let ragged = vec![vec![0, 1], vec![1]];
		assert!(!ragged.is_square(), "ragged rows accepted");
	}
}
