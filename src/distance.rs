//! Distance tables keyed by the caller's points.
use crate::alternating::Run;
use crate::arrayadapter::{ArrayAdapter, LowerTriangle};
use crate::assign::partition;
use crate::clustering::{Cluster, Clustering};
use crate::{Error, Result};
use log::debug;
use num_traits::Zero;
use std::collections::HashMap;
use std::hash::Hash;

/// Pairwise distances between a set of distinct points.
///
/// Points keep the order in which they were first given; that order decides
/// all tie-breaks of the clustering. Distances are stored once per unordered pair,
/// so the table is symmetric with a zero diagonal.
///
/// The table implements [`ArrayAdapter`], so the index-level functions
/// such as [`spawn_search`](crate::spawn_search) accept it directly.
#[derive(Debug, Clone)]
pub struct DistanceTable<P, N> {
	points: Vec<P>,
	index: HashMap<P, usize>,
	dist: LowerTriangle<N>,
}

/// Build the distance table of a set of points from a distance function.
///
/// Repeated points are kept only once, at their first position. The distance
/// function is called once for every unordered pair of distinct points, and is
/// assumed to be symmetric and non-negative; the distance of a point to itself is zero.
///
/// ## Example
/// ```
/// let table = medoids::build_distances(vec![1, 2, 3], |a: &i32, b: &i32| (b - a).abs());
/// assert_eq!(table.lookup(&1, &3), Ok(2));
/// assert_eq!(table.lookup(&3, &3), Ok(0));
/// ```
pub fn build_distances<P, N, I, F>(points: I, mut distance: F) -> DistanceTable<P, N>
where
	P: Eq + Hash + Clone,
	N: Copy,
	I: IntoIterator<Item = P>,
	F: FnMut(&P, &P) -> N,
{
	let mut given = 0;
	let mut pts = Vec::new();
	let mut index = HashMap::new();
	for p in points {
		given += 1;
		if !index.contains_key(&p) {
			index.insert(p.clone(), pts.len());
			pts.push(p);
		}
	}
	if given > pts.len() {
		debug!("{} repeated points ignored", given - pts.len());
	}
	let dist = LowerTriangle::from_fn(pts.len(), |x, y| distance(&pts[x], &pts[y]));
	debug!("distance table built for {} points", pts.len());
	DistanceTable {
		points: pts,
		index,
		dist,
	}
}

/// Index the points, rejecting repetitions.
fn index_distinct<P: Eq + Hash + Clone>(points: &[P]) -> Result<HashMap<P, usize>> {
	let mut index = HashMap::with_capacity(points.len());
	for (i, p) in points.iter().enumerate() {
		if index.insert(p.clone(), i).is_some() {
			return Err(Error::InvalidParameter {
				name: "points",
				message: "points must be distinct",
			});
		}
	}
	Ok(index)
}

impl<P, N> DistanceTable<P, N>
where
	P: Eq + Hash + Clone,
	N: Zero + Copy,
{
	/// Use a precomputed distance matrix, row `i` belonging to `points[i]`.
	///
	/// Only the lower triangle is read. Symmetry and the zero diagonal are not checked
	/// (except with the `assertions` feature); use [`check_matrix`] beforehand if unsure.
	///
	/// ## Errors
	///
	/// * `InvalidParameter` when the matrix is not square, does not match the number of points,
	///   or points repeat
	pub fn from_matrix<M: ArrayAdapter<N>>(points: Vec<P>, mat: &M) -> Result<Self>
	where
		N: PartialEq,
	{
		if !mat.is_square() || mat.len() != points.len() {
			return Err(Error::InvalidParameter {
				name: "mat",
				message: "matrix must be square with one row per point",
			});
		}
		#[cfg(feature = "assertions")]
		debug_assert!(check_matrix(mat).is_ok(), "distance matrix is not a valid table");
		let index = index_distinct(&points)?;
		let dist = LowerTriangle::from_fn(points.len(), |x, y| mat.get(x, y));
		Ok(DistanceTable { points, index, dist })
	}

	/// Use precomputed distances given as `(p, q, distance)` triples.
	///
	/// Either orientation of a pair may be given; if both are, the later one is used.
	/// Triples pairing a point with itself are ignored.
	///
	/// ## Errors
	///
	/// * `MissingDistance` when a triple names an unknown point, or a pair of distinct points has no distance
	/// * `InvalidParameter` when points repeat
	///
	/// ## Example
	/// ```
	/// let table = medoids::DistanceTable::from_pairs(
	/// 	vec!["a", "b", "c"],
	/// 	vec![("a", "b", 1.), ("c", "a", 2.), ("b", "c", 1.5)],
	/// ).unwrap();
	/// assert_eq!(table.lookup(&"a", &"c"), Ok(2.));
	/// ```
	pub fn from_pairs<I>(points: Vec<P>, pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (P, P, N)>,
	{
		let index = index_distinct(&points)?;
		let n = points.len();
		let mut cells: LowerTriangle<Option<N>> = LowerTriangle::from_fn(n, |_, _| None);
		for (p, q, d) in pairs {
			let x = *index.get(&p).ok_or(Error::MissingDistance)?;
			let y = *index.get(&q).ok_or(Error::MissingDistance)?;
			let (x, y) = if x > y { (x, y) } else { (y, x) };
			if x != y {
				cells.data[((x * (x - 1)) >> 1) + y] = Some(d);
			}
		}
		let data = cells
			.data
			.into_iter()
			.collect::<Option<Vec<N>>>()
			.ok_or(Error::MissingDistance)?;
		Ok(DistanceTable {
			points,
			index,
			dist: LowerTriangle { n, data },
		})
	}

	/// Distance between two points.
	///
	/// ## Errors
	///
	/// * `MissingDistance` when either point is not in the table
	pub fn lookup(&self, p: &P, q: &P) -> Result<N> {
		let x = self.index_of(p).ok_or(Error::MissingDistance)?;
		let y = self.index_of(q).ok_or(Error::MissingDistance)?;
		Ok(self.dist.get(x, y))
	}

	/// Position of a point, if present
	pub fn index_of(&self, p: &P) -> Option<usize> {
		self.index.get(p).copied()
	}
}

impl<P, N> DistanceTable<P, N> {
	/// The distinct points, in table order
	pub fn points(&self) -> &[P] {
		&self.points
	}

	/// The point at a position
	///
	/// ## Panics
	///
	/// * panics when `i` is not less than [`len`](Self::len)
	pub fn point(&self, i: usize) -> &P {
		&self.points[i]
	}

	/// Number of distinct points
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Whether the table has no points
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Translate an index-level run into clusters of points.
	pub fn clustering(&self, run: &Run<N>) -> Clustering<P, N>
	where
		P: Clone,
		N: Copy,
	{
		let clusters = partition(&run.assignment, run.k())
			.into_iter()
			.zip(run.medoids.iter().zip(run.diameters.iter()))
			.map(|(members, (&m, &diameter))| Cluster {
				medoid: self.points[m].clone(),
				members: members.into_iter().map(|i| self.points[i].clone()).collect(),
				diameter,
			})
			.collect();
		Clustering {
			clusters,
			max_diameter: run.max_diameter,
			steps: run.steps,
			converged: run.converged,
		}
	}
}

impl<P, N: Copy + Zero> ArrayAdapter<N> for DistanceTable<P, N> {
	#[inline]
	fn len(&self) -> usize {
		self.points.len()
	}
	#[inline]
	fn is_square(&self) -> bool {
		self.dist.is_square()
	}
	#[inline]
	fn get(&self, x: usize, y: usize) -> N {
		self.dist.get(x, y)
	}
}

/// Verify that a matrix is symmetric with a zero diagonal.
///
/// The clustering functions trust these properties without checking them;
/// a violation silently yields wrong diameters.
///
/// ## Errors
///
/// * `InvalidParameter` when the matrix is not square
/// * `NonZeroSelfDistance` for the first point with a non-zero diagonal entry
/// * `Asymmetric` for the first cell that differs from its mirror
pub fn check_matrix<M, N>(mat: &M) -> Result<()>
where
	N: Zero + PartialEq + Copy,
	M: ArrayAdapter<N>,
{
	if !mat.is_square() {
		return Err(Error::InvalidParameter {
			name: "mat",
			message: "dissimilarity matrix is not square",
		});
	}
	for row in 0..mat.len() {
		if mat.get(row, row) != N::zero() {
			return Err(Error::NonZeroSelfDistance { index: row });
		}
		for col in 0..row {
			if mat.get(row, col) != mat.get(col, row) {
				return Err(Error::Asymmetric { row, col });
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_build_distances() {
		let table = build_distances(vec![1, 2, 3], |a: &i32, b: &i32| (b - a).abs());
		assert_eq!(table.len(), 3);
		for p in 1..=3 {
			for q in 1..=3 {
				assert_eq!(table.lookup(&p, &q), Ok((q - p).abs()), "distance not as expected");
			}
		}
		assert_eq!(table.lookup(&1, &4), Err(Error::MissingDistance));
		assert!(check_matrix(&table).is_ok());
	}

	#[test]
	fn test_repeated_points_kept_once() {
		let mut calls = 0;
		let table = build_distances(vec![3, 1, 3, 2, 1], |a: &i32, b: &i32| {
			calls += 1;
			(b - a).abs()
		});
		assert_eq!(table.points(), &[3, 1, 2]);
		assert_eq!(calls, 3, "each pair must be evaluated once");
		assert_eq!(table.index_of(&2), Some(2));
		assert_eq!(*table.point(1), 1);
	}

	#[test]
	#[should_panic]
	fn test_point_out_of_range() {
		let table = build_distances(vec![1, 2], |a: &i32, b: &i32| (b - a).abs());
		table.point(2);
	}

	#[test]
	fn test_from_matrix() {
		let rows = vec![vec![0., 1., 2.], vec![1., 0., 3.], vec![2., 3., 0.]];
		let table = DistanceTable::from_matrix(vec!['x', 'y', 'z'], &rows).unwrap();
		assert_eq!(table.lookup(&'z', &'y'), Ok(3.));
		assert!(DistanceTable::from_matrix(vec!['x', 'y'], &rows).is_err(), "size mismatch accepted");
		assert!(DistanceTable::from_matrix(vec!['x', 'x', 'z'], &rows).is_err(), "repeated points accepted");
	}

	#[test]
	fn test_from_pairs_missing() {
		let missing = DistanceTable::from_pairs(vec![1, 2, 3], vec![(1, 2, 1), (2, 3, 1)]);
		assert_eq!(missing.unwrap_err(), Error::MissingDistance);
		let unknown = DistanceTable::from_pairs(vec![1, 2], vec![(1, 5, 1)]);
		assert_eq!(unknown.unwrap_err(), Error::MissingDistance);
		let table = DistanceTable::from_pairs(vec![1, 2], vec![(2, 1, 4), (1, 1, 9)]).unwrap();
		assert_eq!(table.lookup(&1, &2), Ok(4));
		assert_eq!(table.lookup(&1, &1), Ok(0), "self pair must be ignored");
	}

	#[test]
	fn test_check_matrix() {
		let asym = vec![vec![0, 1], vec![2, 0]];
		assert_eq!(check_matrix(&asym), Err(Error::Asymmetric { row: 1, col: 0 }));
		let diag = vec![vec![0, 1], vec![1, 5]];
		assert_eq!(check_matrix(&diag), Err(Error::NonZeroSelfDistance { index: 1 }));
	}

	#[test]
	fn test_empty_table() {
		let table: DistanceTable<u8, f32> = build_distances(Vec::new(), |_, _| 0.);
		assert!(table.is_empty());
		assert!(table.is_square());
	}
}
