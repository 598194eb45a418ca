use crate::alternating::Run;
use crate::arrayadapter::ArrayAdapter;
use crate::distance::DistanceTable;
use crate::observer::Observer;
use crate::spawn::spawn_search;
use crate::{Clustering, Error, Params, Result};
use num_traits::Zero;
use std::hash::Hash;

/// Try k = `start_k`, `start_k + 1`, ... until `search(k)` meets the diameter bound.
///
/// With k equal to the number of points every cluster is a singleton of diameter zero,
/// so the loop ends there at the latest.
pub(crate) fn increase_k<N, O, S>(
	n: usize,
	diam_max: N,
	start_k: usize,
	observer: &O,
	mut search: S,
) -> Result<Run<N>>
where
	N: Zero + PartialOrd + Copy,
	O: Observer<N> + ?Sized,
	S: FnMut(usize) -> Result<Run<N>>,
{
	if n == 0 {
		return Err(Error::EmptyInput);
	}
	// also rejects NaN
	if !(diam_max >= N::zero()) {
		return Err(Error::InvalidParameter {
			name: "diam_max",
			message: "must not be negative",
		});
	}
	if start_k == 0 {
		return Err(Error::InvalidParameter {
			name: "start_k",
			message: "must be at least 1",
		});
	}
	if start_k > n {
		return Err(Error::InsufficientPoints {
			requested: start_k,
			available: n,
		});
	}
	let mut k = start_k;
	loop {
		let best = search(k)?;
		observer.k_tried(k, best.max_diameter, diam_max);
		if best.max_diameter <= diam_max || k == n {
			return Ok(best);
		}
		if observer.should_stop() {
			return Err(Error::Cancelled);
		}
		k += 1;
	}
}

/// Find the smallest number of clusters whose best spawn search meets a diameter bound.
///
/// Runs [`spawn_search`] for k = `start_k`, `start_k + 1`, ... and returns the first
/// result with `max_diameter <= diam_max`. The search ends at the latest when k equals
/// the number of points, where all diameters are zero.
///
/// * type `M` - matrix data type such as `ndarray::Array2` or `medoids::arrayadapter::LowerTriangle`
/// * type `N` - number data type such as `u32` or `f64`
/// * `mat` - a pairwise distance matrix
/// * `diam_max` - the largest acceptable cluster diameter
/// * `start_k` - the first number of clusters tried
/// * `spawn` - number of random restarts for each k
/// * `max_steps` - the step limit of each run
/// * `rng` - random number generator for the initial kernels
/// * `observer` - receives progress events, including one `k_tried` per k
///
/// ## Errors
///
/// * `EmptyInput` when the matrix has no points
/// * `InvalidParameter` when `diam_max` is negative or NaN, or `start_k`, `spawn` or `max_steps` is zero
/// * `InsufficientPoints` when `start_k` exceeds the number of points
/// * `Cancelled` when the observer asks to stop
pub fn auto_k_search<M, N, R, O>(
	mat: &M,
	diam_max: N,
	start_k: usize,
	spawn: usize,
	max_steps: usize,
	rng: &mut R,
	observer: &O,
) -> Result<Run<N>>
where
	N: Zero + PartialOrd + Copy,
	M: ArrayAdapter<N>,
	R: rand::Rng,
	O: Observer<N> + ?Sized,
{
	increase_k(mat.len(), diam_max, start_k, observer, |k| {
		spawn_search(mat, k, spawn, max_steps, rng, observer)
	})
}

/// Cluster the points of a distance table with the fewest clusters of diameter at most `diam_max`.
///
/// ## Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// let table = medoids::build_distances(1..=7, |a: &i32, b: &i32| (b - a).abs());
/// let result = medoids::k_medoids_auto_k(&table, 6, 3, &mut StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(result.k(), 1);
/// assert_eq!(result.clusters[0].medoid, 4);
/// ```
pub fn k_medoids_auto_k<P, N, R>(
	table: &DistanceTable<P, N>,
	diam_max: N,
	spawn: usize,
	rng: &mut R,
) -> Result<Clustering<P, N>>
where
	P: Clone,
	N: Zero + PartialOrd + Copy,
	R: rand::Rng,
{
	k_medoids_auto_k_with(table, diam_max, &Params::default().with_spawn(spawn), rng, &())
}

/// Auto-k clustering given a distance function instead of a table.
///
/// Builds the table with [`build_distances`](crate::build_distances), then runs
/// [`k_medoids_auto_k`].
pub fn k_medoids_auto_k_fn<P, N, I, F, R>(
	points: I,
	distance: F,
	diam_max: N,
	spawn: usize,
	rng: &mut R,
) -> Result<Clustering<P, N>>
where
	P: Eq + Hash + Clone,
	N: Zero + PartialOrd + Copy,
	I: IntoIterator<Item = P>,
	F: FnMut(&P, &P) -> N,
	R: rand::Rng,
{
	k_medoids_auto_k(&crate::build_distances(points, distance), diam_max, spawn, rng)
}

/// Auto-k clustering of a distance table, with explicit parameters.
pub fn k_medoids_auto_k_with<P, N, R, O>(
	table: &DistanceTable<P, N>,
	diam_max: N,
	params: &Params,
	rng: &mut R,
	observer: &O,
) -> Result<Clustering<P, N>>
where
	P: Clone,
	N: Zero + PartialOrd + Copy,
	R: rand::Rng,
	O: Observer<N> + ?Sized,
{
	params.validate()?;
	let run = auto_k_search(
		table,
		diam_max,
		params.start_k,
		params.spawn,
		params.max_steps,
		rng,
		observer,
	)?;
	Ok(table.clustering(&run))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::build_distances;
	use rand::{rngs::StdRng, SeedableRng};
	use std::cell::RefCell;

	fn line() -> DistanceTable<i32, f64> {
		build_distances(1..=7, |a: &i32, b: &i32| f64::from((b - a).abs()))
	}

	#[derive(Default)]
	struct Trials(RefCell<Vec<(usize, f64, f64)>>);

	impl Observer<f64> for Trials {
		fn k_tried(&self, k: usize, achieved: f64, target: f64) {
			self.0.borrow_mut().push((k, achieved, target));
		}
	}

	#[test]
	fn test_auto_k_two_clusters() {
		let table = line();
		let trials = Trials::default();
		let params = Params::default().with_spawn(20);
		let mut rng = StdRng::seed_from_u64(5);
		let result = k_medoids_auto_k_with(&table, 3., &params, &mut rng, &trials).unwrap();
		assert_eq!(result.k(), 2, "number of clusters not as expected");
		assert_eq!(result.max_diameter, 3.);
		assert_eq!(*trials.0.borrow(), vec![(1, 6., 3.), (2, 3., 3.)]);
	}

	#[test]
	fn test_auto_k_line_clusters() {
		for seed in 0..10 {
			let result = k_medoids_auto_k(&line(), 3., 20, &mut StdRng::seed_from_u64(seed)).unwrap();
			let mut clusters: Vec<_> = result.clusters.iter().map(|c| (c.members.clone(), c.medoid)).collect();
			clusters.sort();
			assert_eq!(
				clusters,
				vec![(vec![1, 2, 3], 2), (vec![4, 5, 6, 7], 5)],
				"clusters not as expected for seed {}",
				seed
			);
		}
	}

	#[test]
	fn test_auto_k_distance_function() {
		let pts = vec![0, 1, 2, 20, 21, 40];
		let result = k_medoids_auto_k_fn(pts, |a: &i32, b: &i32| (b - a).abs(), 2, 50, &mut StdRng::seed_from_u64(4)).unwrap();
		assert_eq!(result.k(), 3);
		assert_eq!(result.max_diameter, 2);
		let mut medoids: Vec<i32> = result.medoids().cloned().collect();
		medoids.sort_unstable();
		assert_eq!(medoids, vec![1, 20, 40]);
	}

	#[test]
	fn test_auto_k_single_cluster() {
		let table = line();
		let result = k_medoids_auto_k(&table, 6., 3, &mut StdRng::seed_from_u64(1)).unwrap();
		assert_eq!(result.k(), 1);
		assert_eq!(result.max_diameter, 6.);
		assert_eq!(result.clusters[0].medoid, 4, "medoid not as expected");
		assert_eq!(result.clusters[0].members, (1..=7).collect::<Vec<_>>());
	}

	#[test]
	fn test_auto_k_zero_diameter() {
		let table = line();
		let result = k_medoids_auto_k(&table, 0., 3, &mut StdRng::seed_from_u64(2)).unwrap();
		assert_eq!(result.k(), 7, "zero diameter requires singletons");
		assert_eq!(result.max_diameter, 0.);
	}

	#[test]
	fn test_auto_k_start_k() {
		let table = line();
		let params = Params::default().with_spawn(20).with_start_k(3);
		let mut rng = StdRng::seed_from_u64(3);
		let result = k_medoids_auto_k_with(&table, 6., &params, &mut rng, &()).unwrap();
		assert_eq!(result.k(), 3, "start_k not honored");
	}

	#[test]
	fn test_auto_k_invalid() {
		let table = line();
		let mut rng = StdRng::seed_from_u64(0);
		assert!(k_medoids_auto_k(&table, -1., 3, &mut rng).is_err());
		assert!(k_medoids_auto_k(&table, f64::NAN, 3, &mut rng).is_err());
		let params = Params::default().with_start_k(8);
		assert_eq!(
			k_medoids_auto_k_with(&table, 1., &params, &mut rng, &()),
			Err(Error::InsufficientPoints {
				requested: 8,
				available: 7
			})
		);
		let empty: DistanceTable<i32, f64> = build_distances(Vec::new(), |_, _| 0.);
		assert_eq!(k_medoids_auto_k(&empty, 1., 3, &mut rng), Err(Error::EmptyInput));
	}

	#[test]
	fn test_increase_k_stops_at_n() {
		// a search that never meets the bound still ends at k = n
		let mut tried = Vec::new();
		let res = increase_k(3, 0, 1, &(), |k| {
			tried.push(k);
			Ok(Run {
				medoids: (0..k).collect(),
				assignment: vec![],
				diameters: vec![],
				max_diameter: 1,
				steps: 1,
				converged: true,
				degenerate: vec![],
			})
		})
		.unwrap();
		assert_eq!(tried, vec![1, 2, 3]);
		assert_eq!(res.k(), 3);
	}
}
