use crate::alternating::{alternating, Run};
use crate::arrayadapter::ArrayAdapter;
use crate::autok::increase_k;
use crate::distance::DistanceTable;
use crate::initialization::spawn_initialization;
use crate::observer::Observer;
use crate::spawn::{check_search, keep_best};
use crate::{Clustering, Error, Params, Result};
use num_traits::Zero;
use rayon::prelude::*;

/// Run the spawn search with the restarts spread over the rayon thread pool.
///
/// All initial kernel sets are drawn from `rng` before any run starts, in the same order
/// as [`spawn_search`](crate::spawn_search) draws them, and the best run is selected in spawn
/// order. Hence both functions return the same result for the same generator state.
/// Observer events from different spawns may interleave.
///
/// * type `M` - matrix data type such as `ndarray::Array2` or `medoids::arrayadapter::LowerTriangle`
/// * type `N` - number data type such as `u32` or `f64`
/// * `mat` - a pairwise distance matrix
/// * `k` - number of clusters
/// * `spawn` - number of random restarts
/// * `max_steps` - the step limit of each run
/// * `rng` - random number generator for the initial kernels
/// * `observer` - receives progress events, and is polled for cancellation
///
/// ## Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// let data = ndarray::arr2(&[[0,1,2,3],[1,0,4,5],[2,4,0,6],[3,5,6,0]]);
/// let mut rng = StdRng::seed_from_u64(1);
/// let best = medoids::par_spawn_search(&data, 2, 8, 100, &mut rng, &()).unwrap();
/// println!("Max diameter is: {}", best.max_diameter);
/// ```
pub fn par_spawn_search<M, N, R, O>(
	mat: &M,
	k: usize,
	spawn: usize,
	max_steps: usize,
	rng: &mut R,
	observer: &O,
) -> Result<Run<N>>
where
	N: Zero + PartialOrd + Copy + Send + Sync,
	M: ArrayAdapter<N> + Sync,
	R: rand::Rng,
	O: Observer<N> + Sync + ?Sized,
{
	check_search(mat.len(), k, spawn)?;
	let inits: Vec<Vec<usize>> = (0..spawn)
		.map(|_| spawn_initialization(mat.len(), k, rng))
		.collect();
	let runs = inits
		.into_par_iter()
		.enumerate()
		.map(|(s, init)| {
			if observer.should_stop() {
				return Err(Error::Cancelled);
			}
			observer.initialized(s, &init);
			let run = alternating(mat, &init, max_steps, observer)?;
			observer.run_finished(s, &run);
			Ok(run)
		})
		.collect::<Result<Vec<_>>>()?;
	let mut best = None;
	for run in runs {
		keep_best(&mut best, run);
	}
	let best = best.ok_or(Error::EmptyInput)?;
	observer.search_finished(k, &best);
	Ok(best)
}

/// Auto-k search using [`par_spawn_search`] for each k.
pub fn par_auto_k_search<M, N, R, O>(
	mat: &M,
	diam_max: N,
	start_k: usize,
	spawn: usize,
	max_steps: usize,
	rng: &mut R,
	observer: &O,
) -> Result<Run<N>>
where
	N: Zero + PartialOrd + Copy + Send + Sync,
	M: ArrayAdapter<N> + Sync,
	R: rand::Rng,
	O: Observer<N> + Sync + ?Sized,
{
	increase_k(mat.len(), diam_max, start_k, observer, |k| {
		par_spawn_search(mat, k, spawn, max_steps, rng, observer)
	})
}

/// Parallel version of [`k_medoids_with`](crate::k_medoids_with).
pub fn par_k_medoids_with<P, N, R, O>(
	table: &DistanceTable<P, N>,
	k: usize,
	params: &Params,
	rng: &mut R,
	observer: &O,
) -> Result<Clustering<P, N>>
where
	P: Clone + Sync,
	N: Zero + PartialOrd + Copy + Send + Sync,
	R: rand::Rng,
	O: Observer<N> + Sync + ?Sized,
{
	params.validate()?;
	let run = par_spawn_search(table, k, params.spawn, params.max_steps, rng, observer)?;
	Ok(table.clustering(&run))
}

/// Parallel version of [`k_medoids_auto_k_with`](crate::k_medoids_auto_k_with).
pub fn par_k_medoids_auto_k_with<P, N, R, O>(
	table: &DistanceTable<P, N>,
	diam_max: N,
	params: &Params,
	rng: &mut R,
	observer: &O,
) -> Result<Clustering<P, N>>
where
	P: Clone + Sync,
	N: Zero + PartialOrd + Copy + Send + Sync,
	R: rand::Rng,
	O: Observer<N> + Sync + ?Sized,
{
	params.validate()?;
	let run = par_auto_k_search(
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
	use crate::{build_distances, k_medoids_with, par_k_medoids_auto_k_with, par_k_medoids_with, Error, Params};
	use rand::{rngs::StdRng, SeedableRng};

	#[test]
	fn test_parallel_matches_sequential() {
		let table = build_distances(0..40, |a: &i32, b: &i32| ((a * 7) % 13 - (b * 7) % 13).abs() + (a - b).abs());
		let params = Params::default().with_spawn(12);
		for seed in 0..4 {
			let seq = k_medoids_with(&table, 4, &params, &mut StdRng::seed_from_u64(seed), &()).unwrap();
			let par = par_k_medoids_with(&table, 4, &params, &mut StdRng::seed_from_u64(seed), &()).unwrap();
			assert_eq!(seq, par, "parallel result differs");
		}
	}

	#[test]
	fn test_parallel_auto_k() {
		let table = build_distances(1..=7, |a: &i32, b: &i32| (b - a).abs());
		let params = Params::default().with_spawn(20);
		let result = par_k_medoids_auto_k_with(&table, 3, &params, &mut StdRng::seed_from_u64(9), &()).unwrap();
		assert_eq!(result.k(), 2);
		assert_eq!(result.max_diameter, 3);
	}

	#[test]
	fn test_parallel_params_validated() {
		let table = build_distances(1..=7, |a: &i32, b: &i32| (b - a).abs());
		let params = Params::default().with_spawn(0);
		let res = par_k_medoids_with(&table, 2, &params, &mut StdRng::seed_from_u64(0), &());
		assert_eq!(
			res,
			Err(Error::InvalidParameter {
				name: "spawn",
				message: "at least one spawn is required",
			})
		);
		let params = Params::default().with_start_k(0);
		assert!(par_k_medoids_with(&table, 2, &params, &mut StdRng::seed_from_u64(0), &()).is_err());
	}
}
