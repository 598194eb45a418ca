use crate::alternating::{alternating, Run};
use crate::arrayadapter::ArrayAdapter;
use crate::distance::DistanceTable;
use crate::initialization::spawn_initialization;
use crate::observer::Observer;
use crate::{Clustering, Error, Params, Result};
use num_traits::Zero;
use std::hash::Hash;

/// Check k and the number of spawns before any run starts.
pub(crate) fn check_search(n: usize, k: usize, spawn: usize) -> Result<()> {
	if k == 0 {
		return Err(Error::InvalidParameter {
			name: "k",
			message: "at least one cluster is required",
		});
	}
	if k > n {
		return Err(Error::InsufficientPoints {
			requested: k,
			available: n,
		});
	}
	if spawn == 0 {
		return Err(Error::InvalidParameter {
			name: "spawn",
			message: "at least one spawn is required",
		});
	}
	Ok(())
}

/// Keep `run` if it beats the current best; earlier runs win ties.
#[inline]
pub(crate) fn keep_best<N: PartialOrd>(best: &mut Option<Run<N>>, run: Run<N>) {
	let better = match best {
		Some(b) => run.max_diameter < b.max_diameter,
		None => true,
	};
	if better {
		*best = Some(run);
	}
}

/// Run the alternating algorithm from `spawn` random initial kernel sets, keep the best.
///
/// The best run is the one with the smallest maximum diameter; the first one found wins ties.
/// All randomness comes from `rng`, so a seeded generator gives reproducible results.
///
/// * type `M` - matrix data type such as `ndarray::Array2` or `medoids::arrayadapter::LowerTriangle`
/// * type `N` - number data type such as `u32` or `f64`
/// * `mat` - a pairwise distance matrix
/// * `k` - number of clusters
/// * `spawn` - number of random restarts
/// * `max_steps` - the step limit of each run
/// * `rng` - random number generator for the initial kernels
/// * `observer` - receives progress events, and is polled for cancellation between spawns
///
/// ## Errors
///
/// * `InsufficientPoints` when `k` exceeds the number of points
/// * `InvalidParameter` when `k`, `spawn` or `max_steps` is zero
/// * `Cancelled` when the observer asks to stop
///
/// ## Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// let data = ndarray::arr2(&[[0,1,2,3],[1,0,4,5],[2,4,0,6],[3,5,6,0]]);
/// let mut rng = StdRng::seed_from_u64(1);
/// let best = medoids::spawn_search(&data, 2, 5, 100, &mut rng, &()).unwrap();
/// println!("Max diameter is: {}", best.max_diameter);
/// ```
pub fn spawn_search<M, N, R, O>(
	mat: &M,
	k: usize,
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
	check_search(mat.len(), k, spawn)?;
	let mut best = None;
	for s in 0..spawn {
		if observer.should_stop() {
			return Err(Error::Cancelled);
		}
		let init = spawn_initialization(mat.len(), k, rng);
		observer.initialized(s, &init);
		let run = alternating(mat, &init, max_steps, observer)?;
		observer.run_finished(s, &run);
		keep_best(&mut best, run);
	}
	let best = best.ok_or(Error::EmptyInput)?;
	observer.search_finished(k, &best);
	Ok(best)
}

/// Cluster the points of a distance table into `k` clusters.
///
/// Runs [`spawn_search`] with the default step limit, and reports the
/// clusters in terms of the table's points.
///
/// ## Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// let table = medoids::build_distances(vec![1, 2, 3, 10, 11], |a: &i32, b: &i32| (b - a).abs());
/// let result = medoids::k_medoids(&table, 2, 20, &mut StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(result.max_diameter, 2);
/// ```
pub fn k_medoids<P, N, R>(
	table: &DistanceTable<P, N>,
	k: usize,
	spawn: usize,
	rng: &mut R,
) -> Result<Clustering<P, N>>
where
	P: Clone,
	N: Zero + PartialOrd + Copy,
	R: rand::Rng,
{
	k_medoids_with(table, k, &Params::default().with_spawn(spawn), rng, &())
}

/// Cluster points into `k` clusters, given a distance function instead of a table.
///
/// Builds the table with [`build_distances`](crate::build_distances), so repeated points
/// are clustered once.
///
/// ## Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// let pts = vec![1, 2, 3, 10, 11];
/// let result = medoids::k_medoids_fn(pts, |a: &i32, b: &i32| (b - a).abs(), 2, 20, &mut StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(result.max_diameter, 2);
/// ```
pub fn k_medoids_fn<P, N, I, F, R>(
	points: I,
	distance: F,
	k: usize,
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
	k_medoids(&crate::build_distances(points, distance), k, spawn, rng)
}

/// Cluster the points of a distance table into `k` clusters, with explicit parameters.
///
/// `params.start_k` is not used here, but is validated like the other parameters.
pub fn k_medoids_with<P, N, R, O>(
	table: &DistanceTable<P, N>,
	k: usize,
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
	let run = spawn_search(table, k, params.spawn, params.max_steps, rng, observer)?;
	Ok(table.clustering(&run))
}
