use crate::arrayadapter::ArrayAdapter;
use crate::assign::{assign_nearest, cluster_diameters, max_or_zero, partition};
use crate::observer::Observer;
use crate::recenter::choose_medoid;
use crate::util::*;
use crate::{Error, Result};
use num_traits::Zero;

/// Outcome of a single k-medoids run, on point indexes.
#[derive(Debug, Clone, PartialEq)]
pub struct Run<N> {
	/// The kernel of each cluster, as used for the final assignment
	pub medoids: Vec<usize>,
	/// For each point, the position of its cluster in `medoids`
	pub assignment: Vec<usize>,
	/// The diameter of each cluster
	pub diameters: Vec<N>,
	/// The largest of all diameters
	pub max_diameter: N,
	/// Number of assignment steps performed
	pub steps: usize,
	/// `false` when the step limit was reached before the kernels settled
	pub converged: bool,
	/// Positions of clusters that contain nothing but their medoid
	pub degenerate: Vec<usize>,
}

impl<N> Run<N> {
	/// Number of clusters
	pub fn k(&self) -> usize {
		self.medoids.len()
	}
}

/// Run the alternating k-medoids algorithm to a fixed point.
///
/// Each step assigns every point to its nearest kernel, then replaces each kernel
/// by the minimax medoid of its cluster. The run stops when the new kernels equal
/// the old ones as a set, or after `max_steps` steps. Reaching the step limit is not
/// an error; the last assignment is reported with `converged == false`.
///
/// * type `M` - matrix data type such as `ndarray::Array2` or `medoids::arrayadapter::LowerTriangle`
/// * type `N` - number data type such as `u32` or `f64`
/// * `mat` - a pairwise distance matrix
/// * `med` - the initial kernels, distinct point indexes
/// * `max_steps` - the maximum number of steps allowed
/// * `observer` - receives progress events, and is polled for cancellation between steps
///
/// ## Errors
///
/// * `InvalidParameter` when the matrix is not square, kernels are empty, repeated,
///   out of range, or `max_steps` is zero
/// * `InsufficientPoints` when there are more kernels than points
/// * `Cancelled` when the observer asks to stop
///
/// ## Example
/// Given a dissimilarity matrix of size 4 x 4, use:
/// ```
/// let data = ndarray::arr2(&[[0,1,2,3],[1,0,4,5],[2,4,0,6],[3,5,6,0]]);
/// let run = medoids::alternating(&data, &[0, 1], 100, &()).unwrap();
/// println!("Max diameter is: {}", run.max_diameter);
/// ```
pub fn alternating<M, N, O>(mat: &M, med: &[usize], max_steps: usize, observer: &O) -> Result<Run<N>>
where
	N: Zero + PartialOrd + Copy,
	M: ArrayAdapter<N>,
	O: Observer<N> + ?Sized,
{
	if !mat.is_square() {
		return Err(Error::InvalidParameter {
			name: "mat",
			message: "dissimilarity matrix is not square",
		});
	}
	if max_steps == 0 {
		return Err(Error::InvalidParameter {
			name: "max_steps",
			message: "at least one step is required",
		});
	}
	let n = mat.len();
	check_kernels(n, med)?;
	let k = med.len();
	let mut kernels = med.to_vec();
	let mut assi = vec![usize::MAX; n];
	let mut steps = 0;
	let (clusters, converged) = loop {
		steps += 1;
		assign_nearest(mat, &kernels, &mut assi);
		debug_assert_assignment(mat, &kernels, &assi);
		observer.assigned(steps, &kernels, &assi);
		let clusters = partition(&assi, k);
		let next: Vec<usize> = clusters.iter().map(|c| choose_medoid(mat, c).0).collect();
		if same_set(&next, &kernels) {
			break (clusters, true);
		}
		if steps >= max_steps {
			break (clusters, false);
		}
		if observer.should_stop() {
			return Err(Error::Cancelled);
		}
		kernels = next;
	};
	let diameters = cluster_diameters(mat, &clusters);
	let degenerate = clusters
		.iter()
		.enumerate()
		.filter(|(_, c)| c.len() == 1)
		.map(|(i, _)| i)
		.collect();
	Ok(Run {
		max_diameter: max_or_zero(&diameters),
		medoids: kernels,
		assignment: assi,
		diameters,
		steps,
		converged,
		degenerate,
	})
}
