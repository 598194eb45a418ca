use crate::arrayadapter::ArrayAdapter;
use num_traits::Zero;

/// Assign each point to its nearest kernel.
///
/// Ties are broken in favor of the kernel listed first, except that every
/// kernel is always assigned to itself, even if another kernel is at distance zero.
///
/// * type `M` - matrix data type such as `ndarray::Array2` or `medoids::arrayadapter::LowerTriangle`
/// * type `N` - number data type such as `u32` or `f64`
/// * `mat` - a pairwise distance matrix
/// * `med` - the list of kernels (non-empty)
/// * `assi` - output, the position in `med` of the nearest kernel for every point
///
/// ## Panics
///
/// * panics when `med` is empty or `assi` does not have one slot per point
#[inline]
pub fn assign_nearest<M, N>(mat: &M, med: &[usize], assi: &mut [usize])
where
	N: PartialOrd + Copy,
	M: ArrayAdapter<N>,
{
	assert!(!med.is_empty(), "no kernels given");
	debug_assert!(assi.len() == mat.len(), "assignment not preallocated");
	let firstcenter = med[0];
	for (i, ai) in assi.iter_mut().enumerate() {
		let mut best = (0, mat.get(i, firstcenter));
		for (m, &mm) in med.iter().enumerate().skip(1) {
			if i == firstcenter {
				break;
			}
			let dm = mat.get(i, mm);
			if dm < best.1 || i == mm {
				best = (m, dm);
				if i == mm {
					break;
				}
			}
		}
		*ai = best.0;
	}
}

/// Group the points by their assigned cluster.
///
/// Members are listed in ascending index order.
pub fn partition(assi: &[usize], k: usize) -> Vec<Vec<usize>> {
	let mut clusters = vec![Vec::new(); k];
	for (i, &a) in assi.iter().enumerate() {
		clusters[a].push(i);
	}
	clusters
}

/// Diameter of a set of points: the largest distance between any two members.
///
/// No metric properties beyond symmetry are assumed, so all pairs are inspected.
/// The diameter of an empty or singleton set is zero.
pub fn diameter<M, N>(mat: &M, members: &[usize]) -> N
where
	N: Zero + PartialOrd + Copy,
	M: ArrayAdapter<N>,
{
	let mut diam = N::zero();
	for (x, &i) in members.iter().enumerate() {
		for &j in &members[..x] {
			let d = mat.get(i, j);
			if d > diam {
				diam = d;
			}
		}
	}
	diam
}

/// Diameter of each cluster of a partition.
pub fn cluster_diameters<M, N>(mat: &M, clusters: &[Vec<usize>]) -> Vec<N>
where
	N: Zero + PartialOrd + Copy,
	M: ArrayAdapter<N>,
{
	clusters.iter().map(|c| diameter(mat, c)).collect()
}

/// Largest value, or zero for an empty list
pub(crate) fn max_or_zero<N: Zero + PartialOrd + Copy>(values: &[N]) -> N {
	values
		.iter()
		.fold(N::zero(), |acc, &v| if v > acc { v } else { acc })
}
