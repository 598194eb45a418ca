use crate::arrayadapter::ArrayAdapter;
use num_traits::Zero;

/// Largest distance from `j` to any of the members.
#[inline]
pub fn eccentricity<M, N>(mat: &M, j: usize, members: &[usize]) -> N
where
	N: Zero + PartialOrd + Copy,
	M: ArrayAdapter<N>,
{
	members.iter().fold(N::zero(), |acc, &i| {
		let d = mat.get(j, i);
		if d > acc {
			d
		} else {
			acc
		}
	})
}

/// Choose the medoid of a cluster.
///
/// The medoid is the member whose largest distance to the other members is smallest
/// (the minimax, or 1-center, choice). Ties go to the member listed first.
///
/// * `mat` - a pairwise distance matrix
/// * `members` - the cluster members (non-empty)
///
/// returns the chosen member and its largest distance to the cluster.
///
/// ## Panics
///
/// * panics when `members` is empty
///
/// ## Example
/// ```
/// let data = ndarray::arr2(&[[0, 1, 2], [1, 0, 1], [2, 1, 0]]);
/// let (medoid, radius) = medoids::choose_medoid(&data, &[0, 1, 2]);
/// assert_eq!((medoid, radius), (1, 1));
/// ```
pub fn choose_medoid<M, N>(mat: &M, members: &[usize]) -> (usize, N)
where
	N: Zero + PartialOrd + Copy,
	M: ArrayAdapter<N>,
{
	assert!(!members.is_empty(), "cannot choose a medoid of an empty cluster");
	let first = members[0];
	let mut best = (first, eccentricity(mat, first, members));
	for &j in &members[1..] {
		let mut r = N::zero();
		let mut worse = false;
		for &i in members {
			let d = mat.get(j, i);
			if d > r {
				r = d;
				if !(r < best.1) {
					worse = true; // cannot win anymore
					break;
				}
			}
		}
		if !worse && r < best.1 {
			best = (j, r);
		}
	}
	best
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::arrayadapter::LowerTriangle;

	fn line(pos: &[i64]) -> LowerTriangle<i64> {
		LowerTriangle::from_fn(pos.len(), |x, y| (pos[x] - pos[y]).abs())
	}

	#[test]
	fn test_minimax_not_sum() {
		// the sum of distances prefers index 2, the largest distance prefers index 3
		let data = line(&[0, 1, 2, 3, 10]);
		let (med, r) = choose_medoid(&data, &[0, 1, 2, 3, 4]);
		assert_eq!(med, 3, "medoid not as expected");
		assert_eq!(r, 7, "radius not as expected");
	}

	#[test]
	fn test_ties_by_member_order() {
		let data = line(&[4, 5, 6, 7]);
		assert_eq!(choose_medoid(&data, &[0, 1, 2, 3]), (1, 2));
		assert_eq!(choose_medoid(&data, &[3, 2, 1, 0]), (2, 2));
	}

	#[test]
	fn test_singleton() {
		let data = line(&[1, 2, 3]);
		assert_eq!(choose_medoid(&data, &[2]), (2, 0));
		assert_eq!(eccentricity(&data, 0, &[0, 1, 2]), 2);
	}
}
