/// Random initialization
///
/// This is simply a call to `rand::seq::index::sample`.
///
/// * `n` - size of the data set
/// * `k` - number of clusters to find
/// * `rng` - random number generator
///
/// returns a vector of `k` distinct kernel indexes in 0..n-1
///
/// ## Panics
///
/// * panics when k is larger than n
///
/// ## Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(42);
/// let meds = medoids::random_initialization(10, 2, &mut rng);
/// println!("Chosen kernels: {:?}", meds);
/// ```
#[inline]
pub fn random_initialization(n: usize, k: usize, rng: &mut impl rand::Rng) -> Vec<usize> {
	rand::seq::index::sample(rng, n, k).into_vec()
}

/// Initial kernels for one spawn of the search.
///
/// A random kernel set as drawn by [`random_initialization`], listed in descending
/// index order. The order of the kernels decides which one receives an equidistant
/// point, so a fixed order makes this independent of the order of the draw:
/// such points go to the kernel that comes later in the table.
///
/// * `n` - size of the data set
/// * `k` - number of clusters to find
/// * `rng` - random number generator
///
/// ## Panics
///
/// * panics when k is larger than n
#[inline]
pub fn spawn_initialization(n: usize, k: usize, rng: &mut impl rand::Rng) -> Vec<usize> {
	let mut med = random_initialization(n, k, rng);
	med.sort_unstable_by(|a, b| b.cmp(a));
	med
}
