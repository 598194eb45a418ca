/// A cluster of points, represented by one of its members.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<P, N> {
	/// The representative member
	pub medoid: P,
	/// All members, including the medoid, in table order
	pub members: Vec<P>,
	/// Largest distance between two members
	pub diameter: N,
}

impl<P, N> Cluster<P, N> {
	/// Whether the cluster holds nothing but its medoid.
	///
	/// This is not an error: outliers legitimately end up alone.
	pub fn is_degenerate(&self) -> bool {
		self.members.len() == 1
	}
}

/// Result of a clustering search, in terms of the caller's points.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering<P, N> {
	/// The clusters, partitioning all points of the table
	pub clusters: Vec<Cluster<P, N>>,
	/// The largest cluster diameter
	pub max_diameter: N,
	/// Number of assignment steps of the selected run
	pub steps: usize,
	/// `false` when the selected run stopped at the step limit
	pub converged: bool,
}

impl<P, N> Clustering<P, N> {
	/// Number of clusters
	pub fn k(&self) -> usize {
		self.clusters.len()
	}

	/// The medoids of all clusters
	pub fn medoids(&self) -> impl Iterator<Item = &P> + '_ {
		self.clusters.iter().map(|c| &c.medoid)
	}
}
