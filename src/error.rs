use thiserror::Error;

/// Errors returned by the clustering functions in this crate.
///
/// A cluster that ends up holding only its own medoid is not an error;
/// it is reported in [`Run::degenerate`](crate::Run) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// A point, or a pair of points, has no entry in the distance table.
	#[error("missing distance: point not present in the distance table")]
	MissingDistance,

	/// More clusters were requested than there are distinct points.
	#[error("insufficient points: requested {requested} clusters, but only {available} distinct points")]
	InsufficientPoints {
		/// Requested number of clusters.
		requested: usize,
		/// Number of distinct points available.
		available: usize,
	},

	/// No points were given.
	#[error("empty input")]
	EmptyInput,

	/// Invalid parameter value.
	#[error("invalid parameter {name}: {message}")]
	InvalidParameter {
		/// Parameter name.
		name: &'static str,
		/// Human-readable explanation.
		message: &'static str,
	},

	/// The distance matrix is not symmetric at the given cell.
	#[error("distance matrix is not symmetric at ({row}, {col})")]
	Asymmetric {
		/// Row of the offending cell.
		row: usize,
		/// Column of the offending cell.
		col: usize,
	},

	/// The distance of a point to itself is not zero.
	#[error("distance of point {index} to itself is not zero")]
	NonZeroSelfDistance {
		/// Index of the offending point.
		index: usize,
	},

	/// An observer requested the search to stop.
	#[error("search cancelled")]
	Cancelled,
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
