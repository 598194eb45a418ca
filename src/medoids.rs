//! k-Medoids Clustering minimizing the largest cluster diameter
//!
//! Given a set of points and their pairwise distances, partition the points into
//! k clusters, each represented by one of its members (the medoid), such that the
//! largest cluster diameter is small. The diameter of a cluster is the largest
//! distance between two of its members.
//!
//! The algorithm alternates between assigning every point to its nearest kernel and
//! replacing each kernel by the member that minimizes the largest distance to the rest
//! of its cluster, until the kernels no longer change. Because this local search easily
//! gets stuck, it is restarted ("spawned") from several random kernel sets, and the run
//! with the smallest maximum diameter is kept. On top of that, [`k_medoids_auto_k`]
//! increases k until the best diameter found is within a given bound.
//!
//! Distances need not be a metric: only symmetry, non-negativity and a zero diagonal are
//! assumed, and they are not checked (see [`check_matrix`]). Ties are always resolved
//! in favor of the point or kernel that comes first, so results depend only on the
//! input order and the random generator.
//!
//! ## Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! let table = medoids::build_distances(vec![1, 2, 3, 4, 5, 6, 7], |a: &i32, b: &i32| (b - a).abs());
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = medoids::k_medoids_auto_k(&table, 3, 20, &mut rng).unwrap();
//! println!("{} clusters, max diameter {}", result.k(), result.max_diameter);
//! for cluster in &result.clusters {
//! 	println!("medoid {}: {:?}", cluster.medoid, cluster.members);
//! }
//! ```
//!
//! Index-level functions such as [`alternating`], [`spawn_search`] and [`auto_k_search`]
//! work directly on any [`ArrayAdapter`], e.g. an `ndarray::Array2` dissimilarity matrix.
#![forbid(unsafe_code)]

mod alternating;
pub mod arrayadapter;
mod assign;
mod autok;
mod clustering;
mod distance;
pub mod error;
mod initialization;
pub mod observer;
#[cfg(feature = "parallel")]
mod par_spawn;
mod params;
mod recenter;
mod spawn;
mod util;

pub use crate::alternating::*;
pub use crate::arrayadapter::ArrayAdapter;
pub use crate::assign::*;
pub use crate::autok::*;
pub use crate::clustering::*;
pub use crate::distance::*;
pub use crate::error::{Error, Result};
pub use crate::initialization::*;
pub use crate::observer::{Deadline, LogObserver, Observer};
#[cfg(feature = "parallel")]
pub use crate::par_spawn::*;
pub use crate::params::*;
pub use crate::recenter::*;
pub use crate::spawn::*;
