use crate::{Error, Result};

/// Default number of random restarts
pub const DEFAULT_SPAWN: usize = 10;
/// Default step limit of a single run
pub const DEFAULT_MAX_STEPS: usize = 100;

/// Search parameters shared by the fixed-k and the auto-k search.
///
/// ```
/// let params = medoids::Params::default().with_spawn(20).with_start_k(2);
/// assert_eq!(params.max_steps, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
	/// Number of random restarts per value of k
	pub spawn: usize,
	/// Step limit of each run
	pub max_steps: usize,
	/// First k tried by the auto-k search
	pub start_k: usize,
}

impl Default for Params {
	fn default() -> Self {
		Params {
			spawn: DEFAULT_SPAWN,
			max_steps: DEFAULT_MAX_STEPS,
			start_k: 1,
		}
	}
}

impl Params {
	/// Set the number of random restarts.
	pub fn with_spawn(mut self, spawn: usize) -> Self {
		self.spawn = spawn;
		self
	}

	/// Set the step limit of each run.
	pub fn with_max_steps(mut self, max_steps: usize) -> Self {
		self.max_steps = max_steps;
		self
	}

	/// Set the first k tried by the auto-k search.
	pub fn with_start_k(mut self, start_k: usize) -> Self {
		self.start_k = start_k;
		self
	}

	/// Reject parameters no search can run with.
	pub fn validate(&self) -> Result<()> {
		if self.spawn == 0 {
			return Err(Error::InvalidParameter {
				name: "spawn",
				message: "at least one spawn is required",
			});
		}
		if self.max_steps == 0 {
			return Err(Error::InvalidParameter {
				name: "max_steps",
				message: "at least one step is required",
			});
		}
		if self.start_k == 0 {
			return Err(Error::InvalidParameter {
				name: "start_k",
				message: "must be at least 1",
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_validate() {
		assert!(Params::default().validate().is_ok());
		assert!(Params::default().with_spawn(0).validate().is_err());
		assert!(Params::default().with_max_steps(0).validate().is_err());
		assert!(Params::default().with_start_k(0).validate().is_err());
	}
}
