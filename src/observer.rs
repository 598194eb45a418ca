//! Progress observation and cooperative cancellation.
//!
//! The search functions report their progress to an [`Observer`] at fixed points:
//! after choosing initial kernels, after each assignment step, after each run,
//! after each spawn search, and after each value of k tried by the auto-k search.
//! Observers cannot change the results, but may ask the search to stop.
use crate::alternating::Run;
use log::{debug, info, trace};
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Receiver of progress events.
///
/// All hooks default to doing nothing. Hooks take `&self`, so an observer
/// can be shared by the parallel search; use interior mutability to collect state.
pub trait Observer<N> {
	/// Initial kernels of spawn number `spawn` were chosen.
	fn initialized(&self, _spawn: usize, _kernels: &[usize]) {}
	/// Assignment step `step` (starting at 1) has been performed with the given kernels.
	fn assigned(&self, _step: usize, _kernels: &[usize], _assignment: &[usize]) {}
	/// Spawn number `spawn` finished its run.
	fn run_finished(&self, _spawn: usize, _run: &Run<N>) {}
	/// All spawns for `k` clusters finished, `best` is the selected run.
	fn search_finished(&self, _k: usize, _best: &Run<N>) {}
	/// The auto-k search evaluated `k` clusters.
	fn k_tried(&self, _k: usize, _achieved: N, _target: N) {}
	/// Polled between steps and between spawns; returning true aborts with `Error::Cancelled`.
	fn should_stop(&self) -> bool {
		false
	}
}

/// The unit observer ignores all events.
impl<N> Observer<N> for () {}

impl<'a, N, O: Observer<N> + ?Sized> Observer<N> for &'a O {
	fn initialized(&self, spawn: usize, kernels: &[usize]) {
		(**self).initialized(spawn, kernels)
	}
	fn assigned(&self, step: usize, kernels: &[usize], assignment: &[usize]) {
		(**self).assigned(step, kernels, assignment)
	}
	fn run_finished(&self, spawn: usize, run: &Run<N>) {
		(**self).run_finished(spawn, run)
	}
	fn search_finished(&self, k: usize, best: &Run<N>) {
		(**self).search_finished(k, best)
	}
	fn k_tried(&self, k: usize, achieved: N, target: N) {
		(**self).k_tried(k, achieved, target)
	}
	fn should_stop(&self) -> bool {
		(**self).should_stop()
	}
}

/// Forward events to both observers; stop when either one asks to.
impl<N: Copy, A: Observer<N>, B: Observer<N>> Observer<N> for (A, B) {
	fn initialized(&self, spawn: usize, kernels: &[usize]) {
		self.0.initialized(spawn, kernels);
		self.1.initialized(spawn, kernels);
	}
	fn assigned(&self, step: usize, kernels: &[usize], assignment: &[usize]) {
		self.0.assigned(step, kernels, assignment);
		self.1.assigned(step, kernels, assignment);
	}
	fn run_finished(&self, spawn: usize, run: &Run<N>) {
		self.0.run_finished(spawn, run);
		self.1.run_finished(spawn, run);
	}
	fn search_finished(&self, k: usize, best: &Run<N>) {
		self.0.search_finished(k, best);
		self.1.search_finished(k, best);
	}
	fn k_tried(&self, k: usize, achieved: N, target: N) {
		self.0.k_tried(k, achieved, target);
		self.1.k_tried(k, achieved, target);
	}
	fn should_stop(&self) -> bool {
		self.0.should_stop() || self.1.should_stop()
	}
}

/// Writes progress through the `log` facade.
///
/// Kernel choices and run summaries go to `debug`, assignment steps to `trace`,
/// spawn and auto-k summaries to `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl<N: Debug + PartialOrd> Observer<N> for LogObserver {
	fn initialized(&self, spawn: usize, kernels: &[usize]) {
		debug!("spawn {}: new chosen kernels {:?}", spawn, kernels);
	}
	fn assigned(&self, step: usize, kernels: &[usize], _assignment: &[usize]) {
		trace!("step {}: kernels {:?}", step, kernels);
	}
	fn run_finished(&self, spawn: usize, run: &Run<N>) {
		debug!(
			"spawn {}: {} after {} steps, max diameter {:?}",
			spawn,
			if run.converged { "converged" } else { "step limit reached" },
			run.steps,
			run.max_diameter
		);
		if !run.degenerate.is_empty() {
			debug!("spawn {}: {} singleton clusters", spawn, run.degenerate.len());
		}
	}
	fn search_finished(&self, k: usize, best: &Run<N>) {
		info!(
			"spawn end for k = {}: min of max diameters {:?} for medoids {:?}",
			k, best.max_diameter, best.medoids
		);
	}
	fn k_tried(&self, k: usize, achieved: N, target: N) {
		if achieved <= target {
			info!("diameter ok {:?} <= {:?}, {} clusters enough", achieved, target, k);
		} else {
			info!(
				"diameter too big {:?} > {:?}, now trying {} clusters",
				achieved,
				target,
				k + 1
			);
		}
	}
}

/// Stops the search once a point in time has passed.
///
/// The check happens between steps and between spawns, so a long single step still completes.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
	until: Instant,
}

impl Deadline {
	/// Stop at the given instant
	pub fn at(until: Instant) -> Self {
		Deadline { until }
	}

	/// Stop after the given duration, counted from now
	pub fn after(timeout: Duration) -> Self {
		Deadline {
			until: Instant::now() + timeout,
		}
	}
}

impl<N> Observer<N> for Deadline {
	fn should_stop(&self) -> bool {
		Instant::now() >= self.until
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;

	#[derive(Default)]
	struct Counter {
		steps: Cell<usize>,
	}

	impl Observer<f64> for Counter {
		fn assigned(&self, _step: usize, _kernels: &[usize], _assignment: &[usize]) {
			self.steps.set(self.steps.get() + 1);
		}
	}

	#[test]
	fn test_pair_forwards_and_stops() {
		let counter = Counter::default();
		let pair = (&counter, Deadline::at(Instant::now()));
		Observer::<f64>::assigned(&pair, 1, &[0], &[0]);
		assert_eq!(counter.steps.get(), 1, "event not forwarded");
		assert!(Observer::<f64>::should_stop(&pair), "deadline ignored");
	}

	#[test]
	fn test_deadline_in_future() {
		let d = Deadline::after(Duration::from_secs(3600));
		assert!(!Observer::<f64>::should_stop(&d));
		assert!(!Observer::<f64>::should_stop(&()));
	}
}
