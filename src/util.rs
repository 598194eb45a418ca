use crate::arrayadapter::ArrayAdapter;

/// Compare two kernel lists as sets, ignoring their order.
#[inline]
pub(crate) fn same_set(a: &[usize], b: &[usize]) -> bool {
	if a.len() != b.len() {
		return false;
	}
	let mut a = a.to_vec();
	let mut b = b.to_vec();
	a.sort_unstable();
	b.sort_unstable();
	a == b
}

/// Validate a kernel list against a matrix of size n
pub(crate) fn check_kernels(n: usize, med: &[usize]) -> crate::Result<()> {
	if med.is_empty() {
		return Err(crate::Error::InvalidParameter {
			name: "kernels",
			message: "at least one kernel is required",
		});
	}
	if med.len() > n {
		return Err(crate::Error::InsufficientPoints {
			requested: med.len(),
			available: n,
		});
	}
	if med.iter().any(|&m| m >= n) {
		return Err(crate::Error::InvalidParameter {
			name: "kernels",
			message: "kernel index out of range",
		});
	}
	let mut seen = vec![false; n];
	for &m in med {
		if seen[m] {
			return Err(crate::Error::InvalidParameter {
				name: "kernels",
				message: "kernels must be distinct",
			});
		}
		seen[m] = true;
	}
	Ok(())
}

/// Debug helper function
pub(crate) fn debug_assert_assignment<M, N>(_mat: &M, _med: &[usize], _assi: &[usize])
where
	N: PartialOrd + Copy,
	M: ArrayAdapter<N>,
{
	#[cfg(feature = "assertions")]
	for o in 0.._mat.len() {
		let own = _mat.get(o, _med[_assi[o]]);
		debug_assert!(
			_med.iter().all(|&m| own <= _mat.get(o, m) || m == _med[_assi[o]]),
			"point not assigned to its nearest kernel"
		);
		if let Some(p) = _med.iter().position(|&m| m == o) {
			debug_assert!(_assi[o] == p, "kernel not assigned to itself");
		}
	}
}

/// test two arrays for equality, used in tests only
#[cfg(test)]
pub(crate) fn assert_array(result: Vec<usize>, expect: Vec<usize>, msg: &'static str) {
	assert!(
		result.len() == expect.len() && result.iter().zip(expect.iter()).all(|(a, b)| a == b),
		"{}",
		msg
	);
}
