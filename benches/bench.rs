#![feature(test)]
//! Note that benchmarks can easily be misleading.
//! The spawn search time grows linearly with the number of spawns, auto-k with the k reached.
extern crate test;

use medoids::*;
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use test::{black_box, Bencher};

fn random_matrix(n: usize, rng: &mut StdRng) -> Array2<i32> {
	let mut mat = Array2::<i32>::from_elem((n, n), 0);
	for i in 0..n {
		for j in (i + 1)..n {
			let v = rng.gen_range(1..100);
			mat[[i, j]] = v;
			mat[[j, i]] = v;
		}
	}
	mat
}

#[bench]
fn bench_alternating(b: &mut Bencher) {
	let mut rng = StdRng::seed_from_u64(42);
	let mat = random_matrix(100, &mut rng);
	b.iter(|| {
		let run = alternating(&mat, &[0, 1, 2, 3, 4], 100, &()).unwrap();
		black_box(run.max_diameter);
		black_box(run.assignment);
	});
}

#[bench]
fn bench_spawn_search(b: &mut Bencher) {
	let mut rng = StdRng::seed_from_u64(42);
	let mat = random_matrix(100, &mut rng);
	b.iter(|| {
		let run = spawn_search(&mat, 5, 10, 100, &mut rng, &()).unwrap();
		black_box(run.max_diameter);
	});
}

#[bench]
fn bench_auto_k(b: &mut Bencher) {
	let mut rng = StdRng::seed_from_u64(42);
	let mat = random_matrix(60, &mut rng);
	b.iter(|| {
		let run = auto_k_search(&mat, 80, 1, 5, 100, &mut rng, &()).unwrap();
		black_box(run.k());
	});
}

#[bench]
fn bench_build_distances(b: &mut Bencher) {
	let mut rng = StdRng::seed_from_u64(42);
	let pts: Vec<(i32, i32)> = (0..200).map(|_| (rng.gen_range(0..1000), rng.gen_range(0..1000))).collect();
	b.iter(|| {
		let table = build_distances(pts.iter().cloned(), |a, b| (a.0 - b.0).abs() + (a.1 - b.1).abs());
		black_box(table.len());
	});
}
