// Clusters the vertices of an ORLib p-median graph by shortest-path distance, either
// with the file's k or, given a second argument, with the smallest k reaching that diameter.
// Set RUST_LOG=debug (or trace) to follow the search.
use medoids::{check_matrix, k_medoids_auto_k_with, k_medoids_with, DistanceTable, LogObserver, Params};
use rand::{rngs::StdRng, SeedableRng};
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::time::Instant;

// vertices without a path between them
const UNREACHABLE: i32 = i32::MAX / 2;

struct Graph {
	// edge weights, then shortest path lengths
	dist: Vec<Vec<i32>>,
	k: usize,
}

impl Graph {
	// Header line "vertices edges k", then one "u v weight" line per edge, 1-based.
	// A later line for the same edge replaces the earlier weight.
	fn read<R: Read>(io: R) -> Result<Self, Box<dyn Error>> {
		let mut lines = BufReader::new(io).lines();
		let header = lines.next().ok_or("empty file")??;
		let header: Vec<usize> = header
			.split_whitespace()
			.map(str::parse)
			.collect::<Result<_, _>>()?;
		let (n, k) = match header[..] {
			[n, _, k] => (n, k),
			_ => return Err("header must read: vertices edges k".into()),
		};
		let mut dist = vec![vec![UNREACHABLE; n]; n];
		for (i, row) in dist.iter_mut().enumerate() {
			row[i] = 0;
		}
		for line in lines {
			let line = line?;
			let fields: Vec<&str> = line.split_whitespace().collect();
			if fields.is_empty() {
				continue;
			}
			let (u, v, w) = match fields[..] {
				[u, v, w] => (u.parse::<usize>()?, v.parse::<usize>()?, w.parse::<i32>()?),
				_ => return Err(format!("bad edge line: {}", line).into()),
			};
			if u == 0 || v == 0 || u > n || v > n {
				return Err(format!("vertex out of range: {}", line).into());
			}
			if u != v {
				dist[u - 1][v - 1] = w;
				dist[v - 1][u - 1] = w;
			}
		}
		let mut graph = Graph { dist, k };
		graph.shortest_paths();
		Ok(graph)
	}

	// Floyd-Warshall, relaxing every pair through each vertex in turn
	fn shortest_paths(&mut self) {
		let n = self.dist.len();
		for via in 0..n {
			let through = self.dist[via].clone();
			for row in self.dist.iter_mut() {
				let to_via = row[via];
				if to_via >= UNREACHABLE {
					continue;
				}
				for (d, &rest) in row.iter_mut().zip(&through) {
					if to_via + rest < *d {
						*d = to_via + rest;
					}
				}
			}
		}
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();
	let name = env::args().nth(1).ok_or("no file name given")?;
	let diam_max = env::args().nth(2).map(|s| s.parse::<i32>()).transpose()?;
	let graph = Graph::read(File::open(name)?)?;
	check_matrix(&graph.dist)?;
	let vertices: Vec<usize> = (1..=graph.dist.len()).collect();
	let table = DistanceTable::from_matrix(vertices, &graph.dist)?;
	let params = Params::default();
	let mut rng = StdRng::seed_from_u64(0);
	let start = Instant::now();
	let result = match diam_max {
		Some(d) => k_medoids_auto_k_with(&table, d, &params, &mut rng, &LogObserver)?,
		None => k_medoids_with(&table, graph.k, &params, &mut rng, &LogObserver)?,
	};
	let duration = start.elapsed();
	println!("Clusters: {}", result.k());
	println!("Max diameter: {}", result.max_diameter);
	println!("Steps of best run: {}", result.steps);
	println!(
		"Singleton clusters: {}",
		result.clusters.iter().filter(|c| c.is_degenerate()).count()
	);
	println!("Medoids: {:?}", result.medoids().collect::<Vec<_>>());
	println!("Optimization time: {:?}", duration);
	Ok(())
}
