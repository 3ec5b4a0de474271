use std::env;

use rand::rngs::StdRng;
use rand::Rng;
use stopwatch::Stopwatch;

use road_paths::{create_calculator, InputGraph, Weight};

fn main() {
    // e.g. run like this:
    // cargo run --release main 10000 2.5
    let args: Vec<String> = env::args().collect();
    let num_nodes = match args.get(2) {
        Some(arg) => arg.parse::<usize>().unwrap_or_else(|_| {
            eprintln!("invalid number of nodes: {}", arg);
            std::process::exit(2)
        }),
        None => 10_000,
    };
    let mean_degree = match args.get(3) {
        Some(arg) => arg.parse::<f32>().unwrap_or_else(|_| {
            eprintln!("invalid mean degree: {}", arg);
            std::process::exit(2)
        }),
        None => 2.5,
    };
    if num_nodes < 2 {
        eprintln!("the graph needs at least two nodes");
        std::process::exit(2)
    }
    println!(
        "Running Dijkstra queries on a random graph with {} nodes",
        num_nodes
    );

    let mut rng = create_rng_with_seed(123);
    let mut build_time = Stopwatch::new();
    build_time.start();
    let input_graph = build_random_graph(&mut rng, num_nodes, mean_degree);
    build_time.stop();
    println!(
        "number of nodes (input graph) ..... {}",
        input_graph.get_num_nodes()
    );
    println!(
        "number of edges (input graph) ..... {}",
        input_graph.get_num_edges()
    );
    println!(
        "build time ........................ {} ms",
        build_time.elapsed_ms()
    );

    let mut calc = create_calculator();
    let (checksum, num_not_found) = run_queries(
        &mut |s, t| {
            calc.calc_path(&input_graph, &s, &t)
                .map(|p| p.get_weight())
        },
        &mut rng,
        input_graph.get_num_nodes(),
    );
    println!("checksum .......................... {}", checksum);
    println!("not found ......................... {}", num_not_found);
}

fn build_random_graph(rng: &mut StdRng, num_nodes: usize, mean_degree: f32) -> InputGraph<usize> {
    let num_edges = (mean_degree * num_nodes as f32) as usize;
    let mut graph = InputGraph::new();
    for node in 0..num_nodes {
        graph.add_node(node);
    }
    let mut edge_count = 0;
    while edge_count < num_edges {
        let from = rng.gen_range(0, num_nodes);
        let to = rng.gen_range(0, num_nodes);
        let weight = rng.gen_range(1, 100) as Weight;
        edge_count += graph.add_edge(from, to, weight);
    }
    graph
}

fn run_queries<F>(calc_path: &mut F, rng: &mut StdRng, num_nodes: usize) -> (Weight, usize)
where
    F: FnMut(usize, usize) -> Option<Weight>,
{
    let num_queries = 10_000;
    let mut checksum = 0.0;
    let mut num_not_found = 0;
    let mut time = Stopwatch::new();
    for _ in 0..num_queries {
        let source = rng.gen_range(0, num_nodes);
        let target = rng.gen_range(0, num_nodes);
        time.start();
        let weight = calc_path(source, target);
        time.stop();
        match weight {
            Some(weight) => checksum += weight,
            None => num_not_found += 1,
        }
    }
    println!(
        "total query time .................. {} ms",
        time.elapsed_ms()
    );
    println!(
        "query time on average ............. {} micros",
        time.elapsed().as_micros() / (num_queries as u128)
    );
    (checksum, num_not_found)
}

fn create_rng_with_seed(seed: u64) -> StdRng {
    println!("creating random number generator with seed: {}", seed);
    rand::SeedableRng::seed_from_u64(seed)
}
