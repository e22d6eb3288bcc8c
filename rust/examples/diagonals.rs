//! Fill both diagonals of a 10x10 matrix, print its inner 8x8 block, then
//! every occupied cell.
//!
//! Run with `RUST_LOG=trace` to watch nodes being materialized.

use sparsematrix::{MatrixResult, SparseMatrix};

fn run() -> MatrixResult<()> {
    let mut matrix = SparseMatrix::<usize, 2>::new(0)?;

    for i in 0..10 {
        matrix.at(i).at(i).set(i);
        matrix.at(i).at(9 - i).set(9 - i);
    }

    for i in 1..=8 {
        let row: Vec<String> = (1..=8).map(|j| matrix[[i, j]].to_string()).collect();
        println!("{}", row.join(" "));
    }

    println!("Occupied: {}", matrix.len());
    for (path, value) in &matrix {
        let coordinates: Vec<String> = path.iter().map(|c| c.to_string()).collect();
        println!("{} {}", coordinates.join(" "), value);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
