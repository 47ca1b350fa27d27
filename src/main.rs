use bit_array::BitArray;

use clap::Parser;
use log::info;

/// Build a bit array, write some bits and print its contents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of boolean slots
    #[arg(short, long)]
    capacity: usize,

    /// Indices to set to true
    #[arg(short, long = "set")]
    set: Vec<usize>,

    /// Indices to set to false, applied after --set
    #[arg(long = "clear")]
    clear: Vec<usize>,

    /// Indices to read back
    #[arg(short, long = "get")]
    get: Vec<usize>,

    /// Also print the backing storage bytes
    #[arg(short, long, default_value_t = false)]
    bytes: bool,
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = Args::parse();

    let mut array = BitArray::new(args.capacity);
    info!(
        "built bit array of capacity {} using {} bytes",
        array.capacity(),
        array.storage_len()
    );

    for index in args.set {
        array.set(index, true)?;
    }
    for index in args.clear {
        array.set(index, false)?;
    }

    for index in args.get {
        println!("{}={}", index, array.get(index)?);
    }

    println!("{}", array);

    if args.bytes {
        let bytes: Vec<String> = array
            .to_bytes()
            .iter()
            .map(|byte| format!("{:08b}", byte))
            .collect();
        println!("{}", bytes.join(" "));
    }

    Ok(())
}
