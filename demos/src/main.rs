//! Find and print the shortest path on a grid.
//!
//! Run: cargo run --bin findpath -- --map demos/maps/maze.txt

use std::io::Write;

use tilepath_demos::{HELP, Settings, parse_args, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {} - {}", record.level(), record.target(), record.args()))
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}\n\n{HELP}");
            std::process::exit(1);
        }
    };
    if args.help {
        println!("{HELP}");
        return;
    }

    let result = Settings::load(args.config.as_deref()).and_then(|settings| run(&settings, &args));
    match result {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
