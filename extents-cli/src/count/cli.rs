use clap::{Command, arg};

pub const COUNT_CMD: &str = "count";

pub fn create_count_cli() -> Command {
    Command::new(COUNT_CMD)
        .about("Count how many extents contain each query point")
        .arg_required_else_help(true)
        .arg(arg!(-x <extents> "File of whitespace-delimited start/end extent pairs"))
        .arg(arg!(-n <numbers> "File of query points, one unsigned integer per token"))
        .arg(arg!(-e [expected] "File of expected counts; enables self-check mode"))
}
