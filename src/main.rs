use clap::Parser;
use starbot::client::Client;
use starbot::players::Robot;
use starbot::protocol::MAX_FIELDS;
use starbot::protocol::MIN_FIELDS;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Heads-up hold'em bot speaking the line protocol on stdin/stdout", long_about = None)]
struct Args {
    #[arg(long, default_value = "info", help = "Terminal log level, written to stderr")]
    log_level: log::LevelFilter,
    #[arg(long, help = "Also write a debug log to <DIR>/<unix-seconds>.log")]
    log_dir: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = MAX_FIELDS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(MIN_FIELDS as u64..),
        help = "Fields read per engine line"
    )]
    max_fields: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    starbot::log(args.log_level, args.log_dir.as_deref())?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Client::new(Robot)
        .fields(args.max_fields)
        .run(stdin.lock(), stdout.lock())
}
