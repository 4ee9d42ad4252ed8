use anyhow::{Context, Result, anyhow, bail};
use tracing::info;

use bitmove_core::{Board, CachePolicy, Config, Position, SliderMode, divide, perft};

/// Command-line options.
#[derive(Debug, Default, PartialEq)]
struct Options {
    fen: Option<String>,
    moves: Vec<String>,
    perft: Option<usize>,
    divide: Option<usize>,
    config: Config,
}

/// Parse the arguments after the program name.
///
/// Supports `--fen <position>`, `--moves <m1> <m2> ...`, `--perft <depth>`,
/// `--divide <depth>`, `--cache <entries>` and `--ray-walk`.
fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--fen" => {
                options.fen = Some(value(args, i, "--fen")?.to_string());
                i += 2;
            }
            "--moves" => {
                i += 1;
                while i < args.len() && !args[i].starts_with("--") {
                    options.moves.push(args[i].clone());
                    i += 1;
                }
            }
            "--perft" => {
                options.perft = Some(parse_number(args, i, "--perft")?);
                i += 2;
            }
            "--divide" => {
                options.divide = Some(parse_number(args, i, "--divide")?);
                i += 2;
            }
            "--cache" => {
                let entries = parse_number(args, i, "--cache")?;
                options.config = options.config.with_cache(CachePolicy::Bounded(entries));
                i += 2;
            }
            "--ray-walk" => {
                options.config = options.config.with_slider_mode(SliderMode::RayWalk);
                i += 1;
            }
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(options)
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{flag} needs a value"))
}

fn parse_number(args: &[String], i: usize, flag: &str) -> Result<usize> {
    let raw = value(args, i, flag)?;
    raw.parse()
        .with_context(|| format!("{flag} expects a number, got {raw:?}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;
    info!(?options, "bitmove starting");

    let position: Position = match &options.fen {
        Some(fen) => fen
            .parse()
            .with_context(|| format!("failed to parse position {fen:?}"))?,
        None => Position::starting_position(),
    };
    let mut board = Board::from_position_with_config(position, options.config);

    for text in &options.moves {
        let mv = board
            .parse_move(text)
            .ok_or_else(|| anyhow!("move {text} is not available in {}", board.to_fen()))?;
        board.apply_move(mv)?;
    }

    println!("{}", board.position().pretty());
    println!("{}", board.to_fen());

    if let Some(depth) = options.divide {
        let mut total = 0u64;
        for (mv, nodes) in divide(&mut board, depth)? {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!();
        println!("Nodes searched: {total}");
    } else if let Some(depth) = options.perft {
        let nodes = perft(&mut board, depth)?;
        println!("perft({depth}) = {nodes}");
    } else {
        let moves = board.generate_all();
        let list: Vec<String> = moves.iter().map(|mv| mv.to_uci()).collect();
        println!("{} moves: {}", list.len(), list.join(" "));
    }

    info!(stats = ?board.cache_stats(), "done");
    Ok(())
}
