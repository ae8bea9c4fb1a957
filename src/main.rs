use log::{info, error};
use pico_args::Arguments;
use rand_twister::*;
use std::error::Error;
use std::io::Write;

type Res<T> = Result<T, Box<dyn Error>>;

/// Output options parsed from the command line.
struct Options {
    seed: Option<i64>,
    count: Option<u64>,
    text: bool,
    warmup: bool,
}

/// Writes `count` words (or forever) from `next` to stdout.
/// Raw output is Little-Endian, suitable for piping into PractRand.
fn stream<T: std::fmt::Display>(options: &Options, width: usize, mut next: impl FnMut() -> (T, [u8; 8])) -> Res<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut v: Vec<u8> = Vec::new();
    let mut n: u64 = 0;

    while options.count.map_or(true, |count| n < count) {
        let (x, bytes) = next();
        if options.text {
            writeln!(v, "{}", x)?;
        } else {
            v.extend_from_slice(&bytes[0 .. width]);
        }
        if v.len() >= 0x10000 {
            out.write_all(v.as_slice())?;
            v.clear();
        }
        n += 1;
    }
    out.write_all(v.as_slice())?;
    out.flush()?;
    Ok(())
}

fn build_twister<W: Word, const N: usize, const M: usize>(options: &Options) -> Res<MersenneTwister<W, N, M>> {
    let mut mt = match options.seed {
        Some(seed) => MersenneTwister::with_seed(seed),
        None => MersenneTwister::try_from_entropy()?,
    };
    if options.warmup {
        let discarded = mt.try_warmup()?;
        info!("Discarded {} words", discarded);
    }
    Ok(mt)
}

fn main() -> Res<()> {
    simple_logger::SimpleLogger::new().with_level(log::LevelFilter::Info).env().init()?;

    let res = main0();
    if let Err(e) = &res {
        error!("{}", e);
    }

    res
}

fn main0() -> Res<()> {
    let mut args = Arguments::from_env();
    let engine: String = args.opt_value_from_str("--engine")?.unwrap_or_else(|| "mt32".to_string());
    let options = Options {
        seed: args.opt_value_from_str("--seed")?,
        count: args.opt_value_from_str("--count")?,
        text: args.contains("--text"),
        warmup: args.contains("--warmup"),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        return Err(format!("unexpected arguments: {:?}", rest).into());
    }

    info!("Streaming {} output, seed {:?}", engine, options.seed);
    match engine.as_str() {
        "mt32" => {
            let mut mt = build_twister::<u32, 624, 397>(&options)?;
            stream(&options, 4, || { let x = mt.next_word(); (x, (x as u64).to_le_bytes()) })
        }
        "mt64" => {
            let mut mt = build_twister::<u64, 312, 156>(&options)?;
            stream(&options, 8, || { let x = mt.next_word(); (x, x.to_le_bytes()) })
        }
        "well" => {
            let mut seeder = build_twister::<u32, 624, 397>(&options)?;
            let mut well = Well512a::new(core::array::from_fn(|_| seeder.next_word()));
            stream(&options, 4, || { let x = well.next(); (x, (x as u64).to_le_bytes()) })
        }
        _ => Err(format!("unknown engine {}, expected mt32, mt64 or well", engine).into()),
    }
}
