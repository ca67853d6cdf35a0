use env_logger::Builder;
use flate2::read::GzDecoder;
use log::LevelFilter;
use std::fs::{self, File};
use std::hash::BuildHasherDefault;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, WordlistError};

pub type HashSet<A> = std::collections::HashSet<A, BuildHasherDefault<rustc_hash::FxHasher>>;

pub fn new_hash_set<A>() -> HashSet<A> {
    rustc_hash::FxHashSet::default()
}

/// Read a whole text file, decoding it first when the name ends in `.gz`.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let contents = if path.extension().is_some_and(|ext| ext == "gz") {
        File::open(path).and_then(|f| io::read_to_string(GzDecoder::new(f)))
    } else {
        fs::read_to_string(path)
    };
    contents.map_err(|e| WordlistError::read(path, e))
}

/// Write every line followed by a newline. The file is only created once the
/// caller has all lines ready, so a failed run leaves nothing half written.
pub fn write_lines<P, I, S>(path: P, lines: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let write = || -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for line in lines {
            out.write_all(line.as_ref().as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()
    };
    write().map_err(|e| WordlistError::write(path, e))
}

/// Log level for a repeated `-v` count: warn by default, then info, debug and
/// trace. `quiet` wins over any count.
pub fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logging(verbose: u8, quiet: bool) {
    Builder::new()
        .filter_level(log_level(verbose, quiet))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}
