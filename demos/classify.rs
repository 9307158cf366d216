/*!
Classifies each path given on the command line, and prints its parts.

Parse flags come from `winpathclass.toml` and `WINPATHCLASS__*` variables; set `RUST_LOG=winpathclass=debug` to see why a path was rejected.
*/
extern crate winpathclass;

use std::env;

use tracing::warn;
use tracing_subscriber::EnvFilter;
use winpathclass::{classify, config, ParseFlags};

const SAMPLES: &[&str] = &[
    r"C:\Windows\System32\drivers\etc\hosts",
    r"C:relative\file.txt",
    r"\rooted\dir\",
    r"\\server\share\dir\archive.tar.gz",
    r"\\server\share",
    r"\\?\C:\very\long\path",
    r"\\?\UNC\server\share\x",
    r"~\.bashrc",
    r"bad\\slashes",
    r"what?.txt",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let flags = match config::load().and_then(|cfg| Ok(cfg.parse_flags()?)) {
        Ok(flags) => flags,
        Err(err) => {
            warn!(error = %err, "ignoring configuration");
            ParseFlags::empty()
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let paths: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(|s| &**s).collect()
    };

    for path in paths {
        let c = classify(path, flags);
        println!("{:?}", path);
        println!("    kind:      {:?}", c.kind());
        if c.kind().is_failure() {
            if let Some(span) = c.first_invalid_span() {
                println!("    invalid:   offset {}", span.offset);
            }
            continue;
        }
        println!("    root:      {:?}", c.root_str().unwrap_or(""));
        println!("    directory: {:?} ({} parts)", c.directory_str().unwrap_or(""), c.num_directory_parts());
        println!("    entry:     {:?}", c.entry_str().unwrap_or(""));
        println!("    stem:      {:?}", c.stem_str().unwrap_or(""));
        println!("    extension: {:?}", c.extension_str().unwrap_or(""));
    }
}
