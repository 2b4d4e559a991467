//! Copying a file with invariant checks that turn into returned errors.
//!
//! Run with `cargo run --example copy_file -- <src> <dst>`.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use asserter::prelude::*;

#[derive(Debug, thiserror::Error)]
enum CopyError {
    #[error(transparent)]
    Assertion(#[from] AssertionError),
    #[error("copy {} {}: {source}", .src.display(), .dst.display())]
    Io {
        src: PathBuf,
        dst: PathBuf,
        source: io::Error,
    },
}

fn copy_file(src: &Path, dst: &Path) -> Result<u64, CopyError> {
    let io_error = |source| CopyError::Io {
        src: src.to_owned(),
        dst: dst.to_owned(),
        source,
    };

    Handler::new()
        .context(format_args!("copy {} {}", src.display(), dst.display()))
        .run_result(|| {
            not_equal!(src, dst, "source and destination are the same file");
            let data = fs::read(src).map_err(io_error)?;
            slice_not_empty!(data, "refusing to copy an empty file");

            let mut file = fs::File::create(dst).map_err(io_error)?;
            // From here on `dst` is ours to remove.
            Handler::new()
                .context(format_args!("write {}", dst.display()))
                .cleanup(|| {
                    let _ = fs::remove_file(dst);
                })
                .run_result(|| {
                    file.write_all(&data).map_err(io_error)?;
                    file.sync_all().map_err(io_error)?;
                    let written = file.metadata().map_err(io_error)?.len();
                    equal!(written, data.len() as u64, "short write");
                    Ok(written)
                })
        })
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
    asserter::hooks::install_panic_hook();

    let mut args = std::env::args_os().skip(1);
    let (Some(src), Some(dst)) = (args.next(), args.next()) else {
        eprintln!("usage: copy_file <src> <dst>");
        std::process::exit(2);
    };

    match copy_file(Path::new(&src), Path::new(&dst)) {
        Ok(bytes) => println!("copied {bytes} bytes"),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}
