use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;
use herbtext::{ProcessOpts, process_text, rewrite};

#[derive(Parser)]
#[command(version, about = "Clean up and format herbal reference text")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    opts: FormatOpts,
    /// Text files to process
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI exposes four independent flags"
)]
struct FormatOpts {
    /// Strip HTML markup, leaving rendered plain text
    #[arg(long = "strip")]
    strip: bool,
    /// Truncate editorial annotations to the concise display form
    #[arg(long = "concise")]
    concise: bool,
    /// Expand citation shorthand into link-decorated HTML
    #[arg(long = "expand")]
    expand: bool,
    /// Leave book citation shorthand unexpanded
    #[arg(long = "no-books", requires = "expand")]
    no_books: bool,
}

impl From<FormatOpts> for ProcessOpts {
    fn from(opts: FormatOpts) -> Self {
        Self {
            strip: opts.strip,
            concise: opts.concise,
            expand: opts.expand,
            books: !opts.no_books,
        }
    }
}

/// Entry point for the command-line tool that cleans up reference text.
///
/// With no file arguments the tool reads standard input and prints the
/// processed text to standard output. File arguments are processed one at a
/// time, either printed or rewritten in place with `--in-place`.
///
/// # Examples
///
/// ```sh
/// # Concise form of an entry, to stdout
/// herbtext --concise entry.txt
///
/// # Expand citations in place
/// herbtext --expand --in-place entry.txt
///
/// # Strip markup from standard input
/// cat feed.html | herbtext --strip
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let opts = ProcessOpts::from(cli.opts);

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let trimmed = input.strip_suffix('\n').unwrap_or(&input);
        println!("{}", process_text(trimmed, opts));
        return Ok(());
    }

    for path in cli.files {
        if cli.in_place {
            rewrite(&path, opts)?;
        } else {
            let content = fs::read_to_string(&path)?;
            let trimmed = content.strip_suffix('\n').unwrap_or(&content);
            println!("{}", process_text(trimmed, opts));
        }
    }

    Ok(())
}
