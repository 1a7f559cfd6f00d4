use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "klsref")]
#[command(version)]
#[command(about = "Resolve kls: archive-entry references", long_about = None)]
#[command(after_help = "Examples:\n  \
  klsref 'kls:file:///repo/lib.jar!/com/Foo.kt'       show the resolved reference\n  \
  klsref -p 'kls:file:///repo/lib.jar!/com/Foo.kt'    print the entry's text\n  \
  klsref -x -d out 'file:///repo/lib.jar!/Foo.class'  extract the entry into out/")]
pub struct Cli {
    /// Archive entry reference (kls: or file: identifier)
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Print the entry's contents to stdout
    #[arg(short = 'p')]
    pub pipe: bool,

    /// Extract the entry to a temporary file and print its path
    #[arg(short = 'x')]
    pub extract: bool,

    /// Directory to extract into (default: a fresh temporary directory)
    #[arg(short = 'd', value_name = "DIR")]
    pub extract_dir: Option<String>,

    /// Set the source flag before resolving
    #[arg(short = 's')]
    pub source: bool,

    /// Quiet mode
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet || self.pipe
    }
}
