use clap::Parser;

pub const VERSION: &str = "0.1.0";

const LONG_ABOUT: &str = "shellbale creates a shell script that can recreate a directory structure\n\
including all files and subdirectories. Text files are preserved using\n\
heredoc strings while binary files are encoded using base64.\n\n\
If no output file is specified, the script is written to stdout.";

const EXAMPLES: &str = "Examples:
    shellbale -i ./my_folder -o recreate_folder.sh
    shellbale -i /path/to/project > backup.sh
    shellbale -i ./config -t | ssh remote_host \"cat > restore_config.sh\"
    shellbale -i ~/.config -t | xclip -selection clipboard";

#[derive(Parser, Clone)]
#[command(name = "shellbale")]
#[command(version = VERSION)]
#[command(about = "Generates a shell script that recreates a directory structure")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Input directory to process
    #[arg(short = 'i', long = "input")]
    pub input: String,

    /// Output script path (optional, defaults to stdout)
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Include an ASCII tree representation of the input directory
    #[arg(short = 't', long = "tree")]
    pub tree: bool,
}
