mod batch;
mod config;
mod decode;
mod encode;
mod vocab;

/// Subcommands for sentchar
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Tokenize text, one line per sequence.
    Encode(encode::EncodeArgs),

    /// Detokenize whitespace-separated token ids, one sequence per line.
    Decode(decode::DecodeArgs),

    /// Tokenize and pad a batch of lines; emit tokens and mask as JSON.
    Batch(batch::BatchArgs),

    /// Print the vocabulary table.
    Vocab(vocab::VocabArgs),

    /// Validate a model config and print its derived shapes.
    Config(config::ConfigArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Batch(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Config(cmd) => cmd.run(),
        }
    }
}
