use std::io::{
    BufRead,
    Write,
};

use sentchar::{
    CodecOptions,
    SCResult,
    VocabularyCodec,
};

use crate::input_output::{
    InputArgs,
    OutputArgs,
    trim_line_ending,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Treat each line as one sequence; EOS only at the end.
    ///
    /// Without this, EOS follows every `.`, `!` and `?`.
    #[clap(long)]
    split_on_space: bool,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let codec = CodecOptions::default()
            .with_split_on_space(self.split_on_space)
            .build();

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let count = run_encode(&mut reader, &mut writer, &codec)?;
        log::info!("encoded {count} lines");

        Ok(())
    }
}

/// Encode each input line in the codec's default mode; returns the line count.
fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    codec: &VocabularyCodec,
) -> SCResult<usize> {
    let mut count = 0;
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let tokens = codec.tokenize_default(trim_line_ending(&line));

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
        writer.flush()?;

        count += 1;
        line.clear();
    }
    Ok(count)
}
