use std::io::{
    BufRead,
    Write,
};

use sentchar::{
    CodecOptions,
    PaddedBatch,
    SCResult,
    SpecialToken,
    TokenId,
    VocabularyCodec,
};

use crate::input_output::{
    InputArgs,
    OutputArgs,
};

/// Args for the batch command.
#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Treat each line as one sequence; EOS only at the end.
    #[clap(long)]
    split_on_space: bool,

    /// Token id used for padding; the mask is always computed against PAD.
    #[clap(long, default_value_t = SpecialToken::Pad.token())]
    pad_id: TokenId,

    /// Tokenize with the rayon thread pool.
    #[clap(long)]
    parallel: bool,
}

/// JSON shape of a padded batch.
#[derive(serde::Serialize, Debug)]
struct BatchRecord<'a> {
    shape: [usize; 2],
    tokens: &'a [Vec<TokenId>],
    mask: &'a [Vec<bool>],
}

impl<'a> From<&'a PaddedBatch> for BatchRecord<'a> {
    fn from(batch: &'a PaddedBatch) -> Self {
        let (batch_size, seq_len) = batch.shape();
        Self {
            shape: [batch_size, seq_len],
            tokens: batch.tokens(),
            mask: batch.mask(),
        }
    }
}

impl BatchArgs {
    /// Run the batch command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let codec = CodecOptions::default()
            .with_split_on_space(self.split_on_space)
            .with_parallel(self.parallel)
            .build();

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let batch = build_batch(reader, &codec, self.pad_id)?;
        log::info!("batch shape: {:?}", batch.shape());

        serde_json::to_writer(&mut writer, &BatchRecord::from(&batch))?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Read every line and pad the tokenized lines into one batch.
fn build_batch(
    reader: Box<dyn BufRead>,
    codec: &VocabularyCodec,
    pad_id: TokenId,
) -> SCResult<PaddedBatch> {
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    let tokenized = codec.tokenize_batch_default(&lines);
    Ok(PaddedBatch::from_sequences(&tokenized, pad_id))
}
