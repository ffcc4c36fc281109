use std::io::Write;

use sentchar::CharVocab;

use crate::input_output::OutputArgs;

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.output.open_writer()?;
        write_vocab(&mut writer, &CharVocab::shared())?;
        writer.flush()?;
        Ok(())
    }
}

/// Write one `id<TAB>symbol` row per entry, in id order.
fn write_vocab(
    writer: &mut dyn Write,
    vocab: &CharVocab,
) -> std::io::Result<()> {
    for (token, symbol) in vocab.iter() {
        writeln!(writer, "{token}\t{symbol}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_vocab() {
        let mut out = Vec::new();
        write_vocab(&mut out, &CharVocab::shared()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 99);
        assert_eq!(rows[0], "0\tPAD");
        assert_eq!(rows[2], "2\tBOS");
        assert_eq!(rows[36], "36\tA");
        assert_eq!(rows[98], "98\t_");
    }
}
