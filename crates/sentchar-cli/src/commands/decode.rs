use std::io::{
    BufRead,
    Write,
};

use sentchar::{
    CodecOptions,
    SCResult,
    SentcharError,
    TokenId,
    VocabularyCodec,
};

use crate::input_output::{
    InputArgs,
    OutputArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let codec = CodecOptions::default().build();

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let count = run_decode(&mut reader, &mut writer, &codec)?;
        log::info!("decoded {count} lines");

        Ok(())
    }
}

/// Parse one line of whitespace-separated token ids.
fn parse_tokens(line: &str) -> SCResult<Vec<TokenId>> {
    line.split_whitespace()
        .map(|s| {
            s.parse::<TokenId>()
                .map_err(|e| SentcharError::Parse(format!("bad token id {s:?}: {e}")))
        })
        .collect()
}

/// Decode each input line; returns the line count.
fn run_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    codec: &VocabularyCodec,
) -> SCResult<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let tokens = parse_tokens(&line?)?;
        let text = codec.detokenize(&tokens)?;

        writeln!(writer, "{text}")?;
        writer.flush()?;

        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn decode(input: &[u8]) -> SCResult<String> {
        let codec = VocabularyCodec::default();
        let mut reader = Cursor::new(input.to_vec());
        let mut out = Vec::new();
        run_decode(&mut reader, &mut out, &codec)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(parse_tokens(" 2  43\t1 ").unwrap(), vec![2, 43, 1]);
        assert_eq!(parse_tokens("").unwrap(), Vec::<TokenId>::new());
        assert!(matches!(
            parse_tokens("2 x"),
            Err(SentcharError::Parse(_))
        ));
    }

    #[test]
    fn test_decode_lines() {
        assert_eq!(
            decode(b"2 43 76 17 1\n2 82 78 98 66 1\n").unwrap(),
            "Hi.\nok _\n"
        );
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode(b"2 99\n"),
            Err(SentcharError::InvalidTokenId {
                token: 99,
                position: 1
            })
        ));
        assert!(matches!(
            decode(b"2 -1\n"),
            Err(SentcharError::InvalidTokenId { token: -1, .. })
        ));
        assert!(matches!(decode(b"2 abc\n"), Err(SentcharError::Parse(_))));
        assert!(matches!(decode(b"2 \xff\n"), Err(SentcharError::Io(_))));
    }
}
