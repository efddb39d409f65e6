use std::io::Write;

use pairchipper::{codec::TokenDecoder, errors::DecodeError};

use crate::{
    LogArgs,
    commands::{CliToken, RulesArgs},
    input_output::{InputArgs, OutputArgs},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    rules: RulesArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Write the raw decoded bytes, without UTF-8 validation.
    #[arg(long)]
    bytes: bool,
}

impl DecodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let codec = self.rules.load_codec()?;
        let tokens = parse_tokens(&self.input.read_text()?)?;

        let decoded = if self.bytes {
            codec.decode_to_bytes(&tokens)
        } else {
            codec.decode(&tokens).map(String::into_bytes)
        };

        let bytes = match decoded {
            Ok(bytes) => bytes,
            Err(err) => {
                report_decode_error(&err);
                return Err(err.into());
            }
        };

        let mut writer = self.output.open_writer()?;
        writer.write_all(&bytes)?;
        writer.flush()?;

        Ok(())
    }
}

/// Parse whitespace separated token ids.
fn parse_tokens(text: &str) -> Result<Vec<CliToken>, Box<dyn std::error::Error>> {
    text.split_whitespace()
        .map(|word| {
            word.parse::<CliToken>()
                .map_err(|err| -> Box<dyn std::error::Error> {
                    format!("invalid token id {word:?}: {err}").into()
                })
        })
        .collect()
}

fn report_decode_error(err: &DecodeError) {
    log::error!("decode failed: {err}");
    let partial = err.partial_bytes();
    log::error!(
        "partial decode ({} bytes): {:?}",
        partial.len(),
        String::from_utf8_lossy(partial)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(parse_tokens("").unwrap(), Vec::<CliToken>::new());
        assert_eq!(parse_tokens(" 256 97\n98\t1000 ").unwrap(), vec![256, 97, 98, 1000]);
        assert!(parse_tokens("256 abc").is_err());
        assert!(parse_tokens("-1").is_err());
    }
}
