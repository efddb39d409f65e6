use std::io::Write;

use pairchipper::codec::TokenEncoder;

use crate::{
    LogArgs,
    commands::{CliToken, RulesArgs},
    input_output::{InputArgs, OutputArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    rules: RulesArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let codec = self.rules.load_codec()?;
        let text = self.input.read_text()?;

        let tokens = codec.encode(&text);
        log::info!("encoded {} bytes as {} tokens", text.len(), tokens.len());

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{}", format_tokens(&tokens))?;
        writer.flush()?;

        Ok(())
    }
}

/// Render tokens as whitespace separated ids.
fn format_tokens(tokens: &[CliToken]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
