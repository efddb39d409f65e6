mod decode;
mod encode;
mod train;

use pairchipper::{codec::RuleCodec, rules::io::load_rules_json_path};

/// The token type used by the CLI.
pub type CliToken = u32;

/// Subcommands for pchipper
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Learn merge rules from a text.
    Train(train::TrainArgs),

    /// Encode text into token ids.
    Encode(encode::EncodeArgs),

    /// Decode token ids into text.
    Decode(decode::DecodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}

/// Rule set argument group.
#[derive(clap::Args, Debug)]
pub struct RulesArgs {
    /// The JSON rule set, as written by `train`.
    #[arg(long)]
    pub rules: String,
}

impl RulesArgs {
    /// Load the rule set into a codec.
    pub fn load_codec(&self) -> Result<RuleCodec<CliToken>, Box<dyn std::error::Error>> {
        let rules = load_rules_json_path::<CliToken, _>(&self.rules)?;
        log::info!("loaded {} rules from {}", rules.len(), self.rules);
        Ok(RuleCodec::new(rules))
    }
}
