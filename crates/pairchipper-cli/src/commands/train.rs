use std::{
    io::Write,
    ops::ControlFlow,
    time::{Duration, Instant},
};

use indicatif::{ProgressBar, ProgressStyle};
use pairchipper::{
    byte_stream::{text_tokens, truncate_chars},
    codec::{RuleCodec, TokenDecoder},
    pairs::count_pairs,
    rules::{RuleSet, io::write_rules_json},
    training::{BatchMode, TrainingObserver, TrainingOptions},
    types::DEFAULT_START_TOKEN,
};

use crate::{
    LogArgs,
    commands::CliToken,
    input_output::{OutputArgs, read_text},
};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text file; "-" or nothing reads stdin.
    file: Option<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Only train on the first N characters of the input.
    #[arg(long)]
    max_chars: Option<usize>,

    /// The round budget.
    #[arg(long, default_value = "500")]
    num_rounds: usize,

    /// The first composite token id.
    #[arg(long, default_value_t = DEFAULT_START_TOKEN)]
    start_token: u64,

    /// Rules learned per round.
    #[arg(long, default_value = "1")]
    pairs_per_round: usize,

    /// The minimum count for a pair to be merged.
    #[arg(long, default_value = "2")]
    min_pair_count: usize,

    /// Recount pairs before each merge of a round.
    #[arg(long)]
    recount: bool,

    /// How many of the most frequent remaining pairs to report.
    #[arg(long, default_value = "10")]
    top_pairs: usize,

    /// Show a progress bar.
    #[arg(long)]
    progress: bool,

    /// Stop training after this many seconds, keeping the rules learned so far.
    #[arg(long)]
    max_seconds: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let learner = TrainingOptions::new(self.num_rounds)
            .with_start_token(self.start_token)
            .with_pairs_per_round(self.pairs_per_round)
            .with_min_pair_count(self.min_pair_count)
            .with_batch_mode(if self.recount {
                BatchMode::Recount
            } else {
                BatchMode::Snapshot
            })
            .init::<CliToken>()?;

        let text = read_text(&self.file)?;
        let text = match self.max_chars {
            Some(max_chars) => truncate_chars(&text, max_chars),
            None => text.as_str(),
        };
        log::info!("Training on {} chars ({} bytes)", text.chars().count(), text.len());

        let bar = if self.progress {
            let bar = ProgressBar::new(self.num_rounds as u64);
            bar.set_style(ProgressStyle::with_template(
                "{elapsed_precise} [{bar:40}] {pos}/{len} rounds {msg}",
            )?);
            bar
        } else {
            ProgressBar::hidden()
        };

        let time_limit = self
            .max_seconds
            .map(Duration::try_from_secs_f64)
            .transpose()?;
        let mut observer = TrainProgress::new(bar, time_limit);

        let results = learner.train_with_observer(text_tokens(text), &mut observer);
        observer.bar.finish_and_clear();

        let summary = results.summary();
        log::info!("Stop reason: {}", results.stop_reason);
        log::info!("Rounds: {}", results.rounds);
        log::info!("Original length: {}", summary.original_len);
        log::info!("Final length: {}", summary.final_len);
        log::info!("Compression: {:.1}%", summary.compression_percent());
        log::info!("New tokens: {}", summary.new_tokens);

        let codec = RuleCodec::new(results.rules);

        let top = count_pairs(&results.tokens).most_frequent(self.top_pairs);
        if !top.is_empty() {
            log::info!("Top remaining pairs:");
        }
        for (rank, ((a, b), count)) in top.into_iter().enumerate() {
            log::info!(
                "{:>3}: ({a}, {b}) {} + {} x{count}",
                rank + 1,
                describe_token(&codec, a),
                describe_token(&codec, b),
            );
        }

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let rules: &RuleSet<CliToken> = codec.rules();
        let mut writer = self.output.open_writer()?;
        write_rules_json(rules, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Drives the progress bar, and enforces the time limit.
struct TrainProgress {
    bar: ProgressBar,
    deadline: Option<Instant>,
}

impl TrainProgress {
    fn new(
        bar: ProgressBar,
        time_limit: Option<Duration>,
    ) -> Self {
        Self {
            bar,
            deadline: time_limit.map(|limit| Instant::now() + limit),
        }
    }
}

impl TrainingObserver<CliToken> for TrainProgress {
    fn before_round(
        &mut self,
        round: usize,
        tokens: &[CliToken],
    ) -> ControlFlow<()> {
        self.bar.set_position(round as u64);
        self.bar.set_message(format!("{} tokens", tokens.len()));

        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            log::warn!("Time limit reached before round {round}");
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

/// Render a token as the text it expands to.
fn describe_token(
    codec: &RuleCodec<CliToken>,
    token: CliToken,
) -> String {
    match codec.decode_to_bytes(&[token]) {
        Ok(bytes) => format!("{:?}", String::from_utf8_lossy(&bytes)),
        Err(_) => format!("<{token}>"),
    }
}
