//! Command line options

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::types::{GenerationRequest, OutputMode, DEFAULT_COUNT, MAX_COUNT};

/// Password suggestions built from random three letter English words
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "passgen", disable_version_flag = true)]
pub struct Cli {
    /// Number of three letter words in each password (0 means the default)
    #[arg(short = 'w', long = "words", env = "PASSGEN_WORDS", default_value_t = DEFAULT_COUNT)]
    pub words: usize,

    /// Number of password suggestions offered (0 means the default)
    #[arg(short = 's', long = "suggestions", env = "PASSGEN_SUGGESTIONS", default_value_t = DEFAULT_COUNT)]
    pub suggestions: usize,

    /// Mixed case password. Only used with --quiet
    #[arg(short = 'c', long = "mixed-case")]
    pub mixed_case: bool,

    /// Remove the spaces between words. Only used with --quiet
    #[arg(short = 'r', long = "remove-spaces")]
    pub remove_spaces: bool,

    /// Print just ONE password and nothing else
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Print suggestions as JSON
    #[arg(long)]
    pub json: bool,

    /// Load the word pool from a file (one three letter word per line)
    #[arg(long, env = "PASSGEN_WORDLIST", value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Seed the random source for repeatable output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Display the application version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Explain how the passwords are built and why they are hard to guess
    #[arg(long)]
    pub about: bool,
}

impl Cli {
    pub fn output_mode(&self) -> Result<OutputMode> {
        match (self.quiet, self.json) {
            (true, true) => Err(crate::config_error!(
                "--quiet and --json cannot be used together"
            )),
            (true, false) => Ok(OutputMode::Quiet),
            (false, true) => Ok(OutputMode::Json),
            (false, false) => Ok(OutputMode::Table),
        }
    }

    /// Resolve the flags into a request, resetting zero counts to the default
    pub fn request(&self) -> Result<GenerationRequest> {
        let mode = self.output_mode()?;
        for (flag, value) in [("--words", self.words), ("--suggestions", self.suggestions)] {
            if value > MAX_COUNT {
                return Err(crate::config_error!(
                    "{} {} is above the limit of {}",
                    flag,
                    value,
                    MAX_COUNT
                ));
            }
        }
        let request = GenerationRequest {
            word_count: self.words,
            suggestion_count: if mode == OutputMode::Quiet {
                1
            } else {
                self.suggestions
            },
            separator_removed: self.remove_spaces,
            case_mixed: self.mixed_case,
            mode,
        };
        Ok(request.normalized())
    }
}
