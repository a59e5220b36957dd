#![allow(missing_docs)]

mod fmt;

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use declension::{Count, Lexicon, try_adjective, try_noun};
use env_logger::Env;
use log::{debug, error, info, warn};

use crate::fmt::{DeclinedFormatter, FormatLexicon, OutputFormat};

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        },
    }
}

// Default to debug logs on debug builds, info otherwise
#[cfg(debug_assertions)]
type DeclensionVerbosity = Verbosity<clap_verbosity_flag::DebugLevel>;
#[cfg(not(debug_assertions))]
type DeclensionVerbosity = Verbosity<clap_verbosity_flag::InfoLevel>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print the count before the chosen form
    #[arg(short = 'c', long, global = true)]
    with_count: bool,

    #[command(flatten)]
    verbosity: DeclensionVerbosity,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pick the noun form agreeing with COUNT
    Noun {
        /// The numeral, e.g. 21 or -3
        #[arg(allow_hyphen_values = true)]
        count: String,
        /// Form used with 1, 21, 31... (e.g. "письмо")
        one: String,
        /// Form used with 2-4, 22-24... (e.g. "письма")
        few: String,
        /// Form used with 0, 5-20, 25-30... (e.g. "писем") [default: FEW]
        many: Option<String>,
    },
    /// Pick the adjective form agreeing with COUNT
    Adjective {
        /// The numeral, e.g. 21 or -3
        #[arg(allow_hyphen_values = true)]
        count: String,
        /// Form used with counts ending in 1 but not 11 (e.g. "свежее")
        one: String,
        /// Form used with every other count (e.g. "свежих")
        other: String,
    },
    /// Decline a word from a lexicon file
    Lookup {
        /// The lexicon TOML file
        #[arg(short, long)]
        lexicon: PathBuf,
        /// The word's key in the lexicon
        word: String,
        /// The numeral, e.g. 21 or -3
        #[arg(allow_hyphen_values = true)]
        count: String,
    },
    /// Show every word in a lexicon file
    List {
        /// The lexicon TOML file
        #[arg(short, long)]
        lexicon: PathBuf,
    },
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("DECLENSION_LOG"))
        .init();

    let format = OutputFormat::new(args.with_count);
    match &args.command {
        Command::Noun {
            count,
            one,
            few,
            many,
        } => {
            let form =
                try_noun(Some(count.as_str()), one, few, many.as_deref())?
                    .context("no count to agree with")?;
            println!("{}", DeclinedFormatter::new(count, form, format));
        },
        Command::Adjective { count, one, other } => {
            let form = try_adjective(Some(count.as_str()), one, other)?
                .context("no count to agree with")?;
            println!("{}", DeclinedFormatter::new(count, form, format));
        },
        Command::Lookup {
            lexicon,
            word,
            count,
        } => {
            let lexicon = load_lexicon(lexicon)?;
            let parsed = count.parse::<Count>()?;
            if lexicon.noun(word).is_some() && lexicon.adjective(word).is_some()
            {
                warn!(
                    "{word} is both a noun and an adjective in {}, using the \
                     noun",
                    lexicon.name(),
                );
            }
            let form = lexicon.decline(word, parsed).with_context(|| {
                format!("{word} isn't in lexicon {}", lexicon.name())
            })?;
            debug!("{word} agrees with {count} as {form}");
            println!("{}", DeclinedFormatter::new(count, form, format));
        },
        Command::List { lexicon } => {
            let lexicon = load_lexicon(lexicon)?;
            info!("{} has {} words", lexicon.name(), lexicon.len());
            println!("{}", lexicon.format());
        },
    }
    Ok(())
}

fn load_lexicon(path: &Path) -> anyhow::Result<Lexicon> {
    Lexicon::load(path).context("failed to load lexicon")
}
