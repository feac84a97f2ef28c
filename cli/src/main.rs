// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{fs, path::PathBuf};

use anyhow::{Context, bail};
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::info;
use suftree::SuffixTree;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the 1-indexed starting offsets of all suffixes in sorted order
    Order {
        #[command(flatten)]
        input: Input,
        /// Separator printed between offsets
        #[arg(long, default_value = " ")]
        separator: String,
    },
    /// Print whether a pattern occurs in the text
    Contains {
        #[command(flatten)]
        input: Input,
        pattern: String,
    },
}

#[derive(ClapArgs)]
struct Input {
    /// The text to index
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,
    /// Read the text to index from a file
    #[arg(long)]
    file: Option<PathBuf>,
}

impl Input {
    fn read(self) -> anyhow::Result<String> {
        match (self.text, self.file) {
            (Some(text), _) => Ok(text),
            (None, Some(file)) => {
                let contents = fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read input file '{}'", file.display()))?;
                // Editors usually end files with a newline, which is not part of the text
                let text = contents.strip_suffix('\n').unwrap_or(&contents);
                let text = text.strip_suffix('\r').unwrap_or(text);

                Ok(text.to_owned())
            }
            (None, None) => bail!("Either --text or --file must be given"),
        }
    }
}

fn build(input: Input) -> anyhow::Result<SuffixTree> {
    let text = input.read()?;
    info!("building suffix tree for {} characters", text.len());

    SuffixTree::new(&text).context("Input contains a character that cannot be indexed")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Order { input, separator } => {
            let tree = build(input)?;
            let order = tree
                .suffix_order()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(&separator);

            println!("{order}");
        }
        Command::Contains { input, pattern } => {
            let tree = build(input)?;

            println!("{}", tree.contains(&pattern));
        }
    }

    Ok(())
}
