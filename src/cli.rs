//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "mted", about = "cross-lingual discourse-relation analysis.")]
/// Holds every command that is callable by the `mted` command.
pub enum Mted {
    #[structopt(about = "Relation-preservation accuracy scores")]
    Accuracy(Accuracy),
    #[structopt(about = "Mine association rules between sense labels")]
    Rules(Rules),
    #[structopt(about = "Dump derived alignment blocks of one talk")]
    Alignments(Alignments),
    #[structopt(about = "Label-translation pattern counts")]
    Patterns(Patterns),
}

#[derive(Debug, StructOpt)]
/// Accuracy command and parameters.
pub struct Accuracy {
    #[structopt(parse(from_os_str), help = "dataset location")]
    pub dataset: PathBuf,
    #[structopt(help = "first language. Omit both languages for every pair.")]
    pub lang_a: Option<String>,
    #[structopt(help = "second language")]
    pub lang_b: Option<String>,
    #[structopt(long, help = "emit JSON instead of plain text")]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
pub struct Rules {
    #[structopt(parse(from_os_str), help = "dataset location")]
    pub dataset: PathBuf,
    #[structopt(help = "first language")]
    pub lang_a: String,
    #[structopt(help = "second language")]
    pub lang_b: String,
    #[structopt(long, help = "emit JSON instead of plain text")]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
pub struct Alignments {
    #[structopt(parse(from_os_str), help = "dataset location")]
    pub dataset: PathBuf,
    #[structopt(help = "talk id, e.g. talk_1927")]
    pub talk_id: String,
    #[structopt(help = "first language")]
    pub lang_a: String,
    #[structopt(help = "second language")]
    pub lang_b: String,
    #[structopt(long, help = "emit JSON instead of plain text")]
    pub json: bool,
}

#[derive(Debug, StructOpt)]
pub struct Patterns {
    #[structopt(parse(from_os_str), help = "dataset location")]
    pub dataset: PathBuf,
    #[structopt(help = "first language")]
    pub lang_a: String,
    #[structopt(help = "second language")]
    pub lang_b: String,
    #[structopt(long, help = "emit JSON instead of plain text")]
    pub json: bool,
}
