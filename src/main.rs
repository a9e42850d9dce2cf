//! # mted
//!
//! Cross-lingual discourse-relation analysis over the multilingual TED
//! discourse corpus.
//!
//! ```sh
//! mted 0.1.0
//! cross-lingual discourse-relation analysis.
//!
//! USAGE:
//!     mted <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     accuracy      Relation-preservation accuracy scores
//!     alignments    Dump derived alignment blocks of one talk
//!     patterns      Label-translation pattern counts
//!     rules         Mine association rules between sense labels
//! ```
use itertools::Itertools;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use mted::error::Error;
use mted::io::CorpusLoader;
use mted::lang::LANGUAGES;
use mted::stats;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Mted::from_args();
    debug!("cli args\n{:#?}", opt);

    let mut loader = CorpusLoader::new();
    match opt {
        cli::Mted::Accuracy(a) => {
            let corpus = loader.load(&a.dataset)?;
            let pairs: Vec<(String, String)> = match (a.lang_a, a.lang_b) {
                (Some(xx), Some(yy)) => vec![(xx, yy)],
                (None, None) => LANGUAGES
                    .iter()
                    .tuple_combinations()
                    .map(|(xx, yy)| (xx.to_string(), yy.to_string()))
                    .collect(),
                _ => {
                    return Err(Error::Custom(
                        "provide both languages, or none for every pair".to_string(),
                    ))
                }
            };

            for (xx, yy) in pairs {
                let scores = match stats::pairwise_relation_preservation(&corpus, &xx, &yy) {
                    Ok(scores) => scores,
                    Err(Error::MissingLanguagePair(a, b)) => {
                        warn!("no alignments for {a}-{b}, skipping");
                        continue;
                    }
                    Err(e) => return Err(e),
                };
                if a.json {
                    println!(
                        "{}",
                        serde_json::json!({"lang_a": xx, "lang_b": yy, "scores": scores})
                    );
                } else {
                    println!("{xx}-{yy}:");
                    for (category, score) in &scores {
                        println!("  {category}: {score:.3}");
                    }
                }
            }
        }

        cli::Mted::Rules(r) => {
            let corpus = loader.load(&r.dataset)?;
            let rules = stats::mine_association_rules(&corpus, &r.lang_a, &r.lang_b)?;
            info!("{} rule(s) after filtering", rules.len());
            if r.json {
                println!("{}", serde_json::to_string_pretty(&rules)?);
            } else {
                for rule in rules {
                    println!("{rule}");
                }
            }
        }

        cli::Mted::Alignments(al) => {
            let corpus = loader.load(&al.dataset)?;
            let mtalk = corpus
                .get(&al.talk_id)
                .ok_or_else(|| Error::Custom(format!("unknown talk {}", al.talk_id)))?;
            let alignments = mtalk.alignments(&al.lang_a, &al.lang_b)?;
            if al.json {
                println!("{}", serde_json::to_string_pretty(&alignments)?);
            } else {
                for block in &alignments {
                    println!("{:?} <-> {:?}", block.side_a(), block.side_b());
                }
            }
        }

        cli::Mted::Patterns(p) => {
            let corpus = loader.load(&p.dataset)?;
            let table = stats::translation_patterns(&corpus, &p.lang_a, &p.lang_b)?;
            if p.json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print_patterns(&p.lang_a, &p.lang_b, table.forward());
                print_patterns(&p.lang_b, &p.lang_a, table.backward());
            }
        }
    };
    Ok(())
}

fn print_patterns(from: &str, to: &str, counts: &mted::stats::patterns::PatternCounts) {
    println!("{from} -> {to}:");
    for (category, by_label) in counts {
        println!("  {category}:");
        for (label, targets) in by_label {
            let targets = targets
                .iter()
                .map(|(target, count)| format!("{target} x{count}"))
                .join(", ");
            println!("    {label} -> {targets}");
        }
    }
}
