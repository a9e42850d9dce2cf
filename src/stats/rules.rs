//! Association-rule mining over first-level senses.
//!
//! Each aligned block with at least one non-sentinel first-level sense on
//! both sides contributes one transaction of `{language}-{sense}` tokens.
//! Frequent itemsets are mined apriori-style with the reference minimum
//! support of 0.1 and no confidence cut, then rules with lift at most 1.0
//! and trivial cross-language identity rules are discarded.
use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;
use serde::Serialize;

use crate::error::Error;
use crate::io::Corpus;
use crate::model::NA;
use crate::relations::LabelCategory;

/// Minimum fraction of transactions an itemset must appear in.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.1;

/// One mined rule. Antecedent and consequent are sorted token lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl Rule {
    /// A rule is trivial when both sides have the same shape and, language
    /// prefixes stripped, name the identical sense set.
    fn is_identity(&self) -> bool {
        if self.antecedent.len() != self.consequent.len() {
            return false;
        }
        let senses = |tokens: &[String]| -> BTreeSet<String> {
            tokens
                .iter()
                .map(|t| t.splitn(2, '-').nth(1).unwrap_or(t).to_string())
                .collect()
        };
        senses(&self.antecedent) == senses(&self.consequent)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rule: [{}] -> [{}], Confidence: {:.3}, Lift: {:.3}",
            self.antecedent.iter().join(", "),
            self.consequent.iter().join(", "),
            self.confidence,
            self.lift
        )
    }
}

type Transaction = BTreeSet<String>;

/// One transaction per aligned block that carries a usable first-level
/// sense on both sides, across every talk containing both languages.
fn gather_transactions(
    corpus: &Corpus,
    lang_a: &str,
    lang_b: &str,
) -> Result<Vec<Transaction>, Error> {
    let mut transactions = Vec::new();
    for mtalk in corpus.values() {
        if !mtalk.has_language(lang_a) || !mtalk.has_language(lang_b) {
            continue;
        }
        for (xx, yy) in mtalk.aligned_relation_labels(lang_a, lang_b)? {
            let tokens = |labels: &[String], language: &str| -> Vec<String> {
                labels
                    .iter()
                    .filter(|l| l.as_str() != NA)
                    .map(|l| format!("{language}-{l}"))
                    .collect()
            };
            let xx_first = tokens(xx.category(LabelCategory::First), lang_a);
            let yy_first = tokens(yy.category(LabelCategory::First), lang_b);
            if !xx_first.is_empty() && !yy_first.is_empty() {
                transactions.push(xx_first.into_iter().chain(yy_first).collect());
            }
        }
    }
    Ok(transactions)
}

/// Frequent itemsets by increasing size, with their supports.
fn frequent_itemsets(
    transactions: &[Transaction],
    min_support: f64,
) -> HashMap<BTreeSet<String>, f64> {
    let mut supports = HashMap::new();
    if transactions.is_empty() {
        return supports;
    }
    let n = transactions.len() as f64;

    let support_of = |candidate: &BTreeSet<String>| -> f64 {
        transactions
            .iter()
            .filter(|t| candidate.is_subset(t))
            .count() as f64
            / n
    };

    let mut frontier: Vec<BTreeSet<String>> = transactions
        .iter()
        .flatten()
        .unique()
        .map(|item| BTreeSet::from([item.clone()]))
        .collect();
    let mut size = 1;

    while !frontier.is_empty() {
        let mut frequent = Vec::new();
        for candidate in frontier {
            let support = support_of(&candidate);
            if support >= min_support {
                frequent.push(candidate);
            }
        }
        for itemset in &frequent {
            supports.insert(itemset.clone(), support_of(itemset));
        }

        size += 1;
        let items: Vec<&String> = frequent.iter().flatten().unique().sorted().collect();
        frontier = items
            .into_iter()
            .combinations(size)
            .map(|combo| combo.into_iter().cloned().collect::<BTreeSet<String>>())
            // every (size-1)-subset of a frequent candidate must be frequent
            .filter(|candidate: &BTreeSet<String>| {
                candidate
                    .iter()
                    .combinations(size - 1)
                    .all(|sub| supports.contains_key(&sub.into_iter().cloned().collect()))
            })
            .collect();
    }
    supports
}

/// One rule per item of each frequent itemset: the item alone as
/// consequent, the rest as antecedent.
fn generate_rules(supports: &HashMap<BTreeSet<String>, f64>) -> Vec<Rule> {
    let mut rules = Vec::new();
    for (itemset, &support) in supports {
        if itemset.len() < 2 {
            continue;
        }
        for item in itemset {
            let consequent = BTreeSet::from([item.clone()]);
            let antecedent: BTreeSet<String> =
                itemset.difference(&consequent).cloned().collect();

            // downward closure guarantees both subsets are present
            let base_support = match supports.get(&antecedent) {
                Some(s) => *s,
                None => continue,
            };
            let add_support = match supports.get(&consequent) {
                Some(s) => *s,
                None => continue,
            };
            let confidence = support / base_support;
            let lift = confidence / add_support;
            rules.push(Rule {
                antecedent: antecedent.into_iter().collect(),
                consequent: consequent.into_iter().collect(),
                support,
                confidence,
                lift,
            });
        }
    }
    rules
}

/// Mines, filters and sorts the association rules for a language pair.
pub fn mine_association_rules(
    corpus: &Corpus,
    lang_a: &str,
    lang_b: &str,
) -> Result<Vec<Rule>, Error> {
    let transactions = gather_transactions(corpus, lang_a, lang_b)?;
    let supports = frequent_itemsets(&transactions, DEFAULT_MIN_SUPPORT);

    let mut rules: Vec<Rule> = generate_rules(&supports)
        .into_iter()
        .filter(|r| r.lift > 1.0)
        .filter(|r| !r.is_identity())
        .collect();
    rules.sort_by(|a, b| {
        b.lift
            .total_cmp(&a.lift)
            .then(b.confidence.total_cmp(&a.confidence))
            .then_with(|| a.antecedent.cmp(&b.antecedent))
            .then_with(|| a.consequent.cmp(&b.consequent))
    });
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_transactions(raw: &[&[&str]]) -> Vec<Transaction> {
        raw.iter()
            .map(|t| t.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn mine(transactions: &[Transaction]) -> Vec<Rule> {
        let supports = frequent_itemsets(transactions, DEFAULT_MIN_SUPPORT);
        let mut rules: Vec<Rule> = generate_rules(&supports)
            .into_iter()
            .filter(|r| r.lift > 1.0)
            .filter(|r| !r.is_identity())
            .collect();
        rules.sort_by(|a, b| b.lift.total_cmp(&a.lift));
        rules
    }

    #[test]
    fn test_supports() {
        let transactions = gen_transactions(&[
            &["German-contrast", "Russian-cause"],
            &["German-contrast", "Russian-cause"],
            &["German-contrast", "Russian-expansion"],
            &["German-expansion"],
        ]);
        let supports = frequent_itemsets(&transactions, 0.5);
        assert_eq!(
            supports[&BTreeSet::from(["German-contrast".to_string()])],
            0.75
        );
        assert_eq!(
            supports[&BTreeSet::from([
                "German-contrast".to_string(),
                "Russian-cause".to_string()
            ])],
            0.5
        );
        // below min support
        assert!(!supports.contains_key(&BTreeSet::from(["German-expansion".to_string()])));
    }

    #[test]
    fn test_confidence_and_lift() {
        let transactions = gen_transactions(&[
            &["German-contrast", "Russian-cause"],
            &["German-contrast", "Russian-cause"],
            &["German-contrast", "Russian-expansion"],
            &["German-temporal", "Russian-cause"],
        ]);
        let rules = mine(&transactions);
        // Russian-cause -> German-contrast: confidence 2/3, lift (2/3)/(3/4)
        // is below 1, filtered; German-temporal -> Russian-cause has
        // confidence 1.0 and lift 1/0.75 > 1
        let r = rules
            .iter()
            .find(|r| r.antecedent == vec!["German-temporal".to_string()])
            .unwrap();
        assert_eq!(r.consequent, vec!["Russian-cause".to_string()]);
        assert!((r.confidence - 1.0).abs() < 1e-9);
        assert!((r.lift - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_lift_at_most_one_filtered() {
        // independent items: every lift is exactly 1.0
        let transactions = gen_transactions(&[
            &["German-contrast", "Russian-cause"],
            &["German-contrast", "Russian-cause"],
        ]);
        let rules = mine(&transactions);
        assert!(rules.is_empty());
    }

    #[test]
    fn test_identity_rule_filtered() {
        let rule = Rule {
            antecedent: vec!["Russian-contrast".to_string()],
            consequent: vec!["German-contrast".to_string()],
            support: 0.5,
            confidence: 0.9,
            lift: 1.8,
        };
        assert!(rule.is_identity());

        let rule = Rule {
            antecedent: vec!["Russian-contrast".to_string()],
            consequent: vec!["German-cause".to_string()],
            ..rule
        };
        assert!(!rule.is_identity());
    }

    #[test]
    fn test_consequents_are_single_items() {
        let transactions = gen_transactions(&[
            &["German-Temporal", "German-Contingency", "Russian-Cause"],
            &["German-Expansion", "Russian-Comparison"],
        ]);
        let rules = mine(&transactions);
        assert!(!rules.is_empty());
        for rule in &rules {
            assert_eq!(rule.consequent.len(), 1, "{rule}");
        }

        // the three-item itemset contributes one rule per consequent item
        let r = rules
            .iter()
            .find(|r| {
                r.antecedent
                    == vec![
                        "German-Contingency".to_string(),
                        "German-Temporal".to_string(),
                    ]
            })
            .unwrap();
        assert_eq!(r.consequent, vec!["Russian-Cause".to_string()]);
        assert!((r.lift - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_sorted_by_lift_then_confidence() {
        let transactions = gen_transactions(&[
            &["German-a", "Russian-b"],
            &["German-a", "Russian-b"],
            &["German-c", "Russian-d"],
            &["German-e"],
        ]);
        let rules = mine(&transactions);
        for pair in rules.windows(2) {
            assert!(pair[0].lift >= pair[1].lift);
        }
    }
}
