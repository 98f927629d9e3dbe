//! # Rule Sequence IO
//!
//! Rules are stored one per line, tab separated:
//!
//! ```text
//! # template	from	to	context	score
//! preceding-tag	NN	VB	TO	212
//! preceding-tag	VBN	VBD	<START>	37
//! ```
//!
//! Blank lines and lines starting with ``#`` are ignored.
//! Labels are resolved strictly against a [`Tagset`].

use core::str::FromStr;
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{TCResult, TagchipperError},
    rules::{Rule, RuleSequence, RuleTemplate, ScoredRule},
    tags::Tagset,
};

const HEADER: &str = "# template\tfrom\tto\tcontext\tscore";

/// Write a [`RuleSequence`] to a [`Write`] writer.
pub fn write_rules<W: Write>(
    rules: &RuleSequence,
    tagset: &Tagset,
    writer: &mut W,
) -> TCResult<()> {
    writeln!(writer, "{HEADER}")?;
    for ScoredRule { rule, score } in rules {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            rule.template,
            tagset.label(rule.from),
            tagset.label(rule.to),
            tagset.label(rule.context),
            score
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Save a [`RuleSequence`] to a file.
///
/// # Arguments
/// * `rules` - the rules to save.
/// * `tagset` - the tagset the rules were learned over.
/// * `path` - the path to save the rules to.
pub fn save_rules_path<P: AsRef<Path>>(
    rules: &RuleSequence,
    tagset: &Tagset,
    path: P,
) -> TCResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_rules(rules, tagset, &mut writer)
}

/// Read a [`RuleSequence`] from a [`BufRead`] stream.
///
/// # Arguments
/// * `reader` - the line reader.
/// * `tagset` - the tagset to resolve labels against.
pub fn read_rules<R: BufRead>(
    reader: R,
    tagset: &Tagset,
) -> TCResult<RuleSequence> {
    let mut rules = RuleSequence::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let rule = parse_rule_line(line, tagset).map_err(|message| TagchipperError::Parse {
            line: idx + 1,
            message,
        })?;
        rules.push(rule);
    }
    Ok(rules)
}

/// Load a [`RuleSequence`] from a file.
///
/// # Arguments
/// * `path` - the path to the rule file.
/// * `tagset` - the tagset to resolve labels against.
pub fn load_rules_path<P: AsRef<Path>>(
    path: P,
    tagset: &Tagset,
) -> TCResult<RuleSequence> {
    let reader = BufReader::new(File::open(path)?);
    read_rules(reader, tagset)
}

fn parse_rule_line(
    line: &str,
    tagset: &Tagset,
) -> Result<ScoredRule, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    let [template, from, to, context, score] = fields.as_slice() else {
        return Err(format!("expected 5 tab separated fields, found {}", fields.len()));
    };

    let template = RuleTemplate::from_str(template)
        .map_err(|_| format!("unknown rule template {template:?}"))?;
    if template.is_nil() {
        return Err("nil rules are not stored".to_string());
    }

    let from = tagset.require(from).map_err(|e| e.to_string())?;
    let to = tagset.require(to).map_err(|e| e.to_string())?;
    let context = tagset.require_context(context).map_err(|e| e.to_string())?;
    let score = score
        .parse::<i64>()
        .map_err(|e| format!("bad score {score:?}: {e}"))?;

    if from == to {
        return Err(format!("rule rewrites {:?} to itself", tagset.label(from)));
    }

    Ok(ScoredRule::new(Rule::new(template, from, to, context), score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagId;

    fn fixture() -> (RuleSequence, Tagset) {
        let tagset = Tagset::from_labels(["NN", "VB", "TO"]).unwrap();
        let nn = tagset.require("NN").unwrap();
        let vb = tagset.require("VB").unwrap();
        let to = tagset.require("TO").unwrap();

        let rules = [
            ScoredRule::new(Rule::preceding_tag(nn, vb, to), 212),
            ScoredRule::new(Rule::preceding_tag(vb, nn, TagId::SENTINEL), 37),
        ]
        .into_iter()
        .collect();
        (rules, tagset)
    }

    #[test]
    fn test_write_rules() {
        let (rules, tagset) = fixture();
        let mut buf = Vec::new();
        write_rules(&rules, &tagset, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "# template\tfrom\tto\tcontext\tscore\n\
             preceding-tag\tNN\tVB\tTO\t212\n\
             preceding-tag\tVB\tNN\t<START>\t37\n"
        );
    }

    #[test]
    fn test_read_rules_errors() {
        let tagset = Tagset::from_labels(["NN", "VB"]).unwrap();

        let bad = [
            "preceding-tag\tNN\tVB\tNN",
            "two-back\tNN\tVB\tNN\t1",
            "nil\tNN\tVB\tNN\t1",
            "preceding-tag\tNN\tJJ\tNN\t1",
            "preceding-tag\tNN\tVB\tNN\tlots",
            "preceding-tag\tNN\tNN\tVB\t5",
        ];
        for line in bad {
            let text = format!("# header\n\n{line}\n");
            let err = read_rules(text.as_bytes(), &tagset).unwrap_err();
            assert!(
                matches!(err, TagchipperError::Parse { line: 3, .. }),
                "{line:?}: {err}"
            );
        }
    }

    #[test]
    fn test_read_rules_rejects_self_rewrites() {
        let tagset = Tagset::from_labels(["NN", "VB"]).unwrap();
        let text = "preceding-tag\tVB\tNN\t<START>\t4\npreceding-tag\tNN\tNN\tVB\t5\n";

        match read_rules(text.as_bytes(), &tagset) {
            Err(TagchipperError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert_eq!(message, "rule rewrites \"NN\" to itself");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_load_rules() {
        let (rules, tagset) = fixture();

        tempdir::TempDir::new("rules_test")
            .and_then(|dir| {
                let path = dir.path().join("rules.tsv");

                save_rules_path(&rules, &tagset, &path).expect("Failed to save rules");

                let loaded = load_rules_path(&path, &tagset).expect("Failed to load rules");

                assert_eq!(&loaded, &rules);

                Ok(())
            })
            .unwrap();
    }
}
