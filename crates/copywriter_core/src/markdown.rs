//! Reply text normalization and letter-style markdown formatting.
//!
//! Replies from the webhook are plain Slovak business letters. The rules below
//! promote their conventional parts (greeting, sign-off, signature, callouts,
//! lists) to markdown so the renderer can style them.

use std::sync::LazyLock;

use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("formatter patterns are valid"),
            replacement,
        }
    }
}

// Order matters: each rule runs over the output of the previous one.
// Line anchors accept both `\n` and `\r\n` endings.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Greetings become level-3 headings.
        Rule::new(r"(?mR)^(Vážený.*?[,:]?)$", "### ${1}"),
        Rule::new(r"(?mR)^(Dobrý deň.*?[,:]?)$", "### ${1}"),
        Rule::new(r"(?mR)^(Milý.*?[,:]?)$", "### ${1}"),
        // Sign-offs get a divider and italics.
        Rule::new(r"(?mR)^(S úctou.*?)$", "\n---\n\n*${1}*"),
        Rule::new(r"(?mR)^(S pozdravom.*?)$", "\n---\n\n*${1}*"),
        Rule::new(r"(?mR)^(Srdečne.*?)$", "\n---\n\n*${1}*"),
        Rule::new(r"(?mR)^(S vďakou.*?)$", "\n---\n\n*${1}*"),
        // Team signatures are bold.
        Rule::new(r"(?mR)^(Váš tím.*?)$", "**${1}**"),
        Rule::new(r"(?mR)^(Tím .*?)$", "**${1}**"),
        // Callout labels move to their own bold line.
        Rule::new(
            r"\b(DÔLEŽITÉ|UPOZORNENIE|POZNÁMKA|TIP|NOVINKA|AKCIA)\b:",
            "\n**🔔 ${1}:**",
        ),
        Rule::new(r"(?mR)^(Ďakujeme.*?)$", "*${1}*"),
        Rule::new(r"(?mR)^[•·]\s", "- "),
        Rule::new(r"(?mR)^([0-9]+)\.\s", "${1}. "),
        // Paragraph breaks pass through untouched.
        Rule::new(r"\n\n", "\n\n"),
    ]
});

/// Replaces literal `\n` escape sequences (backslash followed by `n`) with
/// real line breaks.
pub fn normalize_escaped_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Converts raw reply text to markdown.
///
/// Rules are applied sequentially over the whole string rather than per line,
/// so text inserted by one rule is visible to the rules after it. Applying the
/// function twice is therefore not a no-op.
pub fn to_markdown(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut markdown = normalize_escaped_newlines(raw);
    for rule in RULES.iter() {
        markdown = rule
            .pattern
            .replace_all(&markdown, rule.replacement)
            .into_owned();
    }
    markdown
}
