//! Prompt synthesis: needles plus filler, assembled under a token budget.

use rand::Rng;

use crate::config::HaystackConfig;
use crate::error::EvalError;
use crate::provider::{Presentation, Provider};

/// A planted fact the provider is expected to retrieve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedleFact {
    pub name: String,
    pub fruit: String,
}

/// One trial's haystack text and its ground truth. Never reused.
#[derive(Debug, Clone)]
pub struct HaystackPrompt {
    pub text: String,
    pub needles: Vec<NeedleFact>,
}

/// Filler stops once the running count reaches `budget - BUDGET_SLACK`; the
/// final sentence may overshoot by its own token length.
const BUDGET_SLACK: u32 = 10;

/// Assembles a haystack for one trial.
///
/// Exactly `config.needle_count` needle entries (unique person name, fruit,
/// country) are planted, then filler entries (animal instead of fruit) are
/// added until the provider-counted token total reaches the budget. All
/// entries are shuffled uniformly before joining.
pub async fn synthesize(
    provider: &dyn Provider,
    config: &HaystackConfig,
    token_budget: u32,
) -> Result<HaystackPrompt, EvalError> {
    let presentation = provider.presentation();
    let mut entries: Vec<String> = Vec::new();
    let mut needles: Vec<NeedleFact> = Vec::new();
    let mut token_count = 0u32;

    while needles.len() < config.needle_count {
        let (name, fruit, country) = {
            let mut rng = rand::rng();
            (
                pick(config.names, &mut rng),
                pick(config.fruits, &mut rng),
                pick(config.countries, &mut rng),
            )
        };
        // Redraw on collision: needle names are unique within a trial.
        if needles.iter().any(|n| n.name == name) {
            continue;
        }
        let entry = render_entry(presentation, name, country, fruit);
        token_count += provider.count_tokens(&entry).await?;
        entries.push(entry);
        needles.push(NeedleFact {
            name: name.to_string(),
            fruit: fruit.to_string(),
        });
    }

    while token_count < token_budget.saturating_sub(BUDGET_SLACK) {
        let (name, animal, country) = {
            let mut rng = rand::rng();
            (
                pick(config.names, &mut rng),
                pick(config.animals, &mut rng),
                pick(config.countries, &mut rng),
            )
        };
        // Filler must not reuse a needle name; filler-on-filler repeats are
        // harmless and allowed.
        if needles.iter().any(|n| n.name == name) {
            continue;
        }
        let entry = render_entry(presentation, name, country, animal);
        token_count += provider.count_tokens(&entry).await?;
        entries.push(entry);
    }

    {
        use rand::seq::SliceRandom;
        let mut rng = rand::rng();
        entries.shuffle(&mut rng);
    }

    let text = match presentation {
        Presentation::Record => entries.join(" "),
        Presentation::Identifier => format!("```\n{}\n```", entries.join("\n")),
    };

    Ok(HaystackPrompt { text, needles })
}

fn render_entry(presentation: Presentation, name: &str, country: &str, pet: &str) -> String {
    match presentation {
        Presentation::Record => {
            format!("My name is {name} and I am from {country} and I have a pet {pet}.")
        }
        Presentation::Identifier => format!("function {name}() {{ return '{pet}'; }}"),
    }
}

fn pick<'a>(vocab: &'a [&'a str], rng: &mut impl Rng) -> &'a str {
    vocab[rng.random_range(0..vocab.len())]
}
