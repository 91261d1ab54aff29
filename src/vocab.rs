//! Vocabulary data
//!
//! Word pairs are immutable once loaded. A built-in English→French list is
//! always available; a custom list can be loaded from a JSON file.

use crate::error::{DrillError, DrillResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One vocabulary entry. `target` is the word to be pronounced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub source: String,
    pub target: String,
    pub category: String,
}

impl WordPair {
    fn new(source: &str, target: &str, category: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            category: category.to_string(),
        }
    }
}

/// Built-in English→French practice list
pub fn builtin() -> Vec<WordPair> {
    vec![
        WordPair::new("hello", "bonjour", "greeting"),
        WordPair::new("goodbye", "au revoir", "greeting"),
        WordPair::new("thank you", "merci", "greeting"),
        WordPair::new("please", "s'il vous plaît", "greeting"),
        WordPair::new("cat", "chat", "animal"),
        WordPair::new("dog", "chien", "animal"),
        WordPair::new("bird", "oiseau", "animal"),
        WordPair::new("fish", "poisson", "animal"),
        WordPair::new("horse", "cheval", "animal"),
        WordPair::new("house", "maison", "place"),
        WordPair::new("school", "école", "place"),
        WordPair::new("water", "eau", "food"),
        WordPair::new("bread", "pain", "food"),
        WordPair::new("apple", "pomme", "food"),
        WordPair::new("milk", "lait", "food"),
        WordPair::new("cheese", "fromage", "food"),
        WordPair::new("red", "rouge", "color"),
        WordPair::new("blue", "bleu", "color"),
        WordPair::new("green", "vert", "color"),
        WordPair::new("book", "livre", "object"),
        WordPair::new("friend", "ami", "people"),
        WordPair::new("family", "famille", "people"),
        WordPair::new("sun", "soleil", "nature"),
        WordPair::new("moon", "lune", "nature"),
        WordPair::new("tree", "arbre", "nature"),
        WordPair::new("flower", "fleur", "nature"),
    ]
}

/// Load word pairs from a JSON file
pub fn load_from_file(path: &Path) -> DrillResult<Vec<WordPair>> {
    let content = std::fs::read_to_string(path)?;
    let pairs: Vec<WordPair> = serde_json::from_str(&content)?;
    if pairs.is_empty() {
        return Err(DrillError::Vocabulary(format!(
            "No word pairs found in {}",
            path.display()
        )));
    }
    Ok(pairs)
}
