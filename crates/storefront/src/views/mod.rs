//! View models for the storefront templates.
//!
//! Pure data transformations from backend records into display-ready
//! structures. Anything user-supplied (names, descriptions) is escaped by
//! the template engine at render time; nothing here emits markup.
//!
//! Products get a deterministic visual identity in place of real imagery:
//! a two-color gradient picked by hashing the product id, and an emoji glyph
//! picked by keyword-matching the product name.

mod cart;
mod order;
mod product;

pub use cart::{CartLineView, CartPage, CartSummary};
pub use order::{OrderCard, OrderLineView};
pub use product::ProductCard;

use firdous_core::ProductId;

/// Fixed gradient palette. A product's id always hashes to the same pair, so
/// it renders identically across listings, cart lines, and sessions.
const GRADIENTS: [(&str, &str); 8] = [
    ("#667eea", "#764ba2"),
    ("#f093fb", "#f5576c"),
    ("#4facfe", "#00f2fe"),
    ("#43e97b", "#38f9d7"),
    ("#fa709a", "#fee140"),
    ("#a8edea", "#fed6e3"),
    ("#ff9a9e", "#fecfef"),
    ("#ffecd2", "#fcb69f"),
];

/// Keyword categories for the emoji glyph; first matching category wins.
const EMOJI_CATEGORIES: &[(&[&str], &str)] = &[
    (&["phone", "laptop", "computer"], "📱"),
    (&["shirt", "dress", "jacket"], "👕"),
    (&["shoe", "sneaker", "boot"], "👟"),
    (&["watch", "ring", "necklace"], "⌚"),
    (&["chair", "table", "lamp"], "🏠"),
    (&["makeup", "perfume", "cream"], "💄"),
    (&["ball", "gym", "fitness"], "⚽"),
];

/// Glyph used when no category keyword matches.
const FALLBACK_EMOJI: &str = "📦";

/// 32-bit string hash (`h = c + h * 31` over UTF-16 units, wrapping).
fn hash_code(s: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash
}

/// Gradient pair for a product id.
#[must_use]
pub fn gradient_for(id: &ProductId) -> (&'static str, &'static str) {
    let idx = hash_code(id.as_str()).unsigned_abs() as usize % GRADIENTS.len();
    GRADIENTS.get(idx).copied().unwrap_or(("#667eea", "#764ba2"))
}

/// Emoji glyph for a product name.
#[must_use]
pub fn emoji_for(name: &str) -> &'static str {
    let name = name.to_lowercase();
    for (keywords, emoji) in EMOJI_CATEGORIES {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return emoji;
        }
    }
    FALLBACK_EMOJI
}
