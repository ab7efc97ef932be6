//! WhatsApp order deep links.
//!
//! Every product card carries its identity in `data-product-*` attributes.
//! Clicking the card's order button opens
//! `https://wa.me/<phone>?text=<message>` in a new browsing context, where the
//! message is a fixed template with the product id, name and price embedded
//! verbatim and the whole text percent-encoded.
//!
//! ## Message
//!
//! ```text
//! Hello! I'm interested in ordering:
//!
//! 🆔 *Product ID: CLY-001*
//! 📦 Product: Elephant Statue
//! 💰 Price: ₹499
//!
//! I saw this product on your website. ...
//!
//! _Note: Please reference Product ID CLY-001 for this order_
//! ```
//!
//! The `*...*` and `_..._` markers are WhatsApp bold/italic formatting.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Number orders go to when the config does not override it.
pub const DEFAULT_PHONE: &str = "919996124025";

const WA_BASE: &str = "https://wa.me/";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("product card is missing data-product-{0}")]
    MissingAttribute(&'static str),
}

/// A product as described by its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Upper-cased product id, e.g. `CLY-001`.
    pub id: String,
    pub name: String,
    /// Display price including currency, e.g. `₹499`.
    pub price: String,
    /// Image reference. Carried along but not part of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    pub fn new(
        id: impl AsRef<str>,
        name: impl Into<String>,
        price: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id: id.as_ref().to_uppercase(),
            name: name.into(),
            price: price.into(),
            image,
        }
    }

    /// Read a product from a card's dataset.
    ///
    /// Keys are the dataset names without the `data-` prefix
    /// (`product-id`, `product-name`, `product-price`, `product-image`).
    pub fn from_dataset(dataset: &BTreeMap<String, String>) -> Result<Self, OrderError> {
        let field = |key: &'static str| {
            dataset
                .get(&format!("product-{key}"))
                .cloned()
                .ok_or(OrderError::MissingAttribute(key))
        };
        Ok(Self::new(
            field("id")?,
            field("name")?,
            field("price")?,
            dataset.get("product-image").cloned(),
        ))
    }
}

/// A link to open, plus how to open it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepLink {
    pub url: String,
    pub target: &'static str,
    pub features: &'static str,
}

/// The pre-filled order message for `product`.
pub fn order_message(product: &Product) -> String {
    format!(
        "Hello! I'm interested in ordering:\n\
         \n\
         🆔 *Product ID: {id}*\n\
         📦 Product: {name}\n\
         💰 Price: {price}\n\
         \n\
         I saw this product on your website. Please let me know about availability and delivery details. Thank you!\n\
         \n\
         _Note: Please reference Product ID {id} for this order_",
        id = product.id,
        name = product.name,
        price = product.price,
    )
}

/// Percent-encode a URI component. Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
/// as they are, the same set a browser's `encodeURIComponent` keeps.
pub fn encode_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if matches!(c, '!' | '\'' | '(' | ')' | '*') {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(&text[i..i + c.len_utf8()]));
        }
    }
    out
}

/// Build the deep link that places an order for `product` with `phone`.
pub fn order_link(phone: &str, product: &Product) -> DeepLink {
    let message = order_message(product);
    DeepLink {
        url: format!("{WA_BASE}{phone}?text={}", encode_component(&message)),
        target: "_blank",
        features: "noopener,noreferrer",
    }
}
