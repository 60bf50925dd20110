//! Server-rendered views.
//!
//! The showcase ships without a template engine; [`BasicPages`] assembles the
//! handful of views with plain string building. [`PageRenderer`] is the seam
//! where a real engine would plug in, which is also what lets tests inject a
//! renderer that fails on purpose.

use raro_catalog::{Product, RecentPurchase};

use crate::app::errors::RenderError;

/// Message shown when an item (or the page for it) no longer exists.
pub const GONE_MESSAGE: &str =
    "Desapareceu para sempre. Você nunca mais verá isso novamente.";

/// Renders the showcase's views.
pub trait PageRenderer: Send + Sync {
    /// The gated landing page: available products plus the purchase ticker.
    fn showcase(
        &self,
        products: &[Product],
        feed: &[RecentPurchase],
    ) -> Result<String, RenderError>;

    /// The invitation form, optionally with a rejection message.
    fn invitation(&self, error: Option<&str>) -> Result<String, RenderError>;

    /// The detail page for one available product.
    fn product(&self, product: &Product) -> Result<String, RenderError>;

    /// The page for items that are sold out or were never there.
    fn gone(&self) -> Result<String, RenderError>;
}

/// The stock renderer: plain HTML, no external assets.
#[derive(Debug, Default)]
pub struct BasicPages;

impl BasicPages {
    fn chrome(title: &str, body: &str) -> String {
        format!(
            "<!doctype html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{} | RARO</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            esc(title),
            body
        )
    }

    fn product_card(product: &Product) -> String {
        format!(
            "<article class=\"product-card\">\n\
             <h2><a href=\"/product/{id}\">{name}</a></h2>\n\
             <p class=\"price\">R$ {price}</p>\n\
             <p class=\"origin\">{origin}</p>\n\
             <p class=\"scarcity\">Restam {quantity}</p>\n\
             <span class=\"countdown\" data-end-time=\"{end}\"></span>\n\
             <button class=\"purchase-button\" data-product-id=\"{id}\">Adquirir</button>\n\
             </article>",
            id = product.id,
            name = esc(&product.name),
            price = product.price,
            origin = esc(&product.origin),
            quantity = product.quantity,
            end = product.end_time.to_rfc3339(),
        )
    }

    fn ticker(feed: &[RecentPurchase]) -> String {
        if feed.is_empty() {
            return String::new();
        }
        let entries: String = feed
            .iter()
            .map(|entry| {
                format!(
                    "<li><span class=\"item\">{}</span> <span class=\"buyer\">{}</span> \
                     <span class=\"time\">{}</span></li>\n",
                    esc(&entry.item),
                    esc(&entry.buyer),
                    esc(&entry.time),
                )
            })
            .collect();
        format!(
            "<aside class=\"recent-purchases\">\n<h2>Aquisições recentes</h2>\n<ul>\n{entries}</ul>\n</aside>"
        )
    }

    // Same flow as the storefront's client script: POST, read the JSON
    // verdict, surface the message, reload so stock counts refresh.
    const PURCHASE_SCRIPT: &'static str = "<script>\n\
document.querySelectorAll('.purchase-button').forEach((button) => {\n\
  button.addEventListener('click', async () => {\n\
    button.disabled = true;\n\
    const response = await fetch('/purchase/' + button.dataset.productId, { method: 'POST' });\n\
    const result = await response.json();\n\
    alert(result.message);\n\
    if (result.success) {\n\
      window.location.reload();\n\
    } else {\n\
      button.disabled = false;\n\
    }\n\
  });\n\
});\n\
</script>";
}

impl PageRenderer for BasicPages {
    fn showcase(
        &self,
        products: &[Product],
        feed: &[RecentPurchase],
    ) -> Result<String, RenderError> {
        let cards = if products.is_empty() {
            "<p class=\"empty\">A coleção se esgotou.</p>".to_string()
        } else {
            products
                .iter()
                .map(Self::product_card)
                .collect::<Vec<_>>()
                .join("\n")
        };

        let body = format!(
            "<header>\n<h1>RARO</h1>\n<a class=\"logout\" href=\"/logout\">Sair</a>\n</header>\n\
             <main class=\"products\">\n{cards}\n</main>\n{ticker}\n{script}",
            ticker = Self::ticker(feed),
            script = Self::PURCHASE_SCRIPT,
        );
        Ok(Self::chrome("Coleção", &body))
    }

    fn invitation(&self, error: Option<&str>) -> Result<String, RenderError> {
        let notice = match error {
            Some(message) => format!("<p class=\"error\">{}</p>\n", esc(message)),
            None => String::new(),
        };
        let body = format!(
            "<main class=\"invitation\">\n<h1>RARO</h1>\n<p>Apenas por convite.</p>\n{notice}\
             <form method=\"post\" action=\"/invitation\">\n\
             <input type=\"text\" name=\"code\" placeholder=\"Código de convite\" autofocus>\n\
             <button type=\"submit\">Entrar</button>\n\
             </form>\n</main>"
        );
        Ok(Self::chrome("Convite", &body))
    }

    fn product(&self, product: &Product) -> Result<String, RenderError> {
        let body = format!(
            "<main class=\"product-detail\">\n\
             <h1>{name}</h1>\n\
             <p class=\"category\">{category}</p>\n\
             <p class=\"price\">R$ {price} ({currency})</p>\n\
             <p class=\"origin\">{origin}</p>\n\
             <p class=\"story\">{story}</p>\n\
             <p class=\"scarcity\">Restam {quantity}</p>\n\
             <span class=\"countdown\" data-end-time=\"{end}\"></span>\n\
             <button class=\"purchase-button\" data-product-id=\"{id}\">Adquirir</button>\n\
             <p><a href=\"/\">Voltar à coleção</a></p>\n\
             </main>\n{script}",
            id = product.id,
            name = esc(&product.name),
            category = esc(&product.category),
            price = product.price,
            currency = esc(&product.currency),
            origin = esc(&product.origin),
            story = esc(&product.story),
            quantity = product.quantity,
            end = product.end_time.to_rfc3339(),
            script = Self::PURCHASE_SCRIPT,
        );
        Ok(Self::chrome(&product.name, &body))
    }

    fn gone(&self) -> Result<String, RenderError> {
        let body = format!(
            "<main class=\"gone\">\n<h1>RARO</h1>\n<p>{}</p>\n\
             <p><a href=\"/\">Voltar à coleção</a></p>\n</main>",
            esc(GONE_MESSAGE)
        );
        Ok(Self::chrome("Indisponível", &body))
    }
}

/// Minimal HTML escaping for text interpolated into views.
fn esc(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
