//! Static guidance per content template.
//!
//! The table is built once on first access and never mutated afterwards.
//! Lookups are exact: a key that is not in the table is a normal case and
//! resolves to [`GENERIC_HINT`].

use std::{collections::HashMap, sync::LazyLock};

/// Hint used for template keys without dedicated guidance.
pub const GENERIC_HINT: &str = "Gi gode, varierte idéforslag knyttet til temaet.";

static TEMPLATE_HINTS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (
            "Dagens kaffeprat",
            "Gi korte, konkrete tema-forslag som kan diskuteres på 5 minutter i et teammøte.",
        ),
        (
            "Tips og triks i Runwell",
            "Gi tips som hjelper praktisk bruk av Runwell i daglig drift.",
        ),
        (
            "Fakta fredag",
            "Gi små «visste du at?»-fakta relatert til internkontroll og horeca som engasjerer.",
        ),
        (
            "Behind the scenes",
            "Gi idéer som viser ekte innsikt i drift, mennesker og prosesser.",
        ),
        (
            "Riktig rutine – uke",
            "Gi forslag til ukens rutiner og oppgaver som bør fremheves for teamet.",
        ),
        (
            "FAQ / Myteknuser",
            "Gi forslag til spørsmål og myter kunder eller ansatte ofte har, med vinkling til å oppklare.",
        ),
    ])
});

/// Guidance for `template`, or [`GENERIC_HINT`] when the key is unknown.
pub fn template_hint(template: &str) -> &'static str {
    TEMPLATE_HINTS
        .get(template)
        .copied()
        .unwrap_or(GENERIC_HINT)
}

/// Whether `template` has dedicated guidance.
pub fn is_known_template(template: &str) -> bool {
    TEMPLATE_HINTS.contains_key(template)
}

/// Every template key with dedicated guidance, sorted.
pub fn known_templates() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = TEMPLATE_HINTS.keys().copied().collect();
    keys.sort_unstable();
    keys
}
