// Fixed, pre-written safety copy. The matched term is never interpolated.

use serde::Serialize;

use crate::moderation::registry::Language;

/// The friendly message shown when a field fails screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetyMessage {
    /// Short line shown under a flagged field
    pub inline: &'static str,
    /// Title of the blocking dialog at submission time
    pub modal_title: &'static str,
    /// Body of the blocking dialog at submission time
    pub modal_body: &'static str,
}

impl SafetyMessage {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => SafetyMessage {
                inline: "Let's keep it kind and magical! Please choose different words.",
                modal_title: "Let's keep it kind and magical",
                modal_body: "Some of the words you entered aren't right for a bedtime story. \
                             Please change them and try again.",
            },
            Language::Spanish => SafetyMessage {
                inline: "¡Mantengámoslo amable y mágico! Por favor, elige otras palabras.",
                modal_title: "Mantengámoslo amable y mágico",
                modal_body: "Algunas de las palabras que escribiste no son adecuadas para un \
                             cuento para dormir. Cámbialas e inténtalo de nuevo.",
            },
            Language::French => SafetyMessage {
                inline: "Restons gentils et magiques ! Merci de choisir d'autres mots.",
                modal_title: "Restons gentils et magiques",
                modal_body: "Certains mots saisis ne conviennent pas à une histoire du soir. \
                             Merci de les modifier et de réessayer.",
            },
            Language::Portuguese => SafetyMessage {
                inline: "Vamos manter tudo gentil e mágico! Por favor, escolha outras palavras.",
                modal_title: "Vamos manter tudo gentil e mágico",
                modal_body: "Algumas palavras que você digitou não combinam com uma história \
                             de ninar. Troque-as e tente novamente.",
            },
        }
    }
}
