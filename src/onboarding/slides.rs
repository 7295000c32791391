//! Slide content. Data, not logic.

use serde::Serialize;

/// One step of the onboarding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Icon reference resolved by the rendering layer.
    pub icon: &'static str,
}

/// The fixed ordered slide list.
pub static SLIDES: [Slide; 3] = [
    Slide {
        key: "demo",
        title: "Repo demo, setup rápido",
        description: "Este app é um exemplo com telas isoladas e componentes \
                      reutilizáveis. Tudo pronto para você copiar e adaptar.",
        icon: "sparkles",
    },
    Slide {
        key: "ui",
        title: "UI consistente",
        description: "Componentes prontos e estilos por tokens: cores, tipografia \
                      e espaçamentos com suporte a light/dark.",
        icon: "shield-check",
    },
    Slide {
        key: "dx",
        title: "Dev experience",
        description: "Estrutura simples, telas isoladas, navegação direta e fácil \
                      de estender com autenticação, API e estado global.",
        icon: "zap",
    },
];
