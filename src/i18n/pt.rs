//! Portuguese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Caus Marcenaria");
    m.insert(Key::AppTagline, "Móveis sob medida");

    // Navigation
    m.insert(Key::NavHome, "Início");
    m.insert(Key::NavAbout, "Sobre");
    m.insert(Key::NavServices, "Serviços");
    m.insert(Key::NavProjects, "Projetos");
    m.insert(Key::NavProcess, "Processo");
    m.insert(Key::NavContact, "Contato");
    m.insert(Key::NavQuote, "Orçamento");
    m.insert(Key::MenuOpen, "Abrir menu");
    m.insert(Key::MenuClose, "Fechar menu");

    // Hero
    m.insert(Key::HeroEyebrow, "Marcenaria sob medida");
    m.insert(Key::HeroTitle, "Móveis planejados feitos para durar");
    m.insert(
        Key::HeroSubtitle,
        "Projeto, fabricação e instalação com acabamento de alto padrão.",
    );
    m.insert(Key::HeroCta, "Solicitar orçamento");
    m.insert(Key::HeroSecondaryCta, "Ver projetos");

    // About
    m.insert(Key::AboutTitle, "Sobre a Caus");
    m.insert(
        Key::AboutBody,
        "Somos uma marcenaria familiar que transforma ambientes com móveis \
         planejados. Cada peça é desenhada para o seu espaço e produzida na \
         nossa oficina com materiais selecionados.",
    );

    // Services
    m.insert(Key::ServicesTitle, "Serviços");
    m.insert(Key::ServiceKitchensTitle, "Cozinhas planejadas");
    m.insert(
        Key::ServiceKitchensBody,
        "Armários, ilhas e bancadas pensados para a sua rotina.",
    );
    m.insert(Key::ServiceClosetsTitle, "Closets e dormitórios");
    m.insert(
        Key::ServiceClosetsBody,
        "Organização sob medida com portas, gavetas e iluminação.",
    );
    m.insert(Key::ServiceCommercialTitle, "Ambientes comerciais");
    m.insert(
        Key::ServiceCommercialBody,
        "Recepções, lojas e escritórios com a identidade da sua marca.",
    );

    // Projects
    m.insert(Key::ProjectsTitle, "Projetos");
    m.insert(Key::ProjectsSubtitle, "Arraste para o lado ou use as setas.");
    m.insert(Key::CarouselResidential, "Residencial");
    m.insert(Key::CarouselCommercial, "Comercial");
    m.insert(Key::CarouselPrevious, "Anterior");
    m.insert(Key::CarouselNext, "Próximo");
    m.insert(Key::ImageMissing, "Imagem indisponível");

    // Process
    m.insert(Key::ProcessTitle, "Como trabalhamos");
    m.insert(Key::ProcessBriefingTitle, "Conversa inicial");
    m.insert(
        Key::ProcessBriefingBody,
        "Entendemos o ambiente, as medidas e o que você precisa.",
    );
    m.insert(Key::ProcessDesignTitle, "Projeto");
    m.insert(
        Key::ProcessDesignBody,
        "Apresentamos o desenho 3D e o orçamento detalhado.",
    );
    m.insert(Key::ProcessBuildTitle, "Produção");
    m.insert(
        Key::ProcessBuildBody,
        "Fabricamos cada peça na nossa oficina.",
    );
    m.insert(Key::ProcessInstallTitle, "Instalação");
    m.insert(
        Key::ProcessInstallBody,
        "Montagem limpa e entrega no prazo combinado.",
    );

    // Contact
    m.insert(Key::ContactTitle, "Vamos conversar?");
    m.insert(
        Key::ContactBody,
        "Envie as medidas do seu ambiente e receba um orçamento sem compromisso.",
    );
    m.insert(Key::ContactCta, "Falar no WhatsApp");
    m.insert(Key::ContactAddress, "Atendimento de segunda a sábado");

    // Footer
    m.insert(Key::FooterNote, "Caus Marcenaria. Todos os direitos reservados.");

    // Floating controls
    m.insert(Key::MiniCtaText, "Quer um orçamento rápido?");
    m.insert(Key::MiniCtaAction, "Chamar agora");
    m.insert(Key::MiniCtaClose, "Fechar");
    m.insert(Key::BackToTop, "Voltar ao topo");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
