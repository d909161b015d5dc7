//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Caus Marcenaria");
    m.insert(Key::AppTagline, "Custom furniture");

    // Navigation
    m.insert(Key::NavHome, "Home");
    m.insert(Key::NavAbout, "About");
    m.insert(Key::NavServices, "Services");
    m.insert(Key::NavProjects, "Projects");
    m.insert(Key::NavProcess, "Process");
    m.insert(Key::NavContact, "Contact");
    m.insert(Key::NavQuote, "Get a quote");
    m.insert(Key::MenuOpen, "Open menu");
    m.insert(Key::MenuClose, "Close menu");

    // Hero
    m.insert(Key::HeroEyebrow, "Bespoke woodwork");
    m.insert(Key::HeroTitle, "Made-to-measure furniture built to last");
    m.insert(
        Key::HeroSubtitle,
        "Design, fabrication and installation with a premium finish.",
    );
    m.insert(Key::HeroCta, "Request a quote");
    m.insert(Key::HeroSecondaryCta, "See projects");

    // About
    m.insert(Key::AboutTitle, "About Caus");
    m.insert(
        Key::AboutBody,
        "We are a family woodshop transforming rooms with made-to-measure \
         furniture. Every piece is drawn for your space and built in our \
         workshop from selected materials.",
    );

    // Services
    m.insert(Key::ServicesTitle, "Services");
    m.insert(Key::ServiceKitchensTitle, "Fitted kitchens");
    m.insert(
        Key::ServiceKitchensBody,
        "Cabinets, islands and counters shaped around your routine.",
    );
    m.insert(Key::ServiceClosetsTitle, "Closets and bedrooms");
    m.insert(
        Key::ServiceClosetsBody,
        "Custom storage with doors, drawers and lighting.",
    );
    m.insert(Key::ServiceCommercialTitle, "Commercial spaces");
    m.insert(
        Key::ServiceCommercialBody,
        "Receptions, shops and offices that carry your brand.",
    );

    // Projects
    m.insert(Key::ProjectsTitle, "Projects");
    m.insert(Key::ProjectsSubtitle, "Drag sideways or use the arrows.");
    m.insert(Key::CarouselResidential, "Residential");
    m.insert(Key::CarouselCommercial, "Commercial");
    m.insert(Key::CarouselPrevious, "Previous");
    m.insert(Key::CarouselNext, "Next");
    m.insert(Key::ImageMissing, "Image unavailable");

    // Process
    m.insert(Key::ProcessTitle, "How we work");
    m.insert(Key::ProcessBriefingTitle, "First talk");
    m.insert(
        Key::ProcessBriefingBody,
        "We learn the room, the measurements and what you need.",
    );
    m.insert(Key::ProcessDesignTitle, "Design");
    m.insert(
        Key::ProcessDesignBody,
        "You get a 3D drawing and a detailed quote.",
    );
    m.insert(Key::ProcessBuildTitle, "Production");
    m.insert(Key::ProcessBuildBody, "Every piece is built in our workshop.");
    m.insert(Key::ProcessInstallTitle, "Installation");
    m.insert(
        Key::ProcessInstallBody,
        "Clean assembly, delivered on the agreed date.",
    );

    // Contact
    m.insert(Key::ContactTitle, "Shall we talk?");
    m.insert(
        Key::ContactBody,
        "Send us your room measurements and get a free quote.",
    );
    m.insert(Key::ContactCta, "Chat on WhatsApp");
    m.insert(Key::ContactAddress, "Open Monday to Saturday");

    // Footer
    m.insert(Key::FooterNote, "Caus Marcenaria. All rights reserved.");

    // Floating controls
    m.insert(Key::MiniCtaText, "Want a quick quote?");
    m.insert(Key::MiniCtaAction, "Message us");
    m.insert(Key::MiniCtaClose, "Close");
    m.insert(Key::BackToTop, "Back to top");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
