//! Fixed page content: the project slide lists
//!
//! Images live under `assets/projetos/` relative to the asset root; swap the
//! files to change the photos without touching the lists.

use crate::features::SlideItem;
use crate::i18n::Key;

/// The two carousels on the projects section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselId {
    Residential,
    Commercial,
}

impl CarouselId {
    pub const ALL: [CarouselId; 2] = [CarouselId::Residential, CarouselId::Commercial];

    /// Identifier the carousel is tagged with
    pub fn tag(&self) -> &'static str {
        match self {
            CarouselId::Residential => "residencial",
            CarouselId::Commercial => "comercial",
        }
    }

    pub fn label(&self) -> Key {
        match self {
            CarouselId::Residential => Key::CarouselResidential,
            CarouselId::Commercial => Key::CarouselCommercial,
        }
    }

    /// Slides shown by this carousel
    pub fn slides(&self) -> Vec<SlideItem> {
        let list: &[(&str, &str)] = match self {
            CarouselId::Residential => &[
                ("assets/projetos/01.jpg", "Cozinha planejada"),
                ("assets/projetos/02.jpg", "Closet sob medida"),
                ("assets/projetos/03.jpg", "Painel de TV premium"),
            ],
            CarouselId::Commercial => &[
                ("assets/projetos/04.jpg", "Recepção comercial"),
                ("assets/projetos/05.jpg", "Mobiliário para loja"),
                ("assets/projetos/06.jpg", "Escritório sob medida"),
            ],
        };
        list.iter()
            .map(|(image, caption)| SlideItem::new(*image, *caption))
            .collect()
    }
}
