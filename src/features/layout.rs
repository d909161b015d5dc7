//! Page geometry
//!
//! The landing page is a single column of fixed-height sections, so section
//! positions (for anchor scrolling and reveal checks) and the carousel width
//! can be derived from the viewport size alone. The view builds its sections
//! from the same numbers.

use iced::Size;

/// Single mobile/desktop breakpoint (inclusive)
pub const MOBILE_BREAKPOINT: f32 = 720.0;
/// Sticky header height
pub const HEADER_HEIGHT: f32 = 72.0;
pub const FOOTER_HEIGHT: f32 = 96.0;
/// Widest the content column gets
pub const MAX_CONTENT_WIDTH: f32 = 1120.0;

const PAGE_PADDING_DESKTOP: f32 = 32.0;
const PAGE_PADDING_MOBILE: f32 = 16.0;

/// Carousel slides are 3:2, as the source photos
const SLIDE_ASPECT: f32 = 1.5;
const MAX_CAROUSEL_HEIGHT: f32 = 560.0;
/// Carousel block height beyond the slides (label, dots)
const CAROUSEL_CHROME: f32 = 96.0;

pub fn is_mobile(viewport_width: f32) -> bool {
    viewport_width <= MOBILE_BREAKPOINT
}

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Projects,
    Process,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Projects,
        Section::Process,
        Section::Contact,
    ];

    /// Anchor fragment used by navigation links
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "#inicio",
            Section::About => "#sobre",
            Section::Services => "#servicos",
            Section::Projects => "#projetos",
            Section::Process => "#processo",
            Section::Contact => "#contato",
        }
    }

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }
}

/// Things revealed when scrolled into view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    AboutText,
    ServiceCard(u8),
    ProjectsIntro,
    ProcessStep(u8),
    ContactCard,
}

pub const SERVICE_CARDS: u8 = 3;
pub const PROCESS_STEPS: u8 = 4;

/// Geometry of one reveal target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSlot {
    pub target: RevealTarget,
    pub top: f32,
    pub height: f32,
    /// Stagger order within its group
    pub stagger: u32,
}

/// Section and block geometry for one viewport size
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    viewport: Size,
    content_width: f32,
    carousel_height: f32,
    heights: [f32; 6],
}

impl PageLayout {
    pub fn new(viewport: Size) -> Self {
        let mobile = is_mobile(viewport.width);
        let padding = if mobile {
            PAGE_PADDING_MOBILE
        } else {
            PAGE_PADDING_DESKTOP
        };
        let content_width = (viewport.width - padding * 2.0).clamp(0.0, MAX_CONTENT_WIDTH);
        let carousel_height = (content_width / SLIDE_ASPECT).min(MAX_CAROUSEL_HEIGHT);

        let (hero, about, services, process, contact) = if mobile {
            (560.0, 520.0, 3.0 * 220.0 + 160.0, 4.0 * 150.0 + 160.0, 460.0)
        } else {
            (640.0, 440.0, 460.0, 420.0, 420.0)
        };
        let projects = 160.0 + 2.0 * (carousel_height + CAROUSEL_CHROME);

        Self {
            viewport,
            content_width,
            carousel_height,
            heights: [hero, about, services, projects, process, contact],
        }
    }

    pub fn is_mobile(&self) -> bool {
        is_mobile(self.viewport.width)
    }

    /// Live width of the content column (and each carousel)
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn carousel_height(&self) -> f32 {
        self.carousel_height
    }

    pub fn section_height(&self, section: Section) -> f32 {
        self.heights[section.index()]
    }

    /// Document offset of a section's top edge
    pub fn section_top(&self, section: Section) -> f32 {
        self.heights[..section.index()].iter().sum()
    }

    /// Total scrollable document height
    pub fn document_height(&self) -> f32 {
        self.heights.iter().sum::<f32>() + FOOTER_HEIGHT
    }

    /// Largest offset the page can scroll to
    pub fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    /// Scroll offset that puts a section just under the sticky header,
    /// limited to where the page can actually scroll
    pub fn anchor_offset(&self, section: Section) -> f32 {
        super::scroll::anchor_offset(self.section_top(section), HEADER_HEIGHT)
            .min(self.max_scroll())
    }

    /// Reveal targets with their document geometry
    pub fn reveal_slots(&self) -> Vec<RevealSlot> {
        let mobile = self.is_mobile();
        let mut slots = Vec::new();

        let about = self.section_top(Section::About);
        slots.push(RevealSlot {
            target: RevealTarget::AboutText,
            top: about + 80.0,
            height: self.section_height(Section::About) - 160.0,
            stagger: 0,
        });

        let services = self.section_top(Section::Services) + 140.0;
        for i in 0..SERVICE_CARDS {
            let (top, height) = if mobile {
                (services + f32::from(i) * 220.0, 200.0)
            } else {
                (services, 260.0)
            };
            slots.push(RevealSlot {
                target: RevealTarget::ServiceCard(i),
                top,
                height,
                stagger: u32::from(i),
            });
        }

        slots.push(RevealSlot {
            target: RevealTarget::ProjectsIntro,
            top: self.section_top(Section::Projects) + 64.0,
            height: 80.0,
            stagger: 0,
        });

        let process = self.section_top(Section::Process) + 140.0;
        for i in 0..PROCESS_STEPS {
            let (top, height) = if mobile {
                (process + f32::from(i) * 150.0, 130.0)
            } else {
                (process, 220.0)
            };
            slots.push(RevealSlot {
                target: RevealTarget::ProcessStep(i),
                top,
                height,
                stagger: u32::from(i),
            });
        }

        slots.push(RevealSlot {
            target: RevealTarget::ContactCard,
            top: self.section_top(Section::Contact) + 80.0,
            height: self.section_height(Section::Contact) - 160.0,
            stagger: 1,
        });

        slots
    }
}
