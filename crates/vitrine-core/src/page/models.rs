use serde::{Deserialize, Serialize};

/// A complete landing page: metadata, nav links and ordered sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub meta: PageMeta,
    /// Links shown in the header and the nav menu
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    /// Public site URL, openable from the viewer
    #[serde(default)]
    pub site_url: Option<String>,
}

/// A nav entry pointing at a section anchor on the same page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Section id this link jumps to
    pub anchor: String,
}

/// One page section; `id` is the anchor target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub body: SectionBody,
}

/// Section content variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    /// Opening section: heading, lead text, optional call to action
    Hero {
        heading: String,
        #[serde(default)]
        lead: String,
        #[serde(default)]
        cta: Option<CallToAction>,
    },
    /// Plain paragraphs (feature blurbs, closing copy)
    Prose {
        #[serde(default)]
        paragraphs: Vec<String>,
    },
    /// The rotating card strip
    Gallery {
        #[serde(default)]
        cards: Vec<Card>,
    },
    /// Question/answer accordion
    Faq {
        #[serde(default)]
        entries: Vec<FaqEntry>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub url: String,
}

/// One gallery card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl Page {
    /// Index of the section with the given anchor id
    pub fn section_index(&self, anchor: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == anchor)
    }

    /// The gallery section's cards, if the page has a gallery
    pub fn gallery_cards(&self) -> &[Card] {
        self.sections
            .iter()
            .find_map(|s| match &s.body {
                SectionBody::Gallery { cards } => Some(cards.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// The FAQ section's entries, if the page has one
    pub fn faq_entries(&self) -> &[FaqEntry] {
        self.sections
            .iter()
            .find_map(|s| match &s.body {
                SectionBody::Faq { entries } => Some(entries.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Index of the FAQ section, if any
    pub fn faq_section_index(&self) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| matches!(s.body, SectionBody::Faq { .. }))
    }

    /// The hero call-to-action, if any
    pub fn hero_cta(&self) -> Option<&CallToAction> {
        self.sections.iter().find_map(|s| match &s.body {
            SectionBody::Hero { cta, .. } => cta.as_ref(),
            _ => None,
        })
    }
}
